use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "molspring CLI - Derives first-, second-, and third-order bond graphs from a molecular structure for force-directed layout.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive the annotated bond graph of a structure and emit it as a graph document.
    Derive(DeriveArgs),
}

/// Arguments for the `derive` subcommand.
#[derive(Args, Debug)]
pub struct DeriveArgs {
    /// Path to the structure input JSON document ({"atoms": [...], "bonds": [...]}).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output graph document. Defaults to stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a layout tuning profile in TOML format.
    /// Missing fields fall back to the built-in defaults.
    #[arg(short, long, value_name = "PATH")]
    pub tuning: Option<PathBuf>,

    /// Uniformize ring spring lengths: secondary ring distances are replaced by
    /// their mean, and the three tertiary closure distances by theirs.
    #[arg(long)]
    pub smooth_ring_distances: bool,

    /// Pretty-print the emitted JSON document.
    #[arg(long)]
    pub pretty: bool,
}
