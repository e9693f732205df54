use crate::cli::DeriveArgs;
use crate::error::{CliError, Result};
use crate::progress::CliProgressHandler;
use molspring::{
    core::layout::LayoutTuning,
    core::models::records::{DerivedAtom, DerivedEdge, StructureInput},
    core::utils::elements,
    engine::config::DerivationConfig,
    engine::progress::ProgressReporter,
    workflows,
};
use serde::Serialize;
use std::fs;
use std::io::Write;
use tracing::{info, warn};

/// The finished graph document handed to the rendering/simulation frontend:
/// annotated atoms with display sizes, one edge list per bond order, and the
/// layout tuning profile the simulation should apply.
#[derive(Debug, Serialize)]
pub struct GraphDocument {
    pub atoms: Vec<GraphNode>,
    pub primary: Vec<DerivedEdge>,
    pub secondary: Vec<DerivedEdge>,
    pub tertiary: Vec<DerivedEdge>,
    pub tuning: LayoutTuning,
}

#[derive(Debug, Serialize)]
pub struct GraphNode {
    #[serde(flatten)]
    pub atom: DerivedAtom,
    /// Renderer display size for this node's element.
    pub size: u32,
}

pub fn run(args: DeriveArgs) -> Result<()> {
    info!("Loading structure input from {:?}", &args.input);
    let content = fs::read_to_string(&args.input)?;
    let input: StructureInput =
        serde_json::from_str(&content).map_err(|e| CliError::StructureParsing {
            path: args.input.clone(),
            source: e,
        })?;

    let tuning = match &args.tuning {
        Some(path) => {
            info!("Loading layout tuning profile from {:?}", path);
            LayoutTuning::load(path)?
        }
        None => LayoutTuning::default(),
    };

    let config = DerivationConfig {
        smooth_ring_distances: args.smooth_ring_distances,
    };

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core derivation workflow...");
    let graph = workflows::derive::run(&input, &config, &reporter)?;

    if graph.primary.is_empty() {
        warn!("Derivation produced no primary edges; the document will carry empty edge sets.");
    }

    let document = GraphDocument {
        atoms: graph
            .atoms
            .into_iter()
            .map(|atom| {
                let size = elements::display_size(&atom.element);
                GraphNode { atom, size }
            })
            .collect(),
        primary: graph.primary,
        secondary: graph.secondary,
        tertiary: graph.tertiary,
        tuning,
    };

    let serialized = if args.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, serialized)?;
            info!("Graph document written to {:?}", path);
            println!("✓ Graph document written to: {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(serialized.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
