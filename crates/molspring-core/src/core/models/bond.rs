use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Classifies an edge by how many primary bonds separate its endpoints.
///
/// Order 1 is an explicit chemical bond supplied by the structure reader; orders 2
/// and 3 are derived "virtual" bonds used by the layout simulation to apply distinct
/// spring forces at each separation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BondOrder {
    /// Direct chemical bond between two atoms.
    Primary,
    /// Derived relation between atoms exactly two primary bonds apart.
    Secondary,
    /// Derived relation between atoms three primary bonds apart, excluding
    /// pairs already directly bonded.
    Tertiary,
}

impl BondOrder {
    /// All orders, lowest first. Iteration over per-order data follows this sequence.
    pub const ALL: [BondOrder; 3] = [BondOrder::Primary, BondOrder::Secondary, BondOrder::Tertiary];

    /// Dense index for per-order tables (`Primary` = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The numeric order (1, 2, or 3) as used in logs and external documents.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }
}

impl Default for BondOrder {
    fn default() -> Self {
        BondOrder::Primary
    }
}

#[derive(Debug, Error)]
#[error("Invalid bond order string")]
pub struct ParseBondOrderError;

impl FromStr for BondOrder {
    type Err = ParseBondOrderError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" | "p" | "primary" => Ok(Self::Primary),
            "2" | "s" | "secondary" => Ok(Self::Secondary),
            "3" | "t" | "tertiary" => Ok(Self::Tertiary),
            _ => Err(ParseBondOrderError),
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Primary => "Primary",
                Self::Secondary => "Secondary",
                Self::Tertiary => "Tertiary",
            }
        )
    }
}
