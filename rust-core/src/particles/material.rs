// Material module: mineral definitions for the particles of the soil model
// This module provides the density and admissible size ranges of every mineral a particle can be made of

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Geometric family of a mineral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MineralKind {
    /// Plate-like particles modelled by a midline and a thickness
    Clay,
    /// Disc-like particles modelled by a circle
    Sand,
}

/// Mineral a particle is made of
///
/// Sizes are in nanometres, densities in kg/m³. For clay minerals the group size
/// bounds refer to the plate length, for sand minerals to the grain diameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mineral {
    #[serde(alias = "kaolinite")]
    Kaolinite,
    #[serde(alias = "montmorillonite")]
    Montmorillonite,
    #[serde(alias = "illite")]
    Illite,
    #[serde(alias = "quartz")]
    Quartz,
}

impl Mineral {
    pub const ALL: [Mineral; 4] = [
        Mineral::Kaolinite,
        Mineral::Montmorillonite,
        Mineral::Illite,
        Mineral::Quartz,
    ];

    pub fn kind(&self) -> MineralKind {
        match self {
            Mineral::Kaolinite | Mineral::Montmorillonite | Mineral::Illite => MineralKind::Clay,
            Mineral::Quartz => MineralKind::Sand,
        }
    }

    pub fn is_clay(&self) -> bool {
        self.kind() == MineralKind::Clay
    }

    /// Density in kg/m³
    pub fn density(&self) -> f64 {
        match self {
            Mineral::Kaolinite => 2650.0,
            Mineral::Montmorillonite => 2350.0,
            Mineral::Illite => 2750.0,
            Mineral::Quartz => 2650.0,
        }
    }

    /// Admissible range of the size the group bounds refer to (length or diameter)
    pub fn size_range(&self) -> RangeInclusive<f64> {
        match self {
            Mineral::Kaolinite => 100.0..=5000.0,
            Mineral::Montmorillonite => 10.0..=1000.0,
            Mineral::Illite => 100.0..=3000.0,
            Mineral::Quartz => 1000.0..=2_000_000.0,
        }
    }

    /// Admissible plate thickness, `None` for sand
    pub fn thickness_range(&self) -> Option<RangeInclusive<f64>> {
        match self {
            Mineral::Kaolinite => Some(10.0..=1000.0),
            Mineral::Montmorillonite => Some(1.0..=10.0),
            Mineral::Illite => Some(10.0..=300.0),
            Mineral::Quartz => None,
        }
    }

    /// Thickness used when a clay group does not specify one
    pub fn default_thickness(&self) -> Option<f64> {
        match self {
            Mineral::Kaolinite => Some(50.0),
            Mineral::Montmorillonite => Some(1.0),
            Mineral::Illite => Some(20.0),
            Mineral::Quartz => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mineral::Kaolinite => "Kaolinite",
            Mineral::Montmorillonite => "Montmorillonite",
            Mineral::Illite => "Illite",
            Mineral::Quartz => "Quartz",
        }
    }
}

impl fmt::Display for Mineral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
