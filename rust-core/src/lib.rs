//! Clay/sand discrete element library
//!
//! This library provides the 2D computational-geometry kernel, the grid-based contact
//! detection and the particle generation used by a DEM model of soils made of plate-like
//! clay and disc-like sand particles.

pub mod config;
pub mod container;
pub mod errors;
pub mod geometries;
pub mod particles;

pub use errors::{DemError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
