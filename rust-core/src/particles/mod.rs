// Particles module: sand and clay particles, their minerals and the container walls
// This module provides the particle records the container stores and indexes

// ======================== MODULE DECLARATIONS ========================
pub mod material;
pub mod particle;
pub mod wall;


// ======================== MATERIALS ========================
pub use material::{
    Mineral,     // enum - Kaolinite, Montmorillonite, Illite or Quartz
    MineralKind, // enum - clay or sand
};
// Mineral impl methods:
//   kind / is_clay / density / name
//   size_range() -> RangeInclusive<f64>                      - admissible length (clay) or diameter (sand)
//   thickness_range() -> Option<RangeInclusive<f64>>         - admissible plate thickness, None for sand
//   default_thickness() -> Option<f64>                       - thickness used when a group gives none

// ======================== PARTICLES ========================
pub use particle::{
    area,              // fn - in-plane area of a particle kind (nm²)
    mass,              // fn - mass for a unit depth of 1 nm (kg)
    moment_of_inertia, // fn - disc or thin plate moment of inertia (kg·m²)
    shape,             // fn - contact shape of a particle kind at a given state
    Kinematics,        // struct - position, inclination, velocities and accumulators
    Particle,          // struct - arena record with cached contact shape
    ParticleId,        // struct - never reused arena identity
    ParticleKind,      // enum - sand disc or clay plate
};
// Particle impl methods:
//   sand(mineral, center, diameter, hierarchy) -> Result<Self>
//   clay(mineral, center, length, thickness, inclination, hierarchy) -> Result<Self>
//   clay_segments(..., segments) -> Result<Vec<Self>>        - plate split into collinear pieces
//   shape / midline / bounding_box / mass / moment_of_inertia / same_family
//   move_by(dx, dy, dtheta) / move_to(position)              - rebuilds midline and shape together

// ======================== WALLS ========================
pub use wall::{
    Wall,         // struct - container side as a segment
    WallPosition, // enum - left, right, bottom or top
};
