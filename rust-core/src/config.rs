// Constants

// Tolerances
pub const GEOMETRY_TOLERANCE: f64 = 1e-6; // For coincidence tests between primitives (nm)
pub const ANGLE_TOLERANCE: f64 = 1e-9; // For angular comparisons (rad)
pub const GRID_TOLERANCE: f64 = 1e-9; // Relative slack when checking that a box size divides the container

// Sampling
pub const ARC_SAMPLES: usize = 32; // Polyline resolution for arcs where a closed form is not worth it
pub const CONTAINMENT_SAMPLE_STEP: f64 = 0.125; // Navigator step for closed containment of segments

// Generation
pub const MIN_GENERATION_WEIGHT: f64 = 0.01; // Floor for box weights so every box stays reachable
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;
pub const DEFAULT_CHEMICAL_RANGE: f64 = 100.0; // nm
pub const DEFAULT_TIME_STEP: f64 = 1e-9; // s
