// Container module: grid-based contact detection and particle generation
// This module provides the container that stores particles, indexes them in per-group box grids,
// maintains the contact maps and places new particles without overlap

// ======================== MODULE DECLARATIONS ========================
pub mod container2d;
pub mod container_config;
pub mod generation;
pub mod grid;


// ======================== CONFIGURATION ========================
pub use container_config::{
    ContainerConfig,        // struct - container dimensions, simulation mode and particle groups
    ContainerConfigBuilder, // struct - builder validating on build()
    ParticleGroupSpec,      // struct - mineral, size bounds, quantity, thickness, segments
    SimulationType,         // enum - settling or compression
};
// ContainerConfig impl methods:
//   from_json_str(json: &str) -> Result<Self>                - parse and validate
//   validate(&self) -> Result<()>                            - dimensions, ranges and groups
//   builder(length: f64, width: f64) -> ContainerConfigBuilder

// ======================== GRID ========================
pub use grid::{
    box_num, // fn - row-major box number of a point
    Grid,    // struct - rows, columns and box sizes of one group
};
// Grid impl methods:
//   mechanical(length, width, box_size) -> Result<Self>      - boxes must divide the container
//   chemical(length, width, min_box_size) -> Self            - smallest even division at least min_box_size wide
//   primary_box(point) -> usize                              - box of a point, clamped to the grid
//   touching_boxes(shape, primary_box) -> Vec<usize>         - boxes the shape overlaps
//   boxes_within(shape, primary_box, reach) -> Vec<usize>    - boxes within reach of the shape
//   box_rectangle / box_center / ring / row_column

// ======================== CONTAINER ========================
pub use container2d::{
    pair_count, // fn - unordered pairs of a contact map
    BoxIndex,   // type - particle lists per group and box
    Container,  // struct - particle arena, box indexes and contact maps
};
// Container impl methods:
//   new(config) -> Result<Self>
//   add_particle / add_family / remove_particle / move_particle / move_wall
//   update_mechanical_boxes / update_chemical_boxes
//   single_particle_mechanical_contact_check(particle) -> bool
//   particle_wall_contact_check(shape) -> bool
//   update_mechanical_contacts_dictionary / update_chemical_contacts_dictionary / update_wall_contacts_list
//   refresh()                                                - every index and map at once

// ======================== GENERATION ========================
pub use generation::GenerationBoxes; // struct - box weights with update order
// Container generation methods:
//   generate_particles() -> Result<Vec<ParticleId>>          - largest group first
//   generation_boxes(hierarchy) -> GenerationBoxes           - weights given the stored particles
//   reduce_generation_chance(boxes, id) -> Result<()>        - ring-by-ring weight decay
