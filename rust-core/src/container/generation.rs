// Generation module: random non-overlapping placement of the configured particle groups
// Boxes near placed particles lose weight so later draws favour empty regions

use log::{debug, info, trace, warn};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use std::f64::consts::PI;

use crate::config::MIN_GENERATION_WEIGHT;
use crate::container::container2d::{Container, Layer};
use crate::container::grid::Grid;
use crate::errors::{DemError, Result};
use crate::geometries::{distance, Geometry2D, Point, Shape};
use crate::particles::{MineralKind, Particle, ParticleId};

/// Sampling weights of the boxes of one grid
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationBoxes {
    pub weights: Vec<f64>,
    /// Update stamp per box, 0 for boxes never lowered
    last_update: Vec<u64>,
    clock: u64,
}

impl GenerationBoxes {
    /// Every box equally likely
    pub fn new(box_count: usize) -> Self {
        Self {
            weights: vec![1.0; box_count],
            last_update: vec![0; box_count],
            clock: 0,
        }
    }

    /// Lower the weights of the boxes around `shape`
    ///
    /// Rings of boxes are visited outward from the primary box. A box whose centre lies at
    /// signed distance `d` from the shape gets the factor `clamp(d / R, 0.01, 1)` with `R`
    /// the box length, and keeps the smaller of its weight and that factor. The walk stops
    /// after the first ring the shape no longer influences.
    pub fn reduce_around(&mut self, grid: &Grid, shape: &Shape) {
        let primary = grid.primary_box(&shape.reference_point());
        let reach = grid.box_length;

        for radius in 0..=grid.max_ring() {
            let mut influenced = false;
            for box_index in grid.ring(primary, radius) {
                let d = distance(&Shape::Point(grid.box_center(box_index)), shape);
                let factor = (d / reach).clamp(MIN_GENERATION_WEIGHT, 1.0);
                if factor >= 1.0 {
                    continue;
                }
                influenced = true;
                if factor < self.weights[box_index] {
                    self.weights[box_index] = factor;
                    self.clock += 1;
                    self.last_update[box_index] = self.clock;
                }
            }
            if !influenced {
                trace!("Weight decay around box {} stopped at ring {}", primary, radius);
                break;
            }
        }
    }

    /// Up to `n` boxes whose weight changed most recently, newest first
    pub fn last_modified(&self, n: usize) -> Vec<usize> {
        let mut touched: Vec<usize> = (0..self.last_update.len())
            .filter(|&index| self.last_update[index] > 0)
            .collect();
        touched.sort_by(|a, b| self.last_update[*b].cmp(&self.last_update[*a]));
        touched.truncate(n);
        touched
    }

    fn sampler(&self) -> Result<WeightedIndex<f64>> {
        WeightedIndex::new(&self.weights)
            .map_err(|e| DemError::invalid(format!("Generation weights unusable: {}", e)))
    }
}

impl Container {
    /// Place every configured particle, largest group first
    ///
    /// # Errors
    /// `GenerationFailed` when a particle cannot be placed within `max_attempts` draws.
    pub fn generate_particles(&mut self) -> Result<Vec<ParticleId>> {
        let mut placed = Vec::new();
        for hierarchy in 0..self.groups.len() {
            placed.extend(self.generate_group(hierarchy)?);
        }
        info!("Generated {} particles in {} groups", placed.len(), self.groups.len());
        Ok(placed)
    }

    /// Generation weights of a group's grid given the particles already stored
    pub fn generation_boxes(&self, hierarchy: usize) -> GenerationBoxes {
        let grid = &self.mechanical_grids[hierarchy];
        let mut boxes = GenerationBoxes::new(grid.box_count());
        for particle in self.particles() {
            boxes.reduce_around(grid, particle.shape());
        }
        boxes
    }

    /// Lower the generation weights around a stored particle
    pub fn reduce_generation_chance(&self, boxes: &mut GenerationBoxes, id: ParticleId) -> Result<()> {
        let particle = self.particle(id).ok_or(DemError::UnknownParticle(id.index()))?;
        boxes.reduce_around(&self.mechanical_grids[particle.hierarchy], particle.shape());
        Ok(())
    }

    fn generate_group(&mut self, hierarchy: usize) -> Result<Vec<ParticleId>> {
        let group = self.groups[hierarchy].clone();
        let grid = self.mechanical_grids[hierarchy].clone();
        let max_attempts = self.config.max_attempts;

        let mut boxes = self.generation_boxes(hierarchy);
        let mut sampler = boxes.sampler()?;
        let mut placed = Vec::with_capacity(group.quantity * group.segments);
        // Plates count once however many segments they are made of
        let mut plates = 0;

        info!(
            "Generating {} {} particles of size {}-{} nm",
            group.quantity, group.mineral, group.size_lower_bound, group.size_upper_bound
        );

        while plates < group.quantity {
            let mut attempts = 0;
            let accepted = loop {
                if attempts == max_attempts {
                    return Err(DemError::GenerationFailed {
                        group: hierarchy,
                        placed: plates,
                        requested: group.quantity,
                        attempts,
                    });
                }
                attempts += 1;
                if attempts == max_attempts / 2 {
                    warn!(
                        "{} attempts without placing {} particle {} of {}",
                        attempts,
                        group.mineral,
                        plates + 1,
                        group.quantity
                    );
                }

                let box_index = sampler.sample(&mut self.rng);
                let members = self.draw_candidate(hierarchy, &grid, box_index)?;
                if members.iter().all(|member| self.accepts(member)) {
                    break members;
                }
                trace!("Attempt {} in box {} rejected", attempts, box_index);
            };

            let ids = self.add_family(accepted)?;
            for &id in &ids {
                self.reduce_generation_chance(&mut boxes, id)?;
            }
            sampler = boxes.sampler()?;
            debug!(
                "Placed {} particle {} after {} attempts",
                group.mineral, ids[0], attempts
            );
            placed.extend(ids);
            plates += 1;
        }

        Ok(placed)
    }

    /// Random particle of the group centred in `box_index`; clay plates come as their segments
    fn draw_candidate(&mut self, hierarchy: usize, grid: &Grid, box_index: usize) -> Result<Vec<Particle>> {
        let group = &self.groups[hierarchy];
        let (row, column) = grid.row_column(box_index);

        let rng = &mut self.rng;
        let center = Point::new(
            (column as f64 + rng.gen::<f64>()) * grid.box_length,
            (row as f64 + rng.gen::<f64>()) * grid.box_width,
        );
        let size = rng.gen_range(group.size_lower_bound..=group.size_upper_bound);

        match group.mineral.kind() {
            MineralKind::Sand => Ok(vec![Particle::sand(group.mineral, center, size, hierarchy)?]),
            MineralKind::Clay => {
                let inclination = rng.gen_range(0.0..PI);
                let thickness = group.plate_thickness().ok_or_else(|| {
                    DemError::invalid(format!("{} group has no plate thickness", group.mineral))
                })?;
                Particle::clay_segments(
                    group.mineral,
                    center,
                    size,
                    thickness,
                    inclination,
                    hierarchy,
                    group.segments,
                )
            }
        }
    }

    /// A candidate is accepted iff it touches neither a stored particle nor a wall
    fn accepts(&self, candidate: &Particle) -> bool {
        let shape = candidate.shape();
        !self.particle_wall_contact_check(shape)
            && self
                .candidates(Layer::Mechanical, shape)
                .into_iter()
                .filter_map(|id| self.particle(id))
                .all(|other| distance(shape, other.shape()) > 0.0)
    }
}
