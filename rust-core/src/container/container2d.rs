// Container module: particle arena, box indexes and contact maps
// Contacts are found by scanning the boxes a particle reaches in every group's grid

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::{BTreeMap, BTreeSet};

use crate::config::GEOMETRY_TOLERANCE;
use crate::container::container_config::{ContainerConfig, ParticleGroupSpec};
use crate::container::grid::Grid;
use crate::errors::{DemError, Result};
use crate::geometries::{distance, Geometry2D, Shape};
use crate::particles::{Particle, ParticleId, Wall, WallPosition};

/// Box lists of every group's grid: `boxes[group][box]` holds the particles registered there
pub type BoxIndex = Vec<Vec<Vec<ParticleId>>>;

/// Which of the two box indexes an operation works on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Layer {
    Mechanical,
    Chemical,
}

/// Rectangular container holding the particles and the four walls
///
/// Particle ids are arena slots handed out in increasing order and never reused.
#[derive(Debug)]
pub struct Container {
    pub(super) config: ContainerConfig,
    /// Groups sorted by decreasing `size_upper_bound`; the position is the hierarchy
    pub(super) groups: Vec<ParticleGroupSpec>,
    pub(super) mechanical_grids: Vec<Grid>,
    pub(super) chemical_grids: Vec<Grid>,
    pub(super) walls: Vec<Wall>,
    pub(super) particles: Vec<Option<Particle>>,
    pub(super) mechanical_boxes: BoxIndex,
    pub(super) chemical_boxes: BoxIndex,
    pub(super) mechanical_contacts: BTreeMap<ParticleId, Vec<ParticleId>>,
    pub(super) chemical_contacts: BTreeMap<ParticleId, Vec<ParticleId>>,
    pub(super) wall_contacts: Vec<(ParticleId, WallPosition)>,
    pub(super) rng: ChaCha8Rng,
}

impl Container {
    /// Empty container with its grids and walls
    ///
    /// # Errors
    /// `InvalidConfiguration` if the configuration does not validate or a group's box
    /// size does not divide the container.
    pub fn new(config: ContainerConfig) -> Result<Self> {
        config.validate()?;

        let mut groups = config.particles_info.clone();
        groups.sort_by(|a, b| b.size_upper_bound.total_cmp(&a.size_upper_bound));

        let mechanical_grids = groups
            .iter()
            .map(|group| Grid::mechanical(config.length, config.width, group.size_upper_bound))
            .collect::<Result<Vec<_>>>()?;
        let chemical_grids: Vec<Grid> = groups
            .iter()
            .map(|group| Grid::chemical(config.length, config.width, group.size_upper_bound + config.chemical_range))
            .collect();
        let walls = Wall::container_walls(config.length, config.width, config.has_mobile_top())?;

        for (hierarchy, (group, grid)) in groups.iter().zip(&mechanical_grids).enumerate() {
            debug!(
                "Group {} ({}): {}x{} boxes of {} nm",
                hierarchy, group.mineral, grid.number_of_columns, grid.number_of_rows, grid.box_length
            );
        }

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let mechanical_boxes = empty_boxes(&mechanical_grids);
        let chemical_boxes = empty_boxes(&chemical_grids);
        Ok(Self {
            config,
            groups,
            mechanical_grids,
            chemical_grids,
            walls,
            particles: Vec::new(),
            mechanical_boxes,
            chemical_boxes,
            mechanical_contacts: BTreeMap::new(),
            chemical_contacts: BTreeMap::new(),
            wall_contacts: Vec::new(),
            rng,
        })
    }

    // ======================== ACCESSORS ========================

    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// Particle groups in hierarchy order
    pub fn groups(&self) -> &[ParticleGroupSpec] {
        &self.groups
    }

    pub fn mechanical_grids(&self) -> &[Grid] {
        &self.mechanical_grids
    }

    pub fn chemical_grids(&self) -> &[Grid] {
        &self.chemical_grids
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn mechanical_boxes(&self) -> &BoxIndex {
        &self.mechanical_boxes
    }

    pub fn chemical_boxes(&self) -> &BoxIndex {
        &self.chemical_boxes
    }

    pub fn mechanical_contacts(&self) -> &BTreeMap<ParticleId, Vec<ParticleId>> {
        &self.mechanical_contacts
    }

    pub fn chemical_contacts(&self) -> &BTreeMap<ParticleId, Vec<ParticleId>> {
        &self.chemical_contacts
    }

    /// `(particle, wall)` pairs in particle order, walls left, right, bottom, top
    pub fn wall_contacts(&self) -> &[(ParticleId, WallPosition)] {
        &self.wall_contacts
    }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id.index()).and_then(Option::as_ref)
    }

    /// Live particles in id order
    pub fn particles(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.particles.iter().flatten()
    }

    pub fn particle_count(&self) -> usize {
        self.particles().count()
    }

    // ======================== ARENA ========================

    /// Store a particle and register it in the box indexes
    ///
    /// The particle gets the next id and becomes its own family unless it already has one.
    ///
    /// # Errors
    /// `InvalidConfiguration` if its hierarchy names no group of the container.
    pub fn add_particle(&mut self, mut particle: Particle) -> Result<ParticleId> {
        if particle.hierarchy >= self.groups.len() {
            return Err(DemError::invalid(format!(
                "Particle hierarchy {} but the container has {} groups",
                particle.hierarchy,
                self.groups.len()
            )));
        }

        let id = ParticleId(self.particles.len());
        particle.id = id;
        if particle.family.is_pending() {
            particle.family = id;
        }
        self.particles.push(Some(particle));
        self.register(id);
        Ok(id)
    }

    /// Store the segments of one clay plate under a shared family
    pub fn add_family(&mut self, members: Vec<Particle>) -> Result<Vec<ParticleId>> {
        let family = ParticleId(self.particles.len());
        members
            .into_iter()
            .map(|mut member| {
                member.family = family;
                self.add_particle(member)
            })
            .collect()
    }

    /// Take a particle out of the arena, the box indexes and the contact maps
    ///
    /// Its id stays retired.
    pub fn remove_particle(&mut self, id: ParticleId) -> Result<Particle> {
        let particle = self
            .particles
            .get_mut(id.index())
            .and_then(Option::take)
            .ok_or(DemError::UnknownParticle(id.index()))?;

        for boxes in [&mut self.mechanical_boxes, &mut self.chemical_boxes] {
            unregister_from(boxes, id);
        }
        for contacts in [&mut self.mechanical_contacts, &mut self.chemical_contacts] {
            contacts.remove(&id);
            for neighbours in contacts.values_mut() {
                neighbours.retain(|&other| other != id);
            }
        }
        self.wall_contacts.retain(|&(other, _)| other != id);

        debug!("Removed particle {}", id);
        Ok(particle)
    }

    /// Move a particle and refresh its box registrations
    ///
    /// Contact maps are left as they are until the next `update_*` call.
    pub fn move_particle(&mut self, id: ParticleId, dx: f64, dy: f64, dtheta: f64) -> Result<()> {
        let particle = self
            .particles
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(DemError::UnknownParticle(id.index()))?;
        particle.move_by(dx, dy, dtheta);

        for boxes in [&mut self.mechanical_boxes, &mut self.chemical_boxes] {
            unregister_from(boxes, id);
        }
        self.register(id);
        Ok(())
    }

    /// Translate a mobile wall; `false` if the wall is fixed
    pub fn move_wall(&mut self, position: WallPosition, dx: f64, dy: f64) -> bool {
        self.walls
            .iter_mut()
            .find(|wall| wall.position == position)
            .is_some_and(|wall| wall.move_by(dx, dy))
    }

    // ======================== BOX INDEXES ========================

    /// Rebuild the mechanical box lists of every group
    pub fn update_mechanical_boxes(&mut self) {
        self.mechanical_boxes = empty_boxes(&self.mechanical_grids);
        let ids: Vec<ParticleId> = self.particles().map(|p| p.id).collect();
        for id in ids {
            self.register_in(Layer::Mechanical, id);
        }
        debug!("Rebuilt mechanical boxes for {} particles", self.particle_count());
    }

    /// Rebuild the chemical box lists of every group
    pub fn update_chemical_boxes(&mut self) {
        self.chemical_boxes = empty_boxes(&self.chemical_grids);
        let ids: Vec<ParticleId> = self.particles().map(|p| p.id).collect();
        for id in ids {
            self.register_in(Layer::Chemical, id);
        }
        debug!("Rebuilt chemical boxes for {} particles", self.particle_count());
    }

    /// Boxes of `grid` the shape occupies in the given layer
    pub(crate) fn occupied_boxes(&self, layer: Layer, group: usize, shape: &Shape) -> Vec<usize> {
        match layer {
            Layer::Mechanical => {
                let grid = &self.mechanical_grids[group];
                grid.touching_boxes(shape, grid.primary_box(&shape.reference_point()))
            }
            Layer::Chemical => {
                let grid = &self.chemical_grids[group];
                grid.boxes_within(shape, grid.primary_box(&shape.reference_point()), self.chemical_reach())
            }
        }
    }

    /// Boxes of `grid` that may hold a particle in contact with the shape
    fn searched_boxes(&self, layer: Layer, group: usize, shape: &Shape) -> Vec<usize> {
        let (grid, reach) = match layer {
            Layer::Mechanical => (&self.mechanical_grids[group], 0.0),
            Layer::Chemical => (&self.chemical_grids[group], self.chemical_reach()),
        };
        grid.boxes_within(shape, grid.primary_box(&shape.reference_point()), reach)
    }

    fn chemical_reach(&self) -> f64 {
        self.config.chemical_range / 2.0
    }

    fn register(&mut self, id: ParticleId) {
        self.register_in(Layer::Mechanical, id);
        self.register_in(Layer::Chemical, id);
    }

    fn register_in(&mut self, layer: Layer, id: ParticleId) {
        let Some(particle) = self.particle(id) else {
            return;
        };
        let group = particle.hierarchy;
        let boxes = self.occupied_boxes(layer, group, particle.shape());
        let index = match layer {
            Layer::Mechanical => &mut self.mechanical_boxes,
            Layer::Chemical => &mut self.chemical_boxes,
        };
        for box_index in boxes {
            index[group][box_index].push(id);
        }
    }

    // ======================== CONTACT DETECTION ========================

    /// Particles registered in any box the shape may reach, in id order
    pub(crate) fn candidates(&self, layer: Layer, shape: &Shape) -> BTreeSet<ParticleId> {
        let index = match layer {
            Layer::Mechanical => &self.mechanical_boxes,
            Layer::Chemical => &self.chemical_boxes,
        };
        let mut found = BTreeSet::new();
        for (group, lists) in index.iter().enumerate() {
            for box_index in self.searched_boxes(layer, group, shape) {
                found.extend(lists[box_index].iter().copied());
            }
        }
        found
    }

    /// Particles within `criterion` of `particle`, excluding itself and its family
    fn neighbours(&self, layer: Layer, particle: &Particle, criterion: f64) -> Vec<ParticleId> {
        let reach = particle.bounding_box().expand(criterion + GEOMETRY_TOLERANCE);
        self.candidates(layer, particle.shape())
            .into_iter()
            .filter(|&other_id| other_id != particle.id)
            .filter_map(|other_id| self.particle(other_id))
            .filter(|other| !particle.same_family(other))
            .filter(|other| reach.overlaps(&other.bounding_box()))
            .filter(|other| distance(particle.shape(), other.shape()) <= criterion)
            .map(|other| other.id)
            .collect()
    }

    /// True iff some other particle, not of the same clay family, touches or overlaps `particle`
    pub fn single_particle_mechanical_contact_check(&self, particle: &Particle) -> bool {
        !self.neighbours(Layer::Mechanical, particle, 0.0).is_empty()
    }

    /// Walls the shape touches or crosses, in wall order
    pub fn touching_walls(&self, shape: &Shape) -> Vec<WallPosition> {
        self.walls
            .iter()
            .filter(|wall| distance(shape, wall.shape()) <= 0.0)
            .map(|wall| wall.position)
            .collect()
    }

    pub fn particle_wall_contact_check(&self, shape: &Shape) -> bool {
        self.walls.iter().any(|wall| distance(shape, wall.shape()) <= 0.0)
    }

    /// Rebuild the mechanical contact map; every live particle gets a key
    pub fn update_mechanical_contacts_dictionary(&mut self) {
        self.mechanical_contacts = self.contact_map(Layer::Mechanical, 0.0);
        debug!("Mechanical contacts: {} pairs", pair_count(&self.mechanical_contacts));
    }

    /// Rebuild the chemical contact map with the `chemical_range` criterion
    pub fn update_chemical_contacts_dictionary(&mut self) {
        self.chemical_contacts = self.contact_map(Layer::Chemical, self.config.chemical_range);
        debug!("Chemical contacts: {} pairs", pair_count(&self.chemical_contacts));
    }

    pub fn update_wall_contacts_list(&mut self) {
        self.wall_contacts = self
            .particles()
            .flat_map(|particle| {
                self.touching_walls(particle.shape())
                    .into_iter()
                    .map(move |wall| (particle.id, wall))
            })
            .collect();
        debug!("Wall contacts: {}", self.wall_contacts.len());
    }

    fn contact_map(&self, layer: Layer, criterion: f64) -> BTreeMap<ParticleId, Vec<ParticleId>> {
        let mut map: BTreeMap<ParticleId, Vec<ParticleId>> = self.particles().map(|p| (p.id, Vec::new())).collect();

        for particle in self.particles() {
            for other in self.neighbours(layer, particle, criterion) {
                // Each pair is found from both sides; record it once, from the lower id
                if other < particle.id {
                    continue;
                }
                map.entry(particle.id).or_default().push(other);
                map.entry(other).or_default().push(particle.id);
            }
        }
        map
    }

    /// Rebuild both box indexes and every contact structure
    pub fn refresh(&mut self) {
        self.update_mechanical_boxes();
        self.update_chemical_boxes();
        self.update_mechanical_contacts_dictionary();
        self.update_chemical_contacts_dictionary();
        self.update_wall_contacts_list();
        info!(
            "Container holds {} particles, {} mechanical and {} chemical contact pairs, {} wall contacts",
            self.particle_count(),
            pair_count(&self.mechanical_contacts),
            pair_count(&self.chemical_contacts),
            self.wall_contacts.len()
        );
    }
}

fn empty_boxes(grids: &[Grid]) -> BoxIndex {
    grids.iter().map(|grid| vec![Vec::new(); grid.box_count()]).collect()
}

fn unregister_from(boxes: &mut BoxIndex, id: ParticleId) {
    for lists in boxes.iter_mut() {
        for list in lists.iter_mut() {
            list.retain(|&other| other != id);
        }
    }
}

/// Number of unordered pairs in a symmetric contact map
pub fn pair_count(contacts: &BTreeMap<ParticleId, Vec<ParticleId>>) -> usize {
    contacts.values().map(Vec::len).sum::<usize>() / 2
}
