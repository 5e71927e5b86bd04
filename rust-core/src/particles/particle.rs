// Particle module: sand discs and clay plates living in the container arena
// A particle keeps its kinematic state and the shapes derived from it in sync

use nalgebra::Vector2;
use std::fmt;
use std::ops::RangeInclusive;

use crate::errors::{DemError, Result};
use crate::geometries::{
    standardized_inclination, BoundingBox2D, Circle, Geometry2D, LineSegment, Point, Rectangle, Shape,
};
use crate::particles::material::{Mineral, MineralKind};

/// Volume conversion from nm² × 1 nm of depth to m³
const NM3_TO_M3: f64 = 1e-27;
/// Area conversion from nm² to m²
const NM2_TO_M2: f64 = 1e-18;

/// Arena identity of a particle, never reused within a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub usize);

impl ParticleId {
    /// Placeholder carried by particles not yet stored in a container
    pub const PENDING: ParticleId = ParticleId(usize::MAX);

    pub fn index(self) -> usize {
        self.0
    }

    pub fn is_pending(self) -> bool {
        self == Self::PENDING
    }
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Position, orientation and the accumulators the force laws write into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub position: Point,
    pub inclination: f64,
    pub velocity: Vector2<f64>,
    pub angular_velocity: f64,
    pub force: Vector2<f64>,
    pub torque: f64,
}

impl Kinematics {
    /// At rest at `position`
    pub fn at(position: Point, inclination: f64) -> Self {
        Self {
            position,
            inclination,
            velocity: Vector2::zeros(),
            angular_velocity: 0.0,
            force: Vector2::zeros(),
            torque: 0.0,
        }
    }

    /// Accumulate a force applied at `point`, together with its torque about the position
    pub fn apply_force(&mut self, force: Vector2<f64>, point: &Point) {
        let lever = point.coords() - self.position.coords();
        self.force += force;
        self.torque += lever.x * force.y - lever.y * force.x;
    }

    pub fn reset_accumulators(&mut self) {
        self.force = Vector2::zeros();
        self.torque = 0.0;
    }
}

/// Geometry of a particle
#[derive(Debug, Clone, PartialEq)]
pub enum ParticleKind {
    Sand { diameter: f64 },
    Clay { length: f64, thickness: f64, midline: LineSegment },
}

impl ParticleKind {
    /// Size the group bounds refer to: diameter for sand, length for clay
    pub fn size(&self) -> f64 {
        match self {
            ParticleKind::Sand { diameter } => *diameter,
            ParticleKind::Clay { length, .. } => *length,
        }
    }

    pub fn mineral_kind(&self) -> MineralKind {
        match self {
            ParticleKind::Sand { .. } => MineralKind::Sand,
            ParticleKind::Clay { .. } => MineralKind::Clay,
        }
    }
}

/// Shape used for contact detection: a disc for sand, the plate rectangle for clay
pub fn shape(kind: &ParticleKind, kinematics: &Kinematics) -> Shape {
    match kind {
        ParticleKind::Sand { diameter } => Circle::new(kinematics.position, diameter / 2.0).into(),
        ParticleKind::Clay { length, thickness, .. } => {
            Rectangle::from_center(kinematics.position, *length, *thickness, kinematics.inclination).into()
        }
    }
}

/// In-plane area in nm²
pub fn area(kind: &ParticleKind) -> f64 {
    match kind {
        ParticleKind::Sand { diameter } => std::f64::consts::PI * diameter * diameter / 4.0,
        ParticleKind::Clay { length, thickness, .. } => length * thickness,
    }
}

/// Mass in kg for a unit depth of 1 nm
pub fn mass(mineral: Mineral, kind: &ParticleKind) -> f64 {
    mineral.density() * area(kind) * NM3_TO_M3
}

/// Moment of inertia about the centre in kg·m²
///
/// Solid disc for sand, thin rectangular plate for clay.
pub fn moment_of_inertia(mineral: Mineral, kind: &ParticleKind) -> f64 {
    let m = mass(mineral, kind);
    match kind {
        ParticleKind::Sand { diameter } => 0.5 * m * (diameter / 2.0).powi(2) * NM2_TO_M2,
        ParticleKind::Clay { length, thickness, .. } => {
            m * (length * length + thickness * thickness) / 12.0 * NM2_TO_M2
        }
    }
}

/// A particle of the container
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    /// Shared by the segments of one clay plate; contacts inside a family are ignored
    pub family: ParticleId,
    pub mineral: Mineral,
    /// Size-class rank, 0 for the group with the largest particles
    pub hierarchy: usize,
    kind: ParticleKind,
    kinematics: Kinematics,
    shape: Shape,
}

impl Particle {
    /// Sand grain centred on `center`
    ///
    /// # Errors
    /// `InvalidConfiguration` if the mineral is not a sand mineral or the diameter is outside its range.
    pub fn sand(mineral: Mineral, center: Point, diameter: f64, hierarchy: usize) -> Result<Self> {
        if mineral.kind() != MineralKind::Sand {
            return Err(DemError::invalid(format!("{} is not a sand mineral", mineral)));
        }
        check_range("diameter", mineral, diameter, mineral.size_range())?;

        Ok(Self::assemble(
            mineral,
            hierarchy,
            ParticleKind::Sand { diameter },
            Kinematics::at(center, 0.0),
        ))
    }

    /// Clay plate centred on `center` with its length axis at `inclination`
    ///
    /// # Arguments
    /// * `mineral` - A clay mineral
    /// * `center` - Centre of the plate, nm
    /// * `length`, `thickness` - Plate sides, nm, checked against the mineral's ranges
    /// * `inclination` - Length axis angle in radians, stored standardized to `[0, π)`
    /// * `hierarchy` - Index of the particle's group, largest group first
    ///
    /// # Errors
    /// `InvalidConfiguration` if the mineral is not a clay mineral or the length or thickness is outside its range.
    pub fn clay(
        mineral: Mineral,
        center: Point,
        length: f64,
        thickness: f64,
        inclination: f64,
        hierarchy: usize,
    ) -> Result<Self> {
        check_clay(mineral, length, thickness)?;
        Ok(Self::clay_unchecked(mineral, center, length, thickness, inclination, hierarchy))
    }

    /// Clay plate split into `segments` collinear pieces of equal length
    ///
    /// The plate as a whole is validated; the pieces share the plate's thickness and
    /// inclination. Their family is set when the container stores them.
    pub fn clay_segments(
        mineral: Mineral,
        center: Point,
        length: f64,
        thickness: f64,
        inclination: f64,
        hierarchy: usize,
        segments: usize,
    ) -> Result<Vec<Self>> {
        if segments == 0 {
            return Err(DemError::invalid("A clay plate needs at least one segment"));
        }
        check_clay(mineral, length, thickness)?;

        let midline = LineSegment::from_center(center, length, inclination);
        let piece = length / segments as f64;
        Ok((0..segments)
            .map(|i| {
                let t = (i as f64 + 0.5) / segments as f64;
                Self::clay_unchecked(mineral, midline.point_at(t), piece, thickness, inclination, hierarchy)
            })
            .collect())
    }

    fn clay_unchecked(
        mineral: Mineral,
        center: Point,
        length: f64,
        thickness: f64,
        inclination: f64,
        hierarchy: usize,
    ) -> Self {
        let inclination = standardized_inclination(inclination);
        let midline = LineSegment::from_center(center, length, inclination);
        Self::assemble(
            mineral,
            hierarchy,
            ParticleKind::Clay { length, thickness, midline },
            Kinematics::at(center, inclination),
        )
    }

    fn assemble(mineral: Mineral, hierarchy: usize, kind: ParticleKind, kinematics: Kinematics) -> Self {
        let shape = shape(&kind, &kinematics);
        Self {
            id: ParticleId::PENDING,
            family: ParticleId::PENDING,
            mineral,
            hierarchy,
            kind,
            kinematics,
            shape,
        }
    }

    pub fn kind(&self) -> &ParticleKind {
        &self.kind
    }

    pub fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }

    pub fn apply_force(&mut self, force: Vector2<f64>, point: &Point) {
        self.kinematics.apply_force(force, point);
    }

    pub fn reset_accumulators(&mut self) {
        self.kinematics.reset_accumulators();
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn bounding_box(&self) -> BoundingBox2D {
        self.shape.bounding_box()
    }

    pub fn position(&self) -> Point {
        self.kinematics.position
    }

    pub fn inclination(&self) -> f64 {
        self.kinematics.inclination
    }

    pub fn size(&self) -> f64 {
        self.kind.size()
    }

    pub fn is_clay(&self) -> bool {
        matches!(self.kind, ParticleKind::Clay { .. })
    }

    /// Midline of a clay plate
    pub fn midline(&self) -> Option<&LineSegment> {
        match &self.kind {
            ParticleKind::Clay { midline, .. } => Some(midline),
            ParticleKind::Sand { .. } => None,
        }
    }

    pub fn mass(&self) -> f64 {
        mass(self.mineral, &self.kind)
    }

    pub fn moment_of_inertia(&self) -> f64 {
        moment_of_inertia(self.mineral, &self.kind)
    }

    pub fn same_family(&self, other: &Particle) -> bool {
        !self.family.is_pending() && self.family == other.family
    }

    /// Translate by `(dx, dy)` and rotate by `dtheta` about the centre
    ///
    /// The midline and the contact shape are rebuilt from the new state in one step.
    pub fn move_by(&mut self, dx: f64, dy: f64, dtheta: f64) {
        let position = Point::new(self.kinematics.position.x + dx, self.kinematics.position.y + dy);
        self.kinematics.position = position;
        self.kinematics.inclination = match self.kind {
            ParticleKind::Sand { .. } => self.kinematics.inclination + dtheta,
            ParticleKind::Clay { .. } => standardized_inclination(self.kinematics.inclination + dtheta),
        };

        if let ParticleKind::Clay { length, midline, .. } = &mut self.kind {
            *midline = LineSegment::from_center(position, *length, self.kinematics.inclination);
        }
        self.shape = shape(&self.kind, &self.kinematics);
    }

    /// Move the centre to `position`, keeping the orientation
    pub fn move_to(&mut self, position: Point) {
        let current = self.kinematics.position;
        self.move_by(position.x - current.x, position.y - current.y, 0.0);
    }
}

fn check_clay(mineral: Mineral, length: f64, thickness: f64) -> Result<()> {
    let Some(thickness_range) = mineral.thickness_range() else {
        return Err(DemError::invalid(format!("{} is not a clay mineral", mineral)));
    };
    check_range("length", mineral, length, mineral.size_range())?;
    check_range("thickness", mineral, thickness, thickness_range)
}

fn check_range(what: &str, mineral: Mineral, value: f64, range: RangeInclusive<f64>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(DemError::invalid(format!(
            "{} {} {} outside [{}, {}]",
            mineral,
            what,
            value,
            range.start(),
            range.end()
        )))
    }
}
