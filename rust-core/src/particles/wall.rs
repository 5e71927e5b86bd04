// Wall module: the four sides of the container

use std::fmt;

use crate::errors::{DemError, Result};
use crate::geometries::{Geometry2D, LineSegment, Point, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WallPosition {
    Left,
    Right,
    Bottom,
    Top,
}

impl WallPosition {
    /// Order in which walls are stored and tested
    pub const ALL: [WallPosition; 4] = [
        WallPosition::Left,
        WallPosition::Right,
        WallPosition::Bottom,
        WallPosition::Top,
    ];
}

impl fmt::Display for WallPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WallPosition::Left => "left",
            WallPosition::Right => "right",
            WallPosition::Bottom => "bottom",
            WallPosition::Top => "top",
        };
        f.write_str(name)
    }
}

/// A container side, modelled as a segment
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    pub position: WallPosition,
    /// Only a mobile wall may be moved, e.g. the loading plate of a compression test
    pub mobile: bool,
    segment: LineSegment,
    shape: Shape,
}

impl Wall {
    /// # Errors
    /// `InvalidConfiguration` for a wall of non-positive length.
    pub fn new(position: WallPosition, start: Point, end: Point, mobile: bool) -> Result<Self> {
        let segment = LineSegment::new(start, end);
        if segment.length() <= 0.0 || !segment.length().is_finite() {
            return Err(DemError::invalid(format!(
                "The {} wall must have a positive length, got {}",
                position,
                segment.length()
            )));
        }
        Ok(Self {
            position,
            mobile,
            segment,
            shape: segment.into(),
        })
    }

    /// The four walls of a `length × width` container with its lower left corner at the origin
    pub fn container_walls(length: f64, width: f64, mobile_top: bool) -> Result<Vec<Wall>> {
        let corners = [
            Point::new(0.0, 0.0),
            Point::new(length, 0.0),
            Point::new(length, width),
            Point::new(0.0, width),
        ];
        WallPosition::ALL
            .into_iter()
            .map(|position| {
                let (start, end) = match position {
                    WallPosition::Left => (corners[0], corners[3]),
                    WallPosition::Right => (corners[1], corners[2]),
                    WallPosition::Bottom => (corners[0], corners[1]),
                    WallPosition::Top => (corners[3], corners[2]),
                };
                Wall::new(position, start, end, mobile_top && position == WallPosition::Top)
            })
            .collect()
    }

    pub fn segment(&self) -> &LineSegment {
        &self.segment
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn length(&self) -> f64 {
        self.segment.length()
    }

    /// Translate a mobile wall. Fixed walls stay put and `false` is returned.
    pub fn move_by(&mut self, dx: f64, dy: f64) -> bool {
        if !self.mobile {
            return false;
        }
        self.segment.move_by(dx, dy, 0.0);
        self.shape = self.segment.into();
        true
    }
}
