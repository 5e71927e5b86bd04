// Axis-aligned extents of the primitives
// The box grids only look at the cells covered by a shape's extent.

use nalgebra::Vector2;

/// Axis-aligned extent `[min, max]` of a primitive
///
/// Infinite lines report infinite corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox2D {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl BoundingBox2D {
    /// Create an extent from its corners
    ///
    /// # Arguments
    /// * `min` - Lower left corner
    /// * `max` - Upper right corner
    ///
    /// # Panics
    /// In debug builds when a coordinate of `min` exceeds that of `max`.
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        debug_assert!(
            min.x <= max.x && min.y <= max.y,
            "Minimum coordinates must be less than or equal to maximum coordinates"
        );
        Self { min, max }
    }

    pub fn everywhere() -> Self {
        let infinity = Vector2::repeat(f64::INFINITY);
        Self {
            min: -infinity,
            max: infinity,
        }
    }

    /// Smallest extent holding every point
    ///
    /// # Returns
    /// * `Some(BoundingBox2D)` if there are points to bound
    /// * `None` if the iterator is empty
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vector2<f64>>,
    {
        points.into_iter().fold(None, |extent, p| {
            Some(match extent {
                None => Self { min: p, max: p },
                Some(Self { min, max }) => Self {
                    min: min.inf(&p),
                    max: max.sup(&p),
                },
            })
        })
    }

    /// Extent grown by `margin` on every side
    pub fn expand(&self, margin: f64) -> Self {
        let margin = Vector2::repeat(margin);
        Self {
            min: self.min - margin,
            max: self.max + margin,
        }
    }

    /// Closed overlap test, touching extents overlap
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.x <= other.max.x && other.min.x <= self.max.x && self.min.y <= other.max.y && other.min.y <= self.max.y
    }

    pub fn is_finite(&self) -> bool {
        self.min.iter().chain(self.max.iter()).all(|c| c.is_finite())
    }
}
