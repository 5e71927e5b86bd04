// Rigid motions applied by every primitive's `move_by`
// A motion turns about a pivot, then shifts.

use nalgebra::{Rotation2, Vector2};

/// Motion `(dx, dy, dtheta)` of a primitive whose reference point is `pivot`
///
/// The rotation is counterclockwise about `pivot` and happens before the shift, so the
/// reference point of the moved primitive ends up at `pivot + (dx, dy)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub pivot: Vector2<f64>,
    pub rotation: f64,
    pub translation: Vector2<f64>,
}

impl Transform2D {
    /// Create the motion of a primitive
    ///
    /// # Arguments
    /// * `dx`, `dy` - Shift of the reference point
    /// * `dtheta` - Rotation angle in radians (counterclockwise)
    /// * `pivot` - Reference point of the moving primitive, fixed by the rotation
    pub fn motion(dx: f64, dy: f64, dtheta: f64, pivot: Vector2<f64>) -> Self {
        Self {
            pivot,
            rotation: dtheta,
            translation: Vector2::new(dx, dy),
        }
    }

    /// Apply the motion to a point: rotation about the pivot first, then the shift
    pub fn apply_to_point(&self, point: Vector2<f64>) -> Vector2<f64> {
        if self.rotation == 0.0 {
            return point + self.translation;
        }
        self.pivot + Rotation2::new(self.rotation) * (point - self.pivot) + self.translation
    }

    /// Direction angle after the motion
    pub fn apply_to_angle(&self, angle: f64) -> f64 {
        angle + self.rotation
    }
}
