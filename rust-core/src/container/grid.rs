// Grid module: uniform box partition of the container used to index particles
// Boxes are numbered row-major from the lower left corner

use log::trace;

use crate::config::{GEOMETRY_TOLERANCE, GRID_TOLERANCE};
use crate::errors::{DemError, Result};
use crate::geometries::{distance, Geometry2D, Point, Rectangle, Shape};

/// Row-major number of the box containing `(x, y)`
///
/// Coordinates left of or below the origin count as the first column or row.
pub fn box_num(x: f64, y: f64, number_of_columns: usize, box_length: f64, box_width: f64) -> usize {
    let column = (x / box_length).floor().max(0.0) as usize;
    let row = (y / box_width).floor().max(0.0) as usize;
    column + row * number_of_columns
}

/// Box partition of a `length × width` container
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub number_of_rows: usize,
    pub number_of_columns: usize,
    pub box_length: f64,
    pub box_width: f64,
}

impl Grid {
    /// Grid of square boxes of side `box_size`
    ///
    /// # Arguments
    /// * `length`, `width` - Container extent
    /// * `box_size` - Box side, the `size_upper_bound` of the grid's group
    ///
    /// # Errors
    /// `InvalidConfiguration` if `box_size` does not evenly divide both container sides.
    pub fn mechanical(length: f64, width: f64, box_size: f64) -> Result<Self> {
        let number_of_columns = divisions(length, box_size).ok_or_else(|| {
            DemError::invalid(format!(
                "Container length {} is not divisible by the box size {}",
                length, box_size
            ))
        })?;
        let number_of_rows = divisions(width, box_size).ok_or_else(|| {
            DemError::invalid(format!(
                "Container width {} is not divisible by the box size {}",
                width, box_size
            ))
        })?;

        Ok(Self {
            number_of_rows,
            number_of_columns,
            box_length: box_size,
            box_width: box_size,
        })
    }

    /// Grid whose boxes are the smallest even divisions of the container at least `min_box_size` wide
    pub fn chemical(length: f64, width: f64, min_box_size: f64) -> Self {
        let number_of_columns = ((length / min_box_size).floor() as usize).max(1);
        let number_of_rows = ((width / min_box_size).floor() as usize).max(1);
        Self {
            number_of_rows,
            number_of_columns,
            box_length: length / number_of_columns as f64,
            box_width: width / number_of_rows as f64,
        }
    }

    pub fn box_count(&self) -> usize {
        self.number_of_rows * self.number_of_columns
    }

    pub fn box_num(&self, x: f64, y: f64) -> usize {
        box_num(x, y, self.number_of_columns, self.box_length, self.box_width)
    }

    /// `(row, column)` of a box
    pub fn row_column(&self, box_index: usize) -> (usize, usize) {
        (box_index / self.number_of_columns, box_index % self.number_of_columns)
    }

    pub fn index(&self, row: usize, column: usize) -> usize {
        column + row * self.number_of_columns
    }

    /// Closed rectangle covered by a box
    pub fn box_rectangle(&self, box_index: usize) -> Rectangle {
        let (row, column) = self.row_column(box_index);
        let min = Point::new(column as f64 * self.box_length, row as f64 * self.box_width);
        let max = Point::new(min.x + self.box_length, min.y + self.box_width);
        Rectangle::axis_aligned(min, max)
    }

    pub fn box_center(&self, box_index: usize) -> Point {
        let (row, column) = self.row_column(box_index);
        Point::new(
            (column as f64 + 0.5) * self.box_length,
            (row as f64 + 0.5) * self.box_width,
        )
    }

    /// Box holding `point`, clamped to the grid
    pub fn primary_box(&self, point: &Point) -> usize {
        let column = self.clamped_column(point.x / self.box_length);
        let row = self.clamped_row(point.y / self.box_width);
        self.index(row, column)
    }

    /// Boxes the shape overlaps, always including `primary_box`
    ///
    /// Boxes the shape only touches along their boundary are left out. A shape crossing both
    /// a row line and a column line of the same corner, and nothing further, is registered in
    /// the whole 2x2 block around that corner even when it misses the diagonal box, so a shape
    /// no larger than a box occupies 1, 2 or 4 boxes.
    ///
    /// # Arguments
    /// * `shape` - Shape to register
    /// * `primary_box` - Box holding the shape's reference point, see [`Grid::primary_box`]
    pub fn touching_boxes(&self, shape: &Shape, primary_box: usize) -> Vec<usize> {
        let mut boxes = self.boxes_near(shape, primary_box, 0.0, |d| d < 0.0);
        self.complete_corner_block(&mut boxes);
        boxes
    }

    /// Fill a 2x2 block when `boxes` spans exactly two rows and two columns
    fn complete_corner_block(&self, boxes: &mut Vec<usize>) {
        let cells: Vec<(usize, usize)> = boxes.iter().map(|&index| self.row_column(index)).collect();
        let (Some(top), Some(bottom)) = (cells.iter().map(|c| c.0).max(), cells.iter().map(|c| c.0).min()) else {
            return;
        };
        let (Some(right), Some(left)) = (cells.iter().map(|c| c.1).max(), cells.iter().map(|c| c.1).min()) else {
            return;
        };
        if top - bottom != 1 || right - left != 1 {
            return;
        }
        for row in bottom..=top {
            for column in left..=right {
                let index = self.index(row, column);
                if !boxes.contains(&index) {
                    boxes.push(index);
                }
            }
        }
    }

    /// Boxes whose closed rectangle is within `reach` of the shape, always including `primary_box`
    ///
    /// # Arguments
    /// * `shape` - Shape to look around
    /// * `primary_box` - Box holding the shape's reference point
    /// * `reach` - Largest accepted signed distance between the shape and a box; 0 keeps the
    ///   boxes the shape touches, boundary included
    pub fn boxes_within(&self, shape: &Shape, primary_box: usize, reach: f64) -> Vec<usize> {
        self.boxes_near(shape, primary_box, reach, |d| d <= reach)
    }

    fn boxes_near(&self, shape: &Shape, primary_box: usize, reach: f64, accept: impl Fn(f64) -> bool) -> Vec<usize> {
        let bounds = shape.bounding_box().expand(reach + GEOMETRY_TOLERANCE);
        let columns = self.clamped_column(bounds.min.x / self.box_length)
            ..=self.clamped_column(bounds.max.x / self.box_length);
        let rows = self.clamped_row(bounds.min.y / self.box_width)..=self.clamped_row(bounds.max.y / self.box_width);

        let mut boxes = Vec::new();
        for row in rows {
            for column in columns.clone() {
                let index = self.index(row, column);
                if index == primary_box || accept(distance(shape, &self.box_rectangle(index).into())) {
                    boxes.push(index);
                }
            }
        }
        if !boxes.contains(&primary_box) {
            boxes.push(primary_box);
        }
        trace!("Shape {:?} reaches boxes {:?}", shape.kind(), boxes);
        boxes
    }

    /// Boxes at Chebyshev distance exactly `radius` from `center_box`, clipped to the grid
    pub fn ring(&self, center_box: usize, radius: usize) -> Vec<usize> {
        let (row, column) = self.row_column(center_box);
        let (row, column) = (row as isize, column as isize);
        let r = radius as isize;

        let mut boxes = Vec::new();
        for dr in -r..=r {
            for dc in -r..=r {
                if dr.abs().max(dc.abs()) != r {
                    continue;
                }
                let (nr, nc) = (row + dr, column + dc);
                if nr >= 0 && nc >= 0 && (nr as usize) < self.number_of_rows && (nc as usize) < self.number_of_columns {
                    boxes.push(self.index(nr as usize, nc as usize));
                }
            }
        }
        boxes
    }

    /// Largest ring radius that still reaches a box of the grid
    pub fn max_ring(&self) -> usize {
        self.number_of_rows.max(self.number_of_columns)
    }

    fn clamped_column(&self, fraction: f64) -> usize {
        clamp_index(fraction, self.number_of_columns)
    }

    fn clamped_row(&self, fraction: f64) -> usize {
        clamp_index(fraction, self.number_of_rows)
    }
}

fn clamp_index(fraction: f64, count: usize) -> usize {
    let last = count.saturating_sub(1);
    if fraction.is_nan() {
        return 0;
    }
    (fraction.floor().max(0.0) as usize).min(last)
}

/// Number of boxes of `size` fitting exactly in `side`
fn divisions(side: f64, size: f64) -> Option<usize> {
    if !(size.is_finite() && size > 0.0) {
        return None;
    }
    let count = (side / size).round();
    if count >= 1.0 && (count * size - side).abs() <= GRID_TOLERANCE * side {
        Some(count as usize)
    } else {
        None
    }
}
