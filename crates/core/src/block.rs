//! Block module - piece geometry and table-driven rotation
//!
//! A block stores the absolute board coordinates of its cells together with
//! a table of rotation deltas. Rotating right adds the delta set at the
//! current rotation index to every cell and then advances the index;
//! rotating left first steps the index back and then subtracts that delta
//! set. The ordering asymmetry is what makes the two operations exact
//! inverses of each other, so it must not be "simplified".

use blockfall_types::Point;

/// A game piece: the current absolute position of each of its cells plus all
/// possible rotations, encoded as per-cell deltas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    points: Vec<Point>,
    rotation_deltas: Vec<Vec<Point>>,
    rotation: usize,
}

impl Block {
    /// Create a block that never rotates.
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            rotation_deltas: Vec::new(),
            rotation: 0,
        }
    }

    /// Create a block with a rotation table. Every delta set must carry one
    /// delta per cell; a mismatch is a programming error in the shape data.
    pub fn with_rotations(points: Vec<Point>, rotation_deltas: Vec<Vec<Point>>) -> Self {
        for deltas in &rotation_deltas {
            assert_eq!(
                deltas.len(),
                points.len(),
                "rotation delta set does not match cell count"
            );
        }
        Self {
            points,
            rotation_deltas,
            rotation: 0,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Width and height of the tight bounding box over the current cells.
    /// Changes with rotation; an empty block is (0, 0).
    pub fn size(&self) -> (i32, i32) {
        let Some(first) = self.points.first() else {
            return (0, 0);
        };
        let (mut min_x, mut max_x) = (first.x, first.x);
        let (mut min_y, mut max_y) = (first.y, first.y);
        for p in &self.points {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        (max_x - min_x + 1, max_y - min_y + 1)
    }

    /// Apply the delta set at the current rotation index, then advance the
    /// index. No-op for a block without a rotation table.
    pub fn rotate_right(&mut self) {
        if self.rotation_deltas.is_empty() {
            return;
        }
        for (point, delta) in self.points.iter_mut().zip(&self.rotation_deltas[self.rotation]) {
            point.x += delta.x;
            point.y += delta.y;
        }
        self.rotation = (self.rotation + 1) % self.rotation_deltas.len();
    }

    /// Step the rotation index back, then subtract that delta set. The exact
    /// inverse of [`rotate_right`](Block::rotate_right).
    pub fn rotate_left(&mut self) {
        if self.rotation_deltas.is_empty() {
            return;
        }
        let n = self.rotation_deltas.len();
        self.rotation = (self.rotation + n - 1) % n;
        for (point, delta) in self.points.iter_mut().zip(&self.rotation_deltas[self.rotation]) {
            point.x -= delta.x;
            point.y -= delta.y;
        }
    }

    /// Translate every cell by the given amounts.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        for point in &mut self.points {
            point.x += dx;
            point.y += dy;
        }
    }
}
