//! The seven standard piece shapes
//!
//! Shapes are defined in spawn-local coordinates with hand-tuned rotation
//! delta tables: O never rotates, I/S/Z cycle through two states, L/J/T
//! through four. The tables encode each piece's visual pivot, so they are
//! data, not something derivable from a rotation formula.

use blockfall_types::Point;

use crate::block::Block;

/// The seven standard falling pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    O,
    T,
    I,
    L,
    J,
    S,
    Z,
}

const fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

impl BlockKind {
    pub const ALL: [BlockKind; 7] = [
        BlockKind::O,
        BlockKind::T,
        BlockKind::I,
        BlockKind::L,
        BlockKind::J,
        BlockKind::S,
        BlockKind::Z,
    ];

    /// Build a fresh block of this kind in spawn-local coordinates.
    pub fn block(self) -> Block {
        match self {
            BlockKind::O => Block::new(vec![p(0, 0), p(0, 1), p(1, 0), p(1, 1)]),

            BlockKind::I => Block::with_rotations(
                vec![p(0, 0), p(1, 0), p(2, 0), p(3, 0)],
                vec![
                    vec![p(1, -1), p(0, 0), p(-1, 1), p(-2, 2)],
                    vec![p(-1, 1), p(0, 0), p(1, -1), p(2, -2)],
                ],
            ),

            BlockKind::L => Block::with_rotations(
                vec![p(2, 1), p(1, 1), p(0, 1), p(0, 0)],
                vec![
                    vec![p(-1, -1), p(0, 0), p(1, 1), p(0, 2)],
                    vec![p(-1, 1), p(0, 0), p(1, -1), p(2, 0)],
                    vec![p(1, 1), p(0, 0), p(-1, -1), p(0, -2)],
                    vec![p(1, -1), p(0, 0), p(-1, 1), p(-2, 0)],
                ],
            ),

            BlockKind::J => Block::with_rotations(
                vec![p(0, 1), p(1, 1), p(2, 1), p(2, 0)],
                vec![
                    vec![p(1, 1), p(0, 0), p(-1, -1), p(-2, 0)],
                    vec![p(1, -1), p(0, 0), p(-1, 1), p(0, 2)],
                    vec![p(-1, -1), p(0, 0), p(1, 1), p(2, 0)],
                    vec![p(-1, 1), p(0, 0), p(1, -1), p(0, -2)],
                ],
            ),

            BlockKind::T => Block::with_rotations(
                vec![p(1, 1), p(0, 1), p(1, 0), p(2, 1)],
                vec![
                    vec![p(0, 0), p(1, 1), p(-1, 1), p(-1, -1)],
                    vec![p(0, 0), p(1, -1), p(1, 1), p(-1, 1)],
                    vec![p(0, 0), p(-1, -1), p(1, -1), p(1, 1)],
                    vec![p(0, 0), p(-1, 1), p(-1, -1), p(1, -1)],
                ],
            ),

            BlockKind::S => Block::with_rotations(
                vec![p(0, 0), p(1, 0), p(1, 1), p(2, 1)],
                vec![
                    vec![p(1, 0), p(0, 1), p(-1, 0), p(-2, 1)],
                    vec![p(-1, 0), p(0, -1), p(1, 0), p(2, -1)],
                ],
            ),

            BlockKind::Z => Block::with_rotations(
                vec![p(0, 1), p(1, 1), p(1, 0), p(2, 0)],
                vec![
                    vec![p(1, 1), p(0, 0), p(-1, 1), p(-2, 0)],
                    vec![p(-1, -1), p(0, 0), p(1, -1), p(2, 0)],
                ],
            ),
        }
    }
}
