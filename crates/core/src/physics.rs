//! Physics module - movement and collision resolution for blocks sharing one board
//!
//! Physics owns the board and one active block per player and resolves every
//! move against four obstacles: the side walls, the ground, settled board
//! cells, and the other players' blocks. Outcomes are not return-value
//! errors; they are domain events delivered synchronously to the registered
//! observers. A blocked move reverts the block and reports the collision,
//! a successful one reports the movement.
//!
//! Two operations trigger cascades. Removing a line shifts the rows above it
//! down, which can push settled cells into a hovering block; that block is
//! dragged down by one, which in turn can push it into another block, and so
//! on until a fixed point. Dropping several blocks in the same tick moves
//! them all first and resolves afterwards, so the outcome does not depend on
//! the order the blocks are listed in. Both cascades run as worklist passes
//! over the fixed per-player block array.
//!
//! Observers must not re-enter the engine; they are side-effect-only
//! callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use arrayvec::ArrayVec;
use blockfall_types::{BoardSize, MAX_PLAYERS};

use crate::block::Block;
use crate::board::Board;

/// Collision outcomes, reported per block index. All methods default to
/// no-ops so an observer implements only the events it cares about.
pub trait BlockCollisionObserver {
    fn block_hit_left_or_right(&mut self, _block: usize) {}
    fn block_hit_other_block(&mut self, _block: usize) {}
    fn block_hit_ground(&mut self, _block: usize) {}
    fn block_dragged_down_by_line_removal(&mut self, _block: usize) {}
    fn block_could_not_rotate(&mut self, _block: usize) {}
}

/// Successful movement, reported per block index.
pub trait BlockMoveObserver {
    fn block_moved_horizontally(&mut self, _block: usize) {}
    fn block_moved_down(&mut self, _block: usize) {}
    fn block_rotated(&mut self, _block: usize) {}
}

type IndexList = ArrayVec<usize, MAX_PLAYERS>;

/// Collision resolver for up to [`MAX_PLAYERS`] blocks on one board.
pub struct Physics {
    board_width: i32,
    blocks: Vec<Block>,
    board: Board,
    collision_observers: Vec<Rc<RefCell<dyn BlockCollisionObserver>>>,
    move_observers: Vec<Rc<RefCell<dyn BlockMoveObserver>>>,
}

impl Physics {
    /// Create a physics instance with an empty board and `block_count` empty
    /// blocks. `block_count` must not exceed [`MAX_PLAYERS`].
    pub fn new(size: BoardSize, block_count: usize) -> Self {
        assert!(block_count <= MAX_PLAYERS, "too many blocks: {block_count}");
        Self {
            board_width: size.width,
            blocks: vec![Block::default(); block_count],
            board: Board::new(size),
            collision_observers: Vec::new(),
            move_observers: Vec::new(),
        }
    }

    pub fn add_collision_observer(&mut self, observer: Rc<RefCell<dyn BlockCollisionObserver>>) {
        self.collision_observers.push(observer);
    }

    pub fn add_move_observer(&mut self, observer: Rc<RefCell<dyn BlockMoveObserver>>) {
        self.move_observers.push(observer);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block_mut(&mut self, block: usize) -> &mut Block {
        &mut self.blocks[block]
    }

    pub fn set_block(&mut self, block: usize, b: Block) {
        self.blocks[block] = b;
    }

    pub fn move_left(&mut self, block: usize) -> bool {
        self.move_block_x(block, -1)
    }

    pub fn move_right(&mut self, block: usize) -> bool {
        self.move_block_x(block, 1)
    }

    /// Tentatively shift a block sideways. Wall and settled-cell collisions
    /// are checked, and reported, before collisions with other blocks.
    fn move_block_x(&mut self, block: usize, dx: i32) -> bool {
        self.blocks[block].move_by(dx, 0);
        if self.is_in_wall(block) || self.is_in_solid_board(block) {
            self.blocks[block].move_by(-dx, 0);
            self.notify_left_right_hit(block);
            false
        } else if self.is_in_other_block(block) {
            self.blocks[block].move_by(-dx, 0);
            self.notify_block_hit(block);
            false
        } else {
            self.notify_horizontal_move(block);
            true
        }
    }

    /// Tentatively move a block down one row, reverting on collision with
    /// the ground, a settled cell, or another block.
    pub fn move_down(&mut self, block: usize) {
        self.blocks[block].move_by(0, -1);
        if self.is_in_ground(block) || self.is_in_solid_board(block) {
            self.blocks[block].move_by(0, 1);
            self.notify_ground_hit(block);
        } else if self.is_in_other_block(block) {
            self.blocks[block].move_by(0, 1);
            self.notify_block_hit(block);
        } else {
            self.notify_down_move(block);
        }
    }

    pub fn rotate_right(&mut self, block: usize) {
        self.blocks[block].rotate_right();
        if self.rotation_collides(block) {
            // revert with the exact inverse, not a blind re-rotate
            self.blocks[block].rotate_left();
            self.notify_rotation_hit(block);
        } else {
            self.notify_rotation(block);
        }
    }

    pub fn rotate_left(&mut self, block: usize) {
        self.blocks[block].rotate_left();
        if self.rotation_collides(block) {
            self.blocks[block].rotate_right();
            self.notify_rotation_hit(block);
        } else {
            self.notify_rotation(block);
        }
    }

    fn rotation_collides(&self, block: usize) -> bool {
        self.is_in_wall(block)
            || self.is_in_ground(block)
            || self.is_in_solid_board(block)
            || self.is_in_other_block(block)
    }

    /// Settle a block's cells on the board under its own index.
    pub fn copy_block_to_board(&mut self, block: usize) {
        self.board.merge_block(&self.blocks[block], block);
    }

    /// Delete the given full lines. Lines are processed topmost first so
    /// each removal's row shift leaves the still-pending lower indices
    /// untouched. After every single removal the collision cascade runs and
    /// each dragged block is reported once.
    pub fn remove_lines(&mut self, lines: &[usize]) {
        let mut lines = lines.to_vec();
        lines.sort_unstable_by(|a, b| b.cmp(a));
        for line in lines {
            self.remove_line(line);
        }
    }

    fn remove_line(&mut self, line: usize) {
        self.board.remove_row(line);
        self.resolve_line_removal_collisions();
    }

    /// Blocks overlapped by the row shift follow it down by one, which can
    /// push them into further blocks; iterate until no block collides.
    fn resolve_line_removal_collisions(&mut self) {
        let (collided, _) = self.resolve_collisions(-1);
        for &block in &collided {
            self.notify_drag_down(block);
        }
    }

    /// Move the listed blocks down one row simultaneously, then settle the
    /// fallout: blocks that ended up colliding move back up (possibly
    /// cascading into each other) and report a ground hit, every block that
    /// stayed clear reports a down move.
    pub fn drop_blocks(&mut self, blocks: &[usize]) {
        for &block in blocks {
            self.blocks[block].move_by(0, -1);
        }
        let (collided, ok) = self.resolve_collisions(1);
        for &block in &collided {
            self.notify_ground_hit(block);
        }
        for &block in &ok {
            self.notify_down_move(block);
        }
    }

    /// Worklist fixed point shared by line removal and batch drop. Every
    /// block colliding with the ground or a settled cell moves by
    /// `move_back_dy` and seeds the collided set; any block touching a
    /// collided block joins it and moves too, until a pass finds nothing
    /// new. Returns the collided and still-clear index lists in discovery
    /// order.
    fn resolve_collisions(&mut self, move_back_dy: i32) -> (IndexList, IndexList) {
        let mut collided = IndexList::new();
        let mut ok = IndexList::new();
        for block in 0..self.blocks.len() {
            if self.is_in_ground(block) || self.is_in_solid_board(block) {
                collided.push(block);
                self.blocks[block].move_by(0, move_back_dy);
            } else {
                ok.push(block);
            }
        }

        let mut more_collisions = true;
        while more_collisions {
            more_collisions = false;
            let mut still_ok = IndexList::new();
            for &block in &ok {
                if self.collides_with_any_of(block, &collided) {
                    collided.push(block);
                    self.blocks[block].move_by(0, move_back_dy);
                    more_collisions = true;
                } else {
                    still_ok.push(block);
                }
            }
            ok = still_ok;
        }
        (collided, ok)
    }

    fn is_in_wall(&self, block: usize) -> bool {
        self.blocks[block]
            .points()
            .iter()
            .any(|p| p.x < 0 || p.x >= self.board_width)
    }

    fn is_in_ground(&self, block: usize) -> bool {
        self.blocks[block].points().iter().any(|p| p.y < 0)
    }

    fn is_in_solid_board(&self, block: usize) -> bool {
        self.blocks[block]
            .points()
            .iter()
            .any(|p| self.board.is_blocked(p.x, p.y))
    }

    pub(crate) fn is_in_other_block(&self, block: usize) -> bool {
        (0..self.blocks.len()).any(|other| other != block && self.blocks_collide(block, other))
    }

    fn blocks_collide(&self, a: usize, b: usize) -> bool {
        self.blocks[a]
            .points()
            .iter()
            .any(|p1| self.blocks[b].points().contains(p1))
    }

    fn collides_with_any_of(&self, block: usize, others: &[usize]) -> bool {
        others.iter().any(|&other| self.blocks_collide(block, other))
    }

    fn notify_left_right_hit(&self, block: usize) {
        for observer in &self.collision_observers {
            observer.borrow_mut().block_hit_left_or_right(block);
        }
    }

    fn notify_block_hit(&self, block: usize) {
        for observer in &self.collision_observers {
            observer.borrow_mut().block_hit_other_block(block);
        }
    }

    fn notify_ground_hit(&self, block: usize) {
        for observer in &self.collision_observers {
            observer.borrow_mut().block_hit_ground(block);
        }
    }

    fn notify_drag_down(&self, block: usize) {
        for observer in &self.collision_observers {
            observer.borrow_mut().block_dragged_down_by_line_removal(block);
        }
    }

    fn notify_rotation_hit(&self, block: usize) {
        for observer in &self.collision_observers {
            observer.borrow_mut().block_could_not_rotate(block);
        }
    }

    fn notify_horizontal_move(&self, block: usize) {
        for observer in &self.move_observers {
            observer.borrow_mut().block_moved_horizontally(block);
        }
    }

    fn notify_down_move(&self, block: usize) {
        for observer in &self.move_observers {
            observer.borrow_mut().block_moved_down(block);
        }
    }

    fn notify_rotation(&self, block: usize) {
        for observer in &self.move_observers {
            observer.borrow_mut().block_rotated(block);
        }
    }
}
