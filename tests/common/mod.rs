//! Shared helpers for the integration tests: board-string scenario
//! rendering and observer spies.
//!
//! Scenario strings list the top row first; '.' is an empty cell, a digit is
//! the block (or board cell) of that player index.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use blockfall::core::logic::{DropTimer, GameSoundPlayer, LineAnimation, PlayerLines, Scorer};
use blockfall::core::physics::{BlockCollisionObserver, BlockMoveObserver, Physics};
use blockfall::core::{Block, Board, Logic};
use blockfall::types::{BoardSize, Point};

pub fn pt(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

pub fn block(points: &[(i32, i32)]) -> Block {
    Block::new(points.iter().map(|&(x, y)| pt(x, y)).collect())
}

/// A T piece without rotations, bottom-center cell at (x+1, y).
pub fn t_at(x: i32, y: i32) -> Block {
    block(&[(x + 1, y), (x, y + 1), (x + 1, y + 1), (x + 2, y + 1)])
}

/// A vertical I piece without rotations, bottom cell at (x, y).
pub fn i_at(x: i32, y: i32) -> Block {
    block(&[(x, y), (x, y + 1), (x, y + 2), (x, y + 3)])
}

/// A single-cell block whose one rotation delta is (dx, dy).
pub fn rotating_point(x: i32, y: i32, dx: i32, dy: i32) -> Block {
    Block::with_rotations(vec![pt(x, y)], vec![vec![pt(dx, dy)]])
}

/// Settle the given cells on the board through a temporary block.
pub fn fill_board(physics: &mut Physics, player: usize, cells: &[(i32, i32)]) {
    physics.set_block(player, block(cells));
    physics.copy_block_to_board(player);
    physics.set_block(player, Block::default());
}

fn render_rows(w: i32, h: i32, cell: impl Fn(i32, i32) -> Option<usize>) -> String {
    let mut out = String::new();
    for y in (0..h).rev() {
        for x in 0..w {
            match cell(x, y) {
                Some(player) => out.push(char::from_digit(player as u32, 10).unwrap()),
                None => out.push('.'),
            }
        }
        out.push('\n');
    }
    out
}

fn block_at(blocks: &[Block], x: i32, y: i32) -> Option<usize> {
    blocks
        .iter()
        .position(|b| b.points().contains(&pt(x, y)))
}

pub fn render_blocks(physics: &Physics) -> String {
    let (w, h) = physics.board().size();
    render_rows(w, h, |x, y| block_at(physics.blocks(), x, y))
}

pub fn render_board(board: &Board) -> String {
    let (w, h) = board.size();
    render_rows(w, h, |x, y| board.at(x, y))
}

/// Board cells overlaid with the active blocks, the way a renderer sees the
/// game.
pub fn render_game(logic: &Logic) -> String {
    let (w, h) = logic.board().size();
    render_rows(w, h, |x, y| {
        block_at(logic.blocks(), x, y).or_else(|| logic.board().at(x, y))
    })
}

pub fn assert_blocks(physics: &Physics, message: &str, expected: &[&str]) {
    assert_eq!(render_blocks(physics), join(expected), "{message}");
}

pub fn assert_board(board: &Board, message: &str, expected: &[&str]) {
    assert_eq!(render_board(board), join(expected), "{message}");
}

pub fn assert_game(logic: &Logic, message: &str, expected: &[&str]) {
    assert_eq!(render_game(logic), join(expected), "{message}");
}

fn join(rows: &[&str]) -> String {
    let mut s = rows.join("\n");
    s.push('\n');
    s
}

/// A `Logic` whose factory always yields a fresh single-cell block at (0, 0).
pub fn single_block_game(players: usize, size: (i32, i32), starts: &[(i32, i32)]) -> Logic {
    let mut logic = Logic::new(|| block(&[(0, 0)]));
    logic.set_board_size_for_player_count(players, BoardSize::new(size.0, size.1));
    logic.set_block_start_positions(players, starts.iter().map(|&(x, y)| pt(x, y)).collect());
    logic
}

#[derive(Default)]
pub struct SpyCollisions {
    pub horizontal_hits: Vec<usize>,
    pub block_hits: Vec<usize>,
    pub ground_hits: Vec<usize>,
    pub dragged_down: Vec<usize>,
    pub rotation_hits: Vec<usize>,
}

impl SpyCollisions {
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }

    pub fn assert_nothing_hit(&self) {
        assert!(self.horizontal_hits.is_empty(), "no horizontal hits");
        assert!(self.block_hits.is_empty(), "no block hits");
        assert!(self.ground_hits.is_empty(), "no ground hits");
    }
}

impl BlockCollisionObserver for SpyCollisions {
    fn block_hit_left_or_right(&mut self, block: usize) {
        self.horizontal_hits.push(block);
    }

    fn block_hit_other_block(&mut self, block: usize) {
        self.block_hits.push(block);
    }

    fn block_hit_ground(&mut self, block: usize) {
        self.ground_hits.push(block);
    }

    fn block_dragged_down_by_line_removal(&mut self, block: usize) {
        self.dragged_down.push(block);
    }

    fn block_could_not_rotate(&mut self, block: usize) {
        self.rotation_hits.push(block);
    }
}

#[derive(Default)]
pub struct SpyMoves {
    pub log: String,
}

impl SpyMoves {
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }
}

impl BlockMoveObserver for SpyMoves {
    fn block_moved_horizontally(&mut self, block: usize) {
        self.log.push_str(&format!("{block} horizontal "));
    }

    fn block_moved_down(&mut self, block: usize) {
        self.log.push_str(&format!("{block} down "));
    }

    fn block_rotated(&mut self, block: usize) {
        self.log.push_str(&format!("{block} rotated "));
    }
}

#[derive(Default)]
pub struct SpyDropTimer {
    pub resets: usize,
    pub updates: usize,
    pub time_to_drop: bool,
}

impl SpyDropTimer {
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }

    pub fn always_dropping() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            time_to_drop: true,
            ..Self::default()
        }))
    }
}

impl DropTimer for SpyDropTimer {
    fn reset(&mut self) {
        self.resets += 1;
    }

    fn update(&mut self) {
        self.updates += 1;
    }

    fn is_time_to_drop(&self) -> bool {
        self.time_to_drop
    }
}

#[derive(Default)]
pub struct SpyAnimation {
    pub started: Vec<Vec<usize>>,
    pub updates: usize,
    pub running: bool,
}

impl SpyAnimation {
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }
}

impl LineAnimation for SpyAnimation {
    fn start(&mut self, lines: &[usize]) {
        self.started.push(lines.to_vec());
    }

    fn update(&mut self) {
        self.updates += 1;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

#[derive(Default)]
pub struct SpyScorer {
    pub reports: Vec<PlayerLines>,
}

impl SpyScorer {
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }

    pub fn last_for_player(&self, player: usize) -> Vec<usize> {
        self.reports
            .last()
            .map(|lines| lines.for_player(player).to_vec())
            .unwrap_or_default()
    }
}

impl Scorer for SpyScorer {
    fn lines_removed(&mut self, lines: &PlayerLines) {
        self.reports.push(lines.clone());
    }
}

/// Spy standing in for a sound backend: records what it observes and how
/// often it was flushed.
#[derive(Default)]
pub struct SpySoundPlayer {
    pub move_log: String,
    pub horizontal_hits: Vec<usize>,
    pub played: usize,
}

impl SpySoundPlayer {
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }
}

impl BlockCollisionObserver for SpySoundPlayer {
    fn block_hit_left_or_right(&mut self, block: usize) {
        self.horizontal_hits.push(block);
    }
}

impl BlockMoveObserver for SpySoundPlayer {
    fn block_moved_down(&mut self, block: usize) {
        self.move_log.push_str(&format!("{block} down "));
    }
}

impl GameSoundPlayer for SpySoundPlayer {
    fn play_sounds(&mut self) {
        self.played += 1;
    }
}
