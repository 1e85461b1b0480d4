//! Logic module - per-tick game orchestration
//!
//! `Logic` sequences one simulation tick for up to four players sharing one
//! board. The external driver calls [`Logic::update`] once per frame with
//! that frame's input events; everything else (gravity cadence, line-clear
//! animation, scoring, sound) is plugged in through the collaborator traits
//! below.
//!
//! Every tick runs the same fixed pipeline:
//!
//! 1. If the line animation is running, route only release events to the
//!    repeat keys (so no key appears stuck held across the freeze), advance
//!    the animation, and stop.
//! 2. Report the previous tick's full lines to the scorer, per contributing
//!    player.
//! 3. Settle blocks that finished dropping last tick into the board, spawn
//!    their preview blocks, and nudge a spawn up while it overlaps another
//!    block.
//! 4. Remove the previous tick's full lines.
//! 5. Handle input: timer-driven repeats for every player first, then the
//!    explicit events in order.
//! 6. If the drop timer fires, drop every block whose player is not holding
//!    down.
//! 7. Re-scan for full lines on a scratch board including this tick's
//!    dropped blocks; start the animation if any were found.
//! 8. Flush the sound player.
//!
//! Rotation events reach the physics even for a block that already dropped
//! this frame, while movement presses are suppressed for it. That asymmetry
//! is deliberate; keep it.

use std::cell::RefCell;
use std::rc::Rc;

use arrayvec::ArrayVec;
use blockfall_input::RepeatableKey;
use blockfall_types::{BoardSize, Command, InputEvent, Point, MAX_PLAYERS};

use crate::block::Block;
use crate::board::Board;
use crate::physics::{BlockCollisionObserver, BlockMoveObserver, Physics};

/// Produces a fresh block for every spawn.
pub type BlockFactory = Box<dyn FnMut() -> Block>;

/// Pluggable gravity cadence. `update` is called once per tick; when
/// `is_time_to_drop` reports true afterwards, the synchronized drop runs.
pub trait DropTimer {
    fn reset(&mut self);
    fn update(&mut self);
    fn is_time_to_drop(&self) -> bool;
}

/// Pluggable visual gate for line clears. While `is_running` reports true
/// the simulation is frozen except for key-release bookkeeping.
pub trait LineAnimation {
    fn start(&mut self, lines: &[usize]);
    fn update(&mut self);
    fn is_running(&self) -> bool;
}

/// Receives, once per tick, which removed lines each player contributed to.
/// Ticks without a clear deliver empty lists.
pub trait Scorer {
    fn lines_removed(&mut self, lines: &PlayerLines);
}

/// A sound backend observing both collision and movement events, flushed
/// once at the end of every tick.
pub trait GameSoundPlayer: BlockCollisionObserver + BlockMoveObserver {
    fn play_sounds(&mut self);
}

/// Per-player lists of removed line indices, as handed to a [`Scorer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerLines {
    lines: Vec<Vec<usize>>,
}

impl PlayerLines {
    /// Build a report by hand, one line list per player. Mostly useful for
    /// exercising [`Scorer`] implementations in tests.
    pub fn from_lines(lines: Vec<Vec<usize>>) -> Self {
        Self { lines }
    }

    pub fn player_count(&self) -> usize {
        self.lines.len()
    }

    pub fn for_player(&self, player: usize) -> &[usize] {
        &self.lines[player]
    }
}

/// Narrow internal observer tracking which blocks hit the ground this
/// frame. Registered on the physics for collision events only.
struct DropFlags {
    dropped: Vec<bool>,
}

impl DropFlags {
    fn new(players: usize) -> Self {
        Self {
            dropped: vec![false; players],
        }
    }
}

impl BlockCollisionObserver for DropFlags {
    fn block_hit_ground(&mut self, block: usize) {
        self.dropped[block] = true;
    }
}

/// The game loop core: consumes input events, drives the physics and the
/// per-player repeat keys, and notifies the scorer and sound collaborators.
///
/// Board size and block start positions must be configured for a player
/// count before [`start_new_game`](Logic::start_new_game) is called with it.
pub struct Logic {
    factory: BlockFactory,
    physics: Physics,
    preview_blocks: Vec<Block>,
    drop_timer: Option<Rc<RefCell<dyn DropTimer>>>,
    sizes: [BoardSize; MAX_PLAYERS + 1],
    start_positions: [Vec<Point>; MAX_PLAYERS + 1],
    player_count: usize,
    drop_flags: Rc<RefCell<DropFlags>>,
    line_animation: Option<Rc<RefCell<dyn LineAnimation>>>,
    full_lines: Vec<usize>,
    left_keys: Vec<RepeatableKey>,
    right_keys: Vec<RepeatableKey>,
    down_keys: Vec<RepeatableKey>,
    initial_left_right_delay: i32,
    initial_down_delay: i32,
    fast_left_right_delay: i32,
    fast_down_delay: i32,
    scorer: Option<Rc<RefCell<dyn Scorer>>>,
    sound_player: Option<Rc<RefCell<dyn GameSoundPlayer>>>,
    sound_collision: Option<Rc<RefCell<dyn BlockCollisionObserver>>>,
    sound_move: Option<Rc<RefCell<dyn BlockMoveObserver>>>,
}

impl Logic {
    pub fn new(factory: impl FnMut() -> Block + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            physics: Physics::new(BoardSize::default(), 0),
            preview_blocks: Vec::new(),
            drop_timer: None,
            sizes: Default::default(),
            start_positions: Default::default(),
            player_count: 0,
            drop_flags: Rc::new(RefCell::new(DropFlags::new(0))),
            line_animation: None,
            full_lines: Vec::new(),
            left_keys: Vec::new(),
            right_keys: Vec::new(),
            down_keys: Vec::new(),
            initial_left_right_delay: 0,
            initial_down_delay: 0,
            fast_left_right_delay: 0,
            fast_down_delay: 0,
            scorer: None,
            sound_player: None,
            sound_collision: None,
            sound_move: None,
        }
    }

    pub fn set_drop_timer(&mut self, timer: Rc<RefCell<dyn DropTimer>>) {
        self.drop_timer = Some(timer);
    }

    pub fn set_line_animation(&mut self, animation: Rc<RefCell<dyn LineAnimation>>) {
        self.line_animation = Some(animation);
    }

    pub fn set_scorer(&mut self, scorer: Rc<RefCell<dyn Scorer>>) {
        self.scorer = Some(scorer);
    }

    /// Register a sound backend. It observes collision and movement events
    /// of every new game and is flushed at the end of each tick.
    pub fn set_sound_player<S: GameSoundPlayer + 'static>(&mut self, player: Rc<RefCell<S>>) {
        let collision: Rc<RefCell<dyn BlockCollisionObserver>> = player.clone();
        let moves: Rc<RefCell<dyn BlockMoveObserver>> = player.clone();
        self.sound_collision = Some(collision);
        self.sound_move = Some(moves);
        self.sound_player = Some(player);
    }

    pub fn set_board_size_for_player_count(&mut self, players: usize, size: BoardSize) {
        self.sizes[players] = size;
    }

    /// One start position per player; a spawned block is centered
    /// horizontally on its start x.
    pub fn set_block_start_positions(&mut self, players: usize, starts: Vec<Point>) {
        self.start_positions[players] = starts;
    }

    /// A delay of 0 repeats the key on every tick, 1 leaves one tick between
    /// repeats, and so on.
    pub fn set_initial_left_right_delay(&mut self, delay: i32) {
        self.initial_left_right_delay = delay;
    }

    pub fn set_fast_left_right_delay(&mut self, delay: i32) {
        self.fast_left_right_delay = delay;
    }

    pub fn set_initial_down_delay(&mut self, delay: i32) {
        self.initial_down_delay = delay;
    }

    pub fn set_fast_down_delay(&mut self, delay: i32) {
        self.fast_down_delay = delay;
    }

    /// Start a fresh game for the given player count. Replaces the physics,
    /// board, blocks, and repeat keys wholesale; nothing carries over from
    /// the previous game.
    pub fn start_new_game(&mut self, players: usize) {
        self.player_count = players;
        self.drop_flags = Rc::new(RefCell::new(DropFlags::new(players)));
        self.physics = Physics::new(self.sizes[players], players);
        self.physics.add_collision_observer(self.drop_flags.clone());
        if let Some(observer) = &self.sound_collision {
            self.physics.add_collision_observer(observer.clone());
        }
        if let Some(observer) = &self.sound_move {
            self.physics.add_move_observer(observer.clone());
        }
        self.create_blocks();
        self.create_repeat_keys();
    }

    fn create_blocks(&mut self) {
        self.preview_blocks = (0..self.player_count).map(|_| (self.factory)()).collect();
        for player in 0..self.player_count {
            self.reset_block_to_preview(player);
        }
        if let Some(timer) = &self.drop_timer {
            timer.borrow_mut().reset();
        }
    }

    fn create_repeat_keys(&mut self) {
        self.left_keys = self.make_keys(self.initial_left_right_delay, self.fast_left_right_delay);
        self.right_keys = self.make_keys(self.initial_left_right_delay, self.fast_left_right_delay);
        self.down_keys = self.make_keys(self.initial_down_delay, self.fast_down_delay);
    }

    fn make_keys(&self, initial: i32, fast: i32) -> Vec<RepeatableKey> {
        (0..self.player_count)
            .map(|_| RepeatableKey::new(initial, fast))
            .collect()
    }

    pub fn board(&self) -> &Board {
        self.physics.board()
    }

    pub fn board_mut(&mut self) -> &mut Board {
        self.physics.board_mut()
    }

    /// The players' active blocks, indexed by player.
    pub fn blocks(&self) -> &[Block] {
        self.physics.blocks()
    }

    /// The queued next block per player, in spawn-local coordinates.
    pub fn preview_blocks(&self) -> &[Block] {
        &self.preview_blocks
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Run one simulation tick with this tick's input events.
    pub fn update(&mut self, events: &[InputEvent]) {
        let animating = self
            .line_animation
            .as_ref()
            .is_some_and(|animation| animation.borrow().is_running());
        if animating {
            self.handle_release_events(events);
            if let Some(animation) = &self.line_animation {
                animation.borrow_mut().update();
            }
            return;
        }
        self.give_scores_for_full_lines();
        self.reset_previously_dropped_blocks();
        self.remove_full_lines();
        self.handle_input_events(events);
        self.drop_blocks_if_time_for_it();
        self.check_complete_lines();
        if let Some(player) = &self.sound_player {
            player.borrow_mut().play_sounds();
        }
    }

    /// Attribute the previous tick's full lines: a player contributed to a
    /// line if their dropped block occupies that row (it is still unmerged
    /// at this point in the tick).
    fn give_scores_for_full_lines(&mut self) {
        let Some(scorer) = self.scorer.clone() else {
            return;
        };
        let mut lines = vec![Vec::new(); self.player_count];
        for &line in &self.full_lines {
            for player in 0..self.player_count {
                if self.has_dropped(player) && self.block_in_line(player, line) {
                    lines[player].push(line);
                }
            }
        }
        scorer.borrow_mut().lines_removed(&PlayerLines { lines });
    }

    fn block_in_line(&self, player: usize, line: usize) -> bool {
        self.physics.blocks()[player]
            .points()
            .iter()
            .any(|p| p.y == line as i32)
    }

    fn has_dropped(&self, player: usize) -> bool {
        self.drop_flags.borrow().dropped[player]
    }

    fn reset_previously_dropped_blocks(&mut self) {
        for player in 0..self.player_count {
            if !self.has_dropped(player) {
                continue;
            }
            self.physics.copy_block_to_board(player);
            self.reset_block_to_preview(player);
            while self.physics.is_in_other_block(player) {
                self.physics.block_mut(player).move_by(0, 1);
            }
            self.down_keys[player].release();
            self.drop_flags.borrow_mut().dropped[player] = false;
        }
    }

    fn reset_block_to_preview(&mut self, player: usize) {
        let fresh = (self.factory)();
        let mut block = std::mem::replace(&mut self.preview_blocks[player], fresh);
        let start = self.start_positions[self.player_count][player];
        let (w, _) = block.size();
        block.move_by(start.x - w / 2, start.y);
        self.physics.set_block(player, block);
    }

    fn remove_full_lines(&mut self) {
        let lines = std::mem::take(&mut self.full_lines);
        self.physics.remove_lines(&lines);
        self.full_lines = lines;
    }

    fn handle_release_events(&mut self, events: &[InputEvent]) {
        for event in events {
            if event.player >= self.player_count {
                continue;
            }
            match event.command {
                Command::DownReleased => self.down_keys[event.player].release(),
                Command::LeftReleased => self.left_keys[event.player].release(),
                Command::RightReleased => self.right_keys[event.player].release(),
                _ => {}
            }
        }
    }

    fn handle_input_events(&mut self, events: &[InputEvent]) {
        self.handle_key_repeats();

        for event in events {
            if event.player >= self.player_count {
                continue;
            }
            let player = event.player;
            match event.command {
                Command::DownPressed => {
                    if !self.has_dropped(player) && self.down_keys[player].press() {
                        self.physics.move_down(player);
                    }
                }
                Command::DownReleased => self.down_keys[player].release(),

                Command::LeftPressed => {
                    if !self.has_dropped(player)
                        && self.left_keys[player].press()
                        && !self.physics.move_left(player)
                    {
                        self.left_keys[player].blocked();
                    }
                }
                Command::LeftReleased => self.left_keys[player].release(),

                Command::RightPressed => {
                    if !self.has_dropped(player)
                        && self.right_keys[player].press()
                        && !self.physics.move_right(player)
                    {
                        self.right_keys[player].blocked();
                    }
                }
                Command::RightReleased => self.right_keys[player].release(),

                Command::RotateRight => self.physics.rotate_right(player),
                Command::RotateLeft => self.physics.rotate_left(player),

                // Pause belongs to the external driver.
                Command::Pause => {}
            }
        }
    }

    fn handle_key_repeats(&mut self) {
        for player in 0..self.player_count {
            if self.right_keys[player].update() {
                self.physics.move_right(player);
            }
            if self.left_keys[player].update() {
                self.physics.move_left(player);
            }
            if self.down_keys[player].update() {
                self.physics.move_down(player);
            }
        }
    }

    /// Timer-driven gravity: players holding down are exempt, they already
    /// descend under their own repeat key.
    fn drop_blocks_if_time_for_it(&mut self) {
        let Some(timer) = self.drop_timer.clone() else {
            return;
        };
        timer.borrow_mut().update();
        if timer.borrow().is_time_to_drop() {
            let dropping: ArrayVec<usize, MAX_PLAYERS> = (0..self.player_count)
                .filter(|&player| !self.down_keys[player].is_down())
                .collect();
            self.physics.drop_blocks(&dropping);
        }
    }

    /// Scan for full lines on a scratch board that includes this tick's
    /// dropped blocks. Rows at or above the board top can never be full.
    fn check_complete_lines(&mut self) {
        let mut scratch = self.physics.board().clone();
        for player in 0..self.player_count {
            if self.has_dropped(player) {
                scratch.merge_block(&self.physics.blocks()[player], player);
            }
        }

        let (_, height) = scratch.size();
        self.full_lines.clear();
        for y in 0..height {
            if scratch.is_line_full(y) {
                self.full_lines.push(y as usize);
            }
        }

        if !self.full_lines.is_empty() {
            if let Some(animation) = &self.line_animation {
                animation.borrow_mut().start(&self.full_lines);
            }
        }
    }
}
