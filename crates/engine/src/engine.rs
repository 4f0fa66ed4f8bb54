//! Game engine module - owns the board, the active piece and progression
//!
//! The engine is a plain value: the host calls [`GameEngine::tick`] once per
//! frame with the elapsed time and forwards player commands through
//! [`GameEngine::apply`] (or the individual methods). Nothing here sleeps,
//! spawns, or reads a clock.
//!
//! Lifecycle of a piece:
//!
//! 1. Spawned centered on row 0 (game over if it collides right away)
//! 2. Falls one row per gravity interval, or on soft drop
//! 3. Locks when the next step down would collide (or on hard drop)
//! 4. Full rows clear, score/lines/level update, the next piece spawns

use serde::Serialize;
use tracing::{debug, info};

use crate::core::{
    drop_interval_ms, level_for_lines, line_clear_award, random_piece, try_rotate, Board, Piece,
    SimpleRng,
};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameCommand, RotationDir, BASE_DROP_MS, MIN_LEVEL};

/// Message shown while paused
pub const MSG_PAUSED: &str = "Paused";

/// Message shown once the stack reaches the spawn area
pub const MSG_GAME_OVER: &str = "Game Over - press R to restart";

/// Coarse engine state, derived from the flags
///
/// Locking and clearing happen inside a single call, so they never show up
/// as an observable phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    Falling,
    Paused,
    GameOver,
}

/// Result of the most recent lock, kept for observers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub award: u32,
    /// Whether the replacement piece could not spawn
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    active: Option<Piece>,
    rng: SimpleRng,
    score: u32,
    lines: u32,
    level: u32,
    drop_interval_ms: u32,
    /// Gravity accumulator
    drop_counter_ms: u32,
    paused: bool,
    game_over: bool,
    message: &'static str,
    last_event: Option<LockEvent>,
}

impl GameEngine {
    /// Create a new game with the given RNG seed and spawn the first piece
    pub fn new(seed: u32) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// Create a game on a pre-filled board (puzzles, tests)
    ///
    /// If the first piece cannot spawn the game starts over.
    pub fn with_board(seed: u32, board: Board) -> Self {
        let mut engine = Self {
            board,
            active: None,
            rng: SimpleRng::new(seed),
            score: 0,
            lines: 0,
            level: MIN_LEVEL,
            drop_interval_ms: BASE_DROP_MS,
            drop_counter_ms: 0,
            paused: false,
            game_over: false,
            message: "",
            last_event: None,
        };
        engine.spawn_piece();
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// HUD message ("" when there is nothing to show)
    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else if self.paused {
            GamePhase::Paused
        } else {
            GamePhase::Falling
        }
    }

    /// Whether move/rotate/drop commands currently have any effect
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    pub fn last_event(&self) -> Option<LockEvent> {
        self.last_event
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance gravity by `elapsed_ms`
    ///
    /// Returns true if the piece dropped (or locked) this tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.playable() {
            return false;
        }
        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        self.soft_drop_if_due()
    }

    fn soft_drop_if_due(&mut self) -> bool {
        if self.drop_counter_ms > self.drop_interval_ms {
            return self.drop();
        }
        false
    }

    /// Move the piece down one row, locking it if it cannot move
    ///
    /// Resets the gravity accumulator, whether triggered by gravity or by the player.
    pub fn drop(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        let below = piece.shifted(0, 1);
        if self.board.collides(&below) {
            self.lock_piece();
        } else {
            self.active = Some(below);
        }
        self.drop_counter_ms = 0;
        true
    }

    /// Drop the piece as far as it goes and lock it immediately
    ///
    /// The gravity accumulator is left as is.
    pub fn hard_drop(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        let Some(mut piece) = self.active else {
            return false;
        };

        while !self.board.collides(&piece.shifted(0, 1)) {
            piece.y += 1;
        }
        self.active = Some(piece);
        self.lock_piece();
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        if !self.playable() {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        let moved = piece.shifted(dx, 0);
        if self.board.collides(&moved) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Rotate the active piece with the sideways kick
    pub fn rotate(&mut self, dir: RotationDir) -> bool {
        if !self.playable() {
            return false;
        }
        match self.active.as_mut() {
            Some(piece) => try_rotate(&self.board, piece, dir),
            None => false,
        }
    }

    /// Toggle pause; ignored once the game is over
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        self.message = if self.paused { MSG_PAUSED } else { "" };
        debug!(paused = self.paused, "pause toggled");
        true
    }

    /// Start a fresh game on an empty board
    ///
    /// The piece sequence continues from the current RNG state, so a whole
    /// session stays reproducible from the original seed.
    pub fn restart(&mut self) -> bool {
        info!(score = self.score, lines = self.lines, level = self.level, "restarting");
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.level = MIN_LEVEL;
        self.drop_interval_ms = BASE_DROP_MS;
        self.drop_counter_ms = 0;
        self.paused = false;
        self.game_over = false;
        self.message = "";
        self.last_event = None;
        self.spawn_piece();
        true
    }

    /// Apply a player command
    ///
    /// Returns whether the command changed anything.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::MoveLeft => self.move_left(),
            GameCommand::MoveRight => self.move_right(),
            GameCommand::SoftDrop => self.drop(),
            GameCommand::RotateCw => self.rotate(RotationDir::Cw),
            GameCommand::HardDrop => self.hard_drop(),
            GameCommand::TogglePause => self.toggle_pause(),
            GameCommand::Restart => self.restart(),
        }
    }

    /// Row the active piece would land on (for ghost rendering)
    pub fn ghost_y(&self) -> Option<i8> {
        let mut piece = self.active?;
        while !self.board.collides(&piece.shifted(0, 1)) {
            piece.y += 1;
        }
        Some(piece.y)
    }

    /// Spawn a random piece; ends the game if it collides at spawn
    fn spawn_piece(&mut self) -> bool {
        let piece = random_piece(&mut self.rng);
        if self.board.collides(&piece) {
            self.active = None;
            self.game_over = true;
            self.paused = false;
            self.message = MSG_GAME_OVER;
            info!(score = self.score, lines = self.lines, level = self.level, "game over");
            return false;
        }
        self.active = Some(piece);
        true
    }

    /// Merge the active piece, clear rows, update progression, spawn the next piece
    fn lock_piece(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board.merge(&piece);
        let cleared = self.board.clear_full_rows();
        let award = self.award_lines(cleared.len());

        debug!(
            kind = piece.kind.as_str(),
            x = piece.x,
            y = piece.y,
            lines_cleared = cleared.len(),
            award,
            "piece locked"
        );

        self.spawn_piece();

        self.last_event = Some(LockEvent {
            lines_cleared: cleared.len() as u32,
            award,
            game_over: self.game_over,
        });
    }

    /// Score a clear at the current level, then advance lines, level and gravity
    fn award_lines(&mut self, rows: usize) -> u32 {
        if rows == 0 {
            return 0;
        }

        let award = line_clear_award(rows, self.level);
        self.score = self.score.saturating_add(award);
        self.lines = self.lines.saturating_add(rows as u32);

        let level = level_for_lines(self.lines);
        if level != self.level {
            info!(from = self.level, to = level, "level up");
            self.level = level;
            self.drop_interval_ms = drop_interval_ms(level);
        }
        award
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.drop_interval_ms = self.drop_interval_ms;
        out.phase = self.phase();
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.message = self.message;
        out.seed = self.rng.seed();
        out.last_event = self.last_event;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(1)
    }
}
