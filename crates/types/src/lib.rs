//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, headless scripting).
//!
//! # Board Dimensions
//!
//! The playfield is fixed:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Default host frame interval (~60 FPS) |
//! | `BASE_DROP_MS` | 800 | Gravity interval at level 1 |
//! | `DROP_INTERVAL_STEP_MS` | 40 | Interval reduction per level |
//! | `DROP_INTERVAL_FLOOR_MS` | 120 | Fastest gravity |
//!
//! # Progression
//!
//! | Rows cleared | Base award |
//! |--------------|------------|
//! | 1 | 40 |
//! | 2 | 100 |
//! | 3 | 300 |
//! | 4 | 1200 |
//!
//! The award is multiplied by the current level. Level is
//! `1 + lines / 10`, capped at 15.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameCommand, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Cell values double as shape identity
//! assert_eq!(ShapeKind::I.cell_value(), 1);
//! assert_eq!(ShapeKind::from_cell_value(7), Some(ShapeKind::Z));
//!
//! // Parse a command (case-insensitive)
//! let cmd = GameCommand::from_str("hardDrop").unwrap();
//! assert_eq!(cmd, GameCommand::HardDrop);
//!
//! // Board dimensions
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Number of distinct shapes (and nonzero cell values)
pub const N_SHAPES: usize = 7;

/// Default host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1
pub const BASE_DROP_MS: u32 = 800;

/// Gravity interval reduction per level above 1
pub const DROP_INTERVAL_STEP_MS: u32 = 40;

/// Fastest gravity interval
pub const DROP_INTERVAL_FLOOR_MS: u32 = 120;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Starting level
pub const MIN_LEVEL: u32 = 1;

/// Highest reachable level
pub const MAX_LEVEL: u32 = 15;

/// Line clear base awards, indexed by rows cleared in one lock
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Value stored in a board cell: 0 = empty, 1..=7 = shape identity
pub type CellValue = u8;

/// Empty board cell
pub const EMPTY: CellValue = 0;

/// Tetromino kinds, in cell-value order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeKind {
    /// All kinds, ordered by cell value
    pub const ALL: [ShapeKind; N_SHAPES] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    /// Nonzero cell value identifying this kind on the board
    pub fn cell_value(&self) -> CellValue {
        match self {
            ShapeKind::I => 1,
            ShapeKind::J => 2,
            ShapeKind::L => 3,
            ShapeKind::O => 4,
            ShapeKind::S => 5,
            ShapeKind::T => 6,
            ShapeKind::Z => 7,
        }
    }

    /// Map a board cell value back to its kind (None for empty or invalid values)
    pub fn from_cell_value(v: CellValue) -> Option<Self> {
        match v {
            1..=7 => Some(Self::ALL[(v - 1) as usize]),
            _ => None,
        }
    }

    /// Parse shape kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            "o" => Some(ShapeKind::O),
            "s" => Some(ShapeKind::S),
            "t" => Some(ShapeKind::T),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    /// Uppercase letter for display
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::J => "J",
            ShapeKind::L => "L",
            ShapeKind::O => "O",
            ShapeKind::S => "S",
            ShapeKind::T => "T",
            ShapeKind::Z => "Z",
        }
    }
}

/// Direction of a quarter turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDir {
    Cw,
    Ccw,
}

/// Player commands accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameCommand {
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateCw,
    HardDrop,
    TogglePause,
    Restart,
}

impl GameCommand {
    pub const ALL: [GameCommand; 7] = [
        GameCommand::MoveLeft,
        GameCommand::MoveRight,
        GameCommand::SoftDrop,
        GameCommand::RotateCw,
        GameCommand::HardDrop,
        GameCommand::TogglePause,
        GameCommand::Restart,
    ];

    /// Parse command from string (case-insensitive, for scripts)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "softdrop" => Some(GameCommand::SoftDrop),
            "rotatecw" => Some(GameCommand::RotateCw),
            "harddrop" => Some(GameCommand::HardDrop),
            "pause" | "togglepause" => Some(GameCommand::TogglePause),
            "restart" => Some(GameCommand::Restart),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::SoftDrop => "softDrop",
            GameCommand::RotateCw => "rotateCw",
            GameCommand::HardDrop => "hardDrop",
            GameCommand::TogglePause => "pause",
            GameCommand::Restart => "restart",
        }
    }
}
