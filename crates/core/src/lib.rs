//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the rules that must hold regardless of where the game is
//! drawn. It has **zero dependencies** on UI, timing, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Every rule is a plain function or method on a plain value
//! - **Portable**: Runs in a terminal, a GUI, or a headless harness
//!
//! # Module Structure
//!
//! - [`shapes`]: The 7 tetromino templates and quarter-turn rotation
//! - [`board`]: 10x20 grid with collision, merge and line clearing
//! - [`piece`]: Active piece, spawn placement and the kick-retry rotation
//! - [`rng`]: Seedable uniform piece selection
//! - [`scoring`]: Line clear awards, level and gravity interval
//!
//! # Example
//!
//! ```
//! use blockfall_core::{try_rotate, Board, Piece};
//! use blockfall_types::{RotationDir, ShapeKind};
//!
//! let board = Board::new();
//! let mut piece = Piece::spawn(ShapeKind::T);
//! assert!(!board.collides(&piece));
//!
//! assert!(try_rotate(&board, &mut piece, RotationDir::Cw));
//! assert_eq!(piece.x, 4);
//! ```

pub mod board;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use piece::{random_piece, spawn_x, try_rotate, Piece, KICK_OFFSETS};
pub use rng::SimpleRng;
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_award};
pub use shapes::{rotate, template, Shape};
