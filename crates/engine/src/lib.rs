//! Game engine crate - piece lifecycle, scoring and game state
//!
//! Builds on [`blockfall_core`] to run a complete game:
//!
//! - **Gravity**: the host calls [`GameEngine::tick`] with elapsed milliseconds
//! - **Commands**: [`GameEngine::apply`] takes one [`GameCommand`](types::GameCommand)
//! - **Progression**: score, lines, level and drop interval update on every lock
//! - **Observation**: [`GameEngine::snapshot`] returns a serializable [`GameSnapshot`]
//!
//! # Example
//!
//! ```
//! use blockfall_engine::GameEngine;
//! use blockfall_types::GameCommand;
//!
//! let mut game = GameEngine::new(12345);
//!
//! game.apply(GameCommand::MoveRight);
//! game.apply(GameCommand::RotateCw);
//! game.apply(GameCommand::HardDrop);
//!
//! // Gravity runs off elapsed time supplied by the host
//! game.tick(16);
//!
//! assert!(!game.game_over());
//! assert!(game.board().cells().iter().any(|&v| v != 0));
//! ```

pub mod engine;
pub mod snapshot;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use engine::{GameEngine, GamePhase, LockEvent, MSG_GAME_OVER, MSG_PAUSED};
pub use snapshot::{ActiveSnapshot, BoardGrid, GameSnapshot};
