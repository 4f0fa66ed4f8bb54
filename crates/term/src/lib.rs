//! Terminal game renderer.
//!
//! Snapshots from the engine are drawn into a plain framebuffer, which is
//! then flushed to the terminal as a diff against the previous frame. Board
//! cells are two columns wide to offset the usual glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use palette::Palette;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
