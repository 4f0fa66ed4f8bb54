//! Read-only view of the engine for renderers and observers
//!
//! A snapshot is plain `Copy` data: renderers never hold a borrow of the
//! engine, and the headless runner serializes it straight to JSON.

use serde::Serialize;

use crate::core::Piece;
use crate::engine::{GamePhase, LockEvent};
use crate::types::{CellValue, BASE_DROP_MS, BOARD_HEIGHT, BOARD_WIDTH, MIN_LEVEL};

pub type BoardGrid = [[CellValue; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSnapshot {
    pub kind: &'static str,
    pub x: i8,
    pub y: i8,
    /// Side length of the shape matrix
    pub size: u8,
    /// Shape matrix, padded to 4x4 with zeros
    pub shape: [[CellValue; 4]; 4],
}

impl ActiveSnapshot {
    /// Occupied cells in board coordinates as `(x, y, value)`
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8, CellValue)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |dy| {
            (0..n).filter_map(move |dx| {
                let v = self.shape[dy][dx];
                (v != 0).then_some((self.x + dx as i8, self.y + dy as i8, v))
            })
        })
    }
}

impl From<&Piece> for ActiveSnapshot {
    fn from(piece: &Piece) -> Self {
        let mut shape = [[0; 4]; 4];
        for (dst, src) in shape.iter_mut().zip(piece.shape.rows()) {
            dst[..src.len()].copy_from_slice(src);
        }
        Self {
            kind: piece.kind.as_str(),
            x: piece.x,
            y: piece.y,
            size: piece.shape.size() as u8,
            shape,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub board: BoardGrid,
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
    pub phase: GamePhase,
    pub paused: bool,
    pub game_over: bool,
    pub message: &'static str,
    pub seed: u32,
    pub last_event: Option<LockEvent>,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            score: 0,
            lines: 0,
            level: MIN_LEVEL,
            drop_interval_ms: BASE_DROP_MS,
            phase: GamePhase::Falling,
            paused: false,
            game_over: false,
            message: "",
            seed: 0,
            last_event: None,
        }
    }
}
