//! Cell value to color mapping.
//!
//! The engine only knows cell values 0..=7; colors are a presentation concern.

use crate::fb::Rgb;
use crate::types::{CellValue, N_SHAPES};

/// Colors indexed by cell value (0 = empty background)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; N_SHAPES + 1],
}

impl Palette {
    pub const fn new(colors: [Rgb; N_SHAPES + 1]) -> Self {
        Self { colors }
    }

    /// Color for a cell value; unknown values fall back to the background
    pub fn color(&self, value: CellValue) -> Rgb {
        self.colors
            .get(value as usize)
            .copied()
            .unwrap_or(self.colors[0])
    }

    pub fn background(&self) -> Rgb {
        self.colors[0]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new([
            Rgb::new(2, 8, 23),     // empty
            Rgb::new(0, 224, 255),  // I
            Rgb::new(255, 73, 118), // J
            Rgb::new(255, 200, 87), // L
            Rgb::new(127, 255, 0),  // O
            Rgb::new(147, 112, 255), // S
            Rgb::new(255, 123, 0),  // T
            Rgb::new(255, 0, 184),  // Z
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_has_a_distinct_color() {
        let p = Palette::default();
        for a in 1..=7u8 {
            assert_ne!(p.color(a), p.background());
            for b in (a + 1)..=7u8 {
                assert_ne!(p.color(a), p.color(b));
            }
        }
    }

    #[test]
    fn out_of_range_value_is_background() {
        let p = Palette::default();
        assert_eq!(p.color(42), p.background());
    }
}
