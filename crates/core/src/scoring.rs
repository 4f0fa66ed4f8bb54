//! Scoring module - line clear awards, leveling and gravity speed
//!
//! All rules are pure functions of (rows cleared, level, total lines), so the
//! engine only stores their results.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_FLOOR_MS, DROP_INTERVAL_STEP_MS, LINES_PER_LEVEL, LINE_SCORES,
    MAX_LEVEL, MIN_LEVEL,
};

/// Points for clearing `rows` rows at once at `level` (1-based)
///
/// Returns 0 for no rows or an impossible row count.
pub fn line_clear_award(rows: usize, level: u32) -> u32 {
    LINE_SCORES
        .get(rows)
        .map_or(0, |base| base.saturating_mul(level))
}

/// Level reached after `total_lines` lines: 1 + lines / 10, capped at 15
pub fn level_for_lines(total_lines: u32) -> u32 {
    (MIN_LEVEL + total_lines / LINES_PER_LEVEL).min(MAX_LEVEL)
}

/// Gravity interval for a level: 800ms minus 40ms per level above 1, floor 120ms
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(MIN_LEVEL).saturating_mul(DROP_INTERVAL_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_FLOOR_MS)
}
