//! Scoring module - line clear points and level progression

use crate::types::{LEVEL_INTERVALS_MS, LINES_PER_LEVEL, LINE_CLEAR_POINTS};

/// Calculate line clear score
/// lines: number of lines cleared (1-4)
/// level: current level (0-based)
pub fn line_clear_points(lines: u32, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    LINE_CLEAR_POINTS[lines as usize].saturating_mul(level.saturating_add(1))
}

/// Get drop interval for a level (in milliseconds)
/// Levels past the table keep the fastest interval
pub fn drop_interval_ms(level: u32) -> u32 {
    let last = LEVEL_INTERVALS_MS[LEVEL_INTERVALS_MS.len() - 1];
    LEVEL_INTERVALS_MS
        .get(level as usize)
        .copied()
        .unwrap_or(last)
}

/// Level and line counter after a clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: u32,
    pub lines: u32,
    pub leveled_up: bool,
}

/// Add cleared lines to the counter; reaching `LINES_PER_LEVEL` bumps the
/// level once and carries the remainder over.
pub fn advance_lines(level: u32, lines: u32, cleared: u32) -> LevelProgress {
    let lines = lines.saturating_add(cleared);
    if lines >= LINES_PER_LEVEL {
        LevelProgress {
            level: level.saturating_add(1),
            lines: lines - LINES_PER_LEVEL,
            leveled_up: true,
        }
    } else {
        LevelProgress {
            level,
            lines,
            leveled_up: false,
        }
    }
}
