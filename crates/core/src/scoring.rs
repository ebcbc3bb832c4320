//! Scoring module - line-clear bonuses and drop increments
//!
//! Scoring is intentionally flat: no levels, combos or back-to-back bonuses.
//! A lock awards the table value for the rows it cleared, and every row a
//! player moves a piece down (soft or hard drop) awards a fixed increment.

use crate::types::{DOWN_STEP_SCORE, LINE_SCORES};

/// Points for clearing `lines` rows with one lock
///
/// Values outside 0..=4 cannot come from a single piece and score nothing.
pub fn line_clear_score(lines: usize) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

/// Points for moving a piece down `rows` rows
pub fn drop_score(rows: u32) -> u32 {
    rows.saturating_mul(DOWN_STEP_SCORE)
}
