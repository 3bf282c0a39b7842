//! Rental time-remaining arithmetic.

use std::time::{SystemTime, UNIX_EPOCH};

const SECONDS_PER_HOUR: u64 = 3600;

/// Whole hours remaining until `end_time`, rounded up, clamped at 0.
///
/// The value is already human-scale; it is rendered as-is, with no octa
/// conversion.
pub fn remaining_hours(end_time: u64, now: u64) -> u64 {
    end_time.saturating_sub(now).div_ceil(SECONDS_PER_HOUR)
}

/// Current Unix time in seconds.
pub fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
