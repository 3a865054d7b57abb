//! Time utilities: wall-clock formatting for server timestamps.

use chrono::{DateTime, Local, Utc};

pub const EMPTY_CLOCK: &str = "--:--";

/// Format a server timestamp as local wall-clock time, or the empty
/// placeholder when the field is not set yet.
pub fn fmt_clock(ts: Option<DateTime<Utc>>, show_seconds: bool) -> String {
    match ts {
        Some(t) => {
            let local = t.with_timezone(&Local);
            if show_seconds {
                local.format("%H:%M:%S").to_string()
            } else {
                local.format("%H:%M").to_string()
            }
        }
        None => EMPTY_CLOCK.to_string(),
    }
}

/// Local calendar date of a timestamp, `YYYY-MM-DD`.
pub fn fmt_date(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d").to_string()
}
