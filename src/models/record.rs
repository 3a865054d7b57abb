use super::status_code::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw attendance record for one calendar day, as returned by the server.
///
/// The client fetches it read-only and derives session state from it; it is
/// never mutated locally. `clockOutTime` set implies `clockInTime` set, and at
/// most one break interval is open at a time, but the derivation is defensive
/// about records that violate either.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub clock_in_time: Option<DateTime<Utc>>,
    pub clock_out_time: Option<DateTime<Utc>>,
    pub break_start_time: Option<DateTime<Utc>>,
    pub break_end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_break_minutes: i64,
    #[serde(default)]
    pub status_code: StatusCode,
}

impl AttendanceRecord {
    /// Accumulated break minutes, clamped so bad server data cannot go negative.
    pub fn booked_break_minutes(&self) -> i64 {
        self.total_break_minutes.max(0)
    }

    /// True when the record carries an open break interval: a start without a
    /// matching end, or a start newer than the last recorded end.
    pub fn has_open_break(&self) -> bool {
        match (self.break_start_time, self.break_end_time) {
            (Some(_), None) => true,
            (Some(start), Some(end)) => end < start,
            _ => false,
        }
    }
}
