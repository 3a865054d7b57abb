//! Session state derivation: the pure mapping from a raw attendance record
//! plus the current wall-clock time to a `SessionState`.

use crate::models::record::AttendanceRecord;
use crate::models::session::SessionState;
use chrono::{DateTime, Duration, Utc};

/// Derive the current session state from a server record.
///
/// Pure and infallible: every well-formed or malformed record maps to some
/// state, durations are clamped to zero instead of going negative, and the
/// same inputs always produce the same output. The caller supplies `now`
/// (refreshed on its own schedule, e.g. once per second in watch mode) so the
/// result can be recomputed at any render tick without touching the clock
/// here.
pub fn derive_state(record: &AttendanceRecord, now: DateTime<Utc>) -> SessionState {
    let Some(clock_in) = record.clock_in_time else {
        return SessionState::NotStarted;
    };

    let break_total = Duration::minutes(record.booked_break_minutes());

    if let Some(clock_out) = record.clock_out_time {
        // clockOut < clockIn is bad server data: render a zero-length day
        // rather than fail.
        let worked_total = clamp_non_negative(clock_out - clock_in - break_total);
        return SessionState::Completed {
            worked_total,
            break_total,
        };
    }

    if record.has_open_break() {
        // The most recent unmatched start wins; a start in the future (clock
        // skew between server and client) counts from `now` instead.
        let since = record.break_start_time.unwrap_or(now);
        let worked_before = clamp_non_negative(since.min(now) - clock_in - break_total);
        return SessionState::OnBreak {
            since,
            worked_before,
        };
    }

    SessionState::Working { since: clock_in }
}

/// Minutes worked so far, for display and export. An open break does not
/// count as worked time; booked breaks are already subtracted.
pub fn worked_minutes(record: &AttendanceRecord, now: DateTime<Utc>) -> i64 {
    match derive_state(record, now) {
        SessionState::NotStarted => 0,
        SessionState::Working { since } => {
            clamp_non_negative(now - since - Duration::minutes(record.booked_break_minutes()))
                .num_minutes()
        }
        SessionState::OnBreak { worked_before, .. } => worked_before.num_minutes(),
        SessionState::Completed { worked_total, .. } => worked_total.num_minutes(),
    }
}

fn clamp_non_negative(d: Duration) -> Duration {
    d.max(Duration::zero())
}
