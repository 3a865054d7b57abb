// src/export/model.rs

use crate::core::derive::{derive_state, worked_minutes};
use crate::models::record::AttendanceRecord;
use crate::utils::time::{fmt_clock, fmt_date};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Flat row describing one day's session, for CSV and JSON output.
#[derive(Serialize, Clone, Debug)]
pub struct StatusExport {
    pub date: String,
    pub user_id: String,
    pub state: String,
    pub clock_in: String,
    pub clock_out: String,
    pub break_minutes: i64,
    pub worked_minutes: i64,
    pub status_code: String,
}

impl StatusExport {
    pub fn from_record(record: &AttendanceRecord, user_id: &str, now: DateTime<Utc>) -> Self {
        let state = derive_state(record, now);

        Self {
            date: fmt_date(record.clock_in_time.unwrap_or(now)),
            user_id: user_id.to_string(),
            state: state.name().to_string(),
            clock_in: fmt_clock(record.clock_in_time, false),
            clock_out: fmt_clock(record.clock_out_time, false),
            break_minutes: record.booked_break_minutes(),
            worked_minutes: worked_minutes(record, now),
            status_code: record.status_code.sc_as_str().to_string(),
        }
    }
}
