use serde::Serialize;
use std::fmt;

/// The four state-changing requests the timesheet backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClockAction {
    ClockIn,
    ClockOut,
    StartBreak,
    EndBreak,
}

impl ClockAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClockAction::ClockIn => "clock-in",
            ClockAction::ClockOut => "clock-out",
            ClockAction::StartBreak => "break-start",
            ClockAction::EndBreak => "break-end",
        }
    }

    /// Path segment of the backend operation, e.g. `/timesheet/clockIn/{userId}`.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ClockAction::ClockIn => "clockIn",
            ClockAction::ClockOut => "clockOut",
            ClockAction::StartBreak => "breakStart",
            ClockAction::EndBreak => "breakEnd",
        }
    }
}

impl fmt::Display for ClockAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
