use super::action::ClockAction;
use chrono::{DateTime, Duration, Utc};

/// Derived session state for the current day.
///
/// Rebuilt from every fresh `AttendanceRecord`; it has no identity beyond
/// "current" and is superseded, never mutated in place, by the next fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    NotStarted,
    Working {
        since: DateTime<Utc>,
    },
    OnBreak {
        since: DateTime<Utc>,
        worked_before: Duration,
    },
    Completed {
        worked_total: Duration,
        break_total: Duration,
    },
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::NotStarted => "not started",
            SessionState::Working { .. } => "working",
            SessionState::OnBreak { .. } => "on break",
            SessionState::Completed { .. } => "completed",
        }
    }

    /// Legal next actions from this state.
    ///
    /// `Completed` is terminal for the day. There is no direct way out of a
    /// break other than ending it: clocking out requires an explicit
    /// `EndBreak` first.
    pub fn permitted_actions(&self) -> &'static [ClockAction] {
        match self {
            SessionState::NotStarted => &[ClockAction::ClockIn],
            SessionState::Working { .. } => &[ClockAction::StartBreak, ClockAction::ClockOut],
            SessionState::OnBreak { .. } => &[ClockAction::EndBreak],
            SessionState::Completed { .. } => &[],
        }
    }

    pub fn permits(&self, action: ClockAction) -> bool {
        self.permitted_actions().contains(&action)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, SessionState::Completed { .. })
    }
}
