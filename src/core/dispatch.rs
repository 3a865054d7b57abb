//! Action dispatcher: issues clock/break requests against the backend with
//! at most one action in flight at a time.

use crate::api::TimesheetApi;
use crate::errors::{AppError, AppResult};
use crate::models::action::ClockAction;
use crate::models::record::AttendanceRecord;
use crate::models::session::SessionState;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

/// In-flight marker; the tag records which action is still pending so a
/// rejected caller can name it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inflight {
    Idle,
    Pending(ClockAction),
}

pub struct Dispatcher<A: TimesheetApi> {
    api: A,
    inflight: Mutex<Inflight>,
    generation: AtomicU64,
}

impl<A: TimesheetApi> Dispatcher<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            inflight: Mutex::new(Inflight::Idle),
            generation: AtomicU64::new(0),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn inflight(&self) -> Inflight {
        *self
            .inflight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Issue one action against the backend.
    ///
    /// Fails with `InvalidTransition` when `current` forbids the action and
    /// with `AlreadyInProgress` when another dispatch is pending; neither
    /// failure reaches the network. The in-flight tag is cleared on success
    /// and on failure alike; errors surface unchanged, with no retry and no
    /// optimistic state mutation.
    ///
    /// Returns the request generation together with the fresh record so the
    /// caller can discard responses to superseded requests.
    pub async fn dispatch(
        &self,
        action: ClockAction,
        current: &SessionState,
    ) -> AppResult<(u64, AttendanceRecord)> {
        if !current.permits(action) {
            return Err(AppError::InvalidTransition {
                action,
                state: current.name(),
            });
        }

        let generation = self.begin(action)?;
        tracing::debug!(action = %action, generation, "dispatching");

        let result = match action {
            ClockAction::ClockIn => self.api.clock_in().await,
            ClockAction::ClockOut => self.api.clock_out().await,
            ClockAction::StartBreak => self.api.break_start().await,
            ClockAction::EndBreak => self.api.break_end().await,
        };

        self.finish();
        result.map(|record| (generation, record))
    }

    /// Fetch the current day's record. Reads are not serialized against
    /// dispatches; the generation counter is what keeps a slow poll from
    /// overwriting fresher data.
    pub async fn refresh(&self) -> AppResult<(u64, AttendanceRecord)> {
        let generation = self.next_generation();
        let record = self.api.current_status().await?;
        Ok((generation, record))
    }

    fn begin(&self, action: ClockAction) -> AppResult<u64> {
        let mut tag = self
            .inflight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Inflight::Pending(pending) = *tag {
            return Err(AppError::AlreadyInProgress(pending));
        }
        *tag = Inflight::Pending(action);
        Ok(self.next_generation())
    }

    fn finish(&self) {
        *self
            .inflight
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Inflight::Idle;
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }
}
