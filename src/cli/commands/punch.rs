use crate::api::{HttpTimesheetClient, SessionContext};
use crate::config::Config;
use crate::core::derive::{derive_state, worked_minutes};
use crate::core::dispatch::Dispatcher;
use crate::core::policy::{self, Operation};
use crate::errors::AppResult;
use crate::models::action::ClockAction;
use crate::ui::messages::success;
use crate::utils::formatting::mins2readable;
use crate::utils::time::fmt_clock;
use chrono::Utc;

/// Issue one of the four clock/break actions for the configured user.
///
/// The day's record is fetched first so the transition guard runs against
/// the server's view of the session, not a stale local assumption.
pub async fn handle(action: ClockAction, cfg: &Config) -> AppResult<()> {
    policy::ensure(cfg.role()?, Operation::Punch)?;

    let session = SessionContext::load(cfg)?;
    let client = HttpTimesheetClient::new(cfg, session)?;
    let dispatcher = Dispatcher::new(client);

    let (_, record) = dispatcher.refresh().await?;
    let state = derive_state(&record, Utc::now());

    let (_, fresh) = dispatcher.dispatch(action, &state).await?;
    let now = Utc::now();

    match action {
        ClockAction::ClockIn => {
            success(format!(
                "Clocked in at {}",
                fmt_clock(fresh.clock_in_time, cfg.show_seconds)
            ));
        }
        ClockAction::ClockOut => {
            success(format!(
                "Clocked out at {}, worked {} today",
                fmt_clock(fresh.clock_out_time, cfg.show_seconds),
                mins2readable(worked_minutes(&fresh, now), false, false)
            ));
        }
        ClockAction::StartBreak => {
            success(format!(
                "Break started at {}",
                fmt_clock(fresh.break_start_time, cfg.show_seconds)
            ));
        }
        ClockAction::EndBreak => {
            success(format!(
                "Back to work, break total {}",
                mins2readable(fresh.booked_break_minutes(), false, false)
            ));
        }
    }

    Ok(())
}
