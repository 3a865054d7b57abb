use crate::api::{HttpTimesheetClient, SessionContext};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::derive::{derive_state, worked_minutes};
use crate::core::dispatch::Dispatcher;
use crate::core::policy::{self, Operation};
use crate::core::tracker::RecordCell;
use crate::errors::{AppError, AppResult};
use crate::models::record::AttendanceRecord;
use crate::models::session::SessionState;
use crate::ui::messages::warning;
use crate::utils::colors::{colorize_in_out, colorize_optional};
use crate::utils::formatting::{describe_status, mins2readable};
use crate::utils::table::{Column, Table};
use crate::utils::time::fmt_clock;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status {
        user,
        watch,
        interval,
        json,
    } = cmd
    {
        let role = cfg.role()?;
        let target = user.clone().unwrap_or_else(|| cfg.user_id.clone());

        let operation = if target == cfg.user_id {
            Operation::ViewOwnStatus
        } else {
            Operation::ViewOtherStatus
        };
        policy::ensure(role, operation)?;

        let session = SessionContext::load(cfg)?.for_user(target.clone());
        let client = HttpTimesheetClient::new(cfg, session)?;
        let dispatcher = Dispatcher::new(client);
        let cell = RecordCell::new();

        let (generation, record) = dispatcher.refresh().await?;
        cell.apply(generation, record);
        render(&cell, &target, *json, cfg);

        if *watch {
            let every = Duration::from_secs(interval.unwrap_or(cfg.poll_interval_secs).max(1));

            loop {
                tokio::time::sleep(every).await;

                match dispatcher.refresh().await {
                    Ok((generation, record)) => {
                        cell.apply(generation, record);
                        render(&cell, &target, *json, cfg);
                    }
                    // an expired session will not fix itself; stop watching
                    Err(e @ AppError::Unauthorized) => return Err(e),
                    Err(e) => warning(format!("refresh failed: {}", e)),
                }
            }
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct StatusReport<'a> {
    user_id: &'a str,
    state: &'static str,
    worked_minutes: i64,
    break_minutes: i64,
    permitted: Vec<&'static str>,
    record: &'a AttendanceRecord,
}

fn render(cell: &RecordCell, user_id: &str, json: bool, cfg: &Config) {
    let Some(record) = cell.latest() else {
        return;
    };
    let now = Utc::now();
    let state = derive_state(&record, now);

    if json {
        let report = StatusReport {
            user_id,
            state: state.name(),
            worked_minutes: worked_minutes(&record, now),
            break_minutes: record.booked_break_minutes(),
            permitted: state
                .permitted_actions()
                .iter()
                .map(|a| a.as_str())
                .collect(),
            record: &record,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(out) => println!("{}", out),
            Err(e) => warning(format!("could not serialize status: {}", e)),
        }
        return;
    }

    render_table(&record, &state, user_id, now, cfg);
}

fn render_table(
    record: &AttendanceRecord,
    state: &SessionState,
    user_id: &str,
    now: DateTime<Utc>,
    cfg: &Config,
) {
    let (status_label, status_color) = describe_status(record.status_code);

    let next = state
        .permitted_actions()
        .iter()
        .map(|a| a.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut table = Table::new(vec![
        Column::new("USER", 10),
        Column::new("STATE", 12),
        Column::new("IN", 8),
        Column::new("OUT", 8),
        Column::new("BREAK", 8),
        Column::new("WORKED", 8),
        Column::new("STATUS", 8),
        Column::new("NEXT", 22),
    ]);

    table.add_row(vec![
        user_id.to_string(),
        state.name().to_string(),
        colorize_in_out(&fmt_clock(record.clock_in_time, cfg.show_seconds), true),
        colorize_in_out(&fmt_clock(record.clock_out_time, cfg.show_seconds), false),
        colorize_optional(&mins2readable(record.booked_break_minutes(), false, false)),
        colorize_optional(&mins2readable(worked_minutes(record, now), false, false)),
        format!("{}{}\x1b[0m", status_color, status_label),
        next,
    ]);

    println!("{}", table.render());

    if let SessionState::OnBreak { since, .. } = state {
        println!(
            "On break since {}",
            fmt_clock(Some(*since), cfg.show_seconds)
        );
    }
}
