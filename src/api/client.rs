//! HTTP implementation of the timesheet backend boundary.

use super::TimesheetApi;
use super::session::SessionContext;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::action::ClockAction;
use crate::models::record::AttendanceRecord;
use reqwest::StatusCode;
use std::time::Duration;

pub struct HttpTimesheetClient {
    http: reqwest::Client,
    base: String,
    session: SessionContext,
}

impl HttpTimesheetClient {
    pub fn new(cfg: &Config, session: SessionContext) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base: cfg.server.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn url(&self, op: &str) -> String {
        format!("{}/timesheet/{}/{}", self.base, op, self.session.user_id)
    }

    /// Send one request with the bearer token attached and decode the
    /// resulting record. 401 surfaces as `Unauthorized` for the session
    /// layer to handle; it is never retried here.
    async fn execute(
        &self,
        op: &'static str,
        req: reqwest::RequestBuilder,
    ) -> AppResult<AttendanceRecord> {
        tracing::debug!(op, user = %self.session.user_id, "timesheet request");

        let resp = req.bearer_auth(&self.session.token).send().await?;
        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(AppError::Unauthorized);
        }

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            tracing::warn!(op, status = status.as_u16(), "timesheet request rejected");
            return Err(AppError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.json::<AttendanceRecord>().await?)
    }
}

impl TimesheetApi for HttpTimesheetClient {
    async fn current_status(&self) -> AppResult<AttendanceRecord> {
        self.execute("currentStatus", self.http.get(self.url("currentStatus")))
            .await
    }

    // The backend models clock-in as an idempotent GET.
    async fn clock_in(&self) -> AppResult<AttendanceRecord> {
        let op = ClockAction::ClockIn.endpoint();
        self.execute(op, self.http.get(self.url(op))).await
    }

    async fn clock_out(&self) -> AppResult<AttendanceRecord> {
        let op = ClockAction::ClockOut.endpoint();
        self.execute(op, self.http.patch(self.url(op))).await
    }

    async fn break_start(&self) -> AppResult<AttendanceRecord> {
        let op = ClockAction::StartBreak.endpoint();
        self.execute(op, self.http.post(self.url(op))).await
    }

    async fn break_end(&self) -> AppResult<AttendanceRecord> {
        let op = ClockAction::EndBreak.endpoint();
        self.execute(op, self.http.post(self.url(op))).await
    }
}
