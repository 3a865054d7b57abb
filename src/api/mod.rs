//! Boundary to the remote timesheet backend.

pub mod client;
pub mod session;

pub use client::HttpTimesheetClient;
pub use session::SessionContext;

use crate::errors::AppResult;
use crate::models::record::AttendanceRecord;

/// The five operations the backend exposes for one user's day.
///
/// Every call returns the fresh `AttendanceRecord` for the day, which the
/// caller feeds back into state derivation. Implemented by the HTTP client
/// and by in-memory fakes in the test suite.
#[allow(async_fn_in_trait)]
pub trait TimesheetApi {
    async fn current_status(&self) -> AppResult<AttendanceRecord>;
    async fn clock_in(&self) -> AppResult<AttendanceRecord>;
    async fn clock_out(&self) -> AppResult<AttendanceRecord>;
    async fn break_start(&self) -> AppResult<AttendanceRecord>;
    async fn break_end(&self) -> AppResult<AttendanceRecord>;
}
