use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use timepunch::api::TimesheetApi;
use timepunch::core::dispatch::{Dispatcher, Inflight};
use timepunch::core::tracker::RecordCell;
use timepunch::errors::{AppError, AppResult};
use timepunch::models::action::ClockAction;
use timepunch::models::record::AttendanceRecord;
use timepunch::models::session::SessionState;
use tokio::sync::Notify;

fn ts(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, h, m, 0).unwrap()
}

fn working() -> SessionState {
    SessionState::Working { since: ts(9, 0) }
}

/// Counts calls; every response carries the call number in
/// `total_break_minutes` so tests can tell responses apart.
#[derive(Default)]
struct CountingApi {
    calls: AtomicUsize,
}

impl CountingApi {
    fn total_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn respond(&self) -> AppResult<AttendanceRecord> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(AttendanceRecord {
            clock_in_time: Some(ts(9, 0)),
            total_break_minutes: n as i64,
            ..Default::default()
        })
    }
}

impl TimesheetApi for CountingApi {
    async fn current_status(&self) -> AppResult<AttendanceRecord> {
        self.respond()
    }
    async fn clock_in(&self) -> AppResult<AttendanceRecord> {
        self.respond()
    }
    async fn clock_out(&self) -> AppResult<AttendanceRecord> {
        self.respond()
    }
    async fn break_start(&self) -> AppResult<AttendanceRecord> {
        self.respond()
    }
    async fn break_end(&self) -> AppResult<AttendanceRecord> {
        self.respond()
    }
}

/// Always fails, so guard-clearing after errors can be observed.
struct FailingApi;

impl TimesheetApi for FailingApi {
    async fn current_status(&self) -> AppResult<AttendanceRecord> {
        Err(AppError::Other("backend down".into()))
    }
    async fn clock_in(&self) -> AppResult<AttendanceRecord> {
        Err(AppError::Other("backend down".into()))
    }
    async fn clock_out(&self) -> AppResult<AttendanceRecord> {
        Err(AppError::Other("backend down".into()))
    }
    async fn break_start(&self) -> AppResult<AttendanceRecord> {
        Err(AppError::Other("backend down".into()))
    }
    async fn break_end(&self) -> AppResult<AttendanceRecord> {
        Err(AppError::Other("backend down".into()))
    }
}

/// Parks the clock-out call until released, to hold a dispatch in flight.
struct GatedApi {
    entered: Arc<Notify>,
    release: Arc<Notify>,
}

impl TimesheetApi for GatedApi {
    async fn current_status(&self) -> AppResult<AttendanceRecord> {
        Ok(AttendanceRecord::default())
    }
    async fn clock_in(&self) -> AppResult<AttendanceRecord> {
        Ok(AttendanceRecord::default())
    }
    async fn clock_out(&self) -> AppResult<AttendanceRecord> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(AttendanceRecord {
            clock_in_time: Some(ts(9, 0)),
            clock_out_time: Some(ts(17, 0)),
            ..Default::default()
        })
    }
    async fn break_start(&self) -> AppResult<AttendanceRecord> {
        Ok(AttendanceRecord::default())
    }
    async fn break_end(&self) -> AppResult<AttendanceRecord> {
        Ok(AttendanceRecord::default())
    }
}

#[tokio::test]
async fn test_illegal_transition_never_reaches_network() {
    let dispatcher = Dispatcher::new(CountingApi::default());

    let err = dispatcher
        .dispatch(ClockAction::ClockIn, &working())
        .await
        .unwrap_err();

    match err {
        AppError::InvalidTransition { action, state } => {
            assert_eq!(action, ClockAction::ClockIn);
            assert_eq!(state, "working");
        }
        other => panic!("expected InvalidTransition, got {:?}", other),
    }
}

#[tokio::test]
async fn test_illegal_transition_counts_no_calls() {
    let dispatcher = Dispatcher::new(CountingApi::default());

    let _ = dispatcher
        .dispatch(ClockAction::StartBreak, &SessionState::NotStarted)
        .await;
    let _ = dispatcher
        .dispatch(
            ClockAction::ClockOut,
            &SessionState::OnBreak {
                since: ts(12, 0),
                worked_before: chrono::Duration::hours(3),
            },
        )
        .await;

    assert_eq!(dispatcher.api().total_calls(), 0);
}

#[tokio::test]
async fn test_second_dispatch_while_pending_is_rejected() {
    let entered = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    let dispatcher = Dispatcher::new(GatedApi {
        entered: entered.clone(),
        release: release.clone(),
    });

    let state = working();
    let first = dispatcher.dispatch(ClockAction::ClockOut, &state);
    let second = async {
        // wait until the first call is parked inside the api
        entered.notified().await;

        let err = dispatcher
            .dispatch(ClockAction::ClockOut, &state)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::AlreadyInProgress(ClockAction::ClockOut)
        ));

        release.notify_one();
    };

    let (first_result, _) = tokio::join!(first, second);
    assert!(first_result.is_ok());
    assert_eq!(dispatcher.inflight(), Inflight::Idle);
}

#[tokio::test]
async fn test_failed_dispatch_clears_inflight() {
    let dispatcher = Dispatcher::new(FailingApi);

    let err = dispatcher
        .dispatch(ClockAction::ClockOut, &working())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Other(_)));
    assert_eq!(dispatcher.inflight(), Inflight::Idle);

    // a retry must hit the guard-free path again, not AlreadyInProgress
    let err = dispatcher
        .dispatch(ClockAction::ClockOut, &working())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Other(_)));
}

#[tokio::test]
async fn test_successful_dispatch_clears_inflight() {
    let dispatcher = Dispatcher::new(CountingApi::default());

    let (generation, record) = dispatcher
        .dispatch(ClockAction::ClockOut, &working())
        .await
        .unwrap();

    assert!(generation > 0);
    assert_eq!(record.clock_in_time, Some(ts(9, 0)));
    assert_eq!(dispatcher.inflight(), Inflight::Idle);
}

#[tokio::test]
async fn test_generations_increase_per_request() {
    let dispatcher = Dispatcher::new(CountingApi::default());

    let (g1, _) = dispatcher.refresh().await.unwrap();
    let (g2, _) = dispatcher.refresh().await.unwrap();
    let (g3, _) = dispatcher
        .dispatch(ClockAction::StartBreak, &working())
        .await
        .unwrap();

    assert!(g1 < g2);
    assert!(g2 < g3);
}

#[tokio::test]
async fn test_record_cell_discards_stale_responses() {
    let dispatcher = Dispatcher::new(CountingApi::default());
    let cell = RecordCell::new();

    let (g1, r1) = dispatcher.refresh().await.unwrap();
    let (g2, r2) = dispatcher.refresh().await.unwrap();

    // the later-issued response lands first
    assert!(cell.apply(g2, r2.clone()));
    // the slow early one must not overwrite it
    assert!(!cell.apply(g1, r1));

    assert_eq!(cell.latest().unwrap(), r2);
    assert_eq!(cell.generation(), g2);
}

#[test]
fn test_record_cell_applies_in_order() {
    let cell = RecordCell::new();
    let one = AttendanceRecord {
        total_break_minutes: 1,
        ..Default::default()
    };
    let two = AttendanceRecord {
        total_break_minutes: 2,
        ..Default::default()
    };

    assert!(cell.apply(1, one));
    assert!(cell.apply(2, two.clone()));
    assert_eq!(cell.latest().unwrap(), two);
}
