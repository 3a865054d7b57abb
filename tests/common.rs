#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use axum::extract::{Path as UrlPath, State};
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, mpsc};
use std::thread;

pub fn tp() -> Command {
    cargo_bin_cmd!("timepunch")
}

/// In-memory model of one user's day, mutated by the stub routes the same
/// way the real backend mutates its row.
#[derive(Clone)]
pub struct StubDay {
    pub clock_in_time: Option<DateTime<Utc>>,
    pub clock_out_time: Option<DateTime<Utc>>,
    pub break_start_time: Option<DateTime<Utc>>,
    pub break_end_time: Option<DateTime<Utc>>,
    pub total_break_minutes: i64,
    pub status_code: String,
}

impl Default for StubDay {
    fn default() -> Self {
        Self {
            clock_in_time: None,
            clock_out_time: None,
            break_start_time: None,
            break_end_time: None,
            total_break_minutes: 0,
            status_code: "ABSENT".to_string(),
        }
    }
}

fn day_json(day: &StubDay) -> serde_json::Value {
    serde_json::json!({
        "clockInTime": day.clock_in_time,
        "clockOutTime": day.clock_out_time,
        "breakStartTime": day.break_start_time,
        "breakEndTime": day.break_end_time,
        "totalBreakMinutes": day.total_break_minutes,
        "statusCode": day.status_code,
    })
}

#[derive(Clone)]
struct Ctx {
    day: Arc<Mutex<StubDay>>,
    hits: Arc<Mutex<Vec<String>>>,
}

async fn current_status(State(ctx): State<Ctx>, UrlPath(_user): UrlPath<String>) -> Json<serde_json::Value> {
    ctx.hits.lock().unwrap().push("currentStatus".to_string());
    let day = ctx.day.lock().unwrap().clone();
    Json(day_json(&day))
}

async fn clock_in(State(ctx): State<Ctx>, UrlPath(_user): UrlPath<String>) -> Json<serde_json::Value> {
    ctx.hits.lock().unwrap().push("clockIn".to_string());
    let mut day = ctx.day.lock().unwrap();
    day.clock_in_time = Some(Utc::now());
    day.status_code = "PRESENT".to_string();
    Json(day_json(&day))
}

async fn clock_out(State(ctx): State<Ctx>, UrlPath(_user): UrlPath<String>) -> Json<serde_json::Value> {
    ctx.hits.lock().unwrap().push("clockOut".to_string());
    let mut day = ctx.day.lock().unwrap();
    day.clock_out_time = Some(Utc::now());
    Json(day_json(&day))
}

async fn break_start(State(ctx): State<Ctx>, UrlPath(_user): UrlPath<String>) -> Json<serde_json::Value> {
    ctx.hits.lock().unwrap().push("breakStart".to_string());
    let mut day = ctx.day.lock().unwrap();
    day.break_start_time = Some(Utc::now());
    day.break_end_time = None;
    Json(day_json(&day))
}

async fn break_end(State(ctx): State<Ctx>, UrlPath(_user): UrlPath<String>) -> Json<serde_json::Value> {
    ctx.hits.lock().unwrap().push("breakEnd".to_string());
    let mut day = ctx.day.lock().unwrap();
    let now = Utc::now();
    if let Some(start) = day.break_start_time {
        day.total_break_minutes += (now - start).num_minutes().max(0);
    }
    day.break_end_time = Some(now);
    Json(day_json(&day))
}

pub struct StubServer {
    pub addr: SocketAddr,
    pub day: Arc<Mutex<StubDay>>,
    pub hits: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn hit(&self, op: &str) -> bool {
        self.hits.lock().unwrap().iter().any(|h| h == op)
    }
}

/// Run a stub timesheet backend on an ephemeral port, in its own thread
/// with its own runtime, so assert_cmd can drive the binary against it.
pub fn spawn_stub(initial: StubDay) -> StubServer {
    let day = Arc::new(Mutex::new(initial));
    let hits = Arc::new(Mutex::new(Vec::new()));
    let ctx = Ctx {
        day: day.clone(),
        hits: hits.clone(),
    };

    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("stub runtime");

        rt.block_on(async move {
            let app = Router::new()
                .route("/timesheet/currentStatus/:user", get(current_status))
                .route("/timesheet/clockIn/:user", get(clock_in))
                .route("/timesheet/clockOut/:user", patch(clock_out))
                .route("/timesheet/breakStart/:user", post(break_start))
                .route("/timesheet/breakEnd/:user", post(break_end))
                .with_state(ctx);

            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind stub");
            tx.send(listener.local_addr().expect("stub addr")).ok();

            axum::serve(listener, app).await.expect("serve stub");
        });
    });

    let addr = rx.recv().expect("stub never came up");

    StubServer { addr, day, hits }
}

async fn reject() -> (StatusCode, &'static str) {
    (StatusCode::UNAUTHORIZED, "token expired")
}

/// A backend whose every route answers 401.
pub fn spawn_unauthorized_stub() -> SocketAddr {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("stub runtime");

        rt.block_on(async move {
            let app = Router::new().fallback(reject);

            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind stub");
            tx.send(listener.local_addr().expect("stub addr")).ok();

            axum::serve(listener, app).await.expect("serve stub");
        });
    });

    rx.recv().expect("stub never came up")
}

/// Write a self-contained config + token file pair under a per-test temp
/// directory and return the config path to pass via `--config`.
pub fn write_test_config(name: &str, server: &str) -> String {
    write_test_config_with_role(name, server, "employee")
}

pub fn write_test_config_with_role(name: &str, server: &str, role: &str) -> String {
    let dir: PathBuf = env::temp_dir().join(format!("{}_timepunch", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create test dir");

    let token_path = dir.join("token");
    fs::write(&token_path, "test-token\n").expect("write token");

    let conf = dir.join("timepunch.conf");
    let yaml = format!(
        "server: {server}\n\
         user_id: u1\n\
         role: {role}\n\
         token_file: {}\n\
         poll_interval_secs: 60\n\
         request_timeout_secs: 5\n\
         show_seconds: false\n",
        token_path.display()
    );
    fs::write(&conf, yaml).expect("write config");

    conf.to_string_lossy().to_string()
}

/// Temporary output file path for export tests.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
