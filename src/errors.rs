//! Unified application error type.
//! All modules (api, core, cli, config, export) return AppError to keep the
//! error handling consistent and easy to manage.

use crate::models::action::ClockAction;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Backend / transport
    // ---------------------------
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Session token rejected by the server (HTTP 401)")]
    Unauthorized,

    #[error("Server replied {status}: {message}")]
    Api { status: u16, message: String },

    // ---------------------------
    // Session state machine guards
    // ---------------------------
    #[error("'{action}' is not allowed while the session is {state}")]
    InvalidTransition {
        action: ClockAction,
        state: &'static str,
    },

    #[error("A '{0}' request is already in progress")]
    AlreadyInProgress(ClockAction),

    // ---------------------------
    // Authorization
    // ---------------------------
    #[error("Not permitted: {0}")]
    Forbidden(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("No session token found (set TIMEPUNCH_TOKEN or write it to {0})")]
    MissingToken(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
