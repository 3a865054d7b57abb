//! Explicit session context passed to every network call.
//!
//! Whoever constructs the client decides which user and which credential
//! it acts for; nothing is read from globals after construction.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::env;
use std::fs;

/// Bearer credential plus the user the calls are issued for.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub user_id: String,
    pub token: String,
}

impl SessionContext {
    /// Resolve the session from the environment and the config file.
    /// `TIMEPUNCH_TOKEN` wins over the configured token file.
    pub fn load(cfg: &Config) -> AppResult<Self> {
        if cfg.user_id.trim().is_empty() {
            return Err(AppError::Config(
                "user_id is not set; edit the config file with 'timepunch config --edit'".into(),
            ));
        }

        let token = match env::var("TIMEPUNCH_TOKEN") {
            Ok(t) if !t.trim().is_empty() => t.trim().to_string(),
            _ => {
                let path = cfg.token_path();
                let raw = fs::read_to_string(&path)
                    .map_err(|_| AppError::MissingToken(path.display().to_string()))?;
                let t = raw.trim().to_string();
                if t.is_empty() {
                    return Err(AppError::MissingToken(path.display().to_string()));
                }
                t
            }
        };

        Ok(Self {
            user_id: cfg.user_id.clone(),
            token,
        })
    }

    /// Same credential, different target user (manager viewing a report).
    pub fn for_user(mut self, user_id: String) -> Self {
        self.user_id = user_id;
        self
    }
}
