use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::ui::messages::{success, warning};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: String,
    pub user_id: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_token_file")]
    pub token_file: String,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub show_seconds: bool,
}

fn default_role() -> String {
    "employee".to_string()
}
fn default_token_file() -> String {
    Config::token_file_default().to_string_lossy().to_string()
}
fn default_poll_interval() -> u64 {
    60
}
fn default_request_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: "http://localhost:8080".to_string(),
            user_id: String::new(),
            role: default_role(),
            token_file: default_token_file(),
            poll_interval_secs: default_poll_interval(),
            request_timeout_secs: default_request_timeout(),
            show_seconds: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("timepunch")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".timepunch")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timepunch.conf")
    }

    /// Return the default location of the bearer token file
    pub fn token_file_default() -> PathBuf {
        Self::config_dir().join("token")
    }

    pub fn token_path(&self) -> PathBuf {
        PathBuf::from(&self.token_file)
    }

    pub fn role(&self) -> AppResult<Role> {
        Role::from_code(&self.role).ok_or_else(|| AppError::InvalidRole(self.role.clone()))
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path_override: Option<&Path>) -> AppResult<Self> {
        let path = match path_override {
            Some(p) => p.to_path_buf(),
            None => Self::config_file(),
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Initialize the configuration directory, config file and token file.
    /// An existing config file is left untouched.
    pub fn init_all(path_override: Option<&Path>, is_test: bool) -> AppResult<()> {
        let conf_path = match path_override {
            Some(p) => p.to_path_buf(),
            None => Self::config_file(),
        };

        let dir = conf_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_dir);
        fs::create_dir_all(&dir)?;

        let token_path = dir.join("token");

        if conf_path.exists() {
            warning(format!(
                "Config file already exists, leaving it as is: {:?}",
                conf_path
            ));
        } else {
            let config = Config {
                token_file: token_path.to_string_lossy().to_string(),
                ..Config::default()
            };

            let yaml =
                serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            fs::write(&conf_path, annotate_skeleton(&yaml))?;

            if !is_test {
                success(format!("Config file: {:?}", conf_path));
            }
        }

        if !token_path.exists() {
            fs::write(&token_path, "")?;
            if !is_test {
                warning(format!(
                    "Paste your API bearer token into {:?} (or export TIMEPUNCH_TOKEN)",
                    token_path
                ));
            }
        }

        if !is_test {
            success(format!("Config dir:  {:?}", dir));
        }

        Ok(())
    }
}

/// Prefix the generated YAML skeleton with a short field reference.
fn annotate_skeleton(yaml: &str) -> String {
    let mut out = String::from(
        "# timepunch configuration\n\
         #   server:               base URL of the timesheet API\n\
         #   user_id:              your user id on the server\n\
         #   role:                 employee | manager | admin\n\
         #   token_file:           file holding the API bearer token\n\
         #   poll_interval_secs:   refresh period for 'status --watch'\n\
         #   request_timeout_secs: per-request network timeout\n\
         #   show_seconds:         show seconds in clock columns\n",
    );
    out.push_str(yaml);
    out
}
