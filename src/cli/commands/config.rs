use crate::cli::parser::{Cli, Commands};
use crate::config::{Config, migrate};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: do_migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = config_path(cli);

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("Current configuration ({}):\n", path.display());
            println!(
                "{}",
                serde_yaml::to_string(cfg).unwrap_or_else(|_| "<unreadable>".to_string())
            );
        }

        // ---- CHECK FOR MISSING KEYS ----
        if *check {
            let missing = migrate::missing_keys(&path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for key in &missing {
                    warning(format!("Missing configuration key: {}", key));
                }
                info("Run 'timepunch config --migrate' to fill the defaults in.");
            }
        }

        // ---- FILL MISSING KEYS ----
        if *do_migrate {
            let added = migrate::apply_defaults(&path)?;
            if added.is_empty() {
                info("Nothing to migrate, configuration is up to date.");
            } else {
                success(format!("Added missing keys: {}", added.join(", ")));
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config && !cli.test {
            edit(&path, editor.clone());
        }
    }

    Ok(())
}

fn config_path(cli: &Cli) -> PathBuf {
    cli.config
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file)
}

fn edit(path: &Path, requested_editor: Option<String>) {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested_editor.unwrap_or_else(|| default_editor.clone());

    let status = Command::new(&editor_to_use).arg(path).status();

    match status {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
        }
        Ok(_) | Err(_) => {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            ));

            let fallback_status = Command::new(&default_editor).arg(path).status();
            match fallback_status {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using fallback '{}'",
                        default_editor
                    ));
                }
                Ok(_) | Err(_) => {
                    crate::ui::messages::error(format!(
                        "Failed to edit configuration file using fallback '{}'",
                        default_editor
                    ));
                }
            }
        }
    }
}
