use crate::api::{HttpTimesheetClient, SessionContext};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dispatch::Dispatcher;
use crate::core::policy::{self, Operation};
use crate::errors::AppResult;
use crate::export::{StatusExport, ensure_writable, write_rows};
use chrono::Utc;
use std::path::Path;

/// Fetch today's record and write its summary row to a file.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        policy::ensure(cfg.role()?, Operation::Export)?;

        let session = SessionContext::load(cfg)?;
        let user_id = session.user_id.clone();
        let client = HttpTimesheetClient::new(cfg, session)?;
        let dispatcher = Dispatcher::new(client);

        let (_, record) = dispatcher.refresh().await?;
        let row = StatusExport::from_record(&record, &user_id, Utc::now());

        let path = Path::new(file);
        ensure_writable(path, *force)?;
        write_rows(format, path, &[row])?;
    }

    Ok(())
}
