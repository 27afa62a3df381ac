use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::ENV_PREFIX;

const LOG_FILENAME: &str = "spendtui.log";

/// Send tracing output to a file in `data_dir`; the terminal belongs to the UI.
/// `SPENDTUI_LOG` overrides `default_filter`.
pub(crate) fn init(data_dir: &Path, default_filter: &str) -> Result<()> {
    let path = data_dir.join(LOG_FILENAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_env(format!("{ENV_PREFIX}LOG"))
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    Ok(())
}
