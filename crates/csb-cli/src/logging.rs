use std::fs::OpenOptions;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "CSB_LOG";
const LOG_FILE: &str = "csb.log";
const DEFAULT_FILTER: &str = "csb=info,csb_core=info,csb_export=info";
const QUIET_FILTER: &str = "warn";

pub struct LogConfig<'a> {
    pub verbose: bool,
    /// The TUI owns the terminal, so events go to a file instead of stderr.
    pub tui_mode: bool,
    pub log_dir: &'a Path,
}

/// Install the global subscriber. Returns the log file path in TUI mode.
pub fn init_logging(config: LogConfig<'_>) -> Result<Option<PathBuf>> {
    let fallback = if config.verbose || config.tui_mode {
        DEFAULT_FILTER
    } else {
        QUIET_FILTER
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    if config.tui_mode {
        std::fs::create_dir_all(config.log_dir).with_context(|| {
            format!("failed to create log directory {}", config.log_dir.display())
        })?;
        let path = config.log_dir.join(LOG_FILE);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))?;
        return Ok(Some(path));
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))?;
    Ok(None)
}
