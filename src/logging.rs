//! Log file setup for the `autopick` binary.
//!
//! The terminal belongs to the picker while it runs, so records go to a file
//! in the cache directory instead of stderr. The controller crates log through
//! the `log` facade; the subscriber's `tracing-log` bridge picks those up.
//!
//! Filter priority, highest first:
//!
//! 1. `AUTOPICK_LOG`
//! 2. `RUST_LOG`
//! 3. the level passed to [`initialize`] (from `--log-level` or `log.level`)
//! 4. `warn`

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::app_dirs::AppDir;

pub const LOG_ENV: &str = "AUTOPICK_LOG";
pub const DEFAULT_LEVEL: &str = "warn";
const LOG_FILE_NAME: &str = "autopick.log";

static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Path of the log file inside the cache directory.
pub fn log_file_path() -> Result<PathBuf> {
	Ok(AppDir::Cache.path()?.join(LOG_FILE_NAME))
}

/// Install the global subscriber. Later calls return the path chosen by the
/// first one.
pub fn initialize(level: Option<&str>) -> Result<PathBuf> {
	if let Some(path) = LOG_PATH.get() {
		return Ok(path.clone());
	}

	let path = log_file_path()?;
	let file = open_log_file(&path)?;
	let filter = build_env_filter(level);

	let fmt_layer = fmt::layer()
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(true);

	tracing_subscriber::registry()
		.with(filter)
		.with(fmt_layer)
		.try_init()
		.context("failed to install log subscriber")?;

	Ok(LOG_PATH.get_or_init(|| path).clone())
}

fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}

/// Build the filter from `AUTOPICK_LOG`, then `RUST_LOG`, then `level`.
/// Unparseable directives fall through to the next candidate.
fn build_env_filter(level: Option<&str>) -> EnvFilter {
	if let Ok(directives) = std::env::var(LOG_ENV)
		&& let Ok(filter) = EnvFilter::try_new(&directives)
	{
		return filter;
	}

	if let Ok(filter) = EnvFilter::try_from_default_env() {
		return filter;
	}

	level
		.and_then(|level| EnvFilter::try_new(level).ok())
		.unwrap_or_else(|| EnvFilter::new(DEFAULT_LEVEL))
}
