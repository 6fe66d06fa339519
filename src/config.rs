//! Command-line options and the validated configuration built from them.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;
use tracing::Level;

use crate::constants::{DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH};
use crate::ui::CellMetrics;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be between {min} and {max} (got {value})")]
    OutOfRange {
        name: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },
    #[error("unknown log level '{0}' (expected trace, debug, info, warn or error)")]
    LogLevel(String),
    #[error("cannot open log file '{path}': {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "ptahhotep",
    version = env!("CARGO_PKG_VERSION"),
    about = "Floating-window automation workspace for the terminal"
)]
pub struct Cli {
    /// Logical pixels per terminal column.
    #[arg(long = "cell-width", value_name = "PX", default_value_t = DEFAULT_CELL_WIDTH)]
    pub cell_width: u16,

    /// Logical pixels per terminal row.
    #[arg(long = "cell-height", value_name = "PX", default_value_t = DEFAULT_CELL_HEIGHT)]
    pub cell_height: u16,

    /// Idle redraw interval.
    #[arg(long = "tick-ms", value_name = "MS", default_value_t = 16)]
    pub tick_ms: u64,

    /// Maximum level written to the log.
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Append logs to this file. Without it logs are discarded.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Start with an empty desktop.
    #[arg(long = "no-presets")]
    pub no_presets: bool,
}

#[derive(Debug, Clone)]
pub struct WorkspaceConfig {
    pub metrics: CellMetrics,
    pub tick: Duration,
    pub log_level: Level,
    pub log_file: Option<PathBuf>,
    pub presets: bool,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            metrics: CellMetrics::default(),
            tick: Duration::from_millis(16),
            log_level: Level::INFO,
            log_file: None,
            presets: true,
        }
    }
}

fn check_range(name: &'static str, value: u64, min: u64, max: u64) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

impl TryFrom<&Cli> for WorkspaceConfig {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        check_range("cell width", cli.cell_width.into(), 1, 64)?;
        check_range("cell height", cli.cell_height.into(), 1, 64)?;
        check_range("tick interval", cli.tick_ms, 1, 1000)?;
        let log_level = cli
            .log_level
            .parse::<Level>()
            .map_err(|_| ConfigError::LogLevel(cli.log_level.clone()))?;
        Ok(Self {
            metrics: CellMetrics::new(cli.cell_width, cli.cell_height),
            tick: Duration::from_millis(cli.tick_ms),
            log_level,
            log_file: cli.log_file.clone(),
            presets: !cli.no_presets,
        })
    }
}
