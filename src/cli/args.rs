//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::Config;
use crate::consts::{
    DEFAULT_BAUD, DEFAULT_INTERVAL_MS, DEFAULT_LOG_PREFIX, DEFAULT_PLOT_FILE, DEFAULT_PORT,
    DEFAULT_TIMEOUT_MS,
};
use crate::error::{AppError, Result};
use crate::source::SerialSettings;

use super::commands::Commands;

#[derive(Parser)]
#[command(name = "scalelog")]
#[command(about = "Log and plot weight readings from a serial scale", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Serial port the scale is attached to (e.g. COM9, /dev/ttyUSB0)
    #[arg(short, long, global = true)]
    pub(crate) port: Option<String>,

    /// Line speed in bits per second
    #[arg(short, long, global = true)]
    pub(crate) baud: Option<u32>,

    /// Read timeout for one line, in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    pub(crate) timeout_ms: Option<u64>,

    /// Delay between polls, in milliseconds
    #[arg(short, long, global = true, value_name = "MS")]
    pub(crate) interval_ms: Option<u64>,

    /// Directory for the CSV log (and the plot, unless --plot is given)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub(crate) output_dir: Option<PathBuf>,

    /// File name prefix for the CSV log
    #[arg(long, global = true)]
    pub(crate) prefix: Option<String>,

    /// SVG file to redraw after every poll
    #[arg(long, global = true, value_name = "FILE")]
    pub(crate) plot: Option<PathBuf>,

    /// Do not write the live plot
    #[arg(long, global = true)]
    pub(crate) no_plot: bool,

    /// Stop after this many seconds (default: run until interrupted)
    #[arg(long, global = true, value_name = "SECS")]
    pub(crate) duration: Option<u64>,

    /// Enable debug output
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

/// Everything the sampling loop needs, with defaults filled in
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RunSettings {
    pub(crate) serial: SerialSettings,
    pub(crate) interval: Duration,
    pub(crate) output_dir: PathBuf,
    pub(crate) prefix: String,
    pub(crate) plot: Option<PathBuf>,
    pub(crate) duration: Option<Duration>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if self.port.is_none() {
            self.port = config.port.clone();
        }
        if self.baud.is_none() {
            self.baud = config.baud;
        }
        if self.timeout_ms.is_none() {
            self.timeout_ms = config.timeout_ms;
        }
        if self.interval_ms.is_none() {
            self.interval_ms = config.interval_ms;
        }
        if self.output_dir.is_none() {
            self.output_dir = config.output_dir.clone();
        }
        if self.prefix.is_none() {
            self.prefix = config.prefix.clone();
        }
        if self.plot.is_none() {
            self.plot = config.plot.clone();
        }
        if !self.no_plot && config.no_plot {
            self.no_plot = true;
        }

        self
    }

    pub(crate) fn run_settings(&self) -> Result<RunSettings> {
        let interval_ms = self.interval_ms.unwrap_or(DEFAULT_INTERVAL_MS);
        if interval_ms == 0 {
            return Err(AppError::InvalidInterval { input: interval_ms });
        }
        let baud = self.baud.unwrap_or(DEFAULT_BAUD);
        if baud == 0 {
            return Err(AppError::InvalidBaud { input: baud });
        }

        let output_dir = self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        let plot = if self.no_plot {
            None
        } else {
            Some(
                self.plot
                    .clone()
                    .unwrap_or_else(|| output_dir.join(DEFAULT_PLOT_FILE)),
            )
        };

        Ok(RunSettings {
            serial: SerialSettings {
                port: self.port.clone().unwrap_or_else(|| DEFAULT_PORT.to_string()),
                baud,
                timeout: Duration::from_millis(self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)),
            },
            interval: Duration::from_millis(interval_ms),
            output_dir,
            prefix: self
                .prefix
                .clone()
                .unwrap_or_else(|| DEFAULT_LOG_PREFIX.to_string()),
            plot,
            duration: self.duration.map(Duration::from_secs),
        })
    }
}
