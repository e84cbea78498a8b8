/// Serial port used when neither config nor CLI names one
#[cfg(windows)]
pub(crate) const DEFAULT_PORT: &str = "COM9";
#[cfg(not(windows))]
pub(crate) const DEFAULT_PORT: &str = "/dev/ttyUSB0";

/// The scale tops out at 9600 bps
pub(crate) const DEFAULT_BAUD: u32 = 9600;

pub(crate) const DEFAULT_TIMEOUT_MS: u64 = 1000;

/// Delay between polls; actual cadence is slower by the read and redraw time
pub(crate) const DEFAULT_INTERVAL_MS: u64 = 200;

pub(crate) const DEFAULT_LOG_PREFIX: &str = "nebuData_";

/// `chrono` format for the run stamp in the log file name, lowercased after formatting
pub(crate) const LOG_NAME_FORMAT: &str = "%d%b%y_%I_%M%p";

pub(crate) const CSV_HEADER: [&str; 2] = ["Time (s)", "Value"];

pub(crate) const DEFAULT_PLOT_FILE: &str = "live_plot.svg";

pub(crate) const PLOT_TITLE: &str = "Real-Time Data Plot";
