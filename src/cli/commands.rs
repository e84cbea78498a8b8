//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Subcommand)]
pub(crate) enum Commands {
    /// Read, log and plot scale readings (default)
    #[default]
    Run,
    /// List serial ports visible to this machine
    Ports,
}
