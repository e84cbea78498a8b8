pub(crate) mod args;
pub(crate) mod commands;

pub(crate) use args::{Cli, RunSettings};
pub(crate) use commands::Commands;
