//! Line sources
//!
//! A source hands the sampler one line of device text per call. The serial
//! port is the only real implementation; tests script their own lines.

#[cfg(test)]
pub(crate) mod scripted;
pub(crate) mod serial;

use crate::error::Result;

/// Something that produces text lines on demand
pub(crate) trait LineSource {
    /// Human readable name for diagnostics (e.g. the port name)
    fn name(&self) -> &str;

    /// Drop anything received but not yet read, so the next line is fresh
    fn discard_input(&mut self) -> Result<()>;

    /// Read one line, without the terminator.
    ///
    /// A read timeout yields whatever arrived before it, possibly nothing.
    fn read_line(&mut self) -> Result<String>;
}

/// Decode device bytes, dropping anything that is not valid UTF-8
pub(crate) fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .filter(|&c| c != char::REPLACEMENT_CHARACTER)
        .collect()
}

pub(crate) use serial::{SerialSettings, SerialSource, list_ports};
