//! Serial port source

use std::io::{self, Read};
use std::time::Duration;

use log::{debug, info};
use serialport::{ClearBuffer, SerialPort, SerialPortType};

use super::{LineSource, decode_lossy};
use crate::error::{AppError, Result};

/// Longest line kept before giving up on finding a terminator
const MAX_LINE_BYTES: usize = 1024;

/// Fixed link parameters for the scale
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SerialSettings {
    pub(crate) port: String,
    pub(crate) baud: u32,
    pub(crate) timeout: Duration,
}

pub(crate) struct SerialSource {
    port: Box<dyn SerialPort>,
    name: String,
}

impl SerialSource {
    pub(crate) fn open(settings: &SerialSettings) -> Result<Self> {
        if settings.baud == 0 {
            return Err(AppError::InvalidBaud {
                input: settings.baud,
            });
        }

        let port = serialport::new(&settings.port, settings.baud)
            .timeout(settings.timeout)
            .open()
            .map_err(|source| AppError::SourceOpen {
                port: settings.port.clone(),
                source,
            })?;

        info!("Connected to {} at {} bps.", settings.port, settings.baud);
        Ok(Self {
            port,
            name: settings.port.clone(),
        })
    }
}

impl LineSource for SerialSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn discard_input(&mut self) -> Result<()> {
        self.port.clear(ClearBuffer::Input)?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let bytes = read_line_bytes(&mut self.port, MAX_LINE_BYTES)?;
        Ok(decode_lossy(&bytes))
    }
}

impl Drop for SerialSource {
    fn drop(&mut self) {
        info!("Serial port closed.");
    }
}

/// Read bytes up to and excluding `\n`.
///
/// A timeout ends the line early with whatever was collected, like a
/// blocking readline with a deadline. `\r` is left for the caller's trim.
pub(crate) fn read_line_bytes<R: Read + ?Sized>(reader: &mut R, max_len: usize) -> Result<Vec<u8>> {
    let mut line = Vec::new();
    let mut byte = [0u8; 1];

    while line.len() < max_len {
        match reader.read(&mut byte) {
            Ok(0) => break,
            Ok(_) if byte[0] == b'\n' => break,
            Ok(_) => line.push(byte[0]),
            Err(e) if e.kind() == io::ErrorKind::TimedOut => {
                debug!("read timed out after {} bytes", line.len());
                break;
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(line)
}

/// Ports the host can see, one description per port, sorted
pub(crate) fn list_ports() -> Result<Vec<String>> {
    let mut out: Vec<String> = serialport::available_ports()?
        .iter()
        .map(|p| describe_port(&p.port_name, &p.port_type))
        .collect();

    out.sort();
    Ok(out)
}

fn describe_port(name: &str, port_type: &SerialPortType) -> String {
    match port_type {
        SerialPortType::UsbPort(info) => {
            let parts: Vec<&str> = [info.manufacturer.as_deref(), info.product.as_deref()]
                .into_iter()
                .flatten()
                .collect();
            if parts.is_empty() {
                format!("{name}: USB Serial")
            } else {
                format!("{name}: {}", parts.join(" "))
            }
        }
        SerialPortType::BluetoothPort => format!("{name}: Bluetooth"),
        SerialPortType::PciPort => format!("{name}: PCI"),
        SerialPortType::Unknown => name.to_string(),
    }
}
