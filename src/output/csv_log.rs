//! Append-only CSV log of recorded samples
//!
//! The file is reopened for every row and closed again straight after, so a
//! killed process always leaves a complete, flushed file behind.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::info;

use crate::consts::{CSV_HEADER, LOG_NAME_FORMAT};
use crate::core::Sample;
use crate::error::Result;
use crate::output::format::format_fixed2;

#[derive(Debug, Clone)]
pub(crate) struct CsvLog {
    path: PathBuf,
}

/// Build the per-run file name, e.g. `nebuData_17oct26_02_05pm.csv`
pub(crate) fn log_file_name(prefix: &str, started: DateTime<Local>) -> String {
    let stamp = started.format(LOG_NAME_FORMAT).to_string().to_lowercase();
    format!("{prefix}{stamp}.csv")
}

impl CsvLog {
    /// Create a fresh log for this run and write the header row.
    ///
    /// An existing file with the same name is never reused; a numeric
    /// suffix is added instead.
    pub(crate) fn create(dir: &Path, prefix: &str, started: DateTime<Local>) -> Result<Self> {
        std::fs::create_dir_all(dir)?;

        let base = log_file_name(prefix, started);
        let stem = base.trim_end_matches(".csv");
        let mut attempt = 1;
        loop {
            let name = if attempt == 1 {
                base.clone()
            } else {
                format!("{stem}_{attempt}.csv")
            };
            let path = dir.join(name);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => {
                    write_rows(file, [CSV_HEADER])?;
                    info!("Logging to {}", path.display());
                    return Ok(Self { path });
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
                Err(e) => return Err(e.into()),
            }
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Append one sample as `elapsed,value`, both with two decimals
    pub(crate) fn append(&self, sample: &Sample) -> Result<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let elapsed = format_fixed2(sample.elapsed_seconds);
        let value = format_fixed2(sample.value);
        write_rows(file, [[elapsed.as_str(), value.as_str()]])
    }
}

fn write_rows<'a, I>(file: File, rows: I) -> Result<()>
where
    I: IntoIterator<Item = [&'a str; 2]>,
{
    let mut writer = csv::Writer::from_writer(file);
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
