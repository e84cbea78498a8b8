//! Sampling: one poll turns at most one device line into a recorded sample
//!
//! Everything a poll touches (origin time, series, log file) lives on the
//! `Sampler` itself, so several samplers can run side by side in tests.

use std::time::Instant;

use log::{debug, error, warn};

use super::extract::extract_value;
use super::types::{PollOutcome, Sample, Series};
use crate::error::Result;
use crate::output::CsvLog;
use crate::output::format::{format_fixed2, round2};
use crate::source::LineSource;

pub(crate) struct Sampler {
    origin: Instant,
    series: Series,
    log: CsvLog,
}

impl Sampler {
    pub(crate) fn new(log: CsvLog) -> Self {
        Self::with_origin(log, Instant::now())
    }

    pub(crate) fn with_origin(log: CsvLog, origin: Instant) -> Self {
        Self {
            origin,
            series: Series::new(),
            log,
        }
    }

    pub(crate) fn series(&self) -> &Series {
        &self.series
    }

    pub(crate) fn log(&self) -> &CsvLog {
        &self.log
    }

    /// Take one reading from `source`, stamped with the time the value was
    /// obtained
    pub(crate) fn poll(&mut self, source: &mut dyn LineSource) -> PollOutcome {
        self.poll_with_clock(source, Instant::now)
    }

    /// Take one reading, stamped as if it arrived at `now`
    #[cfg(test)]
    pub(crate) fn poll_at(&mut self, source: &mut dyn LineSource, now: Instant) -> PollOutcome {
        self.poll_with_clock(source, || now)
    }

    /// Take one reading; `clock` is read only once a value has been parsed.
    ///
    /// Never fails: read and write errors are logged and reported as
    /// `PollOutcome::Failed`, and the next poll starts clean.
    fn poll_with_clock<C>(&mut self, source: &mut dyn LineSource, clock: C) -> PollOutcome
    where
        C: FnOnce() -> Instant,
    {
        match self.try_poll(source, clock) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Error reading line from {}: {e}", source.name());
                PollOutcome::Failed(e.to_string())
            }
        }
    }

    fn try_poll<C>(&mut self, source: &mut dyn LineSource, clock: C) -> Result<PollOutcome>
    where
        C: FnOnce() -> Instant,
    {
        source.discard_input()?;
        let raw = source.read_line()?;
        let line = raw.trim();

        if line.is_empty() {
            debug!("empty read from {}", source.name());
            return Ok(PollOutcome::Empty);
        }

        let Some(value) = extract_value(line) else {
            warn!("Skipped non-numeric: {line}");
            return Ok(PollOutcome::Skipped(line.to_string()));
        };

        let now = clock();
        let sample = Sample {
            elapsed_seconds: now.saturating_duration_since(self.origin).as_secs_f64(),
            value: round2(value),
        };

        // The in-memory series keeps the sample even if the file write fails.
        self.series.push(sample);
        self.log.append(&sample)?;

        println!(
            "{}, {}",
            format_fixed2(sample.elapsed_seconds),
            format_fixed2(sample.value)
        );
        Ok(PollOutcome::Recorded(sample))
    }
}
