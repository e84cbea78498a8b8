//! Core data types for a sampling run
//!
//! A run produces a single ordered series of samples; nothing here is ever
//! mutated after it has been recorded.

/// One reading taken from the scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Sample {
    /// Seconds since the sampler was started
    pub(crate) elapsed_seconds: f64,
    /// Reading rounded to two decimal places
    pub(crate) value: f64,
}

/// Ordered history of every sample recorded in the current run
#[derive(Debug, Default, Clone)]
pub(crate) struct Series {
    samples: Vec<Sample>,
}

impl Series {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    pub(crate) fn len(&self) -> usize {
        self.samples.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub(crate) fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Time span covered by the series, `(first, last)` elapsed seconds
    pub(crate) fn time_bounds(&self) -> Option<(f64, f64)> {
        let first = self.samples.first()?;
        let last = self.samples.last()?;
        Some((first.elapsed_seconds, last.elapsed_seconds))
    }

    /// Smallest and largest recorded value
    pub(crate) fn value_bounds(&self) -> Option<(f64, f64)> {
        let mut iter = self.samples.iter().map(|s| s.value);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

/// Result of a single poll of the source
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PollOutcome {
    /// Line was blank after trimming
    Empty,
    /// Line had no numeric value; carries the trimmed line
    Skipped(String),
    /// A sample was recorded
    Recorded(Sample),
    /// The poll was abandoned because of an I/O error
    Failed(String),
}
