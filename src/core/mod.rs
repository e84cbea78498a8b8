//! Core module - sample types, value extraction and the sampling loop body

mod extract;
mod sampler;
mod types;

pub(crate) use sampler::Sampler;
pub(crate) use types::{PollOutcome, Sample, Series};
