use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use chrono::Local;
use log::{debug, info, warn};

use crate::cli::RunSettings;
use crate::core::{PollOutcome, Sampler};
use crate::error::Result;
use crate::output::{CsvLog, LivePlot};
use crate::source::{LineSource, SerialSource, list_ports};

/// Poll tallies for one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RunSummary {
    pub(crate) polls: u64,
    pub(crate) recorded: u64,
    pub(crate) skipped: u64,
    pub(crate) empty: u64,
    pub(crate) failed: u64,
}

impl RunSummary {
    fn count(&mut self, outcome: &PollOutcome) {
        self.polls += 1;
        match outcome {
            PollOutcome::Recorded(_) => self.recorded += 1,
            PollOutcome::Skipped(_) => self.skipped += 1,
            PollOutcome::Empty => self.empty += 1,
            PollOutcome::Failed(_) => self.failed += 1,
        }
    }
}

/// Shared stop request, set from the Ctrl-C handler and read between ticks
#[derive(Debug, Clone, Default)]
pub(crate) struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub(crate) fn trigger(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub(crate) fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Route Ctrl-C to this flag instead of killing the process
    fn install_ctrlc_handler(&self) {
        let flag = self.clone();
        if let Err(e) = ctrlc::set_handler(move || flag.trigger()) {
            warn!("Could not install Ctrl-C handler: {e}");
        }
    }
}

/// Open the scale, create the log and sample until stopped.
///
/// Only startup can fail; once sampling begins every fault stays inside its
/// poll.
pub(crate) fn handle_run(settings: &RunSettings) -> Result<()> {
    let source = SerialSource::open(&settings.serial)?;
    let log = CsvLog::create(&settings.output_dir, &settings.prefix, Local::now())?;
    let plot = settings.plot.clone().map(LivePlot::new);
    if let Some(plot) = &plot {
        info!("Plotting to {}", plot.path().display());
    }

    let stop = StopFlag::default();
    stop.install_ctrlc_handler();

    let mut sampler = Sampler::new(log);
    sample_until_stopped(
        source,
        &mut sampler,
        plot.as_ref(),
        settings.interval,
        settings.duration,
        &stop,
    );

    if sampler.series().is_empty() {
        warn!("No samples were recorded");
    }
    info!(
        "{} samples saved to {}",
        sampler.series().len(),
        sampler.log().path().display()
    );
    Ok(())
}

/// Run the loop until `stop` is set or `limit` has passed, then close the
/// source.
///
/// The source is consumed so it is dropped (and the port released) on every
/// way out of the loop.
pub(crate) fn sample_until_stopped<S: LineSource>(
    mut source: S,
    sampler: &mut Sampler,
    plot: Option<&LivePlot>,
    interval: Duration,
    limit: Option<Duration>,
    stop: &StopFlag,
) -> RunSummary {
    let summary = run_loop(sampler, &mut source, plot, interval, |_, elapsed| {
        stop.is_set() || limit.is_some_and(|limit| elapsed >= limit)
    });

    if stop.is_set() {
        info!("Plot closed by user.");
    }
    info!(
        "Stopped after {} polls: {} recorded, {} skipped, {} empty, {} failed",
        summary.polls, summary.recorded, summary.skipped, summary.empty, summary.failed
    );
    drop(source);
    summary
}

/// Sleep-and-poll loop: one poll and one redraw per tick.
///
/// `stop` is checked before every tick with the tallies so far and the time
/// since the loop started. Slow reads stretch the cadence; nothing tries to
/// catch up.
pub(crate) fn run_loop<F>(
    sampler: &mut Sampler,
    source: &mut dyn LineSource,
    plot: Option<&LivePlot>,
    interval: Duration,
    mut stop: F,
) -> RunSummary
where
    F: FnMut(&RunSummary, Duration) -> bool,
{
    let started = Instant::now();
    let mut summary = RunSummary::default();

    while !stop(&summary, started.elapsed()) {
        let outcome = sampler.poll(source);
        summary.count(&outcome);

        if let Some(plot) = plot
            && let Err(e) = plot.redraw(sampler.series())
        {
            warn!("Failed to redraw {}: {e}", plot.path().display());
        }

        debug!("tick {} done", summary.polls);
        thread::sleep(interval);
    }

    summary
}

pub(crate) fn handle_ports() -> Result<()> {
    let ports = list_ports()?;
    if ports.is_empty() {
        println!("No serial ports found.");
        return Ok(());
    }
    for port in ports {
        println!("{port}");
    }
    Ok(())
}
