//! Live plot of the current series
//!
//! Every poll rewrites one SVG file with the whole series. The file is
//! replaced atomically so an image viewer watching it never sees half a
//! chart.

use std::ops::Range;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::consts::{CSV_HEADER, PLOT_TITLE};
use crate::core::Series;
use crate::error::{AppError, Result};

const PLOT_SIZE: (u32, u32) = (800, 480);
const MARKER_RADIUS: i32 = 3;

fn plot_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Plot(e.to_string())
}

/// Pad a `(min, max)` pair so the data never touches the frame.
///
/// A degenerate span (one point, or a flat line) widens to one unit either
/// side, or 5% of the magnitude for very large values. Non-finite bounds fall
/// back, and the result is always a finite, non-empty range.
pub(crate) fn axis_range(bounds: Option<(f64, f64)>, fallback: Range<f64>) -> Range<f64> {
    let Some((lo, hi)) = bounds.filter(|&(lo, hi)| lo.is_finite() && hi.is_finite() && lo <= hi)
    else {
        return fallback;
    };
    let span = hi - lo;
    let pad = if span.is_finite() && span > f64::EPSILON {
        span * 0.05
    } else {
        (lo.abs().max(hi.abs()) * 0.05).max(1.0)
    };
    // Keep the width itself representable
    let limit = f64::MAX / 4.0;
    (lo - pad).max(-limit)..(hi + pad).min(limit)
}

/// Render the series as an SVG document
pub(crate) fn render_svg(series: &Series) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, PLOT_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(plot_err)?;

        let x_range = axis_range(series.time_bounds(), 0.0..10.0);
        let y_range = axis_range(series.value_bounds(), -1.0..1.0);

        let mut chart = ChartBuilder::on(&root)
            .caption(PLOT_TITLE, ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)
            .map_err(plot_err)?;

        chart
            .configure_mesh()
            .x_desc(CSV_HEADER[0])
            .y_desc(CSV_HEADER[1])
            .draw()
            .map_err(plot_err)?;

        let points: Vec<(f64, f64)> = series
            .samples()
            .iter()
            .map(|s| (s.elapsed_seconds, s.value))
            .filter(|(t, v)| t.is_finite() && v.is_finite())
            .collect();

        chart
            .draw_series(LineSeries::new(points.iter().copied(), BLUE.stroke_width(1)))
            .map_err(plot_err)?;
        chart
            .draw_series(
                points
                    .iter()
                    .map(|&p| Circle::new(p, MARKER_RADIUS, BLUE.filled())),
            )
            .map_err(plot_err)?;

        root.present().map_err(plot_err)?;
    }
    Ok(svg)
}

/// SVG file that is redrawn after every poll
#[derive(Debug, Clone)]
pub(crate) struct LivePlot {
    path: PathBuf,
}

impl LivePlot {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn redraw(&self, series: &Series) -> Result<()> {
        let svg = render_svg(series)?;
        let tmp = self.path.with_extension("svg.tmp");
        std::fs::write(&tmp, svg.as_bytes())?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
