//! Stacked-series layout core.
//!
//! Series are laid out strictly bottom-to-top: each series' baseline is the
//! display list just computed for the series below it, so the order is a hard
//! sequential dependency. Everything here is a pure function of the resolved
//! data snapshot and the plot transform; display lists are rebuilt from
//! scratch on every pass and two passes over unchanged input produce
//! identical output.

pub mod aggregate;
pub mod interpolate;
pub mod path_builder;

use std::cmp::Ordering;

use glam::Vec2;
use tracing::trace;

use crate::data_types::{AggregatePoint, StackOrigin};
use crate::transform::PlotTransform;

pub use aggregate::{merge, AggregateItem};
pub use interpolate::{interpolate, interpolate_screen};
pub use path_builder::build_stack_path;

/// A data point resolved to numeric data space for one layout pass: animated
/// current values with the series entry multiplier already applied.
#[derive(Clone, Copy, Debug)]
pub struct ResolvedPoint {
    pub x: f64,
    pub y: f64,
    /// Index of the source entry in its series.
    pub source: usize,
}

/// Lays out a whole stack, bottom series first. Returns one display list per
/// input series; each is also the baseline consumed by the series above it.
pub fn layout_stack(
    series: &[Vec<ResolvedPoint>],
    transform: &PlotTransform,
) -> Vec<Vec<AggregatePoint>> {
    let mut previous: Vec<AggregatePoint> = Vec::new();
    let mut out = Vec::with_capacity(series.len());
    for (index, points) in series.iter().enumerate() {
        let agg = merge(points, &previous);
        let boundary = build_stack_path(&agg, transform);
        trace!(
            series = index,
            points = points.len(),
            vertices = boundary.len(),
            "stacked series laid out"
        );
        previous.clone_from(&boundary);
        out.push(boundary);
    }
    out
}

/// Display list for an unstacked series: points sorted by x, projected as-is.
pub fn layout_single(points: &[ResolvedPoint], transform: &PlotTransform) -> Vec<AggregatePoint> {
    let mut sorted: Vec<ResolvedPoint> = points.to_vec();
    sorted.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));
    sorted
        .iter()
        .enumerate()
        .map(|(i, p)| AggregatePoint {
            x: p.x,
            y: p.y,
            display: Vec2::new(transform.x_to_screen(p.x), transform.y_to_screen(p.y)),
            origin: StackOrigin::Current,
            drop_down: false,
            line_to: i > 0,
            skip_symbol: false,
            source: Some(p.source),
        })
        .collect()
}
