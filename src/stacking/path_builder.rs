//! Single-pass walk turning the merged stacking input into a display list.
//!
//! The walk visits the x-sorted aggregate once (O(n), n = |current| +
//! |previous|) and emits the current series' boundary vertices. That boundary
//! doubles as the baseline for the series stacked above, so cumulative y
//! values and screen positions are both carried on every emitted vertex.

use glam::Vec2;

use crate::data_types::{AggregatePoint, StackOrigin};
use crate::transform::PlotTransform;

use super::aggregate::AggregateItem;
use super::interpolate::{interpolate, interpolate_screen};
use super::ResolvedPoint;

/// Walks the merged aggregate and produces the series' display list.
///
/// Per entry, in x-order:
/// - Current data points are offset by the lower boundary: exactly when the
///   boundary has a vertex at the same x, by dual data/screen interpolation
///   when it brackets the x, and by the zero line when it does not (with
///   drop-to-zero anchors delimiting each contiguous run).
/// - Previous-boundary vertices with no matching data point are copied in so
///   the fill keeps tracking the lower boundary's shape: as plain drop-down
///   anchors outside the data's x-range, as interpolated no-symbol line
///   vertices inside it.
pub fn build_stack_path(agg: &[AggregateItem], transform: &PlotTransform) -> Vec<AggregatePoint> {
    let zero_y = transform.zero_screen_y();
    let first_data_x = agg.iter().find(|it| it.is_current()).map(|it| it.x());
    let last_data_x = agg.iter().rev().find(|it| it.is_current()).map(|it| it.x());

    // An empty series is transparent: its boundary is the lower boundary
    // unchanged, so the series above stacks as if it were not there. The
    // copies are synthetic (no data of their own), so they draw nothing.
    if first_data_x.is_none() {
        return agg
            .iter()
            .filter_map(|it| match it {
                AggregateItem::Previous(p) => Some(AggregatePoint {
                    origin: StackOrigin::Previous,
                    drop_down: true,
                    skip_symbol: true,
                    source: None,
                    ..p.clone()
                }),
                AggregateItem::Current(_) => None,
            })
            .collect();
    }

    let mut out: Vec<AggregatePoint> = Vec::with_capacity(agg.len() + 4);

    for i in 0..agg.len() {
        match &agg[i] {
            AggregateItem::Current(p) => {
                emit_current(&mut out, agg, i, p, transform, zero_y);
            }
            AggregateItem::Previous(pp) => {
                let outside = first_data_x.map_or(true, |f| pp.x < f)
                    || last_data_x.map_or(true, |l| pp.x > l);
                emit_previous(&mut out, agg, i, pp, outside, transform, zero_y);
            }
        }
    }
    out
}

fn emit_current(
    out: &mut Vec<AggregatePoint>,
    agg: &[AggregateItem],
    i: usize,
    p: &ResolvedPoint,
    transform: &PlotTransform,
    zero_y: f32,
) {
    let display_x = transform.x_to_screen(p.x);
    let own_display_y = transform.y_to_screen(p.y);

    if let Some(prev) = exact_previous(agg, i, p.x) {
        // Lower boundary has a vertex at exactly this x: stack on it. The
        // screen offset is the boundary's displacement from the zero line.
        push(
            out,
            AggregatePoint {
                x: p.x,
                y: p.y + prev.y,
                display: Vec2::new(display_x, own_display_y + (prev.display.y - zero_y)),
                origin: StackOrigin::Current,
                drop_down: false,
                line_to: true,
                skip_symbol: false,
                source: Some(p.source),
            },
        );
        return;
    }

    let left = nearest_previous(agg, i, Dir::Left);
    let right = nearest_previous(agg, i, Dir::Right);

    if let (Some(lp), Some(rp)) = (left, right) {
        // Strict bracket (lp.x < p.x < rp.x; equal x was handled above).
        // Interpolate the baseline twice: data space for the cumulative
        // value, screen space so the pixel position stays exact under a
        // nonlinear value axis.
        let base_y = interpolate(lp.x, lp.y, rp.x, rp.y, p.x);
        let base_display_y = interpolate_screen(
            lp.display.x,
            lp.display.y,
            rp.display.x,
            rp.display.y,
            display_x,
        );
        if start_of_run(agg, i) {
            // Close the fill against the irregular lower boundary, not zero.
            push(
                out,
                AggregatePoint::anchor(p.x, base_y, Vec2::new(display_x, base_display_y), true),
            );
        }
        push(
            out,
            AggregatePoint {
                x: p.x,
                y: p.y + base_y,
                display: Vec2::new(display_x, own_display_y + (base_display_y - zero_y)),
                origin: StackOrigin::Current,
                drop_down: false,
                line_to: true,
                skip_symbol: false,
                source: Some(p.source),
            },
        );
    } else {
        // Bottom of the stack, or x outside the lower boundary's range: the
        // baseline is the zero line. Runs of such points are delimited by
        // drop-to-zero anchors so the fill closes at the run edges.
        if start_of_run(agg, i) {
            // A jump here from previous-origin output has no shared x, so
            // the fill is not contiguous: restart the sub-path.
            let continues = !matches!(
                out.last().map(|e| e.origin),
                Some(StackOrigin::Previous)
            );
            push(
                out,
                AggregatePoint::anchor(p.x, 0.0, Vec2::new(display_x, zero_y), continues),
            );
        }
        push(
            out,
            AggregatePoint {
                x: p.x,
                y: p.y,
                display: Vec2::new(display_x, own_display_y),
                origin: StackOrigin::Current,
                drop_down: false,
                line_to: true,
                skip_symbol: false,
                source: Some(p.source),
            },
        );
        if end_of_run(agg, i) {
            push(
                out,
                AggregatePoint::anchor(p.x, 0.0, Vec2::new(display_x, zero_y), true),
            );
        }
    }
}

fn emit_previous(
    out: &mut Vec<AggregatePoint>,
    agg: &[AggregateItem],
    i: usize,
    pp: &AggregatePoint,
    outside: bool,
    transform: &PlotTransform,
    zero_y: f32,
) {
    if outside {
        // Beyond the data's own x-range the boundary is copied verbatim as a
        // drop-down anchor, clamping the fill at the lower series' edges.
        push(
            out,
            AggregatePoint {
                origin: StackOrigin::Previous,
                drop_down: true,
                line_to: true,
                skip_symbol: true,
                source: None,
                ..pp.clone()
            },
        );
        return;
    }

    if has_exact_current(agg, i, pp.x) {
        // The data point at the same x already renders this vertex.
        return;
    }

    // Inside the data's x-range both bracketing data points exist, since the
    // range is delimited by data points and the exact-x case was excluded.
    let (Some(lc), Some(rc)) = (
        nearest_current(agg, i, Dir::Left),
        nearest_current(agg, i, Dir::Right),
    ) else {
        unreachable!("previous-origin vertex inside data range must be bracketed by data points");
    };

    let cur_y = interpolate(lc.x, lc.y, rc.x, rc.y, pp.x);
    let own_display_y = transform.y_to_screen(cur_y);
    push(
        out,
        AggregatePoint {
            x: pp.x,
            y: cur_y + pp.y,
            display: Vec2::new(pp.display.x, own_display_y + (pp.display.y - zero_y)),
            origin: StackOrigin::Previous,
            drop_down: false,
            line_to: true,
            // Interpolated, not real user data: part of the line, no marker.
            skip_symbol: true,
            source: None,
        },
    );
}

// The very first emitted vertex always starts the path.
fn push(out: &mut Vec<AggregatePoint>, mut point: AggregatePoint) {
    if out.is_empty() {
        point.line_to = false;
    }
    out.push(point);
}

#[derive(Clone, Copy)]
enum Dir {
    Left,
    Right,
}

/// Nearest previous-origin vertex by position in the sorted aggregate (not by
/// x distance).
fn nearest_previous(agg: &[AggregateItem], i: usize, dir: Dir) -> Option<&AggregatePoint> {
    let found = match dir {
        Dir::Left => agg[..i].iter().rev().find(|it| !it.is_current()),
        Dir::Right => agg[i + 1..].iter().find(|it| !it.is_current()),
    };
    match found {
        Some(AggregateItem::Previous(p)) => Some(p),
        _ => None,
    }
}

fn nearest_current(agg: &[AggregateItem], i: usize, dir: Dir) -> Option<&ResolvedPoint> {
    let found = match dir {
        Dir::Left => agg[..i].iter().rev().find(|it| it.is_current()),
        Dir::Right => agg[i + 1..].iter().find(|it| it.is_current()),
    };
    match found {
        Some(AggregateItem::Current(p)) => Some(p),
        _ => None,
    }
}

/// Previous-origin vertex sharing this exact x, if any. Scans the contiguous
/// equal-x window on both sides, nearest first. A non-anchor vertex wins over
/// a drop-down anchor, and an anchor off the zero line wins over one on it,
/// so a run-edge zero anchor never masks the true boundary top at the same x.
fn exact_previous<'a>(
    agg: &'a [AggregateItem],
    i: usize,
    x: f64,
) -> Option<&'a AggregatePoint> {
    let mut anchor = None;
    let mut zero_anchor = None;
    for item in equal_x_window(agg, i, x) {
        if let AggregateItem::Previous(p) = item {
            if !p.drop_down {
                return Some(p);
            }
            if p.y != 0.0 {
                anchor.get_or_insert(p);
            } else {
                zero_anchor.get_or_insert(p);
            }
        }
    }
    anchor.or(zero_anchor)
}

fn has_exact_current(agg: &[AggregateItem], i: usize, x: f64) -> bool {
    equal_x_window(agg, i, x).any(|it| it.is_current())
}

// All entries sharing x with agg[i], excluding agg[i] itself.
fn equal_x_window<'a>(
    agg: &'a [AggregateItem],
    i: usize,
    x: f64,
) -> impl Iterator<Item = &'a AggregateItem> {
    let left = agg[..i].iter().rev().take_while(move |it| it.x() == x);
    let right = agg[i + 1..].iter().take_while(move |it| it.x() == x);
    left.chain(right)
}

/// First entry of a contiguous run of current-origin entries.
fn start_of_run(agg: &[AggregateItem], i: usize) -> bool {
    i == 0 || !agg[i - 1].is_current()
}

fn end_of_run(agg: &[AggregateItem], i: usize) -> bool {
    i + 1 == agg.len() || !agg[i + 1].is_current()
}
