//! Vector geometry emitted for the renderer.

use glam::Vec2;

use crate::data_types::AggregatePoint;

/// One vector path command, in absolute screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    Close,
}

/// Marker position for one real data point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SymbolPlacement {
    pub position: Vec2,
    /// Index of the source entry in its series.
    pub source: usize,
}

/// Everything the renderer needs to draw one series.
#[derive(Clone, Debug, Default)]
pub struct SeriesGeometry {
    pub fill: Vec<PathCommand>,
    pub stroke: Vec<PathCommand>,
    pub symbols: Vec<SymbolPlacement>,
}

/// Boundary line of a series. Drop-down anchors belong to the fill outline
/// only and are left out of the stroke.
pub fn stroke_commands(display: &[AggregatePoint]) -> Vec<PathCommand> {
    let mut out = Vec::new();
    let mut started = false;
    for point in display {
        if point.drop_down {
            continue;
        }
        if !started || !point.line_to {
            out.push(PathCommand::MoveTo(point.display));
            started = true;
        } else {
            out.push(PathCommand::LineTo(point.display));
        }
    }
    out
}

/// Fill polygon for a stacked series: the boundary traced forward, then the
/// lower series' boundary traced in reverse so the region is bounded below by
/// the lower series' top edge. The bottom series closes against the zero
/// line instead.
pub fn fill_commands(
    display: &[AggregatePoint],
    previous: &[AggregatePoint],
    zero_y: f32,
) -> Vec<PathCommand> {
    let Some(first) = display.first() else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(display.len() + previous.len() + 3);
    out.push(PathCommand::MoveTo(first.display));
    for point in &display[1..] {
        if point.line_to {
            out.push(PathCommand::LineTo(point.display));
        } else {
            out.push(PathCommand::MoveTo(point.display));
        }
    }
    if previous.is_empty() {
        let last = display.last().unwrap_or(first);
        out.push(PathCommand::LineTo(Vec2::new(last.display.x, zero_y)));
        out.push(PathCommand::LineTo(Vec2::new(first.display.x, zero_y)));
    } else {
        for point in previous.iter().rev() {
            out.push(PathCommand::LineTo(point.display));
        }
    }
    out.push(PathCommand::Close);
    out
}

/// Marker placements: real data points only, never synthetic or interpolated
/// vertices.
pub fn symbol_placements(display: &[AggregatePoint]) -> Vec<SymbolPlacement> {
    display
        .iter()
        .filter(|p| !p.skip_symbol && !p.drop_down)
        .filter_map(|p| {
            p.source.map(|source| SymbolPlacement {
                position: p.display,
                source,
            })
        })
        .collect()
}
