//! Stacked-area kind: fill closed against the lower series' boundary.

use crate::data_types::AggregatePoint;
use crate::rendering::{self, SeriesGeometry};

pub fn emit(
    display: &[AggregatePoint],
    previous: &[AggregatePoint],
    zero_y: f32,
) -> SeriesGeometry {
    // A series with no real data points contributes nothing visually; its
    // display list still carries the baseline through to the series above.
    if !display.iter().any(|p| p.source.is_some()) {
        return SeriesGeometry::default();
    }
    SeriesGeometry {
        fill: rendering::fill_commands(display, previous, zero_y),
        stroke: rendering::stroke_commands(display),
        symbols: rendering::symbol_placements(display),
    }
}
