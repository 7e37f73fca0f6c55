//! Area kind: one series filled down to the zero line.

use crate::data_types::AggregatePoint;
use crate::rendering::{self, SeriesGeometry};

pub fn emit(display: &[AggregatePoint], zero_y: f32) -> SeriesGeometry {
    SeriesGeometry {
        fill: rendering::fill_commands(display, &[], zero_y),
        stroke: rendering::stroke_commands(display),
        symbols: rendering::symbol_placements(display),
    }
}
