//! Line kind: stroked boundary plus markers, no fill.

use crate::data_types::AggregatePoint;
use crate::rendering::{self, SeriesGeometry};

pub fn emit(display: &[AggregatePoint]) -> SeriesGeometry {
    SeriesGeometry {
        fill: Vec::new(),
        stroke: rendering::stroke_commands(display),
        symbols: rendering::symbol_placements(display),
    }
}
