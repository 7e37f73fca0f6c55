//! Scatter kind: markers only.

use crate::data_types::AggregatePoint;
use crate::rendering::{self, SeriesGeometry};

pub fn emit(display: &[AggregatePoint]) -> SeriesGeometry {
    SeriesGeometry {
        fill: Vec::new(),
        stroke: Vec::new(),
        symbols: rendering::symbol_placements(display),
    }
}
