//! Chart kinds and the hooks that actually vary between them.
//!
//! One flat enum instead of a subtype hierarchy: the only behavior that
//! differs per kind is how geometry is emitted from a display list and what
//! the legend marker looks like, so those dispatch to free functions in the
//! per-kind modules.

pub mod area;
pub mod line;
pub mod scatter;
pub mod stacked_area;

use serde::{Deserialize, Serialize};

use crate::data_types::AggregatePoint;
use crate::rendering::SeriesGeometry;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Line,
    Area,
    Scatter,
    #[default]
    StackedArea,
}

/// Legend marker shape per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendMarker {
    Line,
    FilledSquare,
    Dot,
}

impl ChartKind {
    /// Whether series' display lists feed each other as stack baselines.
    pub fn is_stacked(&self) -> bool {
        matches!(self, Self::StackedArea)
    }

    pub fn legend_marker(&self) -> LegendMarker {
        match self {
            Self::Line => LegendMarker::Line,
            Self::Area | Self::StackedArea => LegendMarker::FilledSquare,
            Self::Scatter => LegendMarker::Dot,
        }
    }

    /// Emits the geometry for one series. `previous` is the lower series'
    /// display list (stacked kinds only), `zero_y` the absolute screen y of
    /// the value-axis zero line.
    pub fn emit(
        &self,
        display: &[AggregatePoint],
        previous: &[AggregatePoint],
        zero_y: f32,
    ) -> SeriesGeometry {
        match self {
            Self::Line => line::emit(display),
            Self::Area => area::emit(display, zero_y),
            Self::Scatter => scatter::emit(display),
            Self::StackedArea => stacked_area::emit(display, previous, zero_y),
        }
    }
}
