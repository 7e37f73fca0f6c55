//! stack_chart: a framework-agnostic layout engine for stacked 2-D charts.
//!
//! The crate turns ordered series of (x, y) data points into vector path
//! geometry (move-to / line-to / close commands), symbol placements and legend
//! entries. It does no painting itself; the output is handed to whatever
//! renderer owns the chart.

pub mod animation;
pub mod axis;
pub mod chart;
pub mod data_types;
pub mod geometry;
pub mod plot_types;
pub mod rendering;
pub mod scales;
pub mod stacking;
pub mod transform;

pub use axis::{Axis, CategoryAxis, CoordinateMapper, NumericAxis};
pub use chart::{Chart, ChartLayout, SeriesLayout};
pub use data_types::{AggregatePoint, DataPoint, Series, StackOrigin};
pub use plot_types::ChartKind;
pub use rendering::{PathCommand, SeriesGeometry, SymbolPlacement};
pub use transform::PlotTransform;
