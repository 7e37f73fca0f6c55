//! Axis coordinate mappers.
//!
//! An axis converts domain values (numbers or category labels) to pixel
//! offsets inside the plot area and back. The layout engine only talks to the
//! [`CoordinateMapper`] trait; [`NumericAxis`] and [`CategoryAxis`] are the two
//! concrete mappers shipped with the crate.

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::scales::ChartScale;

/// Domain-to-pixel contract consumed by the layout engine.
///
/// `display_position` and `zero_position` return offsets relative to the axis
/// range start; the plot transform adds the plot-area origin.
pub trait CoordinateMapper {
    /// Numeric stand-in for a domain value, used for sorting and data-space
    /// interpolation.
    fn to_numeric_value(&self, value: f64) -> f64;

    /// Inverse of `to_numeric_value`.
    fn to_real_value(&self, numeric: f64) -> f64;

    /// Pixel offset of a domain value along the axis.
    fn display_position(&self, value: f64) -> f32;

    /// Pixel offset of the axis zero line. For a value axis whose displayed
    /// range does not include zero, this clamps to the nearer range edge.
    fn zero_position(&self) -> f32;
}

/// Continuous axis backed by a [`ChartScale`].
#[derive(Clone, Debug)]
pub struct NumericAxis {
    pub scale: ChartScale,
    pub format: AxisFormat,
}

impl NumericAxis {
    pub fn new(scale: ChartScale) -> Self {
        Self {
            scale,
            format: AxisFormat::Numeric,
        }
    }

    pub fn with_format(mut self, format: AxisFormat) -> Self {
        self.format = format;
        self
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        self.scale.ticks(count)
    }

    pub fn format_tick(&self, value: f64) -> String {
        match self.format {
            AxisFormat::Time(unit) => {
                let (d_min, d_max) = self.scale.domain();
                format_time_tick(value, unit, unit.to_seconds((d_max - d_min).abs()))
            }
            AxisFormat::Numeric => format_numeric_tick(value),
        }
    }
}

impl CoordinateMapper for NumericAxis {
    fn to_numeric_value(&self, value: f64) -> f64 {
        value
    }

    fn to_real_value(&self, numeric: f64) -> f64 {
        numeric
    }

    fn display_position(&self, value: f64) -> f32 {
        self.scale.map(value)
    }

    fn zero_position(&self) -> f32 {
        let (d_min, d_max) = self.scale.domain();
        let zero = 0f64.clamp(d_min.min(d_max), d_min.max(d_max));
        self.scale.map(zero)
    }
}

/// Discrete axis: categories evenly spaced along the range, addressed by
/// index. `to_numeric_value` is the category index itself.
#[derive(Clone, Debug)]
pub struct CategoryAxis {
    pub categories: Vec<String>,
    pub range: (f32, f32),
}

impl CategoryAxis {
    pub fn new(categories: Vec<String>, range: (f32, f32)) -> Self {
        Self { categories, range }
    }

    fn spacing(&self) -> f32 {
        if self.categories.is_empty() {
            0.0
        } else {
            (self.range.1 - self.range.0) / self.categories.len() as f32
        }
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.categories.get(index).map(String::as_str)
    }

    /// Index of the category slot under a pixel offset.
    pub fn index_at(&self, pixel: f32) -> f64 {
        let spacing = self.spacing();
        if spacing == 0.0 {
            return 0.0;
        }
        (((pixel - self.range.0) / spacing) - 0.5).round() as f64
    }
}

impl CoordinateMapper for CategoryAxis {
    fn to_numeric_value(&self, value: f64) -> f64 {
        value
    }

    fn to_real_value(&self, numeric: f64) -> f64 {
        numeric.round()
    }

    fn display_position(&self, value: f64) -> f32 {
        // Center of the category slot.
        self.range.0 + (value as f32 + 0.5) * self.spacing()
    }

    fn zero_position(&self) -> f32 {
        self.range.0
    }
}

/// Concrete axis dispatch used by [`crate::transform::PlotTransform`].
#[derive(Clone, Debug)]
pub enum Axis {
    Numeric(NumericAxis),
    Category(CategoryAxis),
}

impl Axis {
    pub fn linear(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self::Numeric(NumericAxis::new(ChartScale::new_linear(domain, range)))
    }

    pub fn log10(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self::Numeric(NumericAxis::new(ChartScale::new_log10(domain, range)))
    }

    pub fn category(categories: Vec<String>, range: (f32, f32)) -> Self {
        Self::Category(CategoryAxis::new(categories, range))
    }
}

impl CoordinateMapper for Axis {
    fn to_numeric_value(&self, value: f64) -> f64 {
        match self {
            Self::Numeric(a) => a.to_numeric_value(value),
            Self::Category(a) => a.to_numeric_value(value),
        }
    }

    fn to_real_value(&self, numeric: f64) -> f64 {
        match self {
            Self::Numeric(a) => a.to_real_value(numeric),
            Self::Category(a) => a.to_real_value(numeric),
        }
    }

    fn display_position(&self, value: f64) -> f32 {
        match self {
            Self::Numeric(a) => a.display_position(value),
            Self::Category(a) => a.display_position(value),
        }
    }

    fn zero_position(&self) -> f32 {
        match self {
            Self::Numeric(a) => a.zero_position(),
            Self::Category(a) => a.zero_position(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisFormat {
    #[default]
    Numeric,
    Time(TimeUnit),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    #[default]
    Seconds,
    Milliseconds,
}

impl TimeUnit {
    fn to_seconds(self, value: f64) -> f64 {
        match self {
            Self::Seconds => value,
            Self::Milliseconds => value / 1000.0,
        }
    }
}

fn format_numeric_tick(value: f64) -> String {
    if value.abs() < 0.001 && value.abs() > 0.0 {
        format!("{:.4}", value)
    } else if value.abs() > 1000.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

// Picks a date format from the visible span, then renders with chrono.
fn format_time_tick(value: f64, unit: TimeUnit, span_sec: f64) -> String {
    const HOUR: f64 = 3600.0;
    const DAY: f64 = 24.0 * HOUR;
    const YEAR: f64 = 365.0 * DAY;

    let seconds = unit.to_seconds(value) as i64;
    let dt = match Utc.timestamp_opt(seconds, 0) {
        chrono::LocalResult::Single(d) => d,
        chrono::LocalResult::Ambiguous(d, _) => d,
        chrono::LocalResult::None => return format!("{:.2}", value),
    };

    let fmt = if span_sec > YEAR * 2.0 {
        "%Y"
    } else if span_sec > DAY * 60.0 {
        "%b %Y"
    } else if span_sec > DAY * 1.5 {
        "%d %b"
    } else if span_sec > 300.0 {
        "%H:%M"
    } else {
        "%H:%M:%S"
    };
    dt.format(fmt).to_string()
}
