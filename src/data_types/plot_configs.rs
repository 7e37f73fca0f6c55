//! Per-series and chart-level style configuration.

use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA color, components in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }
}

impl Default for Rgba {
    fn default() -> Self {
        // Matches the default palette's first entry.
        Self::new(0.27, 0.51, 0.71, 1.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub color: Rgba,
    pub line_width: f32,
    /// Fill alpha applied on top of `color` for area kinds.
    pub fill_opacity: f32,
    pub symbol_radius: f32,
    pub show_symbols: bool,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            color: Rgba::default(),
            line_width: 2.0,
            fill_opacity: 0.35,
            symbol_radius: 3.5,
            show_symbols: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendPosition {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    pub enabled: bool,
    pub position: LegendPosition,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            position: LegendPosition::TopLeft,
        }
    }
}
