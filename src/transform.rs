//! Transform helper for coordinate projection.

use glam::{DVec2, Vec2};

use crate::axis::{Axis, CoordinateMapper};
use crate::geometry::Bounds;

/// Pairs an x and y axis mapper with the plot-area bounds, projecting between
/// data space and absolute screen space.
#[derive(Clone)]
pub struct PlotTransform {
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub bounds: Bounds,
}

impl PlotTransform {
    pub fn new(x_axis: Axis, y_axis: Axis, bounds: Bounds) -> Self {
        Self {
            x_axis,
            y_axis,
            bounds,
        }
    }

    pub fn data_to_screen(&self, point: DVec2) -> Vec2 {
        Vec2::new(self.x_to_screen(point.x), self.y_to_screen(point.y))
    }

    pub fn screen_to_data(&self, point: Vec2) -> DVec2 {
        DVec2::new(
            invert_axis(&self.x_axis, point.x - self.bounds.origin.x),
            invert_axis(&self.y_axis, point.y - self.bounds.origin.y),
        )
    }

    pub fn x_to_screen(&self, x: f64) -> f32 {
        self.bounds.origin.x + self.x_axis.display_position(x)
    }

    pub fn y_to_screen(&self, y: f64) -> f32 {
        self.bounds.origin.y + self.y_axis.display_position(y)
    }

    /// Absolute screen y of the value axis zero line. Every stack baseline is
    /// expressed as an offset from this position.
    pub fn zero_screen_y(&self) -> f32 {
        self.bounds.origin.y + self.y_axis.zero_position()
    }
}

fn invert_axis(axis: &Axis, pixel: f32) -> f64 {
    match axis {
        Axis::Numeric(a) => a.scale.invert(pixel),
        // Category axes have no continuous inverse; snap to the slot index.
        Axis::Category(a) => a.index_at(pixel),
    }
}
