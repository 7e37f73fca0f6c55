//! Linear interpolation between two known points.

/// Estimates y at `x` on the segment between (`low_x`, `low_y`) and
/// (`high_x`, `high_y`).
///
/// Callers must never pass a degenerate bracket (`low_x == high_x`); the
/// bracket search routes equal-x cases to the exact-match branch before any
/// interpolation happens.
#[inline]
pub fn interpolate(low_x: f64, low_y: f64, high_x: f64, high_y: f64, x: f64) -> f64 {
    debug_assert!(
        low_x != high_x,
        "degenerate bracket: low_x == high_x == {low_x}"
    );
    low_y + (high_y - low_y) * (x - low_x) / (high_x - low_x)
}

/// Screen-space variant. Kept separate so pixel interpolation stays exact even
/// when the value axis is nonlinear (a log scale maps equal data deltas to
/// unequal pixel deltas, so data-space and screen-space interpolation disagree
/// and both are needed).
///
/// Distinct data-space x values can collapse to the same f32 pixel once the
/// spacing drops below a pixel, so a coincident bracket is legal here and
/// resolves to the left endpoint.
#[inline]
pub fn interpolate_screen(low_x: f32, low_y: f32, high_x: f32, high_y: f32, x: f32) -> f32 {
    if low_x == high_x {
        return low_y;
    }
    interpolate(low_x as f64, low_y as f64, high_x as f64, high_y as f64, x as f64) as f32
}
