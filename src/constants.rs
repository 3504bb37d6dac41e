// Browser adapter constants.

// DOM
pub const CANVAS_ID: &str = "grid-shimmer"; // canvas mounted by `start`
pub const CELL_CSS_VAR: &str = "--cell"; // layout unit published on <html>

// Backing store resolution cap (device pixels per CSS pixel)
pub const DEVICE_PIXEL_RATIO_CAP: f64 = 2.0;

// Media queries
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

/// Cap a reported device pixel ratio; missing or bogus values count as 1.
#[inline]
pub fn capped_pixel_ratio(reported: f64) -> f64 {
    if reported.is_finite() && reported > 0.0 {
        reported.min(DEVICE_PIXEL_RATIO_CAP)
    } else {
        1.0
    }
}
