use super::color::Rgb;
use super::geometry::Viewport;

/// Square region drawn for one grid cell, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellRect {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl CellRect {
    /// Half-pixel inset square around a cell centre, leaving a 1px seam.
    #[inline]
    pub fn around(cx: f32, cy: f32, cell: f32) -> Self {
        let half = cell / 2.0;
        Self {
            x: cx - half + 0.5,
            y: cy - half + 0.5,
            size: cell - 1.0,
        }
    }
}

/// Drawing target for the compositor. The browser implementation wraps a
/// `CanvasRenderingContext2d`; tests record the calls.
pub trait Surface {
    fn clear(&mut self, viewport: Viewport);
    fn fill_cell(&mut self, rect: CellRect, color: Rgb, alpha: f32);
    /// White hairline outline at `alpha`.
    fn stroke_cell(&mut self, rect: CellRect, alpha: f32);
}
