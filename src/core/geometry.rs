//! Viewport geometry shared by the pass lifecycle and the compositor.
//!
//! Everything here scales with the viewport diagonal or the derived cell
//! size, so very wide and very tall viewports behave the same way.

use super::params::ShimmerParams;
use glam::Vec2;

/// Drawing area in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Range of corner projections onto a direction vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min: f32,
    pub max: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True until the surface has been measured. NaN counts as empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    #[inline]
    pub fn diagonal(&self) -> f32 {
        self.width.hypot(self.height)
    }

    #[inline]
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::ZERO,
            Vec2::new(self.width, 0.0),
            Vec2::new(0.0, self.height),
            Vec2::new(self.width, self.height),
        ]
    }

    /// Minimum and maximum signed distance of the four corners along `dir`.
    pub fn extent_along(&self, dir: Vec2) -> Extent {
        self.corners().iter().fold(
            Extent {
                min: f32::INFINITY,
                max: f32::NEG_INFINITY,
            },
            |acc, c| {
                let p = c.dot(dir);
                Extent {
                    min: acc.min.min(p),
                    max: acc.max.max(p),
                }
            },
        )
    }
}

/// Unit direction of travel for a sweep angle (radians).
#[inline]
pub fn direction(angle: f32) -> Vec2 {
    Vec2::from_angle(angle)
}

/// Grid cell size: `floor(min(w, h) / divisor)` clamped to the (boosted) bounds.
pub fn cell_size(viewport: Viewport, coarse_pointer: bool, params: &ShimmerParams) -> f32 {
    let boost = if coarse_pointer {
        params.coarse_pointer_boost
    } else {
        1.0
    };
    let base = viewport.width.min(viewport.height);
    let fitted = (base / params.cell_divisor).floor();
    (params.cell_max * boost).min(fitted).max(params.cell_min * boost)
}

/// Values derived from the viewport once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameMetrics {
    pub viewport: Viewport,
    pub cell: f32,
    pub cols: u32,
    pub rows: u32,
    pub diagonal: f32,
    /// Pass travel per second.
    pub speed: f32,
    pub margin: f32,
    pub band: f32,
    pub glow_sigma: f32,
}

impl FrameMetrics {
    pub fn new(viewport: Viewport, coarse_pointer: bool, params: &ShimmerParams) -> Self {
        let cell = cell_size(viewport, coarse_pointer, params);
        let diagonal = viewport.diagonal();
        let (cols, rows) = if viewport.is_empty() {
            (0, 0)
        } else {
            (
                (viewport.width / cell).ceil() as u32,
                (viewport.height / cell).ceil() as u32,
            )
        };
        Self {
            viewport,
            cell,
            cols,
            rows,
            diagonal,
            speed: diagonal * params.speed_diag_factor,
            margin: cell * params.margin_cells,
            band: (cell * params.band_cells).max(diagonal * params.band_diag_factor),
            glow_sigma: params.glow_sigma_max.min(cell * params.glow_sigma_cells),
        }
    }

    /// Centre of the cell at column `c`, row `r`.
    #[inline]
    pub fn cell_center(&self, c: u32, r: u32) -> Vec2 {
        let half = self.cell / 2.0;
        Vec2::new(c as f32 * self.cell + half, r as f32 * self.cell + half)
    }

    /// Start line for a pass travelling along `dir`: just outside the leading edge.
    #[inline]
    pub fn entry_position(&self, dir: Vec2) -> f32 {
        self.viewport.extent_along(dir).min - self.margin
    }

    /// Retirement line for a pass travelling along `dir`.
    #[inline]
    pub fn exit_position(&self, dir: Vec2) -> f32 {
        self.viewport.extent_along(dir).max + self.margin
    }
}
