//! Per-frame raster pass.
//!
//! Every cell is shaded from scratch each frame; nothing about the grid is
//! stored between frames.

use super::color::Rgb;
use super::constants::{
    MAX_PASSES, MIN_PASS_STRENGTH, NOISE_AMPLITUDE, NOISE_SPATIAL_FREQ, NOISE_TEMPORAL_FREQ,
};
use super::geometry::FrameMetrics;
use super::params::ShimmerParams;
use super::pass::SweepPass;
use super::surface::{CellRect, Surface};
use glam::Vec2;
use smallvec::SmallVec;

/// Where the pointer sits when nothing is hovering the page.
pub const OFFSCREEN: Vec2 = Vec2::new(-9999.0, -9999.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub active: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: OFFSCREEN,
            active: false,
        }
    }
}

impl PointerState {
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
        self.active = true;
    }

    pub fn leave(&mut self) {
        self.position = OFFSCREEN;
        self.active = false;
    }

    /// Follow the first active touch; a touch event with none left is a leave.
    pub fn track_touch(&mut self, first_touch: Option<Vec2>) {
        match first_touch {
            Some(p) => self.move_to(p.x, p.y),
            None => self.leave(),
        }
    }

    pub fn apply(&mut self, input: PointerInput) {
        match input {
            PointerInput::Move(p) => self.move_to(p.x, p.y),
            PointerInput::Touch(first) => self.track_touch(first),
            // Lifting any finger ends the glow, even with others still down.
            PointerInput::Leave | PointerInput::TouchEnd => self.leave(),
        }
    }
}

/// Pointer-side input as delivered by the platform listeners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Move(Vec2),
    Leave,
    /// touchstart / touchmove, carrying the first active touch.
    Touch(Option<Vec2>),
    TouchEnd,
}

/// Resolved shading for one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellShade {
    pub glow: f32,
    /// Summed sweep strength, before the `min(1, _)` cap.
    pub strength: f32,
    pub color: Rgb,
    /// Clamped alpha before the global transparency multiplier.
    pub alpha: f32,
    /// Alpha actually used for the fill.
    pub fill_alpha: f32,
}

// Per-frame snapshot of one pass, so the inner loop does no trig or HSL work.
#[derive(Clone, Copy)]
struct PassTint {
    dir: Vec2,
    position: f32,
    weight: f32,
    color: [f32; 3],
}

/// Low-amplitude shimmer from `x + y` and the frame timestamp (ms).
#[inline]
pub fn spatiotemporal_noise(center: Vec2, now_ms: f64) -> f32 {
    let phase = (center.x + center.y) as f64 * NOISE_SPATIAL_FREQ + now_ms * NOISE_TEMPORAL_FREQ;
    ((phase.sin() + 1.0) * NOISE_AMPLITUDE) as f32
}

/// Gaussian falloff between a cell centre and the pointer.
#[inline]
pub fn pointer_glow(center: Vec2, pointer: Vec2, sigma: f32) -> f32 {
    let dist2 = center.distance_squared(pointer);
    (-dist2 / (2.0 * sigma * sigma)).exp()
}

pub struct Compositor<'a> {
    params: &'a ShimmerParams,
    metrics: FrameMetrics,
    tints: SmallVec<[PassTint; MAX_PASSES]>,
    pointer: Option<Vec2>,
    now_ms: f64,
}

impl<'a> Compositor<'a> {
    /// `glow_enabled` is false under reduced motion; the pointer then has no
    /// effect even while active.
    pub fn new(
        params: &'a ShimmerParams,
        metrics: FrameMetrics,
        passes: &[SweepPass],
        pointer: &PointerState,
        glow_enabled: bool,
        now_ms: f64,
    ) -> Self {
        let tints = passes
            .iter()
            .map(|p| {
                let c = p.color(params);
                PassTint {
                    dir: p.direction(),
                    position: p.position,
                    weight: p.mix_factor(),
                    color: [c.r as f32, c.g as f32, c.b as f32],
                }
            })
            .collect();
        let pointer = (pointer.active && glow_enabled).then_some(pointer.position);
        Self {
            params,
            metrics,
            tints,
            pointer,
            now_ms,
        }
    }

    pub fn metrics(&self) -> &FrameMetrics {
        &self.metrics
    }

    pub fn shade(&self, center: Vec2) -> CellShade {
        let glow = self
            .pointer
            .map_or(0.0, |p| pointer_glow(center, p, self.metrics.glow_sigma));

        let band = self.metrics.band;
        let mut total = 0.0f32;
        let mut acc = [0.0f32; 3];
        for t in &self.tints {
            let d = (center.dot(t.dir) - t.position).abs();
            let crest = (1.0 - d / band).max(0.0);
            let s = crest * crest * t.weight;
            if s > MIN_PASS_STRENGTH {
                total += s;
                for (a, c) in acc.iter_mut().zip(t.color) {
                    *a += c * s;
                }
            }
        }

        let color = if total > 0.0 {
            let avg = |a: f32| (a / total).round().clamp(0.0, 255.0) as u8;
            Rgb::new(avg(acc[0]), avg(acc[1]), avg(acc[2]))
        } else {
            Rgb::WHITE
        };

        let alpha = self.resolve_alpha(total, glow, spatiotemporal_noise(center, self.now_ms));
        CellShade {
            glow,
            strength: total,
            color,
            alpha,
            fill_alpha: alpha * self.params.tint_alpha_scale,
        }
    }

    /// `base + min(1, strength) * sweep + glow * glow_weight + noise`, clamped.
    pub fn resolve_alpha(&self, strength: f32, glow: f32, noise: f32) -> f32 {
        let p = self.params;
        let raw = p.alpha_base
            + strength.min(1.0) * p.alpha_sweep_weight
            + glow * p.alpha_glow_weight
            + noise;
        raw.max(p.alpha_min).min(p.alpha_max)
    }

    /// Clear the surface and paint every cell.
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.metrics.viewport);
        let cell = self.metrics.cell;
        for r in 0..self.metrics.rows {
            for c in 0..self.metrics.cols {
                let center = self.metrics.cell_center(c, r);
                let shade = self.shade(center);
                let rect = CellRect::around(center.x, center.y, cell);
                surface.fill_cell(rect, shade.color, shade.fill_alpha);
                surface.stroke_cell(rect, self.params.outline_alpha);
            }
        }
    }
}
