//! Sweep pass lifecycle.
//!
//! At most [`MAX_PASSES`] wavefronts are alive at once. The oldest pass
//! hands over to a fresh one shortly before it leaves the viewport, so the
//! two overlap for roughly `overlap_window_sec`.

use super::color::{ease_in_out_cubic, hue_to_rgb, mix, Rgb};
use super::constants::MAX_PASSES;
use super::geometry::{direction, FrameMetrics};
use super::params::ShimmerParams;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// A linear colour wavefront travelling across the plane.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepPass {
    /// Direction of travel in radians, fixed for the pass's lifetime.
    pub angle: f32,
    /// Signed distance of the wavefront along its direction.
    pub position: f32,
    pub hue_from: f32,
    pub hue_to: f32,
    /// Fade-in and hue cross-fade progress in `[0, 1]`.
    pub color_phase: f32,
}

impl SweepPass {
    fn random<R: Rng + ?Sized>(rng: &mut R, params: &ShimmerParams, color_phase: f32) -> Self {
        Self {
            angle: rng.gen_range(0.0..TAU),
            position: 0.0,
            hue_from: params.random_hue(rng),
            hue_to: params.random_hue(rng),
            color_phase,
        }
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        direction(self.angle)
    }

    /// Eased colour phase; scales the pass strength and drives the hue mix.
    #[inline]
    pub fn mix_factor(&self) -> f32 {
        ease_in_out_cubic(self.color_phase)
    }

    /// Current tint, interpolated between the two endpoint hues.
    pub fn color(&self, params: &ShimmerParams) -> Rgb {
        let from = hue_to_rgb(self.hue_from, params.saturation, params.lightness);
        let to = hue_to_rgb(self.hue_to, params.saturation, params.lightness);
        mix(from, to, self.mix_factor())
    }

    fn step(&mut self, dt: f32, speed: f32, fade_duration_sec: f32) {
        self.position += speed * dt;
        self.color_phase = (self.color_phase + dt / fade_duration_sec).min(1.0);
    }
}

pub type Passes = SmallVec<[SweepPass; MAX_PASSES]>;

pub struct PassManager {
    params: ShimmerParams,
    passes: Passes,
    rng: StdRng,
    // The starting pass is placed once the viewport has a real size.
    awaiting_placement: bool,
}

impl PassManager {
    pub fn new(params: ShimmerParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(params: ShimmerParams, mut rng: StdRng) -> Self {
        let mut passes = Passes::new();
        // The opening pass starts fully faded in.
        passes.push(SweepPass::random(&mut rng, &params, 1.0));
        Self {
            params,
            passes,
            rng,
            awaiting_placement: true,
        }
    }

    /// Start from an explicit set of passes (already placed).
    pub fn with_passes(params: ShimmerParams, seed: u64, passes: &[SweepPass]) -> Self {
        Self {
            params,
            passes: passes.iter().take(MAX_PASSES).cloned().collect(),
            rng: StdRng::seed_from_u64(seed),
            awaiting_placement: false,
        }
    }

    pub fn passes(&self) -> &[SweepPass] {
        &self.passes
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    pub fn is_placed(&self) -> bool {
        !self.awaiting_placement
    }

    pub fn params(&self) -> &ShimmerParams {
        &self.params
    }

    /// Advance every pass by `dt` seconds, then apply the spawn and retire
    /// rules. A no-op while the viewport has no area.
    ///
    /// Passes are visited newest first; for each, the spawn check runs before
    /// the retire check, so the last pass standing always hands over before
    /// it disappears. A pass spawned here is not advanced until next frame.
    pub fn advance(&mut self, dt: f32, metrics: &FrameMetrics) {
        if metrics.viewport.is_empty() {
            return;
        }
        if self.awaiting_placement {
            for pass in self.passes.iter_mut() {
                pass.position = metrics.entry_position(pass.direction());
            }
            self.awaiting_placement = false;
        }

        let speed = metrics.speed;
        let handover = speed * self.params.overlap_window_sec;
        let mut live = self.passes.len();
        let mut spawn = false;
        for pass in self.passes.iter_mut().rev() {
            pass.step(dt, speed, self.params.fade_duration_sec);
            let exit = metrics.exit_position(pass.direction());
            if !spawn && live < MAX_PASSES && pass.position > exit - handover {
                spawn = true;
                live += 1;
            }
            if pass.position > exit {
                live -= 1;
            }
        }

        self.passes.retain(|p| {
            let keep = p.position <= metrics.exit_position(p.direction());
            if !keep {
                log::debug!(
                    "[sweep] retire angle={:.2} hues={:.0}->{:.0}",
                    p.angle,
                    p.hue_from,
                    p.hue_to
                );
            }
            keep
        });

        if spawn {
            let mut pass = SweepPass::random(&mut self.rng, &self.params, 0.0);
            pass.position = metrics.entry_position(pass.direction());
            log::debug!(
                "[sweep] spawn angle={:.2} hues={:.0}->{:.0}",
                pass.angle,
                pass.hue_from,
                pass.hue_to
            );
            self.passes.push(pass);
        }
    }
}
