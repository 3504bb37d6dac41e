//! Frame driver: one `tick` per display refresh.
//!
//! The platform layer owns a [`ShimmerState`] that its event listeners write
//! and the tick reads. The engine owns the passes and the frame clock.

use super::compositor::{Compositor, PointerState};
use super::constants::{MIN_FRAME_DT_SEC, NOMINAL_FRAME_DT_SEC};
use super::geometry::{FrameMetrics, Viewport};
use super::params::ShimmerParams;
use super::pass::PassManager;
use super::surface::Surface;
use rand::rngs::StdRng;

/// Ambient platform preferences, each written by its own listener.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ambient {
    pub reduced_motion: bool,
    pub coarse_pointer: bool,
    pub visible: bool,
}

impl Default for Ambient {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            coarse_pointer: false,
            visible: true,
        }
    }
}

/// Input-side state shared between listeners and the frame tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShimmerState {
    pub pointer: PointerState,
    pub ambient: Ambient,
    /// Last measured surface size in CSS pixels.
    pub viewport: Viewport,
}

/// Converts frame timestamps (ms) into deltas (s). Visible frames advance by
/// the full elapsed time; only hidden time is discarded.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous running frame. Without a previous frame
    /// (first frame, or first after a suspension) one nominal frame is used.
    pub fn delta(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => NOMINAL_FRAME_DT_SEC,
        };
        self.last_ms = Some(now_ms);
        if dt.is_finite() {
            dt.max(MIN_FRAME_DT_SEC)
        } else {
            NOMINAL_FRAME_DT_SEC
        }
    }

    /// Forget the last timestamp so hidden time is never replayed.
    pub fn suspend(&mut self) {
        self.last_ms = None;
    }
}

/// What a tick did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tick {
    /// Document hidden; no animation work ran.
    Suspended,
    /// Viewport not measured yet.
    Idle,
    /// Full frame composited. `metrics.cell` is the published layout unit.
    Drawn(FrameMetrics),
}

pub struct ShimmerEngine {
    passes: PassManager,
    clock: FrameClock,
}

impl ShimmerEngine {
    pub fn new(params: ShimmerParams, seed: u64) -> Self {
        Self::from_passes(PassManager::new(params, seed))
    }

    pub fn with_rng(params: ShimmerParams, rng: StdRng) -> Self {
        Self::from_passes(PassManager::with_rng(params, rng))
    }

    pub fn from_passes(passes: PassManager) -> Self {
        Self {
            passes,
            clock: FrameClock::new(),
        }
    }

    pub fn passes(&self) -> &PassManager {
        &self.passes
    }

    pub fn params(&self) -> &ShimmerParams {
        self.passes.params()
    }

    /// Advance, spawn/retire, then composite the whole grid.
    pub fn tick<S: Surface + ?Sized>(
        &mut self,
        now_ms: f64,
        state: &ShimmerState,
        surface: &mut S,
    ) -> Tick {
        if !state.ambient.visible {
            self.clock.suspend();
            return Tick::Suspended;
        }
        let dt = self.clock.delta(now_ms);
        let metrics = FrameMetrics::new(state.viewport, state.ambient.coarse_pointer, self.params());
        if state.viewport.is_empty() {
            return Tick::Idle;
        }

        self.passes.advance(dt, &metrics);

        let compositor = Compositor::new(
            self.passes.params(),
            metrics,
            self.passes.passes(),
            &state.pointer,
            !state.ambient.reduced_motion,
            now_ms,
        );
        compositor.paint(surface);
        Tick::Drawn(metrics)
    }
}
