//! Engine configuration.
//!
//! One `ShimmerParams` value parameterizes a whole engine instance. The
//! defaults reproduce the tuning constants in [`super::constants`].

use super::constants::*;
use rand::Rng;

/// Half-open hue interval in degrees, `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HueRange {
    pub min: f32,
    pub max: f32,
}

impl HueRange {
    pub const WARM: HueRange = HueRange {
        min: WARM_HUE_MIN,
        max: WARM_HUE_MAX,
    };
    pub const COOL: HueRange = HueRange {
        min: COOL_HUE_MIN,
        max: COOL_HUE_MAX,
    };

    #[inline]
    pub fn contains(&self, hue: f32) -> bool {
        hue >= self.min && hue < self.max
    }

    /// Uniform draw inside the range. A degenerate range yields `min`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max > self.min {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }
}

#[derive(Clone, Debug)]
pub struct ShimmerParams {
    /// Each pass endpoint picks one of these ranges with equal probability.
    pub palette: [HueRange; 2],
    pub saturation: f32,
    pub lightness: f32,

    pub speed_diag_factor: f32,
    pub fade_duration_sec: f32,
    pub overlap_window_sec: f32,
    pub margin_cells: f32,
    pub band_cells: f32,
    pub band_diag_factor: f32,

    pub glow_sigma_max: f32,
    pub glow_sigma_cells: f32,

    pub alpha_base: f32,
    pub alpha_sweep_weight: f32,
    pub alpha_glow_weight: f32,
    pub alpha_min: f32,
    pub alpha_max: f32,
    pub tint_alpha_scale: f32,
    pub outline_alpha: f32,

    pub cell_min: f32,
    pub cell_max: f32,
    pub cell_divisor: f32,
    pub coarse_pointer_boost: f32,
}

impl Default for ShimmerParams {
    fn default() -> Self {
        Self {
            palette: [HueRange::WARM, HueRange::COOL],
            saturation: PALETTE_SATURATION,
            lightness: PALETTE_LIGHTNESS,
            speed_diag_factor: SPEED_DIAG_FACTOR,
            fade_duration_sec: FADE_DURATION_SEC,
            overlap_window_sec: OVERLAP_WINDOW_SEC,
            margin_cells: MARGIN_CELLS,
            band_cells: BAND_CELLS,
            band_diag_factor: BAND_DIAG_FACTOR,
            glow_sigma_max: GLOW_SIGMA_MAX,
            glow_sigma_cells: GLOW_SIGMA_CELLS,
            alpha_base: ALPHA_BASE,
            alpha_sweep_weight: ALPHA_SWEEP_WEIGHT,
            alpha_glow_weight: ALPHA_GLOW_WEIGHT,
            alpha_min: ALPHA_MIN,
            alpha_max: ALPHA_MAX,
            tint_alpha_scale: TINT_ALPHA_SCALE,
            outline_alpha: OUTLINE_ALPHA,
            cell_min: CELL_MIN,
            cell_max: CELL_MAX,
            cell_divisor: CELL_DIVISOR,
            coarse_pointer_boost: COARSE_POINTER_BOOST,
        }
    }
}

impl ShimmerParams {
    /// Draw a hue: pick a palette range by coin flip, then sample inside it.
    pub fn random_hue<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        let range = if rng.gen_bool(0.5) {
            &self.palette[0]
        } else {
            &self.palette[1]
        };
        range.sample(rng)
    }

    pub fn in_palette(&self, hue: f32) -> bool {
        self.palette.iter().any(|r| r.contains(hue))
    }
}
