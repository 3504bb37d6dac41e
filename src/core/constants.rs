// Shared tuning constants for the grid shimmer.
//
// These are aesthetic values; `ShimmerParams::default()` is built from them.

// Sweep motion
pub const SPEED_DIAG_FACTOR: f32 = 0.09; // pass speed as a fraction of the viewport diagonal per second
pub const FADE_DURATION_SEC: f32 = 0.6; // colour phase 0 -> 1
pub const OVERLAP_WINDOW_SEC: f32 = 1.5; // how early the next pass enters before the current one exits
pub const MARGIN_CELLS: f32 = 4.0; // off-screen margin, in cells
pub const MAX_PASSES: usize = 2;

// Crest falloff
pub const BAND_CELLS: f32 = 6.0;
pub const BAND_DIAG_FACTOR: f32 = 0.3;
pub const MIN_PASS_STRENGTH: f32 = 0.0001;

// Palette (degrees on the hue circle)
pub const WARM_HUE_MIN: f32 = 48.0;
pub const WARM_HUE_MAX: f32 = 60.0;
pub const COOL_HUE_MIN: f32 = 200.0;
pub const COOL_HUE_MAX: f32 = 235.0;
pub const PALETTE_SATURATION: f32 = 0.75;
pub const PALETTE_LIGHTNESS: f32 = 0.65;

// Pointer glow
pub const GLOW_SIGMA_MAX: f32 = 35.0;
pub const GLOW_SIGMA_CELLS: f32 = 0.8;

// Alpha composition
pub const ALPHA_BASE: f32 = 0.035;
pub const ALPHA_SWEEP_WEIGHT: f32 = 0.36;
pub const ALPHA_GLOW_WEIGHT: f32 = 0.48;
pub const ALPHA_MIN: f32 = 0.03;
pub const ALPHA_MAX: f32 = 0.7;
pub const TINT_ALPHA_SCALE: f32 = 0.55; // global transparency multiplier
pub const OUTLINE_ALPHA: f32 = 0.06;

// Spatiotemporal shimmer: (sin((x + y) * SPATIAL + t_ms * TEMPORAL) + 1) * AMPLITUDE
pub const NOISE_SPATIAL_FREQ: f64 = 0.05;
pub const NOISE_TEMPORAL_FREQ: f64 = 0.0018;
pub const NOISE_AMPLITUDE: f64 = 0.02;

// Grid sizing
pub const CELL_MIN: f32 = 20.0;
pub const CELL_MAX: f32 = 42.0;
pub const CELL_DIVISOR: f32 = 22.0; // cells along the shorter viewport side
pub const COARSE_POINTER_BOOST: f32 = 1.5;

// Frame timing (seconds)
pub const MIN_FRAME_DT_SEC: f32 = 0.001;
pub const NOMINAL_FRAME_DT_SEC: f32 = 1.0 / 60.0;
