// Host-side tests for the frame driver: visibility, timing and resize.

use grid_shimmer::core::constants::{MIN_FRAME_DT_SEC, NOMINAL_FRAME_DT_SEC};
use grid_shimmer::core::*;

#[derive(Default)]
struct CountingSurface {
    clears: usize,
    fills: usize,
}

impl Surface for CountingSurface {
    fn clear(&mut self, _viewport: Viewport) {
        self.clears += 1;
    }

    fn fill_cell(&mut self, _rect: CellRect, _color: Rgb, _alpha: f32) {
        self.fills += 1;
    }

    fn stroke_cell(&mut self, _rect: CellRect, _alpha: f32) {}
}

fn state(w: f32, h: f32) -> ShimmerState {
    ShimmerState {
        viewport: Viewport::new(w, h),
        ..Default::default()
    }
}

fn rightward(position: f32) -> SweepPass {
    SweepPass {
        angle: 0.0,
        position,
        hue_from: 50.0,
        hue_to: 210.0,
        color_phase: 1.0,
    }
}

fn engine_with(position: f32) -> ShimmerEngine {
    ShimmerEngine::from_passes(PassManager::with_passes(
        ShimmerParams::default(),
        1,
        &[rightward(position)],
    ))
}

#[test]
fn frame_clock_first_frame_is_nominal() {
    let mut clock = FrameClock::new();
    assert_eq!(clock.delta(5_000.0), NOMINAL_FRAME_DT_SEC);
    assert!((clock.delta(5_020.0) - 0.02).abs() < 1e-6);
}

#[test]
fn frame_clock_floors_deltas() {
    let mut clock = FrameClock::new();
    clock.delta(1_000.0);
    // Duplicate timestamp.
    assert_eq!(clock.delta(1_000.0), MIN_FRAME_DT_SEC);
    // A slow visible frame keeps its full length.
    assert!((clock.delta(9_000.0) - 8.0).abs() < 1e-6);
    // Clock going backwards.
    assert_eq!(clock.delta(8_000.0), MIN_FRAME_DT_SEC);
    assert_eq!(clock.delta(f64::NAN), NOMINAL_FRAME_DT_SEC);
}

#[test]
fn frame_clock_suspend_forgets_last_timestamp() {
    let mut clock = FrameClock::new();
    clock.delta(1_000.0);
    clock.suspend();
    assert_eq!(clock.delta(60_000.0), NOMINAL_FRAME_DT_SEC);
}

#[test]
fn hidden_document_suspends_without_drawing() {
    let mut engine = engine_with(0.0);
    let mut surface = CountingSurface::default();
    let mut s = state(1000.0, 600.0);
    s.ambient.visible = false;

    for i in 0..10 {
        assert_eq!(engine.tick(i as f64 * 16.0, &s, &mut surface), Tick::Suspended);
    }
    assert_eq!(surface.clears, 0);
    assert_eq!(engine.passes().passes()[0].position, 0.0);
}

#[test]
fn no_jump_after_returning_visible() {
    let mut engine = engine_with(0.0);
    let mut surface = CountingSurface::default();
    let mut s = state(1000.0, 600.0);

    engine.tick(1_000.0, &s, &mut surface);
    let before = engine.passes().passes()[0].position;

    s.ambient.visible = false;
    engine.tick(1_016.0, &s, &mut surface);
    engine.tick(31_000.0, &s, &mut surface);

    // Thirty seconds hidden count as a single nominal frame.
    s.ambient.visible = true;
    let tick = engine.tick(31_016.0, &s, &mut surface);
    let Tick::Drawn(m) = tick else {
        panic!("expected a drawn frame, got {tick:?}");
    };
    let after = engine.passes().passes()[0].position;
    assert!(((after - before) - m.speed * NOMINAL_FRAME_DT_SEC).abs() < 1e-3);
}

#[test]
fn visible_second_moves_same_distance_at_any_frame_rate() {
    let s = state(1000.0, 600.0);
    let mut surface = CountingSurface::default();

    let mut smooth = engine_with(0.0);
    smooth.tick(0.0, &s, &mut surface);
    for i in 1..=60 {
        smooth.tick(i as f64 * 1000.0 / 60.0, &s, &mut surface);
    }

    let mut choppy = engine_with(0.0);
    choppy.tick(0.0, &s, &mut surface);
    let Tick::Drawn(m) = choppy.tick(1_000.0, &s, &mut surface) else {
        panic!("expected a drawn frame");
    };

    let a = smooth.passes().passes()[0].position;
    let b = choppy.passes().passes()[0].position;
    assert!((a - b).abs() < 1e-2, "{a} vs {b}");
    // One nominal first frame plus one second of travel.
    assert!((b - m.speed * (NOMINAL_FRAME_DT_SEC + 1.0)).abs() < 1e-3);
}

#[test]
fn unmeasured_viewport_is_idle() {
    let mut engine = ShimmerEngine::new(ShimmerParams::default(), 8);
    let mut surface = CountingSurface::default();
    assert_eq!(engine.tick(0.0, &state(0.0, 0.0), &mut surface), Tick::Idle);
    assert_eq!(surface.clears, 0);
    assert!(!engine.passes().is_placed());

    assert!(matches!(
        engine.tick(16.0, &state(640.0, 480.0), &mut surface),
        Tick::Drawn(_)
    ));
    assert!(engine.passes().is_placed());
    assert_eq!(surface.clears, 1);
}

#[test]
fn resize_takes_effect_next_frame() {
    let mut engine = ShimmerEngine::new(ShimmerParams::default(), 3);
    let mut surface = CountingSurface::default();

    let Tick::Drawn(small) = engine.tick(0.0, &state(1000.0, 600.0), &mut surface) else {
        panic!("expected a drawn frame");
    };
    assert_eq!(small.cell, 27.0);
    assert_eq!(surface.fills, (small.cols * small.rows) as usize);

    let Tick::Drawn(large) = engine.tick(16.0, &state(1600.0, 1000.0), &mut surface) else {
        panic!("expected a drawn frame");
    };
    assert_eq!(large.cell, 42.0);
    assert_eq!((large.cols, large.rows), (39, 24));
    assert!(large.speed > small.speed);
}

#[test]
fn coarse_pointer_enlarges_cells() {
    let params = ShimmerParams::default();
    let fine = FrameMetrics::new(Viewport::new(400.0, 300.0), false, &params);
    let coarse = FrameMetrics::new(Viewport::new(400.0, 300.0), true, &params);
    assert_eq!(fine.cell, 20.0);
    assert_eq!(coarse.cell, 30.0);

    let big_fine = FrameMetrics::new(Viewport::new(2560.0, 1440.0), false, &params);
    let big_coarse = FrameMetrics::new(Viewport::new(2560.0, 1440.0), true, &params);
    assert_eq!(big_fine.cell, 42.0);
    assert_eq!(big_coarse.cell, 63.0);
}

#[test]
fn reduced_motion_keeps_sweeps_running() {
    let mut engine = engine_with(0.0);
    let mut surface = CountingSurface::default();
    let mut s = state(1000.0, 600.0);
    s.ambient.reduced_motion = true;
    s.pointer.move_to(500.0, 300.0);

    assert!(matches!(engine.tick(0.0, &s, &mut surface), Tick::Drawn(_)));
    assert!(engine.passes().passes()[0].position > 0.0);
}
