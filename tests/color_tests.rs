// Host-side tests for colour helpers and hue sampling.

use grid_shimmer::core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn hsl_primaries_and_white() {
    assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Rgb::new(255, 0, 0));
    assert_eq!(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), Rgb::new(0, 255, 0));
    assert_eq!(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), Rgb::new(0, 0, 255));
    assert_eq!(hsl_to_rgb(0.3, 0.0, 1.0), Rgb::WHITE);
}

#[test]
fn palette_hues_map_to_warm_and_cool_colours() {
    let warm = hue_to_rgb(54.0, 0.75, 0.65);
    let cool = hue_to_rgb(220.0, 0.75, 0.65);
    // Yellowish: red and green dominate blue.
    assert!(warm.r > warm.b && warm.g > warm.b);
    // Bluish: blue dominates red.
    assert!(cool.b > cool.r);
    // Hue wraps around the circle.
    assert_eq!(hue_to_rgb(54.0 + 360.0, 0.75, 0.65), warm);
}

#[test]
fn mix_hits_endpoints_and_rounds() {
    let a = Rgb::new(0, 100, 200);
    let b = Rgb::new(255, 0, 100);
    assert_eq!(mix(a, b, 0.0), a);
    assert_eq!(mix(a, b, 1.0), b);
    assert_eq!(mix(a, b, 0.5), Rgb::new(128, 50, 150));
}

#[test]
fn ease_in_out_cubic_shape() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    assert!((ease_in_out_cubic(1.0) - 1.0).abs() < 1e-6);
    // Slow start, slow finish.
    assert!(ease_in_out_cubic(0.1) < 0.1);
    assert!(ease_in_out_cubic(0.9) > 0.9);
    // Symmetric about the midpoint.
    for i in 0..=20 {
        let t = i as f32 / 20.0;
        let s = ease_in_out_cubic(t) + ease_in_out_cubic(1.0 - t);
        assert!((s - 1.0).abs() < 1e-5, "asymmetric at t={t}");
    }
}

#[test]
fn css_rgba_format() {
    assert_eq!(Rgb::new(1, 2, 3).css_rgba(0.5), "rgba(1,2,3,0.5)");
}

#[test]
fn random_hues_stay_in_palette() {
    let params = ShimmerParams::default();
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let (mut warm, mut cool) = (0, 0);
    for _ in 0..10_000 {
        let h = params.random_hue(&mut rng);
        assert!(params.in_palette(h), "hue {h} outside palette");
        if HueRange::WARM.contains(h) {
            warm += 1;
        } else {
            cool += 1;
        }
    }
    // Both ranges get drawn, roughly evenly.
    assert!(warm > 4_000 && cool > 4_000, "warm={warm} cool={cool}");
}
