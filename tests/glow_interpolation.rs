use mahr_calculator_wasm::domain::animation::{GLOW_LERP_FACTOR, GlowInterpolator};
use quickcheck_macros::quickcheck;

#[test]
fn remaining_distance_shrinks_by_constant_factor() {
    let mut glow = GlowInterpolator::new();
    glow.set_target(1000.0, -400.0);

    let mut previous = glow.distance_to_target();
    for _ in 0..50 {
        glow.tick();
        let remaining = glow.distance_to_target();
        assert!((remaining - previous * (1.0 - GLOW_LERP_FACTOR)).abs() < 1e-9);
        previous = remaining;
    }
}

#[test]
fn converges_monotonically_toward_target() {
    let mut glow = GlowInterpolator::new();
    glow.set_target(640.0, 360.0);

    let mut previous = glow.distance_to_target();
    for _ in 0..200 {
        glow.tick();
        let remaining = glow.distance_to_target();
        assert!(remaining <= previous);
        previous = remaining;
    }
}

#[test]
fn reaches_sub_pixel_distance_in_bounded_ticks() {
    let mut glow = GlowInterpolator::new();
    glow.set_target(10_000.0, 10_000.0);

    // 0.97^n decay: even a five-figure start collapses under half a pixel
    // within a few hundred frames
    for _ in 0..400 {
        glow.tick();
    }
    assert!(glow.distance_to_target() < 0.5);
}

#[test]
fn retargeting_redirects_the_lag() {
    let mut glow = GlowInterpolator::new();
    glow.set_target(100.0, 0.0);
    for _ in 0..10 {
        glow.tick();
    }
    let before = glow.shown();

    glow.set_target(0.0, 0.0);
    glow.tick();
    assert!(glow.shown().x < before.x);
}

#[quickcheck]
fn distance_never_increases(x: f64, y: f64) -> bool {
    if !x.is_finite() || !y.is_finite() || x.abs() > 1e9 || y.abs() > 1e9 {
        return true;
    }
    let mut glow = GlowInterpolator::new();
    glow.set_target(x, y);

    let mut previous = glow.distance_to_target();
    for _ in 0..100 {
        glow.tick();
        let remaining = glow.distance_to_target();
        if remaining > previous + 1e-9 {
            return false;
        }
        previous = remaining;
    }
    true
}
