//! Easing Tests
//!
//! Tests for:
//! - Linear easing exactness, including extrapolation outside [0, 1]
//! - Componentwise vector easing
//! - Named curve end points and shapes
//! - Custom easing strategies

use glam::Vec3;

use tweenloop::animation::easing::{self, Ease, Easing, EasingFunction};
use tweenloop::animation::Seconds;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// Linear
// ============================================================================

#[test]
fn linear_matches_formula_exactly() {
    let cases = [
        (0.0_f32, 10.0_f32, 0.5_f32),
        (-3.0, 7.5, 0.3),
        (2.0, -2.0, 0.75),
        (1.0, 5.0, -0.5),
        (1.0, 5.0, 2.25),
        (100.0, 100.0, 0.9),
    ];

    for (start, end, alpha) in cases {
        let eased: f32 = easing::apply(&Easing::Linear, start, end, Seconds::new(alpha));
        assert_eq!(eased, start + (end - start) * alpha, "({start}, {end}, {alpha})");
    }
}

#[test]
fn linear_extrapolates() {
    let before: f32 = easing::apply(&Easing::linear(), 0.0, 10.0, Seconds::new(-1.0));
    let after: f32 = easing::apply(&Easing::linear(), 0.0, 10.0, Seconds::new(1.5));
    assert_eq!(before, -10.0);
    assert_eq!(after, 15.0);
}

#[test]
fn default_easing_is_linear() {
    assert!(matches!(Easing::default(), Easing::Linear));
}

// ============================================================================
// Vector easing
// ============================================================================

#[test]
fn vector_easing_is_componentwise() {
    let start = Vec3::new(0.0, -4.0, 2.0);
    let end = Vec3::new(10.0, 4.0, -6.0);

    for kind in [Easing::Linear, Easing::QuadOut, Easing::CubicInOut, Easing::Step] {
        for alpha in [0.0_f32, 0.2, 0.5, 0.8, 1.0, 1.3] {
            let alpha = Seconds::new(alpha);
            let v = easing::apply(&kind, start, end, alpha);

            assert_eq!(v.x, f32::ease(&kind, start.x, end.x, alpha), "{kind:?}");
            assert_eq!(v.y, f32::ease(&kind, start.y, end.y, alpha), "{kind:?}");
            assert_eq!(v.z, f32::ease(&kind, start.z, end.z, alpha), "{kind:?}");
        }
    }
}

// ============================================================================
// Named curves
// ============================================================================

#[test]
fn named_curves_hit_end_points() {
    let kinds = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::SmoothStep,
        Easing::Step,
    ];

    for kind in kinds {
        assert!(approx(kind.evaluate(2.0, 6.0, Seconds::new(0.0)), 2.0), "{kind:?} at 0");
        assert!(approx(kind.evaluate(2.0, 6.0, Seconds::new(1.0)), 6.0), "{kind:?} at 1");
    }
}

#[test]
fn named_curve_shapes() {
    assert_eq!(Easing::QuadIn.curve(0.5), Some(0.25));
    assert_eq!(Easing::QuadOut.curve(0.5), Some(0.75));
    assert_eq!(Easing::QuadInOut.curve(0.5), Some(0.5));
    assert_eq!(Easing::CubicIn.curve(0.5), Some(0.125));
    assert_eq!(Easing::CubicOut.curve(0.5), Some(0.875));
    assert_eq!(Easing::CubicInOut.curve(0.25), Some(0.0625));
    assert_eq!(Easing::SmoothStep.curve(0.5), Some(0.5));
    assert_eq!(Easing::Step.curve(0.99), Some(0.0));
    assert_eq!(Easing::Step.curve(1.0), Some(1.0));
}

#[test]
fn ease_in_lags_and_ease_out_leads_linear() {
    let alpha = Seconds::new(0.3);
    let linear = Easing::Linear.evaluate(0.0, 1.0, alpha);

    assert!(Easing::QuadIn.evaluate(0.0, 1.0, alpha) < linear);
    assert!(Easing::CubicIn.evaluate(0.0, 1.0, alpha) < linear);
    assert!(Easing::QuadOut.evaluate(0.0, 1.0, alpha) > linear);
    assert!(Easing::CubicOut.evaluate(0.0, 1.0, alpha) > linear);
}

// ============================================================================
// Custom strategies
// ============================================================================

/// Always lands half-way, whatever the alpha.
#[derive(Debug)]
struct Midpoint;

impl EasingFunction for Midpoint {
    fn evaluate(&self, start: f32, end: f32, _alpha: Seconds) -> f32 {
        (start + end) * 0.5
    }
}

#[test]
fn custom_easing_is_dispatched() {
    let kind = Easing::custom(Midpoint);

    assert_eq!(kind.curve(0.3), None);
    assert_eq!(kind.evaluate(2.0, 4.0, Seconds::new(0.9)), 3.0);

    let v = easing::apply(&kind, Vec3::ZERO, Vec3::new(2.0, 4.0, 6.0), Seconds::new(0.1));
    assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn custom_easing_survives_clone() {
    let kind = Easing::custom(Midpoint);
    let copy = kind.clone();
    assert_eq!(copy.evaluate(0.0, 10.0, Seconds::ZERO), 5.0);
    assert!(format!("{copy:?}").starts_with("Custom"));
}
