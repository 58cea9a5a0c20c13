// Host-side tests for the pointer source and idle wander.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod params {
        include!("../src/core/params.rs");
    }
    pub mod pointer {
        include!("../src/core/pointer.rs");
    }
}

use crate::core::params::IdleMotion;
use crate::core::pointer::*;
use glam::DVec2;
use proptest::prelude::*;

const VIEWPORT: DVec2 = DVec2::new(1280.0, 720.0);

#[test]
fn idle_path_starts_at_centre_column() {
    let p = idle_position(&IdleMotion::default(), 0.0, VIEWPORT);
    // sin(0) = 0 puts x at the centre; y = 0.5 + 0.2 + 0.1
    assert_eq!(p.x, 0.5 * VIEWPORT.x);
    assert!((p.y - 0.8 * VIEWPORT.y).abs() < 1e-9);
}

#[test]
fn idle_path_is_used_before_any_input() {
    let idle = IdleMotion::default();
    let mut src = PointerSource::centered(VIEWPORT);
    assert!(!src.has_real_input());
    for t in [0.0, 16.7, 1000.0, 123_456.0] {
        let target = src.current_target(t, VIEWPORT, &idle);
        assert_eq!(target, idle_position(&idle, t, VIEWPORT));
        assert_eq!(src.position(), target);
    }
}

#[test]
fn real_input_latches_for_the_session() {
    let idle = IdleMotion::default();
    let mut src = PointerSource::centered(VIEWPORT);
    src.current_target(500.0, VIEWPORT, &idle);
    src.record_input(42.0, 24.0);
    assert!(src.has_real_input());
    // no further input: the last sample stays put instead of wandering again
    for t in [600.0, 5_000.0, 60_000.0] {
        assert_eq!(src.current_target(t, VIEWPORT, &idle), DVec2::new(42.0, 24.0));
    }
    src.record_input(7.0, 9.0);
    assert_eq!(src.current_target(70_000.0, VIEWPORT, &idle), DVec2::new(7.0, 9.0));
}

#[test]
fn idle_path_scales_with_viewport() {
    let idle = IdleMotion::default();
    let a = idle_position(&idle, 2_345.0, DVec2::new(100.0, 100.0));
    let b = idle_position(&idle, 2_345.0, DVec2::new(300.0, 200.0));
    assert!((b.x - 3.0 * a.x).abs() < 1e-9);
    assert!((b.y - 2.0 * a.y).abs() < 1e-9);
}

proptest! {
    #[test]
    fn idle_path_stays_in_middle_band(t in 0.0f64..1.0e7) {
        let p = idle_position(&IdleMotion::default(), t, VIEWPORT);
        let eps = 1e-9;
        prop_assert!(p.x >= (0.2 - eps) * VIEWPORT.x && p.x <= (0.8 + eps) * VIEWPORT.x);
        prop_assert!(p.y >= (0.2 - eps) * VIEWPORT.y && p.y <= (0.8 + eps) * VIEWPORT.y);
    }
}
