// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn spring_and_friction_defaults_allow_convergence() {
    assert!(DEFAULT_SPRING > 0.0 && DEFAULT_SPRING < 1.0);
    assert!(DEFAULT_FRICTION > 0.0 && DEFAULT_FRICTION < 1.0);
    assert!(HEAD_SPRING_SCALE > 0.0 && HEAD_SPRING_SCALE < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn idle_amplitudes_keep_wander_inside_viewport() {
    assert!(IDLE_CENTER - IDLE_X_AMPLITUDE >= 0.0);
    assert!(IDLE_CENTER + IDLE_X_AMPLITUDE <= 1.0);
    assert!(IDLE_CENTER - IDLE_Y_AMPLITUDE_1 - IDLE_Y_AMPLITUDE_2 >= 0.0);
    assert!(IDLE_CENTER + IDLE_Y_AMPLITUDE_1 + IDLE_Y_AMPLITUDE_2 <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn chain_and_timing_are_sane() {
    assert!(DEFAULT_POINTS_NUMBER >= 2);
    assert!(DEFAULT_WIDTH_FACTOR > 0.0);
    assert!(SLIDE_INTERVAL_MS > 0);
    assert!(TRANSLATE_SLIDE_COUNT >= 2);
    assert!(FRAME_GAP_LOG_MS > 1000.0 / 60.0);
}
