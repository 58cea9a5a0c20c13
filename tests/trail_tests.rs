// Host-side tests for the trail chain and session.
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
    pub mod stroke {
        include!("../src/core/stroke.rs");
    }
    pub mod trail {
        include!("../src/core/trail.rs");
    }
    pub mod session {
        include!("../src/core/session.rs");
    }
}

use crate::core::params::TrailParams;
use crate::core::pointer::PointerSource;
use crate::core::session::TrailSession;
use crate::core::trail::TrailChain;
use glam::DVec2;
use proptest::prelude::*;

fn scenario_params() -> TrailParams {
    TrailParams {
        points_number: 40,
        width_factor: 10.0,
        spring: 0.25,
        friction: 0.5,
        ..TrailParams::default()
    }
}

#[test]
fn chain_length_matches_points_number_and_never_changes() {
    let params = scenario_params();
    let mut chain = TrailChain::new(params.points_number, DVec2::ZERO);
    assert_eq!(chain.len(), 40);
    for i in 0..200 {
        let target = DVec2::new((i * 13 % 700) as f64, (i * 7 % 300) as f64);
        chain.advance(target, &params);
        assert_eq!(chain.len(), 40);
    }
}

#[test]
fn new_chain_rests_at_origin() {
    let origin = DVec2::new(640.0, 360.0);
    let chain = TrailChain::new(5, origin);
    for node in chain.nodes() {
        assert_eq!(node.pos, origin);
        assert_eq!(node.vel, DVec2::ZERO);
    }
}

#[test]
fn head_spring_is_four_tenths_of_base() {
    for spring in [0.05, 0.25, 0.5, 0.9] {
        let params = TrailParams {
            spring,
            ..TrailParams::default()
        };
        assert_eq!(params.spring_for(0), 0.4 * spring);
        for i in 1..params.points_number {
            assert_eq!(params.spring_for(i), spring);
        }
    }
}

#[test]
fn node_follows_leader_position_from_the_same_tick() {
    let params = scenario_params();
    let mut chain = TrailChain::new(3, DVec2::ZERO);
    chain.advance(DVec2::new(100.0, 0.0), &params);
    let nodes = chain.nodes();
    // head: vel = 100 * 0.1 * 0.5 = 5
    assert!((nodes[0].pos.x - 5.0).abs() < 1e-12);
    // node 1 chases the head's new position (5), not its old one (0)
    assert!((nodes[1].pos.x - 0.625).abs() < 1e-12);
    assert!(nodes[2].pos.x > 0.0);
}

#[test]
fn fifty_ticks_toward_fixed_target_without_overshoot() {
    let params = scenario_params();
    let mut chain = TrailChain::new(params.points_number, DVec2::ZERO);
    let target = DVec2::new(100.0, 100.0);
    for _ in 0..50 {
        chain.advance(target, &params);
        for node in chain.nodes() {
            assert!(node.pos.x <= 100.0 && node.pos.y <= 100.0, "overshoot at {:?}", node.pos);
        }
    }
    let head = chain.nodes()[0].pos;
    assert!((head.x - 100.0).abs() < 1.0 && (head.y - 100.0).abs() < 1.0, "head at {:?}", head);
}

#[test]
fn head_distance_strictly_decreases_with_defaults() {
    let params = TrailParams::default();
    let mut chain = TrailChain::new(params.points_number, DVec2::ZERO);
    let target = DVec2::new(100.0, 100.0);
    let mut prev = chain.nodes()[0].pos.distance(target);
    for _ in 0..100 {
        chain.advance(target, &params);
        let d = chain.nodes()[0].pos.distance(target);
        assert!(d < prev, "distance went from {prev} to {d}");
        prev = d;
    }
}

#[test]
fn session_step_follows_recorded_pointer() {
    let params = scenario_params();
    let viewport = DVec2::new(800.0, 600.0);
    let mut pointer = PointerSource::centered(viewport);
    let mut session = TrailSession::new(params, pointer.position());
    pointer.record_input(100.0, 100.0);
    for t in 0..400 {
        session.step(t as f64 * 16.0, viewport, &mut pointer);
    }
    for node in session.chain().nodes() {
        assert!(node.pos.distance(DVec2::new(100.0, 100.0)) < 1e-3);
    }
}

proptest! {
    #[test]
    fn chain_settles_on_stationary_target(
        spring in 0.1f64..0.9,
        friction in 0.1f64..0.9,
        tx in -500.0f64..500.0,
        ty in -500.0f64..500.0,
    ) {
        let params = TrailParams { points_number: 4, spring, friction, ..TrailParams::default() };
        let mut chain = TrailChain::new(params.points_number, DVec2::ZERO);
        let target = DVec2::new(tx, ty);
        for _ in 0..5000 {
            chain.advance(target, &params);
        }
        for node in chain.nodes() {
            prop_assert!(node.pos.distance(target) < 1e-3, "node at {:?}", node.pos);
            prop_assert!(node.vel.length() < 1e-3);
        }
    }
}
