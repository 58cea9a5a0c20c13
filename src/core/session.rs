use super::params::TrailParams;
use super::pointer::PointerSource;
use super::stroke::{trail_commands, DrawCommand};
use super::trail::TrailChain;
use glam::DVec2;

/// All state of one cursor-trail animation: configuration and chain.
///
/// The pointer cell is passed in per frame because input adapters write it
/// between frames.
#[derive(Clone, Debug)]
pub struct TrailSession {
    pub params: TrailParams,
    chain: TrailChain,
}

impl TrailSession {
    /// Chain of `params.points_number` nodes resting at `origin`.
    pub fn new(params: TrailParams, origin: DVec2) -> Self {
        Self {
            chain: TrailChain::new(params.points_number, origin),
            params,
        }
    }

    #[inline]
    pub fn chain(&self) -> &TrailChain {
        &self.chain
    }

    /// Advance one frame at `t_ms` and return the drawing for a surface of
    /// `viewport` px.
    pub fn step(&mut self, t_ms: f64, viewport: DVec2, pointer: &mut PointerSource) -> Vec<DrawCommand> {
        let target = pointer.current_target(t_ms, viewport, &self.params.idle);
        self.chain.advance(target, &self.params);
        trail_commands(&self.chain, &self.params, viewport)
    }
}
