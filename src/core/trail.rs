use super::params::TrailParams;
use glam::DVec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrailNode {
    pub pos: DVec2,
    pub vel: DVec2,
}

/// Fixed-length chain of spring-coupled nodes following a target.
///
/// Node 0 follows the target directly; node `i` follows node `i - 1`.
/// The length is set at construction and never changes.
#[derive(Clone, Debug)]
pub struct TrailChain {
    nodes: Vec<TrailNode>,
}

impl TrailChain {
    /// All nodes at `origin`, at rest.
    pub fn new(len: usize, origin: DVec2) -> Self {
        Self {
            nodes: vec![
                TrailNode {
                    pos: origin,
                    vel: DVec2::ZERO,
                };
                len
            ],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn nodes(&self) -> &[TrailNode] {
        &self.nodes
    }

    /// One physics tick toward `target`.
    ///
    /// Nodes are updated in a single pass in ascending index order, and node
    /// `i` reads the position node `i - 1` already reached during this same
    /// pass. Reordering or parallelising the loop changes the motion.
    pub fn advance(&mut self, target: DVec2, params: &TrailParams) {
        let mut leader = target;
        for (i, node) in self.nodes.iter_mut().enumerate() {
            let k = params.spring_for(i);
            node.vel += (leader - node.pos) * k;
            node.vel *= params.friction;
            node.pos += node.vel;
            leader = node.pos;
        }
    }
}
