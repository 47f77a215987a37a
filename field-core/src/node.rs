use glam::Vec2;
use rand::Rng;

use crate::{config::FieldConfig, surface::Surface};

/// One moving point of the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub pos: Vec2,
    /// Displacement per frame.
    pub vel: Vec2,
    pub radius: f32,
}

/// The fixed set of nodes a field animates.
///
/// Seeded once when the surface is first sized; its length never changes
/// afterwards.
#[derive(Debug, Default)]
pub struct NodeSet {
    pub nodes: Vec<Node>,
}

impl Node {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Creates a node uniformly at random inside `surface`.
    ///
    /// ### Parameters
    /// - `surface` - Bounds for the initial position.
    /// - `cfg` - Supplies the velocity bound (`max_speed`, per component)
    ///   and the radius range.
    /// - `rng` - Source of randomness.
    pub fn random(surface: Surface, cfg: &FieldConfig, rng: &mut impl Rng) -> Self {
        let extent = surface.extent();
        let pos = Vec2::new(
            rng.random_range(0.0..=extent.x),
            rng.random_range(0.0..=extent.y),
        );
        let vel = Vec2::new(
            rng.random_range(-cfg.max_speed..=cfg.max_speed),
            rng.random_range(-cfg.max_speed..=cfg.max_speed),
        );
        let radius = rng.random_range(cfg.min_radius..=cfg.max_radius);

        Self { pos, vel, radius }
    }

    /// Moves the node by one frame and flips velocity components whose
    /// coordinate left `[0, bound]`.
    ///
    /// The position itself is never corrected, so a node may sit up to
    /// one frame's displacement outside the surface before heading back.
    pub fn advance(&mut self, surface: Surface) {
        self.pos += self.vel;

        let extent = surface.extent();
        if self.pos.x < 0.0 || self.pos.x > extent.x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > extent.y {
            self.vel.y = -self.vel.y;
        }
    }
}

impl NodeSet {
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Seeds `cfg.node_count(surface)` random nodes.
    pub fn seed(surface: Surface, cfg: &FieldConfig, rng: &mut impl Rng) -> Self {
        let count = cfg.node_count(surface);
        let nodes = (0..count).map(|_| Node::random(surface, cfg, rng)).collect();
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
