//! Per-frame pipeline of the particle field.
//!
//! One frame runs, in order:
//! 1. `Canvas::clear` over the whole surface.
//! 2. [`link_phase`] — links every pair closer than `link_distance`,
//!    fading alpha with distance.
//! 3. [`advance_phase`] — moves every node and reflects it off the
//!    surface bounds.
//! 4. [`node_phase`] — draws every node as a filled circle.
//!
//! [`draw_frame`] runs the whole sequence.

use crate::{
    config::FieldConfig,
    node::NodeSet,
    surface::{Canvas, Surface},
};

/// What a single frame put on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub links: usize,
    pub nodes: usize,
}

/// Alpha of the link between two nodes `dist` apart.
///
/// `max_link_alpha * (1 - dist / link_distance)` for
/// `dist < link_distance`, `None` otherwise (no link is drawn).
pub fn link_alpha(dist: f32, cfg: &FieldConfig) -> Option<f32> {
    if dist < cfg.link_distance {
        Some(cfg.max_link_alpha * (1.0 - dist / cfg.link_distance))
    } else {
        None
    }
}

/// Draws links between every unordered pair of close nodes.
///
/// This is an all-pairs scan: `n * (n - 1) / 2` distance checks. With
/// the default cap of 80 nodes that is at most 3160 checks per frame.
///
/// ### Parameters
/// - `set` - Nodes to link; positions are read only.
/// - `canvas` - Target canvas.
/// - `cfg` - Link distance, maximum alpha, stroke width and colour.
///
/// ### Returns
/// Number of links drawn.
pub fn link_phase(set: &NodeSet, canvas: &mut dyn Canvas, cfg: &FieldConfig) -> usize {
    let mut drawn = 0;
    for (i, a) in set.nodes.iter().enumerate() {
        for b in &set.nodes[i + 1..] {
            let dist = a.pos.distance(b.pos);
            if let Some(alpha) = link_alpha(dist, cfg) {
                let color = cfg.color.with_alpha(alpha).to_rgba();
                canvas.stroke_line(a.pos, b.pos, cfg.link_width, color);
                drawn += 1;
            }
        }
    }
    drawn
}

/// Advances every node by one frame against the current surface bounds.
pub fn advance_phase(set: &mut NodeSet, surface: Surface) {
    for node in &mut set.nodes {
        node.advance(surface);
    }
}

/// Draws every node at its current position with its own radius.
pub fn node_phase(set: &NodeSet, canvas: &mut dyn Canvas, cfg: &FieldConfig) -> usize {
    let color = cfg.color.to_rgba();
    for node in &set.nodes {
        canvas.fill_circle(node.pos, node.radius, color);
    }
    set.nodes.len()
}

/// Runs one complete frame: clear, links, advance, nodes.
pub fn draw_frame(
    set: &mut NodeSet,
    surface: Surface,
    canvas: &mut dyn Canvas,
    cfg: &FieldConfig,
) -> FrameStats {
    canvas.clear(surface);
    let links = link_phase(set, canvas, cfg);
    advance_phase(set, surface);
    let nodes = node_phase(set, canvas, cfg);
    FrameStats { links, nodes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        node::{Node, NodeSet},
        testing::{Draw, RecordingCanvas},
    };
    use glam::Vec2;
    use rand::{SeedableRng, rngs::StdRng};

    fn still(x: f32, y: f32) -> Node {
        Node::new(Vec2::new(x, y), Vec2::ZERO, 2.0)
    }

    #[test]
    fn link_alpha_fades_to_zero_at_threshold() {
        let cfg = FieldConfig::default();

        assert_eq!(link_alpha(0.0, &cfg), Some(0.15));
        let half = link_alpha(60.0, &cfg).unwrap();
        assert!((half - 0.075).abs() < 1e-6);
        assert_eq!(link_alpha(120.0, &cfg), None);
        assert_eq!(link_alpha(500.0, &cfg), None);

        // Monotonically decreasing below the threshold.
        let mut prev = f32::INFINITY;
        for d in 0..120 {
            let a = link_alpha(d as f32, &cfg).unwrap();
            assert!(a > 0.0 && a <= 0.15 && a < prev);
            prev = a;
        }
    }

    #[test]
    fn link_phase_only_links_close_pairs() {
        let cfg = FieldConfig::default();
        // a-b: 100 apart (linked), b-c: 120 apart (not linked), a-c: 220 apart.
        let set = NodeSet::from_nodes(vec![still(0.0, 0.0), still(100.0, 0.0), still(220.0, 0.0)]);
        let mut canvas = RecordingCanvas::default();

        let drawn = link_phase(&set, &mut canvas, &cfg);

        assert_eq!(drawn, 1);
        let lines = canvas.lines();
        assert_eq!(lines.len(), 1);
        let (a, b, width, color) = lines[0];
        assert_eq!((a, b), (Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)));
        assert_eq!(width, 0.5);
        let expected = cfg.color.with_alpha(0.15 * (1.0 - 100.0 / 120.0)).to_rgba();
        assert_eq!(color, expected);
    }

    #[test]
    fn coincident_nodes_get_max_alpha() {
        let cfg = FieldConfig::default();
        let set = NodeSet::from_nodes(vec![still(5.0, 5.0), still(5.0, 5.0)]);
        let mut canvas = RecordingCanvas::default();

        link_phase(&set, &mut canvas, &cfg);

        let (_, _, _, color) = canvas.lines()[0];
        assert_eq!(color, cfg.color.with_alpha(0.15).to_rgba());
    }

    #[test]
    fn link_phase_visits_each_pair_once() {
        let cfg = FieldConfig::default();
        let set = NodeSet::from_nodes((0..5).map(|i| still(i as f32, 0.0)).collect());
        let mut canvas = RecordingCanvas::default();

        assert_eq!(link_phase(&set, &mut canvas, &cfg), 10);
    }

    #[test]
    fn draw_frame_orders_clear_links_nodes() {
        let cfg = FieldConfig::default();
        let surface = Surface::new(200, 200);
        let mut set = NodeSet::from_nodes(vec![
            Node::new(Vec2::new(10.0, 10.0), Vec2::new(1.0, 0.0), 1.5),
            Node::new(Vec2::new(20.0, 10.0), Vec2::new(0.0, 1.0), 2.5),
        ]);
        let mut canvas = RecordingCanvas::default();

        let stats = draw_frame(&mut set, surface, &mut canvas, &cfg);

        assert_eq!(stats, FrameStats { links: 1, nodes: 2 });
        assert_eq!(canvas.draws[0], Draw::Clear(surface));
        assert!(matches!(canvas.draws[1], Draw::Line { .. }));

        // Links use pre-advance positions, circles use post-advance ones.
        assert_eq!(
            canvas.draws[1],
            Draw::Line {
                a: Vec2::new(10.0, 10.0),
                b: Vec2::new(20.0, 10.0),
                width: 0.5,
                color: cfg.color.with_alpha(0.15 * (1.0 - 10.0 / 120.0)).to_rgba(),
            }
        );
        assert_eq!(
            canvas.draws[2],
            Draw::Circle {
                center: Vec2::new(11.0, 10.0),
                radius: 1.5,
                color: cfg.color.to_rgba(),
            }
        );
        assert_eq!(
            canvas.draws[3],
            Draw::Circle {
                center: Vec2::new(20.0, 11.0),
                radius: 2.5,
                color: cfg.color.to_rgba(),
            }
        );
        assert_eq!(canvas.draws.len(), 4);
    }

    #[test]
    fn nodes_never_escape_over_many_frames() {
        let cfg = FieldConfig::default();
        let surface = Surface::new(300, 200);
        let mut rng = StdRng::seed_from_u64(42);
        let mut set = NodeSet::seed(surface, &cfg, &mut rng);
        assert!(!set.is_empty());

        // One frame's displacement plus float slack.
        let tolerance = cfg.max_speed + 1e-2;
        for _ in 0..20_000 {
            advance_phase(&mut set, surface);
            for n in &set.nodes {
                assert!(n.pos.x >= -tolerance && n.pos.x <= surface.width as f32 + tolerance);
                assert!(n.pos.y >= -tolerance && n.pos.y <= surface.height as f32 + tolerance);
            }
        }
    }
}
