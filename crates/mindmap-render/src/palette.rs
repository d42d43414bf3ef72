//! Node colors.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mindmap_graph::MindMapGraph;

/// Fill color of the hub node.
pub const HUB_COLOR: &str = "#ff6666";

/// Fill colors leaves are picked from.
pub const LEAF_COLORS: [&str; 5] = ["#66b3ff", "#99ff99", "#ffcc99", "#ffb3e6", "#c2c2f0"];

/// Assign a fill color to every node, in `graph.nodes()` order.
pub fn assign_colors(graph: &MindMapGraph, seed: u64) -> Vec<(String, &'static str)> {
    let mut rng = StdRng::seed_from_u64(seed);
    graph
        .nodes()
        .map(|node| {
            let color = if graph.is_hub(node) {
                HUB_COLOR
            } else {
                LEAF_COLORS[rng.random_range(0..LEAF_COLORS.len())]
            };
            (node.to_string(), color)
        })
        .collect()
}
