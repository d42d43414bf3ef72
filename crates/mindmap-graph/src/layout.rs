//! Seeded force-directed layout.
//!
//! Fruchterman-Reingold placement: every pair of nodes repels with force
//! `k² / d`, every edge attracts with force `d² / k`, and node movement per
//! step is capped by a temperature that cools linearly to zero. Initial
//! positions come from an RNG seeded with `LayoutSettings::seed`, so the
//! same graph and settings always give the same coordinates.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use mindmap_types::LayoutSettings;

use crate::graph::MindMapGraph;

/// Minimum pairwise distance used in force computations.
const MIN_DISTANCE: f64 = 0.01;

/// Stop early once the mean displacement per node drops below this.
const CONVERGENCE_THRESHOLD: f64 = 1e-4;

/// A 2-D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Node name -> coordinate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    positions: BTreeMap<String, Point>,
}

impl Layout {
    /// Coordinate of a node.
    pub fn get(&self, name: &str) -> Option<Point> {
        self.positions.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Coordinates in node-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> {
        self.positions.iter().map(|(name, p)| (name.as_str(), *p))
    }

    /// (min, max) corners of the bounding box, `None` when empty.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut points = self.positions.values();
        let first = *points.next()?;
        Some(points.fold((first, first), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }
}

/// Compute a spring layout for a mind-map graph.
///
/// Coordinates are centered on the origin and scaled so the largest
/// absolute coordinate equals `settings.scale`. A lone hub sits at the origin.
#[instrument(skip_all, fields(nodes = graph.node_count()))]
pub fn spring_layout(graph: &MindMapGraph, settings: &LayoutSettings) -> Layout {
    let n = graph.node_count();
    let mut rng = StdRng::seed_from_u64(settings.seed);
    let mut pos: Vec<[f64; 2]> = (0..n)
        .map(|_| [rng.random::<f64>(), rng.random::<f64>()])
        .collect();

    if n == 1 {
        pos[0] = [0.0, 0.0];
    } else {
        let steps = fruchterman_reingold(graph, &mut pos, settings);
        debug!(steps, "Layout converged");
        rescale(&mut pos, settings.scale);
    }

    let positions = graph
        .nodes()
        .zip(pos)
        .map(|(name, [x, y])| (name.to_string(), Point::new(x, y)))
        .collect();
    Layout { positions }
}

/// Run the simulation in place; returns the number of steps taken.
fn fruchterman_reingold(
    graph: &MindMapGraph,
    pos: &mut [[f64; 2]],
    settings: &LayoutSettings,
) -> usize {
    let n = pos.len();
    let k = settings.k;

    let spread = |axis: usize| {
        let (lo, hi) = pos
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p[axis]), hi.max(p[axis]))
            });
        hi - lo
    };
    let mut temperature = spread(0).max(spread(1)) * 0.1;
    let cooling = temperature / (settings.iterations as f64 + 1.0);

    let mut displacement = vec![[0.0f64; 2]; n];
    for step in 0..settings.iterations {
        for (i, disp) in displacement.iter_mut().enumerate() {
            *disp = [0.0, 0.0];
            for j in 0..n {
                if i == j {
                    continue;
                }
                let dx = pos[i][0] - pos[j][0];
                let dy = pos[i][1] - pos[j][1];
                let distance = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                let attraction = if graph.is_adjacent(i, j) {
                    distance / k
                } else {
                    0.0
                };
                let factor = k * k / (distance * distance) - attraction;
                disp[0] += dx * factor;
                disp[1] += dy * factor;
            }
        }

        let mut moved = 0.0;
        for (p, disp) in pos.iter_mut().zip(&displacement) {
            let mut length = (disp[0] * disp[0] + disp[1] * disp[1]).sqrt();
            if length < MIN_DISTANCE {
                length = 0.1;
            }
            let shift = [disp[0] * temperature / length, disp[1] * temperature / length];
            p[0] += shift[0];
            p[1] += shift[1];
            moved += shift[0] * shift[0] + shift[1] * shift[1];
        }

        temperature -= cooling;
        if moved.sqrt() / (n as f64) < CONVERGENCE_THRESHOLD {
            return step + 1;
        }
    }
    settings.iterations
}

/// Center on the origin and scale so max |coordinate| == `scale`.
fn rescale(pos: &mut [[f64; 2]], scale: f64) {
    let n = pos.len() as f64;
    let mean = pos
        .iter()
        .fold([0.0, 0.0], |acc, p| [acc[0] + p[0], acc[1] + p[1]]);
    let mean = [mean[0] / n, mean[1] / n];

    let mut limit: f64 = 0.0;
    for p in pos.iter_mut() {
        p[0] -= mean[0];
        p[1] -= mean[1];
        limit = limit.max(p[0].abs()).max(p[1].abs());
    }

    if limit > 0.0 {
        for p in pos.iter_mut() {
            p[0] *= scale / limit;
            p[1] *= scale / limit;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(leaves: &[&str]) -> MindMapGraph {
        let mut leaves: Vec<String> = leaves.iter().map(|s| s.to_string()).collect();
        leaves.sort();
        MindMapGraph::from_parts("Hub".to_string(), leaves)
    }

    #[test]
    fn test_layout_covers_every_node() {
        let graph = star(&["Alpha", "Beta", "Gamma"]);
        let layout = spring_layout(&graph, &LayoutSettings::default());
        assert_eq!(layout.len(), graph.node_count());
        for node in graph.nodes() {
            assert!(layout.contains(node));
        }
        assert!(!layout.contains("Delta"));
    }

    #[test]
    fn test_layout_is_deterministic() {
        let graph = star(&["Alpha", "Beta", "Gamma", "Delta"]);
        let settings = LayoutSettings::default();
        assert_eq!(spring_layout(&graph, &settings), spring_layout(&graph, &settings));
    }

    #[test]
    fn test_seed_changes_layout() {
        let graph = star(&["Alpha", "Beta", "Gamma"]);
        let a = spring_layout(&graph, &LayoutSettings::default());
        let b = spring_layout(
            &graph,
            &LayoutSettings {
                seed: 7,
                ..LayoutSettings::default()
            },
        );
        assert_ne!(a, b);
    }

    #[test]
    fn test_layout_is_centered_and_scaled() {
        let graph = star(&["Alpha", "Beta", "Gamma", "Delta", "Epsilon"]);
        let layout = spring_layout(&graph, &LayoutSettings::default());

        let (sum_x, sum_y) = layout
            .iter()
            .fold((0.0, 0.0), |(sx, sy), (_, p)| (sx + p.x, sy + p.y));
        assert!(sum_x.abs() < 1e-9);
        assert!(sum_y.abs() < 1e-9);

        let max_abs = layout
            .iter()
            .map(|(_, p)| p.x.abs().max(p.y.abs()))
            .fold(0.0, f64::max);
        assert!((max_abs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_node_at_origin() {
        let graph = star(&[]);
        let layout = spring_layout(&graph, &LayoutSettings::default());
        assert_eq!(layout.get("Hub"), Some(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_leaves_are_spread_out() {
        let graph = star(&["Alpha", "Beta", "Gamma", "Delta"]);
        let layout = spring_layout(&graph, &LayoutSettings::default());
        let points: Vec<Point> = layout.iter().map(|(_, p)| p).collect();
        for (i, a) in points.iter().enumerate() {
            for b in &points[i + 1..] {
                let d = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
                assert!(d > 0.05, "nodes overlap: {a:?} {b:?}");
            }
        }
    }

    #[test]
    fn test_bounds() {
        let graph = star(&["Alpha", "Beta"]);
        let layout = spring_layout(&graph, &LayoutSettings::default());
        let (lo, hi) = layout.bounds().unwrap();
        assert!(lo.x <= hi.x && lo.y <= hi.y);
        assert!(Layout::default().bounds().is_none());
    }
}
