//! # mindmap-graph
//!
//! Star-shaped mind-map graphs and their force-directed layout.
//!
//! A mind map is one hub node (the title) joined to one leaf node per
//! distinct keyword. Leaves are sorted before insertion so the same keyword
//! set always produces the same graph, and the layout is seeded so the same
//! graph always gets the same coordinates.
//!
//! ## Usage
//!
//! ```rust
//! use mindmap_graph::MindMapBuilder;
//!
//! let builder = MindMapBuilder::default();
//! let (graph, layout) = builder.build("AI", &["Data", "Learning"]).unwrap();
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(layout.len(), 3);
//! ```

pub mod builder;
pub mod graph;
pub mod layout;

pub use builder::MindMapBuilder;
pub use graph::{Edge, MindMapGraph};
pub use layout::{spring_layout, Layout, Point};
