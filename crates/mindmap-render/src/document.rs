//! The product of one "generate" action.

use chrono::{DateTime, Utc};

use mindmap_graph::{Layout, MindMapGraph};
use mindmap_keywords::RankedKeyword;

/// A built mind map ready to display or export.
#[derive(Debug, Clone)]
pub struct GeneratedMap {
    /// Resolved hub label
    pub title: String,
    /// Keywords in rank order, with counts
    pub keywords: Vec<RankedKeyword>,
    pub graph: MindMapGraph,
    pub layout: Layout,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedMap {
    pub fn new(
        keywords: Vec<RankedKeyword>,
        graph: MindMapGraph,
        layout: Layout,
    ) -> Self {
        Self {
            title: graph.hub().to_string(),
            keywords,
            graph,
            layout,
            generated_at: Utc::now(),
        }
    }
}
