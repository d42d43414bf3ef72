//! Mind-map construction from a title and keywords.

use std::collections::BTreeSet;

use tracing::{debug, info, instrument};

use mindmap_types::{LayoutSettings, MindMapError, DEFAULT_TITLE};

use crate::graph::MindMapGraph;
use crate::layout::{spring_layout, Layout};

/// Builds a star graph and its layout.
#[derive(Debug, Clone)]
pub struct MindMapBuilder {
    layout: LayoutSettings,
    default_title: String,
}

impl MindMapBuilder {
    /// Create a builder with explicit layout settings and blank-title placeholder.
    pub fn new(layout: LayoutSettings, default_title: impl Into<String>) -> Self {
        Self {
            layout,
            default_title: default_title.into(),
        }
    }

    pub fn layout_settings(&self) -> &LayoutSettings {
        &self.layout
    }

    /// Trimmed title, or the placeholder when blank.
    pub fn resolve_title(&self, title: &str) -> String {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            self.default_title.clone()
        } else {
            trimmed.to_string()
        }
    }

    /// Build only the graph.
    ///
    /// Keywords are deduplicated and sorted, so upstream order never affects
    /// the structure. A keyword identical to the title is dropped, since it
    /// would be an edge from the hub to itself.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `keywords` is empty.
    pub fn build_graph<S: AsRef<str>>(
        &self,
        title: &str,
        keywords: &[S],
    ) -> Result<MindMapGraph, MindMapError> {
        if keywords.is_empty() {
            return Err(MindMapError::InvalidInput(
                "Cannot build a mind map without keywords".to_string(),
            ));
        }

        let hub = self.resolve_title(title);
        let unique: BTreeSet<&str> = keywords.iter().map(AsRef::as_ref).collect();
        let mut leaves = Vec::with_capacity(unique.len());
        for keyword in unique {
            if keyword == hub {
                debug!(keyword, "Skipping keyword equal to the title");
                continue;
            }
            leaves.push(keyword.to_string());
        }

        Ok(MindMapGraph::from_parts(hub, leaves))
    }

    /// Build the graph and compute its layout.
    #[instrument(skip(self, keywords), fields(keywords = keywords.len()))]
    pub fn build<S: AsRef<str>>(
        &self,
        title: &str,
        keywords: &[S],
    ) -> Result<(MindMapGraph, Layout), MindMapError> {
        let graph = self.build_graph(title, keywords)?;
        let layout = spring_layout(&graph, &self.layout);
        info!(
            hub = graph.hub(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Built mind map"
        );
        Ok((graph, layout))
    }
}

impl Default for MindMapBuilder {
    fn default() -> Self {
        Self::new(LayoutSettings::default(), DEFAULT_TITLE)
    }
}
