//! JSON export.

use chrono::{DateTime, Utc};
use serde::Serialize;

use mindmap_graph::Edge;
use mindmap_keywords::RankedKeyword;
use mindmap_types::{ExportFormat, MindMapError};

use crate::document::GeneratedMap;
use crate::export::Renderer;
use crate::palette::assign_colors;

#[derive(Debug, Serialize)]
struct JsonDocument<'a> {
    title: &'a str,
    generated_at: DateTime<Utc>,
    keywords: &'a [RankedKeyword],
    nodes: Vec<JsonNode>,
    edges: Vec<Edge>,
}

#[derive(Debug, Serialize)]
struct JsonNode {
    name: String,
    role: &'static str,
    x: f64,
    y: f64,
    color: &'static str,
}

/// Renders graph, layout, colors and keyword counts as pretty JSON.
#[derive(Debug, Clone)]
pub struct JsonRenderer {
    color_seed: u64,
}

impl JsonRenderer {
    pub fn new(color_seed: u64) -> Self {
        Self { color_seed }
    }
}

impl Renderer for JsonRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn render(&self, map: &GeneratedMap) -> Result<String, MindMapError> {
        let mut nodes = Vec::with_capacity(map.graph.node_count());
        for (name, color) in assign_colors(&map.graph, self.color_seed) {
            let point = map.layout.get(&name).ok_or_else(|| {
                MindMapError::Render(format!("node {name:?} has no layout position"))
            })?;
            let role = if map.graph.is_hub(&name) { "hub" } else { "leaf" };
            nodes.push(JsonNode {
                name,
                role,
                x: point.x,
                y: point.y,
                color,
            });
        }

        let document = JsonDocument {
            title: &map.title,
            generated_at: map.generated_at,
            keywords: &map.keywords,
            nodes,
            edges: map.graph.edges().collect(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}
