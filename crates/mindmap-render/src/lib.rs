//! # mindmap-render
//!
//! Drawing and exporting generated mind maps.
//!
//! Styling lives here and only here: node colors, sizes and fonts never feed
//! back into the graph. Leaf colors are drawn from a fixed palette with an
//! explicitly seeded RNG, so an export is reproducible.
//!
//! ## Formats
//! - SVG: the drawn mind map
//! - JSON: graph, layout, colors and keyword counts
//!
//! Files are named `mind_map_<YYYYMMDD_HHMMSS>.<ext>`.

pub mod document;
pub mod export;
pub mod json;
pub mod palette;
pub mod svg;

pub use document::GeneratedMap;
pub use export::{export_file_name, Exporter, Renderer};
pub use json::JsonRenderer;
pub use palette::{assign_colors, HUB_COLOR, LEAF_COLORS};
pub use svg::SvgRenderer;
