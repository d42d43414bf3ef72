//! SVG drawing of a mind map.
//!
//! Layout coordinates are mapped onto the canvas with a uniform scale and
//! the y axis flipped, so the picture matches the layout's orientation.

use std::fmt::Write as _;

use mindmap_graph::{Layout, Point};
use mindmap_types::{ExportFormat, MindMapError, RenderSettings};

use crate::document::GeneratedMap;
use crate::export::Renderer;
use crate::palette::assign_colors;

const MARGIN: f64 = 120.0;
const TITLE_BAND: f64 = 50.0;
const HUB_RADIUS: f64 = 35.0;
const LEAF_RADIUS: f64 = 25.0;
const EDGE_COLOR: &str = "#808080";
const EDGE_WIDTH: f64 = 2.0;
const NODE_STROKE_WIDTH: f64 = 1.5;
const TITLE_FONT_SIZE: u32 = 18;
const LONG_LABEL_CHARS: usize = 15;

/// Renders a mind map as a standalone SVG document.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    settings: RenderSettings,
}

impl SvgRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }
}

/// Maps layout space onto the canvas.
struct Projection {
    center: Point,
    scale: f64,
    origin_x: f64,
    origin_y: f64,
}

impl Projection {
    fn fit(layout: &Layout, width: f64, height: f64) -> Self {
        let (lo, hi) = layout
            .bounds()
            .unwrap_or((Point::new(0.0, 0.0), Point::new(0.0, 0.0)));
        let span_x = hi.x - lo.x;
        let span_y = hi.y - lo.y;
        let avail_x = (width - 2.0 * MARGIN).max(1.0);
        let avail_y = (height - 2.0 * MARGIN - TITLE_BAND).max(1.0);

        let scale = match (span_x > f64::EPSILON, span_y > f64::EPSILON) {
            (true, true) => (avail_x / span_x).min(avail_y / span_y),
            (true, false) => avail_x / span_x,
            (false, true) => avail_y / span_y,
            (false, false) => 1.0,
        };

        Self {
            center: Point::new((lo.x + hi.x) / 2.0, (lo.y + hi.y) / 2.0),
            scale,
            origin_x: width / 2.0,
            origin_y: TITLE_BAND + (height - TITLE_BAND) / 2.0,
        }
    }

    fn project(&self, p: Point) -> (f64, f64) {
        (
            self.origin_x + (p.x - self.center.x) * self.scale,
            self.origin_y - (p.y - self.center.y) * self.scale,
        )
    }
}

fn label_font_size(label: &str) -> u32 {
    if label.chars().count() >= LONG_LABEL_CHARS {
        8
    } else {
        10
    }
}

/// Escape text for use in element content and attribute values.
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn position(layout: &Layout, name: &str) -> Result<Point, MindMapError> {
    layout
        .get(name)
        .ok_or_else(|| MindMapError::Render(format!("node {name:?} has no layout position")))
}

impl Renderer for SvgRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Svg
    }

    fn render(&self, map: &GeneratedMap) -> Result<String, MindMapError> {
        let width = f64::from(self.settings.width);
        let height = f64::from(self.settings.height);
        let projection = Projection::fit(&map.layout, width, height);
        let fmt_err = |e: std::fmt::Error| MindMapError::Render(e.to_string());

        let mut svg = String::new();
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.settings.width,
            h = self.settings.height,
        )
        .map_err(fmt_err)?;
        writeln!(svg, r#"  <rect width="100%" height="100%" fill="white"/>"#).map_err(fmt_err)?;
        writeln!(
            svg,
            r#"  <text x="{x:.1}" y="{y:.1}" text-anchor="middle" font-family="Arial" font-size="{TITLE_FONT_SIZE}" font-weight="bold">{title}</text>"#,
            x = width / 2.0,
            y = TITLE_BAND,
            title = escape_xml(&format!("Mind Map: {}", map.title)),
        )
        .map_err(fmt_err)?;

        // Edges first so nodes paint over them.
        writeln!(svg, r#"  <g stroke="{EDGE_COLOR}" stroke-width="{EDGE_WIDTH}">"#)
            .map_err(fmt_err)?;
        for edge in map.graph.edges() {
            let (x1, y1) = projection.project(position(&map.layout, &edge.source)?);
            let (x2, y2) = projection.project(position(&map.layout, &edge.target)?);
            writeln!(
                svg,
                r#"    <line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}"/>"#
            )
            .map_err(fmt_err)?;
        }
        writeln!(svg, "  </g>").map_err(fmt_err)?;

        let colors = assign_colors(&map.graph, self.settings.color_seed);
        for (name, color) in &colors {
            let (cx, cy) = projection.project(position(&map.layout, name)?);
            let radius = if map.graph.is_hub(name) {
                HUB_RADIUS
            } else {
                LEAF_RADIUS
            };
            writeln!(
                svg,
                r#"  <circle cx="{cx:.1}" cy="{cy:.1}" r="{radius}" fill="{color}" stroke="black" stroke-width="{NODE_STROKE_WIDTH}"/>"#
            )
            .map_err(fmt_err)?;
        }

        for (name, _) in &colors {
            let (cx, cy) = projection.project(position(&map.layout, name)?);
            let size = label_font_size(name);
            // Rough box around the label; Arial bold averages ~0.6em per glyph.
            let box_w = name.chars().count() as f64 * f64::from(size) * 0.6 + 8.0;
            let box_h = f64::from(size) + 6.0;
            writeln!(
                svg,
                r#"  <rect x="{x:.1}" y="{y:.1}" width="{box_w:.1}" height="{box_h:.1}" rx="4" ry="4" fill="white" fill-opacity="0.85"/>"#,
                x = cx - box_w / 2.0,
                y = cy - box_h / 2.0,
            )
            .map_err(fmt_err)?;
            writeln!(
                svg,
                r#"  <text x="{cx:.1}" y="{cy:.1}" text-anchor="middle" dominant-baseline="central" font-family="Arial" font-size="{size}" font-weight="bold">{label}</text>"#,
                label = escape_xml(name),
            )
            .map_err(fmt_err)?;
        }

        writeln!(svg, "</svg>").map_err(fmt_err)?;
        Ok(svg)
    }
}
