//! Writing a generated map to disk.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::info;

use mindmap_types::{ExportFormat, MindMapError, RenderSettings};

use crate::document::GeneratedMap;
use crate::json::JsonRenderer;
use crate::svg::SvgRenderer;

/// Turns a generated map into file contents.
pub trait Renderer {
    /// Format this renderer produces.
    fn format(&self) -> ExportFormat;

    /// Render the full document.
    fn render(&self, map: &GeneratedMap) -> Result<String, MindMapError>;
}

/// `mind_map_<YYYYMMDD_HHMMSS>.<ext>` for the given local time.
pub fn export_file_name(now: NaiveDateTime, format: ExportFormat) -> String {
    format!(
        "mind_map_{}.{}",
        now.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Writes exports using the configured render settings.
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    settings: RenderSettings,
}

impl Exporter {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    /// Format used when the caller does not pick one.
    pub fn default_format(&self) -> ExportFormat {
        self.settings.format
    }

    /// Renderer for a format.
    pub fn renderer(&self, format: ExportFormat) -> Box<dyn Renderer> {
        match format {
            ExportFormat::Svg => Box::new(SvgRenderer::new(self.settings.clone())),
            ExportFormat::Json => Box::new(JsonRenderer::new(self.settings.color_seed)),
        }
    }

    /// Render `map` and write it into `dir`; returns the written path.
    ///
    /// The directory is created if needed. An existing file with the same
    /// name is overwritten.
    pub fn export(
        &self,
        map: &GeneratedMap,
        format: ExportFormat,
        dir: &Path,
        now: NaiveDateTime,
    ) -> Result<PathBuf, MindMapError> {
        let contents = self.renderer(format).render(map)?;

        fs::create_dir_all(dir)?;
        let path = dir.join(export_file_name(now, format));
        fs::write(&path, contents)?;

        info!(path = %path.display(), %format, "Exported mind map");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mindmap_graph::MindMapBuilder;
    use mindmap_keywords::RankedKeyword;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn sample_map() -> GeneratedMap {
        let (graph, layout) = MindMapBuilder::default()
            .build("AI", &["Data", "Science"])
            .unwrap();
        GeneratedMap::new(
            vec![RankedKeyword::new("Data", 2), RankedKeyword::new("Science", 1)],
            graph,
            layout,
        )
    }

    #[test]
    fn test_file_name_pattern() {
        assert_eq!(
            export_file_name(at(7, 5, 3), ExportFormat::Svg),
            "mind_map_20240309_070503.svg"
        );
        assert_eq!(
            export_file_name(at(23, 59, 59), ExportFormat::Json),
            "mind_map_20240309_235959.json"
        );
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let exporter = Exporter::default();
        let path = exporter
            .export(&sample_map(), ExportFormat::Svg, dir.path(), at(12, 0, 0))
            .unwrap();

        assert_eq!(path, dir.path().join("mind_map_20240309_120000.svg"));
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("<svg"));
    }

    #[test]
    fn test_export_creates_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let nested = dir.path().join("out").join("maps");
        let path = Exporter::default()
            .export(&sample_map(), ExportFormat::Json, &nested, at(1, 2, 3))
            .unwrap();
        assert!(path.exists());
        assert!(path.starts_with(&nested));
    }

    #[test]
    fn test_default_format_from_settings() {
        let exporter = Exporter::new(RenderSettings {
            format: ExportFormat::Json,
            ..RenderSettings::default()
        });
        assert_eq!(exporter.default_format(), ExportFormat::Json);
        assert_eq!(exporter.renderer(ExportFormat::Svg).format(), ExportFormat::Svg);
    }
}
