//! Generation state owned by a front end.
//!
//! A `Session` holds the last successfully generated map. Each generation
//! replaces it wholesale; a failed generation leaves the previous map in place.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info, instrument};

use mindmap_graph::MindMapBuilder;
use mindmap_keywords::{KeywordExtractor, RankedKeyword, Tokenizer};
use mindmap_render::{Exporter, GeneratedMap};
use mindmap_types::{ExportFormat, MindMapError, Settings};

pub struct Session {
    extractor: KeywordExtractor,
    builder: MindMapBuilder,
    exporter: Exporter,
    output_dir: PathBuf,
    current: Option<GeneratedMap>,
}

impl Session {
    pub fn new(
        extractor: KeywordExtractor,
        builder: MindMapBuilder,
        exporter: Exporter,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            extractor,
            builder,
            exporter,
            output_dir: output_dir.into(),
            current: None,
        }
    }

    /// Wire every stage from loaded settings around an already built tokenizer.
    pub fn from_settings(settings: &Settings, tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self::new(
            KeywordExtractor::new(tokenizer, settings.extraction.clone()),
            MindMapBuilder::new(settings.layout.clone(), settings.default_title.clone()),
            Exporter::new(settings.render.clone()),
            settings.expanded_output_dir(),
        )
    }

    /// Ranked keywords for `text` without building a map.
    ///
    /// # Errors
    ///
    /// `EmptyInput` when `text` is blank.
    pub fn keywords(&self, text: &str) -> Result<Vec<RankedKeyword>, MindMapError> {
        if text.trim().is_empty() {
            return Err(MindMapError::EmptyInput);
        }
        Ok(self.extractor.extract_ranked(text))
    }

    /// Extract keywords from `text` and build a map around `title`.
    ///
    /// # Errors
    ///
    /// - `EmptyInput` when `text` is blank; the extractor is not run
    /// - `NoKeywordsFound` when nothing qualifies; no map is built
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn generate(&mut self, title: &str, text: &str) -> Result<&GeneratedMap, MindMapError> {
        let keywords = self.keywords(text)?;
        if keywords.is_empty() {
            debug!("Extraction produced no keywords");
            return Err(MindMapError::NoKeywordsFound);
        }

        let names: Vec<&str> = keywords.iter().map(|k| k.keyword.as_str()).collect();
        let (graph, layout) = self.builder.build(title, &names)?;
        info!(
            title = graph.hub(),
            keywords = keywords.len(),
            "Generated mind map"
        );

        Ok(self
            .current
            .insert(GeneratedMap::new(keywords, graph, layout)))
    }

    /// Last successfully generated map.
    pub fn current(&self) -> Option<&GeneratedMap> {
        self.current.as_ref()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn set_output_dir(&mut self, dir: impl Into<PathBuf>) {
        self.output_dir = dir.into();
    }

    pub fn default_format(&self) -> ExportFormat {
        self.exporter.default_format()
    }

    /// Export the current map to the output directory, stamped with local time.
    ///
    /// # Errors
    ///
    /// `ExportBeforeGenerate` when nothing has been generated; no file is written.
    pub fn export(&self, format: Option<ExportFormat>) -> Result<PathBuf, MindMapError> {
        let format = format.unwrap_or_else(|| self.default_format());
        self.export_to(format, &self.output_dir, Local::now().naive_local())
    }

    /// Export the current map into `dir` using an explicit timestamp.
    pub fn export_to(
        &self,
        format: ExportFormat,
        dir: &Path,
        now: NaiveDateTime,
    ) -> Result<PathBuf, MindMapError> {
        let map = self.current.as_ref().ok_or(MindMapError::ExportBeforeGenerate)?;
        self.exporter.export(map, format, dir, now)
    }
}
