//! Word -> part-of-speech lexicon.
//!
//! Lexicon files are plain text, one `word<TAB>TAG` entry per line. Blank
//! lines and lines starting with `#` are ignored. Words are stored
//! lower-cased; later entries override earlier ones.

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use mindmap_types::{MindMapError, PosTag};

/// Closed-class words and common verbs shipped with the built-in tagger.
const BUILTIN_LEXICON: &str = include_str!("../data/lexicon.tsv");

/// Word -> tag lookup table.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, PosTag>,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// The lexicon embedded in the crate.
    pub fn builtin() -> Self {
        // The embedded table is checked by `test_builtin_parses`.
        Self::parse(BUILTIN_LEXICON).unwrap_or_default()
    }

    /// Parse lexicon text.
    pub fn parse(source: &str) -> Result<Self, MindMapError> {
        let mut lexicon = Self::new();
        for (line_no, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split('\t').map(str::trim).filter(|f| !f.is_empty());
            let (word, code) = match (fields.next(), fields.next(), fields.next()) {
                (Some(word), Some(code), None) => (word, code),
                _ => {
                    return Err(MindMapError::TokenizerInit(format!(
                        "line {}: expected `word<TAB>TAG`, got {:?}",
                        line_no + 1,
                        line
                    )))
                }
            };

            let tag = PosTag::from_code(code).ok_or_else(|| {
                MindMapError::TokenizerInit(format!(
                    "line {}: unknown tag {:?}",
                    line_no + 1,
                    code
                ))
            })?;
            lexicon.insert(word, tag);
        }
        Ok(lexicon)
    }

    /// Load a lexicon file. A missing or malformed file is an initialization failure.
    pub fn load(path: &Path) -> Result<Self, MindMapError> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            MindMapError::TokenizerInit(format!("cannot read lexicon {}: {}", path.display(), e))
        })?;
        let lexicon = Self::parse(&source)?;
        info!(path = %path.display(), entries = lexicon.len(), "Loaded lexicon");
        Ok(lexicon)
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, word: &str, tag: PosTag) {
        self.entries.insert(word.to_lowercase(), tag);
    }

    /// Add every entry of `other`, replacing existing ones.
    pub fn extend(&mut self, other: Lexicon) {
        self.entries.extend(other.entries);
    }

    /// Look up a word (case-insensitive).
    pub fn get(&self, word: &str) -> Option<PosTag> {
        self.entries
            .get(word)
            .or_else(|| self.entries.get(&word.to_lowercase()))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_parses() {
        let lexicon = Lexicon::parse(BUILTIN_LEXICON).unwrap();
        assert!(lexicon.len() > 100);
        assert_eq!(lexicon.get("the"), Some(PosTag::Det));
        assert_eq!(lexicon.get("uses"), Some(PosTag::Verb));
        assert_eq!(lexicon.get("involves"), Some(PosTag::Verb));
        assert_eq!(lexicon.get("data"), None);
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let lexicon = Lexicon::parse("# header\n\nrust\tPROPN\n  cargo\tNOUN  \n").unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.get("Rust"), Some(PosTag::Propn));
        assert_eq!(lexicon.get("cargo"), Some(PosTag::Noun));
    }

    #[test]
    fn test_parse_rejects_bad_tag() {
        let err = Lexicon::parse("rust\tLANGUAGE\n").unwrap_err();
        assert!(matches!(err, MindMapError::TokenizerInit(_)));
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_parse_rejects_missing_tag() {
        let err = Lexicon::parse("ok\tNOUN\nlonely\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_later_entries_override() {
        let mut lexicon = Lexicon::parse("set\tVERB\n").unwrap();
        lexicon.extend(Lexicon::parse("set\tNOUN\n").unwrap());
        assert_eq!(lexicon.get("set"), Some(PosTag::Noun));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("extra.tsv");
        std::fs::write(&path, "ferris\tPROPN\n").unwrap();
        let lexicon = Lexicon::load(&path).unwrap();
        assert_eq!(lexicon.get("ferris"), Some(PosTag::Propn));
    }

    #[test]
    fn test_load_missing_file_is_init_error() {
        let err = Lexicon::load(Path::new("/nonexistent/lexicon.tsv")).unwrap_err();
        assert!(matches!(err, MindMapError::TokenizerInit(_)));
    }
}
