//! Source classification and Tree-sitter parser construction.
use std::path::Path;
use std::sync::{Arc, RwLock};

use lazy_static::lazy_static;
use tree_sitter::{Language, Parser};

use crate::analysis::error::AnalyzeError;

/// How a unit is analyzed, decided by its path suffix.
///
/// Python is the primary language and gets a full syntax tree; JavaScript is
/// secondary and is checked textually, without a parse step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Structured analysis via tree-sitter-python
    Python,
    /// Textual (regex) analysis of browser-script files
    JavaScript,
    /// No checkers apply; score and complexity are still computed
    Unknown,
}

impl SourceKind {
    pub fn from_path(path: &str) -> Self {
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match ext.as_str() {
            "py" | "pyw" => Self::Python,
            "js" | "mjs" | "cjs" | "jsx" => Self::JavaScript,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Python => write!(f, "Python"),
            Self::JavaScript => write!(f, "JavaScript"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

// Language objects are expensive to build and safe to share between parsers,
// so the Python grammar is constructed once per process.
lazy_static! {
    static ref PYTHON_LANGUAGE: Arc<RwLock<Option<Language>>> = Arc::new(RwLock::new(None));
}

/// Get the cached Python grammar, building it on first use.
pub fn python_language() -> Result<Language, AnalyzeError> {
    {
        let cache = PYTHON_LANGUAGE
            .read()
            .map_err(|e| AnalyzeError::ParserSetup(format!("language cache poisoned: {}", e)))?;
        if let Some(lang) = cache.as_ref() {
            return Ok(lang.clone());
        }
    }

    let lang: Language = tree_sitter_python::LANGUAGE.into();
    {
        let mut cache = PYTHON_LANGUAGE
            .write()
            .map_err(|e| AnalyzeError::ParserSetup(format!("language cache poisoned: {}", e)))?;
        if cache.is_none() {
            *cache = Some(lang.clone());
        }
    }
    Ok(lang)
}

/// Create a parser configured for the given kind.
pub fn create_parser(kind: SourceKind) -> Result<Parser, AnalyzeError> {
    let language = match kind {
        SourceKind::Python => python_language()?,
        SourceKind::JavaScript => {
            return Err(AnalyzeError::UnsupportedKind(
                "JavaScript uses textual analysis, not tree-sitter",
            ))
        }
        SourceKind::Unknown => return Err(AnalyzeError::UnsupportedKind("unknown source kind")),
    };
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| AnalyzeError::ParserSetup(format!("failed to set parser language: {}", e)))?;
    Ok(parser)
}
