//! Code analysis: source classification, pattern checkers and orchestration.
pub mod analyzer;
pub mod checkers;
pub mod complexity;
pub mod error;
pub mod languages;
pub mod scan;
pub mod text_rules;

pub use analyzer::{suggest_fixes, CodeAnalyzer};
pub use error::AnalyzeError;
pub use languages::SourceKind;
pub use scan::scan_directory;
