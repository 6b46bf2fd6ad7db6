//! aidetect: static analysis for AI-generated code.
//!
//! Scans source files for patterns characteristic of AI-authored code
//! (missing error handling, unsafe API usage, dynamic code execution) and
//! estimates the likelihood that a unit was AI-written, blending an external
//! text classifier with a deterministic heuristic fallback.

/// Analysis modules: source classification, pattern checkers, orchestration
pub mod analysis;

/// Scoring table and classifier endpoint configuration
pub mod config;

/// Report data model (findings, suggestions, complexity, aggregate report)
pub mod report;

/// AI-likelihood scoring (classifier adapter + deterministic fallback)
pub mod scoring;

// Re-export the commonly used types for convenience
pub use analysis::{scan_directory, CodeAnalyzer, SourceKind};
pub use report::{AnalysisReport, ComplexityScore, Finding, FindingKind, Suggestion};
pub use scoring::classifier::{Classification, TextClassifier};
pub use scoring::AiScorer;
