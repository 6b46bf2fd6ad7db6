//! Report data model shared by the checkers, the orchestrator and the CLI.
use serde::{Deserialize, Serialize};

/// Category of a detected issue.
///
/// Wire names are stable: downstream consumers match on the snake_case
/// strings, so variants must not be renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    ErrorHandling,
    ApiMisuse,
    SecurityIssue,
    SyntaxError,
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FindingKind::ErrorHandling => "error_handling",
            FindingKind::ApiMisuse => "api_misuse",
            FindingKind::SecurityIssue => "security_issue",
            FindingKind::SyntaxError => "syntax_error",
        };
        write!(f, "{}", name)
    }
}

/// A single detected issue: produced by exactly one checker for one unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    #[serde(rename = "type")]
    pub kind: FindingKind,
    pub description: String,
    /// 1-based source line, when the checker can attribute one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Finding {
    pub fn new(kind: FindingKind, description: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            kind,
            description: description.into(),
            line,
        }
    }
}

/// Remediation advice derived one-to-one from a Finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: FindingKind,
    pub fix: String,
}

/// Complexity estimate for a unit. `structural_complexity` comes from the
/// branch-counting collaborator, `size_heuristic` is line count / 10.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexityScore {
    pub structural_complexity: f64,
    pub size_heuristic: f64,
}

/// Aggregate result of one `analyze` call. Field names are the CLI's JSON
/// output keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub ai_probability: f64,
    pub potential_bugs: Vec<Finding>,
    pub complexity_score: ComplexityScore,
    pub suggested_fixes: Vec<Suggestion>,
}

impl AnalysisReport {
    /// Fixed report the CLI prints when analysis itself fails.
    pub fn fallback() -> Self {
        Self {
            ai_probability: 0.5,
            potential_bugs: Vec::new(),
            complexity_score: ComplexityScore {
                structural_complexity: 5.0,
                size_heuristic: 5.0,
            },
            suggested_fixes: Vec::new(),
        }
    }
}
