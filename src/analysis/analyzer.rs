//! Analysis orchestrator: classify the unit, run the matching checker
//! table, score the text and assemble the report.
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dashmap::DashMap;
use sha2::{Digest, Sha256};
use tree_sitter::Tree;

use crate::analysis::checkers::STRUCTURAL_CHECKS;
use crate::analysis::complexity::{size_heuristic, structural_complexity, DEFAULT_COMPLEXITY};
use crate::analysis::error::AnalyzeError;
use crate::analysis::languages::{create_parser, SourceKind};
use crate::analysis::text_rules::TEXT_CHECKS;
use crate::config::load_scoring_config;
use crate::report::{AnalysisReport, ComplexityScore, Finding, FindingKind, Suggestion};
use crate::scoring::AiScorer;

/// Per-instance analyzer with a shared parse cache.
///
/// The cache is keyed by the SHA-256 digest of the unit's content, so
/// re-analyzing a path after an edit always parses fresh while identical
/// content is parsed at most once per instance.
pub struct CodeAnalyzer {
    scorer: AiScorer,
    tree_cache: DashMap<[u8; 32], Tree>,
}

impl Default for CodeAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeAnalyzer {
    pub fn new() -> Self {
        Self::with_scorer(AiScorer::new(load_scoring_config()))
    }

    pub fn with_scorer(scorer: AiScorer) -> Self {
        Self {
            scorer,
            tree_cache: DashMap::new(),
        }
    }

    /// Read a file fully into memory and analyze it.
    pub fn analyze_path(&self, path: &Path) -> Result<AnalysisReport> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(self.analyze(&path.to_string_lossy(), &content))
    }

    /// Analyze one unit. Never fails: parse, classifier and complexity
    /// problems are all recovered locally.
    pub fn analyze(&self, path: &str, content: &str) -> AnalysisReport {
        let kind = SourceKind::from_path(path);
        tracing::debug!(path, %kind, "analyzing unit");

        let potential_bugs = match kind {
            SourceKind::Python => match self.parse_cached(content) {
                Ok(tree) if !tree.root_node().has_error() => STRUCTURAL_CHECKS
                    .iter()
                    .flat_map(|(_, checker)| checker(&tree, content))
                    .collect(),
                // unparseable unit: checkers are skipped entirely
                _ => vec![Finding::new(
                    FindingKind::SyntaxError,
                    "Source failed to parse; structural checks skipped".to_string(),
                    None,
                )],
            },
            SourceKind::JavaScript => TEXT_CHECKS
                .iter()
                .flat_map(|(_, checker)| checker(content))
                .collect(),
            SourceKind::Unknown => Vec::new(),
        };

        let suggested_fixes = suggest_fixes(&potential_bugs);
        let ai_probability = self.scorer.score(content);

        let structural = structural_complexity(content, kind).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "complexity analysis failed, using default");
            DEFAULT_COMPLEXITY
        });

        AnalysisReport {
            ai_probability,
            potential_bugs,
            complexity_score: ComplexityScore {
                structural_complexity: structural,
                size_heuristic: size_heuristic(content),
            },
            suggested_fixes,
        }
    }

    fn parse_cached(&self, content: &str) -> Result<Tree, AnalyzeError> {
        let digest: [u8; 32] = Sha256::digest(content.as_bytes()).into();
        if let Some(tree) = self.tree_cache.get(&digest) {
            return Ok(tree.clone());
        }
        let mut parser = create_parser(SourceKind::Python)?;
        let tree = parser.parse(content, None).ok_or(AnalyzeError::ParseFailed)?;
        self.tree_cache.insert(digest, tree.clone());
        Ok(tree)
    }
}

/// Fixed finding-to-remediation lookup. Kinds without an entry (syntax
/// errors) are silently dropped, so the suggestion list never outgrows the
/// findings list.
pub fn suggest_fixes(findings: &[Finding]) -> Vec<Suggestion> {
    findings
        .iter()
        .filter_map(|finding| {
            let fix = match finding.kind {
                FindingKind::SecurityIssue => {
                    "Avoid eval; use safe parsers or sanitize inputs."
                }
                FindingKind::ErrorHandling => {
                    "Wrap risky calls in try/except and handle exceptions."
                }
                FindingKind::ApiMisuse => "Use 'with open(...)' context managers for file I/O.",
                FindingKind::SyntaxError => return None,
            };
            Some(Suggestion {
                kind: finding.kind,
                fix: fix.to_string(),
            })
        })
        .collect()
}
