//! Runtime configuration: the fallback-scorer weight table and the external
//! classifier endpoint settings.
use serde::Deserialize;

/// Version tag of the built-in pattern table. Bump when the default weights
/// change so golden scores can be traced to a table revision.
pub const SCORING_TABLE_VERSION: &str = "1";

/// Lexical markers of AI-authored code, matched as lowercased substrings.
/// Each contributes its weight at most once per unit.
const DEFAULT_PATTERN_WEIGHTS: &[(&str, f64)] = &[
    // generic temp/result variable names
    ("result = ", 0.04),
    ("temp = ", 0.04),
    ("data = ", 0.03),
    ("output = ", 0.03),
    ("response = ", 0.03),
    // template-like docstring sections
    ("args:", 0.05),
    ("returns:", 0.05),
    ("raises:", 0.04),
    ("example:", 0.03),
    // common AI boilerplate phrases
    ("here's", 0.04),
    ("here is an example", 0.05),
    ("note that", 0.03),
    ("this function", 0.04),
    ("as follows", 0.03),
    // common import idioms
    ("from typing import", 0.04),
    ("import numpy as np", 0.03),
    ("import pandas as pd", 0.03),
    // broad exception catches
    ("except exception", 0.06),
    ("catch (e)", 0.05),
    ("catch (error)", 0.05),
];

/// Keywords that, combined with a docstring block marker, indicate templated
/// parameter/return documentation.
pub const DOC_SECTION_KEYWORDS: &[&str] = &["args:", "returns:", "parameters:", "raises:"];

/// Parameters of the deterministic fallback scorer. The table is data, not
/// control flow: tuning it never touches the scoring code.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub version: String,
    /// (lowercased substring, weight) pairs
    pub patterns: Vec<(String, f64)>,
    pub indent_width: usize,
    pub indent_line_threshold: usize,
    pub indent_bonus: f64,
    pub doc_bonus: f64,
    pub base: f64,
    pub ceiling: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            version: SCORING_TABLE_VERSION.to_string(),
            patterns: DEFAULT_PATTERN_WEIGHTS
                .iter()
                .map(|(s, w)| (s.to_string(), *w))
                .collect(),
            indent_width: 4,
            indent_line_threshold: 10,
            indent_bonus: 0.1,
            doc_bonus: 0.15,
            base: 0.5,
            ceiling: 0.95,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ScoringFile {
    version: Option<String>,
    patterns: Option<Vec<(String, f64)>>,
}

/// Load the scoring table, optionally overridden by a JSON file. The file
/// path comes from AIDETECT_SCORING_FILE, defaulting to `.aidetect.json` in
/// the working directory; a missing or malformed file falls back silently.
pub fn load_scoring_config() -> ScoringConfig {
    let mut cfg = ScoringConfig::default();

    let path = std::env::var("AIDETECT_SCORING_FILE")
        .ok()
        .unwrap_or_else(|| ".aidetect.json".to_string());
    if let Ok(text) = std::fs::read_to_string(&path) {
        if let Ok(file) = serde_json::from_str::<ScoringFile>(&text) {
            if let Some(version) = file.version {
                cfg.version = version;
            }
            if let Some(patterns) = file.patterns {
                if !patterns.is_empty() {
                    cfg.patterns = patterns
                        .into_iter()
                        .map(|(s, w)| (s.to_lowercase(), w))
                        .collect();
                }
            }
        }
    }

    cfg
}

/// Settings for the external text-classification endpoint.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Endpoint URL; None means the capability is not configured.
    pub url: Option<String>,
    pub token: Option<String>,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl ClassifierConfig {
    pub fn from_env() -> Self {
        let request_timeout_secs = std::env::var("AIDETECT_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(60)
            .clamp(1, 600);
        let connect_timeout_secs = std::env::var("AIDETECT_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30)
            .clamp(1, 120);

        Self {
            url: std::env::var("AIDETECT_CLASSIFIER_URL")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            token: std::env::var("AIDETECT_CLASSIFIER_TOKEN")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            request_timeout_secs,
            connect_timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_versioned_and_nonempty() {
        let cfg = ScoringConfig::default();
        assert_eq!(cfg.version, SCORING_TABLE_VERSION);
        assert!(cfg.patterns.len() >= 15);
        // table entries are already lowercase so the scorer can match the
        // lowercased input directly
        for (pat, weight) in &cfg.patterns {
            assert_eq!(*pat, pat.to_lowercase());
            assert!(*weight > 0.0 && *weight < 0.2);
        }
    }

    #[test]
    fn default_thresholds_match_scoring_contract() {
        let cfg = ScoringConfig::default();
        assert_eq!(cfg.base, 0.5);
        assert_eq!(cfg.ceiling, 0.95);
        assert_eq!(cfg.indent_width, 4);
        assert_eq!(cfg.indent_line_threshold, 10);
        assert_eq!(cfg.indent_bonus, 0.1);
        assert_eq!(cfg.doc_bonus, 0.15);
    }
}
