//! Deterministic fallback scorer, active once the external classifier is
//! judged unavailable. Pure function of (config, text): identical input
//! always yields an identical score.
use crate::config::{ScoringConfig, DOC_SECTION_KEYWORDS};

/// Heuristic AI-likelihood estimate in [base, ceiling].
///
/// Base 0.5; each matched table pattern contributes its weight once; uniform
/// 4-space indentation and templated docstring sections add fixed bonuses;
/// the sum is clamped to the ceiling (0.95 - never certainty).
pub fn score(cfg: &ScoringConfig, text: &str) -> f64 {
    let lower = text.to_lowercase();
    let mut total = cfg.base;

    for (pattern, weight) in &cfg.patterns {
        if lower.contains(pattern.as_str()) {
            total += weight;
        }
    }

    let uniform_indent_lines = text
        .lines()
        .filter(|line| all_space_indent(line) == Some(cfg.indent_width))
        .count();
    if uniform_indent_lines > cfg.indent_line_threshold {
        total += cfg.indent_bonus;
    }

    if lower.contains("\"\"\"") && DOC_SECTION_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        total += cfg.doc_bonus;
    }

    total.min(cfg.ceiling)
}

/// Width of the line's leading whitespace when it is made of spaces only;
/// None for mixed indentation like `"    \tcode"`, whose leading run is
/// wider than its space count.
fn all_space_indent(line: &str) -> Option<usize> {
    let mut width = 0;
    for c in line.chars() {
        match c {
            ' ' => width += 1,
            c if c.is_whitespace() => return None,
            _ => break,
        }
    }
    Some(width)
}
