//! Structural-complexity collaborator.
//!
//! The orchestrator treats this as an external capability: any error here is
//! substituted with a fixed default rather than propagated.
use crate::analysis::error::AnalyzeError;
use crate::analysis::languages::{create_parser, SourceKind};

/// Value the orchestrator substitutes when complexity analysis fails.
pub const DEFAULT_COMPLEXITY: f64 = 5.0;

// 1MB cap, matching the checker path
const MAX_SOURCE_BYTES: usize = 1_000_000;

/// Branch-point count for a unit, starting at 1.0.
///
/// Python units are parsed and branch nodes counted; other kinds get a
/// keyword-based line scan.
pub fn structural_complexity(content: &str, kind: SourceKind) -> Result<f64, AnalyzeError> {
    if content.len() > MAX_SOURCE_BYTES {
        return Err(AnalyzeError::SourceTooLarge(content.len()));
    }
    match kind {
        SourceKind::Python => python_complexity(content),
        SourceKind::JavaScript | SourceKind::Unknown => Ok(textual_complexity(content)),
    }
}

/// Local size heuristic: line count / 10.
pub fn size_heuristic(content: &str) -> f64 {
    content.lines().count() as f64 / 10.0
}

fn python_complexity(content: &str) -> Result<f64, AnalyzeError> {
    let mut parser = create_parser(SourceKind::Python)?;
    let tree = parser.parse(content, None).ok_or(AnalyzeError::ParseFailed)?;

    let mut complexity = 1u32;
    let mut cursor = tree.root_node().walk();
    'outer: loop {
        match cursor.node().kind() {
            "if_statement" | "elif_clause" | "for_statement" | "while_statement"
            | "except_clause" | "conditional_expression" | "boolean_operator" => complexity += 1,
            _ => {}
        }

        if cursor.goto_first_child() {
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                break 'outer;
            }
        }
    }

    Ok(f64::from(complexity))
}

/// Keyword scan for units without a syntax tree.
fn textual_complexity(content: &str) -> f64 {
    let mut complexity = 1u32;
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") || trimmed.starts_with('#') {
            continue;
        }
        let lower = trimmed.to_lowercase();
        for keyword in ["if", "else", "while", "for", "switch", "case", "catch"] {
            if contains_keyword(&lower, keyword) {
                complexity += 1;
            }
        }
        complexity += (lower.matches("&&").count() + lower.matches("||").count()) as u32;
    }
    f64::from(complexity)
}

/// Keyword check with word boundaries so `ifdef` does not count as `if`.
fn contains_keyword(text: &str, keyword: &str) -> bool {
    if text.is_empty() || keyword.is_empty() {
        return false;
    }
    let bytes = text.as_bytes();
    let mut start = 0;
    while let Some(pos) = text[start..].find(keyword) {
        let pos = start + pos;
        let before_ok = pos == 0 || !bytes[pos - 1].is_ascii_alphanumeric();
        let after = pos + keyword.len();
        let after_ok = after >= bytes.len() || !bytes[after].is_ascii_alphanumeric();
        if before_ok && after_ok {
            return true;
        }
        start = pos + 1;
    }
    false
}
