//! Textual pattern checkers for JavaScript units.
//!
//! Secondary-language files are never parsed; each checker is a pure
//! `fn(&str) -> Vec<Finding>` over the raw text. Lines are 1-based.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::report::{Finding, FindingKind};

pub type TextChecker = fn(&str) -> Vec<Finding>;

/// Fixed kind-to-checker table for textual units; insertion order is the
/// documented report order.
pub const TEXT_CHECKS: &[(FindingKind, TextChecker)] = &[
    (FindingKind::ErrorHandling, check_unhandled_promises),
    (FindingKind::SecurityIssue, check_unsafe_calls),
];

// Compile once; a rule whose pattern fails to compile is skipped rather than
// panicking mid-analysis.
static EVAL_RE: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| Regex::new(r"\beval\s*\("));
static STRING_TIMER_RE: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r#"\bset(?:Timeout|Interval)\s*\(\s*['"]"#));
static DOCUMENT_WRITE_RE: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"\bdocument\.write\s*\("));
static INNER_HTML_RE: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"\.innerHTML\s*="));
static THEN_RE: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| Regex::new(r"\.then\s*\("));
static CATCH_RE: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| Regex::new(r"\.catch\s*\("));

/// Unit-wide check: a `.then(` chain somewhere in the file with no `.catch(`
/// anywhere yields one finding, attributed to the first `.then(` occurrence.
pub fn check_unhandled_promises(text: &str) -> Vec<Finding> {
    let (then_re, catch_re) = match (THEN_RE.as_ref(), CATCH_RE.as_ref()) {
        (Ok(t), Ok(c)) => (t, c),
        _ => return Vec::new(),
    };
    if !then_re.is_match(text) || catch_re.is_match(text) {
        return Vec::new();
    }
    let line = text
        .lines()
        .position(|l| then_re.is_match(l))
        .map(|idx| idx + 1);
    vec![Finding::new(
        FindingKind::ErrorHandling,
        "Promise chain with .then() has no .catch() failure handler".to_string(),
        line,
    )]
}

/// Line scan for unsafe call patterns: dynamic code execution, string-based
/// timer scheduling, raw-HTML injection sinks. One finding per call site,
/// so two sinks on one line yield two findings.
pub fn check_unsafe_calls(text: &str) -> Vec<Finding> {
    let rules: &[(&Lazy<Result<Regex, regex::Error>>, &str)] = &[
        (&EVAL_RE, "Dynamic code execution via eval()"),
        (
            &STRING_TIMER_RE,
            "String argument to setTimeout/setInterval is evaluated as code",
        ),
        (&DOCUMENT_WRITE_RE, "Raw HTML injection via document.write()"),
        (&INNER_HTML_RE, "Raw HTML injection via innerHTML assignment"),
    ];

    let mut findings = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        for (re, message) in rules {
            if let Ok(re) = re.as_ref() {
                for _ in re.find_iter(line) {
                    findings.push(Finding::new(
                        FindingKind::SecurityIssue,
                        message.to_string(),
                        Some(idx + 1),
                    ));
                }
            }
        }
    }
    findings
}
