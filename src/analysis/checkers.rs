//! Structural pattern checkers for Python units.
//!
//! Each checker is a pure `fn(&Tree, &str) -> Vec<Finding>` over a parsed
//! tree; the orchestrator never hands a checker an unparseable unit. Output
//! order follows `STRUCTURAL_CHECKS` insertion order, and within one checker
//! findings follow source order (preorder walk).
use tree_sitter::{Node, Tree};

use crate::report::{Finding, FindingKind};

pub type StructuralChecker = fn(&Tree, &str) -> Vec<Finding>;

/// Fixed kind-to-checker table. The insertion order here is the documented
/// report order: error_handling, api_misuse, security_issue.
pub const STRUCTURAL_CHECKS: &[(FindingKind, StructuralChecker)] = &[
    (FindingKind::ErrorHandling, check_error_handling),
    (FindingKind::ApiMisuse, check_api_misuse),
    (FindingKind::SecurityIssue, check_security_patterns),
];

/// Preorder traversal in source order.
fn walk_preorder<'a>(root: Node<'a>, mut visit: impl FnMut(Node<'a>)) {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        for i in (0..node.child_count()).rev() {
            if let Some(child) = node.child(i) {
                stack.push(child);
            }
        }
        visit(node);
    }
}

/// Name of the function a call expression invokes, when it is a bare
/// identifier (attribute calls like `os.open` do not match).
fn bare_callee<'a>(call: Node<'a>, source: &'a str) -> Option<&'a str> {
    let function = call.child_by_field_name("function")?;
    if function.kind() != "identifier" {
        return None;
    }
    function.utf8_text(source.as_bytes()).ok()
}

/// True if the subtree rooted at `node` contains a `try` statement, without
/// descending into nested function definitions: an outer function's `try`
/// never satisfies an inner function and vice versa.
fn contains_protected_block(node: Node<'_>) -> bool {
    let mut stack = vec![node];
    while let Some(n) = stack.pop() {
        if n.kind() == "try_statement" {
            return true;
        }
        for i in 0..n.child_count() {
            if let Some(child) = n.child(i) {
                if child.kind() == "function_definition" {
                    continue;
                }
                stack.push(child);
            }
        }
    }
    false
}

/// Flag every function definition whose own body has no try/except block.
pub fn check_error_handling(tree: &Tree, source: &str) -> Vec<Finding> {
    let mut findings = Vec::new();
    walk_preorder(tree.root_node(), |node| {
        if node.kind() != "function_definition" {
            return;
        }
        let name = node
            .child_by_field_name("name")
            .and_then(|n| n.utf8_text(source.as_bytes()).ok())
            .unwrap_or("<anonymous>");
        let body_protected = node
            .child_by_field_name("body")
            .map(contains_protected_block)
            .unwrap_or(false);
        if !body_protected {
            findings.push(Finding::new(
                FindingKind::ErrorHandling,
                format!("Function '{}' has no error handling (no try/except block)", name),
                Some(node.start_position().row + 1),
            ));
        }
    });
    findings
}

/// Flag every bare `open(...)` call that is not part of a `with` clause.
///
/// Only membership in the clause itself counts as scoped: an `open` in the
/// *body* of a `with` block acquires nothing and is still flagged.
pub fn check_api_misuse(tree: &Tree, source: &str) -> Vec<Finding> {
    let mut findings = Vec::new();
    walk_preorder(tree.root_node(), |node| {
        if node.kind() != "call" || bare_callee(node, source) != Some("open") {
            return;
        }
        let mut scoped = false;
        let mut current = node.parent();
        while let Some(parent) = current {
            if parent.kind() == "with_clause" {
                scoped = true;
                break;
            }
            current = parent.parent();
        }
        if !scoped {
            findings.push(Finding::new(
                FindingKind::ApiMisuse,
                "open() called without a 'with' context manager".to_string(),
                Some(node.start_position().row + 1),
            ));
        }
    });
    findings
}

/// Flag every `eval(...)` / `exec(...)` call site.
pub fn check_security_patterns(tree: &Tree, source: &str) -> Vec<Finding> {
    let mut findings = Vec::new();
    walk_preorder(tree.root_node(), |node| {
        if node.kind() != "call" {
            return;
        }
        match bare_callee(node, source) {
            Some(callee @ ("eval" | "exec")) => {
                findings.push(Finding::new(
                    FindingKind::SecurityIssue,
                    format!("Dynamic code execution via {}()", callee),
                    Some(node.start_position().row + 1),
                ));
            }
            _ => {}
        }
    });
    findings
}
