use aidetect::analysis::checkers::{
    check_api_misuse, check_error_handling, check_security_patterns,
};
use aidetect::analysis::languages::{create_parser, SourceKind};
use aidetect::FindingKind;

fn parse(code: &str) -> tree_sitter::Tree {
    let mut parser = create_parser(SourceKind::Python).expect("python parser");
    parser.parse(code, None).expect("parse")
}

#[test]
fn error_handling_detects_missing_try() {
    let tree = parse("def f():\n    x = 1");
    let findings = check_error_handling(&tree, "def f():\n    x = 1");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, FindingKind::ErrorHandling);
    assert!(findings[0].description.contains("'f'"));
    assert_eq!(findings[0].line, Some(1));
}

#[test]
fn error_handling_satisfied_by_try_block() {
    let code = "def f():\n    try:\n        risky()\n    except Exception:\n        pass\n";
    let findings = check_error_handling(&parse(code), code);
    assert!(findings.is_empty());
}

#[test]
fn inner_try_does_not_satisfy_outer_function() {
    let code = "def outer():\n    def inner():\n        try:\n            risky()\n        except Exception:\n            pass\n    x = 1\n";
    let findings = check_error_handling(&parse(code), code);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].description.contains("'outer'"));
}

#[test]
fn outer_try_does_not_satisfy_inner_function() {
    let code = "def outer():\n    try:\n        pass\n    except Exception:\n        pass\n    def inner():\n        x = 1\n";
    let findings = check_error_handling(&parse(code), code);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].description.contains("'inner'"));
}

#[test]
fn api_misuse_detects_bare_open() {
    let code = "f = open('a.txt')\nf.read()\n";
    let findings = check_api_misuse(&parse(code), code);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, FindingKind::ApiMisuse);
    assert_eq!(findings[0].line, Some(1));
}

#[test]
fn open_in_with_clause_is_scoped() {
    let code = "with open('a.txt') as f:\n    data = f.read()\n";
    assert!(check_api_misuse(&parse(code), code).is_empty());
}

#[test]
fn open_in_with_body_is_still_flagged() {
    let code = "with open('a.txt') as f:\n    g = open('b.txt')\n";
    let findings = check_api_misuse(&parse(code), code);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, Some(2));
}

#[test]
fn attribute_open_is_not_the_builtin() {
    let code = "f = os.open('a.txt')\n";
    assert!(check_api_misuse(&parse(code), code).is_empty());
}

#[test]
fn security_detects_eval_with_line() {
    let code = "result = eval('2+2')";
    let findings = check_security_patterns(&parse(code), code);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, FindingKind::SecurityIssue);
    assert_eq!(findings[0].line, Some(1));
}

#[test]
fn security_detects_exec_per_call_site() {
    let code = "eval(a)\nexec(b)\n";
    let findings = check_security_patterns(&parse(code), code);
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].line, Some(1));
    assert_eq!(findings[1].line, Some(2));
}

#[test]
fn finding_lines_are_positive_and_in_range() {
    let code = "def f():\n    g = open('a')\n    eval('x')\n";
    let line_count = code.lines().count();
    for checker in [check_error_handling, check_api_misuse, check_security_patterns] {
        for finding in checker(&parse(code), code) {
            if let Some(line) = finding.line {
                assert!(line >= 1 && line <= line_count);
            }
        }
    }
}
