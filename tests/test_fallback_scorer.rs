//! Golden tests for the deterministic fallback scorer. The weights and
//! thresholds here are the version "1" table contract.
use aidetect::config::ScoringConfig;
use aidetect::scoring::fallback;

fn score(text: &str) -> f64 {
    fallback::score(&ScoringConfig::default(), text)
}

#[test]
fn base_score_for_plain_text() {
    assert_eq!(score("x = compute_thing(y)\n"), 0.5);
}

#[test]
fn golden_single_pattern_weights() {
    // one table entry each; sums are exact against the v1 table
    assert!((score("temp = 1\n") - 0.54).abs() < 1e-9);
    assert!((score("from typing import List\n") - 0.54).abs() < 1e-9);
    assert!((score("try:\n    pass\nexcept Exception:\n    pass\n") - 0.56).abs() < 1e-9);
}

#[test]
fn golden_combined_patterns() {
    // "result = " (0.04) + "note that" (0.03)
    let text = "# note that this caches\nresult = load()\n";
    assert!((score(text) - 0.57).abs() < 1e-9);
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(score("TEMP = 1\n").to_bits(), score("temp = 1\n").to_bits());
}

#[test]
fn deterministic_across_calls() {
    let text = "def generate_response(prompt):\n    response = ''\n    tokens = prompt.split()\n    return response\n";
    let first = score(text);
    for _ in 0..10 {
        assert_eq!(score(text).to_bits(), first.to_bits());
    }
}

#[test]
fn fallback_range_holds_for_arbitrary_inputs() {
    let inputs = [
        "",
        "short",
        "eval('2+2')",
        &"    indented\n".repeat(100),
        &"args: returns: raises: \"\"\" here's note that".repeat(50),
    ];
    for text in inputs {
        let s = score(text);
        assert!((0.5..=0.95).contains(&s), "score {} out of [0.5, 0.95]", s);
    }
}

#[test]
fn heavy_ai_style_text_hits_ceiling() {
    let mut text = String::from("\"\"\"Module docstring.\n\nArgs:\n    x: input\nReturns:\n    output\nRaises:\n    ValueError\n\"\"\"\nfrom typing import List\nimport numpy as np\nimport pandas as pd\n");
    text.push_str("def process(data):\n");
    for i in 0..12 {
        text.push_str(&format!("    temp = {}\n", i));
    }
    text.push_str("    result = temp\n    output = result\n    response = output\n");
    text.push_str("    # note that this function works as follows, here's an example:\n");
    text.push_str("    try:\n        pass\n    except Exception:\n        pass\n");
    assert_eq!(score(&text), 0.95);
}

#[test]
fn custom_table_is_honored() {
    let mut cfg = ScoringConfig::default();
    cfg.patterns = vec![("magic marker".to_string(), 0.2)];
    assert_eq!(fallback::score(&cfg, "no markers here"), 0.5);
    assert!((fallback::score(&cfg, "a MAGIC MARKER appears") - 0.7).abs() < 1e-9);
}
