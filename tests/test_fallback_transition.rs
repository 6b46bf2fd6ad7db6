//! The one-way fallback transition. Own test binary: the switch is
//! process-wide and permanent once tripped.
use anyhow::Result;
use aidetect::config::ScoringConfig;
use aidetect::scoring::{fallback, fallback_forced};
use aidetect::{AiScorer, Classification, TextClassifier};

struct FailingClassifier;

impl TextClassifier for FailingClassifier {
    fn classify(&self, _text: &str) -> Result<Vec<Classification>> {
        anyhow::bail!("inference backend unreachable")
    }
}

#[test]
fn call_failure_forces_permanent_fallback() {
    let cfg = ScoringConfig::default();
    let scorer = AiScorer::with_classifier(cfg.clone(), Box::new(FailingClassifier));

    let text = "temp = 1\n";
    let first = scorer.score(text);
    assert!(fallback_forced(), "first failure must flip the process-wide flag");
    assert_eq!(first.to_bits(), fallback::score(&cfg, text).to_bits());

    // subsequent calls stay in fallback mode, bit-for-bit deterministic
    for _ in 0..5 {
        assert_eq!(scorer.score(text).to_bits(), first.to_bits());
    }

    // a freshly built scorer in the same process is also in fallback mode
    let other = AiScorer::with_classifier(cfg.clone(), Box::new(FailingClassifier));
    assert_eq!(other.score(text).to_bits(), first.to_bits());
}
