//! AI-likelihood scoring: a pluggable classifier with a deterministic
//! fallback and a one-way, process-wide degradation path.
pub mod classifier;
pub mod fallback;

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use once_cell::sync::OnceCell;

use crate::config::{ClassifierConfig, ScoringConfig};
use classifier::{HttpClassifier, TextClassifier};

// Process-wide: once any scorer observes a classifier failure, every scorer
// in this process uses the fallback. The transition is one-way; there is no
// automatic recovery.
static FALLBACK_FORCED: AtomicBool = AtomicBool::new(false);

/// True once the process has permanently switched to the fallback scorer.
pub fn fallback_forced() -> bool {
    FALLBACK_FORCED.load(Ordering::Acquire)
}

/// Idempotent transition into fallback mode; warns exactly once even under
/// concurrent first-failures.
fn force_fallback(reason: &str) {
    if FALLBACK_FORCED
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_ok()
    {
        tracing::warn!(reason, "classifier unavailable, switching to heuristic fallback scorer");
    }
}

type ClassifierFactory = Box<dyn Fn() -> Result<Box<dyn TextClassifier>> + Send + Sync>;

/// Scores text for AI-authorship likelihood.
///
/// The external classifier is built lazily on first use; construction or
/// call-time failure flips the process into fallback mode for good.
pub struct AiScorer {
    factory: ClassifierFactory,
    classifier: OnceCell<Option<Box<dyn TextClassifier>>>,
    scoring: ScoringConfig,
}

impl AiScorer {
    /// Scorer backed by the HTTP classifier configured from the environment.
    pub fn new(scoring: ScoringConfig) -> Self {
        Self::with_factory(
            scoring,
            Box::new(|| {
                let cfg = ClassifierConfig::from_env();
                Ok(Box::new(HttpClassifier::from_config(&cfg)?) as Box<dyn TextClassifier>)
            }),
        )
    }

    /// Scorer with an injected classifier; used by integrations and tests.
    pub fn with_classifier(scoring: ScoringConfig, classifier: Box<dyn TextClassifier>) -> Self {
        let cell = OnceCell::new();
        let _ = cell.set(Some(classifier));
        Self {
            factory: Box::new(|| anyhow::bail!("classifier already injected")),
            classifier: cell,
            scoring,
        }
    }

    pub fn with_factory(scoring: ScoringConfig, factory: ClassifierFactory) -> Self {
        Self {
            factory,
            classifier: OnceCell::new(),
            scoring,
        }
    }

    /// AI-likelihood estimate in [0,1]; in fallback mode the range narrows
    /// to [0.5, 0.95].
    pub fn score(&self, text: &str) -> f64 {
        if fallback_forced() {
            return fallback::score(&self.scoring, text);
        }

        let classifier = self.classifier.get_or_init(|| match (self.factory)() {
            Ok(c) => Some(c),
            Err(e) => {
                force_fallback(&e.to_string());
                None
            }
        });

        let Some(classifier) = classifier else {
            return fallback::score(&self.scoring, text);
        };

        match classifier.classify(text) {
            Ok(predictions) => match predictions.first() {
                Some(top) => top.score.clamp(0.0, 1.0),
                None => {
                    force_fallback("classifier returned no predictions");
                    fallback::score(&self.scoring, text)
                }
            },
            Err(e) => {
                force_fallback(&e.to_string());
                fallback::score(&self.scoring, text)
            }
        }
    }
}
