//! External text-classification capability.
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::ClassifierConfig;

/// One ranked prediction from the classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub score: f64,
}

/// Text-classification contract consumed by the scorer: ranked predictions,
/// index 0 first. Implementations may fail; the scorer degrades to the
/// deterministic fallback on any error.
pub trait TextClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Result<Vec<Classification>>;
}

/// HTTP-backed classifier speaking the hosted-inference wire shape:
/// request `{"inputs": text}`, response `[{label, score}, ...]` (possibly
/// nested one level, as batch endpoints return).
pub struct HttpClassifier {
    client: Client,
    url: String,
    token: Option<String>,
}

impl HttpClassifier {
    pub fn from_config(cfg: &ClassifierConfig) -> Result<Self> {
        let url = cfg
            .url
            .clone()
            .context("classifier endpoint not configured (AIDETECT_CLASSIFIER_URL unset)")?;
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            client,
            url,
            token: cfg.token.clone(),
        })
    }
}

impl TextClassifier for HttpClassifier {
    fn classify(&self, text: &str) -> Result<Vec<Classification>> {
        let mut request = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({ "inputs": text }));
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().context("Failed to send classify request")?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            anyhow::bail!("classifier returned {}: {}", status, body);
        }

        let value: serde_json::Value = response
            .json()
            .context("Failed to parse classifier response")?;
        parse_predictions(value)
    }
}

/// Accept both `[{label, score}]` and the batched `[[{label, score}]]` form.
fn parse_predictions(value: serde_json::Value) -> Result<Vec<Classification>> {
    let outer = value
        .as_array()
        .context("classifier response is not an array")?;
    let flat = match outer.first() {
        Some(serde_json::Value::Array(inner)) => inner.as_slice(),
        _ => outer.as_slice(),
    };
    flat.iter()
        .map(|entry| {
            serde_json::from_value(entry.clone()).context("malformed classifier prediction")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_prediction_list() {
        let value = serde_json::json!([
            {"label": "AI", "score": 0.85},
            {"label": "HUMAN", "score": 0.15}
        ]);
        let preds = parse_predictions(value).unwrap();
        assert_eq!(preds.len(), 2);
        assert_eq!(preds[0].label, "AI");
        assert!((preds[0].score - 0.85).abs() < 1e-9);
    }

    #[test]
    fn parses_batched_prediction_list() {
        let value = serde_json::json!([[{"label": "AI", "score": 0.7}]]);
        let preds = parse_predictions(value).unwrap();
        assert_eq!(preds.len(), 1);
        assert!((preds[0].score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn rejects_non_array_response() {
        assert!(parse_predictions(serde_json::json!({"error": "loading"})).is_err());
    }

    #[test]
    fn unconfigured_endpoint_is_an_error() {
        let cfg = ClassifierConfig {
            url: None,
            token: None,
            request_timeout_secs: 60,
            connect_timeout_secs: 30,
        };
        assert!(HttpClassifier::from_config(&cfg).is_err());
    }
}
