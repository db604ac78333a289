//! # Application State Management
//!
//! State shared by every request handler through `web::Data<AppState>`.
//!
//! ## Contents:
//! - **config**: the configuration the server started with (read-only)
//! - **metrics**: request and gloss counters behind `Arc<RwLock<_>>`
//! - **pipeline**: the gloss pipeline; its dictionary is loaded once and then
//!   read without locking, so translations run fully in parallel
//! - **start_time**: for uptime reporting
//!
//! `AppState` is cloned into every actix worker; clones share all of the above.

use crate::config::AppConfig;
use sign_gloss::{DictionaryStore, GlossPipeline, GlossSequence};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,

    pub metrics: Arc<RwLock<AppMetrics>>,

    pub pipeline: GlossPipeline,

    pub start_time: Instant,
}

/// Server-wide counters.
#[derive(Debug, Default, Clone)]
pub struct AppMetrics {
    pub request_count: u64,

    pub error_count: u64,

    /// Keyed by "METHOD /route/pattern"
    pub endpoint_metrics: HashMap<String, EndpointMetric>,

    pub gloss: GlossMetrics,
}

#[derive(Debug, Default, Clone)]
pub struct EndpointMetric {
    pub request_count: u64,

    pub total_duration_ms: u64,

    pub error_count: u64,
}

/// Translation counters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GlossMetrics {
    /// Transcripts translated
    pub translations: u64,

    /// Translations that produced `[SILENCE]`
    pub silences: u64,

    /// Tokens emitted, control tokens included
    pub tokens_emitted: u64,

    /// Finger-spelled letters emitted
    pub letters_spelled: u64,
}

impl AppState {
    /// Build state with a file-backed dictionary taken from the configuration.
    pub fn new(config: AppConfig) -> Self {
        let store = DictionaryStore::from_path(&config.dictionary.path);
        Self::with_pipeline(config, GlossPipeline::new(Arc::new(store)))
    }

    pub fn with_pipeline(config: AppConfig, pipeline: GlossPipeline) -> Self {
        Self {
            config: Arc::new(config),
            metrics: Arc::new(RwLock::new(AppMetrics::default())),
            pipeline,
            start_time: Instant::now(),
        }
    }

    pub fn get_config(&self) -> &AppConfig {
        &self.config
    }

    fn with_metrics<R>(&self, update: impl FnOnce(&mut AppMetrics) -> R) -> R {
        let mut metrics = self.metrics.write().unwrap_or_else(PoisonError::into_inner);
        update(&mut metrics)
    }

    pub fn increment_request_count(&self) {
        self.with_metrics(|metrics| metrics.request_count += 1);
    }

    pub fn increment_error_count(&self) {
        self.with_metrics(|metrics| metrics.error_count += 1);
    }

    pub fn record_endpoint_request(&self, endpoint: &str, duration_ms: u64, is_error: bool) {
        self.with_metrics(|metrics| {
            let endpoint_metric = metrics.endpoint_metrics.entry(endpoint.to_string()).or_default();
            endpoint_metric.request_count += 1;
            endpoint_metric.total_duration_ms += duration_ms;
            if is_error {
                endpoint_metric.error_count += 1;
            }
        });
    }

    pub fn record_translation(&self, gloss: &GlossSequence) {
        self.with_metrics(|metrics| {
            let counters = &mut metrics.gloss;
            counters.translations += 1;
            counters.tokens_emitted += gloss.tokens().len() as u64;
            counters.letters_spelled += gloss.letter_count() as u64;
            if gloss.is_silence() {
                counters.silences += 1;
            }
        });
    }

    pub fn get_metrics_snapshot(&self) -> AppMetrics {
        self.metrics
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn get_uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl AppMetrics {
    pub fn error_rate(&self) -> f64 {
        if self.request_count > 0 {
            self.error_count as f64 / self.request_count as f64
        } else {
            0.0
        }
    }
}

impl EndpointMetric {
    pub fn average_duration_ms(&self) -> f64 {
        if self.request_count > 0 {
            self.total_duration_ms as f64 / self.request_count as f64
        } else {
            0.0
        }
    }

    pub fn error_rate(&self) -> f64 {
        if self.request_count > 0 {
            self.error_count as f64 / self.request_count as f64
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let store = DictionaryStore::from_json(r#"{"hello": "HELLO"}"#);
        AppState::with_pipeline(AppConfig::default(), GlossPipeline::new(Arc::new(store)))
    }

    #[test]
    fn test_endpoint_metrics() {
        let state = state();
        state.record_endpoint_request("POST /api/v1/gloss", 10, false);
        state.record_endpoint_request("POST /api/v1/gloss", 30, true);

        let metrics = state.get_metrics_snapshot();
        let endpoint = &metrics.endpoint_metrics["POST /api/v1/gloss"];
        assert_eq!(endpoint.request_count, 2);
        assert_eq!(endpoint.average_duration_ms(), 20.0);
        assert_eq!(endpoint.error_rate(), 0.5);
    }

    #[test]
    fn test_record_translation() {
        let state = state();
        let spoken = state.pipeline.process_speech_to_gloss("hello bo").unwrap();
        let silent = state.pipeline.process_speech_to_gloss("um").unwrap();
        state.record_translation(&spoken.gloss);
        state.record_translation(&silent.gloss);

        let gloss = state.get_metrics_snapshot().gloss;
        assert_eq!(
            gloss,
            GlossMetrics {
                translations: 2,
                silences: 1,
                tokens_emitted: 5,
                letters_spelled: 2,
            }
        );
    }

    #[test]
    fn test_error_rate_without_requests() {
        let metrics = AppMetrics::default();
        assert_eq!(metrics.error_rate(), 0.0);
    }
}
