//! Service info, health and metrics endpoints.

use crate::state::AppState;
use actix_web::{web, HttpResponse};
use serde_json::json;

/// GET /
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Sign Gloss API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /api/v1/gloss": "Convert a transcript to sign gloss ({\"text\": \"...\"})",
            "GET /api/v1/gloss?text=": "Same as POST, for manual testing",
            "GET /api/v1/dictionary": "Dictionary summary",
            "GET /api/v1/dictionary/{key}": "Look up one word or phrase",
            "GET /api/v1/health": "Service health",
            "GET /api/v1/metrics": "Request and translation metrics",
            "GET /api/v1/config": "Current configuration"
        }
    }))
}

/// GET /health and /api/v1/health
///
/// Reports `degraded` when the dictionary failed to load. Never triggers a
/// load itself.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let metrics = state.get_metrics_snapshot();
    let config = state.get_config();
    let dictionary = dictionary_status(&state);
    let status = if dictionary["status"] == "failed" {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(json!({
        "status": status,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": state.get_uptime_seconds(),
        "service": {
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "host": config.server.host,
            "port": config.server.port
        },
        "dictionary": dictionary,
        "metrics": {
            "total_requests": metrics.request_count,
            "total_errors": metrics.error_count,
            "error_rate": metrics.error_rate(),
            "translations": metrics.gloss.translations
        }
    }))
}

/// GET /api/v1/metrics
pub async fn detailed_metrics(state: web::Data<AppState>) -> HttpResponse {
    let metrics = state.get_metrics_snapshot();
    let uptime_seconds = state.get_uptime_seconds();

    let mut endpoint_stats: Vec<_> = metrics.endpoint_metrics.iter().collect();
    endpoint_stats.sort_by(|a, b| a.0.cmp(b.0));
    let endpoint_stats: Vec<_> = endpoint_stats
        .into_iter()
        .map(|(endpoint, metric)| {
            json!({
                "endpoint": endpoint,
                "request_count": metric.request_count,
                "error_count": metric.error_count,
                "error_rate": metric.error_rate(),
                "average_duration_ms": metric.average_duration_ms(),
                "total_duration_ms": metric.total_duration_ms
            })
        })
        .collect();

    let gloss = &metrics.gloss;

    HttpResponse::Ok().json(json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_seconds,
        "overall": {
            "total_requests": metrics.request_count,
            "total_errors": metrics.error_count,
            "error_rate": metrics.error_rate(),
            "requests_per_second": if uptime_seconds > 0 {
                metrics.request_count as f64 / uptime_seconds as f64
            } else {
                0.0
            }
        },
        "gloss": {
            "translations": gloss.translations,
            "silences": gloss.silences,
            "tokens_emitted": gloss.tokens_emitted,
            "letters_spelled": gloss.letters_spelled
        },
        "endpoints": endpoint_stats
    }))
}

fn dictionary_status(state: &AppState) -> serde_json::Value {
    let store = state.pipeline.store();
    let source = store.source().describe();

    match store.peek() {
        Some(Ok(dictionary)) => json!({
            "status": "loaded",
            "source": source,
            "entries": dictionary.len()
        }),
        Some(Err(e)) => json!({
            "status": "failed",
            "source": source,
            "error": e.to_string()
        }),
        None => json!({
            "status": "not_loaded",
            "source": source
        }),
    }
}
