//! Read-only dictionary inspection endpoints.

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use serde_json::json;
use sign_gloss::gloss::dictionary::MAX_PHRASE_WORDS;

/// GET /api/v1/dictionary
pub async fn dictionary_info(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let store = state.pipeline.store();
    let dictionary = store.load()?;

    Ok(HttpResponse::Ok().json(json!({
        "source": store.source().describe(),
        "entries": dictionary.len(),
        "longest_key_words": dictionary.longest_key_words(),
        "max_phrase_words": MAX_PHRASE_WORDS,
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}

/// GET /api/v1/dictionary/{key}
///
/// The key is looked up exactly as given; callers pass normalized text.
pub async fn lookup_entry(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let key = path.into_inner();
    let dictionary = state.pipeline.store().load()?;

    match dictionary.get(&key) {
        Some(gloss) => Ok(HttpResponse::Ok().json(json!({
            "key": key,
            "gloss": gloss
        }))),
        None => Err(AppError::NotFound(format!("No dictionary entry for '{}'", key))),
    }
}

#[cfg(test)]
mod tests {
    use crate::config::AppConfig;
    use crate::handlers::configure_routes;
    use crate::state::AppState;
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};
    use sign_gloss::{DictionaryStore, GlossPipeline};
    use std::sync::Arc;

    fn state() -> AppState {
        let store = DictionaryStore::from_json(
            r#"{"hello": "HELLO", "good morning": "GOOD_MORNING", "how are you": "HOW_ARE_YOU"}"#,
        );
        AppState::with_pipeline(AppConfig::default(), GlossPipeline::new(Arc::new(store)))
    }

    #[actix_web::test]
    async fn test_dictionary_info() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/dictionary").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["source"], "inline");
        assert_eq!(body["entries"], 3);
        assert_eq!(body["longest_key_words"], 3);
        assert_eq!(body["max_phrase_words"], 3);
    }

    #[actix_web::test]
    async fn test_lookup_phrase_and_missing_key() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/dictionary/good%20morning")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"key": "good morning", "gloss": "GOOD_MORNING"}));

        let req = test::TestRequest::get()
            .uri("/api/v1/dictionary/goodbye")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
