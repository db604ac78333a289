//! Gloss endpoints
//!
//! `POST /api/v1/gloss` with `{"text": "..."}`, or `GET /api/v1/gloss?text=...`
//! for quick manual testing. Both return `{"speech": "...", "gloss": [...]}`.

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sign_gloss::GlossOutput;
use tracing::debug;

/// Transcript to translate.
#[derive(Debug, Deserialize)]
pub struct GlossRequest {
    pub text: String,
}

pub async fn post_gloss(
    state: web::Data<AppState>,
    body: web::Json<GlossRequest>,
) -> AppResult<HttpResponse> {
    let output = translate_transcript(&state, &body.text)?;
    Ok(HttpResponse::Ok().json(output))
}

pub async fn get_gloss(
    state: web::Data<AppState>,
    query: web::Query<GlossRequest>,
) -> AppResult<HttpResponse> {
    let output = translate_transcript(&state, &query.text)?;
    Ok(HttpResponse::Ok().json(output))
}

fn translate_transcript(state: &AppState, text: &str) -> AppResult<GlossOutput> {
    let max_chars = state.get_config().gloss.max_input_chars;
    let chars = text.chars().count();
    if chars > max_chars {
        return Err(AppError::ValidationError(format!(
            "Transcript is {} characters, limit is {}",
            chars, max_chars
        )));
    }

    let output = state.pipeline.process_speech_to_gloss(text)?;
    state.record_translation(&output.gloss);

    debug!(
        speech = %output.speech,
        tokens = output.gloss.tokens().len(),
        letters = output.gloss.letter_count(),
        "Translated transcript"
    );

    Ok(output)
}
