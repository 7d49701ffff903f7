use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Map, Value};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;
use crate::translate::{Difficulty, TranslationRequest, TranslationResponse};

/// `POST /api/translate`
pub async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslationRequest>, JsonRejection>,
) -> Result<Json<TranslationResponse>, ApiError> {
    let request_id = Uuid::new_v4();

    let Json(request) = payload.map_err(|rejection| {
        warn!("[{}] Rejected translation body: {}", request_id, rejection.body_text());
        rejection_error(rejection)
    })?;

    let prompts = state.prompt_builder.build(&request).map_err(|e| {
        warn!("[{}] Invalid translation request: {}", request_id, e);
        ApiError::from(e)
    })?;

    let difficulty = request.difficulty.as_deref().unwrap_or_default();
    info!(
        "[{}] Translating {} chars, difficulty={} ({})",
        request_id,
        request.text.as_deref().map(|t| t.chars().count()).unwrap_or(0),
        difficulty,
        Difficulty::resolve(difficulty).key()
    );

    match state.dispatcher.dispatch(&prompts).await {
        Ok(translated_text) => {
            info!("[{}] Translation completed", request_id);
            Ok(Json(TranslationResponse { translated_text }))
        }
        Err(e) => {
            error!("[{}] Translation failed: {}", request_id, e);
            Err(ApiError::from(e))
        }
    }
}

/// Syntax and data errors are 400; size and content-type failures keep the extractor's status
fn rejection_error(rejection: JsonRejection) -> ApiError {
    let status = match &rejection {
        JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
            StatusCode::BAD_REQUEST
        }
        other => other.status(),
    };
    ApiError::InvalidBody {
        status,
        message: rejection.body_text(),
    }
}

/// Any method other than POST on `/api/translate`. OPTIONS is answered by the CORS layer.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// `GET /health` - reports configuration only, the provider is not contacted
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let mut body = Map::new();
    body.insert("status".to_string(), json!("OK"));
    body.insert(
        format!("{}_configured", state.dispatcher.label()),
        json!(state.dispatcher.is_configured()),
    );
    body.insert(
        "timestamp".to_string(),
        json!(chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
    );
    Json(Value::Object(body))
}
