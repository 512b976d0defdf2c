use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use glossbridge_core::Translator;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<Translator>,
    pub disable_cache: bool,
}

#[derive(Deserialize)]
pub struct TranslateQuery {
    pub word: Option<String>,
}

#[derive(Serialize)]
pub struct TranslateResponse {
    translation: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/translate", get(translate))
        .layer(cors())
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}

async fn healthz() -> impl IntoResponse {
    "ok"
}

async fn translate(
    State(state): State<AppState>,
    Query(params): Query<TranslateQuery>,
) -> Result<Response, ApiError> {
    let word = params
        .word
        .filter(|w| !w.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("No word provided"))?;

    let translator = Arc::clone(&state.translator);
    let translation = tokio::task::spawn_blocking(move || translator.translate(&word))
        .await
        .map_err(|err| {
            error!("translation task failed: {err}");
            ApiError::Internal
        })?;

    let response = TranslateResponse { translation };

    if state.disable_cache {
        Ok(Json(response).into_response())
    } else {
        Ok((
            [(
                header::CACHE_CONTROL,
                HeaderValue::from_static("public, max-age=300"),
            )],
            Json(response),
        )
            .into_response())
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    fn bad_request<T: Into<String>>(msg: T) -> Self {
        ApiError::BadRequest(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                let body = Json(ErrorResponse { error: msg });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::Internal => {
                let body = Json(json!({ "error": "internal server error" }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
