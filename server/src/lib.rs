use anyhow::Result;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use engine::persist::load_lexicon;
use engine::{AnalysisResult, Analyzer, Lexicon};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Debug, Default, Clone)]
pub struct AppConfig {
    /// Custom lexicon file; the bundled lexicon is used when absent.
    pub lexicon_path: Option<PathBuf>,
    /// Directory served for every route the API does not claim.
    pub static_dir: Option<PathBuf>,
}

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    pub text: String,
}

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

pub fn build_app(config: AppConfig) -> Result<Router> {
    let lexicon = match &config.lexicon_path {
        Some(path) => load_lexicon(path)?,
        None => Lexicon::bundled(),
    };
    tracing::info!(terms = lexicon.len(), emoji = lexicon.emoji().len(), "lexicon ready");
    let state = AppState { analyzer: Arc::new(Analyzer::new(lexicon)) };
    Ok(router(state, config.static_dir))
}

pub fn router(state: AppState, static_dir: Option<PathBuf>) -> Router {
    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/analyze", post(analyze_handler))
        .with_state(state);
    let app = match static_dir {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app,
    };
    app.layer(cors_layer()).layer(TraceLayer::new_for_http())
}

/// Wildcard origin unless CORS_ALLOW_ORIGIN lists origins (comma-separated).
fn cors_layer() -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);
    let origins: Vec<_> = std::env::var("CORS_ALLOW_ORIGIN")
        .map(|val| val.split(',').filter_map(|s| s.trim().parse().ok()).collect())
        .unwrap_or_default();
    if origins.is_empty() {
        base.allow_origin(Any)
    } else {
        base.allow_origin(AllowOrigin::list(origins))
    }
}

pub async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<serde_json::Value>)> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "rejected analyze payload");
        (rejection.status(), Json(serde_json::json!({ "error": rejection.body_text() })))
    })?;
    let text = req.text.unwrap_or_default();
    let analysis = state.analyzer.analyze(&text);
    Ok(Json(AnalyzeResponse { analysis, text }))
}
