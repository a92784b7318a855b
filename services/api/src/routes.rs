use crate::infra::{AppState, ScoringState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;
use wellbeing::error::AppError;
use wellbeing::scoring::{
    CompletenessPolicy, CutoffPreset, ScoreReport, ScoringConfig, ScoringEngine,
};
use wellbeing::survey::{QuestionCatalogue, ResponseLedger};

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) answers: ResponseLedger,
    #[serde(default)]
    pub(crate) policy: Option<CompletenessPolicy>,
    #[serde(default)]
    pub(crate) cutoffs: Option<CutoffPreset>,
}

/// Stateless scoring endpoints over the BAT-12 catalogue.
pub(crate) fn assessment_routes(state: ScoringState) -> Router {
    Router::new()
        .route("/api/v1/assessments/score", post(score_endpoint))
        .route("/api/v1/assessments/catalogue", get(catalogue_endpoint))
        .layer(Extension(state))
}

pub(crate) fn with_operational_routes(router: Router) -> Router {
    router
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn catalogue_endpoint(
    Extension(state): Extension<ScoringState>,
) -> Json<QuestionCatalogue> {
    Json(state.catalogue.as_ref().clone())
}

pub(crate) async fn score_endpoint(
    Extension(state): Extension<ScoringState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ScoreReport>, AppError> {
    let ScoreRequest {
        answers,
        policy,
        cutoffs,
    } = payload;

    let config = ScoringConfig::new(
        cutoffs
            .map(CutoffPreset::table)
            .unwrap_or(state.defaults.cutoffs),
        policy.unwrap_or(state.defaults.completeness),
    );

    let report = ScoringEngine::new(config).score(&answers, &state.catalogue)?;
    debug!(
        answers = answers.len(),
        total = report.scores.total,
        "score request handled"
    );

    Ok(Json(report))
}
