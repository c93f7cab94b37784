use crate::infra::{AppState, SharedSource};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use resume_insights::analytics::{AnalyticsDashboard, ResumeId, ResumeSnapshot};
use resume_insights::error::AppError;
use resume_insights::import::SnapshotImporter;
use resume_insights::source::load_snapshot;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyticsRequest {
    pub(crate) resume: Value,
    #[serde(default)]
    pub(crate) scores: Option<Value>,
}

pub(crate) fn with_analytics_routes(source: SharedSource) -> Router {
    Router::new()
        .route(
            "/api/v1/resumes/:resume_id/analytics",
            get(resume_analytics_endpoint),
        )
        .route("/api/v1/analytics", post(analytics_endpoint))
        .with_state(source)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<Value> {
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

pub(crate) async fn resume_analytics_endpoint(
    State(source): State<SharedSource>,
    Path(resume_id): Path<String>,
) -> Result<Json<AnalyticsDashboard>, AppError> {
    let id = ResumeId::new(resume_id);
    let snapshot = load_snapshot(source.as_ref(), &id)?;
    let dashboard = snapshot.dashboard();

    info!(
        resume_id = %id,
        jobs = dashboard.stats.total_jobs,
        "served resume analytics"
    );
    Ok(Json(dashboard))
}

pub(crate) async fn analytics_endpoint(
    Json(payload): Json<AnalyticsRequest>,
) -> Result<Json<AnalyticsDashboard>, AppError> {
    let AnalyticsRequest { resume, scores } = payload;

    let profile = SnapshotImporter::resume_from_value(resume)?;
    let scores = match scores {
        Some(scores) => SnapshotImporter::scores_from_value(scores)?,
        None => Vec::new(),
    };

    let snapshot = ResumeSnapshot::new(profile, scores);
    let dashboard = snapshot.dashboard();
    info!(
        resume_id = %snapshot.profile.id,
        jobs = dashboard.stats.total_jobs,
        "computed ad-hoc analytics"
    );
    Ok(Json(dashboard))
}
