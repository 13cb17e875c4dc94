//! Route table and handlers. All routes are read-only GETs over a shared
//! engine; every request triggers a fresh collection run.

use crate::error::ApiError;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use crosscheck_core::Engine;
use crosscheck_protocol::{
    DiscrepancySummaryReport, DiscrepancyView, FeedReport, IntelligenceReport, MonitorReport,
    PlatformDetail,
};
use log::debug;
use std::sync::Arc;

/// Build the route table over a shared engine.
pub fn router(engine: Arc<Engine>) -> Router {
    Router::new()
        .route("/monitor", get(monitor))
        .route("/grc-validation", get(grc_validation))
        .route("/intelligence-report", get(intelligence_report))
        .route("/activity-feed", get(activity_feed))
        .route("/platform/{name}", get(platform_detail))
        .route("/discrepancies/summary", get(discrepancy_summary))
        .with_state(engine)
}

async fn monitor(State(engine): State<Arc<Engine>>) -> Json<MonitorReport> {
    Json(engine.monitor().await)
}

async fn grc_validation(State(engine): State<Arc<Engine>>) -> Json<Vec<DiscrepancyView>> {
    Json(engine.validate().await)
}

async fn intelligence_report(State(engine): State<Arc<Engine>>) -> Json<IntelligenceReport> {
    Json(engine.intelligence_report().await)
}

async fn activity_feed(State(engine): State<Arc<Engine>>) -> Json<FeedReport> {
    Json(engine.activity_feed().await)
}

async fn platform_detail(
    State(engine): State<Arc<Engine>>,
    Path(name): Path<String>,
) -> Result<Json<PlatformDetail>, ApiError> {
    debug!("platform detail requested (name={})", name);
    let detail = engine.platform_detail(&name).await?;
    Ok(Json(detail))
}

async fn discrepancy_summary(
    State(engine): State<Arc<Engine>>,
) -> Json<DiscrepancySummaryReport> {
    Json(engine.discrepancy_summary().await)
}
