use std::time::SystemTime;

use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::stats::StatsResponse, error::AppError, services::stats_service, state::SharedState,
};

/// Routes exposing the dashboard statistics snapshot.
pub fn router() -> Router<SharedState> {
    Router::new().route("/stats", get(get_stats))
}

/// Compute the dashboard counters as of the current instant.
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses((status = 200, description = "Dashboard counters", body = StatsResponse))
)]
pub async fn get_stats(State(state): State<SharedState>) -> Result<Json<StatsResponse>, AppError> {
    // The aggregator takes `now` as an argument; the wall clock is read only
    // here at the boundary.
    let stats = stats_service::compute_stats(&state, SystemTime::now()).await?;
    Ok(Json(stats))
}
