use axum::{Json, extract::State};

use crate::config::Config;
use crate::models::system::HealthStatus;
use crate::shared_state::AppState;

/// GET /api/health
/// Service liveness and uptime
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthStatus)
    )
)]
pub async fn health(State(state): State<AppState>, State(config): State<Config>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        simulate_delay: config.presentation.simulate_delay,
    })
}
