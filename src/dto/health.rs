use serde::Serialize;
use utoipa::ToSchema;

/// Body of `GET /api/healthcheck`, reporting whether the club store is
/// reachable.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// "ok" when a store is installed, "degraded" while reconnecting.
    pub status: String,
}

impl HealthResponse {
    /// The store answered its last ping.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }

    /// No store is installed; writes and reads will be refused.
    pub fn degraded() -> Self {
        Self {
            status: "degraded".to_string(),
        }
    }
}
