//! HTTP route trees per resource.

use axum::Router;

use crate::state::SharedState;

/// Swagger UI routes.
pub mod docs;
/// Game scheduling routes.
pub mod games;
/// Health check route.
pub mod health;
/// Club news routes.
pub mod news;
/// Player registration routes.
pub mod players;
/// Dashboard statistics route.
pub mod stats;
/// Team management routes.
pub mod teams;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(players::router())
        .merge(teams::router())
        .merge(games::router())
        .merge(news::router())
        .merge(stats::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
