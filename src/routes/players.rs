use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use axum_valid::Valid;
use uuid::Uuid;

use crate::{
    dto::player::{PlayerResponse, RegisterPlayerRequest},
    error::AppError,
    services::player_service,
    state::SharedState,
};

/// Routes handling player registration and lookups.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/players", get(list_players).post(register_player))
        .route("/players/{id}", get(get_player))
}

/// Register a player, deriving their age bucket and auto-assigning a team.
#[utoipa::path(
    post,
    path = "/players",
    tag = "players",
    request_body = RegisterPlayerRequest,
    responses(
        (status = 200, description = "Player registered; team_id is set when a roster slot was free", body = PlayerResponse)
    )
)]
pub async fn register_player(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<RegisterPlayerRequest>>,
) -> Result<Json<PlayerResponse>, AppError> {
    let player = player_service::register_player(&state, payload).await?;
    Ok(Json(player))
}

/// List registered players.
#[utoipa::path(
    get,
    path = "/players",
    tag = "players",
    responses((status = 200, description = "List registered players", body = [PlayerResponse]))
)]
pub async fn list_players(
    State(state): State<SharedState>,
) -> Result<Json<Vec<PlayerResponse>>, AppError> {
    Ok(Json(player_service::list_players(&state).await?))
}

/// Fetch a player by their identifier.
#[utoipa::path(
    get,
    path = "/players/{id}",
    tag = "players",
    params(("id" = Uuid, Path, description = "Identifier of the player")),
    responses(
        (status = 200, description = "Player found", body = PlayerResponse),
        (status = 404, description = "No player with this identifier")
    )
)]
pub async fn get_player(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PlayerResponse>, AppError> {
    Ok(Json(player_service::get_player(&state, id).await?))
}
