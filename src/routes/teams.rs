use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use axum_valid::Valid;
use uuid::Uuid;

use crate::{
    dto::{
        player::PlayerResponse,
        team::{CreateTeamRequest, TeamResponse},
    },
    error::AppError,
    services::team_service,
    state::SharedState,
};

/// Routes handling team management.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/teams", get(list_teams).post(create_team))
        .route("/teams/{id}", get(get_team))
        .route("/teams/{id}/players", get(get_team_players))
}

/// Create a team with an empty roster.
#[utoipa::path(
    post,
    path = "/teams",
    tag = "teams",
    request_body = CreateTeamRequest,
    responses((status = 200, description = "Team created", body = TeamResponse))
)]
pub async fn create_team(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<CreateTeamRequest>>,
) -> Result<Json<TeamResponse>, AppError> {
    let team = team_service::create_team(&state, payload).await?;
    Ok(Json(team))
}

/// List teams.
#[utoipa::path(
    get,
    path = "/teams",
    tag = "teams",
    responses((status = 200, description = "List teams", body = [TeamResponse]))
)]
pub async fn list_teams(
    State(state): State<SharedState>,
) -> Result<Json<Vec<TeamResponse>>, AppError> {
    Ok(Json(team_service::list_teams(&state).await?))
}

/// Fetch a team by its identifier.
#[utoipa::path(
    get,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = Uuid, Path, description = "Identifier of the team")),
    responses(
        (status = 200, description = "Team found", body = TeamResponse),
        (status = 404, description = "No team with this identifier")
    )
)]
pub async fn get_team(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamResponse>, AppError> {
    Ok(Json(team_service::get_team(&state, id).await?))
}

/// List the players assigned to a team.
#[utoipa::path(
    get,
    path = "/teams/{id}/players",
    tag = "teams",
    params(("id" = Uuid, Path, description = "Identifier of the team")),
    responses((status = 200, description = "Players assigned to the team", body = [PlayerResponse]))
)]
pub async fn get_team_players(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<PlayerResponse>>, AppError> {
    Ok(Json(team_service::get_team_players(&state, id).await?))
}
