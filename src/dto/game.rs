use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dao::models::{GameEntity, GameStatus},
    dto::{format_system_time, validation::validate_rfc3339},
};

/// Payload submitted to schedule a game.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateGameRequest {
    /// Team playing at home.
    pub home_team_id: Uuid,
    /// Visiting team.
    pub away_team_id: Uuid,
    /// Scheduled start instant (RFC3339).
    #[validate(custom(function = validate_rfc3339))]
    pub scheduled_at: String,
    /// Venue description.
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: String,
}

/// Public projection of a scheduled game.
#[derive(Debug, Serialize, ToSchema)]
pub struct GameResponse {
    /// Game identifier.
    pub id: Uuid,
    /// Team playing at home.
    pub home_team_id: Uuid,
    /// Visiting team.
    pub away_team_id: Uuid,
    /// Scheduled start instant (RFC3339).
    pub scheduled_at: String,
    /// Venue description.
    pub location: String,
    /// Lifecycle status.
    pub status: GameStatus,
    /// Home team score, once known.
    pub home_score: Option<i64>,
    /// Away team score, once known.
    pub away_score: Option<i64>,
    /// Creation timestamp (RFC3339).
    pub created_at: String,
}

impl From<GameEntity> for GameResponse {
    fn from(entity: GameEntity) -> Self {
        Self {
            id: entity.id,
            home_team_id: entity.home_team_id,
            away_team_id: entity.away_team_id,
            scheduled_at: format_system_time(entity.scheduled_at),
            location: entity.location,
            status: entity.status,
            home_score: entity.home_score,
            away_score: entity.away_score,
            created_at: format_system_time(entity.created_at),
        }
    }
}
