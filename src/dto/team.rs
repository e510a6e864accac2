use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dao::models::{AgeGroup, TeamEntity},
    dto::format_system_time,
};

/// Payload submitted to create a new team.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateTeamRequest {
    /// Display name for the team.
    #[validate(length(min = 1, message = "team name must not be empty"))]
    pub name: String,
    /// Bucket the team recruits from.
    pub age_group: AgeGroup,
    /// Optional coach name.
    #[serde(default)]
    pub coach_name: Option<String>,
    /// Optional coach email.
    #[serde(default)]
    #[validate(email(message = "coach email must be a valid address"))]
    pub coach_email: Option<String>,
}

/// Public projection of a team.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeamResponse {
    /// Team identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Bucket the team recruits from.
    pub age_group: AgeGroup,
    /// Coach name, when appointed.
    pub coach_name: Option<String>,
    /// Coach contact email.
    pub coach_email: Option<String>,
    /// Number of reserved roster slots.
    pub roster_count: i64,
    /// Creation timestamp (RFC3339).
    pub created_at: String,
}

impl From<TeamEntity> for TeamResponse {
    fn from(entity: TeamEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            age_group: entity.age_group,
            coach_name: entity.coach_name,
            coach_email: entity.coach_email,
            roster_count: entity.roster_count,
            created_at: format_system_time(entity.created_at),
        }
    }
}
