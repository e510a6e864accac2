use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dao::models::{AgeGroup, PlayerEntity},
    dto::format_system_time,
};

/// Payload submitted to register a new player.
///
/// The age bucket is never part of the payload; it is derived from `age`
/// during registration.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct RegisterPlayerRequest {
    /// Player's display name.
    #[validate(length(min = 1, message = "player name must not be empty"))]
    pub name: String,
    /// Player's age in years.
    pub age: i64,
    /// Guardian's full name.
    #[validate(length(min = 1, message = "guardian name must not be empty"))]
    pub guardian_name: String,
    /// Guardian's email address.
    #[validate(email(message = "guardian email must be a valid address"))]
    pub guardian_email: String,
    /// Guardian's phone number.
    #[validate(length(min = 1, message = "guardian phone must not be empty"))]
    pub guardian_phone: String,
}

/// Public projection of a registered player.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlayerResponse {
    /// Player identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Age at registration.
    pub age: i64,
    /// Bucket the player was classified into.
    pub age_group: AgeGroup,
    /// Guardian's full name.
    pub guardian_name: String,
    /// Guardian's email address.
    pub guardian_email: String,
    /// Guardian's phone number.
    pub guardian_phone: String,
    /// Assigned team, when a roster slot was available.
    pub team_id: Option<Uuid>,
    /// Registration timestamp (RFC3339).
    pub created_at: String,
}

impl From<PlayerEntity> for PlayerResponse {
    fn from(entity: PlayerEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            age: entity.age,
            age_group: entity.age_group,
            guardian_name: entity.guardian_name,
            guardian_email: entity.guardian_email,
            guardian_phone: entity.guardian_phone,
            team_id: entity.team_id,
            created_at: format_system_time(entity.created_at),
        }
    }
}
