use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{dao::models::NewsEntity, dto::format_system_time};

/// Payload submitted to publish a news item.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateNewsRequest {
    /// Headline.
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    /// Body text.
    #[validate(length(min = 1, message = "body must not be empty"))]
    pub body: String,
    /// Author display name.
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    /// Whether the item should be highlighted.
    #[serde(default)]
    pub important: bool,
}

/// Public projection of a news item.
#[derive(Debug, Serialize, ToSchema)]
pub struct NewsResponse {
    /// News item identifier.
    pub id: Uuid,
    /// Headline.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Author display name.
    pub author: String,
    /// Whether the item should be highlighted.
    pub important: bool,
    /// Publication timestamp (RFC3339).
    pub created_at: String,
}

impl From<NewsEntity> for NewsResponse {
    fn from(entity: NewsEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            body: entity.body,
            author: entity.author,
            important: entity.important,
            created_at: format_system_time(entity.created_at),
        }
    }
}
