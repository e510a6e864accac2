use axum::{Json, Router, extract::State, routing::get};
use axum_valid::Valid;

use crate::{
    dto::news::{CreateNewsRequest, NewsResponse},
    error::AppError,
    services::news_service,
    state::SharedState,
};

/// Routes handling club news.
pub fn router() -> Router<SharedState> {
    Router::new().route("/news", get(list_news).post(create_news))
}

/// Publish a news item.
#[utoipa::path(
    post,
    path = "/news",
    tag = "news",
    request_body = CreateNewsRequest,
    responses((status = 200, description = "News item published", body = NewsResponse))
)]
pub async fn create_news(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<CreateNewsRequest>>,
) -> Result<Json<NewsResponse>, AppError> {
    let news = news_service::create_news(&state, payload).await?;
    Ok(Json(news))
}

/// List news items, newest first.
#[utoipa::path(
    get,
    path = "/news",
    tag = "news",
    responses((status = 200, description = "List news items newest first", body = [NewsResponse]))
)]
pub async fn list_news(
    State(state): State<SharedState>,
) -> Result<Json<Vec<NewsResponse>>, AppError> {
    Ok(Json(news_service::list_news(&state).await?))
}
