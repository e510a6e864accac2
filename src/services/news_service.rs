use std::time::SystemTime;

use uuid::Uuid;

use crate::{
    dao::models::NewsEntity,
    dto::news::{CreateNewsRequest, NewsResponse},
    error::ServiceError,
    state::SharedState,
};

/// Publish a news item. Pure pass-through storage.
pub async fn create_news(
    state: &SharedState,
    request: CreateNewsRequest,
) -> Result<NewsResponse, ServiceError> {
    let store = state.require_store().await?;

    let news = NewsEntity {
        id: Uuid::new_v4(),
        title: request.title,
        body: request.body,
        author: request.author,
        important: request.important,
        created_at: SystemTime::now(),
    };

    store.insert_news(news.clone()).await?;
    Ok(news.into())
}

/// List news items, newest first.
pub async fn list_news(state: &SharedState) -> Result<Vec<NewsResponse>, ServiceError> {
    let store = state.require_store().await?;
    let news = store.list_news().await?;
    Ok(news.into_iter().map(Into::into).collect())
}
