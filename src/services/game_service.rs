use std::time::SystemTime;

use uuid::Uuid;

use crate::{
    dao::models::{GameEntity, GameStatus},
    dto::{
        game::{CreateGameRequest, GameResponse},
        parse_rfc3339,
    },
    error::ServiceError,
    state::SharedState,
};

/// Schedule a game between two teams. Pure pass-through storage.
pub async fn create_game(
    state: &SharedState,
    request: CreateGameRequest,
) -> Result<GameResponse, ServiceError> {
    let store = state.require_store().await?;

    let scheduled_at = parse_rfc3339(&request.scheduled_at).map_err(|err| {
        ServiceError::InvalidInput(format!(
            "invalid scheduled_at `{}`: {err}",
            request.scheduled_at
        ))
    })?;

    let game = GameEntity {
        id: Uuid::new_v4(),
        home_team_id: request.home_team_id,
        away_team_id: request.away_team_id,
        scheduled_at,
        location: request.location,
        status: GameStatus::Scheduled,
        home_score: None,
        away_score: None,
        created_at: SystemTime::now(),
    };

    store.insert_game(game.clone()).await?;
    Ok(game.into())
}

/// List games ordered by scheduled date, soonest first.
pub async fn list_games(state: &SharedState) -> Result<Vec<GameResponse>, ServiceError> {
    let store = state.require_store().await?;
    let games = store.list_games().await?;
    Ok(games.into_iter().map(Into::into).collect())
}

/// Fetch one game by id.
pub async fn get_game(state: &SharedState, id: Uuid) -> Result<GameResponse, ServiceError> {
    let store = state.require_store().await?;
    let Some(game) = store.find_game(id).await? else {
        return Err(ServiceError::NotFound(format!("game `{id}` not found")));
    };
    Ok(game.into())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::dao::memory::MemoryClubStore;
    use crate::state::AppState;

    fn request(scheduled_at: &str) -> CreateGameRequest {
        CreateGameRequest {
            home_team_id: Uuid::new_v4(),
            away_team_id: Uuid::new_v4(),
            scheduled_at: scheduled_at.to_owned(),
            location: "Main field".to_owned(),
        }
    }

    #[tokio::test]
    async fn created_game_is_scheduled_with_no_scores() {
        let state = AppState::new();
        state
            .install_store(Arc::new(MemoryClubStore::new()))
            .await;

        let game = create_game(&state, request("2026-09-05T10:00:00Z"))
            .await
            .unwrap();
        assert_eq!(game.status, GameStatus::Scheduled);
        assert!(game.home_score.is_none());
        assert!(game.away_score.is_none());
        assert_eq!(game.scheduled_at, "2026-09-05T10:00:00Z");
    }

    #[tokio::test]
    async fn malformed_date_is_rejected_before_persistence() {
        let state = AppState::new();
        let store = MemoryClubStore::new();
        state.install_store(Arc::new(store.clone())).await;

        let err = create_game(&state, request("tomorrow")).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
        assert!(list_games(&state).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn games_are_listed_soonest_first() {
        let state = AppState::new();
        state
            .install_store(Arc::new(MemoryClubStore::new()))
            .await;

        create_game(&state, request("2026-09-12T10:00:00Z"))
            .await
            .unwrap();
        create_game(&state, request("2026-09-05T10:00:00Z"))
            .await
            .unwrap();

        let games = list_games(&state).await.unwrap();
        assert_eq!(games[0].scheduled_at, "2026-09-05T10:00:00Z");
        assert_eq!(games[1].scheduled_at, "2026-09-12T10:00:00Z");
    }
}
