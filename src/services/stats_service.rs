use std::time::SystemTime;

use crate::{
    dao::models::StatsSnapshot, dto::stats::StatsResponse, error::ServiceError, state::SharedState,
};

/// Compute the dashboard counters as of `now`.
///
/// `now` is supplied by the caller rather than read here, so "upcoming" is a
/// deterministic function of the snapshot instant. Games scheduled exactly at
/// `now` do not count as upcoming.
pub async fn compute_stats(
    state: &SharedState,
    now: SystemTime,
) -> Result<StatsResponse, ServiceError> {
    let store = state.require_store().await?;

    let snapshot = StatsSnapshot {
        player_count: store.count_players().await?,
        team_count: store.count_teams().await?,
        upcoming_game_count: store.count_upcoming_games(now).await?,
        news_count: store.count_news().await?,
    };

    Ok(snapshot.into())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use uuid::Uuid;

    use super::*;
    use crate::dao::{
        memory::MemoryClubStore,
        models::{GameEntity, GameStatus},
        storage::ClubStore,
    };
    use crate::state::AppState;

    fn game_at(scheduled_at: SystemTime) -> GameEntity {
        GameEntity {
            id: Uuid::new_v4(),
            home_team_id: Uuid::new_v4(),
            away_team_id: Uuid::new_v4(),
            scheduled_at,
            location: "Main field".to_owned(),
            status: GameStatus::Scheduled,
            home_score: None,
            away_score: None,
            created_at: SystemTime::UNIX_EPOCH,
        }
    }

    #[tokio::test]
    async fn upcoming_games_are_strictly_after_now() {
        let state = AppState::new();
        let store = MemoryClubStore::new();
        state.install_store(Arc::new(store.clone())).await;

        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        store
            .insert_game(game_at(now - Duration::from_secs(1)))
            .await
            .unwrap();
        store.insert_game(game_at(now)).await.unwrap();
        store
            .insert_game(game_at(now + Duration::from_secs(1)))
            .await
            .unwrap();

        let stats = compute_stats(&state, now).await.unwrap();
        // The game exactly at `now` is not upcoming.
        assert_eq!(stats.upcoming_games, 1);
    }

    #[tokio::test]
    async fn counts_cover_all_four_collections() {
        let state = AppState::new();
        let store = MemoryClubStore::new();
        state.install_store(Arc::new(store.clone())).await;

        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        store
            .insert_game(game_at(now + Duration::from_secs(60)))
            .await
            .unwrap();

        let stats = compute_stats(&state, now).await.unwrap();
        assert_eq!(stats.total_players, 0);
        assert_eq!(stats.total_teams, 0);
        assert_eq!(stats.upcoming_games, 1);
        assert_eq!(stats.recent_news, 0);
    }
}
