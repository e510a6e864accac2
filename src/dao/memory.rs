use std::sync::{Arc, Mutex};
use std::time::SystemTime;

use futures::future::BoxFuture;
use uuid::Uuid;

use crate::dao::{
    models::{AgeGroup, GameEntity, NewsEntity, PlayerEntity, ROSTER_CAPACITY, TeamEntity},
    storage::{ClubStore, LIST_LIMIT, StorageResult},
};

/// Storage backend keeping every collection in process memory.
///
/// Serves as the substitute store for service tests. The roster reservation
/// holds the data lock across the capacity check and the increment, so it
/// honors the same single-step contract as the MongoDB conditional update.
#[derive(Clone, Default)]
pub struct MemoryClubStore {
    data: Arc<Mutex<MemoryData>>,
}

#[derive(Default)]
struct MemoryData {
    players: Vec<PlayerEntity>,
    teams: Vec<TeamEntity>,
    games: Vec<GameEntity>,
    news: Vec<NewsEntity>,
}

impl MemoryClubStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryData> {
        // Keep the data reachable even when a test panicked while holding the lock.
        self.data
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn reserve(&self, age_group: AgeGroup) -> Option<Uuid> {
        let mut data = self.lock();
        let mut eligible: Vec<&mut TeamEntity> = data
            .teams
            .iter_mut()
            .filter(|team| team.age_group == age_group && team.roster_count < ROSTER_CAPACITY)
            .collect();
        eligible.sort_by_key(|team| (team.created_at, team.id));

        let team = eligible.into_iter().next()?;
        team.roster_count += 1;
        Some(team.id)
    }
}

impl ClubStore for MemoryClubStore {
    fn insert_player(&self, player: PlayerEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store.lock().players.push(player);
            Ok(())
        })
    }

    fn find_player(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<PlayerEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            Ok(store
                .lock()
                .players
                .iter()
                .find(|player| player.id == id)
                .cloned())
        })
    }

    fn list_players(&self) -> BoxFuture<'static, StorageResult<Vec<PlayerEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            Ok(store
                .lock()
                .players
                .iter()
                .take(LIST_LIMIT)
                .cloned()
                .collect())
        })
    }

    fn list_team_players(
        &self,
        team_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Vec<PlayerEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            Ok(store
                .lock()
                .players
                .iter()
                .filter(|player| player.team_id == Some(team_id))
                .take(LIST_LIMIT)
                .cloned()
                .collect())
        })
    }

    fn insert_team(&self, team: TeamEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store.lock().teams.push(team);
            Ok(())
        })
    }

    fn find_team(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<TeamEntity>>> {
        let store = self.clone();
        Box::pin(async move { Ok(store.lock().teams.iter().find(|team| team.id == id).cloned()) })
    }

    fn list_teams(&self) -> BoxFuture<'static, StorageResult<Vec<TeamEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            Ok(store
                .lock()
                .teams
                .iter()
                .take(LIST_LIMIT)
                .cloned()
                .collect())
        })
    }

    fn reserve_roster_slot(
        &self,
        age_group: AgeGroup,
    ) -> BoxFuture<'static, StorageResult<Option<Uuid>>> {
        let store = self.clone();
        Box::pin(async move { Ok(store.reserve(age_group)) })
    }

    fn insert_game(&self, game: GameEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store.lock().games.push(game);
            Ok(())
        })
    }

    fn find_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { Ok(store.lock().games.iter().find(|game| game.id == id).cloned()) })
    }

    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let mut games: Vec<GameEntity> = store.lock().games.clone();
            games.sort_by_key(|game| game.scheduled_at);
            games.truncate(LIST_LIMIT);
            Ok(games)
        })
    }

    fn insert_news(&self, news: NewsEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store.lock().news.push(news);
            Ok(())
        })
    }

    fn list_news(&self) -> BoxFuture<'static, StorageResult<Vec<NewsEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            let mut news: Vec<NewsEntity> = store.lock().news.clone();
            news.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            news.truncate(LIST_LIMIT);
            Ok(news)
        })
    }

    fn count_players(&self) -> BoxFuture<'static, StorageResult<u64>> {
        let store = self.clone();
        Box::pin(async move { Ok(store.lock().players.len() as u64) })
    }

    fn count_teams(&self) -> BoxFuture<'static, StorageResult<u64>> {
        let store = self.clone();
        Box::pin(async move { Ok(store.lock().teams.len() as u64) })
    }

    fn count_upcoming_games(&self, after: SystemTime) -> BoxFuture<'static, StorageResult<u64>> {
        let store = self.clone();
        Box::pin(async move {
            Ok(store
                .lock()
                .games
                .iter()
                .filter(|game| game.scheduled_at > after)
                .count() as u64)
        })
    }

    fn count_news(&self) -> BoxFuture<'static, StorageResult<u64>> {
        let store = self.clone();
        Box::pin(async move { Ok(store.lock().news.len() as u64) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn team(name: &str, age_group: AgeGroup, roster_count: i64, age_secs: u64) -> TeamEntity {
        TeamEntity {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            age_group,
            coach_name: None,
            coach_email: None,
            roster_count,
            created_at: SystemTime::UNIX_EPOCH + Duration::from_secs(age_secs),
        }
    }

    #[tokio::test]
    async fn reservation_fills_up_to_capacity_exactly() {
        let store = MemoryClubStore::new();
        let lightning = team("Lightning", AgeGroup::U8, 3, 1);
        let id = lightning.id;
        store.insert_team(lightning).await.unwrap();

        let mut successes = 0;
        for _ in 0..30 {
            if let Some(reserved) = store.reserve_roster_slot(AgeGroup::U8).await.unwrap() {
                assert_eq!(reserved, id);
                successes += 1;
            }
        }

        assert_eq!(successes, ROSTER_CAPACITY - 3);
        let stored = store.find_team(id).await.unwrap().unwrap();
        assert_eq!(stored.roster_count, ROSTER_CAPACITY);
    }

    #[tokio::test]
    async fn reservation_on_empty_bucket_mutates_nothing() {
        let store = MemoryClubStore::new();
        store
            .insert_team(team("Thunder", AgeGroup::U10, 0, 1))
            .await
            .unwrap();

        assert!(
            store
                .reserve_roster_slot(AgeGroup::U6)
                .await
                .unwrap()
                .is_none()
        );
        let teams = store.list_teams().await.unwrap();
        assert_eq!(teams[0].roster_count, 0);
    }

    #[tokio::test]
    async fn reservation_on_full_bucket_returns_none() {
        let store = MemoryClubStore::new();
        store
            .insert_team(team("Full", AgeGroup::U12, ROSTER_CAPACITY, 1))
            .await
            .unwrap();

        assert!(
            store
                .reserve_roster_slot(AgeGroup::U12)
                .await
                .unwrap()
                .is_none()
        );
        let teams = store.list_teams().await.unwrap();
        assert_eq!(teams[0].roster_count, ROSTER_CAPACITY);
    }

    #[tokio::test]
    async fn earliest_created_team_wins_the_tie_break() {
        let store = MemoryClubStore::new();
        let younger = team("Younger", AgeGroup::U10, 0, 200);
        let older = team("Older", AgeGroup::U10, 0, 100);
        let older_id = older.id;
        store.insert_team(younger).await.unwrap();
        store.insert_team(older).await.unwrap();

        let reserved = store
            .reserve_roster_slot(AgeGroup::U10)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reserved, older_id);
    }

    #[tokio::test]
    async fn concurrent_reservations_never_exceed_capacity() {
        let store = MemoryClubStore::new();
        let first = team("First", AgeGroup::U8, 0, 1);
        let second = team("Second", AgeGroup::U8, 10, 2);
        store.insert_team(first).await.unwrap();
        store.insert_team(second).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..64 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.reserve_roster_slot(AgeGroup::U8).await.unwrap()
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_some() {
                successes += 1;
            }
        }

        // 15 free slots on the first team plus 5 on the second.
        assert_eq!(successes, 20);
        for stored in store.list_teams().await.unwrap() {
            assert!(stored.roster_count <= ROSTER_CAPACITY);
        }
    }
}
