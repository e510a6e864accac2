use std::{future::Future, sync::Arc, time::Duration};

use tokio::time::sleep;
use tracing::{info, warn};

use crate::{
    dao::storage::{ClubStore, StorageError},
    state::SharedState,
};

const INITIAL_DELAY: Duration = Duration::from_millis(1_000);
const MAX_DELAY: Duration = Duration::from_secs(10);
const HEALTH_POLL_INTERVAL: Duration = Duration::from_secs(5);
const MAX_RECONNECT_ATTEMPTS: u32 = 3;

/// Connect to the storage backend and keep the shared state in degraded mode
/// while it is unavailable.
///
/// A failed health check immediately clears the installed store, so handlers
/// fail fast with a degraded-mode error instead of queueing on a dead
/// backend; the store is reinstalled once a reconnect attempt succeeds.
pub async fn run<F, Fut>(state: SharedState, mut connect: F)
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<Arc<dyn ClubStore>, StorageError>> + Send,
{
    let mut delay = INITIAL_DELAY;

    loop {
        match connect().await {
            Ok(store) => {
                state.install_store(store.clone()).await;
                info!("storage connection established; leaving degraded mode");
                delay = INITIAL_DELAY;

                loop {
                    match store.health_check().await {
                        Ok(()) => sleep(HEALTH_POLL_INTERVAL).await,
                        Err(err) => {
                            warn!(error = %err, "storage health check failed; entering degraded mode");
                            state.clear_store().await;

                            if reconnect_with_backoff(store.as_ref()).await {
                                state.install_store(store.clone()).await;
                                info!("storage reconnected; leaving degraded mode");
                                sleep(HEALTH_POLL_INTERVAL).await;
                            } else {
                                warn!(
                                    "exhausted storage reconnect attempts; staying in degraded mode"
                                );
                                break;
                            }
                        }
                    }
                }

                sleep(delay).await;
                delay = (delay * 2).min(MAX_DELAY);
            }
            Err(err) => {
                warn!(error = %err, "storage connection attempt failed");
                sleep(delay).await;
                delay = (delay * 2).min(MAX_DELAY);
            }
        }
    }
}

async fn reconnect_with_backoff(store: &dyn ClubStore) -> bool {
    let mut attempt = 0;
    let mut delay = INITIAL_DELAY;

    while attempt < MAX_RECONNECT_ATTEMPTS {
        match store.try_reconnect().await {
            Ok(()) => {
                info!("storage reconnection succeeded after health check failure");
                return true;
            }
            Err(err) => {
                warn!(attempt, error = %err, "storage reconnect attempt failed");
                attempt += 1;
                sleep(delay).await;
                delay = (delay * 2).min(MAX_DELAY);
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
    use std::time::SystemTime;

    use futures::future::BoxFuture;
    use uuid::Uuid;

    use super::*;
    use crate::dao::{
        models::{AgeGroup, GameEntity, NewsEntity, PlayerEntity, TeamEntity},
        storage::StorageResult,
    };
    use crate::state::AppState;

    /// Store whose health can be flipped from the outside; reconnects heal it.
    #[derive(Clone, Default)]
    struct FlakyStore {
        healthy: Arc<AtomicBool>,
        reconnects: Arc<AtomicU32>,
    }

    impl FlakyStore {
        fn new() -> Self {
            Self {
                healthy: Arc::new(AtomicBool::new(true)),
                reconnects: Arc::new(AtomicU32::new(0)),
            }
        }

        fn fail(&self) {
            self.healthy.store(false, Ordering::SeqCst);
        }

        fn probe(&self) -> StorageResult<()> {
            if self.healthy.load(Ordering::SeqCst) {
                Ok(())
            } else {
                Err(StorageError::unavailable(
                    "backend down".into(),
                    std::io::Error::other("connection refused"),
                ))
            }
        }
    }

    impl ClubStore for FlakyStore {
        fn insert_player(&self, _player: PlayerEntity) -> BoxFuture<'static, StorageResult<()>> {
            unimplemented!("not exercised")
        }
        fn find_player(
            &self,
            _id: Uuid,
        ) -> BoxFuture<'static, StorageResult<Option<PlayerEntity>>> {
            unimplemented!("not exercised")
        }
        fn list_players(&self) -> BoxFuture<'static, StorageResult<Vec<PlayerEntity>>> {
            unimplemented!("not exercised")
        }
        fn list_team_players(
            &self,
            _team_id: Uuid,
        ) -> BoxFuture<'static, StorageResult<Vec<PlayerEntity>>> {
            unimplemented!("not exercised")
        }
        fn insert_team(&self, _team: TeamEntity) -> BoxFuture<'static, StorageResult<()>> {
            unimplemented!("not exercised")
        }
        fn find_team(&self, _id: Uuid) -> BoxFuture<'static, StorageResult<Option<TeamEntity>>> {
            unimplemented!("not exercised")
        }
        fn list_teams(&self) -> BoxFuture<'static, StorageResult<Vec<TeamEntity>>> {
            unimplemented!("not exercised")
        }
        fn reserve_roster_slot(
            &self,
            _age_group: AgeGroup,
        ) -> BoxFuture<'static, StorageResult<Option<Uuid>>> {
            unimplemented!("not exercised")
        }
        fn insert_game(&self, _game: GameEntity) -> BoxFuture<'static, StorageResult<()>> {
            unimplemented!("not exercised")
        }
        fn find_game(&self, _id: Uuid) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
            unimplemented!("not exercised")
        }
        fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
            unimplemented!("not exercised")
        }
        fn insert_news(&self, _news: NewsEntity) -> BoxFuture<'static, StorageResult<()>> {
            unimplemented!("not exercised")
        }
        fn list_news(&self) -> BoxFuture<'static, StorageResult<Vec<NewsEntity>>> {
            unimplemented!("not exercised")
        }
        fn count_players(&self) -> BoxFuture<'static, StorageResult<u64>> {
            unimplemented!("not exercised")
        }
        fn count_teams(&self) -> BoxFuture<'static, StorageResult<u64>> {
            unimplemented!("not exercised")
        }
        fn count_upcoming_games(
            &self,
            _after: SystemTime,
        ) -> BoxFuture<'static, StorageResult<u64>> {
            unimplemented!("not exercised")
        }
        fn count_news(&self) -> BoxFuture<'static, StorageResult<u64>> {
            unimplemented!("not exercised")
        }
        fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
            let store = self.clone();
            Box::pin(async move { store.probe() })
        }
        fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
            let store = self.clone();
            Box::pin(async move {
                store.reconnects.fetch_add(1, Ordering::SeqCst);
                store.healthy.store(true, Ordering::SeqCst);
                Ok(())
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn failed_health_check_degrades_until_reconnect() {
        let state = AppState::new();
        let store = FlakyStore::new();

        let supervisor_store = store.clone();
        tokio::spawn(run(state.clone(), move || {
            let store = supervisor_store.clone();
            async move { Ok(Arc::new(store) as Arc<dyn ClubStore>) }
        }));

        // Let the supervisor connect and install the store.
        sleep(Duration::from_millis(10)).await;
        assert!(!state.is_degraded().await);

        // Break the backend and wait past the next health poll.
        store.fail();
        sleep(HEALTH_POLL_INTERVAL + Duration::from_millis(10)).await;

        // try_reconnect heals the backend on its first attempt, so after the
        // backoff window the state must have left degraded mode again.
        sleep(INITIAL_DELAY + Duration::from_millis(10)).await;
        assert!(!state.is_degraded().await);
        assert_eq!(store.reconnects.load(Ordering::SeqCst), 1);
    }
}
