use std::error::Error;
use std::time::SystemTime;

use futures::future::BoxFuture;
use thiserror::Error;
use uuid::Uuid;

use crate::dao::models::{AgeGroup, GameEntity, NewsEntity, PlayerEntity, TeamEntity};

/// Upper bound applied to every list operation; no pagination is offered.
pub const LIST_LIMIT: usize = 1000;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by storage backends regardless of the underlying database.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backend could not be reached or the operation failed in transit.
    #[error("storage unavailable: {message}")]
    Unavailable {
        /// Human readable description of the failed operation.
        message: String,
        /// Backend-specific cause.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StorageError {
    /// Construct an unavailable error from any backend failure.
    pub fn unavailable(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message,
            source: Box::new(source),
        }
    }
}

/// Abstraction over the persistence layer for the four club collections.
///
/// `reserve_roster_slot` is the only operation touching contended mutable
/// state; every implementation must perform the capacity check and the
/// increment as one indivisible step.
pub trait ClubStore: Send + Sync {
    /// Persist a newly registered player.
    fn insert_player(&self, player: PlayerEntity) -> BoxFuture<'static, StorageResult<()>>;
    /// Look up a player by id.
    fn find_player(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<PlayerEntity>>>;
    /// List registered players (bounded prefix).
    fn list_players(&self) -> BoxFuture<'static, StorageResult<Vec<PlayerEntity>>>;
    /// List players assigned to the given team (bounded prefix).
    fn list_team_players(
        &self,
        team_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Vec<PlayerEntity>>>;

    /// Persist a new team.
    fn insert_team(&self, team: TeamEntity) -> BoxFuture<'static, StorageResult<()>>;
    /// Look up a team by id.
    fn find_team(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<TeamEntity>>>;
    /// List teams (bounded prefix).
    fn list_teams(&self) -> BoxFuture<'static, StorageResult<Vec<TeamEntity>>>;

    /// Atomically claim one roster slot on a team recruiting from `age_group`.
    ///
    /// Selects a team whose bucket matches and whose roster count is strictly
    /// below capacity, increments the count in the same step, and returns the
    /// team's id. `None` means every matching team is full or none exists;
    /// that is a normal outcome, not an error, and nothing is mutated.
    /// Among several eligible teams the earliest-created one wins.
    fn reserve_roster_slot(
        &self,
        age_group: AgeGroup,
    ) -> BoxFuture<'static, StorageResult<Option<Uuid>>>;

    /// Persist a new game.
    fn insert_game(&self, game: GameEntity) -> BoxFuture<'static, StorageResult<()>>;
    /// Look up a game by id.
    fn find_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<GameEntity>>>;
    /// List games ordered by scheduled date, soonest first (bounded prefix).
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>>;

    /// Persist a news item.
    fn insert_news(&self, news: NewsEntity) -> BoxFuture<'static, StorageResult<()>>;
    /// List news items, newest first (bounded prefix).
    fn list_news(&self) -> BoxFuture<'static, StorageResult<Vec<NewsEntity>>>;

    /// Count all registered players.
    fn count_players(&self) -> BoxFuture<'static, StorageResult<u64>>;
    /// Count all teams.
    fn count_teams(&self) -> BoxFuture<'static, StorageResult<u64>>;
    /// Count games scheduled strictly later than `after`.
    fn count_upcoming_games(&self, after: SystemTime) -> BoxFuture<'static, StorageResult<u64>>;
    /// Count all news items.
    fn count_news(&self) -> BoxFuture<'static, StorageResult<u64>>;

    /// Probe the backend connection.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
    /// Attempt to re-establish a dropped backend connection.
    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>>;
}
