use std::sync::Arc;
use std::time::SystemTime;

use futures::{TryStreamExt, future::BoxFuture};
use mongodb::{
    Collection, Database,
    bson::{DateTime, doc},
    options::IndexOptions,
};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{
    config::MongoConfig,
    connection::establish_connection,
    error::{MongoDaoError, MongoResult},
    models::{
        MongoGameDocument, MongoNewsDocument, MongoPlayerDocument, MongoTeamDocument, doc_id,
        uuid_as_binary,
    },
};
use crate::dao::{
    models::{AgeGroup, GameEntity, NewsEntity, PlayerEntity, ROSTER_CAPACITY, TeamEntity},
    storage::{ClubStore, LIST_LIMIT, StorageResult},
};

const PLAYER_COLLECTION: &str = "players";
const TEAM_COLLECTION: &str = "teams";
const GAME_COLLECTION: &str = "games";
const NEWS_COLLECTION: &str = "news";

/// MongoDB-backed implementation of [`ClubStore`].
///
/// The roster reservation relies on `findOneAndUpdate`: the capacity bound is
/// part of the filter and the increment part of the same command, so the
/// check and the write are a single server-side step even across processes.
#[derive(Clone)]
pub struct MongoClubStore {
    inner: Arc<MongoInner>,
}

struct MongoInner {
    state: RwLock<MongoState>,
    config: MongoConfig,
}

struct MongoState {
    database: Database,
}

impl MongoInner {
    async fn ping(&self) -> MongoResult<()> {
        let database = {
            let guard = self.state.read().await;
            guard.database.clone()
        };

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|source| MongoDaoError::HealthPing { source })?;
        Ok(())
    }

    async fn reconnect(&self) -> MongoResult<()> {
        let database =
            establish_connection(&self.config.options, &self.config.database_name).await?;
        let mut guard = self.state.write().await;
        guard.database = database;
        Ok(())
    }
}

impl MongoClubStore {
    /// Establish a connection to MongoDB and ensure indexes are present.
    pub async fn connect(config: MongoConfig) -> MongoResult<Self> {
        let database = establish_connection(&config.options, &config.database_name).await?;

        let inner = Arc::new(MongoInner {
            state: RwLock::new(MongoState { database }),
            config,
        });

        let store = Self { inner };
        store.ensure_indexes().await?;
        Ok(store)
    }

    async fn ensure_indexes(&self) -> MongoResult<()> {
        let database = self.database().await;

        // The reservation filters on (age_group, roster_count) and sorts by
        // created_at; cover all three.
        let team_collection = database.collection::<MongoTeamDocument>(TEAM_COLLECTION);
        let team_index = mongodb::IndexModel::builder()
            .keys(doc! {"age_group": 1, "roster_count": 1, "created_at": 1})
            .options(
                IndexOptions::builder()
                    .name(Some("team_roster_idx".to_owned()))
                    .build(),
            )
            .build();
        team_collection
            .create_index(team_index)
            .await
            .map_err(|source| MongoDaoError::EnsureIndex {
                collection: TEAM_COLLECTION,
                index: "age_group,roster_count,created_at",
                source,
            })?;

        // Upcoming-game counts and the game listing both query by date.
        let game_collection = database.collection::<MongoGameDocument>(GAME_COLLECTION);
        let game_index = mongodb::IndexModel::builder()
            .keys(doc! {"scheduled_at": 1})
            .options(
                IndexOptions::builder()
                    .name(Some("game_scheduled_idx".to_owned()))
                    .build(),
            )
            .build();
        game_collection
            .create_index(game_index)
            .await
            .map_err(|source| MongoDaoError::EnsureIndex {
                collection: GAME_COLLECTION,
                index: "scheduled_at",
                source,
            })?;

        // Team roster listings filter players by their team reference.
        let player_collection = database.collection::<MongoPlayerDocument>(PLAYER_COLLECTION);
        let player_index = mongodb::IndexModel::builder()
            .keys(doc! {"team_id": 1})
            .options(
                IndexOptions::builder()
                    .name(Some("player_team_idx".to_owned()))
                    .build(),
            )
            .build();
        player_collection
            .create_index(player_index)
            .await
            .map_err(|source| MongoDaoError::EnsureIndex {
                collection: PLAYER_COLLECTION,
                index: "team_id",
                source,
            })?;

        Ok(())
    }

    async fn database(&self) -> Database {
        let guard = self.inner.state.read().await;
        guard.database.clone()
    }

    async fn player_collection(&self) -> Collection<MongoPlayerDocument> {
        self.database()
            .await
            .collection::<MongoPlayerDocument>(PLAYER_COLLECTION)
    }

    async fn team_collection(&self) -> Collection<MongoTeamDocument> {
        self.database()
            .await
            .collection::<MongoTeamDocument>(TEAM_COLLECTION)
    }

    async fn game_collection(&self) -> Collection<MongoGameDocument> {
        self.database()
            .await
            .collection::<MongoGameDocument>(GAME_COLLECTION)
    }

    async fn news_collection(&self) -> Collection<MongoNewsDocument> {
        self.database()
            .await
            .collection::<MongoNewsDocument>(NEWS_COLLECTION)
    }

    async fn insert_player(&self, player: PlayerEntity) -> MongoResult<()> {
        let id = player.id;
        let document: MongoPlayerDocument = player.into();
        self.player_collection()
            .await
            .insert_one(&document)
            .await
            .map_err(|source| MongoDaoError::Insert {
                collection: PLAYER_COLLECTION,
                id,
                source,
            })?;
        Ok(())
    }

    async fn find_player(&self, id: Uuid) -> MongoResult<Option<PlayerEntity>> {
        let document = self
            .player_collection()
            .await
            .find_one(doc_id(id))
            .await
            .map_err(|source| MongoDaoError::Load {
                collection: PLAYER_COLLECTION,
                id,
                source,
            })?;
        Ok(document.map(Into::into))
    }

    async fn list_players(&self) -> MongoResult<Vec<PlayerEntity>> {
        let documents: Vec<MongoPlayerDocument> = self
            .player_collection()
            .await
            .find(doc! {})
            .limit(LIST_LIMIT as i64)
            .await
            .map_err(|source| MongoDaoError::List {
                collection: PLAYER_COLLECTION,
                source,
            })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::List {
                collection: PLAYER_COLLECTION,
                source,
            })?;
        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn list_team_players(&self, team_id: Uuid) -> MongoResult<Vec<PlayerEntity>> {
        let documents: Vec<MongoPlayerDocument> = self
            .player_collection()
            .await
            .find(doc! {"team_id": uuid_as_binary(team_id)})
            .limit(LIST_LIMIT as i64)
            .await
            .map_err(|source| MongoDaoError::List {
                collection: PLAYER_COLLECTION,
                source,
            })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::List {
                collection: PLAYER_COLLECTION,
                source,
            })?;
        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn insert_team(&self, team: TeamEntity) -> MongoResult<()> {
        let id = team.id;
        let document: MongoTeamDocument = team.into();
        self.team_collection()
            .await
            .insert_one(&document)
            .await
            .map_err(|source| MongoDaoError::Insert {
                collection: TEAM_COLLECTION,
                id,
                source,
            })?;
        Ok(())
    }

    async fn find_team(&self, id: Uuid) -> MongoResult<Option<TeamEntity>> {
        let document = self
            .team_collection()
            .await
            .find_one(doc_id(id))
            .await
            .map_err(|source| MongoDaoError::Load {
                collection: TEAM_COLLECTION,
                id,
                source,
            })?;
        Ok(document.map(Into::into))
    }

    async fn list_teams(&self) -> MongoResult<Vec<TeamEntity>> {
        let documents: Vec<MongoTeamDocument> = self
            .team_collection()
            .await
            .find(doc! {})
            .limit(LIST_LIMIT as i64)
            .await
            .map_err(|source| MongoDaoError::List {
                collection: TEAM_COLLECTION,
                source,
            })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::List {
                collection: TEAM_COLLECTION,
                source,
            })?;
        Ok(documents.into_iter().map(Into::into).collect())
    }

    /// Claim one roster slot with a single conditional update.
    ///
    /// The capacity bound lives in the filter and the increment in the update
    /// document, so the server applies both atomically; two concurrent
    /// registrations can never both consume the fifteenth slot. No document
    /// matching means the bucket is exhausted, which maps to `None`.
    async fn reserve_roster_slot(&self, age_group: AgeGroup) -> MongoResult<Option<Uuid>> {
        let filter = doc! {
            "age_group": age_group.as_str(),
            "roster_count": doc! { "$lt": ROSTER_CAPACITY },
        };
        let update = doc! { "$inc": doc! { "roster_count": 1 } };

        let reserved = self
            .team_collection()
            .await
            .find_one_and_update(filter, update)
            .sort(doc! { "created_at": 1, "_id": 1 })
            .await
            .map_err(|source| MongoDaoError::ReserveSlot {
                age_group: age_group.as_str(),
                source,
            })?;

        Ok(reserved.map(|team| TeamEntity::from(team).id))
    }

    async fn insert_game(&self, game: GameEntity) -> MongoResult<()> {
        let id = game.id;
        let document: MongoGameDocument = game.into();
        self.game_collection()
            .await
            .insert_one(&document)
            .await
            .map_err(|source| MongoDaoError::Insert {
                collection: GAME_COLLECTION,
                id,
                source,
            })?;
        Ok(())
    }

    async fn find_game(&self, id: Uuid) -> MongoResult<Option<GameEntity>> {
        let document = self
            .game_collection()
            .await
            .find_one(doc_id(id))
            .await
            .map_err(|source| MongoDaoError::Load {
                collection: GAME_COLLECTION,
                id,
                source,
            })?;
        Ok(document.map(Into::into))
    }

    async fn list_games(&self) -> MongoResult<Vec<GameEntity>> {
        let documents: Vec<MongoGameDocument> = self
            .game_collection()
            .await
            .find(doc! {})
            .sort(doc! {"scheduled_at": 1})
            .limit(LIST_LIMIT as i64)
            .await
            .map_err(|source| MongoDaoError::List {
                collection: GAME_COLLECTION,
                source,
            })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::List {
                collection: GAME_COLLECTION,
                source,
            })?;
        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn insert_news(&self, news: NewsEntity) -> MongoResult<()> {
        let id = news.id;
        let document: MongoNewsDocument = news.into();
        self.news_collection()
            .await
            .insert_one(&document)
            .await
            .map_err(|source| MongoDaoError::Insert {
                collection: NEWS_COLLECTION,
                id,
                source,
            })?;
        Ok(())
    }

    async fn list_news(&self) -> MongoResult<Vec<NewsEntity>> {
        let documents: Vec<MongoNewsDocument> = self
            .news_collection()
            .await
            .find(doc! {})
            .sort(doc! {"created_at": -1})
            .limit(LIST_LIMIT as i64)
            .await
            .map_err(|source| MongoDaoError::List {
                collection: NEWS_COLLECTION,
                source,
            })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::List {
                collection: NEWS_COLLECTION,
                source,
            })?;
        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn count(&self, collection: &'static str) -> MongoResult<u64> {
        self.database()
            .await
            .collection::<mongodb::bson::Document>(collection)
            .count_documents(doc! {})
            .await
            .map_err(|source| MongoDaoError::Count { collection, source })
    }

    async fn count_upcoming_games(&self, after: SystemTime) -> MongoResult<u64> {
        self.game_collection()
            .await
            .count_documents(doc! {"scheduled_at": doc! {"$gt": DateTime::from_system_time(after)}})
            .await
            .map_err(|source| MongoDaoError::Count {
                collection: GAME_COLLECTION,
                source,
            })
    }
}

impl ClubStore for MongoClubStore {
    fn insert_player(&self, player: PlayerEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.insert_player(player).await.map_err(Into::into) })
    }

    fn find_player(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<PlayerEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_player(id).await.map_err(Into::into) })
    }

    fn list_players(&self) -> BoxFuture<'static, StorageResult<Vec<PlayerEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_players().await.map_err(Into::into) })
    }

    fn list_team_players(
        &self,
        team_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Vec<PlayerEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_team_players(team_id).await.map_err(Into::into) })
    }

    fn insert_team(&self, team: TeamEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.insert_team(team).await.map_err(Into::into) })
    }

    fn find_team(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<TeamEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_team(id).await.map_err(Into::into) })
    }

    fn list_teams(&self) -> BoxFuture<'static, StorageResult<Vec<TeamEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_teams().await.map_err(Into::into) })
    }

    fn reserve_roster_slot(
        &self,
        age_group: AgeGroup,
    ) -> BoxFuture<'static, StorageResult<Option<Uuid>>> {
        let store = self.clone();
        Box::pin(async move { store.reserve_roster_slot(age_group).await.map_err(Into::into) })
    }

    fn insert_game(&self, game: GameEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.insert_game(game).await.map_err(Into::into) })
    }

    fn find_game(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_game(id).await.map_err(Into::into) })
    }

    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_games().await.map_err(Into::into) })
    }

    fn insert_news(&self, news: NewsEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.insert_news(news).await.map_err(Into::into) })
    }

    fn list_news(&self) -> BoxFuture<'static, StorageResult<Vec<NewsEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_news().await.map_err(Into::into) })
    }

    fn count_players(&self) -> BoxFuture<'static, StorageResult<u64>> {
        let store = self.clone();
        Box::pin(async move { store.count(PLAYER_COLLECTION).await.map_err(Into::into) })
    }

    fn count_teams(&self) -> BoxFuture<'static, StorageResult<u64>> {
        let store = self.clone();
        Box::pin(async move { store.count(TEAM_COLLECTION).await.map_err(Into::into) })
    }

    fn count_upcoming_games(&self, after: SystemTime) -> BoxFuture<'static, StorageResult<u64>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .count_upcoming_games(after)
                .await
                .map_err(Into::into)
        })
    }

    fn count_news(&self) -> BoxFuture<'static, StorageResult<u64>> {
        let store = self.clone();
        Box::pin(async move { store.count(NEWS_COLLECTION).await.map_err(Into::into) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.inner.ping().await.map_err(Into::into) })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.inner.reconnect().await.map_err(Into::into) })
    }
}
