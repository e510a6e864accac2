use mongodb::bson::{Binary, DateTime, Document, doc, spec::BinarySubtype};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dao::models::{AgeGroup, GameEntity, GameStatus, NewsEntity, PlayerEntity, TeamEntity};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoPlayerDocument {
    #[serde(rename = "_id")]
    id: Uuid,
    name: String,
    age: i64,
    age_group: AgeGroup,
    guardian_name: String,
    guardian_email: String,
    guardian_phone: String,
    team_id: Option<Uuid>,
    created_at: DateTime,
}

impl From<PlayerEntity> for MongoPlayerDocument {
    fn from(value: PlayerEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            age: value.age,
            age_group: value.age_group,
            guardian_name: value.guardian_name,
            guardian_email: value.guardian_email,
            guardian_phone: value.guardian_phone,
            team_id: value.team_id,
            created_at: DateTime::from_system_time(value.created_at),
        }
    }
}

impl From<MongoPlayerDocument> for PlayerEntity {
    fn from(value: MongoPlayerDocument) -> Self {
        Self {
            id: value.id,
            name: value.name,
            age: value.age,
            age_group: value.age_group,
            guardian_name: value.guardian_name,
            guardian_email: value.guardian_email,
            guardian_phone: value.guardian_phone,
            team_id: value.team_id,
            created_at: value.created_at.to_system_time(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoTeamDocument {
    #[serde(rename = "_id")]
    id: Uuid,
    name: String,
    age_group: AgeGroup,
    coach_name: Option<String>,
    coach_email: Option<String>,
    roster_count: i64,
    created_at: DateTime,
}

impl From<TeamEntity> for MongoTeamDocument {
    fn from(value: TeamEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            age_group: value.age_group,
            coach_name: value.coach_name,
            coach_email: value.coach_email,
            roster_count: value.roster_count,
            created_at: DateTime::from_system_time(value.created_at),
        }
    }
}

impl From<MongoTeamDocument> for TeamEntity {
    fn from(value: MongoTeamDocument) -> Self {
        Self {
            id: value.id,
            name: value.name,
            age_group: value.age_group,
            coach_name: value.coach_name,
            coach_email: value.coach_email,
            roster_count: value.roster_count,
            created_at: value.created_at.to_system_time(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoGameDocument {
    #[serde(rename = "_id")]
    id: Uuid,
    home_team_id: Uuid,
    away_team_id: Uuid,
    scheduled_at: DateTime,
    location: String,
    status: GameStatus,
    home_score: Option<i64>,
    away_score: Option<i64>,
    created_at: DateTime,
}

impl From<GameEntity> for MongoGameDocument {
    fn from(value: GameEntity) -> Self {
        Self {
            id: value.id,
            home_team_id: value.home_team_id,
            away_team_id: value.away_team_id,
            scheduled_at: DateTime::from_system_time(value.scheduled_at),
            location: value.location,
            status: value.status,
            home_score: value.home_score,
            away_score: value.away_score,
            created_at: DateTime::from_system_time(value.created_at),
        }
    }
}

impl From<MongoGameDocument> for GameEntity {
    fn from(value: MongoGameDocument) -> Self {
        Self {
            id: value.id,
            home_team_id: value.home_team_id,
            away_team_id: value.away_team_id,
            scheduled_at: value.scheduled_at.to_system_time(),
            location: value.location,
            status: value.status,
            home_score: value.home_score,
            away_score: value.away_score,
            created_at: value.created_at.to_system_time(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoNewsDocument {
    #[serde(rename = "_id")]
    id: Uuid,
    title: String,
    body: String,
    author: String,
    important: bool,
    created_at: DateTime,
}

impl From<NewsEntity> for MongoNewsDocument {
    fn from(value: NewsEntity) -> Self {
        Self {
            id: value.id,
            title: value.title,
            body: value.body,
            author: value.author,
            important: value.important,
            created_at: DateTime::from_system_time(value.created_at),
        }
    }
}

impl From<MongoNewsDocument> for NewsEntity {
    fn from(value: MongoNewsDocument) -> Self {
        Self {
            id: value.id,
            title: value.title,
            body: value.body,
            author: value.author,
            important: value.important,
            created_at: value.created_at.to_system_time(),
        }
    }
}

pub fn uuid_as_binary(id: Uuid) -> Binary {
    Binary {
        subtype: BinarySubtype::Uuid,
        bytes: id.into_bytes().to_vec(),
    }
}

pub fn doc_id(id: Uuid) -> Document {
    doc! {"_id": uuid_as_binary(id)}
}
