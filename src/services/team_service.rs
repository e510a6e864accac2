use std::time::SystemTime;

use uuid::Uuid;

use crate::{
    dao::models::TeamEntity,
    dto::{
        player::PlayerResponse,
        team::{CreateTeamRequest, TeamResponse},
    },
    error::ServiceError,
    state::SharedState,
};

/// Create a team with an empty roster. Teams are created independently of
/// players and never deleted.
pub async fn create_team(
    state: &SharedState,
    request: CreateTeamRequest,
) -> Result<TeamResponse, ServiceError> {
    let store = state.require_store().await?;

    let team = TeamEntity {
        id: Uuid::new_v4(),
        name: request.name,
        age_group: request.age_group,
        coach_name: request.coach_name,
        coach_email: request.coach_email,
        roster_count: 0,
        created_at: SystemTime::now(),
    };

    store.insert_team(team.clone()).await?;
    Ok(team.into())
}

/// List teams.
pub async fn list_teams(state: &SharedState) -> Result<Vec<TeamResponse>, ServiceError> {
    let store = state.require_store().await?;
    let teams = store.list_teams().await?;
    Ok(teams.into_iter().map(Into::into).collect())
}

/// Fetch one team by id.
pub async fn get_team(state: &SharedState, id: Uuid) -> Result<TeamResponse, ServiceError> {
    let store = state.require_store().await?;
    let Some(team) = store.find_team(id).await? else {
        return Err(ServiceError::NotFound(format!("team `{id}` not found")));
    };
    Ok(team.into())
}

/// List players assigned to a team.
pub async fn get_team_players(
    state: &SharedState,
    id: Uuid,
) -> Result<Vec<PlayerResponse>, ServiceError> {
    let store = state.require_store().await?;
    let players = store.list_team_players(id).await?;
    Ok(players.into_iter().map(Into::into).collect())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::dao::{memory::MemoryClubStore, models::AgeGroup};
    use crate::state::AppState;

    #[tokio::test]
    async fn created_team_starts_with_an_empty_roster() {
        let state = AppState::new();
        state
            .install_store(Arc::new(MemoryClubStore::new()))
            .await;

        let team = create_team(
            &state,
            CreateTeamRequest {
                name: "Thunder".to_owned(),
                age_group: AgeGroup::U10,
                coach_name: Some("Pat Coach".to_owned()),
                coach_email: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(team.roster_count, 0);
        let fetched = get_team(&state, team.id).await.unwrap();
        assert_eq!(fetched.name, "Thunder");
    }

    #[tokio::test]
    async fn unknown_team_is_a_distinct_not_found_outcome() {
        let state = AppState::new();
        state
            .install_store(Arc::new(MemoryClubStore::new()))
            .await;

        let err = get_team(&state, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
