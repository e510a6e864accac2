use std::time::SystemTime;

use tracing::info;
use uuid::Uuid;

use crate::{
    dao::models::{AgeGroup, PlayerEntity},
    dto::player::{PlayerResponse, RegisterPlayerRequest},
    error::ServiceError,
    state::SharedState,
};

/// Register a player and auto-assign them to a team when one has room.
///
/// The bucket is derived from the age, a roster slot is reserved through the
/// store's atomic conditional update, and the player record is persisted once
/// with the reservation outcome. A full (or empty) bucket is a normal outcome:
/// the player is registered without a team.
///
/// Known limitation: when the player insert fails after a successful
/// reservation, the slot stays consumed — the failure is surfaced to the
/// caller and a retried registration would consume a second slot.
pub async fn register_player(
    state: &SharedState,
    request: RegisterPlayerRequest,
) -> Result<PlayerResponse, ServiceError> {
    let store = state.require_store().await?;

    let age_group = AgeGroup::classify(request.age);
    let team_id = store.reserve_roster_slot(age_group).await?;

    let player = PlayerEntity {
        id: Uuid::new_v4(),
        name: request.name,
        age: request.age,
        age_group,
        guardian_name: request.guardian_name,
        guardian_email: request.guardian_email,
        guardian_phone: request.guardian_phone,
        team_id,
        created_at: SystemTime::now(),
    };

    store.insert_player(player.clone()).await?;

    match team_id {
        Some(team_id) => info!(player = %player.id, team = %team_id, bucket = age_group.as_str(), "player registered and assigned"),
        None => info!(player = %player.id, bucket = age_group.as_str(), "player registered without a team"),
    }

    Ok(player.into())
}

/// List registered players.
pub async fn list_players(state: &SharedState) -> Result<Vec<PlayerResponse>, ServiceError> {
    let store = state.require_store().await?;
    let players = store.list_players().await?;
    Ok(players.into_iter().map(Into::into).collect())
}

/// Fetch one player by id.
pub async fn get_player(state: &SharedState, id: Uuid) -> Result<PlayerResponse, ServiceError> {
    let store = state.require_store().await?;
    let Some(player) = store.find_player(id).await? else {
        return Err(ServiceError::NotFound(format!("player `{id}` not found")));
    };
    Ok(player.into())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::dao::{
        memory::MemoryClubStore,
        models::{ROSTER_CAPACITY, TeamEntity},
        storage::ClubStore,
    };
    use crate::state::AppState;

    fn request(name: &str, age: i64) -> RegisterPlayerRequest {
        RegisterPlayerRequest {
            name: name.to_owned(),
            age,
            guardian_name: "Sam Doe".to_owned(),
            guardian_email: "sam@example.com".to_owned(),
            guardian_phone: "555-0100".to_owned(),
        }
    }

    fn u8_team(name: &str) -> TeamEntity {
        TeamEntity {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            age_group: AgeGroup::U8,
            coach_name: None,
            coach_email: None,
            roster_count: 0,
            created_at: SystemTime::now(),
        }
    }

    async fn state_with_store() -> (SharedState, MemoryClubStore) {
        let state = AppState::new();
        let store = MemoryClubStore::new();
        state.install_store(Arc::new(store.clone())).await;
        (state, store)
    }

    #[tokio::test]
    async fn registration_fails_in_degraded_mode() {
        let state = AppState::new();
        let err = register_player(&state, request("Alex", 7)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Degraded));
    }

    #[tokio::test]
    async fn registered_player_carries_the_classified_bucket() {
        let (state, _store) = state_with_store().await;
        let player = register_player(&state, request("Alex", 9)).await.unwrap();
        assert_eq!(player.age_group, AgeGroup::classify(9));
        assert_eq!(player.age_group, AgeGroup::U10);
    }

    #[tokio::test]
    async fn player_without_matching_team_stays_unassigned() {
        let (state, _store) = state_with_store().await;
        let player = register_player(&state, request("Alex", 7)).await.unwrap();
        assert!(player.team_id.is_none());

        let stored = get_player(&state, player.id).await.unwrap();
        assert!(stored.team_id.is_none());
    }

    #[tokio::test]
    async fn player_is_assigned_when_a_slot_is_free() {
        let (state, store) = state_with_store().await;
        let team = u8_team("Lightning");
        let team_id = team.id;
        store.insert_team(team).await.unwrap();

        let player = register_player(&state, request("Alex", 7)).await.unwrap();
        assert_eq!(player.team_id, Some(team_id));

        let stored_team = store.find_team(team_id).await.unwrap().unwrap();
        assert_eq!(stored_team.roster_count, 1);
    }

    #[tokio::test]
    async fn sixteenth_registration_overflows_the_roster() {
        let (state, store) = state_with_store().await;
        let team = u8_team("Lightning");
        let team_id = team.id;
        store.insert_team(team).await.unwrap();

        for n in 0..ROSTER_CAPACITY {
            let player = register_player(&state, request(&format!("Kid {n}"), 7))
                .await
                .unwrap();
            assert_eq!(player.team_id, Some(team_id));
        }

        let overflow = register_player(&state, request("Kid 16", 7)).await.unwrap();
        assert!(overflow.team_id.is_none());

        let stored_team = store.find_team(team_id).await.unwrap().unwrap();
        assert_eq!(stored_team.roster_count, ROSTER_CAPACITY);
        assert_eq!(
            store.list_team_players(team_id).await.unwrap().len(),
            ROSTER_CAPACITY as usize
        );
    }

    #[tokio::test]
    async fn assignment_respects_the_bucket() {
        let (state, store) = state_with_store().await;
        store.insert_team(u8_team("Lightning")).await.unwrap();

        // Age 13 classifies to U14; the only team recruits U8.
        let player = register_player(&state, request("Teen", 13)).await.unwrap();
        assert_eq!(player.age_group, AgeGroup::U14);
        assert!(player.team_id.is_none());
    }
}
