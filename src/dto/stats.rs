use serde::Serialize;
use utoipa::ToSchema;

use crate::dao::models::StatsSnapshot;

/// Dashboard counters returned by the `/stats` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    /// Total registered players.
    pub total_players: u64,
    /// Total teams.
    pub total_teams: u64,
    /// Games scheduled strictly after the snapshot instant.
    pub upcoming_games: u64,
    /// Total news items.
    pub recent_news: u64,
}

impl From<StatsSnapshot> for StatsResponse {
    fn from(snapshot: StatsSnapshot) -> Self {
        Self {
            total_players: snapshot.player_count,
            total_teams: snapshot.team_count,
            upcoming_games: snapshot.upcoming_game_count,
            recent_news: snapshot.news_count,
        }
    }
}
