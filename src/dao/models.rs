use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Maximum number of players a team roster can hold.
pub const ROSTER_CAPACITY: i64 = 15;

/// Age bucket a player falls into, ordered youngest to oldest.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, ToSchema,
)]
pub enum AgeGroup {
    /// Under 6.
    U6,
    /// Under 8.
    U8,
    /// Under 10.
    U10,
    /// Under 12.
    U12,
    /// Under 14 and above (no upper bound).
    U14,
}

impl AgeGroup {
    /// Bucket an age into its group. Total over all integers: anything above 12
    /// lands in the oldest bucket, and negative ages fall through to `U6`
    /// (no validation boundary is defined for them).
    pub fn classify(age: i64) -> Self {
        if age <= 6 {
            AgeGroup::U6
        } else if age <= 8 {
            AgeGroup::U8
        } else if age <= 10 {
            AgeGroup::U10
        } else if age <= 12 {
            AgeGroup::U12
        } else {
            AgeGroup::U14
        }
    }

    /// Wire name of the bucket, matching its serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::U6 => "U6",
            AgeGroup::U8 => "U8",
            AgeGroup::U10 => "U10",
            AgeGroup::U12 => "U12",
            AgeGroup::U14 => "U14",
        }
    }
}

/// Registered player stored in persistence and shared across layers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerEntity {
    /// Stable identifier for the player.
    pub id: Uuid,
    /// Player's display name.
    pub name: String,
    /// Age at registration time.
    pub age: i64,
    /// Bucket derived from `age` at creation; never supplied or recomputed.
    pub age_group: AgeGroup,
    /// Guardian's full name.
    pub guardian_name: String,
    /// Guardian's email address.
    pub guardian_email: String,
    /// Guardian's phone number.
    pub guardian_phone: String,
    /// Team the player was assigned to, if a roster slot was reserved.
    pub team_id: Option<Uuid>,
    /// Registration timestamp.
    pub created_at: SystemTime,
}

/// Team record owning a capacity-bounded roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamEntity {
    /// Stable identifier for the team.
    pub id: Uuid,
    /// Display name chosen for the team.
    pub name: String,
    /// Bucket this team recruits from.
    pub age_group: AgeGroup,
    /// Coach name, when one has been appointed.
    pub coach_name: Option<String>,
    /// Coach contact email.
    pub coach_email: Option<String>,
    /// Number of reserved roster slots. Invariant: `0 <= roster_count <=`
    /// [`ROSTER_CAPACITY`], mutated only by the atomic reservation.
    pub roster_count: i64,
    /// Creation timestamp.
    pub created_at: SystemTime,
}

/// Lifecycle status of a scheduled game.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Game is on the calendar.
    Scheduled,
    /// Game has been played.
    Completed,
    /// Game was called off.
    Cancelled,
}

/// Scheduled game between two teams. Pure storage; no invariant beyond the
/// two team references existing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEntity {
    /// Stable identifier for the game.
    pub id: Uuid,
    /// Team playing at home.
    pub home_team_id: Uuid,
    /// Visiting team.
    pub away_team_id: Uuid,
    /// When the game is scheduled to start.
    pub scheduled_at: SystemTime,
    /// Venue description.
    pub location: String,
    /// Current lifecycle status.
    pub status: GameStatus,
    /// Home team score, once known.
    pub home_score: Option<i64>,
    /// Away team score, once known.
    pub away_score: Option<i64>,
    /// Creation timestamp.
    pub created_at: SystemTime,
}

/// Club news item. Pure storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsEntity {
    /// Stable identifier for the news item.
    pub id: Uuid,
    /// Headline.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Author display name.
    pub author: String,
    /// Whether the item should be highlighted.
    pub important: bool,
    /// Publication timestamp.
    pub created_at: SystemTime,
}

/// Counts shown on the club dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Total registered players.
    pub player_count: u64,
    /// Total teams.
    pub team_count: u64,
    /// Games strictly later than the instant the snapshot was taken for.
    pub upcoming_game_count: u64,
    /// Total news items.
    pub news_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_bucket_boundaries() {
        assert_eq!(AgeGroup::classify(6), AgeGroup::U6);
        assert_eq!(AgeGroup::classify(7), AgeGroup::U8);
        assert_eq!(AgeGroup::classify(8), AgeGroup::U8);
        assert_eq!(AgeGroup::classify(9), AgeGroup::U10);
        assert_eq!(AgeGroup::classify(10), AgeGroup::U10);
        assert_eq!(AgeGroup::classify(11), AgeGroup::U12);
        assert_eq!(AgeGroup::classify(12), AgeGroup::U12);
        assert_eq!(AgeGroup::classify(13), AgeGroup::U14);
    }

    #[test]
    fn classify_has_no_upper_bound() {
        assert_eq!(AgeGroup::classify(14), AgeGroup::U14);
        assert_eq!(AgeGroup::classify(99), AgeGroup::U14);
        assert_eq!(AgeGroup::classify(i64::MAX), AgeGroup::U14);
    }

    #[test]
    fn classify_accepts_negative_ages() {
        assert_eq!(AgeGroup::classify(0), AgeGroup::U6);
        assert_eq!(AgeGroup::classify(-1), AgeGroup::U6);
        assert_eq!(AgeGroup::classify(i64::MIN), AgeGroup::U6);
    }

    #[test]
    fn classify_is_monotonic() {
        let mut previous = AgeGroup::classify(-5);
        for age in -4..40 {
            let bucket = AgeGroup::classify(age);
            assert!(bucket >= previous, "bucket regressed at age {age}");
            previous = bucket;
        }
    }
}
