use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the server-computed team ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRankingDto {
    pub rank: i32,
    pub team_id: String,
    pub team_name: String,
    #[serde(default)]
    pub individual_total: i64,
    #[serde(default)]
    pub bonus_total: i64,
    pub combined_total: i64,
}

/// One row of the server-computed player ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRankingDto {
    pub rank: i32,
    pub player_id: String,
    pub player_name: String,
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub avatar: String,
    pub total_points: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameBreakdownEntryDto {
    pub team_id: String,
    pub team_name: String,
    pub points: i64,
}

/// Per-game score breakdown inside a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameBreakdownDto {
    pub game_id: String,
    pub game_name: String,
    #[serde(default)]
    pub entries: Vec<GameBreakdownEntryDto>,
}

/// A point-in-time ranking bundle. Treated as fully replaceable on every
/// fetch; the client performs no incremental merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardSnapshotDto {
    #[serde(default)]
    pub tournament_id: String,
    #[serde(default)]
    pub tournament_name: String,
    #[serde(default)]
    pub team_rankings: Vec<TeamRankingDto>,
    #[serde(default)]
    pub player_rankings: Vec<PlayerRankingDto>,
    #[serde(default)]
    pub game_breakdowns: Vec<GameBreakdownDto>,
    pub generated_at: DateTime<Utc>,
}
