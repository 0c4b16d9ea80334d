use crate::dto::game::GameDto;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Tournament lifecycle status. The backend is expected to keep at most one
/// tournament active at a time; the client mirrors that convention when it
/// toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    Active,
    #[default]
    Inactive,
}

impl TournamentStatus {
    pub fn opposite(self) -> Self {
        match self {
            TournamentStatus::Active => TournamentStatus::Inactive,
            TournamentStatus::Inactive => TournamentStatus::Active,
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, TournamentStatus::Active)
    }
}

/// Per-game score line inside a player's breakdown. Server-computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScoreDto {
    pub game_id: String,
    pub game_name: String,
    pub points: i64,
}

/// A player within a tournament team. Ranks and score breakdowns are
/// attributed by the server; the client never derives them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    #[serde(default)]
    pub id: String,

    pub name: String,

    /// Animal avatar slug chosen at creation time.
    #[serde(default)]
    pub avatar: String,

    #[serde(default)]
    pub game_scores: Vec<GameScoreDto>,

    #[serde(default)]
    pub team_rank: Option<i32>,

    #[serde(default)]
    pub global_rank: Option<i32>,
}

/// A team and its server-attributed aggregate scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    #[serde(default)]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub players: Vec<PlayerDto>,

    #[serde(default)]
    pub individual_total: i64,

    #[serde(default)]
    pub bonus_total: i64,

    #[serde(default)]
    pub combined_total: i64,
}

/// A tournament ("game session") as the backend serves it. Fetched whole on
/// every mutation; never patched locally beyond the status toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDto {
    #[serde(default)]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub status: TournamentStatus,

    #[serde(default)]
    pub games: Vec<GameDto>,

    #[serde(default)]
    pub teams: Vec<TeamDto>,

    #[serde(default)]
    pub team_count: i32,

    #[serde(default)]
    pub player_count: i32,
}

/// Body of `PUT /tournaments/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub status: TournamentStatus,
}

/// One player entry inside a tournament creation payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerEntry {
    #[validate(length(min = 1, message = "Player name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Player avatar is required"))]
    pub avatar: String,
}

/// One team entry inside a tournament creation payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamEntry {
    #[validate(length(min = 1, message = "Team name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Each team needs at least one player"))]
    pub players: Vec<CreatePlayerEntry>,
}

/// Creation payload for `POST /tournaments`, assembled by the wizard's review
/// step from the accumulated draft.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTournamentRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name is required and must be at most 100 characters"
    ))]
    pub name: String,

    pub description: Option<String>,

    #[validate(
        length(min = 2, message = "A tournament needs at least two teams"),
        custom(function = "validate_teams")
    )]
    pub teams: Vec<CreateTeamEntry>,

    #[validate(length(min = 1, message = "Select at least one game"))]
    pub game_ids: Vec<String>,
}

fn validate_teams(teams: &Vec<CreateTeamEntry>) -> Result<(), validator::ValidationError> {
    for team in teams {
        if team.name.trim().is_empty() {
            return Err(validator::ValidationError::new("team_name"));
        }
        if team.players.is_empty() {
            return Err(validator::ValidationError::new("team_players"));
        }
        for player in &team.players {
            if player.name.trim().is_empty() || player.avatar.is_empty() {
                return Err(validator::ValidationError::new("player_entry"));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn team(name: &str, players: &[(&str, &str)]) -> CreateTeamEntry {
        CreateTeamEntry {
            name: name.to_string(),
            players: players
                .iter()
                .map(|(n, a)| CreatePlayerEntry {
                    name: n.to_string(),
                    avatar: a.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_create_tournament_valid() {
        let req = CreateTournamentRequest {
            name: "Summer Bash".to_string(),
            description: None,
            teams: vec![
                team("Red", &[("Ada", "fox")]),
                team("Blue", &[("Grace", "owl")]),
            ],
            game_ids: vec!["game-1".to_string()],
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_tournament_needs_two_teams() {
        let req = CreateTournamentRequest {
            name: "Summer Bash".to_string(),
            description: None,
            teams: vec![team("Red", &[("Ada", "fox")])],
            game_ids: vec!["game-1".to_string()],
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_tournament_rejects_unnamed_player() {
        let req = CreateTournamentRequest {
            name: "Summer Bash".to_string(),
            description: None,
            teams: vec![
                team("Red", &[("", "fox")]),
                team("Blue", &[("Grace", "owl")]),
            ],
            game_ids: vec!["game-1".to_string()],
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_status_opposite() {
        assert_eq!(
            TournamentStatus::Active.opposite(),
            TournamentStatus::Inactive
        );
        assert_eq!(
            TournamentStatus::Inactive.opposite(),
            TournamentStatus::Active
        );
    }

    #[test]
    fn test_status_wire_format() {
        let req = UpdateStatusRequest {
            status: TournamentStatus::Active,
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            "{\"status\":\"active\"}"
        );
    }
}
