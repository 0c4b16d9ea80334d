pub mod dto {
    pub mod auth;
    pub mod common;
    pub mod game;
    pub mod leaderboard;
    pub mod scoring;
    pub mod tournament;
}

pub mod error;

// Re-export commonly used items
pub use error::{Result, SharedError};

pub use dto::{
    auth::{LoginRequest, LoginResponse, TokenClaims, VerifyResponse},
    common::ErrorResponse,
    game::{CreateGameRequest, GameDto, GameScoringDto, GameStatus},
    leaderboard::{
        GameBreakdownDto, GameBreakdownEntryDto, LeaderboardSnapshotDto, PlayerRankingDto,
        TeamRankingDto,
    },
    scoring::{PlayerScoreEntry, ScoreSubmission, ScoreType, TeamScoreEntry},
    tournament::{
        CreatePlayerEntry, CreateTeamEntry, CreateTournamentRequest, GameScoreDto, PlayerDto,
        TeamDto, TournamentDto, TournamentStatus, UpdateStatusRequest,
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tournament_roundtrip() {
        let tournament = TournamentDto {
            id: "tournament-1".to_string(),
            name: "Spring Bash".to_string(),
            description: Some("Office party".to_string()),
            status: TournamentStatus::Active,
            games: vec![],
            teams: vec![TeamDto {
                id: "team-1".to_string(),
                name: "Red Pandas".to_string(),
                players: vec![PlayerDto {
                    id: "player-1".to_string(),
                    name: "Ada".to_string(),
                    avatar: "fox".to_string(),
                    game_scores: vec![],
                    team_rank: Some(1),
                    global_rank: Some(3),
                }],
                individual_total: 40,
                bonus_total: 5,
                combined_total: 45,
            }],
            team_count: 1,
            player_count: 1,
        };

        let json = serde_json::to_string(&tournament).unwrap();
        let back: TournamentDto = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tournament);
    }

    #[test]
    fn test_tournament_tolerates_missing_optional_fields() {
        // The backend omits aggregates for freshly created tournaments.
        let json = r#"{"id":"t1","name":"Bash","status":"inactive"}"#;
        let parsed: TournamentDto = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.teams.len(), 0);
        assert_eq!(parsed.status, TournamentStatus::Inactive);
    }
}
