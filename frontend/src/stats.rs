use shared::TournamentDto;

/// Highest combined team score across all tournaments, for the dashboard
/// stat card. Display-only; authoritative ordering always comes pre-sorted
/// from the server.
pub fn highest_team_score(tournaments: &[TournamentDto]) -> i64 {
    tournaments
        .iter()
        .flat_map(|t| t.teams.iter())
        .map(|team| team.combined_total)
        .max()
        .unwrap_or(0)
}

/// Highest single-player score across all tournaments, summed over that
/// player's per-game breakdown.
pub fn highest_player_score(tournaments: &[TournamentDto]) -> i64 {
    tournaments
        .iter()
        .flat_map(|t| t.teams.iter())
        .flat_map(|team| team.players.iter())
        .map(|player| player.game_scores.iter().map(|gs| gs.points).sum())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{GameScoreDto, PlayerDto, TeamDto, TournamentStatus};

    fn player(name: &str, points: &[i64]) -> PlayerDto {
        PlayerDto {
            id: name.to_lowercase(),
            name: name.to_string(),
            avatar: "fox".to_string(),
            game_scores: points
                .iter()
                .enumerate()
                .map(|(i, p)| GameScoreDto {
                    game_id: format!("game-{}", i),
                    game_name: format!("Game {}", i),
                    points: *p,
                })
                .collect(),
            team_rank: None,
            global_rank: None,
        }
    }

    fn team(name: &str, combined_total: i64, players: Vec<PlayerDto>) -> TeamDto {
        TeamDto {
            id: name.to_lowercase(),
            name: name.to_string(),
            players,
            individual_total: 0,
            bonus_total: 0,
            combined_total,
        }
    }

    fn tournament(teams: Vec<TeamDto>) -> TournamentDto {
        TournamentDto {
            id: "t1".to_string(),
            name: "Bash".to_string(),
            description: None,
            status: TournamentStatus::Active,
            games: vec![],
            teams,
            team_count: 0,
            player_count: 0,
        }
    }

    #[test]
    fn test_extremes_across_nested_structures() {
        // Team scores [5, 12, 3]; one player holding a 20-point game.
        let tournaments = vec![tournament(vec![
            team("Red", 5, vec![player("Ada", &[4, 1])]),
            team("Blue", 12, vec![player("Grace", &[20])]),
            team("Green", 3, vec![]),
        ])];

        assert_eq!(highest_team_score(&tournaments), 12);
        assert_eq!(highest_player_score(&tournaments), 20);
    }

    #[test]
    fn test_player_score_sums_game_breakdown() {
        let tournaments = vec![tournament(vec![team(
            "Red",
            0,
            vec![player("Ada", &[7, 6]), player("Grace", &[10])],
        )])];
        assert_eq!(highest_player_score(&tournaments), 13);
    }

    #[test]
    fn test_empty_input_yields_zero() {
        assert_eq!(highest_team_score(&[]), 0);
        assert_eq!(highest_player_score(&[]), 0);
    }
}
