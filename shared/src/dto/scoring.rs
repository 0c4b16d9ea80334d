use serde::{Deserialize, Serialize};

/// Whether a point delta targets a team aggregate or an individual player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreType {
    Team,
    Player,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamScoreEntry {
    pub team_id: String,
    pub score: i64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScoreEntry {
    pub player_id: String,
    pub team_id: String,
    pub score: i64,
}

/// Body of `POST /leaderboardScoring/{tournamentId}/games/{gameId}/scores`.
/// Exactly one of `team_scores`/`player_scores` is set, matching `score_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmission {
    pub score_type: ScoreType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_scores: Option<Vec<TeamScoreEntry>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_scores: Option<Vec<PlayerScoreEntry>>,
}

impl ScoreSubmission {
    pub fn for_team(team_id: String, score: i64, reason: String) -> Self {
        Self {
            score_type: ScoreType::Team,
            team_scores: Some(vec![TeamScoreEntry {
                team_id,
                score,
                reason,
            }]),
            player_scores: None,
        }
    }

    pub fn for_player(player_id: String, team_id: String, score: i64) -> Self {
        Self {
            score_type: ScoreType::Player,
            player_scores: Some(vec![PlayerScoreEntry {
                player_id,
                team_id,
                score,
            }]),
            team_scores: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_submission_wire_shape() {
        let sub = ScoreSubmission::for_team("team-1".to_string(), 5, "Round win".to_string());
        let json = serde_json::to_string(&sub).unwrap();
        assert!(json.contains("\"scoreType\":\"team\""));
        assert!(json.contains("\"teamScores\""));
        assert!(!json.contains("playerScores"));
    }

    #[test]
    fn test_player_submission_wire_shape() {
        let sub = ScoreSubmission::for_player("player-1".to_string(), "team-1".to_string(), -3);
        let json = serde_json::to_string(&sub).unwrap();
        assert!(json.contains("\"scoreType\":\"player\""));
        assert!(json.contains("\"playerScores\""));
        assert!(json.contains("-3"));
        assert!(!json.contains("teamScores"));
    }
}
