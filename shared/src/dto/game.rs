use serde::{Deserialize, Serialize};
use validator::Validate;

/// Lifecycle status of a game template. Games are deactivated, never deleted
/// from the client's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Active,
    Inactive,
}

/// Optional scoring metadata attached to a game by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScoringDto {
    pub max_points: i32,
    pub rounds: i32,
}

/// Data Transfer Object for a game template as the backend serves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    #[serde(default)]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Short join code players type in on the home page.
    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub status: GameStatus,

    /// Participant display names, in backend order.
    #[serde(default)]
    pub participants: Vec<String>,

    #[serde(default)]
    pub scoring: Option<GameScoringDto>,
}

/// Creation payload for `POST /games`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name is required and must be at most 100 characters"
    ))]
    pub name: String,

    #[validate(custom(function = "validate_description_len"))]
    pub description: Option<String>,

    #[serde(default)]
    pub participants: Vec<String>,

    #[serde(default)]
    pub scoring: Option<GameScoringDto>,
}

fn validate_description_len(text: &String) -> Result<(), validator::ValidationError> {
    if text.len() > 1000 {
        let mut err = validator::ValidationError::new("length");
        err.message = Some("Description must be at most 1000 characters".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_create_game_empty_name_rejected() {
        let req = CreateGameRequest {
            name: "".to_string(),
            description: None,
            participants: vec![],
            scoring: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_game_valid_data() {
        let req = CreateGameRequest {
            name: "Flip Cup".to_string(),
            description: Some("Relay-style cup flipping".to_string()),
            participants: vec!["Ada".to_string(), "Grace".to_string()],
            scoring: Some(GameScoringDto {
                max_points: 10,
                rounds: 3,
            }),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_game_overlong_description_rejected() {
        let req = CreateGameRequest {
            name: "Trivia".to_string(),
            description: Some("x".repeat(1001)),
            participants: vec![],
            scoring: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_game_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&GameStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::from_str::<GameStatus>("\"inactive\"").unwrap(),
            GameStatus::Inactive
        );
    }
}
