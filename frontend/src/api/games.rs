use log::debug;
use shared::{CreateGameRequest, ErrorResponse, GameDto, LeaderboardSnapshotDto};

use crate::api::api_url;
use crate::api::utils::{authenticated_delete, authenticated_get, authenticated_post};
use crate::codes::sanitize_game_code;

pub async fn get_all_games() -> Result<Vec<GameDto>, String> {
    debug!("Fetching all games");

    let response = authenticated_get(&api_url("/games"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch games: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let games = response
        .json::<Vec<GameDto>>()
        .await
        .map_err(|e| format!("Failed to parse games response: {}", e))?;

    debug!("Successfully fetched {} games", games.len());
    Ok(games)
}

pub async fn get_game_by_id(id: &str) -> Result<GameDto, String> {
    debug!("Fetching game with ID: {}", id);

    let response = authenticated_get(&format!("{}/{}", api_url("/games"), id))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch game: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let game = response
        .json::<GameDto>()
        .await
        .map_err(|e| format!("Failed to parse game response: {}", e))?;

    debug!("Successfully fetched game: {}", game.name);
    Ok(game)
}

/// Looks a game up by its join code. The raw user input is sanitized first so
/// "abc-123!" reaches the backend as "ABC123".
pub async fn get_game_by_code(raw_code: &str) -> Result<GameDto, String> {
    let code = sanitize_game_code(raw_code);
    if code.is_empty() {
        return Err("Enter a game code".to_string());
    }
    debug!("Looking up game by code: {}", code);

    let response = authenticated_get(&format!(
        "{}/code/{}",
        api_url("/games"),
        urlencoding::encode(&code)
    ))
    .send()
    .await
    .map_err(|e| format!("Failed to look up game code: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let game = response
        .json::<GameDto>()
        .await
        .map_err(|e| format!("Failed to parse game response: {}", e))?;

    debug!("Code {} resolved to game: {}", code, game.name);
    Ok(game)
}

pub async fn create_game(request: &CreateGameRequest) -> Result<GameDto, String> {
    debug!("Creating game: {}", request.name);

    let response = authenticated_post(&api_url("/games"))
        .json(request)
        .map_err(|e| format!("Failed to serialize game request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to create game: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let game = response
        .json::<GameDto>()
        .await
        .map_err(|e| format!("Failed to parse game response: {}", e))?;

    debug!("Successfully created game: {}", game.name);
    Ok(game)
}

pub async fn delete_game(id: &str) -> Result<(), String> {
    debug!("Deleting game with ID: {}", id);

    let response = authenticated_delete(&format!("{}/{}", api_url("/games"), id))
        .send()
        .await
        .map_err(|e| format!("Failed to delete game: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    debug!("Successfully deleted game: {}", id);
    Ok(())
}

pub async fn get_game_leaderboard(id: &str) -> Result<LeaderboardSnapshotDto, String> {
    debug!("Fetching leaderboard for game: {}", id);

    let response = authenticated_get(&format!("{}/{}/leaderboard", api_url("/games"), id))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch game leaderboard: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let snapshot = response
        .json::<LeaderboardSnapshotDto>()
        .await
        .map_err(|e| format!("Failed to parse leaderboard response: {}", e))?;

    debug!("Fetched leaderboard for game: {}", id);
    Ok(snapshot)
}
