use log::debug;
use shared::{
    CreateTournamentRequest, ErrorResponse, LeaderboardSnapshotDto, TournamentDto,
    TournamentStatus, UpdateStatusRequest,
};
use web_sys::AbortSignal;

use crate::api::api_url;
use crate::api::utils::{authenticated_get, authenticated_post, authenticated_put};

async fn fetch_tournaments(abort: Option<&AbortSignal>) -> Result<Vec<TournamentDto>, String> {
    let mut req = authenticated_get(&api_url("/tournaments"));
    if let Some(signal) = abort {
        req = req.abort_signal(Some(signal));
    }

    let response = req
        .send()
        .await
        .map_err(|e| format!("Failed to fetch tournaments: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    response
        .json::<Vec<TournamentDto>>()
        .await
        .map_err(|e| format!("Failed to parse tournaments response: {}", e))
}

pub async fn get_all_tournaments() -> Result<Vec<TournamentDto>, String> {
    debug!("Fetching all tournaments");
    let tournaments = fetch_tournaments(None).await?;
    debug!("Successfully fetched {} tournaments", tournaments.len());
    Ok(tournaments)
}

/// Same fetch, cancellable. The dashboard arms a 10-second abort guard so a
/// hung aggregate request cannot pin the loading state forever.
pub async fn get_all_tournaments_with_abort(
    signal: &AbortSignal,
) -> Result<Vec<TournamentDto>, String> {
    debug!("Fetching all tournaments (abortable)");
    fetch_tournaments(Some(signal)).await
}

pub async fn get_tournament_by_id(id: &str) -> Result<TournamentDto, String> {
    debug!("Fetching tournament with ID: {}", id);

    let response = authenticated_get(&format!("{}/{}", api_url("/tournaments"), id))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch tournament: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let tournament = response
        .json::<TournamentDto>()
        .await
        .map_err(|e| format!("Failed to parse tournament response: {}", e))?;

    debug!("Successfully fetched tournament: {}", tournament.name);
    Ok(tournament)
}

pub async fn create_tournament(
    request: &CreateTournamentRequest,
) -> Result<TournamentDto, String> {
    debug!("Creating tournament: {}", request.name);

    let response = authenticated_post(&api_url("/tournaments"))
        .json(request)
        .map_err(|e| format!("Failed to serialize tournament request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to create tournament: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let tournament = response
        .json::<TournamentDto>()
        .await
        .map_err(|e| format!("Failed to parse tournament response: {}", e))?;

    debug!("Successfully created tournament: {}", tournament.name);
    Ok(tournament)
}

pub async fn update_tournament_status(
    id: &str,
    status: TournamentStatus,
) -> Result<(), String> {
    debug!("Updating tournament {} status to {:?}", id, status);

    let response = authenticated_put(&format!("{}/{}/status", api_url("/tournaments"), id))
        .json(&UpdateStatusRequest { status })
        .map_err(|e| format!("Failed to serialize status request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to update tournament status: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    debug!("Successfully updated status for tournament: {}", id);
    Ok(())
}

/// Leaderboard of the currently active tournament, as served by the backend
/// for the public scoreboard.
pub async fn get_active_leaderboard() -> Result<LeaderboardSnapshotDto, String> {
    debug!("Fetching active tournament leaderboard");

    let response = authenticated_get(&api_url("/tournaments/leaderboard"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch leaderboard: {}", e))?;

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

    debug!(
        "Fetched leaderboard snapshot for tournament: {}",
        snapshot.tournament_name
    );
    Ok(snapshot)
}
