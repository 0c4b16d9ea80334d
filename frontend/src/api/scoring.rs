use log::debug;
use shared::{ErrorResponse, ScoreSubmission};

use crate::api::api_url;
use crate::api::utils::authenticated_post;

/// Submits a signed point delta for a team or player in a given game. The
/// caller refetches the whole tournament afterwards; scores are never patched
/// locally because team bonuses and ranks are server-computed.
pub async fn submit_scores(
    tournament_id: &str,
    game_id: &str,
    submission: &ScoreSubmission,
) -> Result<(), String> {
    debug!(
        "Submitting {:?} scores for tournament {} game {}",
        submission.score_type, tournament_id, game_id
    );

    let url = format!(
        "{}/{}/games/{}/scores",
        api_url("/leaderboardScoring"),
        tournament_id,
        game_id
    );

    let response = authenticated_post(&url)
        .json(submission)
        .map_err(|e| format!("Failed to serialize score submission: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to submit scores: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    debug!("Score submission accepted");
    Ok(())
}
