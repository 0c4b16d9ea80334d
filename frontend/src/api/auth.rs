use log::debug;
use shared::{ErrorResponse, LoginRequest, LoginResponse, VerifyResponse};

use crate::api::api_url;
use crate::api::utils::authenticated_get;
use gloo_net::http::Request;

pub async fn login(username: &str, password: &str) -> Result<LoginResponse, String> {
    debug!("Attempting login for user: {}", username);

    let login_request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    let response = Request::post(&api_url("/auth/login"))
        .json(&login_request)
        .map_err(|e| format!("Failed to serialize login request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send login request: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Invalid username or password".to_string())?;
        return Err(error.error);
    }

    let login_response = response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse login response: {}", e))?;

    debug!("Login successful for user: {}", username);
    Ok(login_response)
}

/// Authoritative session check. The locally decoded claims only gate
/// rendering; this endpoint decides whether the session is actually valid.
pub async fn verify_session() -> Result<VerifyResponse, String> {
    debug!("Verifying session against the server");

    let response = authenticated_get(&api_url("/auth/verify"))
        .send()
        .await
        .map_err(|e| format!("Failed to send verify request: {}", e))?;

    if !response.ok() {
        return Err(format!("Session rejected: {}", response.status()));
    }

    let verify = response
        .json::<VerifyResponse>()
        .await
        .map_err(|e| format!("Failed to parse verify response: {}", e))?;

    debug!("Session verify result: valid={}", verify.valid);
    Ok(verify)
}
