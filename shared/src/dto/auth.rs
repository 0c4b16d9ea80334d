use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Successful login response: a bearer token the client stores verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Response of `GET /auth/verify` — the authoritative session check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,
    #[serde(default)]
    pub username: Option<String>,
}

/// Claims decoded from the bearer token's payload segment. Advisory only:
/// the client never verifies the signature, so these gate UI rendering and
/// nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,

    #[serde(default)]
    pub role: Option<String>,

    /// Expiry as Unix seconds.
    pub exp: i64,
}

impl TokenClaims {
    pub fn expired_at(&self, now_secs: i64) -> bool {
        self.exp <= now_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_expiry_boundary() {
        let claims = TokenClaims {
            sub: "admin".to_string(),
            role: Some("admin".to_string()),
            exp: 1_000,
        };
        assert!(!claims.expired_at(999));
        assert!(claims.expired_at(1_000));
        assert!(claims.expired_at(1_001));
    }
}
