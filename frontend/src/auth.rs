use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use gloo_storage::{LocalStorage, Storage};
use log::{debug, error};
use shared::TokenClaims;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

use crate::api::auth as auth_api;

/// The one durable piece of client state: the bearer token slot.
pub const SESSION_TOKEN_KEY: &str = "session_token";

/// Decodes the payload segment of a JWT-shaped bearer token. No signature
/// verification happens here; the claims are UI hints and `/auth/verify`
/// remains the source of truth. Any decode failure reads as an expired
/// session.
pub fn decode_claims(token: &str) -> Result<TokenClaims, String> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| "Malformed token".to_string())?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| format!("Failed to decode token payload: {}", e))?;

    serde_json::from_slice::<TokenClaims>(&bytes)
        .map_err(|e| format!("Failed to parse token claims: {}", e))
}

fn stored_claims() -> Option<TokenClaims> {
    let token = LocalStorage::get::<String>(SESSION_TOKEN_KEY).ok()?;
    match decode_claims(&token) {
        Ok(claims) if !claims.expired_at(chrono::Utc::now().timestamp()) => Some(claims),
        _ => {
            // Expired or undecodable: either way the slot is stale.
            LocalStorage::delete(SESSION_TOKEN_KEY);
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionState {
    pub username: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    SetLoading(bool),
    LoginSuccess { username: String, token: String },
    LoginError(String),
    VerifyConfirmed(String),
    SessionExpired,
    Logout,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::SetLoading(loading) => Rc::new(Self {
                loading,
                ..(*self).clone()
            }),
            SessionAction::LoginSuccess { username, token } => {
                if let Err(e) = LocalStorage::set(SESSION_TOKEN_KEY, &token) {
                    error!("Failed to store session token: {}", e);
                }
                Rc::new(Self {
                    username: Some(username),
                    loading: false,
                    error: None,
                })
            }
            SessionAction::LoginError(error) => Rc::new(Self {
                username: None,
                loading: false,
                error: Some(error),
            }),
            SessionAction::VerifyConfirmed(username) => Rc::new(Self {
                username: Some(username),
                loading: false,
                error: None,
            }),
            SessionAction::SessionExpired => {
                LocalStorage::delete(SESSION_TOKEN_KEY);
                Rc::new(Self {
                    username: None,
                    loading: false,
                    error: Some("Session expired. Please log in again.".to_string()),
                })
            }
            SessionAction::Logout => {
                LocalStorage::delete(SESSION_TOKEN_KEY);
                Rc::new(Self::default())
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionContext {
    pub state: SessionState,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    // Decoded claims gate the first render; the verify call below corrects
    // them if the server disagrees.
    let session = use_reducer_eq(|| {
        let username = stored_claims().map(|claims| claims.sub);
        SessionState {
            username,
            ..Default::default()
        }
    });

    // Verify the stored session once on mount.
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            if LocalStorage::get::<String>(SESSION_TOKEN_KEY).is_ok() {
                spawn_local(async move {
                    match auth_api::verify_session().await {
                        Ok(verify) if verify.valid => {
                            if let Some(username) = verify.username {
                                session.dispatch(SessionAction::VerifyConfirmed(username));
                            }
                        }
                        Ok(_) | Err(_) => {
                            debug!("Stored session rejected by server");
                            session.dispatch(SessionAction::SessionExpired);
                        }
                    }
                });
            }
            || ()
        });
    }

    let login = {
        let session = session.clone();
        Callback::from(move |(username, password): (String, String)| {
            let session = session.clone();
            spawn_local(async move {
                session.dispatch(SessionAction::SetLoading(true));

                match auth_api::login(&username, &password).await {
                    Ok(response) => {
                        let username = decode_claims(&response.token)
                            .map(|claims| claims.sub)
                            .unwrap_or(username);
                        session.dispatch(SessionAction::LoginSuccess {
                            username,
                            token: response.token,
                        });
                    }
                    Err(e) => {
                        session.dispatch(SessionAction::LoginError(e));
                    }
                }
            });
        })
    };

    let logout = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            session.dispatch(SessionAction::Logout);
        })
    };

    let context = SessionContext {
        state: (*session).clone(),
        login,
        logout,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(claims_json: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims_json.as_bytes());
        format!("{}.{}.signature", header, payload)
    }

    #[test]
    fn test_decode_claims_roundtrip() {
        let token = make_token(r#"{"sub":"admin","role":"admin","exp":4102444800}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.role.as_deref(), Some("admin"));
        assert!(!claims.expired_at(4102444799));
    }

    #[test]
    fn test_decode_claims_without_role() {
        let token = make_token(r#"{"sub":"gamemaster","exp":1}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.role, None);
        assert!(claims.expired_at(2));
    }

    #[test]
    fn test_decode_rejects_tokens_without_payload_segment() {
        assert!(decode_claims("not-a-jwt").is_err());
    }

    #[test]
    fn test_decode_rejects_garbage_payload() {
        assert!(decode_claims("header.!!!not-base64!!!.sig").is_err());
    }
}
