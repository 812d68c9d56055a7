use contracts::system::auth::{LoginRequest, LoginResponse, Session};
use gloo_net::http::Request;
use thiserror::Error;

use crate::shared::api_utils::api_url;

/// Why a credential exchange produced no session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("authentication service returned HTTP {0}")]
    Server(u16),
    #[error("unexpected response from authentication service")]
    MalformedResponse,
    #[error("authentication service unreachable: {0}")]
    Unavailable(String),
}

impl AuthError {
    /// Text shown on the login form.
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "Invalid email or password",
            AuthError::Server(_) | AuthError::MalformedResponse | AuthError::Unavailable(_) => {
                "Login service is unavailable, please try again later"
            }
        }
    }
}

/// Exchange credentials for a session with a single `POST /auth/login`.
pub async fn login(email: String, password: String) -> Result<Session, AuthError> {
    let request = LoginRequest { email, password };

    let response = Request::post(&api_url("/auth/login"))
        .header("Accept", "application/json")
        .json(&request)
        .map_err(|e| AuthError::Unavailable(format!("failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| {
            log::warn!("auth: login request failed: {}", e);
            AuthError::Unavailable(e.to_string())
        })?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let result = session_from_response(status, &body);
    match &result {
        Ok(session) => log::info!("auth: signed in as {}", session.user.name),
        Err(e) => log::warn!("auth: login rejected: {}", e),
    }
    result
}

/// Interpret the login endpoint's answer.
pub fn session_from_response(status: u16, body: &str) -> Result<Session, AuthError> {
    match status {
        200..=299 => serde_json::from_str::<LoginResponse>(body)
            .map(Session::from)
            .map_err(|_| AuthError::MalformedResponse)
            .and_then(|session| {
                if session.access_token.is_empty() {
                    Err(AuthError::MalformedResponse)
                } else {
                    Ok(session)
                }
            }),
        401 | 403 | 422 => Err(AuthError::InvalidCredentials),
        other => Err(AuthError::Server(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OK_BODY: &str = r#"{
        "message": "Login successful",
        "user": {"id": 4, "name": "Budi", "email": "budi@pos.test", "roles": ["cashier"], "permissions": ["sales.create"]},
        "token": "4|s3cr3t"
    }"#;

    #[test]
    fn test_success_yields_session() {
        let session = session_from_response(200, OK_BODY).unwrap();
        assert_eq!(session.access_token, "4|s3cr3t");
        assert_eq!(session.user.roles, vec!["cashier".to_string()]);
        assert!(session.has_permission("sales.create"));
    }

    #[test]
    fn test_wrong_password_yields_no_session() {
        let result = session_from_response(401, r#"{"message": "Invalid credentials"}"#);
        assert_eq!(result, Err(AuthError::InvalidCredentials));
        assert!(result.ok().is_none());
    }

    #[test]
    fn test_validation_error_is_invalid_credentials() {
        assert_eq!(
            session_from_response(422, "{}"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_forbidden_is_invalid_credentials() {
        assert_eq!(
            session_from_response(403, r#"{"message": "Account disabled"}"#),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_bad_request_is_a_server_error() {
        assert_eq!(
            session_from_response(400, r#"{"message": "Malformed request"}"#),
            Err(AuthError::Server(400))
        );
    }

    #[test]
    fn test_server_error_is_distinct() {
        let err = session_from_response(503, "<html>down</html>").unwrap_err();
        assert_eq!(err, AuthError::Server(503));
        assert_eq!(
            err.user_message(),
            "Login service is unavailable, please try again later"
        );
    }

    #[test]
    fn test_malformed_success_body() {
        assert_eq!(
            session_from_response(200, r#"{"message": "ok"}"#),
            Err(AuthError::MalformedResponse)
        );
        let no_token = r#"{"user": {"id": 1, "name": "A", "roles": []}, "token": ""}"#;
        assert_eq!(
            session_from_response(200, no_token),
            Err(AuthError::MalformedResponse)
        );
    }
}
