// Authentication: JWT bearer tokens + bcrypt password hashing.
// Token decode failure is always `AppError::Unauthorized`, never a 500 —
// a malformed token must be distinguishable from a scoring or storage error.

pub mod jwt;
pub mod password;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, HeaderMap};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

/// The authenticated requester, extracted from the `Authorization` header.
/// Handlers that require auth take this as a parameter.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Uuid);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(AppError::Unauthorized)?;
        let claims = jwt::verify_token(token, &state.config.jwt_secret)?;
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::Unauthorized)?;
        Ok(AuthUser(user_id))
    }
}

/// Extracts the raw token from a `Bearer <token>` authorization header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Resolves the requester identity when a bearer token is present.
/// No header → `Ok(None)`. A header that fails to decode → `Unauthorized`.
pub fn optional_subject(headers: &HeaderMap, secret: &str) -> Result<Option<Uuid>, AppError> {
    let Some(token) = bearer_token(headers) else {
        return Ok(None);
    };
    let claims = jwt::verify_token(token, secret)?;
    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::Unauthorized)?;
    Ok(Some(user_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_bearer_token_parses_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_rejects_non_bearer_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_optional_subject_absent_header_is_none() {
        let headers = HeaderMap::new();
        let subject = optional_subject(&headers, SECRET).unwrap();
        assert!(subject.is_none());
    }

    #[test]
    fn test_optional_subject_valid_token_round_trips() {
        let user_id = Uuid::new_v4();
        let token = jwt::create_token(user_id, SECRET).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        let subject = optional_subject(&headers, SECRET).unwrap();
        assert_eq!(subject, Some(user_id));
    }

    #[test]
    fn test_optional_subject_garbage_token_is_unauthorized() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer not-a-jwt"),
        );
        let err = optional_subject(&headers, SECRET).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }
}
