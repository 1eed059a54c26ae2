use crate::error::AppError;
use crate::models::User;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

/// The authenticated user, attached to request extensions by [`require_auth`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Extract Bearer token from Authorization header
fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let auth_header = headers
        .get("authorization")
        .ok_or(AppError::Unauthenticated)?
        .to_str()
        .map_err(|_| AppError::Unauthenticated)?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthenticated)
}

/// Resolves the presented bearer token to a user and attaches it to the
/// request. Missing, malformed, and unknown tokens all fail with 401.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())?.to_string();
    let user = state.auth_service.authenticate_token(&token).await?;

    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_requires_the_scheme_prefix() {
        let mut headers = HeaderMap::new();
        assert!(bearer_token(&headers).is_err());

        headers.insert("authorization", HeaderValue::from_static("Token abc"));
        assert!(bearer_token(&headers).is_err());

        headers.insert("authorization", HeaderValue::from_static("Bearer abc"));
        assert_eq!(bearer_token(&headers).unwrap(), "abc");
    }
}
