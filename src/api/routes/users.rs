//! User Routes
//!
//! - POST /users - Sign up
//! - POST /login - Check credentials

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{CreatedResponse, CredentialsRequest};
use crate::api::error::{ApiError, ApiResult};
use crate::api::routes::with_store;
use crate::api::state::AppState;

/// POST /users
///
/// Register a user and return the new id.
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CredentialsRequest>,
) -> ApiResult<Json<CreatedResponse>> {
    let username = validate_credentials(&req)?;

    let id = with_store(&state.store, {
        let username = username.clone();
        move |store| store.create_user(&username, &req.password)
    })
    .await?;

    tracing::info!(user_id = id, username = %username, "Created user");

    Ok(Json(CreatedResponse::with_message(
        id,
        "User created successfully",
    )))
}

/// POST /login
///
/// Return the user id when the credentials match.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CredentialsRequest>,
) -> ApiResult<Json<CreatedResponse>> {
    let username = validate_credentials(&req)?;

    let user_id = with_store(&state.store, {
        let username = username.clone();
        move |store| store.verify_login(&username, &req.password)
    })
    .await?
    .ok_or_else(|| ApiError::Unauthorized("invalid username or password".to_string()))?;

    tracing::debug!(user_id, username = %username, "User logged in");

    Ok(Json(CreatedResponse::with_message(
        user_id,
        "User Login Successfully",
    )))
}

/// Both fields must be present; the username is trimmed
fn validate_credentials(req: &CredentialsRequest) -> ApiResult<String> {
    let username = req.username.trim();

    if username.is_empty() {
        return Err(ApiError::Validation("username cannot be empty".to_string()));
    }

    if req.password.is_empty() {
        return Err(ApiError::Validation("password cannot be empty".to_string()));
    }

    Ok(username.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(username: &str, password: &str) -> CredentialsRequest {
        CredentialsRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_validate_credentials() {
        assert_eq!(validate_credentials(&creds(" alice ", "pw")).unwrap(), "alice");
        assert!(validate_credentials(&creds("", "pw")).is_err());
        assert!(validate_credentials(&creds("alice", "")).is_err());
    }
}
