//! Channel Routes
//!
//! - GET /channels - List all channels
//! - POST /channels - Create a channel

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{CreateChannelRequest, CreatedResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::routes::with_store;
use crate::api::state::AppState;
use crate::store::Channel;

/// Maximum accepted channel name length, in characters
pub const MAX_CHANNEL_NAME_LEN: usize = 100;

/// GET /channels
///
/// List all channels in creation order.
pub async fn list_channels(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Channel>>> {
    let channels = with_store(&state.store, |store| store.list_channels()).await?;
    Ok(Json(channels))
}

/// POST /channels
///
/// Create a channel and return its id.
pub async fn create_channel(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateChannelRequest>,
) -> ApiResult<Json<CreatedResponse>> {
    validate_channel_name(&req.name)?;
    let name = req.name;

    let id = with_store(&state.store, {
        let name = name.clone();
        move |store| store.create_channel(&name)
    })
    .await?;

    tracing::info!(channel_id = id, channel_name = %name, "Created channel");

    Ok(Json(CreatedResponse::with_message(
        id,
        "Channel created successfully",
    )))
}

/// Reject blank or overlong names
///
/// Surrounding whitespace only matters for the checks; the name is stored
/// exactly as sent.
fn validate_channel_name(name: &str) -> ApiResult<()> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ApiError::Validation("Channel name cannot be empty".to_string()));
    }

    if trimmed.chars().count() > MAX_CHANNEL_NAME_LEN {
        return Err(ApiError::Validation(format!(
            "Channel name exceeds maximum length of {} characters",
            MAX_CHANNEL_NAME_LEN
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_channel_name() {
        assert!(validate_channel_name("general").is_ok());
        assert!(validate_channel_name("  random ").is_ok());
        assert!(validate_channel_name("").is_err());
        assert!(validate_channel_name("   ").is_err());
        assert!(validate_channel_name(&"x".repeat(MAX_CHANNEL_NAME_LEN + 1)).is_err());
    }
}
