//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

// ============================================
// USER DTOs
// ============================================

/// Body for both sign-up and login
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

// ============================================
// CHANNEL DTOs
// ============================================

/// Channel creation request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChannelRequest {
    pub name: String,
}

// ============================================
// MESSAGE DTOs
// ============================================

/// Message creation request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMessageRequest {
    pub channel_id: i64,
    pub user_id: i64,
    pub text: String,
}

/// Query string of `GET /messages`
///
/// Values are kept as strings so malformed numbers surface as
/// validation errors rather than extractor rejections.
#[derive(Debug, Default, Deserialize)]
pub struct ListMessagesParams {
    #[serde(rename = "channelID")]
    pub channel_id: Option<String>,
    pub limit: Option<String>,
    #[serde(rename = "lastMessageID")]
    pub last_message_id: Option<String>,
}

// ============================================
// SHARED RESPONSES
// ============================================

/// Response for endpoints that create a row
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

impl CreatedResponse {
    pub fn new(id: i64) -> Self {
        Self { id, message: None }
    }

    pub fn with_message(id: i64, message: impl Into<String>) -> Self {
        Self {
            id,
            message: Some(message.into()),
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "unhealthy"
    pub status: String,
    /// Database status: "ok" or "error"
    pub database: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// API version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_response_omits_empty_message() {
        let json = serde_json::to_value(CreatedResponse::new(7)).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7}));

        let json = serde_json::to_value(CreatedResponse::with_message(7, "ok")).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "message": "ok"}));
    }

    #[test]
    fn test_create_message_request_shape() {
        let req: CreateMessageRequest =
            serde_json::from_str(r#"{"channel_id": 1, "user_id": 2, "text": "hi"}"#).unwrap();
        assert_eq!(req.channel_id, 1);
        assert_eq!(req.user_id, 2);
        assert_eq!(req.text, "hi");
    }
}
