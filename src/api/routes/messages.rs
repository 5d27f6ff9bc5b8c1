//! Message Routes
//!
//! - POST /messages - Post a message to a channel
//! - GET /messages?channelID=&limit=&lastMessageID= - Read a channel

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{CreateMessageRequest, CreatedResponse, ListMessagesParams};
use crate::api::error::{ApiError, ApiResult};
use crate::api::routes::with_store;
use crate::api::state::AppState;
use crate::store::{Message, MessageQuery, NewMessage, DEFAULT_MESSAGE_LIMIT};

/// POST /messages
pub async fn create_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateMessageRequest>,
) -> ApiResult<Json<CreatedResponse>> {
    if req.text.trim().is_empty() {
        return Err(ApiError::Validation("text cannot be empty".to_string()));
    }

    let message = NewMessage::new(req.channel_id, req.user_id, req.text);
    let channel_id = message.channel_id;

    let id = with_store(&state.store, move |store| store.create_message(&message)).await?;

    tracing::debug!(message_id = id, channel_id, "Stored message");

    Ok(Json(CreatedResponse::new(id)))
}

/// GET /messages
///
/// `channelID` is required; `limit` defaults to 100 and `lastMessageID` to 0.
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListMessagesParams>,
) -> ApiResult<Json<Vec<Message>>> {
    let query = parse_message_query(&params)?;
    let messages = with_store(&state.store, move |store| store.list_messages(query)).await?;
    Ok(Json(messages))
}

fn parse_message_query(params: &ListMessagesParams) -> ApiResult<MessageQuery> {
    let channel_id = match params.channel_id.as_deref().map(str::trim) {
        None | Some("") => {
            return Err(ApiError::Validation("channelID is required".to_string()));
        }
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| ApiError::Validation(format!("Invalid channelID parameter: {}", raw)))?,
    };

    let limit = parse_optional(params.limit.as_deref(), "limit")?.unwrap_or(DEFAULT_MESSAGE_LIMIT);
    if limit < 0 {
        return Err(ApiError::Validation("Invalid limit parameter".to_string()));
    }

    let after_id = parse_optional(params.last_message_id.as_deref(), "lastMessageID")?.unwrap_or(0);

    Ok(MessageQuery::channel(channel_id).after(after_id).limit(limit))
}

fn parse_optional(raw: Option<&str>, name: &str) -> ApiResult<Option<i64>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ApiError::Validation(format!("Invalid {} parameter", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(channel: Option<&str>, limit: Option<&str>, last: Option<&str>) -> ListMessagesParams {
        ListMessagesParams {
            channel_id: channel.map(String::from),
            limit: limit.map(String::from),
            last_message_id: last.map(String::from),
        }
    }

    #[test]
    fn test_defaults() {
        let query = parse_message_query(&params(Some("4"), None, None)).unwrap();
        assert_eq!(query, MessageQuery::channel(4));
    }

    #[test]
    fn test_explicit_cursor() {
        let query = parse_message_query(&params(Some("4"), Some("10"), Some("25"))).unwrap();
        assert_eq!(query.limit, 10);
        assert_eq!(query.after_id, 25);
    }

    #[test]
    fn test_channel_required() {
        assert!(parse_message_query(&params(None, None, None)).is_err());
        assert!(parse_message_query(&params(Some(""), None, None)).is_err());
        assert!(parse_message_query(&params(Some("abc"), None, None)).is_err());
    }

    #[test]
    fn test_bad_numbers_rejected() {
        assert!(parse_message_query(&params(Some("1"), Some("many"), None)).is_err());
        assert!(parse_message_query(&params(Some("1"), Some("-1"), None)).is_err());
        assert!(parse_message_query(&params(Some("1"), None, Some("x"))).is_err());
    }
}
