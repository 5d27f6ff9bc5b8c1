//! Core data types for the chat store
//!
//! - `Channel`: A named chat destination
//! - `Message`: A line of text posted to a channel
//! - `NewMessage`: The fields a client supplies when posting
//! - `MessageQuery`: Cursor parameters for listing messages

use serde::{Deserialize, Serialize};

/// Default number of messages returned by a listing
pub const DEFAULT_MESSAGE_LIMIT: i64 = 100;

/// A named chat channel with a store-assigned id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Channel {
    pub id: i64,
    pub name: String,
}

/// A message as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub id: i64,
    pub channel_id: i64,
    pub user_id: i64,
    /// Author's username, empty when the author no longer exists
    pub user_name: String,
    pub text: String,
}

/// A message about to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub channel_id: i64,
    pub user_id: i64,
    pub text: String,
}

impl NewMessage {
    pub fn new(channel_id: i64, user_id: i64, text: impl Into<String>) -> Self {
        Self {
            channel_id,
            user_id,
            text: text.into(),
        }
    }
}

/// Cursor over a channel's messages
///
/// Returns messages with `id > after_id`, oldest first, at most `limit` of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageQuery {
    pub channel_id: i64,
    pub after_id: i64,
    pub limit: i64,
}

impl MessageQuery {
    /// Query from the start of a channel with the default limit
    pub fn channel(channel_id: i64) -> Self {
        Self {
            channel_id,
            after_id: 0,
            limit: DEFAULT_MESSAGE_LIMIT,
        }
    }

    /// Builder method: only messages newer than `after_id`
    pub fn after(mut self, after_id: i64) -> Self {
        self.after_id = after_id;
        self
    }

    /// Builder method: cap the number of results
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_query_defaults() {
        let query = MessageQuery::channel(3);
        assert_eq!(query.channel_id, 3);
        assert_eq!(query.after_id, 0);
        assert_eq!(query.limit, DEFAULT_MESSAGE_LIMIT);
    }

    #[test]
    fn test_message_query_builder() {
        let query = MessageQuery::channel(3).after(42).limit(10);
        assert_eq!(query.after_id, 42);
        assert_eq!(query.limit, 10);
    }

    #[test]
    fn test_channel_json_shape() {
        let channel = Channel {
            id: 1,
            name: "general".to_string(),
        };
        let json = serde_json::to_value(&channel).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "name": "general"}));
    }
}
