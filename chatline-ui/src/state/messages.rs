//! Message Log
//!
//! Messages shown for the open channel, grown incrementally by polling.

use serde::{Deserialize, Serialize};

use super::channels::ChannelId;

/// A message as returned by `GET /messages`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub channel_id: ChannelId,
    pub user_id: i64,
    #[serde(default)]
    pub user_name: String,
    pub text: String,
}

impl Message {
    /// Name to show next to the text
    pub fn author(&self) -> String {
        if self.user_name.is_empty() {
            format!("user {}", self.user_id)
        } else {
            self.user_name.clone()
        }
    }
}

/// Ordered messages of a single channel
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageLog {
    channel: Option<ChannelId>,
    messages: Vec<Message>,
}

impl MessageLog {
    /// Empty log bound to `channel`
    pub fn for_channel(channel: Option<ChannelId>) -> Self {
        Self {
            channel,
            messages: Vec::new(),
        }
    }

    pub fn channel(&self) -> Option<ChannelId> {
        self.channel
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Highest message id seen, `0` when empty
    pub fn last_id(&self) -> i64 {
        self.messages.last().map(|m| m.id).unwrap_or(0)
    }

    /// Append a polled batch, returning how many messages were new
    ///
    /// Batches fetched for another channel are dropped, as are ids at or
    /// below the last one already held.
    pub fn merge(&mut self, channel: ChannelId, batch: Vec<Message>) -> usize {
        if self.channel != Some(channel) {
            return 0;
        }

        let mut added = 0;
        for message in batch {
            if message.channel_id == channel && message.id > self.last_id() {
                self.messages.push(message);
                added += 1;
            }
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(id: i64, channel: i64, text: &str) -> Message {
        Message {
            id,
            channel_id: ChannelId(channel),
            user_id: 1,
            user_name: "alice".to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_merge_appends_in_order() {
        let mut log = MessageLog::for_channel(Some(ChannelId(1)));
        assert_eq!(log.last_id(), 0);

        let added = log.merge(ChannelId(1), vec![message(1, 1, "hi"), message(2, 1, "there")]);
        assert_eq!(added, 2);
        assert_eq!(log.last_id(), 2);
        assert_eq!(log.messages()[0].text, "hi");
    }

    #[test]
    fn test_merge_skips_already_seen() {
        let mut log = MessageLog::for_channel(Some(ChannelId(1)));
        log.merge(ChannelId(1), vec![message(1, 1, "a"), message(2, 1, "b")]);

        let added = log.merge(ChannelId(1), vec![message(2, 1, "b"), message(3, 1, "c")]);
        assert_eq!(added, 1);
        assert_eq!(log.messages().len(), 3);
    }

    #[test]
    fn test_merge_drops_stale_channel() {
        let mut log = MessageLog::for_channel(Some(ChannelId(2)));

        assert_eq!(log.merge(ChannelId(1), vec![message(1, 1, "old")]), 0);
        assert!(log.messages().is_empty());

        let mut unbound = MessageLog::default();
        assert_eq!(unbound.merge(ChannelId(1), vec![message(1, 1, "x")]), 0);
    }

    #[test]
    fn test_deserialize_without_user_name() {
        let parsed: Message =
            serde_json::from_str(r#"{"id": 4, "channel_id": 1, "user_id": 9, "text": "yo"}"#).unwrap();
        assert_eq!(parsed.user_name, "");
        assert_eq!(parsed.author(), "user 9");
        assert_eq!(message(1, 1, "x").author(), "alice");
    }
}
