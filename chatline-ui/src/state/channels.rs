//! Channel State
//!
//! The channel list panel's data and the rules it follows: parsing the
//! `:channel_id` route segment, picking the active channel, highlighting
//! rows and folding a create response into the list. Kept free of signals
//! so it can be tested without a browser.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::api::ClientError;

/// Server-assigned channel identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(pub i64);

impl ChannelId {
    /// Parse the raw `:channel_id` route segment
    ///
    /// Missing or non-integer segments yield `None`.
    pub fn from_route_param(raw: Option<&str>) -> Option<Self> {
        raw.and_then(|raw| raw.parse().ok())
    }

    /// Route that shows this channel
    pub fn chat_path(self) -> String {
        format!("/chat/{}", self.0)
    }
}

impl FromStr for ChannelId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ChannelId)
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A channel as listed by the API
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
}

/// Snapshot handed to whoever listens for channel selection
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedChannel {
    pub name: String,
    pub id: ChannelId,
}

impl From<&Channel> for SelectedChannel {
    fn from(channel: &Channel) -> Self {
        Self {
            name: channel.name.clone(),
            id: channel.id,
        }
    }
}

/// Response of `POST /channels`; extra fields are ignored
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedChannel {
    pub id: ChannelId,
}

/// One rendered entry of the channel list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelRow {
    pub channel: Channel,
    /// Whether this row matches the channel in the URL
    pub active: bool,
}

/// The panel's local, ordered channel collection
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelDirectory {
    channels: Vec<Channel>,
}

impl ChannelDirectory {
    /// Build from a `GET /channels` body; `null` means no channels
    pub fn from_response(body: Option<Vec<Channel>>) -> Self {
        Self {
            channels: body.unwrap_or_default(),
        }
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Linear scan for a channel by id
    pub fn find(&self, id: ChannelId) -> Option<&Channel> {
        self.channels.iter().find(|channel| channel.id == id)
    }

    /// Channel to report for the current route, if it is loaded
    pub fn select(&self, route: Option<ChannelId>) -> Option<SelectedChannel> {
        route
            .and_then(|id| self.find(id))
            .map(SelectedChannel::from)
    }

    /// Rows in display order, flagging the one that matches the route
    pub fn rows(&self, route: Option<ChannelId>) -> Vec<ChannelRow> {
        self.channels
            .iter()
            .map(|channel| ChannelRow {
                channel: channel.clone(),
                active: route == Some(channel.id),
            })
            .collect()
    }

    pub fn push(&mut self, channel: Channel) {
        self.channels.push(channel);
    }
}

/// Fold the outcome of a create request into the panel state
///
/// On success the new channel (server id, locally typed name) is appended
/// and the input is cleared. On failure neither is touched.
pub fn apply_create_result(
    directory: &mut ChannelDirectory,
    pending_name: &mut String,
    submitted_name: &str,
    result: Result<CreatedChannel, ClientError>,
) -> Result<ChannelId, ClientError> {
    let created = result?;

    directory.push(Channel {
        id: created.id,
        name: submitted_name.to_string(),
    });
    pending_name.clear();

    Ok(created.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn general() -> Channel {
        Channel {
            id: ChannelId(1),
            name: "general".to_string(),
        }
    }

    fn loaded(json: &str) -> ChannelDirectory {
        ChannelDirectory::from_response(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn test_load_single_channel() {
        let directory = loaded(r#"[{"id": 1, "name": "general"}]"#);

        let rows = directory.rows(None);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].channel.name, "general");
        assert!(!rows[0].active);
    }

    #[test]
    fn test_null_body_is_empty() {
        let directory = loaded("null");
        assert!(directory.is_empty());
        assert_eq!(directory, ChannelDirectory::default());
    }

    #[test]
    fn test_route_param_parsing() {
        assert_eq!(ChannelId::from_route_param(Some("1")), Some(ChannelId(1)));
        assert_eq!(ChannelId::from_route_param(Some(" 42 ")), Some(ChannelId(42)));
        assert_eq!(ChannelId::from_route_param(Some("abc")), None);
        assert_eq!(ChannelId::from_route_param(Some("12abc")), None);
        assert_eq!(ChannelId::from_route_param(Some("")), None);
        assert_eq!(ChannelId::from_route_param(None), None);
    }

    #[test]
    fn test_select_matching_route() {
        let directory = ChannelDirectory::from_response(Some(vec![general()]));
        let route = ChannelId::from_route_param(Some("1"));

        assert_eq!(
            directory.select(route),
            Some(SelectedChannel {
                name: "general".to_string(),
                id: ChannelId(1)
            })
        );
    }

    #[test]
    fn test_select_non_numeric_route() {
        let directory = ChannelDirectory::from_response(Some(vec![general()]));
        let route = ChannelId::from_route_param(Some("abc"));
        assert_eq!(directory.select(route), None);
    }

    #[test]
    fn test_select_before_load_then_after() {
        let route = ChannelId::from_route_param(Some("1"));

        let empty = ChannelDirectory::default();
        assert_eq!(empty.select(route), None);

        let populated = ChannelDirectory::from_response(Some(vec![general()]));
        assert!(populated.select(route).is_some());
    }

    #[test]
    fn test_select_unknown_id() {
        let directory = ChannelDirectory::from_response(Some(vec![general()]));
        assert_eq!(directory.select(Some(ChannelId(99))), None);
    }

    #[test]
    fn test_rows_highlight_route_channel() {
        let directory = loaded(r#"[{"id": 1, "name": "general"}, {"id": 2, "name": "random"}]"#);

        let active: Vec<bool> = directory
            .rows(Some(ChannelId(2)))
            .iter()
            .map(|row| row.active)
            .collect();
        assert_eq!(active, vec![false, true]);

        assert!(directory.rows(None).iter().all(|row| !row.active));
    }

    #[test]
    fn test_create_success_appends_and_clears() {
        let mut directory = ChannelDirectory::from_response(Some(vec![general()]));
        let mut pending = "random".to_string();
        let response: CreatedChannel =
            serde_json::from_str(r#"{"id": 5, "message": "Channel created successfully"}"#).unwrap();

        let id = apply_create_result(&mut directory, &mut pending, "random", Ok(response)).unwrap();

        assert_eq!(id, ChannelId(5));
        assert_eq!(
            directory.channels().last(),
            Some(&Channel {
                id: ChannelId(5),
                name: "random".to_string()
            })
        );
        assert_eq!(directory.len(), 2);
        assert_eq!(pending, "");
    }

    #[test]
    fn test_create_failure_leaves_state() {
        let mut directory = ChannelDirectory::from_response(Some(vec![general()]));
        let before = directory.clone();
        let mut pending = "random".to_string();

        let err = apply_create_result(
            &mut directory,
            &mut pending,
            "random",
            Err(ClientError::Status {
                status: 500,
                message: "boom".to_string(),
            }),
        )
        .unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(directory, before);
        assert_eq!(pending, "random");
    }

    #[test]
    fn test_rejected_blank_name_keeps_input() {
        let mut directory = ChannelDirectory::default();
        let mut pending = "   ".to_string();
        let rejection = ClientError::from_error_body(
            400,
            r#"{"error": {"code": "VALIDATION_ERROR", "message": "Channel name cannot be empty"}}"#,
        );

        assert!(apply_create_result(&mut directory, &mut pending, "   ", Err(rejection)).is_err());
        assert!(directory.is_empty());
        assert_eq!(pending, "   ");
    }

    #[test]
    fn test_chat_path() {
        assert_eq!(ChannelId(7).chat_path(), "/chat/7");
    }
}
