//! HTTP API Client
//!
//! Functions for communicating with the Chatline REST API.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::{get_api_base, ClientError};
use crate::state::channels::{ChannelDirectory, ChannelId, CreatedChannel};
use crate::state::messages::Message;

// ============ Request / Response Types ============

#[derive(serde::Serialize)]
struct CredentialsRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(serde::Serialize)]
struct CreateChannelRequest<'a> {
    name: &'a str,
}

#[derive(serde::Serialize)]
struct CreateMessageRequest<'a> {
    channel_id: ChannelId,
    user_id: i64,
    text: &'a str,
}

/// Body returned by every endpoint that creates something
#[derive(Debug, serde::Deserialize)]
struct IdResponse {
    id: i64,
}

// ============ Helpers ============

/// Fail with the server's message unless the status is 2xx
async fn ensure_ok(response: Response) -> Result<Response, ClientError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::from_error_body(status, &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ClientError> {
    let response = Request::get(url).send().await?;
    read_json(ensure_ok(response).await?).await
}

async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, ClientError> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ClientError::Encode(e.to_string()))?
        .send()
        .await?;

    read_json(ensure_ok(response).await?).await
}

// ============ Channels ============

/// Fetch all channels
///
/// A `null` body is an empty directory, not an error.
pub async fn fetch_channels() -> Result<ChannelDirectory, ClientError> {
    let body = get_json(&format!("{}/channels", get_api_base())).await?;
    Ok(ChannelDirectory::from_response(body))
}

/// Create a channel, returning the server-assigned id
pub async fn create_channel(name: &str) -> Result<CreatedChannel, ClientError> {
    post_json(
        &format!("{}/channels", get_api_base()),
        &CreateChannelRequest { name },
    )
    .await
}

// ============ Messages ============

/// Fetch messages in a channel newer than `after_id`
pub async fn fetch_messages(channel: ChannelId, after_id: i64) -> Result<Vec<Message>, ClientError> {
    let url = format!(
        "{}/messages?channelID={}&lastMessageID={}",
        get_api_base(),
        channel,
        after_id
    );

    let body: Option<Vec<Message>> = get_json(&url).await?;
    Ok(body.unwrap_or_default())
}

/// Post a message, returning its id
pub async fn send_message(channel: ChannelId, user_id: i64, text: &str) -> Result<i64, ClientError> {
    let created: IdResponse = post_json(
        &format!("{}/messages", get_api_base()),
        &CreateMessageRequest {
            channel_id: channel,
            user_id,
            text,
        },
    )
    .await?;

    Ok(created.id)
}

// ============ Users ============

/// Check credentials, returning the user id
pub async fn login(username: &str, password: &str) -> Result<i64, ClientError> {
    let response: IdResponse = post_json(
        &format!("{}/login", get_api_base()),
        &CredentialsRequest { username, password },
    )
    .await?;

    Ok(response.id)
}

/// Register a user, returning the new id
pub async fn create_user(username: &str, password: &str) -> Result<i64, ClientError> {
    let response: IdResponse = post_json(
        &format!("{}/users", get_api_base()),
        &CredentialsRequest { username, password },
    )
    .await?;

    Ok(response.id)
}
