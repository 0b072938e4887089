//! Todoist backend implementation using the sync API.

use async_trait::async_trait;
use log::{debug, info};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{Backend, BackendError, TaskLabel};
use crate::config::Credential;
use crate::constants::{BACKEND_TODOIST, DEFAULT_SYNC_ENDPOINT, SYNC_RESOURCE_TYPES, SYNC_TOKEN_FULL};

/// Longest response body excerpt kept in a status error
const ERROR_BODY_LIMIT: usize = 200;

/// Body of a sync response; only the item collection is read.
#[derive(Debug, Deserialize)]
pub struct SyncResponse {
    pub items: Vec<SyncEntry>,
}

/// One entry of the item collection.
///
/// Entries that are not objects, or whose `content` is missing or not a
/// string, decode with `content: None` instead of failing the response.
#[derive(Debug, Default, PartialEq)]
pub struct SyncEntry {
    pub content: Option<String>,
}

impl<'de> Deserialize<'de> for SyncEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let content = value
            .as_object()
            .and_then(|entry| entry.get("content"))
            .and_then(Value::as_str)
            .map(str::to_string);
        Ok(Self { content })
    }
}

impl SyncResponse {
    /// Keep the entries carrying a string `content`, in order.
    pub fn into_labels(self) -> Vec<TaskLabel> {
        self.items
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match entry.content {
                Some(content) => Some(TaskLabel::from(content)),
                None => {
                    debug!("Skipping item {} without string content", index);
                    None
                }
            })
            .collect()
    }
}

/// Decode a raw sync response body into task labels.
pub fn parse_sync_response(body: &str) -> Result<Vec<TaskLabel>, BackendError> {
    let response: SyncResponse =
        serde_json::from_str(body).map_err(|e| BackendError::InvalidData(format!("sync response: {}", e)))?;
    Ok(response.into_labels())
}

/// Todoist backend implementation.
pub struct TodoistBackend {
    client: reqwest::Client,
    credential: Credential,
    endpoint: String,
}

impl TodoistBackend {
    /// Create a new Todoist backend owning the credential.
    ///
    /// `endpoint` overrides the public sync endpoint (used for tests).
    pub fn new(credential: Credential, endpoint: Option<String>) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        Ok(Self {
            client,
            credential,
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_SYNC_ENDPOINT.to_string()),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Backend for TodoistBackend {
    fn backend_type(&self) -> &str {
        BACKEND_TODOIST
    }

    async fn fetch_items(&self) -> Result<Vec<TaskLabel>, BackendError> {
        info!("Requesting full item snapshot from {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.credential.token())
            .form(&[("sync_token", SYNC_TOKEN_FULL), ("resource_types", SYNC_RESOURCE_TYPES)])
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        parse_sync_response(&body)
    }
}
