//! Backend abstraction layer.
//!
//! This module defines the interface a task source must implement, along with
//! the task label type and error handling shared by all sources.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod factory;
pub mod todoist;

pub use factory::create_backend;
pub use todoist::TodoistBackend;

/// Common error types for backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Display text of a single task.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskLabel(String);

impl TaskLabel {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TaskLabel {
    fn from(content: String) -> Self {
        Self(content)
    }
}

impl From<&str> for TaskLabel {
    fn from(content: &str) -> Self {
        Self(content.to_string())
    }
}

/// Backend trait that all task sources must implement.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Returns the backend type identifier (e.g., "todoist").
    fn backend_type(&self) -> &str;

    /// Fetch every task label, in the order the source returns them.
    async fn fetch_items(&self) -> Result<Vec<TaskLabel>, BackendError>;
}
