//! Backend factory for creating backend instances from configuration.

use anyhow::{anyhow, Result};

use super::{todoist::TodoistBackend, Backend};
use crate::config::{ApiConfig, Credential};
use crate::constants::BACKEND_TODOIST;

/// Create a backend instance from the API configuration and credential.
///
/// # Errors
/// Returns error if the backend type is unknown or the HTTP client cannot
/// be built.
pub fn create_backend(api: &ApiConfig, credential: Credential) -> Result<Box<dyn Backend>> {
    match api.backend_type.as_str() {
        BACKEND_TODOIST => Ok(Box::new(TodoistBackend::new(credential, Some(api.endpoint.clone()))?)),
        other => Err(anyhow!("Unknown backend type: {}", other)),
    }
}
