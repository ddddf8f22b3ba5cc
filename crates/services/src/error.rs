//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;

/// Errors emitted by `SessionCatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by canvas creation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CanvasError {
    #[error("prompt cannot be empty")]
    EmptyPrompt,
    #[error("canvas service rejected the request with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("canvas service returned no canvas id")]
    MissingId,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl CanvasError {
    /// Short text suitable for a transient notification.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            CanvasError::EmptyPrompt => "Type a prompt before sending.".to_string(),
            CanvasError::Rejected { message, .. } if !message.trim().is_empty() => {
                message.trim().to_string()
            }
            CanvasError::Rejected { status, .. } => {
                format!("The canvas service returned status {status}.")
            }
            CanvasError::MissingId => "The canvas service returned an invalid response.".to_string(),
            CanvasError::Http(_) => "Could not reach the canvas service.".to_string(),
        }
    }
}
