//! Loading the static session collection from JSON.

use std::path::Path;

use replay_core::model::Session;

use crate::repository::{InMemoryRepository, Storage, StorageError};

mod record;

pub use record::{JourneyStepRecord, SessionDocument, SessionRecord};

/// Sample sessions compiled into the binary.
pub const EMBEDDED_FIXTURE: &str = include_str!("../../fixtures/sessions.json");

/// Parse and validate a session document.
///
/// Step order is kept as recorded. Sessions whose steps go back in time are
/// logged, since the step mapper assumes ascending times.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON or invalid records.
pub fn parse_sessions(json: &str) -> Result<Vec<Session>, StorageError> {
    let document: SessionDocument =
        serde_json::from_str(json).map_err(|e| StorageError::Serialization(e.to_string()))?;

    let mut sessions = Vec::with_capacity(document.sessions.len());
    for record in document.sessions {
        let session = record.into_session()?;
        if !session.journey_is_sorted() {
            tracing::warn!(
                session_id = %session.id(),
                "journey steps are not in time order; active step tracking may stop early"
            );
        }
        sessions.push(session);
    }
    Ok(sessions)
}

/// Build a repository from a JSON document string.
///
/// # Errors
///
/// Returns `StorageError` for parse, validation, or duplicate-id failures.
pub fn repository_from_str(json: &str) -> Result<InMemoryRepository, StorageError> {
    let sessions = parse_sessions(json)?;
    tracing::debug!(count = sessions.len(), "loaded sessions");
    InMemoryRepository::from_sessions(sessions)
}

impl Storage {
    /// Build a `Storage` from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the file cannot be read, or any
    /// parse/validation error from the document.
    pub fn from_json_file(path: &Path) -> Result<Self, StorageError> {
        let contents = std::fs::read_to_string(path).map_err(|e| StorageError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let repo = repository_from_str(&contents)?;
        tracing::info!(path = %path.display(), sessions = repo.len(), "session store ready");
        Ok(Self::in_memory(repo))
    }

    /// Build a `Storage` from the embedded sample sessions.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the embedded document is invalid.
    pub fn embedded_fixture() -> Result<Self, StorageError> {
        let repo = repository_from_str(EMBEDDED_FIXTURE)?;
        tracing::info!(sessions = repo.len(), "session store ready (embedded fixture)");
        Ok(Self::in_memory(repo))
    }
}
