use replay_core::model::{Category, Session, SessionId};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("duplicate session id: {0}")]
    Conflict(String),

    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Read-only access to the pre-loaded session collection.
///
/// Implementations hold every session in memory; lookups never block.
pub trait SessionRepository: Send + Sync {
    /// All sessions in source order.
    fn list_sessions(&self) -> Vec<Arc<Session>>;

    /// Fetch a session by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no session carries the ID.
    fn get_session(&self, id: &SessionId) -> Result<Arc<Session>, StorageError>;

    /// Sessions in the given category, in source order.
    fn list_by_category(&self, category: &Category) -> Vec<Arc<Session>> {
        self.list_sessions()
            .into_iter()
            .filter(|session| session.category() == category)
            .collect()
    }
}

/// In-memory repository over an immutable session list.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    sessions: Arc<Vec<Arc<Session>>>,
    by_id: Arc<HashMap<SessionId, usize>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository from sessions, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if two sessions share an ID.
    pub fn from_sessions(sessions: Vec<Session>) -> Result<Self, StorageError> {
        let mut by_id = HashMap::with_capacity(sessions.len());
        for (index, session) in sessions.iter().enumerate() {
            if by_id.insert(session.id().clone(), index).is_some() {
                return Err(StorageError::Conflict(session.id().to_string()));
            }
        }
        Ok(Self {
            sessions: Arc::new(sessions.into_iter().map(Arc::new).collect()),
            by_id: Arc::new(by_id),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionRepository for InMemoryRepository {
    fn list_sessions(&self) -> Vec<Arc<Session>> {
        self.sessions.iter().map(Arc::clone).collect()
    }

    fn get_session(&self, id: &SessionId) -> Result<Arc<Session>, StorageError> {
        self.by_id
            .get(id)
            .and_then(|index| self.sessions.get(*index))
            .map(Arc::clone)
            .ok_or(StorageError::NotFound)
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub sessions: Arc<dyn SessionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory(repo: InMemoryRepository) -> Self {
        let sessions: Arc<dyn SessionRepository> = Arc::new(repo);
        Self { sessions }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::in_memory(InMemoryRepository::new())
    }
}
