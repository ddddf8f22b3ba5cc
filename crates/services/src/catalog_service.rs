use std::sync::Arc;

use replay_core::model::{Category, Session, SessionId};
use storage::{SessionRepository, StorageError};

use crate::error::CatalogError;

/// Sessions sharing a category label, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: Category,
    pub sessions: Vec<Arc<Session>>,
}

impl CategoryGroup {
    /// Navigation target when the category is opened.
    #[must_use]
    pub fn first_session_id(&self) -> Option<&SessionId> {
        self.sessions.first().map(|session| session.id())
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

/// Result of a delete request. Deleting sessions is not supported by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    NotSupported,
}

/// Read-only facade over the session store used by the home and session views.
#[derive(Clone)]
pub struct SessionCatalogService {
    sessions: Arc<dyn SessionRepository>,
}

impl SessionCatalogService {
    #[must_use]
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    #[must_use]
    pub fn list_sessions(&self) -> Vec<Arc<Session>> {
        self.sessions.list_sessions()
    }

    /// Group sessions by category.
    ///
    /// Categories appear in the order their first session appears; sessions
    /// without a category land in the "Uncategorized" group.
    #[must_use]
    pub fn group_by_category(&self) -> Vec<CategoryGroup> {
        let mut groups: Vec<CategoryGroup> = Vec::new();
        for session in self.sessions.list_sessions() {
            match groups
                .iter_mut()
                .find(|group| group.category == *session.category())
            {
                Some(group) => group.sessions.push(session),
                None => groups.push(CategoryGroup {
                    category: session.category().clone(),
                    sessions: vec![session],
                }),
            }
        }
        groups
    }

    /// Fetch a session by ID.
    ///
    /// Returns `Ok(None)` when the session does not exist.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub fn find_session(&self, id: &SessionId) -> Result<Option<Arc<Session>>, CatalogError> {
        match self.sessions.get_session(id) {
            Ok(session) => Ok(Some(session)),
            Err(StorageError::NotFound) => {
                tracing::debug!(session_id = %id, "session not found");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Like [`Self::find_session`], for an unparsed route parameter.
    ///
    /// Blank ids are treated as unknown.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub fn find_by_raw_id(&self, raw: &str) -> Result<Option<Arc<Session>>, CatalogError> {
        match SessionId::new(raw) {
            Ok(id) => self.find_session(&id),
            Err(_) => Ok(None),
        }
    }

    #[must_use]
    pub fn first_session_in_category(&self, category: &Category) -> Option<SessionId> {
        self.sessions
            .list_by_category(category)
            .first()
            .map(|session| session.id().clone())
    }

    /// Deleting is a stub: the request is logged and nothing changes.
    pub fn request_delete(&self, id: &SessionId) -> DeleteOutcome {
        tracing::info!(session_id = %id, "session delete requested; store is read-only");
        DeleteOutcome::NotSupported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use replay_core::model::{JourneyStep, SessionDraft};
    use replay_core::time::fixed_now;
    use storage::InMemoryRepository;

    fn build_session(id: &str, category: Option<&str>) -> Session {
        let now = fixed_now();
        SessionDraft {
            id: SessionId::new(id).unwrap(),
            category: category.map(str::to_string),
            start_time: now,
            end_time: now,
            video: format!("/videos/{id}.mp4"),
            journey: vec![JourneyStep::new("Opened app", 0.0).unwrap()],
            score: 5.0,
            analysis: None,
            analysis_timestamp: None,
            session_url: None,
        }
        .validate()
        .unwrap()
    }

    fn service(sessions: Vec<Session>) -> SessionCatalogService {
        let repo = InMemoryRepository::from_sessions(sessions).unwrap();
        SessionCatalogService::new(Arc::new(repo))
    }

    #[test]
    fn groups_in_first_appearance_order() {
        let catalog = service(vec![
            build_session("a", Some("Search")),
            build_session("b", None),
            build_session("c", Some("Checkout")),
            build_session("d", Some("Search")),
        ]);

        let groups = catalog.group_by_category();
        let names: Vec<_> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(names, vec!["Search", "Uncategorized", "Checkout"]);
        assert_eq!(groups[0].len(), 2);
        assert_eq!(groups[0].first_session_id().unwrap().as_str(), "a");
        assert!(groups.iter().all(|g| !g.is_empty()));
    }

    #[test]
    fn empty_store_has_no_groups() {
        let catalog = service(Vec::new());
        assert!(catalog.group_by_category().is_empty());
        assert!(catalog.list_sessions().is_empty());
    }

    #[test]
    fn unknown_id_is_none_not_error() {
        let catalog = service(vec![build_session("a", None)]);
        assert!(catalog.find_by_raw_id("nope").unwrap().is_none());
        assert!(catalog.find_by_raw_id("  ").unwrap().is_none());
        assert!(catalog.find_by_raw_id("a").unwrap().is_some());
    }

    #[test]
    fn first_session_in_category_follows_source_order() {
        let catalog = service(vec![
            build_session("x", Some("Checkout")),
            build_session("y", Some("Checkout")),
        ]);
        let first = catalog
            .first_session_in_category(&Category::new("Checkout").unwrap())
            .unwrap();
        assert_eq!(first.as_str(), "x");
        assert!(
            catalog
                .first_session_in_category(&Category::uncategorized())
                .is_none()
        );
    }

    #[test]
    fn delete_is_not_supported_and_keeps_sessions() {
        let catalog = service(vec![build_session("a", None)]);
        let outcome = catalog.request_delete(&SessionId::new("a").unwrap());
        assert_eq!(outcome, DeleteOutcome::NotSupported);
        assert_eq!(catalog.list_sessions().len(), 1);
    }
}
