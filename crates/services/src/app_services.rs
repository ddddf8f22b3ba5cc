use std::sync::Arc;

use storage::Storage;

use crate::canvas::{CanvasConfig, CanvasService};
use crate::catalog_service::SessionCatalogService;

/// Assembles app-facing services from an injected session store.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<SessionCatalogService>,
    canvas: Arc<CanvasService>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, canvas: CanvasService) -> Self {
        Self {
            catalog: Arc::new(SessionCatalogService::new(Arc::clone(&storage.sessions))),
            canvas: Arc::new(canvas),
        }
    }

    /// Services backed by the HTTP canvas collaborator.
    #[must_use]
    pub fn with_http_canvas(storage: &Storage, config: CanvasConfig) -> Self {
        Self::new(storage, CanvasService::http(config))
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<SessionCatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn canvas(&self) -> Arc<CanvasService> {
        Arc::clone(&self.canvas)
    }
}
