use std::sync::Arc;

use services::{CanvasService, SessionCatalogService};

use crate::platform::LinkOpenerRef;

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<SessionCatalogService>;
    fn canvas(&self) -> Arc<CanvasService>;
    fn link_opener(&self) -> LinkOpenerRef;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<SessionCatalogService>,
    canvas: Arc<CanvasService>,
    link_opener: LinkOpenerRef,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            canvas: app.canvas(),
            link_opener: app.link_opener(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<SessionCatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn canvas(&self) -> Arc<CanvasService> {
        Arc::clone(&self.canvas)
    }

    pub fn open_url(&self, url: &str) {
        self.link_opener.open_url(url);
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
