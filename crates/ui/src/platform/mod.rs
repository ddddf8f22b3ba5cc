use std::sync::Arc;

mod desktop;

pub trait UiLinkOpener: Send + Sync {
    fn open_url(&self, url: &str);
}

pub type LinkOpenerRef = Arc<dyn UiLinkOpener>;

pub use desktop::DesktopLinkOpener;

/// Opener that ignores every request, for tests and headless rendering.
pub struct NoopLinkOpener;

impl UiLinkOpener for NoopLinkOpener {
    fn open_url(&self, url: &str) {
        tracing::debug!(url, "link open suppressed");
    }
}
