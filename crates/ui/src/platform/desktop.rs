use std::process::Command;

use super::UiLinkOpener;

/// Opens session links in the system browser.
pub struct DesktopLinkOpener;

impl UiLinkOpener for DesktopLinkOpener {
    fn open_url(&self, url: &str) {
        let url = url.trim();
        if url.is_empty() {
            return;
        }
        #[cfg(target_os = "macos")]
        let result = Command::new("open").arg(url).spawn();
        #[cfg(target_os = "windows")]
        let result = Command::new("cmd").args(["/C", "start", "", url]).spawn();
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let result = Command::new("xdg-open").arg(url).spawn();

        if let Err(err) = result {
            tracing::warn!(url, error = %err, "failed to open link");
        }
    }
}
