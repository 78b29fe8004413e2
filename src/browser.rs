//! Best-effort browser launch.

use tracing::warn;

/// Open `url` in the local browser.
///
/// A machine without a browser (CI, containers, headless boxes) must
/// still be able to run the server, so failure is logged and swallowed.
pub fn open_in_browser(url: &str) {
    match open::that(url) {
        Ok(()) => {}
        Err(e) => warn!("could not open browser at {url}: {e}"),
    }
}
