//! Response-header policy for the static server.
//!
//! Cache busting is applied as overriding header layers and MIME
//! correction as path-keyed middleware. Both wrap the whole router, so
//! the file service (or any route added later) cannot bypass them.

use axum::extract::Request;
use axum::http::{header, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;

/// `Cache-Control` value stamped on every response
pub const CACHE_CONTROL_VALUE: &str = "no-cache, no-store, must-revalidate";

/// `Pragma` value stamped on every response
pub const PRAGMA_VALUE: &str = "no-cache";

/// `Expires` value stamped on every response
pub const EXPIRES_VALUE: &str = "0";

/// Content type forced for a request path, if any.
///
/// Keyed on the request path, not the served content, so a bundle asset
/// is labelled correctly no matter what the file service inferred.
pub fn forced_content_type(path: &str) -> Option<&'static str> {
    if path.ends_with(".js") {
        Some("application/javascript")
    } else if path.ends_with(".wasm") {
        Some("application/wasm")
    } else if path.ends_with(".json") {
        Some("application/json")
    } else {
        None
    }
}

/// Middleware: rewrite `Content-Type` on successful responses for the
/// extensions in [`forced_content_type`].
pub async fn override_content_type(req: Request, next: Next) -> Response {
    let forced = forced_content_type(req.uri().path());
    let mut response = next.run(req).await;

    if response.status().is_success() {
        if let Some(value) = forced {
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, HeaderValue::from_static(value));
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forced_content_type_js() {
        assert_eq!(
            forced_content_type("/main.dart.js"),
            Some("application/javascript")
        );
    }

    #[test]
    fn test_forced_content_type_wasm() {
        assert_eq!(
            forced_content_type("/canvaskit/canvaskit.wasm"),
            Some("application/wasm")
        );
    }

    #[test]
    fn test_forced_content_type_json() {
        assert_eq!(
            forced_content_type("/assets/AssetManifest.json"),
            Some("application/json")
        );
    }

    #[test]
    fn test_forced_content_type_other_extensions_untouched() {
        assert_eq!(forced_content_type("/index.html"), None);
        assert_eq!(forced_content_type("/favicon.png"), None);
        assert_eq!(forced_content_type("/"), None);
    }

    #[test]
    fn test_forced_content_type_is_suffix_based() {
        // "js" somewhere in the path is not enough
        assert_eq!(forced_content_type("/js/readme.txt"), None);
        assert_eq!(forced_content_type("/wasm.html"), None);
    }

    #[test]
    fn test_header_values_are_valid() {
        HeaderValue::from_static(CACHE_CONTROL_VALUE);
        HeaderValue::from_static(PRAGMA_VALUE);
        HeaderValue::from_static(EXPIRES_VALUE);
    }
}
