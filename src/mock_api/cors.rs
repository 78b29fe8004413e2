//! CORS policy for the mock API server.
//!
//! Applied as a router-wide layer, so every response-producing path
//! (mock endpoints, the test page, static fallback, error bodies) gets
//! the same headers without any route opting in.

use axum::http::{header, HeaderName, Method};
use tower_http::cors::{Any, CorsLayer};

/// CORS policy applied to every route
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    /// Allowed HTTP methods
    pub allowed_methods: Vec<Method>,
    /// Allowed request headers
    pub allowed_headers: Vec<HeaderName>,
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self {
            allowed_methods: vec![Method::GET, Method::POST, Method::OPTIONS],
            allowed_headers: vec![header::CONTENT_TYPE],
        }
    }
}

impl CorsPolicy {
    /// Check if a method is allowed
    pub fn is_method_allowed(&self, method: &Method) -> bool {
        self.allowed_methods.contains(method)
    }

    /// Check if a request header is allowed
    pub fn is_header_allowed(&self, name: &HeaderName) -> bool {
        self.allowed_headers.contains(name)
    }

    /// Convert to a tower-http layer.
    ///
    /// All origins are allowed; this is a local testing tool, not a
    /// production surface.
    pub fn into_layer(self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(self.allowed_methods)
            .allow_headers(self.allowed_headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_methods() {
        let policy = CorsPolicy::default();
        assert!(policy.is_method_allowed(&Method::GET));
        assert!(policy.is_method_allowed(&Method::POST));
        assert!(policy.is_method_allowed(&Method::OPTIONS));
        assert!(!policy.is_method_allowed(&Method::DELETE));
        assert!(!policy.is_method_allowed(&Method::PUT));
    }

    #[test]
    fn test_default_headers() {
        let policy = CorsPolicy::default();
        assert!(policy.is_header_allowed(&header::CONTENT_TYPE));
        assert!(!policy.is_header_allowed(&header::AUTHORIZATION));
    }

    #[test]
    fn test_into_layer() {
        let _layer = CorsPolicy::default().into_layer();
    }
}
