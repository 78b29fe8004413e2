//! Mock API server implementation.

use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tracing::info;

use super::cors::CorsPolicy;
use super::routes::{api_routes, AppState};
use super::{BODY_LIMIT, DEFAULT_BIND, DEFAULT_PAGE, DEFAULT_PORT, DEFAULT_ROOT};
use crate::browser;
use crate::error::ServeError;
use crate::shutdown::wait_for_shutdown_signal;

/// Mock server configuration
#[derive(Debug, Clone)]
pub struct MockServerConfig {
    /// Port to listen on
    pub port: u16,
    /// Host to bind to
    pub bind: String,
    /// Directory served for unmatched paths
    pub root: PathBuf,
    /// HTML test page served at `/` and `/test`
    pub page: PathBuf,
    /// Open the browser at the root URL on startup
    pub open_browser: bool,
}

impl Default for MockServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
            root: PathBuf::from(DEFAULT_ROOT),
            page: PathBuf::from(DEFAULT_PAGE),
            open_browser: true,
        }
    }
}

impl MockServerConfig {
    /// Set the listen port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the bind host
    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.bind = bind.into();
        self
    }

    /// Set the static-fallback root
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the HTML test page path
    pub fn with_page(mut self, page: impl Into<PathBuf>) -> Self {
        self.page = page.into();
        self
    }

    /// Enable or disable the startup browser launch
    pub fn with_open_browser(mut self, open: bool) -> Self {
        self.open_browser = open;
        self
    }

    /// Listen address in `host:port` form
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    /// Root URL, as handed to the browser
    pub fn root_url(&self) -> String {
        format!("http://{}:{}", self.bind, self.port)
    }
}

/// Mock API server instance
pub struct MockApiServer {
    config: MockServerConfig,
    state: Arc<AppState>,
}

impl MockApiServer {
    /// Create a server with default configuration
    pub fn new() -> Self {
        Self::with_config(MockServerConfig::default())
    }

    /// Create a server with the given configuration
    pub fn with_config(config: MockServerConfig) -> Self {
        let state = Arc::new(AppState::new(&config.page));
        Self { config, state }
    }

    /// Get the server configuration
    pub fn config(&self) -> &MockServerConfig {
        &self.config
    }

    /// Build the router: mock routes first, static fallback for the
    /// rest, CORS and body-limit layers over everything.
    pub fn build_router(&self) -> Router {
        api_routes()
            .fallback_service(ServeDir::new(&self.config.root))
            .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
            .layer(CorsPolicy::default().into_layer())
            .with_state(self.state.clone())
    }

    /// Run the server until interrupted.
    pub async fn run(&self) -> Result<(), ServeError> {
        let router = self.build_router();
        let addr = self.config.addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|source| ServeError::Bind {
                addr: addr.clone(),
                source,
            })?;

        info!(%addr, page = %self.config.page.display(), "mock API server listening");
        print_banner(&self.config);

        if self.config.open_browser {
            browser::open_in_browser(&self.config.root_url());
        }

        axum::serve(listener, router)
            .with_graceful_shutdown(wait_for_shutdown_signal())
            .await?;

        println!("Server stopped");
        Ok(())
    }
}

impl Default for MockApiServer {
    fn default() -> Self {
        Self::new()
    }
}

fn print_banner(config: &MockServerConfig) {
    let base = config.root_url();
    println!("Mock API server on {}", base);
    println!("Endpoints:");
    println!("  GET  {}/                    - Test page", base);
    println!("  GET  {}/api/weather         - Mock weather data", base);
    println!("  GET  {}/api/location        - Mock location data", base);
    println!("  GET  {}/api/journal         - Journal status", base);
    println!("  POST {}/api/journal/create  - Create journal entry", base);
    println!("Press Ctrl+C to stop");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = MockServerConfig::default();
        assert_eq!(config.port, 8888);
        assert_eq!(config.bind, "localhost");
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.page, PathBuf::from("test-interface.html"));
        assert!(config.open_browser);
    }

    #[test]
    fn test_config_builder() {
        let config = MockServerConfig::default()
            .with_port(9999)
            .with_bind("127.0.0.1")
            .with_root("public")
            .with_page("index.html")
            .with_open_browser(false);

        assert_eq!(config.port, 9999);
        assert_eq!(config.bind, "127.0.0.1");
        assert_eq!(config.root, PathBuf::from("public"));
        assert_eq!(config.page, PathBuf::from("index.html"));
        assert!(!config.open_browser);
    }

    #[test]
    fn test_config_urls() {
        let config = MockServerConfig::default();
        assert_eq!(config.addr(), "localhost:8888");
        assert_eq!(config.root_url(), "http://localhost:8888");
    }

    #[test]
    fn test_server_new() {
        let server = MockApiServer::new();
        assert_eq!(server.config().port, 8888);
    }
}
