//! Static web server implementation.

use axum::http::{header, HeaderValue};
use axum::{middleware, Router};
use std::path::PathBuf;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;

use super::{headers, DEFAULT_BIND, DEFAULT_PORT, DEFAULT_ROOT};
use crate::error::ServeError;
use crate::shutdown::wait_for_shutdown_signal;

/// Static server configuration
#[derive(Debug, Clone)]
pub struct StaticServerConfig {
    /// Port to listen on
    pub port: u16,
    /// Address to bind to
    pub bind: String,
    /// Directory holding the prebuilt bundle
    pub root: PathBuf,
}

impl Default for StaticServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
            root: PathBuf::from(DEFAULT_ROOT),
        }
    }
}

impl StaticServerConfig {
    /// Set the listen port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the bind address
    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.bind = bind.into();
        self
    }

    /// Set the bundle directory
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Listen address in `host:port` form
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

/// Static web server instance
pub struct StaticWebServer {
    config: StaticServerConfig,
}

impl StaticWebServer {
    /// Create a server with default configuration
    pub fn new() -> Self {
        Self::with_config(StaticServerConfig::default())
    }

    /// Create a server with the given configuration
    pub fn with_config(config: StaticServerConfig) -> Self {
        Self { config }
    }

    /// Get the server configuration
    pub fn config(&self) -> &StaticServerConfig {
        &self.config
    }

    /// Build the router with all header policy attached.
    ///
    /// The bundle root is threaded in here explicitly; the server never
    /// changes the process working directory.
    pub fn build_router(&self) -> Router {
        Router::new()
            .fallback_service(ServeDir::new(&self.config.root))
            .layer(middleware::from_fn(headers::override_content_type))
            .layer(
                ServiceBuilder::new()
                    .layer(SetResponseHeaderLayer::overriding(
                        header::CACHE_CONTROL,
                        HeaderValue::from_static(headers::CACHE_CONTROL_VALUE),
                    ))
                    .layer(SetResponseHeaderLayer::overriding(
                        header::PRAGMA,
                        HeaderValue::from_static(headers::PRAGMA_VALUE),
                    ))
                    .layer(SetResponseHeaderLayer::overriding(
                        header::EXPIRES,
                        HeaderValue::from_static(headers::EXPIRES_VALUE),
                    )),
            )
    }

    /// Run the server until interrupted.
    ///
    /// Fails before binding if the bundle directory is missing, so a
    /// misconfigured run never leaves a listening socket behind.
    pub async fn run(&self) -> Result<(), ServeError> {
        if !self.config.root.is_dir() {
            return Err(ServeError::MissingAssetRoot(self.config.root.clone()));
        }

        let router = self.build_router();
        let addr = self.config.addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|source| ServeError::Bind {
                addr: addr.clone(),
                source,
            })?;

        info!(root = %self.config.root.display(), %addr, "serving web bundle");
        println!(
            "Serving {} at http://localhost:{}",
            self.config.root.display(),
            self.config.port
        );
        println!("Press Ctrl+C to stop");

        axum::serve(listener, router)
            .with_graceful_shutdown(wait_for_shutdown_signal())
            .await?;

        println!("Server stopped");
        Ok(())
    }
}

impl Default for StaticWebServer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = StaticServerConfig::default();
        assert_eq!(config.port, 8087);
        assert_eq!(config.bind, "0.0.0.0");
        assert_eq!(config.root, PathBuf::from("build/web"));
    }

    #[test]
    fn test_config_builder() {
        let config = StaticServerConfig::default()
            .with_port(3000)
            .with_bind("127.0.0.1")
            .with_root("dist");

        assert_eq!(config.port, 3000);
        assert_eq!(config.bind, "127.0.0.1");
        assert_eq!(config.root, PathBuf::from("dist"));
    }

    #[test]
    fn test_config_addr() {
        let config = StaticServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8087");
    }

    #[test]
    fn test_server_new() {
        let server = StaticWebServer::new();
        assert_eq!(server.config().port, 8087);
    }

    #[tokio::test]
    async fn test_run_fails_on_missing_root() {
        let tmp = tempfile::tempdir().unwrap();
        let config = StaticServerConfig::default().with_root(tmp.path().join("no-such-bundle"));
        let server = StaticWebServer::with_config(config);

        let err = server.run().await.unwrap_err();
        assert!(matches!(err, ServeError::MissingAssetRoot(_)));
    }
}
