//! Error types for server startup and configuration.
//!
//! Request-level failures (missing files, bad JSON bodies) are handled
//! inside the routers and never surface here; everything in this enum is
//! startup-fatal.

use std::path::PathBuf;
use thiserror::Error;

/// Startup and configuration errors
#[derive(Debug, Error)]
pub enum ServeError {
    /// The prebuilt bundle directory does not exist.
    #[error("web bundle directory not found: {0} (run the web build first)")]
    MissingAssetRoot(PathBuf),

    /// Could not bind the listen address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file exists but is not valid TOML.
    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
