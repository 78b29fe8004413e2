//! devserve - local development HTTP servers
//!
//! Two small servers behind one binary:
//!
//! - `devserve web` serves a prebuilt web bundle with cache-busting
//!   headers and corrected MIME types for script and wasm assets.
//! - `devserve mock` serves a local HTML test page plus canned JSON
//!   endpoints for weather, location, and journal status, with CORS
//!   headers on every response.
//!
//! Both servers are request/response only: nothing survives a request,
//! and the only process state is the bound listener. They are meant for
//! one local developer and one browser, not for production traffic.

pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod mock_api;
pub mod shutdown;
pub mod static_web;

pub use cli::{Cli, Commands, MockArgs, WebArgs};
pub use config::Config;
pub use error::ServeError;
pub use mock_api::{MockApiServer, MockServerConfig};
pub use static_web::{StaticServerConfig, StaticWebServer};

/// Process exit codes
pub mod exit_codes {
    /// Clean shutdown
    pub const SUCCESS: i32 = 0;
    /// Startup failure: missing bundle directory, bind error, bad config
    pub const GENERAL_ERROR: i32 = 1;
}
