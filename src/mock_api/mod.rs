//! Mock API server for browser-side feature testing.
//!
//! Serves a local HTML test page at `/` and `/test`, canned JSON
//! payloads for the weather, location and journal endpoints, and echoes
//! posted journal entries back with a generated id. Unmatched paths fall
//! through to static files under the server root. Every response carries
//! permissive CORS headers so the page can be exercised from any origin.

mod cors;
mod routes;
mod server;

pub use cors::CorsPolicy;
pub use routes::{
    AppState, CreateJournalResponse, JournalStatus, LocationReport, WeatherReport,
};
pub use server::{MockApiServer, MockServerConfig};

/// Default listen port
pub const DEFAULT_PORT: u16 = 8888;

/// Default bind host (loopback)
pub const DEFAULT_BIND: &str = "localhost";

/// Default static-fallback root
pub const DEFAULT_ROOT: &str = ".";

/// Default HTML test page served at `/` and `/test`
pub const DEFAULT_PAGE: &str = "test-interface.html";

/// Request bodies above this size are rejected
pub const BODY_LIMIT: usize = 1024 * 1024;
