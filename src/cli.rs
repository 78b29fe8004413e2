//! Command-line interface definitions.
//!
//! Every flag is optional; running a subcommand bare uses the built-in
//! defaults, optionally overlaid by a `devserve.toml` config file.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Local development HTTP servers
#[derive(Debug, Parser)]
#[command(name = "devserve", version, about)]
pub struct Cli {
    /// Explicit TOML config file (default: ./devserve.toml, then the
    /// user config directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve a prebuilt web bundle with no-cache headers
    Web(WebArgs),
    /// Serve the mock API and local HTML test page
    Mock(MockArgs),
}

/// Arguments for the static web server
#[derive(Debug, Default, Args)]
pub struct WebArgs {
    /// Port to listen on [default: 8087]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address to bind [default: 0.0.0.0]
    #[arg(long)]
    pub bind: Option<String>,

    /// Directory holding the built bundle [default: build/web]
    #[arg(short, long)]
    pub root: Option<PathBuf>,
}

/// Arguments for the mock API server
#[derive(Debug, Default, Args)]
pub struct MockArgs {
    /// Port to listen on [default: 8888]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host to bind [default: localhost]
    #[arg(long)]
    pub bind: Option<String>,

    /// Directory served for unmatched paths [default: .]
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// HTML test page served at / and /test [default: test-interface.html]
    #[arg(long)]
    pub page: Option<PathBuf>,

    /// Do not open the browser at startup
    #[arg(long)]
    pub no_open: bool,
}
