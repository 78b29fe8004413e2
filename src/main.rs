//! devserve - local development HTTP servers
//!
//! CLI entry point

use clap::Parser;
use devserve::{
    exit_codes, Cli, Commands, Config, MockApiServer, MockArgs, MockServerConfig, ServeError,
    StaticServerConfig, StaticWebServer, WebArgs,
};
use tracing::warn;

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();

    let result = load_config(&cli).and_then(|config| match cli.command {
        Commands::Web(ref args) => run_web(args, &config),
        Commands::Mock(ref args) => run_mock(args, &config),
    });

    std::process::exit(match result {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_codes::GENERAL_ERROR
        }
    });
}

/// Load the config file.
///
/// An explicit `--config` path must parse; an implicit one degrades to
/// defaults with a warning, so a stray broken file never blocks a run.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    match &cli.config {
        Some(path) => Ok(Config::load_from_path(path)?),
        None => Ok(Config::load().unwrap_or_else(|e| {
            warn!("ignoring config file: {}", e);
            Config::default()
        })),
    }
}

// ============ Static Web Server ============

fn run_web(args: &WebArgs, config: &Config) -> anyhow::Result<()> {
    let server = StaticWebServer::with_config(resolve_web_config(args, config));
    run_until_stopped(server.run())
}

/// Merge precedence: CLI flag > config file > default.
fn resolve_web_config(args: &WebArgs, config: &Config) -> StaticServerConfig {
    let file = &config.web;
    let mut cfg = StaticServerConfig::default();

    if let Some(port) = args.port.or(file.port) {
        cfg = cfg.with_port(port);
    }
    if let Some(bind) = args.bind.clone().or_else(|| file.bind.clone()) {
        cfg = cfg.with_bind(bind);
    }
    if let Some(root) = args.root.clone().or_else(|| file.root.clone()) {
        cfg = cfg.with_root(root);
    }

    cfg
}

// ============ Mock API Server ============

fn run_mock(args: &MockArgs, config: &Config) -> anyhow::Result<()> {
    let server = MockApiServer::with_config(resolve_mock_config(args, config));
    run_until_stopped(server.run())
}

fn resolve_mock_config(args: &MockArgs, config: &Config) -> MockServerConfig {
    let file = &config.mock;
    let mut cfg = MockServerConfig::default();

    if let Some(port) = args.port.or(file.port) {
        cfg = cfg.with_port(port);
    }
    if let Some(bind) = args.bind.clone().or_else(|| file.bind.clone()) {
        cfg = cfg.with_bind(bind);
    }
    if let Some(root) = args.root.clone().or_else(|| file.root.clone()) {
        cfg = cfg.with_root(root);
    }
    if let Some(page) = args.page.clone().or_else(|| file.page.clone()) {
        cfg = cfg.with_page(page);
    }
    if args.no_open {
        cfg = cfg.with_open_browser(false);
    } else if let Some(open) = file.open_browser {
        cfg = cfg.with_open_browser(open);
    }

    cfg
}

// ============ Runtime ============

/// Drive a server future on a current-thread runtime. One developer and
/// one browser talk to these servers; a worker pool buys nothing.
fn run_until_stopped(
    fut: impl std::future::Future<Output = Result<(), ServeError>>,
) -> anyhow::Result<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(fut)?;
    Ok(())
}
