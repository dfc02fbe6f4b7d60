//! Demo server for the request logger.
//!
//! Serves four canned routes behind `RequestLogLayer` and, unless `--serve`
//! is given, fires one request at each and exits.
//!
//! ```text
//!   GET  /         → 200 "oh bea"
//!   POST /meow     → 307 "over"
//!   PUT  /purr     → 404 "not here"
//!   GET  /schnurr  → 500 "wrong"
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::{StatusCode, Uri};
use axum::Router;
use clap::Parser;
use reqwest::Method;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use reqlog::config::{load_config, validate_config, AppConfig, ConfigError};
use reqlog::observability::logging;
use reqlog::{ColorMode, Palette, RequestLogLayer, Theme, TracingSink};

#[derive(Parser)]
#[command(name = "reqlog-demo")]
#[command(about = "Serve and exercise a few routes behind the colored request logger", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overrides the config file
    #[arg(short, long)]
    bind: Option<String>,

    #[arg(long, value_enum)]
    color: Option<ColorMode>,

    #[arg(long, value_enum)]
    theme: Option<Theme>,

    /// Keep serving instead of sending the demo requests and exiting
    #[arg(long)]
    serve: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    if let Some(color) = cli.color {
        config.logging.color = color;
    }
    if let Some(theme) = cli.theme {
        config.logging.theme = theme;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    let palette = Palette::for_terminal(config.logging.color, config.logging.theme);
    // `--color always` wins over NO_COLOR
    crossterm::style::Colored::set_ansi_color_disabled(!palette.is_colored());
    logging::init(&config.logging.filter, palette.is_colored());

    tracing::info!(
        bind_address = %config.listener.bind_address,
        color = ?config.logging.color,
        theme = ?config.logging.theme,
        "Configuration loaded"
    );

    let app = Router::new()
        .fallback(demo_handler)
        .layer(RequestLogLayer::new(palette, TracingSink));

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let (done_tx, done_rx) = oneshot::channel();
    let server = tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal(done_rx))
        .await
    });

    if cli.serve {
        server.await??;
        drop(done_tx);
    } else {
        exercise(local_addr).await?;
        let _ = done_tx.send(());
        server.await??;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Wait for Ctrl+C, or for the demo requests to finish.
async fn shutdown_signal(done: oneshot::Receiver<()>) {
    tokio::select! {
        _ = tokio::signal::ctrl_c() => tracing::info!("Shutdown signal received"),
        _ = done => tracing::debug!("Demo requests finished"),
    }
}

async fn demo_handler(uri: Uri) -> (StatusCode, &'static str) {
    match uri.path() {
        "/" => (StatusCode::OK, "oh bea"),
        "/meow" => (StatusCode::TEMPORARY_REDIRECT, "over"),
        "/purr" => (StatusCode::NOT_FOUND, "not here"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "wrong"),
    }
}

/// Send one request per demo route.
async fn exercise(addr: SocketAddr) -> Result<(), reqwest::Error> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()?;
    let base = format!("http://{addr}");

    for (method, path) in [
        (Method::GET, "/"),
        (Method::POST, "/meow"),
        (Method::PUT, "/purr"),
        (Method::GET, "/schnurr"),
    ] {
        let res = client.request(method, format!("{base}{path}")).send().await?;
        // drain the body so the server side sees the full response
        res.bytes().await?;
    }
    Ok(())
}
