//! # Sign Gloss Server
//!
//! Hosts the gloss engine behind an Actix-web HTTP API.
//!
//! ## Application Architecture:
//! - **config**: configuration (defaults, `config.toml`, `APP_` environment variables)
//! - **state**: shared state: config, metrics and the gloss pipeline
//! - **health**: service info, health and metrics endpoints
//! - **middleware**: request logging and per-route metrics
//! - **handlers**: gloss, dictionary and config endpoints
//! - **error**: `AppError` and its JSON error responses
//!
//! The transcript producer (recording + speech-to-text) is an external client;
//! it posts plain text to `/api/v1/gloss`.

mod config;
mod error;
mod handlers;
mod health;
mod middleware;
mod state;

use crate::config::AppConfig;
use crate::state::AppState;
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::{Context, Result};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    init_tracing();

    let config = AppConfig::load()?;
    config.validate()?;

    info!("Starting sign-gloss-server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        dictionary = %config.dictionary.path,
        "Configuration loaded: {}:{}",
        config.server.host,
        config.server.port
    );

    let app_state = AppState::new(config.clone());

    // Load the dictionary before accepting requests so a bad file stops startup
    if config.dictionary.warm_up {
        let dictionary = app_state
            .pipeline
            .warm_up()
            .with_context(|| format!("loading dictionary {}", config.dictionary.path))?;
        info!(entries = dictionary.len(), "Dictionary ready");
    }

    let bind_addr = config.bind_addr();
    info!("Starting HTTP server on {}", bind_addr);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        // Middleware runs bottom-up on requests
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(middleware::MetricsMiddleware)
            .wrap(middleware::RequestLogging)
            .configure(handlers::configure_routes)
    })
    .disable_signals()
    .bind(&bind_addr)
    .with_context(|| format!("binding {}", bind_addr))?
    .run();

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    tokio::select! {
        result = server_task => {
            match result {
                Ok(Err(e)) => error!("Server error: {}", e),
                Err(e) => error!("Server task error: {}", e),
                Ok(Ok(())) => {}
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received, stopping server...");
            server_handle.stop(true).await;
        }
    }

    info!("Server stopped gracefully");
    Ok(())
}

/// Console logging filtered by `RUST_LOG`, defaulting to debug for this crate.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sign_gloss=debug,sign_gloss_server=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Resolves on SIGTERM or Ctrl+C.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => info!("Received SIGTERM"),
                    _ = tokio::signal::ctrl_c() => info!("Received SIGINT"),
                }
                return;
            }
            Err(e) => warn!("Failed to install SIGTERM handler: {}", e),
        }
    }

    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal source the server runs until its task ends
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received SIGINT");
}
