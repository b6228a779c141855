mod career;
mod config;
mod errors;
mod export;
mod models;
mod relay;
mod routes;
mod state;
mod summary;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::career::CareerProvider;
use crate::config::Config;
use crate::export::PdfExporter;
use crate::relay::{ContactSettings, EmailJsRelay};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    // Career data: external file if configured, otherwise the built-in set
    let provider = match &config.career_data_path {
        Some(path) => CareerProvider::from_file(path)?,
        None => CareerProvider::builtin()?,
    };
    info!(
        "Career data ready ({} experiences)",
        provider.snapshot().experiences.len()
    );

    // Contact relay
    let relay = EmailJsRelay::new(
        config.emailjs_endpoint.clone(),
        config.emailjs_service_id.clone(),
        config.emailjs_public_key.clone(),
    )?;
    info!("Contact relay initialized ({})", config.emailjs_endpoint);

    let state = AppState {
        provider: Arc::new(provider),
        exporter: Arc::new(PdfExporter::new()),
        relay: Arc::new(relay),
        contact: ContactSettings {
            notification_template_id: config.emailjs_notification_template_id.clone(),
            autoreply_template_id: config.emailjs_autoreply_template_id.clone(),
            to_email: config.contact_to_email.clone(),
        },
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.bind_addr, config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
