// ABOUTME: SmartBytes HTTP API server binary
// ABOUTME: Loads configuration from the environment and serves the axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

//! # SmartBytes API Server Binary
//!
//! Starts the restaurant discovery and menu ranking API.

use anyhow::{Context, Result};
use clap::Parser;
use smartbytes::{config::ServerConfig, logging, router, ServerResources};
use smartbytes_providers::http_client::initialize_shared_client;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "smartbytes-server")]
#[command(about = "SmartBytes - restaurant discovery and nutrition-aware menu ranking API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    info!("{}", config.summary());

    initialize_shared_client(
        config.providers.timeout_secs,
        config.providers.connect_timeout_secs,
    );

    let port = config.http_port;
    let resources = Arc::new(ServerResources::from_config(config));
    let app = router(resources);

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;
    info!(%addr, "SmartBytes API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}
