// ABOUTME: Server binary for the FlareChef API
// ABOUTME: Loads env config, initializes logging and the store, serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlareChef

//! # FlareChef API Server Binary
//!
//! Starts the recipe-synthesis HTTP API with document-store persistence.

use anyhow::Result;
use clap::Parser;
use flarechef::{
    config::ServerConfig,
    context::ServerResources,
    logging, routes,
    store::{Database, RecipeStore},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "flarechef-server")]
#[command(about = "FlareChef API - Deterministic recipe synthesis from ingredient lists")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle container environments where clap may not work properly
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using default configuration");
            Args { http_port: None }
        }
    };

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting FlareChef API");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url.to_connection_string()).await?;
    database.migrate().await?;
    info!("Database initialized: {}", database.backend_info());

    let resources = Arc::new(ServerResources::new(database, config.clone()));
    let app = routes::build_router(resources);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
