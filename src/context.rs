// ABOUTME: Dependency injection context shared across route handlers
// ABOUTME: Bundles the document store and server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlareChef

use crate::config::ServerConfig;
use crate::store::Database;

/// Shared server resources passed as axum state
///
/// Constructed once at startup and shared via `Arc` across all handlers.
/// Everything inside is either cheap to clone or internally reference-counted.
pub struct ServerResources {
    /// Recipe document store
    pub database: Database,
    /// Server configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Bundle resources for router construction
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        Self { database, config }
    }
}
