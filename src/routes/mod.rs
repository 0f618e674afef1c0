// ABOUTME: Route module organization for FlareChef API HTTP endpoints
// ABOUTME: Provides route definitions by domain and top-level router assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlareChef

//! Route module for the FlareChef API
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the synthesis core or the document store.

/// Health check and system status routes
pub mod health;
/// Recipe generation and persistence routes
pub mod recipes;

pub use health::HealthRoutes;
pub use recipes::RecipesRoutes;

use crate::context::ServerResources;
use crate::middleware::setup_cors;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Assemble the complete application router
///
/// Merges the per-domain routers and applies CORS and request tracing.
#[must_use]
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes(resources.clone()))
        .merge(RecipesRoutes::routes(resources))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
