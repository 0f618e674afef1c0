// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides banner, system health, and readiness endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlareChef

//! Health check routes for service monitoring
//!
//! The health endpoint reports document-store connectivity so deployment
//! checks can distinguish "serving" from "serving and able to persist".

use crate::context::ServerResources;
use crate::store::RecipeStore;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        async fn root_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "message": "FlareChef API is running"
            }))
        }

        async fn health_handler(
            State(resources): State<Arc<ServerResources>>,
        ) -> Json<serde_json::Value> {
            let database_status = match resources.database.ping().await {
                Ok(()) => "connected",
                Err(_) => "unavailable",
            };

            Json(serde_json::json!({
                "status": "healthy",
                "database": resources.database.backend_info(),
                "database_status": database_status,
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        async fn ready_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "ready",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route("/", get(root_handler))
            .route("/health", get(health_handler))
            .route("/ready", get(ready_handler))
            .with_state(resources)
    }
}
