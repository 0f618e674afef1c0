// ABOUTME: Integration tests for the recipes REST API
// ABOUTME: Exercises generate/save/list/get handlers via in-process axum requests
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlareChef

//! Tests for the recipes HTTP surface including:
//! - Recipe generation and validation errors
//! - Save/list/get flow over the in-memory store
//! - Error envelope shapes and status codes

mod helpers;

use flarechef::config::{CorsConfig, DatabaseConfig, DatabaseUrl, Environment, LogLevel, ServerConfig};
use flarechef::context::ServerResources;
use flarechef::routes;
use flarechef::store::Database;
use helpers::axum_test::AxumTestRequest;
use std::sync::Arc;

fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        environment: Environment::Testing,
        log_level: LogLevel::Info,
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
        },
        cors: CorsConfig {
            allowed_origins: "*".to_owned(),
        },
    }
}

async fn test_router() -> axum::Router {
    let database = Database::new("memory:").await.unwrap();
    let resources = Arc::new(ServerResources::new(database, test_config()));
    routes::build_router(resources)
}

// ============================================================================
// Generation
// ============================================================================

#[tokio::test]
async fn test_generate_returns_recipe() {
    let app = test_router().await;

    let response = AxumTestRequest::post("/api/generate")
        .json(&serde_json::json!({"ingredients": "chicken, rice"}))
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let recipe: serde_json::Value = response.json();
    assert_eq!(recipe["title"], "Flame-Kissed Chicken & Rice");
    assert_eq!(recipe["nutrition"]["calories"], 371);
    assert_eq!(recipe["time_minutes"], 20);
    assert_eq!(recipe["steps"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_generate_empty_ingredients_is_bad_request() {
    let app = test_router().await;

    let response = AxumTestRequest::post("/api/generate")
        .json(&serde_json::json!({"ingredients": " , ,"}))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

// ============================================================================
// Persistence Flow
// ============================================================================

#[tokio::test]
async fn test_save_returns_created_with_id() {
    let app = test_router().await;

    let recipe = flarechef::synthesis::synthesize("chicken, rice").unwrap();
    let response = AxumTestRequest::post("/api/recipes")
        .json(&recipe)
        .send(app)
        .await;

    assert_eq!(response.status(), 201);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "saved");
    assert!(!body["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_save_then_list_returns_newest_first() {
    let database = Database::new("memory:").await.unwrap();
    let resources = Arc::new(ServerResources::new(database, test_config()));

    let first = flarechef::synthesis::synthesize("chicken").unwrap();
    let second = flarechef::synthesis::synthesize("kale").unwrap();

    let save_first = AxumTestRequest::post("/api/recipes")
        .json(&first)
        .send(routes::build_router(resources.clone()))
        .await;
    assert_eq!(save_first.status(), 201);

    let save_second = AxumTestRequest::post("/api/recipes")
        .json(&second)
        .send(routes::build_router(resources.clone()))
        .await;
    assert_eq!(save_second.status(), 201);

    let response = AxumTestRequest::get("/api/recipes")
        .send(routes::build_router(resources.clone()))
        .await;
    assert_eq!(response.status(), 200);

    let listed: serde_json::Value = response.json();
    let items = listed.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "Ignited Kale Delight");
    assert_eq!(items[1]["title"], "Ignited Chicken Delight");

    // Limit applies after newest-first ordering
    let limited = AxumTestRequest::get("/api/recipes?limit=1")
        .send(routes::build_router(resources))
        .await;
    let items: serde_json::Value = limited.json();
    assert_eq!(items.as_array().unwrap().len(), 1);
    assert_eq!(items[0]["title"], "Ignited Kale Delight");
}

#[tokio::test]
async fn test_save_then_get_by_id() {
    let database = Database::new("memory:").await.unwrap();
    let resources = Arc::new(ServerResources::new(database, test_config()));

    let recipe = flarechef::synthesis::synthesize("salmon, rice").unwrap();
    let saved = AxumTestRequest::post("/api/recipes")
        .json(&recipe)
        .send(routes::build_router(resources.clone()))
        .await;
    let saved: serde_json::Value = saved.json();
    let id = saved["id"].as_str().unwrap();

    let response = AxumTestRequest::get(&format!("/api/recipes/{id}"))
        .send(routes::build_router(resources))
        .await;

    assert_eq!(response.status(), 200);
    let stored: serde_json::Value = response.json();
    assert_eq!(stored["id"], id);
    assert_eq!(stored["title"], "Flame-Kissed Salmon & Rice");
    assert!(stored["created_at"].is_string());
}

#[tokio::test]
async fn test_get_with_malformed_id_is_bad_request() {
    let app = test_router().await;

    let response = AxumTestRequest::get("/api/recipes/not-a-uuid").send(app).await;

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_get_with_unknown_id_is_not_found() {
    let app = test_router().await;

    let response = AxumTestRequest::get("/api/recipes/00000000-0000-0000-0000-000000000000")
        .send(app)
        .await;

    assert_eq!(response.status(), 404);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}
