// ABOUTME: Integration tests for the recipe document store
// ABOUTME: Exercises the in-memory and SQLite backends through the RecipeStore trait
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlareChef

//! Tests for the document store including:
//! - Insert/find round-trips
//! - Newest-first listing with limit
//! - Backend selection by URL scheme

use flarechef::store::{Database, RecipeStore};
use flarechef::synthesis;

async fn check_store_contract(database: &Database) {
    database.migrate().await.unwrap();
    database.ping().await.unwrap();

    // Insert then find round-trips the document
    let recipe = synthesis::synthesize("chicken, rice").unwrap();
    let id = database.insert(&recipe).await.unwrap();
    assert!(!id.is_empty());

    let stored = database.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(stored.id, id);
    assert_eq!(stored.recipe, recipe);
    assert!(stored.created_at.is_some());

    // Unknown id yields None
    let missing = database
        .find_by_id("00000000-0000-0000-0000-000000000000")
        .await
        .unwrap();
    assert!(missing.is_none());

    // List returns newest first and honors the limit
    let second = synthesis::synthesize("kale").unwrap();
    let second_id = database.insert(&second).await.unwrap();

    let listed = database.list(10).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second_id);
    assert_eq!(listed[1].id, id);

    let limited = database.list(1).await.unwrap();
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].id, second_id);
}

#[tokio::test]
async fn test_memory_store_contract() {
    let database = Database::new("memory:").await.unwrap();
    check_store_contract(&database).await;
}

#[tokio::test]
async fn test_sqlite_store_contract() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}/recipes.db", dir.path().display());

    let database = Database::new(&url).await.unwrap();
    check_store_contract(&database).await;
}

#[tokio::test]
async fn test_sqlite_migrate_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}/recipes.db", dir.path().display());

    let database = Database::new(&url).await.unwrap();
    database.migrate().await.unwrap();
    database.migrate().await.unwrap();
}

#[tokio::test]
async fn test_unsupported_scheme_is_rejected() {
    let err = Database::new("postgres://localhost/recipes").await;
    assert!(err.is_err());
}
