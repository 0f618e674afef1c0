// ABOUTME: SQLite recipe store backed by sqlx with documents stored as JSON text
// ABOUTME: One row per recipe: id, serialized document, insertion timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlareChef

use super::RecipeStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Recipe, StoredRecipe};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::str::FromStr;
use uuid::Uuid;

/// SQLite-backed recipe document store
#[derive(Clone)]
pub struct SqliteRecipeStore {
    pool: SqlitePool,
}

impl SqliteRecipeStore {
    /// Open (or create) the SQLite database at the given URL
    ///
    /// # Errors
    ///
    /// Returns a database error when the URL is malformed or the pool
    /// cannot connect.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::database(format!("Invalid SQLite URL: {e}")))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to SQLite: {e}")))?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl RecipeStore for SqliteRecipeStore {
    async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS recipes (
                id TEXT PRIMARY KEY,
                document TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to run migrations: {e}")))?;

        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("SQLite ping failed: {e}")))?;
        Ok(())
    }

    async fn insert(&self, recipe: &Recipe) -> AppResult<String> {
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now().to_rfc3339();
        let document = serde_json::to_string(recipe)
            .map_err(|e| AppError::serialization(format!("Failed to serialize recipe: {e}")))?;

        sqlx::query("INSERT INTO recipes (id, document, created_at) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(&document)
            .bind(&created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to insert recipe: {e}")))?;

        Ok(id)
    }

    async fn list(&self, limit: u32) -> AppResult<Vec<StoredRecipe>> {
        let rows = sqlx::query(
            "SELECT id, document, created_at FROM recipes ORDER BY rowid DESC LIMIT ?",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list recipes: {e}")))?;

        rows.iter().map(row_to_stored_recipe).collect()
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<StoredRecipe>> {
        let row = sqlx::query("SELECT id, document, created_at FROM recipes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to fetch recipe {id}: {e}")))?;

        row.as_ref().map(row_to_stored_recipe).transpose()
    }
}

fn row_to_stored_recipe(row: &sqlx::sqlite::SqliteRow) -> AppResult<StoredRecipe> {
    let id: String = row.get("id");
    let document: String = row.get("document");
    let created_at: String = row.get("created_at");

    let recipe: Recipe = serde_json::from_str(&document).map_err(|e| {
        AppError::serialization(format!("Malformed recipe document {id}: {e}"))
            .with_resource_id(id.clone())
    })?;

    Ok(StoredRecipe {
        id,
        recipe,
        created_at: Some(created_at),
    })
}
