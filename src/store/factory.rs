// ABOUTME: Store factory and backend wrapper with runtime backend selection
// ABOUTME: Detects SQLite vs in-memory backends from the connection string
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlareChef

//! Store factory for creating recipe-store backends
//!
//! Provides automatic backend detection and creation based on connection
//! strings.

use super::memory::MemoryRecipeStore;
use super::sqlite::SqliteRecipeStore;
use super::RecipeStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Recipe, StoredRecipe};
use async_trait::async_trait;
use tracing::info;

/// Store instance wrapper that delegates to the appropriate backend
#[derive(Clone)]
pub enum Database {
    /// Embedded file-based SQLite backend
    Sqlite(SqliteRecipeStore),
    /// Process-local in-memory backend
    Memory(MemoryRecipeStore),
}

impl Database {
    /// Create a new store instance based on the connection string
    ///
    /// `sqlite:` URLs select the SQLite backend; `memory:` selects the
    /// in-memory backend.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for unrecognized URL schemes and a
    /// database error when the backend fails to connect.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        if database_url.starts_with("sqlite:") {
            info!("Detected SQLite database URL");
            let store = SqliteRecipeStore::new(database_url).await?;
            Ok(Self::Sqlite(store))
        } else if database_url.starts_with("memory:") {
            info!("Detected in-memory store URL");
            Ok(Self::Memory(MemoryRecipeStore::new()))
        } else {
            Err(AppError::config(format!(
                "Unsupported database URL scheme: {database_url}"
            )))
        }
    }

    /// Get a descriptive string for the current backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "SQLite (Embedded)",
            Self::Memory(_) => "In-Memory (Ephemeral)",
        }
    }
}

#[async_trait]
impl RecipeStore for Database {
    async fn migrate(&self) -> AppResult<()> {
        match self {
            Self::Sqlite(store) => store.migrate().await,
            Self::Memory(store) => store.migrate().await,
        }
    }

    async fn ping(&self) -> AppResult<()> {
        match self {
            Self::Sqlite(store) => store.ping().await,
            Self::Memory(store) => store.ping().await,
        }
    }

    async fn insert(&self, recipe: &Recipe) -> AppResult<String> {
        match self {
            Self::Sqlite(store) => store.insert(recipe).await,
            Self::Memory(store) => store.insert(recipe).await,
        }
    }

    async fn list(&self, limit: u32) -> AppResult<Vec<StoredRecipe>> {
        match self {
            Self::Sqlite(store) => store.list(limit).await,
            Self::Memory(store) => store.list(limit).await,
        }
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<StoredRecipe>> {
        match self {
            Self::Sqlite(store) => store.find_by_id(id).await,
            Self::Memory(store) => store.find_by_id(id).await,
        }
    }
}
