// ABOUTME: In-memory recipe store for tests and ephemeral deployments
// ABOUTME: Insertion-ordered vector behind an async RwLock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlareChef

use super::RecipeStore;
use crate::errors::AppResult;
use crate::models::{Recipe, StoredRecipe};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory recipe document store
///
/// Keeps documents in insertion order so `list` can return newest first,
/// matching the SQLite backend.
#[derive(Clone, Default)]
pub struct MemoryRecipeStore {
    records: Arc<RwLock<Vec<StoredRecipe>>>,
}

impl MemoryRecipeStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeStore for MemoryRecipeStore {
    async fn migrate(&self) -> AppResult<()> {
        // Nothing to set up
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    async fn insert(&self, recipe: &Recipe) -> AppResult<String> {
        let id = Uuid::new_v4().to_string();
        let stored = StoredRecipe {
            id: id.clone(),
            recipe: recipe.clone(),
            created_at: Some(Utc::now().to_rfc3339()),
        };

        self.records.write().await.push(stored);
        Ok(id)
    }

    async fn list(&self, limit: u32) -> AppResult<Vec<StoredRecipe>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .rev()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<StoredRecipe>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }
}
