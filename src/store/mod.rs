// ABOUTME: Document-store abstraction for saved recipes
// ABOUTME: Plugin architecture with SQLite and in-memory backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlareChef

//! # Recipe Document Store
//!
//! The persistence collaborator behind recipe save/list/get. The synthesis
//! core never touches this layer. Storage happens only when a caller
//! explicitly saves a generated recipe.
//!
//! Recipes are stored as whole JSON documents keyed by a store-assigned id,
//! mirroring a document-database collection: the store knows insert, list,
//! and find-by-id, nothing else.

use crate::errors::AppResult;
use crate::models::{Recipe, StoredRecipe};
use async_trait::async_trait;

pub mod factory;
pub mod memory;
pub mod sqlite;

pub use factory::Database;

/// Core document-store abstraction
///
/// All backends implement this trait to provide a consistent interface to
/// the route layer.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Set up backend schema; idempotent
    async fn migrate(&self) -> AppResult<()>;

    /// Check backend connectivity
    async fn ping(&self) -> AppResult<()>;

    /// Insert a recipe document, returning the assigned id
    async fn insert(&self, recipe: &Recipe) -> AppResult<String>;

    /// List stored recipes, newest first, up to `limit`
    async fn list(&self, limit: u32) -> AppResult<Vec<StoredRecipe>>;

    /// Find a stored recipe by id
    async fn find_by_id(&self, id: &str) -> AppResult<Option<StoredRecipe>>;
}
