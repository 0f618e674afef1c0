// ABOUTME: Route handlers for recipe generation and persistence REST API
// ABOUTME: POST /api/generate plus save/list/get over the document store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlareChef

//! Recipe routes
//!
//! `POST /api/generate` runs the pure synthesis pipeline and performs no
//! I/O. The remaining endpoints are thin wrappers over the document store:
//! saving is always an explicit caller action, never a side effect of
//! generation.

use crate::constants::limits;
use crate::context::ServerResources;
use crate::errors::AppError;
use crate::models::Recipe;
use crate::store::RecipeStore;
use crate::synthesis;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Request body for recipe generation
#[derive(Debug, Deserialize)]
pub struct GenerateRecipeRequest {
    /// Comma-separated ingredients list
    pub ingredients: String,
}

/// Response for a successful save
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveRecipeResponse {
    /// Store-assigned recipe id
    pub id: String,
    /// Always "saved"
    pub status: String,
}

/// Query parameters for listing recipes
#[derive(Debug, Deserialize)]
pub struct ListRecipesQuery {
    /// Maximum number of recipes to return (default 20)
    pub limit: Option<u32>,
}

/// Recipes routes handler
pub struct RecipesRoutes;

impl RecipesRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/generate", post(Self::handle_generate))
            .route("/api/recipes", post(Self::handle_save))
            .route("/api/recipes", get(Self::handle_list))
            .route("/api/recipes/:id", get(Self::handle_get))
            .with_state(resources)
    }

    /// Handle POST /api/generate - Synthesize a recipe from raw ingredients
    async fn handle_generate(
        State(_resources): State<Arc<ServerResources>>,
        Json(body): Json<GenerateRecipeRequest>,
    ) -> Result<Response, AppError> {
        let recipe = synthesis::synthesize(&body.ingredients)?;
        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    /// Handle POST /api/recipes - Persist a generated recipe
    async fn handle_save(
        State(resources): State<Arc<ServerResources>>,
        Json(recipe): Json<Recipe>,
    ) -> Result<Response, AppError> {
        let id = resources.database.insert(&recipe).await?;

        let response = SaveRecipeResponse {
            id,
            status: "saved".to_owned(),
        };
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle GET /api/recipes - List saved recipes, newest first
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<ListRecipesQuery>,
    ) -> Result<Response, AppError> {
        let limit = query.limit.unwrap_or(limits::DEFAULT_LIST_LIMIT);
        let recipes = resources.database.list(limit).await?;

        Ok((StatusCode::OK, Json(recipes)).into_response())
    }

    /// Handle GET /api/recipes/:id - Fetch one saved recipe
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        // Ids are store-assigned UUIDs; reject malformed ones before querying
        Uuid::parse_str(&id).map_err(|_| AppError::invalid_input("Invalid recipe id"))?;

        let stored = resources
            .database
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;

        Ok((StatusCode::OK, Json(stored)).into_response())
    }
}
