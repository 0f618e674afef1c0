// ABOUTME: Domain models for recipe synthesis and persistence
// ABOUTME: Defines NutritionFacts, Recipe, and StoredRecipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlareChef

use serde::{Deserialize, Serialize};

/// Aggregated per-serving nutrition estimate for a recipe
///
/// Produced by summing per-ingredient contributions; immutable once computed.
/// All fields are non-negative. Calories are integer-truncated from the summed
/// total; macros are rounded to one decimal place on the final sums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// Total calories (kcal)
    pub calories: u32,
    /// Total protein in grams
    pub protein: f64,
    /// Total carbohydrates in grams
    pub carbs: f64,
    /// Total fat in grams
    pub fat: f64,
}

/// A synthesized recipe
///
/// Created fresh per request and never mutated after construction. Contains
/// no timestamps; the synthesis core is clock-free and fully deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Display title
    pub title: String,
    /// One-sentence description
    pub description: String,
    /// Parsed ingredients, in input order
    pub ingredients: Vec<String>,
    /// Cooking instructions (ordered steps)
    pub steps: Vec<String>,
    /// Estimated total time in minutes
    pub time_minutes: u32,
    /// Aggregated nutrition estimate
    pub nutrition: NutritionFacts,
    /// Constructed image-search URL (never fetched or validated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A recipe as returned by the document store
///
/// Adds the store-assigned identifier and insertion timestamp to the recipe
/// document. Produced only by the persistence layer, never by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecipe {
    /// Store-assigned opaque identifier
    pub id: String,
    /// The recipe document
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Insertion timestamp (RFC 3339), when the store recorded one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
