// ABOUTME: Deterministic recipe-synthesis engine composed of pure pipeline stages
// ABOUTME: Parses ingredients, estimates nutrition, generates text, and assembles the Recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlareChef

//! # Recipe Synthesis Engine
//!
//! A stateless, pure-function pipeline invoked per request:
//!
//! Ingredient Parser → Nutrition Estimator → Text Synthesizer
//! (title/description/steps) → Time Estimator → Recipe Assembler.
//!
//! No stage depends on mutable state, the clock, or randomness: the same
//! raw input always produces the same [`Recipe`]. The only failure mode is
//! an empty parsed ingredient list, surfaced as a validation error by the
//! parser; every downstream stage is a total function.

/// Image-search URL construction
pub mod image;
/// Comma-separated ingredient parsing
pub mod ingredients;
/// Lexicon-based nutrition estimation
pub mod nutrition;
/// Title, description, and step generation
pub mod text;
/// Preparation-time heuristic
pub mod timing;

use crate::errors::AppResult;
use crate::models::Recipe;

/// Synthesize a complete recipe from a raw comma-separated ingredient string
///
/// This is the single logical operation the core exposes. The transport
/// layer maps the validation error (empty parsed list) to an HTTP 400.
///
/// # Errors
///
/// Returns [`crate::errors::ErrorCode::InvalidInput`] when the raw text
/// contains no non-empty ingredient after splitting and trimming.
pub fn synthesize(raw_ingredients: &str) -> AppResult<Recipe> {
    let ingredients = ingredients::parse(raw_ingredients)?;

    let title = text::craft_title(&ingredients);
    let description = text::craft_description(&ingredients);
    let steps = text::craft_steps(&ingredients);
    let time_minutes = timing::estimate_minutes(ingredients.len());
    let nutrition = nutrition::estimate(&ingredients);
    let image_url = image::build_url(&ingredients);

    Ok(Recipe {
        title,
        description,
        ingredients,
        steps,
        time_minutes,
        nutrition,
        image_url: Some(image_url),
    })
}
