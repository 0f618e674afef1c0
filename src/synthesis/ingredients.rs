// ABOUTME: Ingredient parser splitting raw comma-separated input into ordered tokens
// ABOUTME: Trims whitespace, discards empty segments, and rejects empty results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlareChef

use crate::errors::{AppError, AppResult};

/// Parse a raw comma-separated ingredient string into an ordered token list
///
/// Splits on `,`, trims whitespace from each segment, and discards empty
/// segments while preserving input order. Insertion order matters downstream:
/// the first ingredient drives step text and title emphasis.
///
/// No case normalization happens here; each consumer normalizes as needed.
///
/// # Errors
///
/// Returns a validation error when no non-empty segment remains.
pub fn parse(raw: &str) -> AppResult<Vec<String>> {
    let ingredients: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(ToOwned::to_owned)
        .collect();

    if ingredients.is_empty() {
        return Err(AppError::invalid_input(
            "Please provide at least one ingredient.",
        ));
    }

    Ok(ingredients)
}
