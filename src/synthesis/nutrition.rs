// ABOUTME: Nutrition estimator matching ingredients against a fixed ordered lexicon
// ABOUTME: First substring match in declaration order wins; unmatched items take a fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlareChef

//! Lexicon-based nutrition estimation
//!
//! Each ingredient is lowercased and scanned against the lexicon keys in
//! declaration order; the first key that is a substring of the ingredient
//! wins ("chicken breast" matches "chicken", and "chicken rice bowl" matches
//! "chicken" before "rice" only because "chicken" is declared first). There
//! is no scoring and no multi-match combination per ingredient.
//!
//! The lexicon is deliberately an ordered slice, not a map: match precedence
//! depends on iteration order.

use crate::models::NutritionFacts;

/// Per-serving nutrition attributed to one matched ingredient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
}

const fn contribution(calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> Contribution {
    Contribution {
        calories,
        protein_g,
        carbs_g,
        fat_g,
    }
}

/// Nutrition applied when no lexicon keyword matches an ingredient
///
/// Unmatched ingredients are assumed to be a generic low-calorie item.
pub const FALLBACK_CONTRIBUTION: Contribution = contribution(40.0, 0.0, 5.0, 0.0);

/// Fixed keyword → contribution table, scanned linearly in declaration order
///
/// Read-only and shared freely across concurrent requests.
pub static LEXICON: &[(&str, Contribution)] = &[
    ("chicken", contribution(165.0, 31.0, 0.0, 3.6)),
    ("beef", contribution(250.0, 26.0, 0.0, 15.0)),
    ("pork", contribution(242.0, 27.0, 0.0, 14.0)),
    ("salmon", contribution(208.0, 20.0, 0.0, 13.0)),
    ("egg", contribution(78.0, 6.0, 0.6, 5.0)),
    ("rice", contribution(206.0, 4.3, 45.0, 0.4)),
    ("pasta", contribution(221.0, 8.0, 43.0, 1.3)),
    ("potato", contribution(161.0, 4.3, 37.0, 0.2)),
    ("beans", contribution(155.0, 10.0, 28.0, 0.5)),
    ("tofu", contribution(144.0, 17.0, 3.0, 9.0)),
    ("cheese", contribution(113.0, 7.0, 0.4, 9.3)),
    ("milk", contribution(103.0, 8.0, 12.0, 2.4)),
    ("olive oil", contribution(119.0, 0.0, 0.0, 13.5)),
    ("butter", contribution(102.0, 0.1, 0.0, 11.5)),
    ("bread", contribution(79.0, 3.0, 15.0, 1.0)),
    ("avocado", contribution(160.0, 2.0, 9.0, 15.0)),
];

/// Find the contribution for one ingredient
///
/// Lowercases the trimmed ingredient, then returns the first lexicon entry
/// whose keyword it contains, or the fallback contribution.
#[must_use]
pub fn match_contribution(ingredient: &str) -> Contribution {
    let normalized = ingredient.trim().to_lowercase();
    LEXICON
        .iter()
        .find(|(keyword, _)| normalized.contains(keyword))
        .map_or(FALLBACK_CONTRIBUTION, |(_, c)| *c)
}

/// Estimate aggregate nutrition for an ordered ingredient list
///
/// Sums per-ingredient contributions; calories are integer-truncated from
/// the total, macros are rounded to one decimal place once, on the final
/// sums. Total over any non-empty list; there are no error conditions.
#[must_use]
pub fn estimate(ingredients: &[String]) -> NutritionFacts {
    let mut total_calories = 0.0_f64;
    let mut total_protein = 0.0_f64;
    let mut total_carbs = 0.0_f64;
    let mut total_fat = 0.0_f64;

    for ingredient in ingredients {
        let c = match_contribution(ingredient);
        total_calories += c.calories;
        total_protein += c.protein_g;
        total_carbs += c.carbs_g;
        total_fat += c.fat_g;
    }

    NutritionFacts {
        calories: total_calories as u32,
        protein: round1(total_protein),
        carbs: round1(total_carbs),
        fat: round1(total_fat),
    }
}

/// Round to one decimal place
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
