// ABOUTME: Preparation-time heuristic based on ingredient count
// ABOUTME: Linear in count, clamped to a plausible range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlareChef

/// Base minutes before any ingredient is counted
const BASE_MINUTES: u32 = 10;

/// Additional minutes per ingredient
const MINUTES_PER_INGREDIENT: u32 = 5;

/// Lower bound on the estimate
const MIN_MINUTES: u32 = 15;

/// Upper bound on the estimate
const MAX_MINUTES: u32 = 75;

/// Estimate total preparation time in minutes
///
/// `clamp(10 + 5 * count, 15, 75)`: more ingredients implies more prep
/// time, bounded to a plausible range. Deterministic and total.
#[must_use]
pub fn estimate_minutes(ingredient_count: usize) -> u32 {
    let base = BASE_MINUTES + MINUTES_PER_INGREDIENT * ingredient_count as u32;
    base.clamp(MIN_MINUTES, MAX_MINUTES)
}
