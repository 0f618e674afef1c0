// ABOUTME: Deterministic text generators for recipe title, description, and steps
// ABOUTME: Pure functions of the ordered ingredient list; never fail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlareChef

//! Title, description, and step generation
//!
//! Three independent generators, all pure functions of the ingredient list.
//! Absence of ingredients degrades gracefully to placeholder text, never an
//! error.

/// Title used when the ingredient list is empty
pub const PLACEHOLDER_TITLE: &str = "FlareChef Creation";

/// Token substituted for the lead ingredient when the list is empty
const EMPTY_LEAD: &str = "ingredients";

/// Generate the recipe title
///
/// Title-cases each non-empty ingredient. One ingredient yields
/// `"Ignited <Ingredient> Delight"`; two or more yield
/// `"Flame-Kissed <First> & <Second>"` with a `" Medley"` suffix when more
/// than two ingredients are present (third and beyond are not named, only
/// signaled by the suffix).
#[must_use]
pub fn craft_title(ingredients: &[String]) -> String {
    let core: Vec<String> = ingredients
        .iter()
        .map(|i| i.trim())
        .filter(|i| !i.is_empty())
        .map(title_case)
        .collect();

    match core.as_slice() {
        [] => PLACEHOLDER_TITLE.to_owned(),
        [only] => format!("Ignited {only} Delight"),
        [first, second, rest @ ..] => {
            let suffix = if rest.is_empty() { "" } else { " Medley" };
            format!("Flame-Kissed {first} & {second}{suffix}")
        }
    }
}

/// Generate the one-sentence recipe description
#[must_use]
pub fn craft_description(ingredients: &[String]) -> String {
    let base = ingredients
        .iter()
        .map(|i| i.trim())
        .filter(|i| !i.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    format!("A warm, glowing recipe that turns {base} into a cozy, restaurant-worthy dish.")
}

/// Generate the fixed five-step instruction sequence
///
/// Step 2 is parameterized by the lowercased, trimmed first ingredient;
/// the remaining steps are constant text.
#[must_use]
pub fn craft_steps(ingredients: &[String]) -> Vec<String> {
    let lead = ingredients
        .first()
        .map_or_else(|| EMPTY_LEAD.to_owned(), |i| i.trim().to_lowercase());

    vec![
        "Preheat a skillet until it softly shimmers like a flame.".to_owned(),
        format!("Add {lead} with a drizzle of oil; sear until lightly caramelized."),
        "Fold in remaining ingredients and season with salt, pepper, and a hint of heat."
            .to_owned(),
        "Simmer until flavors meld and textures are tender.".to_owned(),
        "Finish with fresh herbs or citrus and serve warm.".to_owned(),
    ]
}

/// Title-case a single ingredient: uppercase the first letter of each
/// whitespace-separated word, lowercase the rest
fn title_case(ingredient: &str) -> String {
    ingredient
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_title_single_ingredient() {
        assert_eq!(craft_title(&owned(&["kale"])), "Ignited Kale Delight");
    }

    #[test]
    fn test_title_two_ingredients() {
        assert_eq!(
            craft_title(&owned(&["chicken", "rice"])),
            "Flame-Kissed Chicken & Rice"
        );
    }

    #[test]
    fn test_title_many_ingredients_gets_medley_suffix() {
        assert_eq!(
            craft_title(&owned(&["chicken", "rice", "beans", "egg"])),
            "Flame-Kissed Chicken & Rice Medley"
        );
    }

    #[test]
    fn test_title_empty_list_uses_placeholder() {
        assert_eq!(craft_title(&[]), PLACEHOLDER_TITLE);
    }

    #[test]
    fn test_title_case_handles_multiword_and_caps() {
        assert_eq!(
            craft_title(&owned(&["chicken BREAST"])),
            "Ignited Chicken Breast Delight"
        );
    }

    #[test]
    fn test_description_joins_ingredients() {
        assert_eq!(
            craft_description(&owned(&["chicken", "rice"])),
            "A warm, glowing recipe that turns chicken, rice into a cozy, restaurant-worthy dish."
        );
    }

    #[test]
    fn test_steps_parameterize_lead_ingredient() {
        let steps = craft_steps(&owned(&["Chicken Breast", "rice"]));
        assert_eq!(steps.len(), 5);
        assert_eq!(
            steps[1],
            "Add chicken breast with a drizzle of oil; sear until lightly caramelized."
        );
    }

    #[test]
    fn test_steps_empty_list_uses_generic_lead() {
        let steps = craft_steps(&[]);
        assert_eq!(
            steps[1],
            "Add ingredients with a drizzle of oil; sear until lightly caramelized."
        );
    }

    #[test]
    fn test_steps_constant_text_is_input_independent() {
        let a = craft_steps(&owned(&["kale"]));
        let b = craft_steps(&owned(&["beef", "pasta"]));
        assert_eq!(a[0], b[0]);
        assert_eq!(a[2], b[2]);
        assert_eq!(a[3], b[3]);
        assert_eq!(a[4], b[4]);
    }
}
