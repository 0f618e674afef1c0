// ABOUTME: Image-search URL construction from the leading ingredients
// ABOUTME: Pure string interpolation; the URL is never fetched or validated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlareChef

use crate::constants::images;

/// Build the image-search URL for a recipe
///
/// Joins the first three ingredients with `+` into a search query (the
/// literal `"food"` when the list is empty) and appends it to the fixed
/// image-search prefix. Each ingredient is percent-encoded so spaces and
/// punctuation survive as a well-formed URL. If construction somehow yields
/// an empty value, the fixed fallback photo URL is substituted.
#[must_use]
pub fn build_url(ingredients: &[String]) -> String {
    let query = ingredients
        .iter()
        .take(images::MAX_QUERY_INGREDIENTS)
        .map(|i| urlencoding::encode(i).into_owned())
        .collect::<Vec<_>>()
        .join("+");

    let query = if query.is_empty() {
        images::DEFAULT_QUERY
    } else {
        &query
    };

    let url = format!("{}{query}", images::SEARCH_URL_PREFIX);
    if url.is_empty() {
        images::FALLBACK_URL.to_owned()
    } else {
        url
    }
}
