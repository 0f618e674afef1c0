// ABOUTME: System-wide constants and configuration values for the FlareChef API
// ABOUTME: Contains ports, limits, service names, and image URL templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlareChef

//! # Constants Module
//!
//! Application constants and environment-based configuration values.
//! Synthesis-domain tables (the nutrition lexicon, text templates) live next
//! to their consumers in [`crate::synthesis`]; this module holds the
//! transport-level values.

/// Service identity
pub mod service_names {
    /// Name of the server binary for structured logging
    pub const FLARECHEF_SERVER: &str = "flarechef-server";
}

/// Network port configuration
pub mod ports {
    use std::env;

    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8000;

    /// Get HTTP port from environment or default
    #[must_use]
    pub fn http_port() -> u16 {
        env::var("HTTP_PORT")
            .or_else(|_| env::var("PORT"))
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_HTTP_PORT)
    }
}

/// Request limits
pub mod limits {
    /// Default number of recipes returned by the list endpoint
    pub const DEFAULT_LIST_LIMIT: u32 = 20;
}

/// Image URL construction
pub mod images {
    /// Image-search URL prefix; the query is appended verbatim
    pub const SEARCH_URL_PREFIX: &str = "https://source.unsplash.com/featured/?";

    /// Query used when the ingredient list is empty
    pub const DEFAULT_QUERY: &str = "food";

    /// How many leading ingredients participate in the search query
    pub const MAX_QUERY_INGREDIENTS: usize = 3;

    /// Fixed fallback photo when URL construction yields nothing
    pub const FALLBACK_URL: &str =
        "https://images.unsplash.com/photo-1504674900247-0877df9cc836?q=80&w=1600&auto=format&fit=crop";
}
