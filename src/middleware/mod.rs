// ABOUTME: HTTP middleware for the FlareChef API
// ABOUTME: Cross-origin resource sharing configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlareChef

/// CORS middleware configuration
pub mod cors;

pub use cors::setup_cors;
