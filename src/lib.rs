// ABOUTME: Main library entry point for the FlareChef API
// ABOUTME: Deterministic recipe synthesis with a REST surface and document store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlareChef

#![deny(unsafe_code)]

//! # FlareChef API
//!
//! Estimates a recipe (title, description, steps, cook time, nutrition) from
//! a free-text list of ingredients, without any external AI model or
//! nutrition database. The core is a deterministic synthesis engine: free
//! form ingredient strings are matched against a small nutrition lexicon,
//! nutrition facts are aggregated, and human-readable text is generated from
//! the structured inputs.
//!
//! ## Architecture
//!
//! - **Synthesis**: pure, clock-free pipeline of parser, nutrition estimator,
//!   text synthesizer, time estimator, assembler
//! - **Store**: document-store abstraction with SQLite and in-memory
//!   backends; used only when a caller explicitly saves a recipe
//! - **Routes**: thin axum handlers over the core and the store
//! - **Config**: environment-based configuration management
//!
//! ## Example Usage
//!
//! ```rust
//! use flarechef::synthesis;
//!
//! let recipe = synthesis::synthesize("chicken, rice")?;
//! assert_eq!(recipe.title, "Flame-Kissed Chicken & Rice");
//! assert_eq!(recipe.nutrition.calories, 371);
//! # Ok::<(), flarechef::errors::AppError>(())
//! ```

/// Configuration management and persistence
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Focused dependency injection context
pub mod context;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware (CORS)
pub mod middleware;

/// Common data models for recipes and nutrition
pub mod models;

/// `HTTP` routes for recipe generation and persistence
pub mod routes;

/// Document-store abstraction with pluggable backends
pub mod store;

/// Deterministic recipe-synthesis engine
pub mod synthesis;
