// ABOUTME: Configuration management for the FlareChef API
// ABOUTME: Environment-based server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlareChef

/// Environment-based configuration management
pub mod environment;

pub use environment::{CorsConfig, DatabaseConfig, DatabaseUrl, Environment, LogLevel, ServerConfig};
