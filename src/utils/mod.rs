//! Utils module - Shared utilities and helpers
//!
//! This module provides utility functions and helpers that are used across
//! multiple layers of the application architecture.

/// Error conversion helpers
pub mod error_helpers;

/// Logging setup
pub mod logging;

/// Input validation and sanitization utilities
pub mod validation;
