//! Input validation and sanitization utilities
//!
//! This module provides utilities for validating user input and
//! configuration values before they reach the API client.

use crate::error::CliError;

/// Validate that a URL is properly formatted; the error is the reason.
pub fn validate_url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("URL cannot be empty".to_string());
    }

    // Basic URL validation - must start with http:// or https://
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("URL must start with http:// or https://".to_string());
    }

    Ok(())
}

/// Validate API key format
pub fn validate_api_key(api_key: &str) -> Result<(), CliError> {
    if api_key.trim().is_empty() {
        return Err(CliError::MissingApiKey);
    }

    if api_key.chars().any(char::is_whitespace) {
        return Err(CliError::InvalidArguments(
            "API key must not contain whitespace".to_string(),
        ));
    }

    Ok(())
}

/// Collection IDs are short alphanumeric keys such as `ABCD2345`.
pub fn validate_collection_id(collection_id: &str) -> Result<(), CliError> {
    if collection_id.is_empty() || !collection_id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(CliError::InvalidArguments(format!(
            "Invalid collection ID '{}': expected an alphanumeric key",
            collection_id
        )));
    }

    Ok(())
}
