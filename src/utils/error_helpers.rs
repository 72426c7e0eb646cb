use crate::error::{ApiError, DisplayError, StorageError};
use std::io;
use std::path::Path;

/// Helper functions for standardizing error conversions across the codebase
/// Convert reqwest errors to ApiError with endpoint context
pub fn convert_request_error(error: reqwest::Error, endpoint: &str) -> ApiError {
    ApiError::Http {
        status: error.status().map(|s| s.as_u16()).unwrap_or(0),
        endpoint: endpoint.to_string(),
        message: error.to_string(),
    }
}

/// Convert timeout errors to ApiError with endpoint context
pub fn convert_timeout_error(endpoint: &str, timeout_secs: u64) -> ApiError {
    ApiError::Timeout {
        timeout_secs,
        endpoint: endpoint.to_string(),
    }
}

/// Convert JSON deserialization errors to ApiError with endpoint context
pub fn convert_json_error(error: serde_json::Error, endpoint: &str) -> ApiError {
    ApiError::Http {
        status: 0,
        endpoint: endpoint.to_string(),
        message: format!("JSON parse error: {}", error),
    }
}

/// Convert IO errors to DisplayError for terminal operations
pub fn convert_io_to_display_error(error: io::Error, operation: &str) -> DisplayError {
    DisplayError::TerminalOutput(format!("{}: {}", operation, error))
}

/// Convert IO errors on a named file to StorageError
pub fn convert_file_error(error: io::Error, path: &Path) -> StorageError {
    StorageError::FileIo {
        path: path.to_string_lossy().to_string(),
        source: error,
    }
}

/// Helper macro for display errors
#[macro_export]
macro_rules! map_display_error {
    ($result:expr, $operation:expr) => {
        $result
            .map_err(|e| $crate::utils::error_helpers::convert_io_to_display_error(e, $operation))
    };
}
