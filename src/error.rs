use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
}

/// Bad, missing or conflicting command-line input.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("One of --group, --user or --id is required")]
    MissingOwner,
    #[error("Unknown identity \"{name}\"")]
    UnknownIdentity {
        name: String,
        available_identities: Vec<String>,
    },
    #[error("No API key given")]
    MissingApiKey,
}

/// Malformed or unreadable configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Wrong identity configuration \"{name} = {value}\"")]
    InvalidIdentity { name: String, value: String },
    #[error("Invalid api_url \"{value}\": {reason}")]
    InvalidApiUrl { value: String, reason: String },
    #[error("Home directory not found")]
    HomeDirNotFound,
}

/// Failures reported by (or while talking to) the Zotero API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64, endpoint: String },
    #[error("HTTP error: {status} {message}")]
    Http {
        status: u16,
        endpoint: String,
        message: String,
    },
    #[error("Authentication failed")]
    Unauthorized {
        status: u16,
        endpoint: String,
        server_message: String,
    },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Terminal output error: {0}")]
    TerminalOutput(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Api(api_error) => match api_error {
                ApiError::Unauthorized { .. } => ErrorSeverity::High,
                ApiError::Timeout { .. } => ErrorSeverity::Medium,
                ApiError::Http { status, .. } if *status >= 500 => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Storage(_) => ErrorSeverity::Medium,
            AppError::Display(_) => ErrorSeverity::Low,
        }
    }

    /// Process exit status for this error; 0 is reserved for success.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Cli(_) => 2,
            AppError::Config(_) => 3,
            AppError::Api(_) => 4,
            AppError::Storage(_) | AppError::Display(_) => 1,
        }
    }

    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Cli(CliError::InvalidArguments(message)) => message.clone(),
            AppError::Cli(err) => err.to_string(),
            AppError::Config(err) => err.to_string(),
            AppError::Api(ApiError::Unauthorized { server_message, .. })
                if !server_message.is_empty() =>
            {
                format!("Authentication failed: {}", server_message.trim())
            }
            _ => format!("{}", self),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Cli(CliError::MissingApiKey) => Some(
                "Pass --key or set 'key' in the [core] section of ~/.config/zotero-cli.conf"
                    .to_string(),
            ),
            AppError::Cli(CliError::MissingOwner) => Some(
                "Set a default identity with 'id' in the [core] section of the configuration"
                    .to_string(),
            ),
            AppError::Cli(CliError::UnknownIdentity {
                available_identities,
                ..
            }) => {
                if available_identities.is_empty() {
                    Some("No identities are configured in [identities]".to_string())
                } else {
                    Some(format!(
                        "Configured identities: {}",
                        available_identities.join(", ")
                    ))
                }
            }
            AppError::Config(ConfigError::InvalidIdentity { .. }) => Some(
                "Identities must look like 'name = group <id>' or 'name = user <id>'".to_string(),
            ),
            AppError::Api(ApiError::Unauthorized { .. }) => Some(
                "Check your API key and its permissions (https://www.zotero.org/settings/keys)"
                    .to_string(),
            ),
            AppError::Api(ApiError::Timeout { .. }) => {
                Some("Check your internet connection and try again".to_string())
            }
            AppError::Api(ApiError::Http { status: 404, .. }) => {
                Some("'--list-collections' shows the available collection IDs".to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_display() {
        let cli_err = CliError::InvalidArguments("invalid arguments".to_string());
        assert_eq!(
            format!("{}", cli_err),
            "Invalid arguments: invalid arguments"
        );

        let cli_err = CliError::UnknownIdentity {
            name: "work".to_string(),
            available_identities: vec!["home".to_string()],
        };
        assert_eq!(format!("{}", cli_err), "Unknown identity \"work\"");
    }

    #[test]
    fn test_config_error_display() {
        let config_err = ConfigError::InvalidIdentity {
            name: "work".to_string(),
            value: "team 555".to_string(),
        };
        assert_eq!(
            format!("{}", config_err),
            "Wrong identity configuration \"work = team 555\""
        );

        let config_err = ConfigError::Parse {
            path: "zotero-cli.conf".to_string(),
            message: "line 1".to_string(),
        };
        assert!(format!("{}", config_err).starts_with("Failed to parse zotero-cli.conf"));
    }

    #[test]
    fn test_api_error_display() {
        let api_err = ApiError::Http {
            status: 400,
            endpoint: "endpoint".to_string(),
            message: "message".to_string(),
        };
        assert_eq!(format!("{}", api_err), "HTTP error: 400 message");

        let api_err = ApiError::Timeout {
            timeout_secs: 10,
            endpoint: "endpoint".to_string(),
        };
        assert_eq!(format!("{}", api_err), "Request timed out after 10s");
    }

    #[test]
    fn test_exit_codes_distinguish_error_kinds() {
        assert_eq!(AppError::Cli(CliError::MissingApiKey).exit_code(), 2);
        assert_eq!(AppError::Config(ConfigError::HomeDirNotFound).exit_code(), 3);
        assert_eq!(
            AppError::Api(ApiError::Http {
                status: 500,
                endpoint: "/collections".to_string(),
                message: "boom".to_string(),
            })
            .exit_code(),
            4
        );
        assert_eq!(
            AppError::Display(DisplayError::TerminalOutput("closed".to_string())).exit_code(),
            1
        );
    }

    #[test]
    fn test_severity() {
        let app_err = AppError::Api(ApiError::Unauthorized {
            status: 403,
            endpoint: "/users/1/collections".to_string(),
            server_message: "Forbidden".to_string(),
        });
        assert_eq!(app_err.severity(), ErrorSeverity::High);
        assert_eq!(
            app_err.display_friendly(),
            "Authentication failed: Forbidden"
        );

        let app_err = AppError::Cli(CliError::MissingOwner);
        assert_eq!(app_err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_troubleshooting_hint_lists_identities() {
        let app_err = AppError::Cli(CliError::UnknownIdentity {
            name: "work".to_string(),
            available_identities: vec!["home".to_string(), "lab".to_string()],
        });
        assert_eq!(
            app_err.troubleshooting_hint(),
            Some("Configured identities: home, lab".to_string())
        );
        assert!(AppError::Cli(CliError::MissingApiKey)
            .troubleshooting_hint()
            .is_some());
    }
}
