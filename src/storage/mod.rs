//! Storage layer for zotero-cli
//!
//! Handles the INI configuration file.

use crate::error::ConfigError;

pub mod config;

type Result<T> = std::result::Result<T, ConfigError>;
