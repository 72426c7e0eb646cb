//! Configuration management
//!
//! Optional INI file at `~/.config/zotero-cli.conf`:
//!
//! ```ini
//! [core]
//! key = <API key>
//! id = work
//!
//! [identities]
//! work = group 555
//! me = user 42
//! ```
//!
//! Priority: CLI argument > ZOTERO_API_KEY environment variable > config file.

use super::Result;
use crate::core::owner::Owner;
use crate::error::ConfigError;
use crate::utils::validation::validate_url;
use ini::Ini;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "zotero-cli.conf";

const CORE_SECTION: &str = "core";
const IDENTITIES_SECTION: &str = "identities";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Default API key (`[core] key`)
    pub key: Option<String>,
    /// Identity used when no owner flag is given (`[core] id`)
    pub default_identity: Option<String>,
    /// API base URL override (`[core] api_url`)
    pub api_url: Option<String>,
    /// Named owners from `[identities]`
    pub identities: BTreeMap<String, Owner>,
}

impl Config {
    /// Load configuration from file; a missing file yields the default configuration.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no configuration file");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config = Self::parse(&content, &config_path)?;
        tracing::debug!(
            path = %config_path.display(),
            identities = config.identities.len(),
            "configuration loaded"
        );

        Ok(config)
    }

    /// Parse INI content; `origin` is only used in error messages.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let ini = Ini::load_from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_string_lossy().to_string(),
            message: e.to_string(),
        })?;

        let mut config = Config::default();

        if let Some(core) = ini.section(Some(CORE_SECTION)) {
            config.key = non_empty(core.get("key"));
            config.default_identity = non_empty(core.get("id"));
            config.api_url = non_empty(core.get("api_url"));
        }

        if let Some(url) = &config.api_url {
            validate_url(url).map_err(|reason| ConfigError::InvalidApiUrl {
                value: url.clone(),
                reason,
            })?;
        }

        if let Some(identities) = ini.section(Some(IDENTITIES_SECTION)) {
            for (name, value) in identities.iter() {
                let owner = value
                    .parse::<Owner>()
                    .map_err(|_| ConfigError::InvalidIdentity {
                        name: name.to_string(),
                        value: value.to_string(),
                    })?;
                config.identities.insert(name.to_string(), owner);
            }
        }

        Ok(config)
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;

        Ok(home_dir.join(".config").join(CONFIG_FILE_NAME))
    }

    pub fn get_identity(&self, name: &str) -> Option<&Owner> {
        self.identities.get(name)
    }

    pub fn identity_names(&self) -> Vec<String> {
        self.identities.keys().cloned().collect()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(content: &str) -> Result<Config> {
        Config::parse(content, Path::new("test.conf"))
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.key.is_none());
        assert!(config.default_identity.is_none());
        assert!(config.identities.is_empty());
    }

    #[test]
    fn test_parse_core_and_identities() {
        let config = parse(
            "[core]\nkey = K1\nid = work\n\n[identities]\nwork = group 555\nme = user 42\n",
        )
        .expect("Failed to parse config");

        assert_eq!(config.key, Some("K1".to_string()));
        assert_eq!(config.default_identity, Some("work".to_string()));
        assert_eq!(config.get_identity("work"), Some(&Owner::group("555")));
        assert_eq!(config.get_identity("me"), Some(&Owner::user("42")));
        assert!(config.get_identity("nonexistent").is_none());
        assert_eq!(config.identity_names(), vec!["me", "work"]);
    }

    #[test]
    fn test_unknown_sections_and_keys_are_ignored() {
        let config = parse("[core]\ncolor = blue\n\n[extra]\nfoo = bar\n")
            .expect("Failed to parse config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_empty_key_is_treated_as_absent() {
        let config = parse("[core]\nkey =\n").expect("Failed to parse config");
        assert!(config.key.is_none());
    }

    #[test]
    fn test_malformed_identity_fails_load() {
        let result = parse("[identities]\nwork = team 555\n");
        match result {
            Err(ConfigError::InvalidIdentity { name, value }) => {
                assert_eq!(name, "work");
                assert_eq!(value, "team 555");
            }
            other => panic!("Expected InvalidIdentity, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_api_url_fails_load() {
        let result = parse("[core]\napi_url = api.zotero.org\n");
        match result {
            Err(ConfigError::InvalidApiUrl { value, .. }) => {
                assert_eq!(value, "api.zotero.org");
            }
            other => panic!("Expected InvalidApiUrl, got {:?}", other),
        }

        let config = parse("[core]\napi_url = http://localhost:9000\n")
            .expect("Failed to parse config");
        assert_eq!(config.api_url, Some("http://localhost:9000".to_string()));
    }

    #[test]
    fn test_malformed_ini_fails_load() {
        let result = parse("[core\nkey = K1\n");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("zotero-cli.conf");
        fs::write(&config_path, "[core]\nkey = K1\n").expect("Failed to write config");

        let config = Config::load(Some(config_path)).expect("Failed to load config");
        assert_eq!(config.key, Some("K1".to_string()));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let nonexistent_path = temp_dir.path().join("nonexistent.conf");

        let config = Config::load(Some(nonexistent_path));
        assert!(config.is_ok());
        assert_eq!(config.expect("Failed to load default config"), Config::default());
    }
}
