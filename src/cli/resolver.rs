//! Turns parsed arguments plus configuration into the request for this run.

use crate::api::client::DEFAULT_BASE_URL;
use crate::cli::main_types::Cli;
use crate::core::owner::Owner;
use crate::error::CliError;
use crate::storage::config::Config;
use crate::utils::validation::{validate_api_key, validate_collection_id};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `None` lists every collection
    ListCollections { filter: Option<String> },
    CollectionToBibtex { collection_id: String },
    AllToBibtex,
}

/// Fully resolved parameters of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveRequest {
    pub api_key: String,
    pub owner: Owner,
    pub limit: Option<u32>,
    pub action: Action,
    pub dump_path: Option<PathBuf>,
    pub api_url: String,
}

/// Parse `args` and resolve them against `config`.
pub fn resolve_from<I, T>(args: I, config: &Config) -> Result<EffectiveRequest, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args).map_err(|e| CliError::InvalidArguments(e.to_string()))?;
    resolve(cli, config)
}

pub fn resolve(cli: Cli, config: &Config) -> Result<EffectiveRequest, CliError> {
    let owner = resolve_owner(&cli, config)?;
    let action = resolve_action(&cli)?;

    let api_key = cli
        .key
        .clone()
        .or_else(|| config.key.clone())
        .ok_or(CliError::MissingApiKey)?;
    validate_api_key(&api_key)?;

    let api_url = config
        .api_url
        .clone()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    tracing::debug!(%owner, ?action, limit = ?cli.limit, "resolved request");

    Ok(EffectiveRequest {
        api_key,
        owner,
        limit: cli.limit,
        action,
        dump_path: cli.dump,
        api_url,
    })
}

/// `--group`/`--user` win over `--id`, which wins over `[core] id`.
fn resolve_owner(cli: &Cli, config: &Config) -> Result<Owner, CliError> {
    let selected = [
        cli.group.is_some(),
        cli.user.is_some(),
        cli.identity.is_some(),
    ]
    .iter()
    .filter(|s| **s)
    .count();
    if selected > 1 {
        return Err(CliError::InvalidArguments(
            "--group, --user and --id are mutually exclusive".to_string(),
        ));
    }

    if let Some(id) = cli.group {
        return Ok(Owner::group(id.to_string()));
    }
    if let Some(id) = cli.user {
        return Ok(Owner::user(id.to_string()));
    }

    let name = cli
        .identity
        .as_deref()
        .or(config.default_identity.as_deref())
        .ok_or(CliError::MissingOwner)?;

    config
        .get_identity(name)
        .cloned()
        .ok_or_else(|| CliError::UnknownIdentity {
            name: name.to_string(),
            available_identities: config.identity_names(),
        })
}

fn resolve_action(cli: &Cli) -> Result<Action, CliError> {
    match (
        &cli.list_collections,
        &cli.collection_to_bibtex,
        cli.all_to_bibtex,
    ) {
        (Some(filter), None, false) => Ok(Action::ListCollections {
            filter: Some(filter.clone()).filter(|f| !f.is_empty()),
        }),
        (None, Some(collection_id), false) => {
            validate_collection_id(collection_id)?;
            Ok(Action::CollectionToBibtex {
                collection_id: collection_id.clone(),
            })
        }
        (None, None, true) => Ok(Action::AllToBibtex),
        (None, None, false) => Err(CliError::InvalidArguments(
            "one of --list-collections, --collection-to-bibtex or --all-to-bibtex is required"
                .to_string(),
        )),
        _ => Err(CliError::InvalidArguments(
            "--list-collections, --collection-to-bibtex and --all-to-bibtex are mutually exclusive"
                .to_string(),
        )),
    }
}
