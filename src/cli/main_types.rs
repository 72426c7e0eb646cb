use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "zotero-cli")]
#[command(about = "Command-line client for Zotero")]
#[command(version)]
#[command(group(ArgGroup::new("owner").args(["group", "user", "identity"])))]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .args(["list_collections", "collection_to_bibtex", "all_to_bibtex"])
))]
pub struct Cli {
    /// Zotero API key (https://www.zotero.org/settings/keys).
    /// Or specify `key` in [core] of the configuration file
    #[arg(long, value_name = "API-KEY", env = "ZOTERO_API_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Group ID (https://www.zotero.org/groups/)
    #[arg(long, value_name = "ID")]
    pub group: Option<u64>,

    /// User ID (https://www.zotero.org/settings/keys)
    #[arg(long, value_name = "ID")]
    pub user: Option<u64>,

    /// Identity specified in [identities] of the configuration file
    #[arg(long = "id", value_name = "NAME")]
    pub identity: Option<String>,

    /// List your collections (title partial match)
    #[arg(long, value_name = "TITLE", num_args = 0..=1, default_missing_value = "")]
    pub list_collections: Option<String>,

    /// Export given collection to BibTeX
    #[arg(long, value_name = "COLLECTION-ID")]
    pub collection_to_bibtex: Option<String>,

    /// Export all items to BibTeX
    #[arg(long)]
    pub all_to_bibtex: bool,

    /// Dump retrieved data to FILENAME
    #[arg(long, value_name = "FILENAME")]
    pub dump: Option<PathBuf>,

    /// Page size of the API queries (values above 100 are capped)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: Option<u32>,

    /// Configuration file [default: ~/.config/zotero-cli.conf]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_collections_without_title() {
        let cli = Cli::try_parse_from(["zotero-cli", "--user", "42", "--list-collections"])
            .expect("parse failed");
        assert_eq!(cli.list_collections, Some(String::new()));
        assert_eq!(cli.user, Some(42));
    }

    #[test]
    fn test_list_collections_with_title() {
        let cli = Cli::try_parse_from([
            "zotero-cli",
            "--list-collections",
            "Deep",
            "--id",
            "work",
        ])
        .expect("parse failed");
        assert_eq!(cli.list_collections, Some("Deep".to_string()));
        assert_eq!(cli.identity, Some("work".to_string()));
    }

    #[test]
    fn test_owner_flags_conflict() {
        let err = Cli::try_parse_from([
            "zotero-cli",
            "--group",
            "1",
            "--user",
            "2",
            "--list-collections",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_action_flags_conflict() {
        let err = Cli::try_parse_from([
            "zotero-cli",
            "--group",
            "1",
            "--list-collections",
            "--collection-to-bibtex",
            "XYZ123",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_action_is_required() {
        let err = Cli::try_parse_from(["zotero-cli", "--group", "1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_limit_must_be_positive_integer() {
        for bad in ["0", "-3", "ten", "1.5"] {
            let result = Cli::try_parse_from([
                "zotero-cli",
                "--group",
                "1",
                "--all-to-bibtex",
                "--limit",
                bad,
            ]);
            assert!(result.is_err(), "limit {} should be rejected", bad);
        }
    }
}
