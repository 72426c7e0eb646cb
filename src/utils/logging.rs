use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "warn,zotero_cli=debug" } else { "warn,zotero_cli=info" }
}

/// Install the global subscriber. Logs go to stderr; stdout carries only
/// listings and BibTeX so it can be redirected.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A second init (e.g. in tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
