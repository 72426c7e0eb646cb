use clap::Parser;
use zotero_cli::cli::dispatcher::Dispatcher;
use zotero_cli::cli::main_types::Cli;
use zotero_cli::cli::resolver::resolve;
use zotero_cli::storage::config::Config;
use zotero_cli::utils::logging::init_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("{} Error: {}", err.severity().emoji(), err.display_friendly());
        if let Some(hint) = err.troubleshooting_hint() {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(err.exit_code());
    }
}

async fn run(cli: Cli) -> zotero_cli::Result<()> {
    let config = Config::load(cli.config.clone())?;
    let request = resolve(cli, &config)?;

    Dispatcher::connect(request)?.dispatch().await
}
