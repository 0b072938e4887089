use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use todoview::backend::create_backend;
use todoview::config::{Config, Credential};
use todoview::constants::{LOG_ERROR_FETCH_ITEMS, WARN_EMPTY_API_TOKEN};
use todoview::logger;
use todoview::ui::{self, SelectorApp, SelectorStatus};

#[derive(Parser)]
#[command(name = "todoview", version, about = "Browse your Todoist tasks in the terminal")]
struct Args {
    /// Configuration file to load instead of the default locations
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default configuration file (to --config or the XDG path) and exit
    #[arg(long)]
    generate_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.generate_config {
        let path = match args.config {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(&path);
    }

    let config = Config::load(args.config.as_deref())?;
    logger::init(&config.logging)?;

    let credential = Credential::from_env(&config.api);
    if credential.is_empty() {
        warn!("{} ({})", WARN_EMPTY_API_TOKEN, config.api.api_token_env);
    }

    let backend = create_backend(&config.api, credential)?;
    let items = match backend.fetch_items().await {
        Ok(items) => items,
        Err(e) => {
            error!("{}: {}", LOG_ERROR_FETCH_ITEMS, e);
            return Err(e).context(LOG_ERROR_FETCH_ITEMS);
        }
    };
    info!("✅ Fetched {} items from API", items.len());

    let app = SelectorApp::new(items, &config.ui);
    match ui::run_app(app).await? {
        SelectorStatus::SelectionConfirmed(label) => info!("Selected task: {}", label),
        // run_app only returns once the selector reached a terminal state
        _ => info!("Quit without selection"),
    }

    Ok(())
}
