mod app;
mod services;
mod shell;
mod types;
mod utils;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use types::app_config::AppConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs share the terminal with the menu, so keep them on stderr and quiet by default.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    info!("Starting app...");

    let result = match AppConfig::from_env() {
        Ok(config) => app::run(&config, io::stdin().lock(), io::stdout()).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
