use std::process::exit;

use clap::Parser;

use storefront_cli::{AppConfig, Cli, commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::resolve(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            exit(2);
        }
    };

    storefront_observability::init(&config.log);
    tracing::debug!(catalog = %config.catalog_path.display(), "configuration resolved");

    match commands::execute(&cli, &config).await {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "command failed");
            eprintln!("error: {err:#}");
            exit(1);
        }
    }
}
