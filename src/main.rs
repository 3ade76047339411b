//! Alias directory server binary.
//!
//! # Usage
//!
//! ```bash
//! alias-directory                       # listen on $LISTEN or 0.0.0.0:8090
//! alias-directory --listen 127.0.0.1:3000 --log-format json
//! ```

use alias_directory::config::Config;
use alias_directory::server;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Concurrent in-memory alias-to-URL directory.
#[derive(Parser)]
#[command(name = "alias-directory")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides `LISTEN`
    #[arg(short, long)]
    listen: Option<String>,

    /// Log format (`text` or `json`), overrides `LOG_FORMAT`
    #[arg(long)]
    log_format: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = apply_overrides(Config::from_env(), cli);
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

/// Command-line flags take priority over the environment.
fn apply_overrides(mut config: Config, cli: Cli) -> Config {
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if let Some(log_format) = cli.log_format {
        config.log_format = log_format;
    }
    config
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.is_json_logging() {
        builder.json().init();
    } else {
        builder.init();
    }
}
