//! tinyshop - terminal shop front.
//!
//! # Usage
//!
//! ```bash
//! # Start the catalog service first
//! cargo run -p tinyshop-catalog
//!
//! # Then open the shop
//! cargo run -p tinyshop-webapp
//! ```
//!
//! The page is drawn on stdout; logs go to stderr. Type `help` at the prompt
//! for the list of commands.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tinyshop_webapp::WebappConfig;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(json_logs: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tinyshop_webapp=info".into());

    let json_layer = json_logs.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!json_logs).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[tokio::main]
async fn main() {
    let config = match WebappConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(false);
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(config.json_logs);

    let input = BufReader::new(tokio::io::stdin());
    let output = tokio::io::stdout();

    if let Err(e) = tinyshop_webapp::run(&config, input, output).await {
        tracing::error!("Session failed: {e}");
        std::process::exit(1);
    }
}
