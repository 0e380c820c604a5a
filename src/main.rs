use std::sync::Arc;

use tracing::error;

use octogate::config::{load_config, print_schema};
use octogate::startup;
use octogate::utils::logger::init_logging;

#[tokio::main]
async fn main() {
    if std::env::args().any(|arg| arg == "--config-schema") {
        print_schema();
        return;
    }

    let config = Arc::new(load_config());
    init_logging(&config.logging);

    if let Err(e) = startup::run(config).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
