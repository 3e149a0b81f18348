mod app;
mod batch_driver;
mod services;
mod sheet;
mod types;
mod utils;

use std::io;

use services::geocode_client::geocode_service::GeocodeServiceConfig;
use tracing::{error, info};
use types::run_config::RunConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let config = match RunConfig::prompt(&mut io::stdin().lock(), &mut io::stdout()) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    info!("Starting batch for {}", config.file_path);

    let driver = app::gen_driver(GeocodeServiceConfig::new(config.api_key.clone()));

    if let Err(e) = app::run(config, driver, &mut io::stdout()).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
