use std::io::Write;

use tracing::info;

use crate::{
    batch_driver::{BatchDriver, BatchSummary},
    services::geocode_client::geocode_service::{GeocodeService, GeocodeServiceConfig},
    sheet::address_sheet::AddressSheet,
    types::run_config::RunConfig,
    utils::app_error::AppError,
};

pub fn gen_driver(service_config: GeocodeServiceConfig) -> BatchDriver {
    BatchDriver::new(GeocodeService::new(service_config))
}

/// Enriches the workbook at `config.file_path` in place.
pub async fn run<W: Write>(
    config: RunConfig,
    driver: BatchDriver,
    progress: &mut W,
) -> Result<BatchSummary, AppError> {
    let mut book = AddressSheet::open(&config.file_path)?;
    info!("Opened {}", book.path().display());

    let summary = driver
        .run(book.first_sheet_mut()?, progress)
        .await
        .map_err(AppError::Progress)?;

    book.save()?;
    writeln!(progress, "Processing done!").map_err(AppError::Progress)?;

    Ok(summary)
}
