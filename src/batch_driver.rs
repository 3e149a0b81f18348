use std::{io::Write, time::Duration};

use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::{
    services::geocode_client::geocode_service::GeocodeService,
    sheet::address_sheet::{SheetRows, OUTPUT_HEADERS, SOURCE_COLUMN},
};

/// Ten lookups per second at most.
pub const DEFAULT_PACE: Duration = Duration::from_millis(100);

#[derive(Debug, Default, PartialEq)]
pub struct BatchSummary {
    pub processed: u32,
    pub skipped: u32,
    pub resolved: u32,
}

pub struct BatchDriver {
    service: GeocodeService,
    pace: Duration,
}

impl BatchDriver {
    pub fn new(service: GeocodeService) -> Self {
        Self::with_pace(service, DEFAULT_PACE)
    }

    pub fn with_pace(service: GeocodeService, pace: Duration) -> Self {
        Self { service, pace }
    }

    /// Geocodes every data row of `sheet` in order and writes the five fields
    /// into the columns after the source column. One progress line per row
    /// goes to `progress`.
    pub async fn run<S: SheetRows, W: Write>(
        &self,
        sheet: &mut S,
        progress: &mut W,
    ) -> std::io::Result<BatchSummary> {
        let start_col = SOURCE_COLUMN + 1;

        for (i, header) in OUTPUT_HEADERS.iter().enumerate() {
            sheet.write_cell(0, start_col + i as u32, header);
        }

        let total = sheet.last_row();
        let mut summary = BatchSummary::default();

        let mut ticker = interval(self.pace);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!("Processing {} rows", total);

        for row in 1..=total {
            ticker.tick().await;
            summary.processed += 1;

            let raw_address = sheet.source_address(row);

            if raw_address.is_empty() {
                summary.skipped += 1;
                writeln!(progress, "{} of {} processed (skipped).", row, total)?;
                continue;
            }

            let (fields, formatted) = self.service.lookup(&raw_address).await;

            if !formatted.is_empty() {
                summary.resolved += 1;
            }

            writeln!(
                progress,
                "{} of {} processed. API Response: {}",
                row, total, formatted
            )?;

            for (i, field) in fields.iter().enumerate() {
                sheet.write_cell(row, start_col + i as u32, field);
            }

            debug!("Row {} written", row);
        }

        info!(
            "Processed {} rows: {} resolved, {} skipped",
            summary.processed, summary.resolved, summary.skipped
        );

        Ok(summary)
    }
}
