use tracing::{debug, error, warn};
use urlencoding::encode;

use super::{
    address_classifier::extract,
    types::{
        extracted_address::ExtractedAddress, geocode_service_error::GeocodeServiceError,
        google_geocode_response::GoogleGeocodeResponse,
    },
};

pub const GOOGLE_MAPS_HOST: &str = "https://maps.googleapis.com";
const GEOCODE_PATH: &str = "/maps/api/geocode/json";
const STATUS_OK: &str = "OK";

#[derive(Clone)]
pub struct GeocodeServiceConfig {
    pub api_key: String,
    pub host: String,
}

impl GeocodeServiceConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            host: GOOGLE_MAPS_HOST.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct GeocodeService {
    config: GeocodeServiceConfig,
    client: reqwest::Client,
}

#[derive(Debug, PartialEq)]
pub struct GeocodeMatch {
    pub address: ExtractedAddress,
    pub formatted_address: String,
}

impl GeocodeService {
    pub fn new(config: GeocodeServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Resolves `raw_address` against the first candidate the API returns.
    pub async fn geocode(&self, raw_address: &str) -> Result<GeocodeMatch, GeocodeServiceError> {
        let url = format!(
            "{}{}?address={}&key={}",
            self.config.host,
            GEOCODE_PATH,
            encode(raw_address),
            self.config.api_key
        );

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GeocodeServiceError::Transport(e.without_url().to_string()))?;

        let body = resp
            .text()
            .await
            .map_err(|e| GeocodeServiceError::Body(e.without_url().to_string()))?;

        let body = serde_json::from_str::<GoogleGeocodeResponse>(&body)
            .map_err(|e| GeocodeServiceError::Decode(e.to_string()))?;

        if body.status != STATUS_OK {
            return Err(GeocodeServiceError::Status {
                status: body.status,
                message: body.error_message,
            });
        }

        let candidate = body
            .results
            .into_iter()
            .next()
            .ok_or(GeocodeServiceError::NoCandidates)?;

        Ok(GeocodeMatch {
            address: extract(&candidate),
            formatted_address: candidate.formatted_address,
        })
    }

    /// Like [`GeocodeService::geocode`], but every failure collapses into five
    /// empty fields and an empty formatted address. The cause is only logged.
    pub async fn lookup(&self, raw_address: &str) -> ([String; 5], String) {
        match self.geocode(raw_address).await {
            Ok(m) => {
                debug!("Resolved {:?} to {:?}", raw_address, m.formatted_address);
                (m.address.into_row(), m.formatted_address)
            }
            Err(e @ GeocodeServiceError::Status { .. }) => {
                warn!("{}", e);
                (ExtractedAddress::empty().into_row(), String::new())
            }
            Err(e) => {
                error!("Failed to geocode {:?}: {}", raw_address, e);
                (ExtractedAddress::empty().into_row(), String::new())
            }
        }
    }
}
