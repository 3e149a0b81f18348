#[derive(Debug)]
pub enum GeocodeServiceError {
    Transport(String),
    Body(String),
    Decode(String),
    Status {
        status: String,
        message: Option<String>,
    },
    NoCandidates,
}

impl std::fmt::Display for GeocodeServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            GeocodeServiceError::Transport(e) => write!(f, "Failed to send request: {}", e),
            GeocodeServiceError::Body(e) => write!(f, "Failed to read response body: {}", e),
            GeocodeServiceError::Decode(e) => write!(f, "Failed to decode response body: {}", e),
            GeocodeServiceError::Status {
                status,
                message: Some(message),
            } => write!(f, "API Status Not OK: {} ({})", status, message),
            GeocodeServiceError::Status {
                status,
                message: None,
            } => write!(f, "API Status Not OK: {}", status),
            GeocodeServiceError::NoCandidates => write!(f, "API returned OK with no results"),
        }
    }
}

impl std::error::Error for GeocodeServiceError {}
