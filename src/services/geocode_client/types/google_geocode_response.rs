use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GoogleAddressComponent {
    pub long_name: String,
    pub short_name: String,
    pub types: Vec<String>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GoogleGeocodeResult {
    pub address_components: Vec<GoogleAddressComponent>,
    pub formatted_address: String,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GoogleGeocodeResponse {
    pub results: Vec<GoogleGeocodeResult>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let body = r#"{"results":[{"address_components":[{"long_name":"Paris"}]}]}"#;
        let decoded: GoogleGeocodeResponse = serde_json::from_str(body).unwrap();

        assert_eq!(decoded.status, "");
        assert_eq!(decoded.error_message, None);
        assert_eq!(decoded.results[0].formatted_address, "");
        assert_eq!(decoded.results[0].address_components[0].long_name, "Paris");
        assert!(decoded.results[0].address_components[0].types.is_empty());
    }

    #[test]
    fn decodes_error_message() {
        let body = r#"{"results":[],"status":"REQUEST_DENIED","error_message":"The provided API key is invalid."}"#;
        let decoded: GoogleGeocodeResponse = serde_json::from_str(body).unwrap();

        assert_eq!(decoded.status, "REQUEST_DENIED");
        assert_eq!(
            decoded.error_message.as_deref(),
            Some("The provided API key is invalid.")
        );
    }
}
