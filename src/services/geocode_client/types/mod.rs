pub mod extracted_address;
pub mod geocode_service_error;
pub mod google_geocode_response;
