pub mod address_classifier;
pub mod geocode_service;
pub mod types;
