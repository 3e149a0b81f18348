pub mod geocode_client;
