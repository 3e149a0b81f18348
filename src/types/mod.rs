pub mod run_config;
