pub mod cli_args;
pub mod configuration;
pub mod margins;
pub mod market_snapshot;
pub mod prices_client;
pub mod prices_model;
pub mod report;
pub mod reqwest_helpers;
