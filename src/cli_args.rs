use crate::prices_client::DEFAULT_BASE_URL;
use crate::report::DEFAULT_LIMIT;
use crate::reqwest_helpers::DEFAULT_USER_AGENT;
use clap::{Parser, Subcommand};

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// base url of the OSRS wiki real-time prices api
    #[arg(long, env("OSRS_PRICES_BASE_URL"), default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,
    /// user-agent sent with every request
    #[arg(long, env("OSRS_PRICES_USER_AGENT"), default_value = DEFAULT_USER_AGENT, global = true)]
    pub user_agent: String,
    /// defaults to `alch-margins` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// items whose high alchemy value exceeds their buy price the most
    AlchMargins {
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },
    /// items with the largest difference between their high and low price
    PriceSwings {
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },
}
