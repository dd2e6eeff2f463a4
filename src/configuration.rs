use crate::cli_args::{Cli, Commands};
use crate::report::DEFAULT_LIMIT;
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ReportKind {
    #[strum(serialize = "alch margin")]
    AlchMargins,
    #[strum(serialize = "price swing")]
    PriceSwings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfiguration {
    pub base_url: String,
    pub user_agent: String,
    pub report: ReportKind,
    pub limit: usize,
}

impl AppConfiguration {
    pub fn new(cli: Cli) -> Self {
        let (report, limit) = match cli.command {
            None => (ReportKind::AlchMargins, DEFAULT_LIMIT),
            Some(Commands::AlchMargins { limit }) => (ReportKind::AlchMargins, limit),
            Some(Commands::PriceSwings { limit }) => (ReportKind::PriceSwings, limit),
        };

        Self {
            base_url: cli.base_url,
            user_agent: cli.user_agent,
            report,
            limit,
        }
    }
}
