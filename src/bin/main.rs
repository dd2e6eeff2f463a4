use anyhow::Result;
use clap::Parser;
use tracing::{event, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use osrs_alch_margins::cli_args::Cli;
use osrs_alch_margins::configuration::{AppConfiguration, ReportKind};
use osrs_alch_margins::margins::{calculate_alch_margins, calculate_price_swings};
use osrs_alch_margins::market_snapshot::fetch_market_snapshot;
use osrs_alch_margins::prices_client::PricesClient;
use osrs_alch_margins::report::{print_alch_margins, print_price_swings};
use osrs_alch_margins::reqwest_helpers::create_client;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // stdout carries the report, so logs go to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfiguration::new(args);
    event!(
        Level::INFO,
        "Running {} report against {}",
        cfg.report,
        cfg.base_url
    );

    let client = PricesClient::new(create_client(&cfg.user_agent)?, &cfg.base_url);

    println!("Fetching OSRS pricing data...");
    let snapshot = fetch_market_snapshot(&client).await?;
    println!(
        "Successfully fetched pricing data for {} items!\n",
        snapshot.mapping.len()
    );

    match cfg.report {
        ReportKind::AlchMargins => {
            let margins = calculate_alch_margins(&snapshot.prices, &snapshot.mapping);
            println!("Here are the top items with the highest alch margin:\n");
            print_alch_margins(&margins, cfg.limit);
        }
        ReportKind::PriceSwings => {
            let swings = calculate_price_swings(&snapshot.prices);
            println!("Here are the top items with the biggest price swing:\n");
            print_price_swings(&swings, cfg.limit);
        }
    }

    println!("\nThanks for using the OSRS Alch Margin Tool!");

    Ok(())
}
