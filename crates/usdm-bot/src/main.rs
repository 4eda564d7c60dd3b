//! usdm-bot — USDT-M futures testnet trading CLI.
//!
//! Subcommands: market, limit, stop-limit, twap.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use usdm_bot::{render, AppConfig, AppError};
use usdm_client::FuturesClient;
use usdm_core::{Price, Quantity};
use usdm_exec::{MarketOrders, OrderPlacer, TwapExecutor};

/// USDT-M futures testnet trading CLI.
#[derive(Parser, Debug)]
#[command(name = "usdm-bot", version, about, long_about = None)]
struct Cli {
    /// Configuration file path (can also be set via USDM_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Place a MARKET order.
    Market {
        /// Trading pair symbol, e.g. BTCUSDT.
        symbol: String,
        /// BUY or SELL.
        side: String,
        /// Order quantity.
        quantity: Decimal,
    },
    /// Place a LIMIT order (GTC).
    Limit {
        /// Trading pair symbol, e.g. BTCUSDT.
        symbol: String,
        /// BUY or SELL.
        side: String,
        /// Order quantity.
        quantity: Decimal,
        /// Limit price.
        price: Decimal,
    },
    /// Place a stop-triggered limit order (exchange STOP type, GTC).
    StopLimit {
        /// Trading pair symbol, e.g. BTCUSDT.
        symbol: String,
        /// BUY or SELL.
        side: String,
        /// Order quantity.
        quantity: Decimal,
        /// Limit price.
        #[arg(long)]
        price: Decimal,
        /// Stop trigger price.
        #[arg(long)]
        stop_price: Decimal,
    },
    /// Split a MARKET order into timed slices (TWAP).
    Twap {
        /// Trading pair symbol, e.g. BTCUSDT.
        symbol: String,
        /// BUY or SELL.
        side: String,
        /// Total quantity to execute.
        quantity: Decimal,
        /// Number of slices to split the total quantity into.
        #[arg(long, default_value_t = 5)]
        slices: u32,
        /// Seconds to wait between slices.
        #[arg(long, default_value_t = 10)]
        interval: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    usdm_bot::init_logging()?;
    info!("Starting usdm-bot v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load(cli.config.as_deref())?;
    info!(base_url = %config.exchange.base_url, "Configuration loaded");

    if let Err(err) = run(cli.command, &config).await {
        error!(%err, "Command failed");
        println!("{}", render::render_error(&err));
        std::process::exit(1);
    }

    Ok(())
}

async fn run(command: Command, config: &AppConfig) -> std::result::Result<(), AppError> {
    let credentials = config.credentials()?;
    let client = FuturesClient::new(credentials)?;
    let placer = Arc::new(OrderPlacer::new(client));

    match command {
        Command::Market {
            symbol,
            side,
            quantity,
        } => {
            println!("{}", render::section("MARKET ORDER REQUEST"));
            println!("symbol      : {symbol}");
            println!("side        : {side}");
            println!("quantity    : {quantity}");

            let ack = placer
                .market_order(&symbol, &side, Quantity::new(quantity))
                .await?;

            println!("{}", render::section("RESPONSE"));
            println!("{}", render::render_ack(&ack));
            println!("result      : SUCCESS");
        }
        Command::Limit {
            symbol,
            side,
            quantity,
            price,
        } => {
            println!("{}", render::section("LIMIT ORDER REQUEST"));
            println!("symbol      : {symbol}");
            println!("side        : {side}");
            println!("quantity    : {quantity}");
            println!("price       : {price}");

            let ack = placer
                .limit_order(&symbol, &side, Quantity::new(quantity), Price::new(price))
                .await?;

            println!("{}", render::section("RESPONSE"));
            println!("{}", render::render_ack(&ack));
            println!("result      : SUCCESS");
        }
        Command::StopLimit {
            symbol,
            side,
            quantity,
            price,
            stop_price,
        } => {
            println!("{}", render::section("STOP_LIMIT ORDER REQUEST"));
            println!("symbol      : {symbol}");
            println!("side        : {side}");
            println!("quantity    : {quantity}");
            println!("price       : {price}");
            println!("stopPrice   : {stop_price}");

            let ack = placer
                .stop_trigger_limit_order(
                    &symbol,
                    &side,
                    Quantity::new(quantity),
                    Price::new(price),
                    Price::new(stop_price),
                )
                .await?;

            println!("{}", render::section("RESPONSE"));
            println!("{}", render::render_ack(&ack));
            println!("result      : SUCCESS");
        }
        Command::Twap {
            symbol,
            side,
            quantity,
            slices,
            interval,
        } => {
            println!("{}", render::section("TWAP REQUEST"));
            println!("symbol      : {symbol}");
            println!("side        : {side}");
            println!("totalQty    : {quantity}");
            println!("slices      : {slices}");
            println!("interval(s) : {interval}");

            let executor = TwapExecutor::new(placer.clone() as Arc<dyn MarketOrders>);
            let report = executor
                .run_twap(
                    &symbol,
                    &side,
                    Quantity::new(quantity),
                    slices,
                    Duration::from_secs(interval),
                )
                .await?;

            println!("{}", render::section("RESPONSES PER SLICE"));
            println!("{}", render::render_twap_report(&report));
            match report.error() {
                // Partial completion: placed slices stay placed.
                Some(err) => println!(
                    "result      : ABORTED after {} of {slices} slices ({err})",
                    report.outcomes().len()
                ),
                None => println!("result      : SUCCESS"),
            }
        }
    }

    Ok(())
}
