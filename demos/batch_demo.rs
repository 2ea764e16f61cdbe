//! Batch pricing demo: spot table in, option price table out.
//!
//! Usage:
//!
//! ```text
//! cargo run --example batch_demo -- [latest_prices.csv] [options_prices.csv] [config.toml]
//! ```
//!
//! Without arguments a small built-in spot table is priced with the default
//! configuration and written to `data/options_prices.csv`.

use anyhow::Result;
use option_mc_lib::{price_csv_file, write_option_quotes_path, PricingConfig, SpotQuote};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match args.get(2) {
        Some(path) => PricingConfig::from_toml_file(path)?,
        None => PricingConfig::default(),
    };

    let output = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| "data/options_prices.csv".to_string());

    let priced = match args.first() {
        Some(input) => price_csv_file(input, &output, &config)?,
        None => {
            let spots = vec![
                SpotQuote::new("AAPL", 227.52),
                SpotQuote::new("MSFT", 415.10),
                SpotQuote::new("NVDA", 138.85),
                SpotQuote::new("SPY", 571.47),
            ];
            let priced = option_mc_lib::price_quotes(&spots, &config)?;
            write_option_quotes_path(&output, &priced)?;
            priced
        }
    };

    println!(
        "{:<6} {:>10} {:>10} {:>8} {:>10} {:>10}",
        "Ticker", "S0", "Strike", "T", "Call", "Put"
    );
    for q in &priced {
        println!(
            "{:<6} {:>10.2} {:>10.2} {:>8.2} {:>10.4} {:>10.4}",
            q.ticker, q.s0, q.strike, q.expiry_years, q.call_price, q.put_price
        );
    }
    println!("Options prices saved to {}", output);

    Ok(())
}
