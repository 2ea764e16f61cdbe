//! Batch pricing of at-the-money (or fixed-moneyness) calls and puts for a
//! table of underlyings, with CSV import and export.
//!
//! Input rows carry a symbol and its latest close; each row is turned into
//! one call and one put using the strike multiplier, maturity, rate and
//! volatility from [`PricingConfig`].

use crate::models::mc::{make_rng, simulate, OptionType};
use crate::pricing::config::PricingConfig;
use crate::pricing::types::PricingInputs;
use anyhow::Result;

/// Latest close for one underlying
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpotQuote {
    pub symbol: String,
    pub close: f64,
}

impl SpotQuote {
    pub fn new(symbol: impl Into<String>, close: f64) -> Self {
        Self {
            symbol: symbol.into(),
            close,
        }
    }
}

/// Priced call/put pair for one underlying
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionQuote {
    pub ticker: String,
    #[cfg_attr(feature = "serde", serde(rename = "S0"))]
    pub s0: f64,
    pub strike: f64,
    pub expiry_years: f64,
    pub call_price: f64,
    pub put_price: f64,
}

/// Seeds for the call and put legs of row `row`. Distinct per leg so the two
/// estimates never share a random stream.
fn leg_seeds(base: Option<u64>, row: usize) -> (Option<u64>, Option<u64>) {
    match base {
        Some(seed) => {
            let offset = 2 * row as u64;
            (
                Some(seed.wrapping_add(offset)),
                Some(seed.wrapping_add(offset + 1)),
            )
        }
        None => (None, None),
    }
}

/// Prices a call and a put for every quote.
///
/// Rows whose inputs fail validation (e.g. a non-positive close) are skipped
/// with a warning rather than aborting the batch. An invalid `config` is an
/// error.
pub fn price_quotes(quotes: &[SpotQuote], config: &PricingConfig) -> Result<Vec<OptionQuote>> {
    config.validate()?;

    let mut results = Vec::with_capacity(quotes.len());
    for (row, quote) in quotes.iter().enumerate() {
        let inputs = PricingInputs::new(
            quote.close,
            quote.close * config.strike_multiplier,
            config.risk_free_rate,
            config.volatility,
            config.expiry_years,
            config.simulations,
        );
        if let Err(e) = inputs.validate() {
            tracing::warn!(symbol = %quote.symbol, error = %e, "skipping quote");
            continue;
        }

        let (call_seed, put_seed) = leg_seeds(config.seed, row);
        let call = simulate(&mut make_rng(call_seed), OptionType::Call, &inputs);
        let put = simulate(&mut make_rng(put_seed), OptionType::Put, &inputs);

        results.push(OptionQuote {
            ticker: quote.symbol.clone(),
            s0: inputs.spot,
            strike: inputs.strike,
            expiry_years: inputs.maturity,
            call_price: call.price,
            put_price: put.price,
        });
    }

    tracing::info!(
        priced = results.len(),
        skipped = quotes.len() - results.len(),
        simulations = config.simulations,
        "batch pricing complete"
    );
    Ok(results)
}

#[cfg(feature = "serde")]
mod csv_io {
    use super::{price_quotes, OptionQuote, SpotQuote};
    use crate::pricing::config::PricingConfig;
    use anyhow::{Context, Result};
    use std::io::{Read, Write};
    use std::path::Path;

    /// Reads `symbol,close` rows.
    pub fn read_spot_quotes<R: Read>(reader: R) -> Result<Vec<SpotQuote>> {
        let mut reader = csv::Reader::from_reader(reader);
        let mut quotes = Vec::new();
        for (line, row) in reader.deserialize::<SpotQuote>().enumerate() {
            let quote: SpotQuote =
                row.with_context(|| format!("Malformed spot quote at record {}", line + 1))?;
            quotes.push(quote);
        }
        Ok(quotes)
    }

    pub fn read_spot_quotes_path<P: AsRef<Path>>(path: P) -> Result<Vec<SpotQuote>> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        read_spot_quotes(file)
    }

    /// Writes priced rows with a `ticker,S0,strike,expiry_years,call_price,put_price` header.
    pub fn write_option_quotes<W: Write>(writer: W, quotes: &[OptionQuote]) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        for quote in quotes {
            writer.serialize(quote)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Writes to `path`, creating parent directories as needed.
    pub fn write_option_quotes_path<P: AsRef<Path>>(path: P, quotes: &[OptionQuote]) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        write_option_quotes(file, quotes)
    }

    /// Reads spot quotes from `input`, prices them and writes the option
    /// table to `output`. Returns the priced rows.
    pub fn price_csv_file<P: AsRef<Path>, Q: AsRef<Path>>(
        input: P,
        output: Q,
        config: &PricingConfig,
    ) -> Result<Vec<OptionQuote>> {
        let spots = read_spot_quotes_path(input)?;
        let priced = price_quotes(&spots, config)?;
        write_option_quotes_path(&output, &priced)?;
        tracing::info!(
            rows = priced.len(),
            output = %output.as_ref().display(),
            "option prices saved"
        );
        Ok(priced)
    }
}

#[cfg(feature = "serde")]
pub use csv_io::*;
