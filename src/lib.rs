//! # Option-MC-Lib: Monte Carlo Pricing of European Options
//!
//! `option-mc-lib` prices European calls and puts by simulating the terminal
//! spot of a risk-neutral geometric Brownian motion and averaging discounted
//! payoffs. A closed-form Black-Scholes benchmark, a validated pricing API
//! and a CSV batch pricer are built around that core.
//!
//! ## Core Features
//!
//! - **Monte Carlo pricer**: [`price_call`] / [`price_put`], exact GBM terminal sampling
//! - **Reproducibility**: seeded variants and an injectable generator ([`models::mc::simulate`])
//! - **Error estimates**: standard error and normal confidence intervals ([`McEstimate`])
//! - **Benchmarking**: closed-form Black-Scholes prices ([`models::bs`])
//! - **Batch pricing**: spot table in, call/put table out, with CSV IO ([`pricing::batch`])
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use option_mc_lib::{price_call, price_put};
//!
//! // S0, K, r, sigma, T, paths
//! let call = price_call(100.0, 100.0, 0.05, 0.2, 1.0, 500_000);
//! let put = price_put(100.0, 100.0, 0.05, 0.2, 1.0, 500_000);
//!
//! // Black-Scholes: call ≈ 10.45, put ≈ 5.57
//! println!("call = {:.2}, put = {:.2}", call, put);
//! ```
//!
//! ## Configuration Presets
//!
//! Batch pricing is driven by [`PricingConfig`]; see [`default_configs`]:
//! - `production()`: 500k paths per option
//! - `fast()`: 10k paths per option
//! - `research()`: 2M paths, seeded
//! - `minimal()`: 1k paths, seeded

// ================================================================================================
// MODULES
// ================================================================================================

pub mod models;
pub mod pricing;

// ================================================================================================
// IMPORTS
// ================================================================================================

use anyhow::Result;

use models::mc::make_rng;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Monte Carlo pricer
pub use models::mc::{
    price_call, price_call_seeded, price_put, price_put_seeded, McEstimate, OptionType,
};

// Closed-form benchmark
pub use models::bs::{bs_call_price, bs_price_inputs, bs_put_price};

// Inputs, results and configuration
pub use pricing::{
    batch::{price_quotes, OptionQuote, SpotQuote},
    config::PricingConfig,
    types::{PricingInputs, PricingResult},
};

#[cfg(feature = "serde")]
pub use pricing::batch::{
    price_csv_file, read_spot_quotes, read_spot_quotes_path, write_option_quotes,
    write_option_quotes_path,
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured pricing settings for common use cases.
///
/// - [`production()`]: Live quoting
/// - [`fast()`]: Development
/// - [`research()`]: High-precision, reproducible runs
/// - [`minimal()`]: Quick validation settings
pub mod default_configs {
    use crate::pricing::config::PricingConfig;

    /// Production configuration: 500,000 paths, fresh entropy per option.
    ///
    /// Standard error on an at-the-money one-year option is roughly 0.02.
    ///
    /// # Example
    ///
    /// ```rust
    /// use option_mc_lib::default_configs;
    ///
    /// let config = default_configs::production();
    /// assert_eq!(config.simulations, 500_000);
    /// ```
    pub fn production() -> PricingConfig {
        PricingConfig::production()
    }

    /// Fast configuration: 10,000 paths, matching the library defaults.
    pub fn fast() -> PricingConfig {
        PricingConfig::fast()
    }

    /// Research configuration: 2,000,000 paths with a fixed seed so runs
    /// can be compared.
    pub fn research() -> PricingConfig {
        PricingConfig::research()
    }

    /// Minimal configuration: 1,000 paths with a fixed seed.
    ///
    /// **Use Cases:**
    /// - Unit tests
    /// - Debugging and troubleshooting
    pub fn minimal() -> PricingConfig {
        PricingConfig::minimal()
    }
}

/// Validated Monte Carlo estimate for one option.
///
/// Unlike [`price_call`] / [`price_put`], the inputs are checked first and
/// the full [`McEstimate`] (price, standard error, path count) is returned.
///
/// # Arguments
///
/// * `option_type` - Call or put
/// * `inputs` - Spot, strike, rate, volatility, maturity and path count
/// * `seed` - `Some(seed)` for a reproducible run, `None` for fresh OS entropy
///
/// # Errors
///
/// * `anyhow::Error` naming the offending parameter when `simulations == 0`,
///   spot or strike is non-positive, volatility or maturity is negative, or
///   any input is non-finite.
///
/// # Example
///
/// ```rust
/// use option_mc_lib::{estimate, OptionType, PricingInputs};
///
/// let inputs = PricingInputs::new(100.0, 100.0, 0.05, 0.2, 1.0, 20_000);
/// let est = estimate(OptionType::Call, &inputs, Some(42))?;
/// let (lo, hi) = est.confidence_interval(0.99)?;
/// assert!(lo < est.price && est.price < hi);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn estimate(
    option_type: OptionType,
    inputs: &PricingInputs,
    seed: Option<u64>,
) -> Result<McEstimate> {
    inputs.validate()?;
    let mut rng = make_rng(seed);
    Ok(models::mc::simulate(&mut rng, option_type, inputs))
}

/// Prices one option by simulation and reports it next to the closed form.
///
/// # Example
///
/// ```rust
/// use option_mc_lib::{price_with_benchmark, OptionType, PricingInputs};
///
/// let inputs = PricingInputs::new(100.0, 95.0, 0.03, 0.25, 0.5, 50_000);
/// let result = price_with_benchmark(OptionType::Put, &inputs, Some(7))?;
/// if let Some(z) = result.z_score() {
///     println!(
///         "MC {:.4} vs BS {:.4} ({:+.2} s.e.)",
///         result.mc_price, result.analytic_price, z
///     );
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn price_with_benchmark(
    option_type: OptionType,
    inputs: &PricingInputs,
    seed: Option<u64>,
) -> Result<PricingResult> {
    let est = estimate(option_type, inputs, seed)?;
    let analytic_price = bs_price_inputs(option_type, inputs);

    Ok(PricingResult {
        option_type,
        spot: inputs.spot,
        strike: inputs.strike,
        maturity: inputs.maturity,
        mc_price: est.price,
        std_error: est.std_error,
        analytic_price,
    })
}
