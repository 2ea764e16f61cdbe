use crate::models::mc::OptionType;
use anyhow::{bail, Result};

/// Inputs for pricing one European option by simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingInputs {
    /// Spot price of the underlying (S0)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Continuously compounded risk-free rate (r), may be negative
    pub rate: f64,
    /// Annualised volatility (sigma, as decimal)
    pub volatility: f64,
    /// Time to maturity in years (T)
    pub maturity: f64,
    /// Number of simulated paths
    pub simulations: usize,
}

impl PricingInputs {
    /// Plain constructor. No checks are made; see [`PricingInputs::validate`].
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        maturity: f64,
        simulations: usize,
    ) -> Self {
        Self {
            spot,
            strike,
            rate,
            volatility,
            maturity,
            simulations,
        }
    }

    /// Rejects inputs that would make the estimate NaN, infinite or meaningless.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("rate", self.rate),
            ("volatility", self.volatility),
            ("maturity", self.maturity),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                bail!("Invalid parameter '{}': must be finite, got {}", name, value);
            }
        }
        if self.spot <= 0.0 {
            bail!("Invalid parameter 'spot': must be positive, got {}", self.spot);
        }
        if self.strike <= 0.0 {
            bail!(
                "Invalid parameter 'strike': must be positive, got {}",
                self.strike
            );
        }
        if self.volatility < 0.0 {
            bail!(
                "Invalid parameter 'volatility': must be non-negative, got {}",
                self.volatility
            );
        }
        if self.maturity < 0.0 {
            bail!(
                "Invalid parameter 'maturity': must be non-negative, got {}",
                self.maturity
            );
        }
        if self.simulations == 0 {
            bail!("Invalid parameter 'simulations': at least one path is required");
        }
        Ok(())
    }
}

/// Monte Carlo estimate alongside the closed-form benchmark for one option
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricingResult {
    pub option_type: OptionType,
    pub spot: f64,
    pub strike: f64,
    /// Time to maturity in years
    pub maturity: f64,
    /// Discounted mean payoff across paths
    pub mc_price: f64,
    /// Standard error of `mc_price`
    pub std_error: f64,
    /// Black-Scholes closed-form price for the same inputs
    pub analytic_price: f64,
}

impl PricingResult {
    /// Signed difference between simulation and closed form
    pub fn pricing_error(&self) -> f64 {
        self.mc_price - self.analytic_price
    }

    /// Pricing error measured in standard errors.
    ///
    /// `None` when the standard error is zero or undefined (zero volatility,
    /// an all-zero payoff, or a single path).
    pub fn z_score(&self) -> Option<f64> {
        if self.std_error.is_finite() && self.std_error > 0.0 {
            Some(self.pricing_error() / self.std_error)
        } else {
            None
        }
    }
}
