use anyhow::{bail, Result};

/// Main configuration for batch and validated pricing.
///
/// Every field falls back to its default when missing from a TOML file, so a
/// config only needs to name what it overrides:
///
/// ```toml
/// simulations = 200000
/// volatility = 0.35
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingConfig {
    /// Strike as a multiple of spot (1.0 = at the money)
    #[cfg_attr(feature = "serde", serde(default = "default_strike_multiplier"))]
    pub strike_multiplier: f64,

    /// Time to maturity in years
    #[cfg_attr(feature = "serde", serde(default = "default_expiry_years"))]
    pub expiry_years: f64,

    /// Paths per option
    #[cfg_attr(feature = "serde", serde(default = "default_simulations"))]
    pub simulations: usize,

    #[cfg_attr(feature = "serde", serde(default = "default_risk_free_rate"))]
    pub risk_free_rate: f64,

    /// Flat volatility applied to every underlying (as decimal)
    #[cfg_attr(feature = "serde", serde(default = "default_volatility"))]
    pub volatility: f64,

    /// Random seed for reproducibility (None = fresh entropy per option)
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            strike_multiplier: default_strike_multiplier(),
            expiry_years: default_expiry_years(),
            simulations: default_simulations(),
            risk_free_rate: default_risk_free_rate(),
            volatility: default_volatility(),
            seed: None,
        }
    }
}

impl PricingConfig {
    /// High path count for live quoting
    pub fn production() -> Self {
        Self {
            simulations: 500_000,
            ..Self::default()
        }
    }

    /// Default path count, good enough for development
    pub fn fast() -> Self {
        Self::default()
    }

    /// Very high path count, seeded so runs can be compared
    pub fn research() -> Self {
        Self {
            simulations: 2_000_000,
            seed: Some(123456),
            ..Self::default()
        }
    }

    /// Minimal configuration for quick validation and debugging
    pub fn minimal() -> Self {
        Self {
            simulations: 1_000,
            seed: Some(123456),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.strike_multiplier.is_finite() && self.strike_multiplier > 0.0) {
            bail!(
                "strike_multiplier must be positive, got {}",
                self.strike_multiplier
            );
        }
        if !(self.expiry_years.is_finite() && self.expiry_years >= 0.0) {
            bail!("expiry_years must be non-negative, got {}", self.expiry_years);
        }
        if !self.risk_free_rate.is_finite() {
            bail!("risk_free_rate must be finite, got {}", self.risk_free_rate);
        }
        if !(self.volatility.is_finite() && self.volatility >= 0.0) {
            bail!("volatility must be non-negative, got {}", self.volatility);
        }
        if self.simulations == 0 {
            bail!("simulations must be at least 1");
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl PricingConfig {
    /// Parses a TOML document; missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        use anyhow::Context;

        let config: Self = toml::from_str(s).context("Failed to parse pricing config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text)
    }
}

fn default_strike_multiplier() -> f64 {
    1.0
}

fn default_expiry_years() -> f64 {
    0.25
}

fn default_simulations() -> usize {
    10_000
}

fn default_risk_free_rate() -> f64 {
    0.05
}

fn default_volatility() -> f64 {
    0.2
}
