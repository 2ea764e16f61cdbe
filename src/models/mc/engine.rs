use crate::models::mc::payoff::{OptionType, Vanilla};
use crate::models::traits::TerminalPayoff;
use crate::models::utils::discount_factor;
use crate::pricing::types::PricingInputs;
use anyhow::{anyhow, bail, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use statrs::distribution::{ContinuousCDF, Normal};

/// Terminal-time marginal of risk-neutral geometric Brownian motion.
///
/// Holds the per-input constants of the exact solution
/// `S_T = S0 * exp((r - σ²/2)T + σ√T Z)` so the simulation loop only pays for
/// one multiply-add and one `exp` per path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GbmTerminal {
    s0: f64,
    drift: f64,
    diffusion: f64,
}

impl GbmTerminal {
    pub fn new(s0: f64, r: f64, sigma: f64, t: f64) -> Self {
        Self {
            s0,
            drift: (r - 0.5 * sigma * sigma) * t,
            diffusion: sigma * t.sqrt(),
        }
    }

    /// Maps a standard normal draw `z` to a terminal spot.
    #[inline]
    pub fn sample(&self, z: f64) -> f64 {
        self.s0 * (self.drift + self.diffusion * z).exp()
    }
}

/// Terminal spot for a single standard normal draw `z`.
pub fn terminal_price(s0: f64, r: f64, sigma: f64, t: f64, z: f64) -> f64 {
    GbmTerminal::new(s0, r, sigma, t).sample(z)
}

/// Outcome of a Monte Carlo run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct McEstimate {
    /// Discounted mean payoff
    pub price: f64,
    /// Standard error of `price` (NaN with fewer than two paths)
    pub std_error: f64,
    /// Number of paths averaged
    pub simulations: usize,
}

impl McEstimate {
    /// Two-sided normal confidence interval around `price`.
    ///
    /// `level` is the coverage probability, e.g. `0.95`.
    pub fn confidence_interval(&self, level: f64) -> Result<(f64, f64)> {
        if !(level > 0.0 && level < 1.0) {
            bail!("Confidence level must be in (0, 1), got {}", level);
        }
        let normal = Normal::new(0.0, 1.0).map_err(|e| anyhow!("{}", e))?;
        let z = normal.inverse_cdf(0.5 + 0.5 * level);
        let half_width = z * self.std_error;
        Ok((self.price - half_width, self.price + half_width))
    }
}

/// Core estimator: averages `payoff` over `simulations` terminal draws and
/// discounts the mean by `discount`.
///
/// No input checks are made here. `simulations == 0` gives a NaN price.
pub fn simulate_payoff<R, P>(
    rng: &mut R,
    gbm: &GbmTerminal,
    payoff: &P,
    discount: f64,
    simulations: usize,
) -> McEstimate
where
    R: Rng + ?Sized,
    P: TerminalPayoff + ?Sized,
{
    let mut payoff_sum = 0.0_f64;
    // Welford running mean and sum of squared deviations
    let mut running_mean = 0.0_f64;
    let mut m2 = 0.0_f64;

    for i in 0..simulations {
        let z: f64 = StandardNormal.sample(&mut *rng);
        let x = payoff.payoff(gbm.sample(z));
        payoff_sum += x;

        let delta = x - running_mean;
        running_mean += delta / (i + 1) as f64;
        m2 += delta * (x - running_mean);
    }

    let n = simulations as f64;
    let mean = payoff_sum / n;
    let std_error = if simulations > 1 {
        let variance = m2 / (n - 1.0);
        discount * (variance / n).sqrt()
    } else {
        f64::NAN
    };

    McEstimate {
        price: discount * mean,
        std_error,
        simulations,
    }
}

/// Prices a vanilla European option with a caller-supplied generator.
///
/// This is the shared loop behind [`price_call`] and [`price_put`]; pass a
/// seeded generator to get reproducible estimates.
pub fn simulate<R: Rng + ?Sized>(
    rng: &mut R,
    option_type: OptionType,
    inputs: &PricingInputs,
) -> McEstimate {
    tracing::debug!(
        option_type = %option_type,
        spot = inputs.spot,
        strike = inputs.strike,
        rate = inputs.rate,
        volatility = inputs.volatility,
        maturity = inputs.maturity,
        simulations = inputs.simulations,
        "monte carlo pricing"
    );

    let gbm = GbmTerminal::new(inputs.spot, inputs.rate, inputs.volatility, inputs.maturity);
    let contract = Vanilla::new(option_type, inputs.strike);
    simulate_payoff(
        rng,
        &gbm,
        &contract,
        discount_factor(inputs.rate, inputs.maturity),
        inputs.simulations,
    )
}

/// Builds the generator for one pricing call: seeded when asked, otherwise
/// fresh from OS entropy so no two calls share random state.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn price_fresh(option_type: OptionType, inputs: &PricingInputs, seed: Option<u64>) -> f64 {
    let mut rng = make_rng(seed);
    simulate(&mut rng, option_type, inputs).price
}

/// Monte Carlo price of a European call.
///
/// Inputs are not validated: degenerate values propagate as NaN or Inf.
/// Each call draws from its own entropy-seeded generator, so repeated calls
/// return slightly different estimates.
#[allow(non_snake_case)]
pub fn price_call(S0: f64, K: f64, r: f64, sigma: f64, T: f64, simulations: usize) -> f64 {
    let inputs = PricingInputs::new(S0, K, r, sigma, T, simulations);
    price_fresh(OptionType::Call, &inputs, None)
}

/// Monte Carlo price of a European put. See [`price_call`].
#[allow(non_snake_case)]
pub fn price_put(S0: f64, K: f64, r: f64, sigma: f64, T: f64, simulations: usize) -> f64 {
    let inputs = PricingInputs::new(S0, K, r, sigma, T, simulations);
    price_fresh(OptionType::Put, &inputs, None)
}

/// Reproducible variant of [`price_call`].
#[allow(non_snake_case)]
pub fn price_call_seeded(
    S0: f64,
    K: f64,
    r: f64,
    sigma: f64,
    T: f64,
    simulations: usize,
    seed: u64,
) -> f64 {
    let inputs = PricingInputs::new(S0, K, r, sigma, T, simulations);
    price_fresh(OptionType::Call, &inputs, Some(seed))
}

/// Reproducible variant of [`price_put`].
#[allow(non_snake_case)]
pub fn price_put_seeded(
    S0: f64,
    K: f64,
    r: f64,
    sigma: f64,
    T: f64,
    simulations: usize,
    seed: u64,
) -> f64 {
    let inputs = PricingInputs::new(S0, K, r, sigma, T, simulations);
    price_fresh(OptionType::Put, &inputs, Some(seed))
}
