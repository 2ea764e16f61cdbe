// Closed-form Black-Scholes prices for European options on a non-dividend
// paying underlying. Used as the analytic benchmark for the Monte Carlo
// estimator; Greeks are out of scope.

use crate::models::mc::OptionType;
use crate::models::utils::{discount_factor, discounted_intrinsic};
use crate::pricing::types::PricingInputs;

fn norm_cdf(x: f64) -> f64 {
    // 0.5 * [1 + erf(x / sqrt(2))]
    0.5 * (1.0 + libm::erf(x / (2.0_f64).sqrt()))
}

#[allow(non_snake_case)]
fn d1_d2(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> (f64, f64) {
    let vol_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Price of a European call option under Black-Scholes assumptions.
///
/// Argument order is `(S, K, r, T, sigma)`: maturity comes before volatility,
/// the reverse of [`price_call`](crate::models::mc::price_call). Prefer
/// [`bs_price_inputs`] when a [`PricingInputs`] is at hand.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    if T <= 0.0 || sigma <= 0.0 {
        return discounted_intrinsic(OptionType::Call, S, K, r, T.max(0.0));
    }
    let (d1, d2) = d1_d2(S, K, r, T, sigma);
    S * norm_cdf(d1) - K * discount_factor(r, T) * norm_cdf(d2)
}

/// Price of a European put option under Black-Scholes assumptions.
///
/// Same `(S, K, r, T, sigma)` order as [`bs_call_price`].
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    if T <= 0.0 || sigma <= 0.0 {
        return discounted_intrinsic(OptionType::Put, S, K, r, T.max(0.0));
    }
    let (d1, d2) = d1_d2(S, K, r, T, sigma);
    K * discount_factor(r, T) * norm_cdf(-d2) - S * norm_cdf(-d1)
}

/// Dispatches to [`bs_call_price`] or [`bs_put_price`], `(S, K, r, T, sigma)` order.
#[allow(non_snake_case)]
pub fn bs_price(option_type: OptionType, S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    match option_type {
        OptionType::Call => bs_call_price(S, K, r, T, sigma),
        OptionType::Put => bs_put_price(S, K, r, T, sigma),
    }
}

/// Closed-form price for the same named inputs the Monte Carlo pricer takes.
pub fn bs_price_inputs(option_type: OptionType, inputs: &PricingInputs) -> f64 {
    bs_price(
        option_type,
        inputs.spot,
        inputs.strike,
        inputs.rate,
        inputs.maturity,
        inputs.volatility,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_inputs_keep_maturity_and_vol_apart() {
        // S0, K, r, sigma, T
        let inputs = PricingInputs::new(100.0, 110.0, 0.03, 0.4, 2.0, 1);
        let call = bs_price_inputs(OptionType::Call, &inputs);
        let put = bs_price_inputs(OptionType::Put, &inputs);

        assert_eq!(call, bs_call_price(100.0, 110.0, 0.03, 2.0, 0.4));
        assert_eq!(put, bs_put_price(100.0, 110.0, 0.03, 2.0, 0.4));
        // Swapping T and sigma is a different option
        assert!((call - bs_call_price(100.0, 110.0, 0.03, 0.4, 2.0)).abs() > 1.0);
    }

    #[test]
    fn test_textbook_atm_values() {
        // Hull: S=K=100, r=5%, sigma=20%, T=1
        let call = bs_call_price(100.0, 100.0, 0.05, 1.0, 0.2);
        let put = bs_put_price(100.0, 100.0, 0.05, 1.0, 0.2);
        assert!((call - 10.4506).abs() < 1e-3, "call = {}", call);
        assert!((put - 5.5735).abs() < 1e-3, "put = {}", put);
    }

    #[test]
    fn test_put_call_parity_is_exact() {
        let (s, k, r, t, sigma) = (87.0, 95.0, 0.03, 0.75, 0.35);
        let lhs = bs_call_price(s, k, r, t, sigma) - bs_put_price(s, k, r, t, sigma);
        let rhs = s - k * (-r * t).exp();
        assert!((lhs - rhs).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_inputs_fall_back_to_intrinsic() {
        // Zero maturity: plain intrinsic value
        assert_eq!(bs_call_price(110.0, 100.0, 0.05, 0.0, 0.2), 10.0);
        assert_eq!(bs_put_price(110.0, 100.0, 0.05, 0.0, 0.2), 0.0);

        // Zero vol: discounted payoff on the forward
        let expected = (100.0 * (0.05_f64).exp() - 100.0) * (-0.05_f64).exp();
        assert!((bs_call_price(100.0, 100.0, 0.05, 1.0, 0.0) - expected).abs() < 1e-12);
        assert_eq!(bs_put_price(100.0, 100.0, 0.05, 1.0, 0.0), 0.0);
    }

    #[test]
    fn test_dispatch_matches_direct_calls() {
        let call = bs_price(OptionType::Call, 100.0, 105.0, 0.01, 0.5, 0.25);
        let put = bs_price(OptionType::Put, 100.0, 105.0, 0.01, 0.5, 0.25);
        assert_eq!(call, bs_call_price(100.0, 105.0, 0.01, 0.5, 0.25));
        assert_eq!(put, bs_put_price(100.0, 105.0, 0.01, 0.5, 0.25));
    }
}
