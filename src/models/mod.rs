pub mod bs;
pub mod mc;

/// Common traits used by the pricing models
pub mod traits {
    /// A European claim whose value depends only on the terminal spot.
    pub trait TerminalPayoff {
        /// Undiscounted payoff at expiry given the terminal spot `s_t`.
        fn payoff(&self, s_t: f64) -> f64;
    }
}

/// Utility functions shared by the analytic and simulation pricers
pub mod utils {
    use crate::models::mc::OptionType;

    /// Continuous-compounding discount factor: exp(-rT)
    pub fn discount_factor(r: f64, t: f64) -> f64 {
        (-r * t).exp()
    }

    /// Risk-neutral forward of the underlying: S0 * exp(rT)
    pub fn forward_price(s0: f64, r: f64, t: f64) -> f64 {
        s0 * (r * t).exp()
    }

    /// Value of the option when the terminal spot is known with certainty.
    ///
    /// With zero volatility (or zero maturity) every path lands on the
    /// forward, so the price collapses to `exp(-rT) * payoff(S0 * exp(rT))`.
    pub fn discounted_intrinsic(option_type: OptionType, s0: f64, k: f64, r: f64, t: f64) -> f64 {
        discount_factor(r, t) * option_type.payoff(forward_price(s0, r, t), k)
    }
}
