//! Monte Carlo pricing of European options under risk-neutral geometric
//! Brownian motion.
//!
//! Only the terminal spot matters for a European payoff, so each path is a
//! single draw from the exact GBM solution; there is no time stepping.

pub mod engine;
pub mod payoff;

pub use engine::*;
pub use payoff::*;
