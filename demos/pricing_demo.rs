// demos/pricing_demo.rs

//! Demonstration of Monte Carlo option pricing
//!
//! This example shows how to:
//! 1. Price a call and a put with the plain entry points
//! 2. Get a validated estimate with standard error and confidence interval
//! 3. Compare simulated prices with the Black-Scholes closed form across strikes

use anyhow::Result;
use option_mc_lib::{
    estimate, price_call, price_put, price_with_benchmark, OptionType, PricingInputs,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Monte Carlo European Option Pricing Demo");
    println!("========================================");

    let (s0, k, r, sigma, t, paths) = (100.0, 100.0, 0.05, 0.2, 1.0, 500_000);

    println!("\nStep 1: Plain pricing ({} paths)...", paths);
    let call = price_call(s0, k, r, sigma, t, paths);
    let put = price_put(s0, k, r, sigma, t, paths);
    println!("  Call: {:.4}  (Black-Scholes 10.4506)", call);
    println!("  Put:  {:.4}  (Black-Scholes  5.5735)", put);
    println!(
        "  Parity gap: {:+.4}",
        (call - put) - (s0 - k * (-r * t).exp())
    );

    println!("\nStep 2: Validated estimate with error bars...");
    let inputs = PricingInputs::new(s0, k, r, sigma, t, 100_000);
    let est = estimate(OptionType::Call, &inputs, Some(42))?;
    let (lo, hi) = est.confidence_interval(0.95)?;
    println!(
        "  Call: {:.4} +/- {:.4} (95% CI [{:.4}, {:.4}])",
        est.price, est.std_error, lo, hi
    );

    println!("\nStep 3: Strike ladder against the closed form...");
    println!(
        "{:<6} {:<8} {:<12} {:<12} {:<8}",
        "Type", "Strike", "MC Price", "BS Price", "z"
    );
    println!("{}", "-".repeat(50));

    for (i, strike) in [80.0, 90.0, 100.0, 110.0, 120.0].into_iter().enumerate() {
        for option_type in [OptionType::Call, OptionType::Put] {
            let inputs = PricingInputs::new(s0, strike, r, sigma, t, 100_000);
            let result = price_with_benchmark(option_type, &inputs, Some(1_000 + i as u64))?;
            println!(
                "{:<6} {:<8.0} {:<12.4} {:<12.4} {:<+8.2}",
                option_type,
                strike,
                result.mc_price,
                result.analytic_price,
                result.z_score().unwrap_or(f64::NAN)
            );
        }
    }

    Ok(())
}
