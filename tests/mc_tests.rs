
use option_mc_lib::models::mc::{simulate, GbmTerminal};
use option_mc_lib::{
    bs_call_price, bs_put_price, estimate, price_call, price_call_seeded, price_put,
    price_put_seeded, price_with_benchmark, OptionType, PricingInputs,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};
use test_utils::{atm_inputs, parity_forward, sample_std, ATM_CALL, ATM_PUT};

/// Textbook benchmark: 500k paths should land within 0.1 of the closed form.
#[test]
fn test_atm_benchmark_matches_black_scholes() {
    let call = price_call(100.0, 100.0, 0.05, 0.2, 1.0, 500_000);
    let put = price_put(100.0, 100.0, 0.05, 0.2, 1.0, 500_000);

    println!("MC call = {:.4} (BS {:.4})", call, ATM_CALL);
    println!("MC put  = {:.4} (BS {:.4})", put, ATM_PUT);

    assert!((call - 10.45).abs() < 0.1, "call = {}", call);
    assert!((put - 5.57).abs() < 0.1, "put = {}", put);
}

/// With sigma = 0 every path lands on the forward, whatever the path count.
#[test]
fn test_zero_volatility_is_deterministic() {
    let (s0, r, t): (f64, f64, f64) = (100.0, 0.05, 1.0);
    let forward = s0 * (r * t).exp();
    let df = (-r * t).exp();

    for &paths in &[1usize, 7, 1_000] {
        let call = price_call(s0, 90.0, r, 0.0, t, paths);
        let put = price_put(s0, 120.0, r, 0.0, t, paths);
        assert!((call - df * (forward - 90.0)).abs() < 1e-9, "call = {}", call);
        assert!((put - df * (120.0 - forward)).abs() < 1e-9, "put = {}", put);

        // Out of the money on the forward: exactly worthless
        assert_eq!(price_call(s0, 120.0, r, 0.0, t, paths), 0.0);
        assert_eq!(price_put(s0, 90.0, r, 0.0, t, paths), 0.0);
    }
}

/// With T = 0 the price is plain intrinsic value, undiscounted.
#[test]
fn test_zero_maturity_is_intrinsic() {
    assert!((price_call(110.0, 100.0, 0.05, 0.3, 0.0, 5) - 10.0).abs() < 1e-12);
    assert!((price_put(90.0, 100.0, 0.05, 0.3, 0.0, 5) - 10.0).abs() < 1e-12);
    assert_eq!(price_call(90.0, 100.0, 0.05, 0.3, 0.0, 5), 0.0);
    assert_eq!(price_put(110.0, 100.0, 0.05, 0.3, 0.0, 5), 0.0);
}

/// call - put ≈ S0 - K exp(-rT) within 1% of spot.
#[test]
fn test_put_call_parity() {
    let scenarios = [
        PricingInputs::new(100.0, 100.0, 0.05, 0.2, 1.0, 200_000),
        PricingInputs::new(50.0, 60.0, 0.01, 0.4, 2.0, 200_000),
        PricingInputs::new(250.0, 230.0, -0.005, 0.15, 0.25, 200_000),
    ];

    for (i, inputs) in scenarios.iter().enumerate() {
        let seed = 1_000 + 2 * i as u64;
        let call = price_call_seeded(
            inputs.spot,
            inputs.strike,
            inputs.rate,
            inputs.volatility,
            inputs.maturity,
            inputs.simulations,
            seed,
        );
        let put = price_put_seeded(
            inputs.spot,
            inputs.strike,
            inputs.rate,
            inputs.volatility,
            inputs.maturity,
            inputs.simulations,
            seed + 1,
        );

        let gap = (call - put) - parity_forward(inputs);
        println!("scenario {}: parity gap = {:+.5}", i, gap);
        assert!(gap.abs() < 0.01 * inputs.spot, "parity violated: {}", gap);
    }
}

#[test]
fn test_prices_are_non_negative() {
    let cases = [
        (100.0, 150.0, 0.05, 0.1, 0.5),
        (100.0, 50.0, 0.05, 0.1, 0.5),
        (10.0, 10.0, -0.02, 1.5, 3.0),
        (1.0, 1000.0, 0.0, 0.3, 1.0),
        (1000.0, 1.0, 0.1, 0.3, 1.0),
    ];
    for &(s0, k, r, sigma, t) in &cases {
        let call = price_call(s0, k, r, sigma, t, 2_000);
        let put = price_put(s0, k, r, sigma, t, 2_000);
        assert!(call >= 0.0, "call({}, {}) = {}", s0, k, call);
        assert!(put >= 0.0, "put({}, {}) = {}", s0, k, put);
    }
}

/// Raising the strike cheapens the call and richens the put.
#[test]
fn test_monotone_in_strike() {
    let strikes = [80.0, 90.0, 100.0, 110.0, 120.0];
    let calls: Vec<f64> = strikes
        .iter()
        .enumerate()
        .map(|(i, &k)| price_call_seeded(100.0, k, 0.05, 0.2, 1.0, 100_000, 40 + i as u64))
        .collect();
    let puts: Vec<f64> = strikes
        .iter()
        .enumerate()
        .map(|(i, &k)| price_put_seeded(100.0, k, 0.05, 0.2, 1.0, 100_000, 80 + i as u64))
        .collect();

    for w in calls.windows(2) {
        assert!(w[0] > w[1], "calls not decreasing: {:?}", calls);
    }
    for w in puts.windows(2) {
        assert!(w[0] < w[1], "puts not increasing: {:?}", puts);
    }
}

/// Quadrupling the path count should roughly halve the estimator's spread.
#[test]
fn test_error_shrinks_with_path_count() {
    // Reported standard error
    let small = estimate(OptionType::Call, &atm_inputs(10_000), Some(1)).unwrap();
    let large = estimate(OptionType::Call, &atm_inputs(40_000), Some(2)).unwrap();
    let ratio = small.std_error / large.std_error;
    println!("std error ratio (reported) = {:.3}", ratio);
    assert!(ratio > 1.7 && ratio < 2.3, "ratio = {}", ratio);

    // Observed spread across independent repeats
    let repeats = 200;
    let run = |paths: usize, offset: u64| -> Vec<f64> {
        (0..repeats)
            .map(|i| {
                let mut rng = StdRng::seed_from_u64(offset + i as u64);
                simulate(&mut rng, OptionType::Call, &atm_inputs(paths)).price
            })
            .collect()
    };
    let spread_small = sample_std(&run(1_000, 10_000));
    let spread_large = sample_std(&run(4_000, 20_000));
    let ratio = spread_small / spread_large;
    println!("std error ratio (observed) = {:.3}", ratio);
    assert!(ratio > 1.5 && ratio < 2.6, "ratio = {}", ratio);
}

/// The closed form should sit inside a 99.9% interval of a seeded run.
#[test]
fn test_benchmark_within_confidence_interval() {
    let otm = PricingInputs::new(100.0, 110.0, 0.03, 0.3, 0.5, 100_000);
    let hull = PricingInputs::new(42.0, 40.0, 0.10, 0.2, 0.5, 100_000);
    let cases = [
        (OptionType::Call, otm),
        (OptionType::Put, otm),
        (OptionType::Put, hull),
    ];
    for (i, (option_type, inputs)) in cases.iter().enumerate() {
        let result = price_with_benchmark(*option_type, inputs, Some(300 + i as u64)).unwrap();
        println!(
            "{} K={}: MC {:.4} +/- {:.4}, BS {:.4}, z = {:+.2}",
            option_type,
            inputs.strike,
            result.mc_price,
            result.std_error,
            result.analytic_price,
            result.z_score().unwrap_or(f64::NAN)
        );
        let z = result.z_score().expect("positive standard error");
        assert!(z.abs() < 4.0);

        let est = estimate(*option_type, inputs, Some(300 + i as u64)).unwrap();
        assert_eq!(est.price, result.mc_price);
        let (lo, hi) = est.confidence_interval(0.999).unwrap();
        let (s, k, r, t, sigma) = (
            inputs.spot,
            inputs.strike,
            inputs.rate,
            inputs.maturity,
            inputs.volatility,
        );
        let analytic = match option_type {
            OptionType::Call => bs_call_price(s, k, r, t, sigma),
            OptionType::Put => bs_put_price(s, k, r, t, sigma),
        };
        assert!(lo < analytic && analytic < hi);
    }
}

#[test]
fn test_estimate_rejects_invalid_inputs() {
    let bad = [
        PricingInputs::new(100.0, 100.0, 0.05, 0.2, 1.0, 0),
        PricingInputs::new(100.0, 100.0, 0.05, -0.2, 1.0, 100),
        PricingInputs::new(100.0, 100.0, 0.05, 0.2, -1.0, 100),
        PricingInputs::new(-100.0, 100.0, 0.05, 0.2, 1.0, 100),
    ];
    for inputs in &bad {
        assert!(estimate(OptionType::Call, inputs, None).is_err(), "{:?}", inputs);
        assert!(price_with_benchmark(OptionType::Put, inputs, None).is_err());
    }
}

#[test]
fn test_zero_volatility_estimate_has_no_spread() {
    let inputs = PricingInputs::new(100.0, 95.0, 0.02, 0.0, 1.0, 500);
    let est = estimate(OptionType::Call, &inputs, None).unwrap();
    assert!(est.std_error.abs() < 1e-6, "std error = {}", est.std_error);
    assert_eq!(est.simulations, 500);
}

/// An injected generator drives the same loop the public functions use.
#[test]
fn test_injected_generator_matches_seeded_entry_point() {
    let inputs = atm_inputs(5_000);
    let mut rng = StdRng::seed_from_u64(99);
    let injected = simulate(&mut rng, OptionType::Put, &inputs).price;
    let seeded = price_put_seeded(100.0, 100.0, 0.05, 0.2, 1.0, 5_000, 99);
    assert_eq!(injected, seeded);

    // Trait-object generators work too
    let mut boxed: Box<dyn rand::RngCore> = Box::new(StdRng::seed_from_u64(99));
    let dynamic = simulate(&mut *boxed, OptionType::Put, &inputs).price;
    assert_eq!(dynamic, seeded);
}

#[test]
fn test_gbm_terminal_mean_is_forward() {
    let gbm = GbmTerminal::new(100.0, 0.05, 0.2, 1.0);
    let mut rng = StdRng::seed_from_u64(5);
    let n = 200_000;
    let mean = (0..n)
        .map(|_| gbm.sample(StandardNormal.sample(&mut rng)))
        .sum::<f64>()
        / n as f64;
    let forward = 100.0 * (0.05_f64).exp();
    assert!((mean - forward).abs() < 0.25, "mean = {}", mean);
}
