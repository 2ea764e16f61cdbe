use option_mc_lib::{default_configs, price_quotes, PricingConfig, SpotQuote};

fn describe(name: &str, config: &PricingConfig, use_case: &str) {
    println!("{}:", name);
    println!("   Simulations: {}", config.simulations);
    println!("   Strike multiplier: {:.2}", config.strike_multiplier);
    println!("   Expiry (years): {:.2}", config.expiry_years);
    println!("   Risk-free rate: {:.2}%", config.risk_free_rate * 100.0);
    println!("   Volatility: {:.1}%", config.volatility * 100.0);
    match config.seed {
        Some(seed) => println!("   Seed: {}", seed),
        None => println!("   Seed: fresh entropy per option"),
    }
    println!("   Use case: {}\n", use_case);
}

fn main() {
    let spots = vec![SpotQuote::new("AAPL", 227.52), SpotQuote::new("SPY", 571.47)];

    println!("Option-MC-Lib Default Configuration Examples\n");

    describe(
        "1. Fast Configuration",
        &default_configs::fast(),
        "Development, quick prototyping",
    );
    describe(
        "2. Production Configuration",
        &default_configs::production(),
        "Live quoting",
    );
    describe(
        "3. Research Configuration",
        &default_configs::research(),
        "Reproducible high-precision studies",
    );
    describe(
        "4. Minimal Configuration",
        &default_configs::minimal(),
        "Unit tests, debugging",
    );

    // 5. Custom configuration built from a preset
    let custom = PricingConfig {
        strike_multiplier: 1.05,
        expiry_years: 0.5,
        volatility: 0.3,
        ..default_configs::minimal()
    };
    describe("5. Custom Configuration", &custom, "5% OTM calls, 6-month expiry");

    println!("Pricing with the custom configuration:");
    match price_quotes(&spots, &custom) {
        Ok(quotes) => {
            for q in quotes {
                println!(
                    "   {:<5} S0={:<8.2} K={:<8.2} call={:<8.4} put={:<8.4}",
                    q.ticker, q.s0, q.strike, q.call_price, q.put_price
                );
            }
        }
        Err(e) => eprintln!("   Pricing failed: {}", e),
    }
}
