//! # Measurement Chain Example
//!
//! Propagates a chain of lab measurements with asymmetric uncertainties:
//! a detector count rate corrected for efficiency and live time.
//!
//! Run with:
//! ```bash
//! cargo run --example measurement_chain --release
//! ```

use asym_uncertain::{EvalConfig, UncertainValue};

fn main() -> asym_uncertain::Result<()> {
    let config = EvalConfig::default().with_seed(42).with_coverage(0.6827);

    // Raw counts follow an asymmetric distribution from a low-statistics fit.
    let counts = UncertainValue::asymmetric(1450.0, 35.0, 52.0)?;

    // Detector efficiency is bounded to (0, 1] and skewed downward.
    let efficiency = UncertainValue::asymmetric(0.82, 0.06, 0.02)?.with_limits(0.0, 1.0)?;

    // Live-time fraction from the DAQ, flat within its readback resolution.
    let live_time = UncertainValue::uniform(0.95, 0.01, 0.01)?;

    let measurement_time = UncertainValue::exact(600.0)?;

    println!("counts:       {counts}");
    println!("efficiency:   {efficiency}");
    println!("live time:    {live_time}");
    println!();

    let rate = counts.expr() / (efficiency * live_time * measurement_time);
    let estimate = rate.evaluate(&config)?;

    println!("corrected rate [1/s]: {estimate}");
    println!("  mean:             {:.4}", estimate.mean);
    println!(
        "  {:.2} % interval:   [{:.4}, {:.4}]",
        estimate.coverage * 100.0,
        estimate.lower,
        estimate.upper
    );
    println!("  invalid trials:   {:.2} %", estimate.invalid_fraction * 100.0);
    println!();

    // Results chain: compare against a reference activity.
    let reference = UncertainValue::normal(3.05, 0.04)?;
    let ratio = estimate.to_value()?.expr() / reference;
    let ratio_estimate = ratio.evaluate(&config)?;

    println!("ratio to reference:   {ratio_estimate}");

    Ok(())
}
