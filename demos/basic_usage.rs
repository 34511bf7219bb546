// ============================================================================
// Basic Usage
// A short tour of both engines: cargo run --example basic_usage --features logging
// ============================================================================

use idle_decimal::eternal::ops as eternal_ops;
use idle_decimal::prelude::*;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    idle_decimal::utils::init_logging();

    // Bounded engine: exponents up to 9e15
    let gold: Decimal = "1.5e400".parse()?;
    let income: Decimal = "3.2e398".parse()?;
    let after_an_hour = gold + income * 3600;
    println!("gold after an hour: {after_an_hour}");
    println!("  to_exponential(3): {}", after_an_hour.to_exponential(3));
    println!("  log10:             {}", after_an_hour.log10());

    let upgrades = Decimal::afford_geometric_series(after_an_hour, 10, 1.15, 0);
    let cost = Decimal::sum_geometric_series(upgrades, 10, 1.15, 0);
    println!("upgrades affordable: {upgrades} (costing {})", cost.to_precision(4));

    // Layered engine: towers of exponents
    let tower = EternalDecimal::TEN.tetrate(4.5, 1, false);
    println!("10^^4.5 = {tower}");
    println!("  slog10 = {}", tower.slog(10, false).to_fixed(6));
    println!("  one layer up: {}", tower.layeradd10(1.0, false));

    let huge: EternalDecimal = "(e^1000)10".parse()?;
    println!("(e^1000)10 > 10^^1000? {}", huge.gt(eternal_ops::tetrate(10, 1000.0, 1, false)));
    println!("2 pentated 3 times: {}", eternal_ops::pentate(2, 3.0, 1, false));
    println!("super square root of 27: {}", EternalDecimal::from(27).ssqrt().to_fixed(6));

    // Strict boundary: collapsing a tower into the bounded engine fails
    match Decimal::try_from(tower) {
        Ok(value) => println!("collapsed: {value}"),
        Err(error) => println!("cannot collapse {tower}: {error}"),
    }

    Ok(())
}
