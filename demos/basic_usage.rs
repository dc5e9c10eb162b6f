// ============================================================================
// Basic Usage Example
// ============================================================================

use arbitrary_division::prelude::*;
use tracing::Level;

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::TRACE).init();

    println!("=== Arbitrary Division Example ===\n");

    // Base 10 with 20 fractional digits
    let config = ArithmeticConfig::decimal(20);
    let a = config.parse("355").unwrap();
    let b = config.parse("113").unwrap();

    let q = config.divide(&a, &b).unwrap();
    let r = config.modulo(&a, &b).unwrap();
    println!("{} / {} = {}", a, b, q);
    println!("{} mod {} = {}", a, b, r);

    // Truncation, never rounding
    let two_thirds = divide(&"2".parse().unwrap(), &"3".parse().unwrap(), 10, 4).unwrap();
    println!("\n2 / 3 at scale 4 = {}", two_thirds);

    // Signs follow the usual rule
    let neg = divide(&"-7".parse().unwrap(), &"2".parse().unwrap(), 10, 1).unwrap();
    println!("-7 / 2 at scale 1 = {}", neg);

    // Other radixes
    println!("\n=== Other Radixes ===");
    let hex = ArithmeticConfig::hexadecimal(4);
    let x = hex.parse("FFFF").unwrap();
    let y = hex.parse("3").unwrap();
    println!("hex {} / {} = {}", x, y, hex.divide(&x, &y).unwrap());

    let bin = ArithmeticConfig::binary(8);
    let one = bin.parse("1").unwrap();
    let three = bin.parse("11").unwrap();
    println!("bin {} / {} = {}", one, three, bin.divide(&one, &three).unwrap());

    // Errors are values
    println!("\n=== Errors ===");
    match config.divide(&a, &FixedPoint::zero()) {
        Ok(q) => println!("unexpected quotient {}", q),
        Err(e) => println!("{} / 0: {}", a, e),
    }

    // Watch the digit loop
    println!("\n=== Observed Division (see TRACE log) ===");
    let big = config.parse("987654321987654321").unwrap();
    let small = config.parse("123456789").unwrap();
    let q = divide_observed(&big, &small, 10, 2, &mut LoggingObserver).unwrap();
    println!("{} / {} = {}", big, small, q);

    let mut stats = DivisionStats::new();
    divide_observed(&big, &small, 10, 2, &mut stats).unwrap();
    println!("\nStatistics: {:#?}", stats);
}
