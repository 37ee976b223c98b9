// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with logging to see tokenization:
//     cargo run --example basic_usage --features logging

use chinese_numerals::prelude::*;
use num_bigint::BigInt;

fn main() {
    #[cfg(feature = "logging")]
    chinese_numerals::utils::init_logging(tracing::Level::TRACE);

    println!("=== Chinese Numerals Example ===\n");

    let parser = ChineseNumberParser::default();
    let inputs = [
        "一百二十三",
        "一千零一",
        "二万三千",
        "负一万亿",
        "1.5万",
        "-45.6",
        "三恒河沙",
    ];

    println!("Parsing...");
    for input in inputs.iter() {
        match parser.parse(input) {
            Ok(value) => println!("  {} = {}", input, value),
            Err(err) => println!("  {} failed: {}", input, err),
        }
    }

    println!("\nMalformed input:");
    if let Err(err) = parser.parse("一X三") {
        println!("  {}", err);
    }

    println!("\nStrict parser:");
    let strict = ChineseNumberParser::new(ParserConfig::strict());
    match strict.parse("负负十") {
        Ok(value) => println!("  负负十 = {}", value),
        Err(err) => println!("  负负十 failed: {}", err),
    }

    println!("\nFormatting...");
    let standard = ChineseFormatter::default();
    let financial = ChineseFormatter::new(FormatConfig::financial());
    for n in [15i64, 1010, 100_050_000, -300_020_001] {
        let value = BigInt::from(n);
        match (standard.format(&value), financial.format(&value)) {
            (Ok(s), Ok(f)) => println!("  {} = {} / {}", n, s, f),
            (Err(err), _) | (_, Err(err)) => println!("  {} failed: {}", n, err),
        }
    }

    println!("\n=== Example Complete ===");
}
