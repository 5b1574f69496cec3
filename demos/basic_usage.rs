// ============================================================================
// Basic Usage Example
// ============================================================================

use rust_decimal::Decimal;
use sql_decimal_codec::prelude::*;

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== SQL Decimal Codec Example ===\n");

    // decimal(18, 2) column
    let codec = match SqlDecimalCodec::new(18, 2) {
        Ok(codec) => codec,
        Err(err) => {
            eprintln!("invalid configuration: {}", err);
            return;
        }
    };
    println!(
        "Codec {} with precision {} and scale {}\n",
        SqlDecimalCodec::IDENTIFIER,
        codec.precision(),
        codec.scale()
    );

    println!("Encoding values...");
    for value in [
        Decimal::new(12345, 2),
        Decimal::NEGATIVE_ONE,
        Decimal::ZERO,
        Decimal::new(-99_999_999_999, 2),
    ] {
        match codec.encode(&value) {
            Ok(bytes) => {
                let decoded = codec.decode(&bytes);
                println!("  {:>16} -> [{}] -> {:?}", value, hex(&bytes), decoded);
            }
            Err(err) => println!("  {:>16} -> {}", value, err),
        }
    }

    // Too many digits for the column
    println!("\nPrecision overflow...");
    let too_wide = Decimal::from_i128_with_scale(1_000_000_000_000_000_000, 2);
    println!("  {} -> {:?}", too_wide, codec.encode(&too_wide));

    // Scale is not carried on the wire
    println!("\nDecoding with a different scale...");
    let integer_codec = SqlDecimalCodec::default();
    if let Ok(bytes) = codec.encode(&Decimal::new(123, 2)) {
        println!("  1.23 read back as {:?}", integer_codec.decode(&bytes));
    }

    // Wrong buffer length
    println!("\nMalformed input...");
    println!("  16 bytes -> {:?}", codec.decode(&[1u8; 16]));
    println!("  no buffer -> {:?}", codec.decode_optional(None));

    println!("\n=== Example Complete ===");
}
