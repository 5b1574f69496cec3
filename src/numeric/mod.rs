// ============================================================================
// Numeric Module
// Magnitude arithmetic and error types for the decimal codec
// ============================================================================
//
// This module provides:
// - CodecError: Error types for configuration, encode and decode
// - Magnitude helpers: 96-bit word split/join and digit counting
//
// Design principles:
// - No floating-point operations
// - All validation returns Result (no panics)
// - Fixed-width integer arithmetic only (u128 holds the 96-bit magnitude)

mod errors;
mod magnitude;

pub use errors::{CodecError, CodecResult, ErrorKind, OutOfRange};
pub use magnitude::{
    digit_count, join_words, magnitude_of, natural_precision, split_words, MagnitudeWords,
    MAX_DECIMAL_SCALE, MAX_MAGNITUDE,
};
