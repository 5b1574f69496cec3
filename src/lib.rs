// ============================================================================
// SQL Decimal Codec Library
// Bit-exact 17-byte wire format for fixed-point decimal column values
// ============================================================================

//! # SQL Decimal Codec
//!
//! Converts [`rust_decimal::Decimal`] values to and from the 17-byte
//! fixed-point layout a relational database engine uses for `decimal(p, s)`
//! columns, so column values can be encrypted or transmitted without losing
//! precision or sign.
//!
//! ## Wire record
//!
//! | offset | length | meaning                                |
//! |--------|--------|----------------------------------------|
//! | 0      | 1      | sign: `1` non-negative, `0` negative   |
//! | 1      | 4      | low magnitude word (little-endian)     |
//! | 5      | 4      | middle magnitude word (little-endian)  |
//! | 9      | 4      | high magnitude word (little-endian)    |
//! | 13     | 4      | zero padding                           |
//!
//! The record carries no scale. Decoding applies the codec's configured
//! scale, whatever scale the value had when it was encoded.
//!
//! ## Example
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use sql_decimal_codec::prelude::*;
//!
//! let codec = SqlDecimalCodec::new(18, 2).unwrap();
//!
//! let bytes = codec.encode(&Decimal::new(-12345, 2)).unwrap();
//! assert_eq!(bytes.len(), WIRE_LEN);
//! assert_eq!(bytes[0], SIGN_NEGATIVE);
//!
//! let value = codec.decode(&bytes).unwrap();
//! assert_eq!(value.to_string(), "-123.45");
//! ```

pub mod codec;
pub mod domain;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::codec::{SharedDecimalCodec, SqlDecimalCodec};
    pub use crate::domain::{DecimalConfig, WireRecord, SIGN_NEGATIVE, SIGN_POSITIVE, WIRE_LEN};
    pub use crate::interfaces::Serializer;
    pub use crate::numeric::{CodecError, CodecResult, ErrorKind, OutOfRange};
}
