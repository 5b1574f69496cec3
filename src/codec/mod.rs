// ============================================================================
// Codec Module
// Decimal encode/decode against the 17-byte wire record
// ============================================================================

mod shared;
mod sql_decimal;

pub use shared::SharedDecimalCodec;
pub use sql_decimal::SqlDecimalCodec;
