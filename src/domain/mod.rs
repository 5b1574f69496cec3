// ============================================================================
// Domain Models Module
// Codec configuration and the wire record layout
// ============================================================================

pub mod config;
pub mod wire;

pub use config::{
    DecimalConfig, DEFAULT_PRECISION, DEFAULT_SCALE, MAX_PRECISION, MIN_PRECISION,
};
pub use wire::{WireRecord, SIGN_NEGATIVE, SIGN_POSITIVE, WIRE_LEN};
