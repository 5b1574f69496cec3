// ============================================================================
// Codec Errors
// Error types for decimal configuration, encoding and decoding
// ============================================================================

use std::fmt;

/// The bound that an out-of-range input violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutOfRange {
    /// Configured precision outside 1..=38
    Precision { value: u8 },
    /// Configured scale above the configured precision
    Scale { value: u8, precision: u8 },
    /// Value has more significant digits than the configured precision
    ValuePrecision { digits: u32, precision: u8 },
    /// Configured scale cannot be carried by the decoded decimal value
    DecodeScale { scale: u8 },
}

/// Broad category of a [`CodecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    OutOfRange,
    InvalidLength,
}

/// Errors raised by the decimal codec and its configuration.
///
/// All errors are input-validation failures: they are raised at the point of
/// violation and are never retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecError {
    /// A configuration value or an encoded value is outside its bound
    OutOfRange(OutOfRange),
    /// Decode input is absent (`None`) or not exactly one wire record long
    InvalidLength { actual: Option<usize> },
}

impl CodecError {
    /// Returns the category of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            CodecError::OutOfRange(_) => ErrorKind::OutOfRange,
            CodecError::InvalidLength { .. } => ErrorKind::InvalidLength,
        }
    }
}

impl From<OutOfRange> for CodecError {
    fn from(detail: OutOfRange) -> Self {
        CodecError::OutOfRange(detail)
    }
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutOfRange::Precision { value } => {
                write!(f, "precision {} is outside 1..=38", value)
            }
            OutOfRange::Scale { value, precision } => {
                write!(f, "scale {} exceeds precision {}", value, precision)
            }
            OutOfRange::ValuePrecision { digits, precision } => write!(
                f,
                "value out of range for configured precision: {} digits, precision {}",
                digits, precision
            ),
            OutOfRange::DecodeScale { scale } => {
                write!(f, "scale {} cannot be represented by the decoded value", scale)
            }
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::OutOfRange(detail) => write!(f, "out of range: {}", detail),
            CodecError::InvalidLength { actual: None } => {
                write!(f, "invalid length: no input buffer")
            }
            CodecError::InvalidLength {
                actual: Some(actual),
            } => write!(f, "invalid length: expected 17 bytes, got {}", actual),
        }
    }
}

impl std::error::Error for CodecError {}

/// Result type alias for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CodecError::InvalidLength { actual: Some(16) }.to_string(),
            "invalid length: expected 17 bytes, got 16"
        );
        assert_eq!(
            CodecError::InvalidLength { actual: None }.to_string(),
            "invalid length: no input buffer"
        );
        assert_eq!(
            CodecError::from(OutOfRange::Precision { value: 39 }).to_string(),
            "out of range: precision 39 is outside 1..=38"
        );
    }

    #[test]
    fn test_error_kind() {
        let err = CodecError::from(OutOfRange::ValuePrecision {
            digits: 20,
            precision: 18,
        });
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert!(err.to_string().contains("value out of range for configured precision"));

        let err = CodecError::InvalidLength { actual: None };
        assert_eq!(err.kind(), ErrorKind::InvalidLength);
    }
}
