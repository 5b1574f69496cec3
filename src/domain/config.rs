// ============================================================================
// Decimal Codec Configuration
// Precision and scale bounds applied on encode and decode
// ============================================================================

use crate::numeric::{CodecResult, OutOfRange};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest allowed precision.
pub const MIN_PRECISION: u8 = 1;

/// Largest allowed precision.
pub const MAX_PRECISION: u8 = 38;

/// Precision used when none is configured.
pub const DEFAULT_PRECISION: u8 = 18;

/// Scale used when none is configured.
pub const DEFAULT_SCALE: u8 = 0;

// ============================================================================
// Decimal Configuration
// ============================================================================

/// Precision and scale of a decimal column.
///
/// - `precision`: total significant digits, `1..=38`
/// - `scale`: digits right of the decimal point, `0..=precision`
///
/// Every constructor and mutator validates the full pair, so a
/// `DecimalConfig` never holds a scale larger than its precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDecimalConfig"))]
pub struct DecimalConfig {
    precision: u8,
    scale: u8,
}

impl DecimalConfig {
    /// Create a validated configuration.
    ///
    /// # Errors
    /// Returns `OutOfRange` if precision is outside `1..=38` or scale exceeds
    /// precision.
    pub fn new(precision: u8, scale: u8) -> CodecResult<Self> {
        let config = Self { precision, scale };
        config.validate()?;
        Ok(config)
    }

    /// Total significant digits.
    #[inline]
    pub const fn precision(&self) -> u8 {
        self.precision
    }

    /// Digits right of the decimal point.
    #[inline]
    pub const fn scale(&self) -> u8 {
        self.scale
    }

    /// Builder method: set precision, keeping the current scale
    pub fn with_precision(self, precision: u8) -> CodecResult<Self> {
        Self::new(precision, self.scale)
    }

    /// Builder method: set scale, keeping the current precision
    pub fn with_scale(self, scale: u8) -> CodecResult<Self> {
        Self::new(self.precision, scale)
    }

    /// Replace the precision in place.
    ///
    /// The candidate pair is validated before anything is written; on error
    /// the configuration is unchanged.
    pub fn set_precision(&mut self, precision: u8) -> CodecResult<()> {
        *self = self.with_precision(precision)?;
        Ok(())
    }

    /// Replace the scale in place. On error the configuration is unchanged.
    pub fn set_scale(&mut self, scale: u8) -> CodecResult<()> {
        *self = self.with_scale(scale)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> CodecResult<()> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&self.precision) {
            return Err(OutOfRange::Precision {
                value: self.precision,
            }
            .into());
        }

        if self.scale > self.precision {
            return Err(OutOfRange::Scale {
                value: self.scale,
                precision: self.precision,
            }
            .into());
        }

        Ok(())
    }
}

impl Default for DecimalConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            scale: DEFAULT_SCALE,
        }
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl DecimalConfig {
    /// `money` column layout: precision 19, scale 4
    pub const fn money() -> Self {
        Self {
            precision: 19,
            scale: 4,
        }
    }

    /// `smallmoney` column layout: precision 10, scale 4
    pub const fn small_money() -> Self {
        Self {
            precision: 10,
            scale: 4,
        }
    }

    /// Widest integer column: precision 38, scale 0
    pub const fn max_precision() -> Self {
        Self {
            precision: MAX_PRECISION,
            scale: 0,
        }
    }
}

// ============================================================================
// Deserialization
// ============================================================================

/// Unchecked wire shape of [`DecimalConfig`]; deserialized values pass
/// through [`DecimalConfig::new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawDecimalConfig {
    #[serde(default = "default_precision")]
    precision: u8,
    #[serde(default)]
    scale: u8,
}

#[cfg(feature = "serde")]
fn default_precision() -> u8 {
    DEFAULT_PRECISION
}

#[cfg(feature = "serde")]
impl TryFrom<RawDecimalConfig> for DecimalConfig {
    type Error = crate::numeric::CodecError;

    fn try_from(raw: RawDecimalConfig) -> Result<Self, Self::Error> {
        DecimalConfig::new(raw.precision, raw.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::CodecError;
    use quickcheck::quickcheck;

    #[test]
    fn test_default_config() {
        let config = DecimalConfig::default();
        assert_eq!(config.precision(), 18);
        assert_eq!(config.scale(), 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_precision_bounds() {
        assert_eq!(
            DecimalConfig::new(0, 0),
            Err(CodecError::OutOfRange(OutOfRange::Precision { value: 0 }))
        );
        assert_eq!(
            DecimalConfig::new(39, 0),
            Err(CodecError::OutOfRange(OutOfRange::Precision { value: 39 }))
        );
        assert!(DecimalConfig::new(1, 0).is_ok());
        assert!(DecimalConfig::new(38, 0).is_ok());
    }

    #[test]
    fn test_scale_bounds() {
        let config = DecimalConfig::new(10, 10).unwrap();
        assert_eq!(config.scale(), 10);

        assert_eq!(
            DecimalConfig::new(10, 11),
            Err(CodecError::OutOfRange(OutOfRange::Scale {
                value: 11,
                precision: 10
            }))
        );
    }

    #[test]
    fn test_lowering_precision_below_scale_is_rejected() {
        let mut config = DecimalConfig::new(18, 6).unwrap();

        let result = config.set_precision(5);
        assert_eq!(
            result,
            Err(CodecError::OutOfRange(OutOfRange::Scale {
                value: 6,
                precision: 5
            }))
        );
        assert_eq!(config, DecimalConfig::new(18, 6).unwrap());

        config.set_precision(6).unwrap();
        assert_eq!(config.precision(), 6);
    }

    #[test]
    fn test_builder_pattern() {
        let config = DecimalConfig::default()
            .with_precision(30)
            .and_then(|c| c.with_scale(12))
            .unwrap();

        assert_eq!(config.precision(), 30);
        assert_eq!(config.scale(), 12);
    }

    #[test]
    fn test_preset_configs() {
        assert!(DecimalConfig::money().validate().is_ok());
        assert!(DecimalConfig::small_money().validate().is_ok());
        assert!(DecimalConfig::max_precision().validate().is_ok());
        assert_eq!(DecimalConfig::money().scale(), 4);
    }

    quickcheck! {
        fn prop_setters_never_break_invariant(ops: Vec<(bool, u8)>) -> bool {
            let mut config = DecimalConfig::default();
            for (is_precision, value) in ops {
                let before = config;
                let result = if is_precision {
                    config.set_precision(value)
                } else {
                    config.set_scale(value)
                };
                if result.is_err() && config != before {
                    return false;
                }
                if config.validate().is_err() {
                    return false;
                }
            }
            true
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let config = DecimalConfig::money();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"precision":19,"scale":4}"#);

        let back: DecimalConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);

        let defaulted: DecimalConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(defaulted, DecimalConfig::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_invalid_pair() {
        let result: Result<DecimalConfig, _> =
            serde_json::from_str(r#"{"precision":4,"scale":5}"#);
        assert!(result.is_err());

        let result: Result<DecimalConfig, _> = serde_json::from_str(r#"{"precision":39}"#);
        assert!(result.is_err());
    }
}
