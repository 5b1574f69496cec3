// ============================================================================
// SQL Decimal Codec
// Bit-exact 17-byte encoding of fixed-point decimal column values
// ============================================================================

use crate::domain::{DecimalConfig, WireRecord, WIRE_LEN};
use crate::interfaces::Serializer;
use crate::numeric::{
    magnitude_of, natural_precision, split_words, CodecError, CodecResult, OutOfRange,
    MAX_DECIMAL_SCALE,
};
use rust_decimal::Decimal;

/// Codec for `decimal(precision, scale)` column values.
///
/// `encode` checks the value's digit count against the configured precision
/// and writes sign plus 96-bit magnitude. The decimal point position is not
/// written: `decode` applies the codec's *current* scale to whatever
/// magnitude it reads. Encoding `1.23` and decoding with scale 0 therefore
/// yields `123`.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use sql_decimal_codec::prelude::*;
///
/// let codec = SqlDecimalCodec::new(18, 2).unwrap();
/// let bytes = codec.encode(&Decimal::new(12345, 2)).unwrap();
/// assert_eq!(bytes[0], SIGN_POSITIVE);
/// assert_eq!(codec.decode(&bytes).unwrap(), Decimal::new(12345, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SqlDecimalCodec {
    config: DecimalConfig,
}

impl SqlDecimalCodec {
    /// Registry token for this codec.
    pub const IDENTIFIER: &'static str = "SQL_Decimal";

    /// Create a codec for `decimal(precision, scale)`.
    ///
    /// # Errors
    /// Returns `OutOfRange` if precision is outside `1..=38` or scale exceeds
    /// precision.
    pub fn new(precision: u8, scale: u8) -> CodecResult<Self> {
        DecimalConfig::new(precision, scale).map(Self::with_config)
    }

    /// Create a codec from an already validated configuration.
    pub const fn with_config(config: DecimalConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub const fn config(&self) -> DecimalConfig {
        self.config
    }

    #[inline]
    pub const fn precision(&self) -> u8 {
        self.config.precision()
    }

    #[inline]
    pub const fn scale(&self) -> u8 {
        self.config.scale()
    }

    /// Change the precision. Rejected if outside `1..=38` or below the
    /// current scale; a rejected change leaves the codec untouched.
    pub fn set_precision(&mut self, precision: u8) -> CodecResult<()> {
        self.config.set_precision(precision).inspect_err(|err| {
            tracing::warn!(precision, %err, "rejected decimal precision");
        })?;
        tracing::debug!(precision, scale = self.scale(), "decimal codec reconfigured");
        Ok(())
    }

    /// Change the scale. Rejected if above the current precision; a rejected
    /// change leaves the codec untouched.
    pub fn set_scale(&mut self, scale: u8) -> CodecResult<()> {
        self.config.set_scale(scale).inspect_err(|err| {
            tracing::warn!(scale, %err, "rejected decimal scale");
        })?;
        tracing::debug!(precision = self.precision(), scale, "decimal codec reconfigured");
        Ok(())
    }

    // ========================================================================
    // Encoding
    // ========================================================================

    /// Build the wire record for `value` without serializing it.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `value` has more significant digits than the
    /// configured precision.
    pub fn encode_record(&self, value: &Decimal) -> CodecResult<WireRecord> {
        let digits = natural_precision(value);
        if digits > u32::from(self.precision()) {
            tracing::warn!(
                %value,
                digits,
                precision = self.precision(),
                "decimal value exceeds configured precision"
            );
            return Err(OutOfRange::ValuePrecision {
                digits,
                precision: self.precision(),
            }
            .into());
        }

        let magnitude = magnitude_of(value);
        // Zero is always written non-negative.
        let negative = value.is_sign_negative() && magnitude != 0;

        Ok(WireRecord::new(negative, split_words(magnitude)))
    }

    /// Encode `value` into a fresh 17-byte record.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `value` has more significant digits than the
    /// configured precision.
    pub fn encode(&self, value: &Decimal) -> CodecResult<[u8; WIRE_LEN]> {
        let bytes = self.encode_record(value)?.to_bytes();
        tracing::trace!(%value, "encoded decimal");
        Ok(bytes)
    }

    /// Encode `value` into `buf`. On error `buf` is left untouched.
    pub fn encode_into(&self, value: &Decimal, buf: &mut [u8; WIRE_LEN]) -> CodecResult<()> {
        self.encode_record(value)?.write_to(buf);
        Ok(())
    }

    // ========================================================================
    // Decoding
    // ========================================================================

    /// Rebuild a decimal from a wire record using the configured scale.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the configured scale is above 28, which a
    /// [`Decimal`] cannot carry.
    pub fn decode_record(&self, record: &WireRecord) -> CodecResult<Decimal> {
        let scale = self.scale();
        if u32::from(scale) > MAX_DECIMAL_SCALE {
            tracing::warn!(scale, "configured scale exceeds decimal value range");
            return Err(OutOfRange::DecodeScale { scale }.into());
        }

        let [low, middle, high] = record.words();
        let negative = record.is_negative() && record.magnitude() != 0;
        Ok(Decimal::from_parts(
            low,
            middle,
            high,
            negative,
            u32::from(scale),
        ))
    }

    /// Decode a 17-byte record.
    ///
    /// The sign byte `0` marks a negative value; any other byte is
    /// non-negative. The stored magnitude is not checked against the
    /// configured precision.
    ///
    /// # Errors
    /// - `InvalidLength` unless `bytes` is exactly 17 bytes long
    /// - `OutOfRange` if the configured scale is above 28
    pub fn decode(&self, bytes: &[u8]) -> CodecResult<Decimal> {
        let record = WireRecord::from_bytes(bytes).inspect_err(|err| {
            tracing::warn!(%err, "rejected decimal wire record");
        })?;
        let value = self.decode_record(&record)?;
        tracing::trace!(%value, "decoded decimal");
        Ok(value)
    }

    /// Decode a buffer that may be absent. `None` fails with `InvalidLength`.
    pub fn decode_optional(&self, bytes: Option<&[u8]>) -> CodecResult<Decimal> {
        match bytes {
            Some(bytes) => self.decode(bytes),
            None => {
                tracing::warn!("missing decimal wire record");
                Err(CodecError::InvalidLength { actual: None })
            }
        }
    }
}

impl Serializer<Decimal> for SqlDecimalCodec {
    fn identifier(&self) -> &'static str {
        Self::IDENTIFIER
    }

    fn encode(&self, value: &Decimal) -> CodecResult<Vec<u8>> {
        SqlDecimalCodec::encode(self, value).map(Vec::from)
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<Decimal> {
        SqlDecimalCodec::decode(self, bytes)
    }
}
