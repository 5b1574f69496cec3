// ============================================================================
// Decimal Magnitude
// 96-bit unsigned magnitude split into three 32-bit words
// ============================================================================

use rust_decimal::Decimal;

/// Largest fractional-digit count a [`Decimal`] can carry.
pub const MAX_DECIMAL_SCALE: u32 = 28;

/// Largest magnitude that fits in three 32-bit words (2^96 - 1).
pub const MAX_MAGNITUDE: u128 = (1u128 << 96) - 1;

/// Magnitude words in wire order: `[low, middle, high]`.
pub type MagnitudeWords = [u32; 3];

/// Split a magnitude into `[low, middle, high]`.
///
/// Bits above 96 are discarded; callers pass magnitudes taken from a
/// [`Decimal`], which never exceed [`MAX_MAGNITUDE`].
#[inline]
pub const fn split_words(magnitude: u128) -> MagnitudeWords {
    [
        magnitude as u32,
        (magnitude >> 32) as u32,
        (magnitude >> 64) as u32,
    ]
}

/// Join `[low, middle, high]` back into a magnitude.
#[inline]
pub const fn join_words(words: MagnitudeWords) -> u128 {
    (words[0] as u128) | ((words[1] as u128) << 32) | ((words[2] as u128) << 64)
}

/// Number of decimal digits in `magnitude`; zero has one digit.
#[inline]
pub fn digit_count(magnitude: u128) -> u32 {
    magnitude.checked_ilog10().map_or(1, |log| log + 1)
}

/// Unsigned 96-bit magnitude of a decimal, ignoring its sign and scale.
#[inline]
pub fn magnitude_of(value: &Decimal) -> u128 {
    value.mantissa().unsigned_abs()
}

/// Total significant digits of `value`.
///
/// This is the digit count of the mantissa, raised to the value's scale when
/// the scale is larger (`0.01` needs two digits of precision).
pub fn natural_precision(value: &Decimal) -> u32 {
    digit_count(magnitude_of(value)).max(value.scale())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_and_join() {
        assert_eq!(split_words(12345), [12345, 0, 0]);
        assert_eq!(split_words(1u128 << 32), [0, 1, 0]);
        assert_eq!(split_words(1u128 << 64), [0, 0, 1]);
        assert_eq!(split_words(MAX_MAGNITUDE), [u32::MAX; 3]);

        assert_eq!(join_words([u32::MAX; 3]), MAX_MAGNITUDE);
        assert_eq!(join_words([7, 0, 1]), (1u128 << 64) + 7);
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(12345), 5);
        // 79228162514264337593543950335
        assert_eq!(digit_count(MAX_MAGNITUDE), 29);
    }

    #[test]
    fn test_natural_precision() {
        assert_eq!(natural_precision(&Decimal::new(12345, 2)), 5);
        assert_eq!(natural_precision(&Decimal::new(-1, 0)), 1);
        assert_eq!(natural_precision(&Decimal::new(1, 2)), 2);
        assert_eq!(natural_precision(&Decimal::ZERO), 1);
        assert_eq!(natural_precision(&Decimal::new(0, 4)), 4);
        assert_eq!(natural_precision(&Decimal::MAX), 29);
    }

    #[test]
    fn test_magnitude_ignores_sign() {
        assert_eq!(magnitude_of(&Decimal::new(-12345, 2)), 12345);
        assert_eq!(magnitude_of(&Decimal::MIN), MAX_MAGNITUDE);
    }
}
