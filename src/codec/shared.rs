// ============================================================================
// Shared Decimal Codec
// Many concurrent readers, one writer for reconfiguration
// ============================================================================

use super::SqlDecimalCodec;
use crate::domain::{DecimalConfig, WIRE_LEN};
use crate::interfaces::Serializer;
use crate::numeric::CodecResult;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::sync::Arc;

/// A [`SqlDecimalCodec`] that can be reconfigured while other threads use it.
///
/// `encode`/`decode` hold a read lock for the duration of the call, so a
/// configuration change never lands halfway through one. Clones share the
/// same codec.
#[derive(Debug, Clone, Default)]
pub struct SharedDecimalCodec {
    inner: Arc<RwLock<SqlDecimalCodec>>,
}

impl SharedDecimalCodec {
    pub fn new(codec: SqlDecimalCodec) -> Self {
        Self {
            inner: Arc::new(RwLock::new(codec)),
        }
    }

    /// Copy of the codec as currently configured.
    pub fn snapshot(&self) -> SqlDecimalCodec {
        *self.inner.read()
    }

    pub fn config(&self) -> DecimalConfig {
        self.inner.read().config()
    }

    pub fn set_precision(&self, precision: u8) -> CodecResult<()> {
        self.inner.write().set_precision(precision)
    }

    pub fn set_scale(&self, scale: u8) -> CodecResult<()> {
        self.inner.write().set_scale(scale)
    }

    /// Replace precision and scale together.
    ///
    /// Going from `(18, 6)` to `(4, 2)` with the setters only works if the
    /// scale is lowered first. This swaps the whole validated pair under one
    /// write lock.
    pub fn reconfigure(&self, config: DecimalConfig) {
        let mut codec = self.inner.write();
        *codec = SqlDecimalCodec::with_config(config);
        tracing::debug!(
            precision = config.precision(),
            scale = config.scale(),
            "shared decimal codec reconfigured"
        );
    }

    pub fn encode(&self, value: &Decimal) -> CodecResult<[u8; WIRE_LEN]> {
        self.inner.read().encode(value)
    }

    pub fn decode(&self, bytes: &[u8]) -> CodecResult<Decimal> {
        self.inner.read().decode(bytes)
    }
}

impl From<SqlDecimalCodec> for SharedDecimalCodec {
    fn from(codec: SqlDecimalCodec) -> Self {
        Self::new(codec)
    }
}

impl Serializer<Decimal> for SharedDecimalCodec {
    fn identifier(&self) -> &'static str {
        SqlDecimalCodec::IDENTIFIER
    }

    fn encode(&self, value: &Decimal) -> CodecResult<Vec<u8>> {
        SharedDecimalCodec::encode(self, value).map(Vec::from)
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<Decimal> {
        SharedDecimalCodec::decode(self, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_configuration() {
        let shared = SharedDecimalCodec::new(SqlDecimalCodec::new(18, 2).unwrap());
        let other = shared.clone();

        other.set_scale(0).unwrap();
        assert_eq!(shared.config().scale(), 0);

        let bytes = shared.encode(&Decimal::new(123, 2)).unwrap();
        assert_eq!(other.decode(&bytes).unwrap(), Decimal::from(123));
    }

    #[test]
    fn test_rejected_change_keeps_configuration() {
        let shared = SharedDecimalCodec::new(SqlDecimalCodec::new(18, 6).unwrap());
        assert!(shared.set_precision(4).is_err());
        assert_eq!(shared.config(), DecimalConfig::new(18, 6).unwrap());
    }

    #[test]
    fn test_reconfigure_swaps_pair() {
        let shared = SharedDecimalCodec::new(SqlDecimalCodec::new(18, 6).unwrap());
        assert!(shared.set_precision(4).is_err());

        shared.reconfigure(DecimalConfig::new(4, 2).unwrap());
        assert_eq!(shared.snapshot(), SqlDecimalCodec::new(4, 2).unwrap());
    }

    #[test]
    fn test_concurrent_encode_matches_single_threaded() {
        let shared: SharedDecimalCodec = SqlDecimalCodec::new(28, 4).unwrap().into();
        let values: Vec<Decimal> = (0..64i64)
            .map(|i| Decimal::new(i * 1_000_003 - 31_000_000, 4))
            .collect();
        let expected: Vec<[u8; WIRE_LEN]> = values
            .iter()
            .map(|v| shared.encode(v).unwrap())
            .collect();

        crossbeam::scope(|s| {
            for _ in 0..4 {
                let shared = shared.clone();
                let values = &values;
                let expected = &expected;
                s.spawn(move |_| {
                    for (value, bytes) in values.iter().zip(expected) {
                        assert_eq!(&shared.encode(value).unwrap(), bytes);
                        assert_eq!(shared.decode(bytes).unwrap(), *value);
                    }
                });
            }
        })
        .unwrap();
    }
}
