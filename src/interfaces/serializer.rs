// ============================================================================
// Serializer Interface
// Defines the contract a value codec exposes to a serializer registry
// ============================================================================

use crate::numeric::CodecResult;

/// A codec that turns values of type `T` into bytes and back.
///
/// A registry dispatches on [`identifier`](Serializer::identifier); the codec
/// itself only provides the two conversions. Errors are returned unchanged
/// to the caller.
pub trait Serializer<T>: Send + Sync {
    /// Stable type token used for registry lookup (e.g. `"SQL_Decimal"`)
    fn identifier(&self) -> &'static str;

    /// Encode a value into its wire bytes
    fn encode(&self, value: &T) -> CodecResult<Vec<u8>>;

    /// Decode a value from its wire bytes
    fn decode(&self, bytes: &[u8]) -> CodecResult<T>;
}
