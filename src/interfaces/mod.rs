// ============================================================================
// Interfaces Module
// Contains the serializer contract
// ============================================================================

mod serializer;

pub use serializer::Serializer;
