/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports.
pub mod outbound;
