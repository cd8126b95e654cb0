/// Type alias for Result with anyhow::Error as the error type.
/// Used by the application and adapter layers; the `outcome` core never returns it.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
