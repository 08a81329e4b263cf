/// Type alias for Result with anyhow::Error as the error type.
/// All layers return this so `?` composes across ports and adapters.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
