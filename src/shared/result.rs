/// Type alias for Result with anyhow::Error as the error type.
/// Used by application and adapter plumbing; domain operations return
/// `ComparatorError` directly so callers can match on it.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
