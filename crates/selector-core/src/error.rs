use thiserror::Error;

/// Raised when a presentation hint is given in its string form and does not
/// name a known value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown orientation `{0}`")]
    UnknownOrientation(String),
    #[error("unknown animation type `{0}`")]
    UnknownAnimation(String),
    #[error("unknown keyboard tap persistence `{0}` (expected always, never or handled)")]
    UnknownPersistTaps(String),
}
