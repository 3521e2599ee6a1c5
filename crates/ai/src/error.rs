use thiserror::Error;

/// Errors raised when configuring the engine.
///
/// Running the engine itself never fails: missing data degrades to neutral
/// defaults instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),
}
