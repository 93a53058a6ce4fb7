use thiserror::Error;

/// Integration mistakes, as opposed to bad user input.
///
/// User input never produces an `Err`: out-of-range or malformed values resolve
/// to [`Verdict::Invalid`](crate::Verdict::Invalid). A `ConfigError` means the
/// caller wired a field up wrong (a missing constraint attribute, a nonsense
/// sanity ceiling) and must stop rather than degrade silently.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A constraint attribute the validator requires was not supplied.
    #[error("missing required field constraint `{0}`")]
    MissingConstraint(&'static str),

    /// The sanity ceiling for a bounded integer field must be positive.
    #[error("sanity ceiling must be a positive integer, got {0}")]
    BadCeiling(i64),

    /// The declared length window is inverted.
    #[error("minlength {min} exceeds maxlength {max}")]
    InvertedWindow { min: usize, max: usize },
}
