use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid rank: {0} (expected 1, 2, or 3)")]
    InvalidRank(i64),

    #[error("invalid points: {0} (expected 1, 2, or 3)")]
    InvalidPoints(i64),

    #[error("invalid calendar day: {0}")]
    InvalidDay(String),

    #[error("invalid client version: {0}")]
    InvalidVersion(String),

    #[error("invalid identifier: {0}")]
    InvalidId(String),
}
