//! Domain errors shared by every consumer of the core

use thiserror::Error;

/// Errors raised by the catalog, generator, metrics and session gate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgrometError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0} not found")]
    NotFound(String),

    /// Percentage deviation against a zero baseline
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Not logged in")]
    Unauthorized,
}

pub type AgrometResult<T> = Result<T, AgrometError>;
