use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// Error from the database operations
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A month token that names no calendar month
    #[error("Invalid month '{0}': expected a token like Jul-2025 or 2025-07")]
    InvalidMonth(String),

    /// A running total left the representable decimal range
    #[error("Amount total is out of range")]
    Overflow,
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
