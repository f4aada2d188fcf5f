//! Shared error types for the application

use thiserror::Error;

/// Main error type for debtledger operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DebtError {
    /// Interest estimation referenced an id that was never registered
    #[error("Code area not found: {id}")]
    AreaNotFound { id: String },

    /// Initial debt must be finite and non-negative
    #[error("Invalid initial debt {value} for code area {id}")]
    InvalidDebt { id: String, value: f64 },

    /// Refactor cost must be finite and positive so the debt ratio stays defined
    #[error("Invalid refactor cost {value} for code area {id}")]
    InvalidRefactorCost { id: String, value: f64 },
}
