//! Allocation error types.

use thiserror::Error;

/// Errors that can occur while running an allocation.
///
/// Every error is fatal to the run that produced it; no partial
/// allocation is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocError {
    /// Malformed or mismatched `rights` / `valuations` input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// `allocated + y` evaluated to zero while computing a priority.
    #[error("division by zero computing priority of player {player} (allocated {allocated})")]
    DivisionByZero { player: usize, allocated: usize },
}

pub type AllocResult<T> = Result<T, AllocError>;
