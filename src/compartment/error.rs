//! Compartment-specific error types with rich diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Errors arising from compartment stack operations.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CompartmentError {
    #[error("compartment stack is empty")]
    #[diagnostic(
        code(barge::compartment::empty_stack),
        help(
            "There is no barrel to take or inspect. \
             Check `is_empty()` before calling `pop()` or `peek()`."
        )
    )]
    EmptyStack,
}

/// Result type for compartment operations.
pub type CompartmentResult<T> = Result<T, CompartmentError>;
