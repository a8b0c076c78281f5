//! Rich diagnostic error types for barge route validation.
//!
//! Operation-level failures are [`BargeError`]; whole-route failures are
//! [`RouteError`]. Each carries a miette error code and help text so the CLI
//! can tell the user exactly which operation broke the route and why.

use miette::Diagnostic;
use thiserror::Error;

use crate::compartment::CompartmentIndex;
use crate::fuel::FuelType;
use crate::integer::Integer;
use crate::params::ParamsError;

// ---------------------------------------------------------------------------
// Operation errors
// ---------------------------------------------------------------------------

/// Rejection of a single load/unload operation.
///
/// All variants except [`BargeError::CapacityExceeded`] guarantee that the
/// barge was left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum BargeError {
    #[error("line {line}: malformed command")]
    #[diagnostic(
        code(barge::op::malformed),
        help("An operation has exactly three fields: `<action> <compartment> <fuel_type>`, e.g. `+ 1 5`.")
    )]
    MalformedCommand { line: usize },

    #[error("line {line}: unknown action '{action}'")]
    #[diagnostic(
        code(barge::op::unknown_action),
        help("Use `+` to load a barrel or `-` to unload one.")
    )]
    UnknownAction { action: String, line: usize },

    #[error("line {line}: compartment number and fuel type must be integers")]
    #[diagnostic(
        code(barge::op::non_integer),
        help("Both operands are whole numbers. The fuel type may be negative.")
    )]
    NonIntegerOperands { line: usize },

    #[error("compartment number {index} is out of range")]
    #[diagnostic(
        code(barge::op::out_of_range),
        help("This barge has compartments 1 through {max}.")
    )]
    CompartmentOutOfRange { index: Integer, max: usize },

    #[error("compartment {index} is empty, no barrel to unload")]
    #[diagnostic(
        code(barge::op::empty_compartment),
        help("Load a barrel into compartment {index} before unloading from it.")
    )]
    EmptyCompartment { index: CompartmentIndex },

    #[error("expected fuel type {expected}, but compartment {index} has {actual} on top")]
    #[diagnostic(
        code(barge::op::fuel_mismatch),
        help(
            "Barrels are stacked: only the most recently loaded barrel of a \
             compartment can be unloaded. Unload fuel type {actual} first."
        )
    )]
    FuelMismatch {
        expected: FuelType,
        actual: FuelType,
        index: CompartmentIndex,
    },

    #[error("barge capacity of {capacity} barrels exceeded")]
    #[diagnostic(
        code(barge::op::capacity_exceeded),
        help(
            "{total} barrels are aboard after this load. The barrel was still \
             loaded and counts toward the peak."
        )
    )]
    CapacityExceeded { capacity: usize, total: usize },
}

impl BargeError {
    /// Whether the failed call still changed the barge.
    ///
    /// Only an overflowing load is applied despite failing.
    pub fn mutated(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }
}

/// Result alias for operations on a barge.
pub type BargeResult<T> = std::result::Result<T, BargeError>;

// ---------------------------------------------------------------------------
// Route errors
// ---------------------------------------------------------------------------

/// Failure of a whole route: the parameter line, an operation, or the
/// end-of-route checks.
#[derive(Debug, Error, Diagnostic)]
pub enum RouteError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Params(#[from] ParamsError),

    #[error("line {line}: operation rejected")]
    #[diagnostic(code(barge::route::rejected))]
    Rejected {
        line: usize,
        #[source]
        #[diagnostic_source]
        error: BargeError,
    },

    #[error("barge is not empty after the route: {remaining} barrel(s) still aboard")]
    #[diagnostic(
        code(barge::route::not_empty),
        help("Every loaded barrel has to be unloaded before the route ends.")
    )]
    RouteNotEmpty { remaining: usize },

    #[error("route ended after {received} of {expected} operations")]
    #[diagnostic(
        code(barge::route::incomplete),
        help("The parameter line announced {expected} operations. Supply the missing lines.")
    )]
    Incomplete { expected: usize, received: usize },

    #[error("route already holds all {expected} operations")]
    #[diagnostic(
        code(barge::route::overrun),
        help("The parameter line announced {expected} operations; extra lines are not accepted.")
    )]
    Overrun { expected: usize },

    #[error("route is halted by the error on line {line}")]
    #[diagnostic(
        code(barge::route::latched),
        help("Call `clear_error()` to retry the rejected line, or stop the route.")
    )]
    Latched { line: usize },

    #[error("failed to read route input: {source}")]
    #[diagnostic(
        code(barge::route::io),
        help("Check that the input file exists and is readable.")
    )]
    Io {
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for RouteError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}

/// Convenience alias for functions returning route results.
pub type RouteResult<T> = std::result::Result<T, RouteError>;
