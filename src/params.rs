//! The route header: `N K P` on the first input line.

use miette::Diagnostic;
use thiserror::Error;

use crate::config::RouteLimits;
use crate::integer::Integer;

/// Errors from parsing the parameter line.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParamsError {
    #[error("missing parameter line")]
    #[diagnostic(
        code(barge::params::missing),
        help("The input must start with a line `N K P`: operations, compartments, capacity.")
    )]
    Missing,

    #[error("expected three integers N K P, found {found} value(s)")]
    #[diagnostic(
        code(barge::params::arity),
        help("Write the operation count, compartment count and capacity separated by spaces, e.g. `4 1 2`.")
    )]
    WrongArity { found: usize },

    #[error("N, K and P must be integers, got '{token}'")]
    #[diagnostic(code(barge::params::not_integer))]
    NotInteger { token: String },

    #[error("{name} = {value} is out of range")]
    #[diagnostic(
        code(barge::params::out_of_range),
        help("{name} must be between 1 and {max}.")
    )]
    OutOfRange {
        name: &'static str,
        value: Integer,
        max: usize,
    },
}

pub type ParamsResult<T> = std::result::Result<T, ParamsError>;

/// Validated route dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteParams {
    /// `N`: number of operation lines that follow.
    pub operations: usize,
    /// `K`: number of compartments.
    pub compartments: usize,
    /// `P`: maximum barrels aboard at once.
    pub capacity: usize,
}

impl RouteParams {
    /// Parse and bound-check a parameter line.
    pub fn parse(text: &str, limits: &RouteLimits) -> ParamsResult<Self> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let [n, k, p] = tokens.as_slice() else {
            return Err(ParamsError::WrongArity {
                found: tokens.len(),
            });
        };

        let integer = |token: &str| {
            Integer::parse(token).ok_or_else(|| ParamsError::NotInteger {
                token: token.to_string(),
            })
        };
        let (n, k, p) = (integer(n)?, integer(k)?, integer(p)?);

        Ok(Self {
            operations: bounded("N", n, limits.max_operations)?,
            compartments: bounded("K", k, limits.max_compartments)?,
            capacity: bounded("P", p, limits.max_capacity)?,
        })
    }
}

impl std::fmt::Display for RouteParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.operations, self.compartments, self.capacity)
    }
}

fn bounded(name: &'static str, value: Integer, max: usize) -> ParamsResult<usize> {
    value
        .to_usize()
        .filter(|v| (1..=max).contains(v))
        .ok_or(ParamsError::OutOfRange { name, value, max })
}
