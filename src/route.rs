//! Whole-route validation.
//!
//! A route is a parameter line `N K P` followed by `N` operation lines. The
//! [`RouteValidator`] feeds the lines to a [`Barge`] one at a time and latches
//! the first rejection: while an error is latched no further lines are
//! accepted, until the caller either gives up or calls
//! [`RouteValidator::clear_error`] and resubmits a corrected line under the
//! same line number.
//!
//! A route succeeds when all `N` operations were accepted and the barge is
//! empty at the end.

use std::io::BufRead;

use crate::barge::Barge;
use crate::config::RouteLimits;
use crate::error::{BargeError, RouteError, RouteResult};
use crate::params::{ParamsError, RouteParams};

/// Outcome of a route that passed every check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteReport {
    /// Number of operations applied.
    pub operations: usize,
    /// Peak number of barrels aboard at once.
    pub max_barrels: usize,
}

impl std::fmt::Display for RouteReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Route completed without errors. Peak barrels aboard: {}",
            self.max_barrels
        )
    }
}

/// First rejection of the route, held until cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Latched {
    line: usize,
    error: BargeError,
}

/// Drives a barge through a route, one operation line at a time.
#[derive(Debug, Clone)]
pub struct RouteValidator {
    params: RouteParams,
    barge: Barge,
    accepted: usize,
    latched: Option<Latched>,
}

impl RouteValidator {
    /// Start a route on a fresh barge sized by `params`.
    pub fn new(params: RouteParams) -> Self {
        Self {
            params,
            barge: Barge::new(params.compartments, params.capacity),
            accepted: 0,
            latched: None,
        }
    }

    /// Validate a complete route given its parameters and operation lines.
    ///
    /// Stops at the first rejected line. Lines beyond the announced `N` are
    /// ignored.
    pub fn run<I, S>(params: RouteParams, lines: I) -> RouteResult<RouteReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut validator = Self::new(params);
        for line in lines.into_iter().take(params.operations) {
            validator.submit(line.as_ref())?;
        }
        validator.finish()
    }

    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    pub fn barge(&self) -> &Barge {
        &self.barge
    }

    /// Number of operation lines accepted so far.
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// The 1-based number the next submitted line will carry.
    pub fn next_line(&self) -> usize {
        self.accepted + 1
    }

    /// Whether all `N` operations have been accepted.
    pub fn is_complete(&self) -> bool {
        self.accepted == self.params.operations
    }

    /// The latched error and the line it was raised on, if any.
    pub fn error(&self) -> Option<(usize, &BargeError)> {
        self.latched.as_ref().map(|l| (l.line, &l.error))
    }

    pub fn is_errored(&self) -> bool {
        self.latched.is_some()
    }

    /// Drop the latched error so the rejected line can be resubmitted.
    ///
    /// Returns the cleared error. A cleared `CapacityExceeded` does not undo
    /// its load: the barrel stays aboard.
    pub fn clear_error(&mut self) -> Option<BargeError> {
        let latched = self.latched.take()?;
        tracing::debug!(line = latched.line, "cleared latched route error");
        Some(latched.error)
    }

    /// Apply the next operation line.
    ///
    /// The line counter only advances when the operation is accepted.
    pub fn submit(&mut self, text: &str) -> RouteResult<()> {
        if let Some(latched) = &self.latched {
            return Err(RouteError::Latched { line: latched.line });
        }
        if self.is_complete() {
            return Err(RouteError::Overrun {
                expected: self.params.operations,
            });
        }

        let line = self.next_line();
        match self.barge.process(text, line) {
            Ok(()) => {
                self.accepted += 1;
                Ok(())
            }
            Err(error) => {
                tracing::warn!(line, %error, "route operation rejected");
                self.latched = Some(Latched {
                    line,
                    error: error.clone(),
                });
                Err(RouteError::Rejected { line, error })
            }
        }
    }

    /// Run the end-of-route checks.
    ///
    /// Reports, in order: the latched error, missing operations, barrels left
    /// aboard. Otherwise returns the peak occupancy.
    pub fn finish(&self) -> RouteResult<RouteReport> {
        if let Some(latched) = &self.latched {
            return Err(RouteError::Rejected {
                line: latched.line,
                error: latched.error.clone(),
            });
        }
        if !self.is_complete() {
            return Err(RouteError::Incomplete {
                expected: self.params.operations,
                received: self.accepted,
            });
        }
        if !self.barge.is_empty() {
            let remaining = self.barge.total_barrels();
            tracing::warn!(remaining, "route ended with barrels aboard");
            return Err(RouteError::RouteNotEmpty { remaining });
        }

        let report = RouteReport {
            operations: self.accepted,
            max_barrels: self.barge.max_barrels(),
        };
        tracing::info!(
            operations = report.operations,
            peak = report.max_barrels,
            "route validated"
        );
        Ok(report)
    }
}

/// Read a whole route from `reader` and validate it.
///
/// The first line is the `N K P` header, bounded by `limits`. All `N`
/// operation lines are read before any is applied, so a short route is
/// reported as [`RouteError::Incomplete`] ahead of any operation error.
/// Anything after the `N`th line is ignored.
pub fn validate_route<R: BufRead>(reader: R, limits: &RouteLimits) -> RouteResult<RouteReport> {
    let mut lines = reader.lines();
    let header = lines.next().transpose()?.ok_or(ParamsError::Missing)?;
    let params = RouteParams::parse(&header, limits)?;
    tracing::debug!(%params, "route parameters");

    let operations = lines
        .take(params.operations)
        .collect::<Result<Vec<_>, _>>()?;
    if operations.len() < params.operations {
        tracing::warn!(
            expected = params.operations,
            received = operations.len(),
            "route input ended early"
        );
        return Err(RouteError::Incomplete {
            expected: params.operations,
            received: operations.len(),
        });
    }

    let mut validator = RouteValidator::new(params);
    for line in &operations {
        validator.submit(line)?;
    }
    validator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(n: usize, k: usize, p: usize) -> RouteParams {
        RouteParams {
            operations: n,
            compartments: k,
            capacity: p,
        }
    }

    #[test]
    fn run_reports_peak() {
        let report =
            RouteValidator::run(params(4, 1, 2), ["+ 1 5", "+ 1 5", "- 1 5", "- 1 5"]).unwrap();
        assert_eq!(
            report,
            RouteReport {
                operations: 4,
                max_barrels: 2
            }
        );
        assert_eq!(
            report.to_string(),
            "Route completed without errors. Peak barrels aboard: 2"
        );
    }

    #[test]
    fn barrels_left_aboard_is_not_empty() {
        let err = RouteValidator::run(params(1, 1, 5), ["+ 1 3"]).unwrap_err();
        assert!(matches!(err, RouteError::RouteNotEmpty { remaining: 1 }));
    }

    #[test]
    fn too_few_lines_is_incomplete() {
        let err = RouteValidator::run(params(3, 1, 5), ["+ 1 3", "- 1 3"]).unwrap_err();
        assert!(matches!(
            err,
            RouteError::Incomplete {
                expected: 3,
                received: 2
            }
        ));
    }

    #[test]
    fn extra_lines_are_ignored_by_run() {
        let report = RouteValidator::run(params(2, 1, 5), ["+ 1 3", "- 1 3", "garbage"]).unwrap();
        assert_eq!(report.operations, 2);
    }

    #[test]
    fn submit_after_complete_is_overrun() {
        let mut v = RouteValidator::new(params(1, 1, 1));
        v.submit("+ 1 1").unwrap();
        assert!(matches!(
            v.submit("- 1 1"),
            Err(RouteError::Overrun { expected: 1 })
        ));
    }

    #[test]
    fn first_error_is_latched() {
        let mut v = RouteValidator::new(params(3, 2, 5));
        v.submit("+ 1 3").unwrap();
        let err = v.submit("- 1 7").unwrap_err();
        assert!(matches!(
            err,
            RouteError::Rejected {
                line: 2,
                error: BargeError::FuelMismatch { .. }
            }
        ));
        assert!(v.is_errored());
        assert_eq!(v.error().map(|(line, _)| line), Some(2));

        // Further lines are refused while the error is latched.
        assert!(matches!(
            v.submit("- 1 3"),
            Err(RouteError::Latched { line: 2 })
        ));
        assert!(matches!(
            v.finish(),
            Err(RouteError::Rejected {
                line: 2,
                error: BargeError::FuelMismatch { .. }
            })
        ));
    }

    #[test]
    fn clear_error_allows_retry_of_same_line() {
        let mut v = RouteValidator::new(params(2, 1, 5));
        v.submit("+ 1 3").unwrap();
        assert!(v.submit("- 1 4").is_err());
        assert_eq!(v.next_line(), 2);

        let cleared = v.clear_error().unwrap();
        assert!(matches!(cleared, BargeError::FuelMismatch { .. }));
        assert!(!v.is_errored());
        assert!(v.clear_error().is_none());

        v.submit("- 1 3").unwrap();
        let report = v.finish().unwrap();
        assert_eq!(report.max_barrels, 1);
    }

    #[test]
    fn cleared_overflow_keeps_its_barrel() {
        let mut v = RouteValidator::new(params(3, 1, 1));
        v.submit("+ 1 1").unwrap();
        assert!(matches!(
            v.submit("+ 1 2"),
            Err(RouteError::Rejected {
                line: 2,
                error: BargeError::CapacityExceeded { .. }
            })
        ));
        v.clear_error();
        assert_eq!(v.barge().total_barrels(), 2);
        assert_eq!(v.barge().max_barrels(), 2);
        assert_eq!(v.next_line(), 2);
    }

    #[test]
    fn validate_route_reads_header_and_operations() {
        let input = "4 1 2\n+ 1 5\n+ 1 5\n- 1 5\n- 1 5\n";
        let report = validate_route(input.as_bytes(), &RouteLimits::default()).unwrap();
        assert_eq!(report.max_barrels, 2);
    }

    #[test]
    fn validate_route_reports_rejected_line() {
        let input = "2 2 5\n+ 1 3\n- 1 7\n";
        let err = validate_route(input.as_bytes(), &RouteLimits::default()).unwrap_err();
        assert!(matches!(
            err,
            RouteError::Rejected {
                line: 2,
                error: BargeError::FuelMismatch { .. }
            }
        ));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn validate_route_short_input_is_incomplete_before_any_operation() {
        // The only line present would be rejected, but the missing lines win.
        let input = "3 1 5\n- 1 1\n";
        let err = validate_route(input.as_bytes(), &RouteLimits::default()).unwrap_err();
        assert!(matches!(
            err,
            RouteError::Incomplete {
                expected: 3,
                received: 1
            }
        ));
    }

    #[test]
    fn validate_route_empty_input_is_missing_params() {
        let err = validate_route("".as_bytes(), &RouteLimits::default()).unwrap_err();
        assert!(matches!(err, RouteError::Params(ParamsError::Missing)));
    }

    #[test]
    fn validate_route_bad_header() {
        let err = validate_route("0 1 1\n".as_bytes(), &RouteLimits::default()).unwrap_err();
        assert!(matches!(
            err,
            RouteError::Params(ParamsError::OutOfRange { name: "N", .. })
        ));
    }
}
