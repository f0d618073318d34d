//! Parameter validation against the accepted input domain.
//!
//! Every rule is evaluated independently so the caller sees all
//! violations at once, in rule order. Validation never fails and has no
//! side effects.

use smallvec::SmallVec;

use crate::error::ValidationIssue;
use crate::params::SimulationParameters;

/// Upper bound on mass (kg).
pub const MAX_MASS: f64 = 1000.0;
/// Upper bound on height (m).
pub const MAX_HEIGHT: f64 = 1000.0;

/// Outcome of [`validate`]: the ordered list of violated rules.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationReport {
    errors: SmallVec<[ValidationIssue; 4]>,
}

impl ValidationReport {
    /// `true` when no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Violated rules, in evaluation order.
    pub fn errors(&self) -> &[ValidationIssue] {
        &self.errors
    }

    /// Human-readable messages, in evaluation order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// All messages joined with `", "`.
    pub fn joined(&self) -> String {
        self.messages().join(", ")
    }

    /// Convert into a `Result`, yielding the issues on failure.
    pub fn into_result(self) -> Result<(), Vec<ValidationIssue>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors.into_vec())
        }
    }
}

/// Check `params` against the mass and height rules.
///
/// NaN compares false against every bound, so a missing or NaN mass is
/// reported as not positive and a missing or NaN height as negative.
///
/// ```
/// use plummet_core::{validate, SimulationParameters, ValidationIssue};
///
/// let report = validate(&SimulationParameters::new(0.0, 5.0));
/// assert!(!report.is_valid());
/// assert_eq!(report.errors(), &[ValidationIssue::MassNotPositive]);
/// ```
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn validate(params: &SimulationParameters) -> ValidationReport {
    let mut errors = SmallVec::new();

    if !(params.mass > 0.0) {
        errors.push(ValidationIssue::MassNotPositive);
    }
    if params.mass > MAX_MASS {
        errors.push(ValidationIssue::MassTooLarge);
    }
    if !(params.height >= 0.0) {
        errors.push(ValidationIssue::HeightNegative);
    }
    if params.height > MAX_HEIGHT {
        errors.push(ValidationIssue::HeightTooLarge);
    }

    ValidationReport { errors }
}
