//! Field-level validation results.

use serde::Serialize;
use serde_json::json;

use super::Error;

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Wire (camelCase) name of the offending field.
    pub field: String,
    /// Human-readable explanation.
    pub message: String,
}

/// Every violation found while validating one payload.
///
/// # Examples
/// ```
/// use finapp::domain::ValidationErrors;
///
/// let mut errors = ValidationErrors::default();
/// errors.require_non_empty("name", "  ");
/// errors.require_non_empty("surname", "Diaz");
/// assert_eq!(errors.violations().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    /// Record a violation.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldViolation {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Record a violation when `value` is blank.
    pub fn require_non_empty(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, format!("{field} is required"));
        }
    }

    /// Recorded violations in check order.
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    /// Whether every check passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(())` when no violations were recorded.
    ///
    /// # Errors
    /// Returns `self` when at least one violation was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<ValidationErrors> for Error {
    fn from(value: ValidationErrors) -> Self {
        Self::invalid_request("validation failed")
            .with_details(json!({ "fields": value.violations() }))
    }
}
