//! Pure validate-and-report functions for caller-supplied input.
//!
//! Each validator returns either the parsed value or the full list of
//! field-level violations; callers surface the **first** violation to the
//! outside world. No I/O, no database dependencies.

pub mod auth;
pub mod track;

use crate::error::CoreError;

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Collapse a violation list into a validation error carrying the first
/// violation's message.
pub fn first_violation(violations: Vec<FieldViolation>) -> CoreError {
    let message = violations
        .into_iter()
        .next()
        .map(|v| v.message)
        .unwrap_or_else(|| "Invalid input".to_string());
    CoreError::Validation(message)
}
