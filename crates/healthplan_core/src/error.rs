//! Error kinds reported by core operations.
//!
//! # Responsibility
//! - Report bad user input (`ValidationError`) separately from calls made in
//!   an invalid state (`PreconditionError`).
//!
//! # Invariants
//! - Every failing operation leaves its container unchanged.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CoreResult<T> = Result<T, CoreError>;

/// A required input field was empty (goal fields: blank after trimming).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the offending field (`name`, `icon`, `title`, `content`, `time`).
    pub field: &'static str,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} must not be empty", self.field)
    }
}

impl Error for ValidationError {}

/// An operation was invoked in a state that violates its precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreconditionError {
    NoGoalSelected,
    EmptyPlan,
}

impl Display for PreconditionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoGoalSelected => write!(f, "no goal selected"),
            Self::EmptyPlan => write!(f, "empty plan"),
        }
    }
}

impl Error for PreconditionError {}

/// Union error for service-level callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    Validation(ValidationError),
    Precondition(PreconditionError),
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "validation failed: {err}"),
            Self::Precondition(err) => write!(f, "precondition failed: {err}"),
        }
    }
}

impl Error for CoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Precondition(err) => Some(err),
        }
    }
}

impl From<ValidationError> for CoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<PreconditionError> for CoreError {
    fn from(value: PreconditionError) -> Self {
        Self::Precondition(value)
    }
}

/// Returns `value` unchanged, or a `ValidationError` naming `field` when empty.
///
/// Whitespace counts as content; plan items and reminders keep text as entered.
pub(crate) fn require_present<'a>(
    field: &'static str,
    value: &'a str,
) -> Result<&'a str, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError { field });
    }
    Ok(value)
}

/// Returns the trimmed value, or a `ValidationError` naming `field` when blank.
pub(crate) fn require_non_blank<'a>(
    field: &'static str,
    value: &'a str,
) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError { field });
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::{
        require_non_blank, require_present, CoreError, PreconditionError, ValidationError,
    };
    use std::error::Error;

    #[test]
    fn require_non_blank_trims_and_rejects_blank() {
        assert_eq!(require_non_blank("name", "  Yoga ").expect("non-blank"), "Yoga");
        assert_eq!(
            require_non_blank("name", " \t ").expect_err("blank must fail"),
            ValidationError { field: "name" }
        );
    }

    #[test]
    fn require_present_keeps_whitespace_and_rejects_empty() {
        assert_eq!(require_present("title", " Run ").expect("present"), " Run ");
        assert_eq!(require_present("title", " ").expect("present"), " ");
        assert_eq!(
            require_present("title", "").expect_err("empty must fail"),
            ValidationError { field: "title" }
        );
    }

    #[test]
    fn precondition_messages_are_stable() {
        assert_eq!(PreconditionError::NoGoalSelected.to_string(), "no goal selected");
        assert_eq!(PreconditionError::EmptyPlan.to_string(), "empty plan");
    }

    #[test]
    fn core_error_exposes_source() {
        let err = CoreError::from(PreconditionError::EmptyPlan);
        assert_eq!(err.to_string(), "precondition failed: empty plan");
        assert!(err.source().is_some());
    }
}
