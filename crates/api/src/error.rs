// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::submission::SubmissionError;
use atp_trial::CoreError;
use atp_trial_domain::{DomainError, FieldViolation};

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The form is incomplete or malformed.
    ValidationFailed {
        /// Every violated constraint, in form order.
        messages: Vec<String>,
    },
    /// A submission is already running for this flow.
    SubmissionInProgress,
    /// The submission could not be delivered.
    SubmissionFailed {
        /// The message shown to the requester.
        message: String,
    },
}

impl ApiError {
    /// Builds a validation failure from field violations.
    #[must_use]
    pub fn validation_failed(violations: &[FieldViolation]) -> Self {
        Self::ValidationFailed {
            messages: violations.iter().map(ToString::to_string).collect(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::ValidationFailed { messages } => {
                write!(f, "Validation failed: {}", messages.join("; "))
            }
            Self::SubmissionInProgress => write!(f, "A submission is already in progress"),
            Self::SubmissionFailed { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<SubmissionError> for ApiError {
    fn from(err: SubmissionError) -> Self {
        Self::SubmissionFailed {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::DuplicateVenue(venue) => ApiError::DomainRuleViolation {
            rule: String::from("unique_venue"),
            message: format!("Venue '{venue}' is listed more than once"),
        },
        DomainError::DuplicateCourseCategory(category) => ApiError::DomainRuleViolation {
            rule: String::from("unique_course_category"),
            message: format!("Course category '{category}' is listed more than once"),
        },
        DomainError::UnknownOfferedCourseCategory {
            venue,
            course_category,
        } => ApiError::DomainRuleViolation {
            rule: String::from("known_offered_course_category"),
            message: format!("Venue '{venue}' offers unknown course category '{course_category}'"),
        },
        DomainError::ScheduleForUnknownVenue(venue) => ApiError::DomainRuleViolation {
            rule: String::from("schedule_for_known_venue"),
            message: format!("Schedule lists unknown venue '{venue}'"),
        },
        DomainError::ScheduleForUnofferedCourseCategory {
            venue,
            course_category,
        } => ApiError::DomainRuleViolation {
            rule: String::from("schedule_within_offer"),
            message: format!(
                "Venue '{venue}' schedules course category '{course_category}' it does not offer"
            ),
        },
        DomainError::InvalidWeekday(input) => ApiError::InvalidInput {
            field: String::from("weekday"),
            message: format!("'{input}' is not a weekday"),
        },
        DomainError::InvalidTimeRange { input, reason } => ApiError::InvalidInput {
            field: String::from("time_range"),
            message: format!("Invalid time range '{input}': {reason}"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Date arithmetic overflow while {operation}"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("birth_date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::SlotNotOffered {
            weekday,
            time_range,
        } => ApiError::InvalidInput {
            field: String::from("time_range"),
            message: format!("No class on {} at {time_range}", weekday.label()),
        },
        CoreError::IncompleteBooking(violations) => ApiError::validation_failed(&violations),
    }
}
