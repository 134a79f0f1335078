// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use atp_trial_domain::{DomainError, FieldViolation, TimeRange, Weekday};

/// Errors that can occur during booking flow transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The requested slot is not part of the currently resolved slot list.
    SlotNotOffered {
        /// The requested weekday.
        weekday: Weekday,
        /// The requested time range.
        time_range: TimeRange,
    },
    /// The booking cannot be turned into a request yet.
    IncompleteBooking(Vec<FieldViolation>),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::SlotNotOffered {
                weekday,
                time_range,
            } => {
                write!(f, "Slot {weekday} {time_range} is not offered for this selection")
            }
            Self::IncompleteBooking(violations) => {
                let messages: Vec<String> = violations.iter().map(ToString::to_string).collect();
                write!(f, "Incomplete booking: {}", messages.join("; "))
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
