// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{CourseCategoryId, VenueId};

/// Errors that can occur while building or querying reference data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A venue identifier appears more than once in the catalog.
    DuplicateVenue(VenueId),
    /// A course category identifier appears more than once in the catalog.
    DuplicateCourseCategory(CourseCategoryId),
    /// A venue offers a course category the catalog does not define.
    UnknownOfferedCourseCategory {
        /// The venue offering the category.
        venue: VenueId,
        /// The undefined category.
        course_category: CourseCategoryId,
    },
    /// The schedule map references a venue the catalog does not define.
    ScheduleForUnknownVenue(VenueId),
    /// The schedule map lists a category the venue does not offer.
    ScheduleForUnofferedCourseCategory {
        /// The venue whose schedule is inconsistent.
        venue: VenueId,
        /// The scheduled but unoffered category.
        course_category: CourseCategoryId,
    },
    /// A weekday label or identifier could not be recognized.
    InvalidWeekday(String),
    /// A time range could not be parsed or is not increasing.
    InvalidTimeRange {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateVenue(venue) => {
                write!(f, "Venue '{venue}' is defined more than once")
            }
            Self::DuplicateCourseCategory(category) => {
                write!(f, "Course category '{category}' is defined more than once")
            }
            Self::UnknownOfferedCourseCategory {
                venue,
                course_category,
            } => {
                write!(
                    f,
                    "Venue '{venue}' offers unknown course category '{course_category}'"
                )
            }
            Self::ScheduleForUnknownVenue(venue) => {
                write!(f, "Schedule references unknown venue '{venue}'")
            }
            Self::ScheduleForUnofferedCourseCategory {
                venue,
                course_category,
            } => {
                write!(
                    f,
                    "Venue '{venue}' schedules course category '{course_category}' without offering it"
                )
            }
            Self::InvalidWeekday(input) => write!(f, "Invalid weekday: '{input}'"),
            Self::InvalidTimeRange { input, reason } => {
                write!(f, "Invalid time range '{input}': {reason}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
