// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::weekday::Weekday;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Time};

/// Identifies a training venue (a club location).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VenueId(String);

impl VenueId {
    /// Creates a new venue identifier.
    ///
    /// Surrounding whitespace is removed.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(id.trim().to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VenueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies an age/level course category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseCategoryId(String);

impl CourseCategoryId {
    /// Creates a new course category identifier.
    ///
    /// Surrounding whitespace is removed.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(id.trim().to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CourseCategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An age/level bracket of class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCategory {
    /// The category identifier.
    pub id: CourseCategoryId,
    /// The name shown to visitors (e.g. "Adolescents").
    pub display_name: String,
    /// The age bracket shown next to the name (e.g. "10-17 ans").
    pub age_range: String,
}

impl CourseCategory {
    /// Creates a new course category.
    #[must_use]
    pub fn new(id: &str, display_name: &str, age_range: &str) -> Self {
        Self {
            id: CourseCategoryId::new(id),
            display_name: display_name.to_string(),
            age_range: age_range.to_string(),
        }
    }
}

/// A physical training location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    /// The venue identifier.
    pub id: VenueId,
    /// The name shown to visitors.
    pub display_name: String,
    /// Course categories taught at this venue.
    pub offered_course_categories: Vec<CourseCategoryId>,
}

impl Venue {
    /// Creates a new venue.
    #[must_use]
    pub fn new(id: &str, display_name: &str, offered: &[&str]) -> Self {
        Self {
            id: VenueId::new(id),
            display_name: display_name.to_string(),
            offered_course_categories: offered.iter().map(|c| CourseCategoryId::new(c)).collect(),
        }
    }

    /// A venue offering nothing is inactive and exposes no categories or slots.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.offered_course_categories.is_empty()
    }

    /// Checks whether the venue offers a course category.
    #[must_use]
    pub fn offers(&self, course_category: &CourseCategoryId) -> bool {
        self.offered_course_categories.contains(course_category)
    }
}

/// A wall-clock interval during which a class runs.
///
/// Displayed in the club's notation, e.g. `09h30-10h20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeRange {
    start: Time,
    end: Time,
}

impl TimeRange {
    /// Creates a new time range.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is not strictly before `end`.
    pub fn new(start: Time, end: Time) -> Result<Self, DomainError> {
        if start >= end {
            return Err(DomainError::InvalidTimeRange {
                input: format!("{}-{}", format_clock(start), format_clock(end)),
                reason: String::from("start must be before end"),
            });
        }
        Ok(Self { start, end })
    }

    /// Builds a range from literals already known to be increasing.
    pub const fn from_literals(start: Time, end: Time) -> Self {
        Self { start, end }
    }

    /// Returns the start time.
    #[must_use]
    pub const fn start(&self) -> Time {
        self.start
    }

    /// Returns the end time.
    #[must_use]
    pub const fn end(&self) -> Time {
        self.end
    }
}

fn format_clock(t: Time) -> String {
    format!("{:02}h{:02}", t.hour(), t.minute())
}

fn parse_clock(input: &str, whole: &str) -> Result<Time, DomainError> {
    let invalid = |reason: &str| DomainError::InvalidTimeRange {
        input: whole.to_string(),
        reason: reason.to_string(),
    };

    let (hour, minute) = input
        .split_once(['h', 'H', ':'])
        .ok_or_else(|| invalid("expected HHhMM or HH:MM"))?;
    let hour: u8 = hour.trim().parse().map_err(|_| invalid("hour is not a number"))?;
    let minute: u8 = minute
        .trim()
        .parse()
        .map_err(|_| invalid("minute is not a number"))?;

    Time::from_hms(hour, minute, 0).map_err(|e| invalid(&e.to_string()))
}

impl FromStr for TimeRange {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| DomainError::InvalidTimeRange {
                input: s.to_string(),
                reason: String::from("expected a start and an end separated by '-'"),
            })?;
        Self::new(parse_clock(start, s)?, parse_clock(end, s)?)
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", format_clock(self.start), format_clock(self.end))
    }
}

/// A recurring weekly class occurrence for a venue and category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleEntry {
    /// The day the class recurs on.
    pub weekday: Weekday,
    /// When the class runs on that day.
    pub time_range: TimeRange,
}

impl ScheduleEntry {
    /// Creates a new schedule entry.
    #[must_use]
    pub const fn new(weekday: Weekday, time_range: TimeRange) -> Self {
        Self {
            weekday,
            time_range,
        }
    }
}

/// Contact fields entered by the person requesting a trial class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Birth date of the participant.
    pub birth_date: Option<Date>,
}

/// A free-form message sent through the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns an error if the string is not a valid calendar date.
pub fn parse_iso_date(input: &str) -> Result<Date, DomainError> {
    let format = time::macros::format_description!("[year]-[month]-[day]");
    Date::parse(input.trim(), &format).map_err(|e| DomainError::DateParseError {
        date_string: input.to_string(),
        error: e.to_string(),
    })
}
