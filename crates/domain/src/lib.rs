// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod error;
mod locale;
mod registration;
mod types;
mod validation;
mod weekday;

#[cfg(test)]
mod tests;

pub use catalog::{LocationCatalog, VenueScheduleMap};
pub use error::DomainError;
pub use locale::{format_long_date, month_label};
pub use registration::{Registration, RegistrationForm};
pub use types::{
    ContactDetails, ContactMessage, CourseCategory, CourseCategoryId, ScheduleEntry, TimeRange,
    Venue, VenueId, parse_iso_date,
};
pub use validation::{
    BookingFields, FieldViolation, is_plausible_email, validate_booking_fields,
    validate_contact_message,
};
pub use weekday::Weekday;
