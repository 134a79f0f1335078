// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{ContactDetails, ContactMessage, CourseCategoryId, TimeRange, VenueId};
use time::Date;

/// A single violated form constraint.
///
/// The `Display` output is the message shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldViolation {
    /// The name is empty.
    MissingName,
    /// The email is empty.
    MissingEmail,
    /// The email does not look like `local@domain.tld`.
    InvalidEmail,
    /// The phone number is empty.
    MissingPhone,
    /// No birth date was given.
    MissingBirthDate,
    /// The birth date is later than today.
    BirthDateInFuture,
    /// No venue is selected.
    MissingVenue,
    /// No course category is selected.
    MissingCourseCategory,
    /// No time slot is chosen.
    MissingTimeSlot,
    /// The venue does not teach the chosen course category.
    CourseCategoryNotOffered,
    /// The contact subject is empty.
    MissingSubject,
    /// The contact message body is empty.
    MissingMessage,
}

impl FieldViolation {
    /// The input field this violation is about.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingName => "name",
            Self::MissingEmail | Self::InvalidEmail => "email",
            Self::MissingPhone => "phone",
            Self::MissingBirthDate | Self::BirthDateInFuture => "birth_date",
            Self::MissingVenue => "venue_id",
            Self::MissingCourseCategory | Self::CourseCategoryNotOffered => "course_category_id",
            Self::MissingTimeSlot => "time_range",
            Self::MissingSubject => "subject",
            Self::MissingMessage => "message",
        }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message: &str = match self {
            Self::MissingName => "Veuillez entrer votre nom complet",
            Self::MissingEmail => "Veuillez entrer votre email",
            Self::InvalidEmail => "Format d'email invalide",
            Self::MissingPhone => "Veuillez entrer votre numéro de téléphone",
            Self::MissingBirthDate => "Veuillez entrer votre date de naissance",
            Self::BirthDateInFuture => "La date de naissance ne peut pas être dans le futur",
            Self::MissingVenue => "Veuillez sélectionner un club",
            Self::MissingCourseCategory => "Veuillez sélectionner un type de cours",
            Self::MissingTimeSlot => "Veuillez sélectionner un créneau horaire",
            Self::CourseCategoryNotOffered => "Ce type de cours n'est pas proposé dans ce club",
            Self::MissingSubject => "Veuillez entrer un sujet",
            Self::MissingMessage => "Veuillez entrer votre message",
        };
        write!(f, "{message}")
    }
}

/// The booking form fields as currently assembled.
#[derive(Debug, Clone, Copy)]
pub struct BookingFields<'a> {
    /// Contact fields.
    pub contact: &'a ContactDetails,
    /// The selected venue, if any.
    pub venue: Option<&'a VenueId>,
    /// The selected course category, if any.
    pub course_category: Option<&'a CourseCategoryId>,
    /// The chosen slot's time range, if any.
    pub time_range: Option<TimeRange>,
}

/// Checks the `\S+@\S+\.\S+` shape: something, an `@`, something, a dot, something.
#[must_use]
pub fn is_plausible_email(input: &str) -> bool {
    input.split_whitespace().any(|token| {
        token.char_indices().any(|(at, c)| {
            if c != '@' || at == 0 {
                return false;
            }
            let domain: &str = &token[at + 1..];
            domain
                .char_indices()
                .any(|(dot, d)| d == '.' && dot > 0 && dot + 1 < domain.len())
        })
    })
}

fn check_email(email: &str, violations: &mut Vec<FieldViolation>) {
    if email.trim().is_empty() {
        violations.push(FieldViolation::MissingEmail);
    } else if !is_plausible_email(email) {
        violations.push(FieldViolation::InvalidEmail);
    }
}

/// Checks name, email, phone and birth date, in that order.
pub fn check_contact_details(
    contact: &ContactDetails,
    today: Date,
    violations: &mut Vec<FieldViolation>,
) {
    if contact.name.trim().is_empty() {
        violations.push(FieldViolation::MissingName);
    }
    check_email(&contact.email, violations);
    if contact.phone.trim().is_empty() {
        violations.push(FieldViolation::MissingPhone);
    }
    match contact.birth_date {
        None => violations.push(FieldViolation::MissingBirthDate),
        Some(birth_date) if birth_date > today => {
            violations.push(FieldViolation::BirthDateInFuture);
        }
        Some(_) => {}
    }
}

/// Validates the booking form.
///
/// Every violated constraint is reported, in a fixed order: name, email,
/// phone, birth date, venue, course category, time slot. This function is
/// pure and deterministic.
///
/// # Arguments
///
/// * `fields` - The assembled form fields
/// * `today` - The current date, used to reject future birth dates
///
/// # Returns
///
/// An empty vector if and only if the booking may be submitted.
#[must_use]
pub fn validate_booking_fields(fields: &BookingFields<'_>, today: Date) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = Vec::new();
    check_contact_details(fields.contact, today, &mut violations);
    if fields.venue.is_none() {
        violations.push(FieldViolation::MissingVenue);
    }
    if fields.course_category.is_none() {
        violations.push(FieldViolation::MissingCourseCategory);
    }
    if fields.time_range.is_none() {
        violations.push(FieldViolation::MissingTimeSlot);
    }

    violations
}

/// Validates the contact form: name, email, subject, message, in that order.
#[must_use]
pub fn validate_contact_message(message: &ContactMessage) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = Vec::new();

    if message.name.trim().is_empty() {
        violations.push(FieldViolation::MissingName);
    }
    check_email(&message.email, &mut violations);
    if message.subject.trim().is_empty() {
        violations.push(FieldViolation::MissingSubject);
    }
    if message.message.trim().is_empty() {
        violations.push(FieldViolation::MissingMessage);
    }

    violations
}
