// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    BookingFields, ContactDetails, ContactMessage, CourseCategoryId, FieldViolation, TimeRange,
    VenueId, is_plausible_email, validate_booking_fields, validate_contact_message,
};
use std::str::FromStr;
use time::Date;
use time::macros::date;

const TODAY: Date = date!(2026 - 10 - 21);

fn complete_contact() -> ContactDetails {
    ContactDetails {
        name: String::from("Camille Martin"),
        email: String::from("camille@example.fr"),
        phone: String::from("06 12 34 56 78"),
        birth_date: Some(date!(2015 - 06 - 01)),
    }
}

#[test]
fn test_validate_booking_fields_accepts_complete_form() {
    let contact: ContactDetails = complete_contact();
    let venue: VenueId = VenueId::new("ulis");
    let category: CourseCategoryId = CourseCategoryId::new("enfants_9_10");
    let fields: BookingFields<'_> = BookingFields {
        contact: &contact,
        venue: Some(&venue),
        course_category: Some(&category),
        time_range: Some(TimeRange::from_str("15h00-16h00").unwrap()),
    };

    assert!(validate_booking_fields(&fields, TODAY).is_empty());
}

#[test]
fn test_validate_booking_fields_reports_all_seven_violations_in_order() {
    let contact: ContactDetails = ContactDetails::default();
    let fields: BookingFields<'_> = BookingFields {
        contact: &contact,
        venue: None,
        course_category: None,
        time_range: None,
    };

    let messages: Vec<String> = validate_booking_fields(&fields, TODAY)
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(
        messages,
        vec![
            "Veuillez entrer votre nom complet",
            "Veuillez entrer votre email",
            "Veuillez entrer votre numéro de téléphone",
            "Veuillez entrer votre date de naissance",
            "Veuillez sélectionner un club",
            "Veuillez sélectionner un type de cours",
            "Veuillez sélectionner un créneau horaire",
        ]
    );
}

#[test]
fn test_validate_booking_fields_treats_whitespace_name_as_empty() {
    let mut contact: ContactDetails = complete_contact();
    contact.name = String::from("   ");
    let venue: VenueId = VenueId::new("ulis");
    let category: CourseCategoryId = CourseCategoryId::new("adultes");
    let fields: BookingFields<'_> = BookingFields {
        contact: &contact,
        venue: Some(&venue),
        course_category: Some(&category),
        time_range: Some(TimeRange::from_str("20h30-22h00").unwrap()),
    };

    assert_eq!(
        validate_booking_fields(&fields, TODAY),
        vec![FieldViolation::MissingName]
    );
}

#[test]
fn test_validate_booking_fields_reports_malformed_email_once() {
    let mut contact: ContactDetails = complete_contact();
    contact.email = String::from("camille.example.fr");
    let fields: BookingFields<'_> = BookingFields {
        contact: &contact,
        venue: None,
        course_category: None,
        time_range: None,
    };

    let violations: Vec<FieldViolation> = validate_booking_fields(&fields, TODAY);

    assert_eq!(
        violations,
        vec![
            FieldViolation::InvalidEmail,
            FieldViolation::MissingVenue,
            FieldViolation::MissingCourseCategory,
            FieldViolation::MissingTimeSlot,
        ]
    );
    assert!(!violations.contains(&FieldViolation::MissingEmail));
}

#[test]
fn test_validate_booking_fields_rejects_birth_date_after_today() {
    let mut contact: ContactDetails = complete_contact();
    contact.birth_date = Some(date!(2026 - 10 - 22));
    let venue: VenueId = VenueId::new("ulis");
    let category: CourseCategoryId = CourseCategoryId::new("baby_3");
    let fields: BookingFields<'_> = BookingFields {
        contact: &contact,
        venue: Some(&venue),
        course_category: Some(&category),
        time_range: Some(TimeRange::from_str("09h30-10h20").unwrap()),
    };

    assert_eq!(
        validate_booking_fields(&fields, TODAY),
        vec![FieldViolation::BirthDateInFuture]
    );
}

#[test]
fn test_validate_booking_fields_accepts_birth_date_of_today() {
    let mut contact: ContactDetails = complete_contact();
    contact.birth_date = Some(TODAY);
    let venue: VenueId = VenueId::new("ulis");
    let category: CourseCategoryId = CourseCategoryId::new("baby_3");
    let fields: BookingFields<'_> = BookingFields {
        contact: &contact,
        venue: Some(&venue),
        course_category: Some(&category),
        time_range: Some(TimeRange::from_str("09h30-10h20").unwrap()),
    };

    assert!(validate_booking_fields(&fields, TODAY).is_empty());
}

#[test]
fn test_is_plausible_email_requires_at_and_dotted_domain() {
    assert!(is_plausible_email("a@b.c"));
    assert!(is_plausible_email("prenom.nom@club.example.fr"));
    assert!(!is_plausible_email("a@b"));
    assert!(!is_plausible_email("@b.c"));
    assert!(!is_plausible_email("a@.c"));
    assert!(!is_plausible_email("a@b."));
    assert!(!is_plausible_email("a b@c"));
}

#[test]
fn test_is_plausible_email_edge_inputs() {
    assert!(!is_plausible_email("a@.c"));
    assert!(!is_plausible_email("a@b."));
    assert!(!is_plausible_email("a @b.c"));
    assert!(!is_plausible_email("a@ b.c"));
    assert!(!is_plausible_email("a@b .c"));
    assert!(!is_plausible_email("a@b. c"));
    assert!(!is_plausible_email(""));
    assert!(is_plausible_email("a@b..c"));
    assert!(is_plausible_email("a@@b.c"));
    assert!(is_plausible_email("@a@b.c"));
}

#[test]
fn test_is_plausible_email_accepts_multibyte_characters() {
    assert!(is_plausible_email("élodie@club.fr"));
    assert!(is_plausible_email("a@clubé.fr"));
    assert!(is_plausible_email("a@b.é"));
    assert!(!is_plausible_email("é@.fr"));
    assert!(!is_plausible_email("é@bé."));
}

#[test]
fn test_is_plausible_email_matches_within_surrounding_text() {
    assert!(is_plausible_email("mail: a@b.c"));
}

#[test]
fn test_violation_fields_name_the_offending_input() {
    assert_eq!(FieldViolation::InvalidEmail.field(), "email");
    assert_eq!(FieldViolation::BirthDateInFuture.field(), "birth_date");
    assert_eq!(FieldViolation::MissingTimeSlot.field(), "time_range");
    assert_eq!(
        FieldViolation::CourseCategoryNotOffered.field(),
        "course_category_id"
    );
}

#[test]
fn test_validate_contact_message_reports_every_missing_field() {
    let violations: Vec<FieldViolation> = validate_contact_message(&ContactMessage::default());

    assert_eq!(
        violations,
        vec![
            FieldViolation::MissingName,
            FieldViolation::MissingEmail,
            FieldViolation::MissingSubject,
            FieldViolation::MissingMessage,
        ]
    );
}

#[test]
fn test_validate_contact_message_accepts_complete_message() {
    let message: ContactMessage = ContactMessage {
        name: String::from("Camille Martin"),
        email: String::from("camille@example.fr"),
        subject: String::from("Horaires"),
        message: String::from("Les cours ont-ils lieu pendant les vacances ?"),
    };

    assert!(validate_contact_message(&message).is_empty());
}
