// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Season registration requests.
//!
//! A registration names a venue and a course category but no slot: the
//! club places the member in a class afterwards.

use crate::catalog::LocationCatalog;
use crate::types::{ContactDetails, CourseCategoryId, VenueId};
use crate::validation::{FieldViolation, check_contact_details};
use time::Date;

/// A registration as entered, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    /// Contact fields of the future member.
    pub contact: ContactDetails,
    /// The chosen venue.
    pub venue_id: Option<VenueId>,
    /// The chosen course category.
    pub course_category_id: Option<CourseCategoryId>,
}

/// A validated registration with catalog display names resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Birth date of the future member.
    pub birth_date: Date,
    /// The venue identifier.
    pub venue_id: VenueId,
    /// The venue's display name.
    pub venue_name: String,
    /// The course category identifier.
    pub course_category_id: CourseCategoryId,
    /// The course category's display name.
    pub course_category_name: String,
}

impl RegistrationForm {
    /// Lists every violated constraint.
    ///
    /// Order: name, email, phone, birth date, venue, course category. A
    /// category the venue does not offer is reported after the venue checks.
    #[must_use]
    pub fn validate(&self, catalog: &LocationCatalog, today: Date) -> Vec<FieldViolation> {
        let mut violations: Vec<FieldViolation> = Vec::new();
        check_contact_details(&self.contact, today, &mut violations);

        match &self.venue_id {
            None => violations.push(FieldViolation::MissingVenue),
            Some(venue_id) if catalog.venue(venue_id).is_none() => {
                violations.push(FieldViolation::MissingVenue);
            }
            Some(_) => {}
        }
        match (&self.venue_id, &self.course_category_id) {
            (_, None) => violations.push(FieldViolation::MissingCourseCategory),
            (_, Some(category)) if catalog.course_category(category).is_none() => {
                violations.push(FieldViolation::MissingCourseCategory);
            }
            (Some(venue_id), Some(category)) => {
                if catalog
                    .venue(venue_id)
                    .is_some_and(|venue| !venue.offers(category))
                {
                    violations.push(FieldViolation::CourseCategoryNotOffered);
                }
            }
            (None, Some(_)) => {}
        }

        violations
    }

    /// Validates the form and resolves display names.
    ///
    /// # Errors
    ///
    /// Returns every violated constraint if the form does not validate.
    pub fn to_registration(
        &self,
        catalog: &LocationCatalog,
        today: Date,
    ) -> Result<Registration, Vec<FieldViolation>> {
        let violations: Vec<FieldViolation> = self.validate(catalog, today);
        let (Some(venue), Some(category), Some(birth_date), true) = (
            self.venue_id.as_ref().and_then(|id| catalog.venue(id)),
            self.course_category_id
                .as_ref()
                .and_then(|id| catalog.course_category(id)),
            self.contact.birth_date,
            violations.is_empty(),
        ) else {
            return Err(violations);
        };

        Ok(Registration {
            name: self.contact.name.trim().to_string(),
            email: self.contact.email.trim().to_string(),
            phone: self.contact.phone.trim().to_string(),
            birth_date,
            venue_id: venue.id.clone(),
            venue_name: venue.display_name.clone(),
            course_category_id: category.id.clone(),
            course_category_name: category.display_name.clone(),
        })
    }
}
