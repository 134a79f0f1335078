// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::availability::{ResolvedSlot, available_course_categories};
use crate::error::CoreError;
use crate::selection::{SlotSelection, SlotSelectionState};
use atp_trial_domain::{
    BookingFields, ContactDetails, CourseCategory, CourseCategoryId, FieldViolation,
    LocationCatalog, TimeRange, VenueId, Weekday, validate_booking_fields,
};
use time::Date;

/// Everything a visitor has entered into the trial booking form.
///
/// Derived data (offered categories, the class date) is recomputed from
/// this value; the slot list lives in `selection` because its flags are
/// part of the selection state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFlowState {
    /// The selected venue.
    pub venue_id: Option<VenueId>,
    /// The selected course category.
    pub course_category_id: Option<CourseCategoryId>,
    /// Resolved slots and the chosen one.
    pub selection: SlotSelectionState,
    /// Contact fields.
    pub contact: ContactDetails,
}

impl BookingFlowState {
    /// Creates an empty booking form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Course categories offered at the selected venue.
    #[must_use]
    pub fn available_course_categories<'a>(
        &self,
        catalog: &'a LocationCatalog,
    ) -> Vec<&'a CourseCategory> {
        self.venue_id
            .as_ref()
            .map_or_else(Vec::new, |venue| available_course_categories(catalog, venue))
    }

    /// The resolved slots for the current venue and category.
    #[must_use]
    pub fn slots(&self) -> &[ResolvedSlot] {
        self.selection.slots()
    }

    /// The chosen slot, if any.
    #[must_use]
    pub const fn chosen_slot(&self) -> Option<&SlotSelection> {
        self.selection.chosen()
    }

    /// Checks the form and lists every violated constraint.
    #[must_use]
    pub fn validate(&self, today: Date) -> Vec<FieldViolation> {
        let fields: BookingFields<'_> = BookingFields {
            contact: &self.contact,
            venue: self.venue_id.as_ref(),
            course_category: self.course_category_id.as_ref(),
            time_range: self.selection.chosen().map(|c| c.time_range),
        };
        validate_booking_fields(&fields, today)
    }

    /// Freezes the form into a request ready for submission.
    ///
    /// Display names fall back to the raw identifiers when the catalog no
    /// longer knows them.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::IncompleteBooking` with every violation if the
    /// form does not validate.
    pub fn to_reservation_request(
        &self,
        catalog: &LocationCatalog,
        today: Date,
    ) -> Result<ReservationRequest, CoreError> {
        let violations: Vec<FieldViolation> = self.validate(today);
        let (Some(venue_id), Some(course_category_id), Some(slot), Some(birth_date)) = (
            self.venue_id.as_ref(),
            self.course_category_id.as_ref(),
            self.selection.chosen(),
            self.contact.birth_date,
        ) else {
            return Err(CoreError::IncompleteBooking(violations));
        };
        if !violations.is_empty() {
            return Err(CoreError::IncompleteBooking(violations));
        }

        let venue_name: String = catalog
            .venue(venue_id)
            .map_or_else(|| venue_id.to_string(), |v| v.display_name.clone());
        let course_category_name: String = catalog
            .course_category(course_category_id)
            .map_or_else(|| course_category_id.to_string(), |c| c.display_name.clone());

        Ok(ReservationRequest {
            name: self.contact.name.trim().to_string(),
            email: self.contact.email.trim().to_string(),
            phone: self.contact.phone.trim().to_string(),
            birth_date,
            venue_id: venue_id.clone(),
            venue_name,
            course_category_id: course_category_id.clone(),
            course_category_name,
            weekday: slot.weekday,
            time_range: slot.time_range,
            resolved_date: slot.resolved_date,
        })
    }
}

/// A validated trial class request.
///
/// Built once submission begins and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    /// Requester's full name.
    pub name: String,
    /// Requester's email address.
    pub email: String,
    /// Requester's phone number.
    pub phone: String,
    /// Participant's birth date.
    pub birth_date: Date,
    /// The venue identifier.
    pub venue_id: VenueId,
    /// The venue's display name.
    pub venue_name: String,
    /// The course category identifier.
    pub course_category_id: CourseCategoryId,
    /// The course category's display name.
    pub course_category_name: String,
    /// The chosen weekday.
    pub weekday: Weekday,
    /// The chosen time range.
    pub time_range: TimeRange,
    /// The date of the trial class.
    pub resolved_date: Date,
}

/// What a transition changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A venue was selected or cleared.
    VenueChanged,
    /// A course category was selected or cleared.
    CourseCategoryChanged {
        /// How many slots the new selection offers.
        slot_count: usize,
    },
    /// A slot was chosen.
    SlotSelected(SlotSelection),
    /// The chosen slot was released.
    SlotDeselected,
    /// Contact fields were replaced.
    ContactUpdated,
    /// The form was cleared.
    Reset,
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: BookingFlowState,
    /// What changed.
    pub transition: Transition,
}
