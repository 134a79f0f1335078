// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers that translate between transport DTOs and the booking core.

use crate::error::{ApiError, translate_domain_error};
use crate::flow::BookingFlow;
use crate::request_response::{
    ChosenSlotInfo, ConfirmationResponse, ContactInfo, ContactMessageRequest,
    ContactMessageResponse, CourseCategoryInfo, FlowResponse, ListCourseCategoriesResponse,
    ListSlotsResponse, ListVenuesResponse, RegistrationRequest, RegistrationResponse,
    SelectCourseCategoryRequest, SelectSlotRequest, SelectVenueRequest, SlotInfo,
    UpdateContactRequest, ValidationResponse, VenueInfo, ViolationInfo,
};
use crate::submission::{Confirmation, ReservationSubmitter, iso_date};
use atp_trial::{
    BookingFlowState, Command, ResolvedSlot, SlotSelection, available_course_categories,
    resolve_slots,
};
use atp_trial_domain::{
    ContactDetails, ContactMessage, CourseCategory, CourseCategoryId, FieldViolation,
    LocationCatalog, Registration, RegistrationForm, TimeRange, VenueId, Weekday,
    format_long_date, parse_iso_date, validate_contact_message,
};
use std::str::FromStr;
use time::Date;
use tracing::info;

/// The message returned once a contact-form message went through.
pub const CONTACT_SENT_MESSAGE: &str = "Votre message a bien été envoyé.";

/// The message returned once a registration went through.
pub const REGISTRATION_SENT_MESSAGE: &str = "Les emails ont été envoyés avec succès.";

fn course_category_info(category: &CourseCategory) -> CourseCategoryInfo {
    CourseCategoryInfo {
        course_category_id: category.id.to_string(),
        display_name: category.display_name.clone(),
        age_range: category.age_range.clone(),
    }
}

fn slot_info(slot: &ResolvedSlot) -> SlotInfo {
    SlotInfo {
        weekday: slot.weekday.as_str().to_string(),
        weekday_label: slot.weekday_label().to_string(),
        time_range: slot.time_range.to_string(),
        is_available: slot.is_available,
    }
}

/// Treats a missing, empty or blank identifier as no choice.
fn non_blank(input: Option<&str>) -> Option<&str> {
    input.map(str::trim).filter(|s| !s.is_empty())
}

/// Lists the venues that offer at least one course category.
#[must_use]
pub fn list_venues(catalog: &LocationCatalog) -> ListVenuesResponse {
    let venues: Vec<VenueInfo> = catalog
        .venues()
        .iter()
        .filter(|venue| venue.is_active())
        .map(|venue| VenueInfo {
            venue_id: venue.id.to_string(),
            display_name: venue.display_name.clone(),
        })
        .collect();
    ListVenuesResponse { venues }
}

/// Lists the course categories offered at a venue.
///
/// An unknown venue yields an empty list.
#[must_use]
pub fn list_course_categories(
    catalog: &LocationCatalog,
    venue_id: &str,
) -> ListCourseCategoriesResponse {
    let venue: VenueId = VenueId::new(venue_id);
    let course_categories: Vec<CourseCategoryInfo> = available_course_categories(catalog, &venue)
        .into_iter()
        .map(course_category_info)
        .collect();
    ListCourseCategoriesResponse {
        venue_id: venue.to_string(),
        course_categories,
    }
}

/// Lists the weekly slots of a course category at a venue.
///
/// An unknown venue or an unscheduled category yields an empty list.
#[must_use]
pub fn list_slots(
    catalog: &LocationCatalog,
    venue_id: &str,
    course_category_id: &str,
) -> ListSlotsResponse {
    let venue: VenueId = VenueId::new(venue_id);
    let course_category: CourseCategoryId = CourseCategoryId::new(course_category_id);
    let slots: Vec<SlotInfo> = resolve_slots(catalog, &venue, &course_category)
        .iter()
        .map(slot_info)
        .collect();
    ListSlotsResponse {
        venue_id: venue.to_string(),
        course_category_id: course_category.to_string(),
        slots,
    }
}

/// Builds the command for a venue pick.
///
/// # Errors
///
/// Returns an error if the venue is not in the catalog.
pub fn select_venue_command(
    catalog: &LocationCatalog,
    request: &SelectVenueRequest,
) -> Result<Command, ApiError> {
    let venue_id: Option<VenueId> = match non_blank(request.venue_id.as_deref()) {
        None => None,
        Some(id) => {
            let venue_id: VenueId = VenueId::new(id);
            if catalog.venue(&venue_id).is_none() {
                return Err(ApiError::InvalidInput {
                    field: String::from("venue_id"),
                    message: format!("Unknown venue '{venue_id}'"),
                });
            }
            Some(venue_id)
        }
    };
    Ok(Command::SelectVenue { venue_id })
}

/// Builds the command for a course category pick.
///
/// # Errors
///
/// Returns an error if the course category is not in the catalog.
pub fn select_course_category_command(
    catalog: &LocationCatalog,
    request: &SelectCourseCategoryRequest,
) -> Result<Command, ApiError> {
    let course_category_id: Option<CourseCategoryId> =
        match non_blank(request.course_category_id.as_deref()) {
            None => None,
            Some(id) => {
                let course_category_id: CourseCategoryId = CourseCategoryId::new(id);
                if catalog.course_category(&course_category_id).is_none() {
                    return Err(ApiError::InvalidInput {
                        field: String::from("course_category_id"),
                        message: format!("Unknown course category '{course_category_id}'"),
                    });
                }
                Some(course_category_id)
            }
        };
    Ok(Command::SelectCourseCategory { course_category_id })
}

/// Builds the command for a slot pick.
///
/// # Errors
///
/// Returns an error if the weekday or the time range cannot be parsed.
pub fn select_slot_command(request: &SelectSlotRequest) -> Result<Command, ApiError> {
    let weekday: Weekday = Weekday::from_str(&request.weekday).map_err(translate_domain_error)?;
    let time_range: TimeRange =
        TimeRange::from_str(&request.time_range).map_err(translate_domain_error)?;
    Ok(Command::SelectSlot {
        weekday,
        time_range,
    })
}

/// Builds the command replacing the contact fields.
///
/// # Errors
///
/// Returns an error if the birth date is not an ISO 8601 date.
pub fn update_contact_command(request: &UpdateContactRequest) -> Result<Command, ApiError> {
    let birth_date: Option<Date> = non_blank(request.birth_date.as_deref())
        .map(parse_iso_date)
        .transpose()
        .map_err(translate_domain_error)?;
    Ok(Command::UpdateContact(ContactDetails {
        name: request.name.clone(),
        email: request.email.clone(),
        phone: request.phone.clone(),
        birth_date,
    }))
}

/// Describes a form check.
#[must_use]
pub fn validation_response(violations: &[FieldViolation]) -> ValidationResponse {
    ValidationResponse {
        is_valid: violations.is_empty(),
        violations: violations
            .iter()
            .map(|v| ViolationInfo {
                field: v.field().to_string(),
                message: v.to_string(),
            })
            .collect(),
    }
}

/// Describes a confirmation.
#[must_use]
pub fn confirmation_response(confirmation: &Confirmation) -> ConfirmationResponse {
    ConfirmationResponse {
        venue_name: confirmation.venue_name.clone(),
        course_category_name: confirmation.course_category_name.clone(),
        resolved_date: confirmation.resolved_date.clone(),
        time_range: confirmation.time_range.clone(),
        requester_name: confirmation.requester_name.clone(),
        requester_email: confirmation.requester_email.clone(),
    }
}

fn chosen_slot_info(selection: &SlotSelection) -> ChosenSlotInfo {
    ChosenSlotInfo {
        weekday: selection.weekday.as_str().to_string(),
        weekday_label: selection.weekday.label().to_string(),
        time_range: selection.time_range.to_string(),
        resolved_date: iso_date(selection.resolved_date),
        resolved_date_label: format_long_date(selection.resolved_date),
    }
}

/// Describes a booking flow, including everything derived from its state.
#[must_use]
pub fn flow_response(catalog: &LocationCatalog, flow_id: u64, flow: &BookingFlow) -> FlowResponse {
    let state: &BookingFlowState = flow.state();
    FlowResponse {
        flow_id,
        venue_id: state.venue_id.as_ref().map(ToString::to_string),
        course_category_id: state.course_category_id.as_ref().map(ToString::to_string),
        course_categories: state
            .available_course_categories(catalog)
            .into_iter()
            .map(course_category_info)
            .collect(),
        slots: state.slots().iter().map(slot_info).collect(),
        chosen_slot: state.chosen_slot().map(chosen_slot_info),
        contact: ContactInfo {
            name: state.contact.name.clone(),
            email: state.contact.email.clone(),
            phone: state.contact.phone.clone(),
            birth_date: state.contact.birth_date.map(iso_date),
        },
        is_submitting: flow.is_submitting(),
        confirmation: flow.confirmation().map(confirmation_response),
        error_message: flow.error_message().map(ToString::to_string),
    }
}

/// Validates and sends a contact-form message.
///
/// # Errors
///
/// Returns an error if:
/// - The message does not validate
/// - The message was not delivered
pub async fn send_contact_message(
    submitter: &ReservationSubmitter,
    request: &ContactMessageRequest,
) -> Result<ContactMessageResponse, ApiError> {
    let message: ContactMessage = ContactMessage {
        name: request.name.clone(),
        email: request.email.clone(),
        subject: request.subject.clone(),
        message: request.message.clone(),
    };
    let violations: Vec<FieldViolation> = validate_contact_message(&message);
    if !violations.is_empty() {
        info!(count = violations.len(), "Contact message rejected");
        return Err(ApiError::validation_failed(&violations));
    }

    submitter.submit_contact(&message).await?;
    Ok(ContactMessageResponse {
        message: String::from(CONTACT_SENT_MESSAGE),
    })
}

/// Validates and sends a season registration.
///
/// # Arguments
///
/// * `catalog` - The reference data the venue and category are checked against
/// * `submitter` - Sends the operator and requester messages
/// * `request` - The registration as entered
/// * `today` - The current date, used to reject future birth dates
///
/// # Errors
///
/// Returns an error if:
/// - The birth date is not an ISO date
/// - The registration does not validate
/// - The registration was not delivered
pub async fn send_registration(
    catalog: &LocationCatalog,
    submitter: &ReservationSubmitter,
    request: &RegistrationRequest,
    today: Date,
) -> Result<RegistrationResponse, ApiError> {
    let birth_date: Option<Date> = non_blank(request.birth_date.as_deref())
        .map(parse_iso_date)
        .transpose()
        .map_err(translate_domain_error)?;
    let form: RegistrationForm = RegistrationForm {
        contact: ContactDetails {
            name: request.name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            birth_date,
        },
        venue_id: non_blank(request.venue_id.as_deref()).map(VenueId::new),
        course_category_id: non_blank(request.course_category_id.as_deref())
            .map(CourseCategoryId::new),
    };
    let registration: Registration =
        form.to_registration(catalog, today).map_err(|violations| {
            info!(count = violations.len(), "Registration rejected");
            ApiError::validation_failed(&violations)
        })?;

    submitter.submit_registration(&registration).await?;
    Ok(RegistrationResponse {
        message: String::from(REGISTRATION_SENT_MESSAGE),
        venue_name: registration.venue_name,
        course_category_name: registration.course_category_name,
    })
}
