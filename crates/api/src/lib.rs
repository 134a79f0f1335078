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

mod error;
mod flow;
mod handlers;
mod request_response;
mod submission;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use flow::BookingFlow;
pub use handlers::{
    CONTACT_SENT_MESSAGE, REGISTRATION_SENT_MESSAGE, confirmation_response, flow_response,
    list_course_categories, list_slots, list_venues, select_course_category_command,
    select_slot_command, select_venue_command, send_contact_message, send_registration,
    update_contact_command, validation_response,
};
pub use request_response::{
    ChosenSlotInfo, ConfirmationResponse, ContactInfo, ContactMessageRequest,
    ContactMessageResponse, CourseCategoryInfo, FlowResponse, ListCourseCategoriesResponse,
    ListSlotsResponse, ListVenuesResponse, RegistrationRequest, RegistrationResponse,
    SelectCourseCategoryRequest, SelectSlotRequest, SelectVenueRequest, SlotInfo,
    UpdateContactRequest, ValidationResponse, VenueInfo, ViolationInfo,
};
pub use submission::{
    Confirmation, ReservationSubmitter, SUBMISSION_FAILURE_MESSAGE, SubmissionError,
    TRIAL_REQUEST_KIND, build_contact_messages, build_registration_messages, build_trial_messages,
};
