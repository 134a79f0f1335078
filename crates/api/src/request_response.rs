// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};

/// A venue as listed to visitors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueInfo {
    /// The venue identifier.
    pub venue_id: String,
    /// The venue name.
    pub display_name: String,
}

/// API response listing the active venues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListVenuesResponse {
    /// Active venues in catalog order.
    pub venues: Vec<VenueInfo>,
}

/// A course category as listed to visitors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCategoryInfo {
    /// The course category identifier.
    pub course_category_id: String,
    /// The course category name.
    pub display_name: String,
    /// Who the course is for, e.g. `3 ans`.
    pub age_range: String,
}

/// API response listing the course categories of a venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCourseCategoriesResponse {
    /// The venue identifier.
    pub venue_id: String,
    /// Offered categories in catalog order.
    pub course_categories: Vec<CourseCategoryInfo>,
}

/// A weekly slot and whether it can be picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotInfo {
    /// The weekday identifier, e.g. `saturday`.
    pub weekday: String,
    /// The weekday label, e.g. `Samedi`.
    pub weekday_label: String,
    /// The time range, e.g. `09h30-10h20`.
    pub time_range: String,
    /// Whether the slot can be picked.
    pub is_available: bool,
}

/// API response listing the slots of a course category at a venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSlotsResponse {
    /// The venue identifier.
    pub venue_id: String,
    /// The course category identifier.
    pub course_category_id: String,
    /// Slots in schedule order.
    pub slots: Vec<SlotInfo>,
}

/// API request to pick or clear the venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectVenueRequest {
    /// The venue identifier; absent or empty clears the choice.
    pub venue_id: Option<String>,
}

/// API request to pick or clear the course category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectCourseCategoryRequest {
    /// The course category identifier; absent or empty clears the choice.
    pub course_category_id: Option<String>,
}

/// API request to pick a slot, or release it if already picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectSlotRequest {
    /// The weekday, as identifier or French label.
    pub weekday: String,
    /// The time range, e.g. `09h30-10h20`.
    pub time_range: String,
}

/// API request to replace the contact fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateContactRequest {
    /// Full name.
    #[serde(default)]
    pub name: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
    /// Birth date (ISO 8601); absent or empty when not entered yet.
    #[serde(default)]
    pub birth_date: Option<String>,
}

/// Contact fields as currently entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Birth date (ISO 8601).
    pub birth_date: Option<String>,
}

/// The chosen slot and the date of the trial class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChosenSlotInfo {
    /// The weekday identifier.
    pub weekday: String,
    /// The weekday label.
    pub weekday_label: String,
    /// The time range.
    pub time_range: String,
    /// The class date (ISO 8601).
    pub resolved_date: String,
    /// The class date, spelled out in French.
    pub resolved_date_label: String,
}

/// What the requester is shown after a delivered submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationResponse {
    /// The venue name.
    pub venue_name: String,
    /// The course category name.
    pub course_category_name: String,
    /// The class date, spelled out in French.
    pub resolved_date: String,
    /// The class time range.
    pub time_range: String,
    /// Who the confirmation was sent to.
    pub requester_name: String,
    /// Where the confirmation was sent.
    pub requester_email: String,
}

/// API response describing a booking flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowResponse {
    /// The flow identifier.
    pub flow_id: u64,
    /// The selected venue.
    pub venue_id: Option<String>,
    /// The selected course category.
    pub course_category_id: Option<String>,
    /// Categories offered at the selected venue.
    pub course_categories: Vec<CourseCategoryInfo>,
    /// Slots of the selected category at the selected venue.
    pub slots: Vec<SlotInfo>,
    /// The chosen slot.
    pub chosen_slot: Option<ChosenSlotInfo>,
    /// Contact fields.
    pub contact: ContactInfo,
    /// Whether a submission is running.
    pub is_submitting: bool,
    /// The confirmation of the last delivered submission.
    pub confirmation: Option<ConfirmationResponse>,
    /// The message of the last failed submission.
    pub error_message: Option<String>,
}

/// One violated form constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationInfo {
    /// The field at fault.
    pub field: String,
    /// The message shown to the visitor.
    pub message: String,
}

/// API response for a form check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Whether the form can be submitted.
    pub is_valid: bool,
    /// Every violated constraint, in form order.
    pub violations: Vec<ViolationInfo>,
}

/// API request to send a contact-form message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessageRequest {
    /// Sender name.
    #[serde(default)]
    pub name: String,
    /// Sender email address.
    #[serde(default)]
    pub email: String,
    /// Subject line.
    #[serde(default)]
    pub subject: String,
    /// Message body.
    #[serde(default)]
    pub message: String,
}

/// API response for a delivered contact-form message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessageResponse {
    /// A success message.
    pub message: String,
}

/// API request to register for the season.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    /// Full name.
    #[serde(default)]
    pub name: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
    /// Birth date (ISO 8601).
    #[serde(default)]
    pub birth_date: Option<String>,
    /// The chosen venue.
    #[serde(default)]
    pub venue_id: Option<String>,
    /// The chosen course category.
    #[serde(default)]
    pub course_category_id: Option<String>,
}

/// API response for a delivered registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    /// A success message.
    pub message: String,
    /// The venue's display name.
    pub venue_name: String,
    /// The course category's display name.
    pub course_category_name: String,
}
