// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation, registration and contact-form submission.
//!
//! A submission is one unit made of two messages: one to the club and one
//! confirmation to the requester. It succeeds only when both are delivered.

use atp_trial::ReservationRequest;
use atp_trial_domain::{ContactMessage, Registration, format_long_date};
use atp_trial_notify::{
    NotificationConfig, NotificationGateway, NotificationMessage, PairDispatchError, Recipient,
    TemplatePair, dispatch_pair,
};
use std::sync::Arc;
use time::Date;
use time::macros::format_description;
use tracing::{info, warn};

/// The message shown when a submission could not be delivered.
pub const SUBMISSION_FAILURE_MESSAGE: &str =
    "Une erreur est survenue lors de l'envoi du formulaire. Veuillez réessayer.";

/// The value of the `type_demande` parameter for trial requests.
pub const TRIAL_REQUEST_KIND: &str = "Cours d'essai";

/// Submission errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// At least one of the two messages was not delivered.
    #[error("{}", SUBMISSION_FAILURE_MESSAGE)]
    DispatchFailed(#[source] PairDispatchError),
}

/// What the requester is shown once a trial request went through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    /// The venue's display name.
    pub venue_name: String,
    /// The course category's display name.
    pub course_category_name: String,
    /// The class date, spelled out in French.
    pub resolved_date: String,
    /// The class time range, e.g. `09h30-10h20`.
    pub time_range: String,
    /// Who the confirmation was sent to.
    pub requester_name: String,
    /// Where the confirmation was sent.
    pub requester_email: String,
}

impl Confirmation {
    /// Builds the confirmation for a delivered request.
    #[must_use]
    pub fn for_request(request: &ReservationRequest) -> Self {
        Self {
            venue_name: request.venue_name.clone(),
            course_category_name: request.course_category_name.clone(),
            resolved_date: format_long_date(request.resolved_date),
            time_range: request.time_range.to_string(),
            requester_name: request.name.clone(),
            requester_email: request.email.clone(),
        }
    }
}

/// Formats a date as `YYYY-MM-DD` for template parameters.
pub fn iso_date(date: Date) -> String {
    let format = format_description!("[year]-[month]-[day]");
    date.format(&format).unwrap_or_else(|_| date.to_string())
}

/// Builds the operator and requester messages for a trial request.
///
/// # Arguments
///
/// * `config` - Template identifiers and the optional operator address
/// * `request` - The validated request
///
/// # Returns
///
/// The operator message and the requester message, in that order.
#[must_use]
pub fn build_trial_messages(
    config: &NotificationConfig,
    request: &ReservationRequest,
) -> (NotificationMessage, NotificationMessage) {
    let trial_date: String = iso_date(request.resolved_date);
    let trial_time: String = request.time_range.to_string();

    let mut operator: NotificationMessage =
        NotificationMessage::new(Recipient::Operator, &config.trial.operator_template_id)
            .with_param("from_name", request.name.as_str())
            .with_param("from_email", request.email.as_str())
            .with_param("phone", request.phone.as_str())
            .with_param("birth_date", iso_date(request.birth_date))
            .with_param("club", request.venue_name.as_str())
            .with_param("course_type", request.course_category_name.as_str())
            .with_param("trial_date", trial_date.as_str())
            .with_param("trial_time", trial_time.as_str())
            .with_param("type_demande", TRIAL_REQUEST_KIND);
    if let Some(operator_email) = &config.operator_email {
        operator = operator.with_param("to_email", operator_email.as_str());
    }

    let requester: NotificationMessage =
        NotificationMessage::new(Recipient::Requester, &config.trial.requester_template_id)
            .with_param("to_name", request.name.as_str())
            .with_param("to_email", request.email.as_str())
            .with_param("club", request.venue_name.as_str())
            .with_param("course_type", request.course_category_name.as_str())
            .with_param("trial_date", trial_date)
            .with_param("trial_time", trial_time);

    (operator, requester)
}

/// Builds the operator and requester messages for a contact-form message.
///
/// Both messages carry the same parameters. The operator copy is
/// addressed to the configured operator address when there is one.
#[must_use]
pub fn build_contact_messages(
    config: &NotificationConfig,
    message: &ContactMessage,
) -> (NotificationMessage, NotificationMessage) {
    let build = |recipient: Recipient, template_id: &str, to_email: &str| {
        NotificationMessage::new(recipient, template_id)
            .with_param("from_name", message.name.trim())
            .with_param("from_email", message.email.trim())
            .with_param("subject", message.subject.trim())
            .with_param("message", message.message.trim())
            .with_param("to_name", message.name.trim())
            .with_param("to_email", to_email)
    };

    let pair: &TemplatePair = &config.contact;
    let operator_email: &str = config
        .operator_email
        .as_deref()
        .unwrap_or_else(|| message.email.trim());

    (
        build(
            Recipient::Operator,
            &pair.operator_template_id,
            operator_email,
        ),
        build(
            Recipient::Requester,
            &pair.requester_template_id,
            message.email.trim(),
        ),
    )
}

/// Builds the operator and requester messages for a season registration.
///
/// Both messages carry the same parameters, addressed like contact
/// messages.
#[must_use]
pub fn build_registration_messages(
    config: &NotificationConfig,
    registration: &Registration,
) -> (NotificationMessage, NotificationMessage) {
    let birth_date: String = iso_date(registration.birth_date);
    let build = |recipient: Recipient, template_id: &str, to_email: &str| {
        NotificationMessage::new(recipient, template_id)
            .with_param("from_name", registration.name.as_str())
            .with_param("from_email", registration.email.as_str())
            .with_param("phone", registration.phone.as_str())
            .with_param("birth_date", birth_date.as_str())
            .with_param("club", registration.venue_name.as_str())
            .with_param("course_type", registration.course_category_name.as_str())
            .with_param("to_name", registration.name.as_str())
            .with_param("to_email", to_email)
    };

    let pair: &TemplatePair = &config.registration;
    let operator_email: &str = config
        .operator_email
        .as_deref()
        .unwrap_or(registration.email.as_str());

    (
        build(
            Recipient::Operator,
            &pair.operator_template_id,
            operator_email,
        ),
        build(
            Recipient::Requester,
            &pair.requester_template_id,
            &registration.email,
        ),
    )
}

/// Sends submissions through a notification gateway.
#[derive(Clone)]
pub struct ReservationSubmitter {
    gateway: Arc<dyn NotificationGateway>,
    config: NotificationConfig,
}

impl std::fmt::Debug for ReservationSubmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReservationSubmitter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ReservationSubmitter {
    /// Creates a new submitter.
    ///
    /// # Arguments
    ///
    /// * `gateway` - The messaging service
    /// * `config` - Template identifiers and addresses
    #[must_use]
    pub const fn new(gateway: Arc<dyn NotificationGateway>, config: NotificationConfig) -> Self {
        Self { gateway, config }
    }

    /// The notification configuration in use.
    #[must_use]
    pub const fn config(&self) -> &NotificationConfig {
        &self.config
    }

    /// Sends a trial request to the club and a confirmation to the requester.
    ///
    /// Both messages are sent concurrently. There is no retry.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::DispatchFailed` if either message was not
    /// delivered.
    pub async fn submit(
        &self,
        request: &ReservationRequest,
    ) -> Result<Confirmation, SubmissionError> {
        let (operator, requester) = build_trial_messages(&self.config, request);
        self.dispatch(&operator, &requester).await?;

        info!(
            venue = %request.venue_id,
            course_category = %request.course_category_id,
            date = %request.resolved_date,
            time_range = %request.time_range,
            "Trial request submitted"
        );
        Ok(Confirmation::for_request(request))
    }

    /// Sends a contact-form message to the club and a copy to the sender.
    ///
    /// The message is expected to have passed
    /// [`atp_trial_domain::validate_contact_message`].
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::DispatchFailed` if either message was not
    /// delivered.
    pub async fn submit_contact(&self, message: &ContactMessage) -> Result<(), SubmissionError> {
        let (operator, requester) = build_contact_messages(&self.config, message);
        self.dispatch(&operator, &requester).await?;

        info!(subject = %message.subject.trim(), "Contact message submitted");
        Ok(())
    }

    /// Sends a season registration to the club and a copy to the requester.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::DispatchFailed` if either message was not
    /// delivered.
    pub async fn submit_registration(
        &self,
        registration: &Registration,
    ) -> Result<(), SubmissionError> {
        let (operator, requester) = build_registration_messages(&self.config, registration);
        self.dispatch(&operator, &requester).await?;

        info!(
            venue = %registration.venue_id,
            course_category = %registration.course_category_id,
            "Registration submitted"
        );
        Ok(())
    }

    async fn dispatch(
        &self,
        operator: &NotificationMessage,
        requester: &NotificationMessage,
    ) -> Result<(), SubmissionError> {
        dispatch_pair(
            self.gateway.as_ref(),
            &self.config.service_id,
            operator,
            requester,
        )
        .await
        .map_err(|err| {
            warn!(failed = ?err.failed, "Submission not delivered");
            SubmissionError::DispatchFailed(err)
        })
    }
}
