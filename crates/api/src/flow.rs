// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The single owner of one visitor's booking flow.
//!
//! ## Invariants
//!
//! - While a submission runs, the state cannot change
//! - A confirmation only exists after a delivered submission
//! - A failed submission keeps the state so it can be retried

use crate::error::{ApiError, translate_core_error};
use crate::submission::{Confirmation, ReservationSubmitter, SubmissionError};
use atp_trial::{BookingFlowState, Command, ReservationRequest, Transition, TransitionResult};
use atp_trial_domain::{FieldViolation, LocationCatalog};
use time::Date;
use tracing::{info, warn};

/// One booking flow and its submission status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFlow {
    state: BookingFlowState,
    is_submitting: bool,
    confirmation: Option<Confirmation>,
    error_message: Option<String>,
}

impl BookingFlow {
    /// Creates an empty flow.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current form state.
    #[must_use]
    pub const fn state(&self) -> &BookingFlowState {
        &self.state
    }

    /// Whether a submission is running.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// The confirmation of the last delivered submission, until acknowledged.
    #[must_use]
    pub const fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    /// The message of the last failed submission.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Applies a command to the form.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A submission is running
    /// - The command is invalid for the current state
    pub fn apply(
        &mut self,
        catalog: &LocationCatalog,
        command: Command,
        today: Date,
    ) -> Result<Transition, ApiError> {
        if self.is_submitting {
            return Err(ApiError::SubmissionInProgress);
        }
        let result: TransitionResult =
            atp_trial::apply(catalog, &self.state, command, today).map_err(translate_core_error)?;
        self.state = result.new_state;
        Ok(result.transition)
    }

    /// Checks the form and lists every violated constraint.
    #[must_use]
    pub fn validate(&self, today: Date) -> Vec<FieldViolation> {
        self.state.validate(today)
    }

    /// Freezes the form and marks the flow as submitting.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A submission is already running
    /// - The form does not validate
    pub fn begin_submission(
        &mut self,
        catalog: &LocationCatalog,
        today: Date,
    ) -> Result<ReservationRequest, ApiError> {
        if self.is_submitting {
            warn!("Submission refused: already in progress");
            return Err(ApiError::SubmissionInProgress);
        }
        let request: ReservationRequest = self
            .state
            .to_reservation_request(catalog, today)
            .map_err(translate_core_error)?;

        self.is_submitting = true;
        self.error_message = None;
        info!(venue = %request.venue_id, "Submission started");
        Ok(request)
    }

    /// Records the outcome of a submission started with [`Self::begin_submission`].
    ///
    /// On success the form is cleared and the confirmation kept. On failure
    /// the form is kept and the failure message recorded.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::SubmissionFailed` when `result` is a failure.
    pub fn finish_submission(
        &mut self,
        result: Result<Confirmation, SubmissionError>,
    ) -> Result<Confirmation, ApiError> {
        self.is_submitting = false;
        match result {
            Ok(confirmation) => {
                self.state = BookingFlowState::new();
                self.error_message = None;
                self.confirmation = Some(confirmation.clone());
                Ok(confirmation)
            }
            Err(err) => {
                let api_err: ApiError = ApiError::from(err);
                self.error_message = Some(api_err.to_string());
                Err(api_err)
            }
        }
    }

    /// Dismisses the confirmation, returning it.
    pub const fn acknowledge(&mut self) -> Option<Confirmation> {
        self.confirmation.take()
    }

    /// Validates, submits and records the outcome in one call.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission cannot start or is not delivered.
    pub async fn submit(
        &mut self,
        catalog: &LocationCatalog,
        submitter: &ReservationSubmitter,
        today: Date,
    ) -> Result<Confirmation, ApiError> {
        let request: ReservationRequest = self.begin_submission(catalog, today)?;
        let result: Result<Confirmation, SubmissionError> = submitter.submit(&request).await;
        self.finish_submission(result)
    }
}
