// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    MONDAY, RecordingGateway, create_complete_flow, create_test_contact, create_test_submitter,
};
use crate::{
    ApiError, BookingFlow, Confirmation, ReservationSubmitter, SUBMISSION_FAILURE_MESSAGE,
    SubmissionError,
};
use atp_trial::{BookingFlowState, Command, ReservationRequest, Transition};
use atp_trial_domain::{FieldViolation, LocationCatalog, VenueId};
use atp_trial_notify::PairDispatchError;
use std::sync::Arc;

#[test]
fn test_new_flow_is_idle() {
    let flow: BookingFlow = BookingFlow::new();

    assert!(!flow.is_submitting());
    assert!(flow.confirmation().is_none());
    assert!(flow.error_message().is_none());
    assert_eq!(flow.state(), &BookingFlowState::new());
}

#[test]
fn test_begin_submission_rejects_incomplete_form() {
    let catalog: LocationCatalog = LocationCatalog::builtin();
    let mut flow: BookingFlow = BookingFlow::new();

    let err: ApiError = flow.begin_submission(&catalog, MONDAY).unwrap_err();

    let ApiError::ValidationFailed { messages } = err else {
        panic!("expected a validation failure");
    };
    assert_eq!(messages.len(), 7);
    assert_eq!(messages[0], FieldViolation::MissingName.to_string());
    assert!(!flow.is_submitting());
}

#[test]
fn test_begin_submission_freezes_the_form() {
    let catalog: LocationCatalog = LocationCatalog::builtin();
    let mut flow: BookingFlow = create_complete_flow(&catalog);

    let request: ReservationRequest = flow.begin_submission(&catalog, MONDAY).unwrap();

    assert!(flow.is_submitting());
    assert_eq!(request.venue_id, VenueId::new("ulis"));

    let err: ApiError = flow
        .apply(&catalog, Command::Reset, MONDAY)
        .unwrap_err();
    assert_eq!(err, ApiError::SubmissionInProgress);

    let err: ApiError = flow.begin_submission(&catalog, MONDAY).unwrap_err();
    assert_eq!(err, ApiError::SubmissionInProgress);
}

#[test]
fn test_finish_submission_success_resets_form() {
    let catalog: LocationCatalog = LocationCatalog::builtin();
    let mut flow: BookingFlow = create_complete_flow(&catalog);
    let request: ReservationRequest = flow.begin_submission(&catalog, MONDAY).unwrap();

    let confirmation: Confirmation = flow
        .finish_submission(Ok(Confirmation::for_request(&request)))
        .unwrap();

    assert!(!flow.is_submitting());
    assert_eq!(flow.state(), &BookingFlowState::new());
    assert_eq!(flow.confirmation(), Some(&confirmation));

    let acknowledged: Option<Confirmation> = flow.acknowledge();
    assert_eq!(acknowledged, Some(confirmation));
    assert!(flow.confirmation().is_none());
}

#[test]
fn test_finish_submission_failure_keeps_form() {
    let catalog: LocationCatalog = LocationCatalog::builtin();
    let mut flow: BookingFlow = create_complete_flow(&catalog);
    let before: BookingFlowState = flow.state().clone();
    flow.begin_submission(&catalog, MONDAY).unwrap();

    let err: ApiError = flow
        .finish_submission(Err(SubmissionError::DispatchFailed(PairDispatchError {
            failed: Vec::new(),
        })))
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::SubmissionFailed {
            message: String::from(SUBMISSION_FAILURE_MESSAGE)
        }
    );
    assert!(!flow.is_submitting());
    assert_eq!(flow.state(), &before);
    assert_eq!(flow.error_message(), Some(SUBMISSION_FAILURE_MESSAGE));
    assert!(flow.confirmation().is_none());
}

#[test]
fn test_apply_reports_transition() {
    let catalog: LocationCatalog = LocationCatalog::builtin();
    let mut flow: BookingFlow = BookingFlow::new();

    let transition: Transition = flow
        .apply(
            &catalog,
            Command::UpdateContact(create_test_contact()),
            MONDAY,
        )
        .unwrap();

    assert_eq!(transition, Transition::ContactUpdated);
    assert_eq!(flow.state().contact, create_test_contact());
}

#[tokio::test]
async fn test_submit_delivers_and_confirms() {
    let catalog: LocationCatalog = LocationCatalog::builtin();
    let gateway: Arc<RecordingGateway> = Arc::new(RecordingGateway::default());
    let submitter: ReservationSubmitter = create_test_submitter(Arc::clone(&gateway));
    let mut flow: BookingFlow = create_complete_flow(&catalog);

    let confirmation: Confirmation = flow.submit(&catalog, &submitter, MONDAY).await.unwrap();

    assert_eq!(confirmation.resolved_date, "samedi 24 octobre 2026");
    assert_eq!(gateway.sent().len(), 2);
    assert_eq!(flow.state(), &BookingFlowState::new());
}

#[tokio::test]
async fn test_submit_failure_allows_retry() {
    let catalog: LocationCatalog = LocationCatalog::builtin();
    let gateway: Arc<RecordingGateway> = Arc::new(RecordingGateway::failing_on(2));
    let submitter: ReservationSubmitter = create_test_submitter(Arc::clone(&gateway));
    let mut flow: BookingFlow = create_complete_flow(&catalog);

    let err: ApiError = flow
        .submit(&catalog, &submitter, MONDAY)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::SubmissionFailed { .. }));
    assert_eq!(flow.error_message(), Some(SUBMISSION_FAILURE_MESSAGE));

    // Third and fourth sends succeed.
    let confirmation: Confirmation = flow.submit(&catalog, &submitter, MONDAY).await.unwrap();
    assert_eq!(confirmation.venue_name, "ATP Les Ulis");
    assert!(flow.error_message().is_none());
    assert_eq!(gateway.sent().len(), 4);
}
