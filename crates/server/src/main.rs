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
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod clock;
mod registry;

use atp_trial::{Command, ReservationRequest};
use atp_trial_api::{
    ApiError, BookingFlow, Confirmation, ConfirmationResponse, ContactMessageRequest,
    ContactMessageResponse, FlowResponse, ListCourseCategoriesResponse, ListSlotsResponse,
    ListVenuesResponse, RegistrationRequest, RegistrationResponse, ReservationSubmitter,
    SelectCourseCategoryRequest, SelectSlotRequest, SelectVenueRequest, SubmissionError,
    UpdateContactRequest, ValidationResponse, confirmation_response, flow_response,
    list_course_categories, list_slots, list_venues, select_course_category_command,
    select_slot_command, select_venue_command, send_contact_message, send_registration,
    update_contact_command, validation_response,
};
use atp_trial_domain::LocationCatalog;
use atp_trial_notify::{NotificationConfig, TemplatePair, TracingGateway};
use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use clap::Parser;
use clock::Clock;
use registry::FlowRegistry;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use time::Date;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// ATP Trial Server - HTTP server for trial class booking
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Messaging service account used for every notification
    #[arg(long, default_value = "gmail_id")]
    service_id: String,

    /// Template for trial requests sent to the club
    #[arg(long, default_value = "contact_id_admin")]
    trial_operator_template: String,

    /// Template for trial confirmations sent to the requester
    #[arg(long, default_value = "contact_id_user")]
    trial_requester_template: String,

    /// Template for contact messages sent to the club
    #[arg(long, default_value = "template_contact_admin")]
    contact_operator_template: String,

    /// Template for contact message copies sent to the sender
    #[arg(long, default_value = "template_contact_user")]
    contact_requester_template: String,

    /// Template for registrations sent to the club
    #[arg(long, default_value = "template_registration_admin")]
    registration_operator_template: String,

    /// Template for registration copies sent to the requester
    #[arg(long, default_value = "template_registration_user")]
    registration_requester_template: String,

    /// Address the club's notifications are sent to
    #[arg(long)]
    operator_email: Option<String>,

    /// Minutes a booking flow may go unused before it is discarded
    #[arg(long, default_value_t = 30)]
    flow_idle_minutes: u32,

    /// The club's offset from UTC in hours, used to compute today's date
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    utc_offset_hours: i8,
}

impl Args {
    fn notification_config(&self) -> NotificationConfig {
        NotificationConfig {
            service_id: self.service_id.clone(),
            trial: TemplatePair::new(&self.trial_operator_template, &self.trial_requester_template),
            contact: TemplatePair::new(
                &self.contact_operator_template,
                &self.contact_requester_template,
            ),
            registration: TemplatePair::new(
                &self.registration_operator_template,
                &self.registration_requester_template,
            ),
            operator_email: self.operator_email.clone(),
        }
    }

    fn flow_idle_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.flow_idle_minutes) * 60)
    }
}

/// Application state shared across handlers.
///
/// Each booking flow is owned by the registry; the registry lock is never
/// held while notifications are in flight.
#[derive(Clone)]
struct AppState {
    /// The club's reference data.
    catalog: Arc<LocationCatalog>,
    /// Sends submissions through the notification gateway.
    submitter: ReservationSubmitter,
    /// Open booking flows.
    flows: Arc<Mutex<FlowRegistry>>,
    /// The source of today's date.
    clock: Clock,
}

impl AppState {
    fn new(
        catalog: LocationCatalog,
        submitter: ReservationSubmitter,
        clock: Clock,
        flow_idle_timeout: Duration,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            submitter,
            flows: Arc::new(Mutex::new(FlowRegistry::new(flow_idle_timeout))),
            clock,
        }
    }
}

/// API response for the health check.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always `ok` when the server answers.
    status: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
    /// Every violated constraint, for validation failures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    messages: Vec<String>,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
    /// Per-field messages, when there are any.
    messages: Vec<String>,
}

impl HttpError {
    const fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            messages: Vec::new(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
            messages: self.messages,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self::new(StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::ResourceNotFound { .. } => Self::new(StatusCode::NOT_FOUND, err.to_string()),
            ApiError::DomainRuleViolation { .. } => {
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            ApiError::ValidationFailed { ref messages } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                messages: messages.clone(),
                message: err.to_string(),
            },
            ApiError::SubmissionInProgress => Self::new(StatusCode::CONFLICT, err.to_string()),
            ApiError::SubmissionFailed { message } => Self::new(StatusCode::BAD_GATEWAY, message),
        }
    }
}

fn flow_not_found(flow_id: u64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Booking flow"),
        message: format!("Booking flow {flow_id} does not exist"),
    }
}

/// Applies a command to one flow and describes the result.
async fn apply_to_flow(
    app_state: &AppState,
    flow_id: u64,
    command: Command,
) -> Result<Json<FlowResponse>, HttpError> {
    let today: Date = app_state.clock.today();
    let mut flows = app_state.flows.lock().await;
    let flow: &mut BookingFlow = flows
        .touch(flow_id, Instant::now())
        .ok_or_else(|| flow_not_found(flow_id))?;
    flow.apply(&app_state.catalog, command, today)?;
    Ok(Json(flow_response(&app_state.catalog, flow_id, flow)))
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for GET `/venues` endpoint.
///
/// Lists the venues that offer at least one course category.
async fn handle_list_venues(AxumState(app_state): AxumState<AppState>) -> Json<ListVenuesResponse> {
    info!("Handling list_venues request");
    Json(list_venues(&app_state.catalog))
}

/// Handler for GET `/venues/{venue_id}/course_categories` endpoint.
async fn handle_list_course_categories(
    AxumState(app_state): AxumState<AppState>,
    Path(venue_id): Path<String>,
) -> Json<ListCourseCategoriesResponse> {
    info!(venue_id = %venue_id, "Handling list_course_categories request");
    Json(list_course_categories(&app_state.catalog, &venue_id))
}

/// Handler for GET `/venues/{venue_id}/course_categories/{course_category_id}/slots` endpoint.
async fn handle_list_slots(
    AxumState(app_state): AxumState<AppState>,
    Path((venue_id, course_category_id)): Path<(String, String)>,
) -> Json<ListSlotsResponse> {
    info!(
        venue_id = %venue_id,
        course_category_id = %course_category_id,
        "Handling list_slots request"
    );
    Json(list_slots(&app_state.catalog, &venue_id, &course_category_id))
}

/// Handler for POST `/flows` endpoint.
///
/// Opens a new, empty booking flow.
async fn handle_create_flow(
    AxumState(app_state): AxumState<AppState>,
) -> (StatusCode, Json<FlowResponse>) {
    let mut flows = app_state.flows.lock().await;
    let (flow_id, flow) = flows.open(Instant::now());
    let response: FlowResponse = flow_response(&app_state.catalog, flow_id, flow);
    let open: usize = flows.len();
    drop(flows);

    info!(flow_id, open, "Booking flow created");
    (StatusCode::CREATED, Json(response))
}

/// Handler for GET `/flows/{flow_id}` endpoint.
async fn handle_get_flow(
    AxumState(app_state): AxumState<AppState>,
    Path(flow_id): Path<u64>,
) -> Result<Json<FlowResponse>, HttpError> {
    let mut flows = app_state.flows.lock().await;
    let flow: &BookingFlow = flows
        .touch(flow_id, Instant::now())
        .ok_or_else(|| flow_not_found(flow_id))?;
    Ok(Json(flow_response(&app_state.catalog, flow_id, flow)))
}

/// Handler for DELETE `/flows/{flow_id}` endpoint.
///
/// A flow cannot be discarded while its submission is running.
async fn handle_delete_flow(
    AxumState(app_state): AxumState<AppState>,
    Path(flow_id): Path<u64>,
) -> Result<StatusCode, HttpError> {
    let mut flows = app_state.flows.lock().await;
    let flow: &BookingFlow = flows
        .touch(flow_id, Instant::now())
        .ok_or_else(|| flow_not_found(flow_id))?;
    if flow.is_submitting() {
        return Err(ApiError::SubmissionInProgress.into());
    }
    flows.remove(flow_id);
    drop(flows);

    info!(flow_id, "Booking flow discarded");
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for POST `/flows/{flow_id}/venue` endpoint.
async fn handle_select_venue(
    AxumState(app_state): AxumState<AppState>,
    Path(flow_id): Path<u64>,
    Json(req): Json<SelectVenueRequest>,
) -> Result<Json<FlowResponse>, HttpError> {
    let command: Command = select_venue_command(&app_state.catalog, &req)?;
    apply_to_flow(&app_state, flow_id, command).await
}

/// Handler for POST `/flows/{flow_id}/course_category` endpoint.
async fn handle_select_course_category(
    AxumState(app_state): AxumState<AppState>,
    Path(flow_id): Path<u64>,
    Json(req): Json<SelectCourseCategoryRequest>,
) -> Result<Json<FlowResponse>, HttpError> {
    let command: Command = select_course_category_command(&app_state.catalog, &req)?;
    apply_to_flow(&app_state, flow_id, command).await
}

/// Handler for POST `/flows/{flow_id}/slot` endpoint.
///
/// Picks a slot, or releases it when it is already picked.
async fn handle_select_slot(
    AxumState(app_state): AxumState<AppState>,
    Path(flow_id): Path<u64>,
    Json(req): Json<SelectSlotRequest>,
) -> Result<Json<FlowResponse>, HttpError> {
    let command: Command = select_slot_command(&req)?;
    apply_to_flow(&app_state, flow_id, command).await
}

/// Handler for PUT `/flows/{flow_id}/contact` endpoint.
async fn handle_update_contact(
    AxumState(app_state): AxumState<AppState>,
    Path(flow_id): Path<u64>,
    Json(req): Json<UpdateContactRequest>,
) -> Result<Json<FlowResponse>, HttpError> {
    let command: Command = update_contact_command(&req)?;
    apply_to_flow(&app_state, flow_id, command).await
}

/// Handler for GET `/flows/{flow_id}/validation` endpoint.
async fn handle_validate_flow(
    AxumState(app_state): AxumState<AppState>,
    Path(flow_id): Path<u64>,
) -> Result<Json<ValidationResponse>, HttpError> {
    let today: Date = app_state.clock.today();
    let mut flows = app_state.flows.lock().await;
    let flow: &BookingFlow = flows
        .touch(flow_id, Instant::now())
        .ok_or_else(|| flow_not_found(flow_id))?;
    Ok(Json(validation_response(&flow.validate(today))))
}

/// Handler for POST `/flows/{flow_id}/submit` endpoint.
///
/// The request is frozen under the registry lock, dispatched without it,
/// and the outcome recorded under the lock again. Dispatch and recording
/// run on their own task, so they complete even if the client goes away.
async fn handle_submit_flow(
    AxumState(app_state): AxumState<AppState>,
    Path(flow_id): Path<u64>,
) -> Result<Json<ConfirmationResponse>, HttpError> {
    let today: Date = app_state.clock.today();
    let request: ReservationRequest = {
        let mut flows = app_state.flows.lock().await;
        let flow: &mut BookingFlow = flows
            .touch(flow_id, Instant::now())
            .ok_or_else(|| flow_not_found(flow_id))?;
        flow.begin_submission(&app_state.catalog, today)?
    };

    info!(flow_id, "Submitting booking flow");
    let submission: JoinHandle<Result<Confirmation, ApiError>> = tokio::spawn(async move {
        let result: Result<Confirmation, SubmissionError> =
            app_state.submitter.submit(&request).await;

        let mut flows = app_state.flows.lock().await;
        let Some(flow) = flows.get_mut(flow_id) else {
            warn!(flow_id, "Booking flow vanished during submission");
            return Err(flow_not_found(flow_id));
        };
        flow.finish_submission(result)
    });

    let confirmation: Confirmation = submission.await.map_err(|err| {
        error!(flow_id, error = %err, "Submission task did not complete");
        HttpError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            String::from("Submission task did not complete"),
        )
    })??;

    Ok(Json(confirmation_response(&confirmation)))
}

/// Handler for POST `/flows/{flow_id}/acknowledge` endpoint.
///
/// Dismisses the confirmation of the last submission.
async fn handle_acknowledge_flow(
    AxumState(app_state): AxumState<AppState>,
    Path(flow_id): Path<u64>,
) -> Result<Json<FlowResponse>, HttpError> {
    let mut flows = app_state.flows.lock().await;
    let flow: &mut BookingFlow = flows
        .touch(flow_id, Instant::now())
        .ok_or_else(|| flow_not_found(flow_id))?;
    flow.acknowledge();
    Ok(Json(flow_response(&app_state.catalog, flow_id, flow)))
}

/// Handler for POST `/contact` endpoint.
async fn handle_contact(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ContactMessageRequest>,
) -> Result<Json<ContactMessageResponse>, HttpError> {
    info!("Handling contact request");
    let response: ContactMessageResponse = send_contact_message(&app_state.submitter, &req).await?;
    Ok(Json(response))
}

/// Handler for POST `/registrations` endpoint.
async fn handle_registration(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RegistrationRequest>,
) -> Result<Json<RegistrationResponse>, HttpError> {
    info!("Handling registration request");
    let today: Date = app_state.clock.today();
    let response: RegistrationResponse =
        send_registration(&app_state.catalog, &app_state.submitter, &req, today).await?;
    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/venues", get(handle_list_venues))
        .route(
            "/venues/{venue_id}/course_categories",
            get(handle_list_course_categories),
        )
        .route(
            "/venues/{venue_id}/course_categories/{course_category_id}/slots",
            get(handle_list_slots),
        )
        .route("/flows", post(handle_create_flow))
        .route(
            "/flows/{flow_id}",
            get(handle_get_flow).delete(handle_delete_flow),
        )
        .route("/flows/{flow_id}/venue", post(handle_select_venue))
        .route(
            "/flows/{flow_id}/course_category",
            post(handle_select_course_category),
        )
        .route("/flows/{flow_id}/slot", post(handle_select_slot))
        .route("/flows/{flow_id}/contact", put(handle_update_contact))
        .route("/flows/{flow_id}/validation", get(handle_validate_flow))
        .route("/flows/{flow_id}/submit", post(handle_submit_flow))
        .route("/flows/{flow_id}/acknowledge", post(handle_acknowledge_flow))
        .route("/contact", post(handle_contact))
        .route("/registrations", post(handle_registration))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing ATP Trial Server");

    let catalog: LocationCatalog = LocationCatalog::builtin();
    catalog.check_consistency()?;
    info!(venues = catalog.venues().len(), "Catalog loaded");

    let config: NotificationConfig = args.notification_config();
    info!(service_id = %config.service_id, "Notifications are logged by the tracing gateway");
    let submitter: ReservationSubmitter = ReservationSubmitter::new(TracingGateway::shared(), config);

    let clock: Clock = Clock::system(args.utc_offset_hours)?;
    let app_state: AppState =
        AppState::new(catalog, submitter, clock, args.flow_idle_timeout());

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
