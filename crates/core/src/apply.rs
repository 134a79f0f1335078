// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::availability::{ResolvedSlot, resolve_slots};
use crate::command::Command;
use crate::error::CoreError;
use crate::selection::{SelectionOutcome, SlotSelectionState};
use crate::state::{BookingFlowState, Transition, TransitionResult};
use atp_trial_domain::LocationCatalog;
use time::Date;
use tracing::{debug, info};

/// Applies a command to the current state, producing a new state.
///
/// # Arguments
///
/// * `catalog` - The reference data slots are resolved against
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `today` - The current date, used to resolve class dates
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and what changed
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A `SelectSlot` names a slot that is not in the resolved list
/// - The class date cannot be computed
pub fn apply(
    catalog: &LocationCatalog,
    state: &BookingFlowState,
    command: Command,
    today: Date,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::SelectVenue { venue_id } => {
            info!(venue = ?venue_id.as_ref().map(ToString::to_string), "Venue selected");

            let new_state: BookingFlowState = BookingFlowState {
                venue_id,
                course_category_id: None,
                selection: SlotSelectionState::default(),
                contact: state.contact.clone(),
            };

            Ok(TransitionResult {
                new_state,
                transition: Transition::VenueChanged,
            })
        }
        Command::SelectCourseCategory { course_category_id } => {
            let slots: Vec<ResolvedSlot> = match (&state.venue_id, &course_category_id) {
                (Some(venue), Some(category)) => resolve_slots(catalog, venue, category),
                (None, Some(_)) => {
                    debug!("Course category selected without a venue; no slots offered");
                    Vec::new()
                }
                _ => Vec::new(),
            };
            let slot_count: usize = slots.len();
            info!(
                course_category = ?course_category_id.as_ref().map(ToString::to_string),
                slot_count,
                "Course category selected"
            );

            let new_state: BookingFlowState = BookingFlowState {
                venue_id: state.venue_id.clone(),
                course_category_id,
                selection: SlotSelectionState::new(slots),
                contact: state.contact.clone(),
            };

            Ok(TransitionResult {
                new_state,
                transition: Transition::CourseCategoryChanged { slot_count },
            })
        }
        Command::SelectSlot {
            weekday,
            time_range,
        } => {
            let mut new_state: BookingFlowState = state.clone();
            let outcome: SelectionOutcome =
                new_state.selection.select(weekday, time_range, today)?;

            let transition: Transition = match outcome {
                SelectionOutcome::Selected(selection) => {
                    info!(
                        weekday = %selection.weekday,
                        time_range = %selection.time_range,
                        date = %selection.resolved_date,
                        "Slot selected"
                    );
                    Transition::SlotSelected(selection)
                }
                SelectionOutcome::Deselected => {
                    info!(weekday = %weekday, time_range = %time_range, "Slot deselected");
                    Transition::SlotDeselected
                }
            };

            Ok(TransitionResult {
                new_state,
                transition,
            })
        }
        Command::UpdateContact(contact) => {
            debug!("Contact fields updated");
            let mut new_state: BookingFlowState = state.clone();
            new_state.contact = contact;

            Ok(TransitionResult {
                new_state,
                transition: Transition::ContactUpdated,
            })
        }
        Command::Reset => {
            debug!("Booking form reset");
            Ok(TransitionResult {
                new_state: BookingFlowState::new(),
                transition: Transition::Reset,
            })
        }
    }
}
