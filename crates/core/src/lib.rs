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

mod apply;
mod availability;
mod command;
mod error;
mod selection;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use availability::{ResolvedSlot, available_course_categories, resolve_slots};
pub use command::Command;
pub use error::CoreError;
pub use selection::{SelectionOutcome, SlotSelection, SlotSelectionState, resolve_calendar_date};
pub use state::{BookingFlowState, ReservationRequest, Transition, TransitionResult};
