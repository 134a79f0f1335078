// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Exclusive slot selection over a resolved slot list.
//!
//! ## Invariants
//!
//! - At most one slot is chosen
//! - With no chosen slot, every slot is available
//! - With a chosen slot, only that slot is available
//! - A chosen slot always carries its resolved calendar date
//!
//! Exclusivity is a single-choice affordance. It says nothing about seat
//! capacity.

use crate::availability::ResolvedSlot;
use crate::error::CoreError;
use atp_trial_domain::{DomainError, TimeRange, Weekday};
use time::{Date, Duration};

/// The slot a visitor picked and the date of their trial class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSelection {
    /// The chosen weekday.
    pub weekday: Weekday,
    /// The chosen time range.
    pub time_range: TimeRange,
    /// The concrete date the trial class takes place on.
    pub resolved_date: Date,
}

/// What a call to [`SlotSelectionState::select`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The slot became the chosen one.
    Selected(SlotSelection),
    /// The already chosen slot was picked again and is no longer chosen.
    Deselected,
}

/// Resolves the date of the next class on `target`, counting from `today`.
///
/// A class on today's weekday resolves to today rather than next week.
///
/// # Errors
///
/// Returns an error if the date would fall outside the supported calendar.
pub fn resolve_calendar_date(today: Date, target: Weekday) -> Result<Date, DomainError> {
    let offset: u8 = target.days_after(Weekday::from(today.weekday()));
    if offset == 0 {
        return Ok(today);
    }
    today
        .checked_add(Duration::days(i64::from(offset)))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("adding {offset} days to {today}"),
        })
}

/// The resolved slot list together with the visitor's choice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotSelectionState {
    slots: Vec<ResolvedSlot>,
    chosen: Option<SlotSelection>,
}

impl SlotSelectionState {
    /// Starts a selection over freshly resolved slots, nothing chosen.
    #[must_use]
    pub fn new(slots: Vec<ResolvedSlot>) -> Self {
        let mut state: Self = Self {
            slots,
            chosen: None,
        };
        state.mark_all_available();
        state
    }

    /// The slots in display order, with their availability flags.
    #[must_use]
    pub fn slots(&self) -> &[ResolvedSlot] {
        &self.slots
    }

    /// The chosen slot, if any.
    #[must_use]
    pub const fn chosen(&self) -> Option<&SlotSelection> {
        self.chosen.as_ref()
    }

    /// Picks a slot, or releases it when it is already the chosen one.
    ///
    /// Picking a different slot while one is chosen moves the choice.
    ///
    /// # Arguments
    ///
    /// * `weekday` - The weekday of the picked slot
    /// * `time_range` - The time range of the picked slot
    /// * `today` - The current date, used to resolve the class date
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The slot is not in the resolved list
    /// - The class date cannot be computed
    ///
    /// The state is unchanged on error.
    pub fn select(
        &mut self,
        weekday: Weekday,
        time_range: TimeRange,
        today: Date,
    ) -> Result<SelectionOutcome, CoreError> {
        if !self.slots.iter().any(|s| s.matches(weekday, time_range)) {
            return Err(CoreError::SlotNotOffered {
                weekday,
                time_range,
            });
        }

        let already_chosen: bool = self
            .chosen
            .is_some_and(|c| c.weekday == weekday && c.time_range == time_range);
        if already_chosen {
            self.clear();
            return Ok(SelectionOutcome::Deselected);
        }

        let resolved_date: Date = resolve_calendar_date(today, weekday)?;
        for slot in &mut self.slots {
            slot.is_available = slot.matches(weekday, time_range);
        }
        let selection: SlotSelection = SlotSelection {
            weekday,
            time_range,
            resolved_date,
        };
        self.chosen = Some(selection);
        Ok(SelectionOutcome::Selected(selection))
    }

    /// Drops the choice and makes every slot available again.
    pub fn clear(&mut self) {
        self.chosen = None;
        self.mark_all_available();
    }

    fn mark_all_available(&mut self) {
        for slot in &mut self.slots {
            slot.is_available = true;
        }
    }
}
