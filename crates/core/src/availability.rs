// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Translation of catalog schedules into the slots a visitor can pick from.
//!
//! Lookups against identifiers the catalog does not know (for example a
//! venue id left over from a previous selection) yield empty results
//! instead of errors.

use atp_trial_domain::{
    CourseCategory, CourseCategoryId, LocationCatalog, ScheduleEntry, TimeRange, VenueId, Weekday,
};
use tracing::debug;

/// A schedule entry in display form, with its availability flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSlot {
    /// The day the class recurs on.
    pub weekday: Weekday,
    /// When the class runs.
    pub time_range: TimeRange,
    /// Whether the slot is currently offered to the visitor.
    pub is_available: bool,
}

impl ResolvedSlot {
    /// The localized weekday label (e.g. "Samedi").
    #[must_use]
    pub const fn weekday_label(&self) -> &'static str {
        self.weekday.label()
    }

    /// Checks whether this slot is the given weekday and time range.
    #[must_use]
    pub fn matches(&self, weekday: Weekday, time_range: TimeRange) -> bool {
        self.weekday == weekday && self.time_range == time_range
    }
}

impl From<&ScheduleEntry> for ResolvedSlot {
    fn from(entry: &ScheduleEntry) -> Self {
        Self {
            weekday: entry.weekday,
            time_range: entry.time_range,
            is_available: true,
        }
    }
}

/// Resolves the weekly slots of a course category at a venue.
///
/// Every returned slot is available. Order follows the catalog schedule.
///
/// # Returns
///
/// An empty vector when the venue is unknown or does not schedule the
/// category.
#[must_use]
pub fn resolve_slots(
    catalog: &LocationCatalog,
    venue_id: &VenueId,
    course_category_id: &CourseCategoryId,
) -> Vec<ResolvedSlot> {
    if catalog.venue(venue_id).is_none() {
        debug!(venue = %venue_id, "Unknown venue, no slots");
        return Vec::new();
    }

    catalog
        .schedule_for(venue_id, course_category_id)
        .map_or_else(
            || {
                debug!(
                    venue = %venue_id,
                    course_category = %course_category_id,
                    "Course category not scheduled at venue"
                );
                Vec::new()
            },
            |entries| entries.iter().map(ResolvedSlot::from).collect(),
        )
}

/// Lists the course categories offered at a venue, in catalog order.
///
/// Unknown and inactive venues offer nothing.
#[must_use]
pub fn available_course_categories<'a>(
    catalog: &'a LocationCatalog,
    venue_id: &VenueId,
) -> Vec<&'a CourseCategory> {
    let Some(venue) = catalog.venue(venue_id) else {
        debug!(venue = %venue_id, "Unknown venue, no course categories");
        return Vec::new();
    };

    catalog
        .course_categories()
        .iter()
        .filter(|category| venue.offers(&category.id))
        .collect()
}
