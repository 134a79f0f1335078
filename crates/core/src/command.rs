// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use atp_trial_domain::{ContactDetails, CourseCategoryId, TimeRange, VenueId, Weekday};

/// A command represents visitor intent as data only.
///
/// Commands are the only way to request booking flow changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Pick a venue, or clear it with `None`.
    ///
    /// Discards any course category and slot choice.
    SelectVenue {
        /// The venue identifier.
        venue_id: Option<VenueId>,
    },
    /// Pick a course category, or clear it with `None`.
    ///
    /// Re-resolves the slot list and discards any slot choice. Accepted
    /// without a venue, in which case the slot list is empty until a venue
    /// is chosen and the category picked again.
    SelectCourseCategory {
        /// The course category identifier.
        course_category_id: Option<CourseCategoryId>,
    },
    /// Pick a slot, or release it if it is already picked.
    SelectSlot {
        /// The slot's weekday.
        weekday: Weekday,
        /// The slot's time range.
        time_range: TimeRange,
    },
    /// Replace the contact fields.
    UpdateContact(ContactDetails),
    /// Start over from an empty form.
    Reset,
}
