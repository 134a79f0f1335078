// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingFlowState, Command, TransitionResult, apply};
use atp_trial_domain::{
    ContactDetails, CourseCategoryId, LocationCatalog, TimeRange, VenueId, Weekday,
};
use std::str::FromStr;
use time::Date;
use time::macros::date;

/// A Monday.
pub const MONDAY: Date = date!(2026 - 10 - 19);
/// A Wednesday.
pub const WEDNESDAY: Date = date!(2026 - 10 - 21);

pub fn time_range(s: &str) -> TimeRange {
    TimeRange::from_str(s).unwrap()
}

pub fn create_test_contact() -> ContactDetails {
    ContactDetails {
        name: String::from("Camille Martin"),
        email: String::from("camille@example.fr"),
        phone: String::from("06 12 34 56 78"),
        birth_date: Some(date!(2022 - 03 - 14)),
    }
}

pub fn run(
    catalog: &LocationCatalog,
    state: &BookingFlowState,
    command: Command,
    today: Date,
) -> BookingFlowState {
    let result: TransitionResult = apply(catalog, state, command, today).unwrap();
    result.new_state
}

/// A state at `venue` with `category` selected and nothing else.
pub fn create_test_state(
    catalog: &LocationCatalog,
    venue: &str,
    category: &str,
) -> BookingFlowState {
    let state: BookingFlowState = run(
        catalog,
        &BookingFlowState::new(),
        Command::SelectVenue {
            venue_id: Some(VenueId::new(venue)),
        },
        MONDAY,
    );
    run(
        catalog,
        &state,
        Command::SelectCourseCategory {
            course_category_id: Some(CourseCategoryId::new(category)),
        },
        MONDAY,
    )
}

/// A fully filled form: Les Ulis, Baby Taekwondo 3 ans, Saturday 09h30.
pub fn create_complete_state(catalog: &LocationCatalog, today: Date) -> BookingFlowState {
    let state: BookingFlowState = create_test_state(catalog, "ulis", "baby_3");
    let state: BookingFlowState = run(
        catalog,
        &state,
        Command::SelectSlot {
            weekday: Weekday::Saturday,
            time_range: time_range("09h30-10h20"),
        },
        today,
    );
    run(
        catalog,
        &state,
        Command::UpdateContact(create_test_contact()),
        today,
    )
}
