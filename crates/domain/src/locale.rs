// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! French display formatting for dates shown to visitors.

use crate::weekday::Weekday;
use time::{Date, Month};

/// Lowercase French month name.
#[must_use]
pub const fn month_label(month: Month) -> &'static str {
    match month {
        Month::January => "janvier",
        Month::February => "février",
        Month::March => "mars",
        Month::April => "avril",
        Month::May => "mai",
        Month::June => "juin",
        Month::July => "juillet",
        Month::August => "août",
        Month::September => "septembre",
        Month::October => "octobre",
        Month::November => "novembre",
        Month::December => "décembre",
    }
}

/// Formats a date the way confirmations display it, e.g. `samedi 24 octobre 2026`.
#[must_use]
pub fn format_long_date(date: Date) -> String {
    let weekday: Weekday = Weekday::from(date.weekday());
    format!(
        "{} {} {} {}",
        weekday.label().to_lowercase(),
        date.day(),
        month_label(date.month()),
        date.year()
    )
}
