// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Where the server's notion of "today" comes from.

use time::{Date, OffsetDateTime, UtcOffset};

/// The source of the current date used to resolve class dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// The system clock, read at a fixed offset from UTC.
    System {
        /// The club's offset from UTC.
        utc_offset: UtcOffset,
    },
    /// A fixed date.
    Fixed(Date),
}

impl Clock {
    /// Creates a system clock at a whole-hour offset from UTC.
    ///
    /// # Errors
    ///
    /// Returns an error if the offset is out of range.
    pub fn system(utc_offset_hours: i8) -> Result<Self, time::error::ComponentRange> {
        let utc_offset: UtcOffset = UtcOffset::from_hms(utc_offset_hours, 0, 0)?;
        Ok(Self::System { utc_offset })
    }

    /// The current date.
    #[must_use]
    pub fn today(&self) -> Date {
        match self {
            Self::System { utc_offset } => OffsetDateTime::now_utc().to_offset(*utc_offset).date(),
            Self::Fixed(date) => *date,
        }
    }
}
