// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Open booking flows, keyed by identifier.
//!
//! Flows that have not been touched for longer than the idle timeout are
//! evicted whenever the registry is accessed. A flow whose submission is
//! running is never evicted.

use atp_trial_api::BookingFlow;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug)]
struct FlowEntry {
    flow: BookingFlow,
    last_touched: Instant,
}

/// The booking flows currently open.
#[derive(Debug)]
pub struct FlowRegistry {
    entries: HashMap<u64, FlowEntry>,
    next_id: u64,
    idle_timeout: Duration,
}

impl FlowRegistry {
    /// Creates an empty registry.
    ///
    /// # Arguments
    ///
    /// * `idle_timeout` - How long a flow may go untouched before eviction
    #[must_use]
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            next_id: 1,
            idle_timeout,
        }
    }

    /// Opens a new, empty flow and returns its identifier.
    pub fn open(&mut self, now: Instant) -> (u64, &BookingFlow) {
        self.evict_idle(now);
        let flow_id: u64 = self.next_id;
        self.next_id += 1;
        let entry: &FlowEntry = self.entries.entry(flow_id).or_insert(FlowEntry {
            flow: BookingFlow::new(),
            last_touched: now,
        });
        (flow_id, &entry.flow)
    }

    /// Looks up a flow and marks it as used.
    pub fn touch(&mut self, flow_id: u64, now: Instant) -> Option<&mut BookingFlow> {
        self.evict_idle(now);
        self.entries.get_mut(&flow_id).map(|entry| {
            entry.last_touched = now;
            &mut entry.flow
        })
    }

    /// Looks up a flow without marking it as used.
    ///
    /// Used to record a submission outcome, which is not visitor activity.
    pub fn get_mut(&mut self, flow_id: u64) -> Option<&mut BookingFlow> {
        self.entries.get_mut(&flow_id).map(|entry| &mut entry.flow)
    }

    /// Removes a flow.
    pub fn remove(&mut self, flow_id: u64) -> Option<BookingFlow> {
        self.entries.remove(&flow_id).map(|entry| entry.flow)
    }

    /// Removes every idle flow that is not submitting.
    ///
    /// # Returns
    ///
    /// How many flows were evicted.
    pub fn evict_idle(&mut self, now: Instant) -> usize {
        let before: usize = self.entries.len();
        let idle_timeout: Duration = self.idle_timeout;
        self.entries.retain(|_, entry| {
            entry.flow.is_submitting()
                || now.saturating_duration_since(entry.last_touched) < idle_timeout
        });
        let evicted: usize = before - self.entries.len();
        if evicted > 0 {
            info!(evicted, open = self.entries.len(), "Idle booking flows evicted");
        }
        evicted
    }

    /// The number of open flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use atp_trial::Command;
    use atp_trial_domain::{
        ContactDetails, CourseCategoryId, LocationCatalog, TimeRange, VenueId, Weekday,
    };
    use std::str::FromStr;
    use time::Date;
    use time::macros::date;

    const IDLE: Duration = Duration::from_secs(30 * 60);

    #[test]
    fn test_open_assigns_increasing_identifiers() {
        let mut registry: FlowRegistry = FlowRegistry::new(IDLE);
        let now: Instant = Instant::now();

        let (first, _) = registry.open(now);
        let (second, _) = registry.open(now);

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_idle_flow_is_evicted_on_access() {
        let mut registry: FlowRegistry = FlowRegistry::new(IDLE);
        let start: Instant = Instant::now();
        let (flow_id, _) = registry.open(start);

        let later: Instant = start + IDLE + Duration::from_secs(1);

        assert!(registry.touch(flow_id, later).is_none());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_touch_keeps_flow_alive() {
        let mut registry: FlowRegistry = FlowRegistry::new(IDLE);
        let start: Instant = Instant::now();
        let (flow_id, _) = registry.open(start);

        let halfway: Instant = start + IDLE / 2;
        assert!(registry.touch(flow_id, halfway).is_some());

        let past_first_deadline: Instant = start + IDLE + Duration::from_secs(1);
        assert!(registry.touch(flow_id, past_first_deadline).is_some());
    }

    #[test]
    fn test_opening_a_flow_evicts_idle_ones() {
        let mut registry: FlowRegistry = FlowRegistry::new(IDLE);
        let start: Instant = Instant::now();
        registry.open(start);
        registry.open(start);

        let (flow_id, _) = registry.open(start + IDLE * 2);

        assert_eq!(registry.len(), 1);
        assert_eq!(flow_id, 3);
    }

    #[test]
    fn test_submitting_flow_is_never_evicted() {
        let catalog: LocationCatalog = LocationCatalog::builtin();
        let mut registry: FlowRegistry = FlowRegistry::new(IDLE);
        let start: Instant = Instant::now();
        let (flow_id, _) = registry.open(start);
        let today: Date = date!(2026 - 10 - 19);
        let flow: &mut BookingFlow = registry.touch(flow_id, start).unwrap();
        let commands: Vec<Command> = vec![
            Command::SelectVenue {
                venue_id: Some(VenueId::new("ulis")),
            },
            Command::SelectCourseCategory {
                course_category_id: Some(CourseCategoryId::new("baby_3")),
            },
            Command::SelectSlot {
                weekday: Weekday::Saturday,
                time_range: TimeRange::from_str("09h30-10h20").unwrap(),
            },
            Command::UpdateContact(ContactDetails {
                name: String::from("Camille Martin"),
                email: String::from("camille@example.fr"),
                phone: String::from("06 12 34 56 78"),
                birth_date: Some(date!(2022 - 03 - 14)),
            }),
        ];
        for command in commands {
            flow.apply(&catalog, command, today).unwrap();
        }
        flow.begin_submission(&catalog, today).unwrap();

        assert_eq!(registry.evict_idle(start + IDLE * 4), 0);
        assert!(registry.get_mut(flow_id).unwrap().is_submitting());
    }
}
