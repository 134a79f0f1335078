// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{BookingFlow, ReservationSubmitter};
use atp_trial::Command;
use atp_trial_domain::{
    ContactDetails, CourseCategoryId, LocationCatalog, TimeRange, VenueId, Weekday,
};
use atp_trial_notify::{NotificationConfig, NotificationError, NotificationGateway, TemplateParams};
use futures::future::BoxFuture;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use time::Date;
use time::macros::date;

/// A Monday.
pub const MONDAY: Date = date!(2026 - 10 - 19);

/// Records every send and fails the nth one when told to.
#[derive(Debug, Default)]
pub struct RecordingGateway {
    fail_on_call: Option<usize>,
    calls: AtomicUsize,
    sent: Mutex<Vec<(String, TemplateParams)>>,
}

impl RecordingGateway {
    /// A gateway whose `call`th send (1-based) fails.
    pub fn failing_on(call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<(String, TemplateParams)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn params_for(&self, template_id: &str) -> TemplateParams {
        self.sent()
            .into_iter()
            .find(|(id, _)| id == template_id)
            .map(|(_, params)| params)
            .unwrap()
    }
}

impl NotificationGateway for RecordingGateway {
    fn send<'a>(
        &'a self,
        _service_id: &'a str,
        template_id: &'a str,
        params: &'a TemplateParams,
    ) -> BoxFuture<'a, Result<(), NotificationError>> {
        let call: usize = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        Box::pin(async move {
            self.sent
                .lock()
                .unwrap()
                .push((template_id.to_string(), params.clone()));
            if self.fail_on_call == Some(call) {
                return Err(NotificationError::Transport(String::from("connection reset")));
            }
            Ok(())
        })
    }
}

pub fn create_test_submitter(gateway: Arc<RecordingGateway>) -> ReservationSubmitter {
    ReservationSubmitter::new(gateway, NotificationConfig::default())
}

pub fn create_test_contact() -> ContactDetails {
    ContactDetails {
        name: String::from("Camille Martin"),
        email: String::from("camille@example.fr"),
        phone: String::from("06 12 34 56 78"),
        birth_date: Some(date!(2022 - 03 - 14)),
    }
}

/// A flow with Les Ulis, Baby Taekwondo 3 ans, Saturday 09h30 and a contact.
pub fn create_complete_flow(catalog: &LocationCatalog) -> BookingFlow {
    let mut flow: BookingFlow = BookingFlow::new();
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
        Command::UpdateContact(create_test_contact()),
    ];
    for command in commands {
        flow.apply(catalog, command, MONDAY).unwrap();
    }
    flow
}
