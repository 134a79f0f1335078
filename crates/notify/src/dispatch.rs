// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::gateway::{NotificationError, NotificationGateway};
use crate::message::{NotificationMessage, Recipient};
use tracing::{error, info};

/// Raised when one or both messages of a pair were not delivered.
///
/// Per-recipient causes are logged rather than carried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} of 2 notifications failed", failed.len())]
pub struct PairDispatchError {
    /// The recipients whose message was not delivered.
    pub failed: Vec<Recipient>,
}

/// Sends an operator message and a requester message concurrently.
///
/// Both sends are always attempted, even when one fails early.
///
/// # Arguments
///
/// * `gateway` - The messaging service
/// * `service_id` - The messaging service account
/// * `operator` - The message for the club
/// * `requester` - The confirmation for the requester
///
/// # Errors
///
/// Returns an error naming every recipient whose message failed.
pub async fn dispatch_pair(
    gateway: &dyn NotificationGateway,
    service_id: &str,
    operator: &NotificationMessage,
    requester: &NotificationMessage,
) -> Result<(), PairDispatchError> {
    let (operator_result, requester_result) = futures::join!(
        gateway.send(service_id, &operator.template_id, &operator.params),
        gateway.send(service_id, &requester.template_id, &requester.params),
    );

    let mut failed: Vec<Recipient> = Vec::new();
    for (message, result) in [(operator, operator_result), (requester, requester_result)] {
        if let Err(err) = result {
            log_failure(message, &err);
            failed.push(message.recipient);
        }
    }

    if failed.is_empty() {
        info!(
            operator_template = %operator.template_id,
            requester_template = %requester.template_id,
            "Notification pair delivered"
        );
        Ok(())
    } else {
        Err(PairDispatchError { failed })
    }
}

fn log_failure(message: &NotificationMessage, err: &NotificationError) {
    error!(
        recipient = %message.recipient,
        template_id = %message.template_id,
        error = %err,
        "Notification failed"
    );
}
