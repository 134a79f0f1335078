// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// The operator and requester templates of one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePair {
    /// Template for the message sent to the club.
    pub operator_template_id: String,
    /// Template for the confirmation sent to the requester.
    pub requester_template_id: String,
}

impl TemplatePair {
    /// Creates a new template pair.
    #[must_use]
    pub fn new(operator_template_id: &str, requester_template_id: &str) -> Self {
        Self {
            operator_template_id: operator_template_id.to_string(),
            requester_template_id: requester_template_id.to_string(),
        }
    }
}

/// Where and how notifications are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationConfig {
    /// The messaging service account used for every message.
    pub service_id: String,
    /// Templates for trial class requests.
    pub trial: TemplatePair,
    /// Templates for contact form messages.
    pub contact: TemplatePair,
    /// Templates for season registrations.
    pub registration: TemplatePair,
    /// Explicit operator address. When `None`, the operator templates
    /// carry their own recipient.
    pub operator_email: Option<String>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            service_id: String::from("gmail_id"),
            trial: TemplatePair::new("contact_id_admin", "contact_id_user"),
            contact: TemplatePair::new("template_contact_admin", "template_contact_user"),
            registration: TemplatePair::new(
                "template_registration_admin",
                "template_registration_user",
            ),
            operator_email: None,
        }
    }
}
