// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

/// Template variables, by name.
pub type TemplateParams = BTreeMap<String, String>;

/// Who a notification is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recipient {
    /// The club operator handling requests.
    Operator,
    /// The person who filled in the form.
    Requester,
}

impl Recipient {
    /// Converts this recipient to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Operator => "operator",
            Self::Requester => "requester",
        }
    }
}

impl std::fmt::Display for Recipient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One templated message, ready for a gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    /// Who the message is for.
    pub recipient: Recipient,
    /// The template rendering the message.
    pub template_id: String,
    /// Values substituted into the template.
    pub params: TemplateParams,
}

impl NotificationMessage {
    /// Creates a new message with no parameters.
    #[must_use]
    pub fn new(recipient: Recipient, template_id: &str) -> Self {
        Self {
            recipient,
            template_id: template_id.to_string(),
            params: TemplateParams::new(),
        }
    }

    /// Adds a template parameter.
    #[must_use]
    pub fn with_param(mut self, name: &str, value: impl Into<String>) -> Self {
        self.params.insert(name.to_string(), value.into());
        self
    }

    /// Looks up a template parameter.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}
