// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::message::TemplateParams;
use futures::future::BoxFuture;
use std::sync::Arc;
use tracing::info;

/// Why a gateway could not deliver a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotificationError {
    /// The service refused the template or its parameters.
    #[error("template {template_id} was rejected: {reason}")]
    Rejected {
        /// The template that was refused.
        template_id: String,
        /// What the service reported.
        reason: String,
    },
    /// The service could not be reached.
    #[error("notification service unreachable: {0}")]
    Transport(String),
}

/// A templated-message service.
///
/// Implementations resolve a template by identifier, substitute the
/// parameters and deliver the result. The trait is object safe so a
/// single gateway can be shared as `Arc<dyn NotificationGateway>`.
pub trait NotificationGateway: Send + Sync {
    /// Sends one templated message.
    ///
    /// # Arguments
    ///
    /// * `service_id` - The messaging service account
    /// * `template_id` - The template to render
    /// * `params` - Values substituted into the template
    ///
    /// # Errors
    ///
    /// Returns an error if the message could not be delivered.
    fn send<'a>(
        &'a self,
        service_id: &'a str,
        template_id: &'a str,
        params: &'a TemplateParams,
    ) -> BoxFuture<'a, Result<(), NotificationError>>;
}

/// A gateway that only logs what it would send.
///
/// Used when no real messaging service is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingGateway;

impl TracingGateway {
    /// Creates a new tracing gateway.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing.
    #[must_use]
    pub fn shared() -> Arc<dyn NotificationGateway> {
        Arc::new(Self::new())
    }
}

impl NotificationGateway for TracingGateway {
    fn send<'a>(
        &'a self,
        service_id: &'a str,
        template_id: &'a str,
        params: &'a TemplateParams,
    ) -> BoxFuture<'a, Result<(), NotificationError>> {
        Box::pin(async move {
            info!(
                service_id,
                template_id,
                param_count = params.len(),
                "Notification logged instead of sent"
            );
            Ok(())
        })
    }
}
