// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{NotificationError, NotificationGateway, TemplateParams};
use futures::future::BoxFuture;
use std::collections::BTreeSet;
use std::sync::Mutex;

/// One recorded call to [`ScriptedGateway::send`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub service_id: String,
    pub template_id: String,
    pub params: TemplateParams,
}

/// Records every send and rejects the templates it was told to.
#[derive(Debug, Default)]
pub struct ScriptedGateway {
    rejected_templates: BTreeSet<String>,
    sent: Mutex<Vec<SentMessage>>,
}

impl ScriptedGateway {
    pub fn rejecting(templates: &[&str]) -> Self {
        Self {
            rejected_templates: templates.iter().map(ToString::to_string).collect(),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl NotificationGateway for ScriptedGateway {
    fn send<'a>(
        &'a self,
        service_id: &'a str,
        template_id: &'a str,
        params: &'a TemplateParams,
    ) -> BoxFuture<'a, Result<(), NotificationError>> {
        Box::pin(async move {
            self.sent.lock().unwrap().push(SentMessage {
                service_id: service_id.to_string(),
                template_id: template_id.to_string(),
                params: params.clone(),
            });
            if self.rejected_templates.contains(template_id) {
                return Err(NotificationError::Rejected {
                    template_id: template_id.to_string(),
                    reason: String::from("scripted rejection"),
                });
            }
            Ok(())
        })
    }
}
