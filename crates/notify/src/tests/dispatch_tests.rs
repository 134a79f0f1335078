// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{ScriptedGateway, SentMessage};
use crate::{
    NotificationGateway, NotificationMessage, PairDispatchError, Recipient, TracingGateway,
    dispatch_pair,
};
use std::sync::Arc;

fn create_test_pair() -> (NotificationMessage, NotificationMessage) {
    let operator: NotificationMessage =
        NotificationMessage::new(Recipient::Operator, "admin_tpl").with_param("from_name", "Léa");
    let requester: NotificationMessage =
        NotificationMessage::new(Recipient::Requester, "user_tpl").with_param("to_name", "Léa");
    (operator, requester)
}

#[tokio::test]
async fn test_dispatch_pair_sends_both_messages() {
    let gateway: ScriptedGateway = ScriptedGateway::default();
    let (operator, requester) = create_test_pair();

    let result: Result<(), PairDispatchError> =
        dispatch_pair(&gateway, "svc", &operator, &requester).await;

    assert!(result.is_ok());
    let sent: Vec<SentMessage> = gateway.sent();
    assert_eq!(sent.len(), 2);
    assert!(sent.iter().all(|m| m.service_id == "svc"));
    let admin: &SentMessage = sent.iter().find(|m| m.template_id == "admin_tpl").unwrap();
    assert_eq!(admin.params.get("from_name").map(String::as_str), Some("Léa"));
    assert!(sent.iter().any(|m| m.template_id == "user_tpl"));
}

#[tokio::test]
async fn test_dispatch_pair_reports_requester_failure() {
    let gateway: ScriptedGateway = ScriptedGateway::rejecting(&["user_tpl"]);
    let (operator, requester) = create_test_pair();

    let err: PairDispatchError = dispatch_pair(&gateway, "svc", &operator, &requester)
        .await
        .unwrap_err();

    assert_eq!(err.failed, vec![Recipient::Requester]);
    // The operator message still went out.
    assert_eq!(gateway.sent().len(), 2);
}

#[tokio::test]
async fn test_dispatch_pair_reports_both_failures() {
    let gateway: ScriptedGateway = ScriptedGateway::rejecting(&["admin_tpl", "user_tpl"]);
    let (operator, requester) = create_test_pair();

    let err: PairDispatchError = dispatch_pair(&gateway, "svc", &operator, &requester)
        .await
        .unwrap_err();

    assert_eq!(err.failed, vec![Recipient::Operator, Recipient::Requester]);
    assert_eq!(err.to_string(), "2 of 2 notifications failed");
}

#[tokio::test]
async fn test_tracing_gateway_always_succeeds() {
    let gateway: Arc<dyn NotificationGateway> = TracingGateway::shared();
    let (operator, requester) = create_test_pair();

    let result: Result<(), PairDispatchError> =
        dispatch_pair(gateway.as_ref(), "svc", &operator, &requester).await;

    assert!(result.is_ok());
}
