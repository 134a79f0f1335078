// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Notification messages and the gateway they are sent through.
//!
//! The booking core never talks to a mail provider directly. It builds
//! [`NotificationMessage`]s and hands them to a [`NotificationGateway`],
//! which may be backed by any templated-message service.

mod config;
mod dispatch;
mod gateway;
mod message;

#[cfg(test)]
mod tests;

pub use config::{NotificationConfig, TemplatePair};
pub use dispatch::{PairDispatchError, dispatch_pair};
pub use gateway::{NotificationError, NotificationGateway, TracingGateway};
pub use message::{NotificationMessage, Recipient, TemplateParams};
