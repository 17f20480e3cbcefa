//! Notification boundary for state transitions.
//!
//! The services emit events after a successful mutation; delivery (in-app
//! documents, e-mail) lives behind the `Notifier` trait. Emission is
//! best-effort: a delivery failure is logged and swallowed, it never fails
//! the operation that produced the event.

use collab_core::{Invitation, Role};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// Invitee-facing: a new invitation is waiting for a response.
    InvitationCreated { invitation: Invitation },
    /// Target-facing: this user's role on the project was changed.
    RoleChanged {
        project_id: Uuid,
        user_id: Uuid,
        new_role: Role,
        changed_by: Uuid,
    },
    /// Changer-facing: confirmation that the role change was applied.
    RoleChangeConfirmed {
        project_id: Uuid,
        user_id: Uuid,
        new_role: Role,
        changed_by: Uuid,
    },
}

#[derive(Error, Debug)]
#[error("Notification delivery failed: {message} {location}")]
pub struct NotifyError {
    pub message: String,
    pub location: ErrorLocation,
}

impl NotifyError {
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &Notification) -> std::result::Result<(), NotifyError>;
}

/// Discards every notification. For embedders that route messaging
/// elsewhere and for tests that do not observe delivery.
#[derive(Debug, Default)]
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn notify(&self, _notification: &Notification) -> std::result::Result<(), NotifyError> {
        Ok(())
    }
}

/// Fire-and-forget emission used by the services.
pub(crate) async fn emit(notifier: &dyn Notifier, notification: Notification) {
    if let Err(e) = notifier.notify(&notification).await {
        log::warn!("Dropping undeliverable notification: {e}");
    }
}
