//! Invitation entity - an outstanding offer to join a project.

use crate::models::invitation_status::InvitationStatus;
use crate::models::role::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Input for creating an invitation. The inviter fields come from the
/// authenticated principal; no ambient user lookup happens downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvitation {
    pub project_id: Uuid,
    pub project_title: String,
    pub inviter_user_id: Uuid,
    pub inviter_name: String,
    pub inviter_email: String,
    pub invitee_email: String,
    pub invitee_name: Option<String>,
    pub role: Role,
    pub message: Option<String>,
}

/// An offer of membership with its own lifecycle, independent of actual
/// membership. A collaborator row only exists once an invitation was
/// accepted; resolved invitations are kept as history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: String,
    pub project_id: Uuid,
    /// Denormalized for display on the invitee's notification surface
    pub project_title: String,
    pub inviter_user_id: Uuid,
    pub inviter_name: String,
    pub inviter_email: String,
    pub invitee_email: String,
    pub invitee_name: Option<String>,
    pub role: Role,
    pub status: InvitationStatus,
    pub created_at: DateTime<Utc>,
    pub responded_at: Option<DateTime<Utc>>,
    pub message: Option<String>,
}

impl Invitation {
    /// Create a pending invitation with an id derived from project, invitee
    /// and creation time, so concurrent invites never collide on a key
    /// without needing a store transaction.
    pub fn new(new: NewInvitation) -> Self {
        let created_at = Utc::now();
        let id = Self::derive_id(new.project_id, &new.invitee_email, created_at);
        Self {
            id,
            project_id: new.project_id,
            project_title: new.project_title,
            inviter_user_id: new.inviter_user_id,
            inviter_name: new.inviter_name,
            inviter_email: new.inviter_email,
            invitee_email: new.invitee_email,
            invitee_name: new.invitee_name,
            role: new.role,
            status: InvitationStatus::Pending,
            created_at,
            responded_at: None,
            message: new.message,
        }
    }

    /// Stable id: `{project_id}_{invitee_email}_{millis}`.
    pub fn derive_id(project_id: Uuid, invitee_email: &str, created_at: DateTime<Utc>) -> String {
        format!(
            "{}_{}_{}",
            project_id,
            invitee_email,
            created_at.timestamp_millis()
        )
    }

    pub fn is_pending(&self) -> bool {
        self.status == InvitationStatus::Pending
    }
}
