use crate::models::permission::Permission;
use crate::models::role::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Confirmed membership of a user on one project, keyed by
/// (project_id, user_id). The project owner is resolved from project
/// metadata and never appears as a collaborator row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collaborator {
    pub project_id: Uuid,
    pub user_id: Uuid,
    pub email: String,
    pub display_name: String,
    pub role: Role,
    pub added_at: DateTime<Utc>,
    /// User who granted membership (the inviter for accepted invitations)
    pub added_by: Uuid,
}

impl Collaborator {
    pub fn new(
        project_id: Uuid,
        user_id: Uuid,
        email: String,
        display_name: String,
        role: Role,
        added_by: Uuid,
    ) -> Self {
        Self {
            project_id,
            user_id,
            email,
            display_name,
            role,
            added_at: Utc::now(),
            added_by,
        }
    }

    pub fn has_permission(&self, required: Permission) -> bool {
        self.role.allows(required)
    }
}
