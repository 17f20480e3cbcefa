use crate::models::permission::Permission;
use crate::models::role::Role;

use serde::{Deserialize, Serialize};

/// Result of an access query. Computed on demand from project ownership
/// metadata and the collaborator directory, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAccess {
    pub has_access: bool,
    pub role: Option<Role>,
}

impl ProjectAccess {
    pub fn granted(role: Role) -> Self {
        Self {
            has_access: true,
            role: Some(role),
        }
    }

    pub fn denied() -> Self {
        Self {
            has_access: false,
            role: None,
        }
    }

    /// Permission check through the resolved role. Denied access grants
    /// nothing.
    pub fn can(&self, permission: Permission) -> bool {
        match self.role {
            Some(role) if self.has_access => role.allows(permission),
            _ => false,
        }
    }
}
