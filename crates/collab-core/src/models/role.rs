use crate::models::permission::{Permission, PermissionSet};
use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::result::Result as StdResult;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Access tier a user holds on a single project.
///
/// Roles are per-project tags, never global. Precedence only matters for
/// role-change validation: a principal may not raise a target above their
/// own tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Owner,
    Admin,
    Editor,
    Viewer,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Owner, Role::Admin, Role::Editor, Role::Viewer];

    /// Convert to stored string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::Viewer => "viewer",
        }
    }

    /// Parse a stored role, degrading unrecognized values to the most
    /// restrictive tier instead of failing open.
    pub fn parse_lenient(value: &str) -> Self {
        Role::from_str(value).unwrap_or(Role::Viewer)
    }

    /// Ordering used by role-change validation (owner highest).
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Owner => 3,
            Self::Admin => 2,
            Self::Editor => 1,
            Self::Viewer => 0,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Owner => "Full control of the project, including team, payments and deletion",
            Self::Admin => "Manage the team, invitations, payments and project content",
            Self::Editor => "Edit project content and export, no team or payment access",
            Self::Viewer => "Read-only access",
        }
    }

    /// Fixed permission set for this role.
    pub fn permissions(&self) -> PermissionSet {
        PermissionSet::for_role(*self)
    }

    /// Pure (role, permission) check. Total: every pair has an answer.
    pub fn allows(&self, permission: Permission) -> bool {
        self.permissions().allows(permission)
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "owner" => Ok(Self::Owner),
            "admin" => Ok(Self::Admin),
            "editor" => Ok(Self::Editor),
            "viewer" => Ok(Self::Viewer),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Roles written by unknown or future clients deserialize as viewer, so
/// data read back from the shared store can never grant more than it names.
impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Role::parse_lenient(&value))
    }
}
