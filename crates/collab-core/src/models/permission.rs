use crate::models::role::Role;

use serde::{Deserialize, Serialize};

/// A single fine-grained capability, always derived from a role and never
/// stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    CanEdit,
    CanDelete,
    CanInvite,
    CanManageTeam,
    CanExport,
    CanManagePayments,
    CanViewAnalytics,
}

impl Permission {
    pub const ALL: [Permission; 7] = [
        Permission::CanEdit,
        Permission::CanDelete,
        Permission::CanInvite,
        Permission::CanManageTeam,
        Permission::CanExport,
        Permission::CanManagePayments,
        Permission::CanViewAnalytics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CanEdit => "can_edit",
            Self::CanDelete => "can_delete",
            Self::CanInvite => "can_invite",
            Self::CanManageTeam => "can_manage_team",
            Self::CanExport => "can_export",
            Self::CanManagePayments => "can_manage_payments",
            Self::CanViewAnalytics => "can_view_analytics",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The grants one role carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_invite: bool,
    pub can_manage_team: bool,
    pub can_export: bool,
    pub can_manage_payments: bool,
    pub can_view_analytics: bool,
}

impl PermissionSet {
    /// The fixed role → permission table.
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Owner | Role::Admin => Self {
                can_edit: true,
                can_delete: true,
                can_invite: true,
                can_manage_team: true,
                can_export: true,
                can_manage_payments: true,
                can_view_analytics: true,
            },
            Role::Editor => Self {
                can_edit: true,
                can_delete: false,
                can_invite: false,
                can_manage_team: false,
                can_export: true,
                can_manage_payments: false,
                can_view_analytics: true,
            },
            Role::Viewer => Self {
                can_edit: false,
                can_delete: false,
                can_invite: false,
                can_manage_team: false,
                can_export: false,
                can_manage_payments: false,
                can_view_analytics: false,
            },
        }
    }

    pub fn allows(&self, permission: Permission) -> bool {
        match permission {
            Permission::CanEdit => self.can_edit,
            Permission::CanDelete => self.can_delete,
            Permission::CanInvite => self.can_invite,
            Permission::CanManageTeam => self.can_manage_team,
            Permission::CanExport => self.can_export,
            Permission::CanManagePayments => self.can_manage_payments,
            Permission::CanViewAnalytics => self.can_view_analytics,
        }
    }
}
