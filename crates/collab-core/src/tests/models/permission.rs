use crate::{Permission, PermissionSet, Role};

use crate::Permission::*;

/// The fixed role → permission table, row by row.
fn expected(role: Role, permission: Permission) -> bool {
    match (role, permission) {
        (Role::Owner | Role::Admin, _) => true,
        (Role::Editor, CanEdit | CanExport | CanViewAnalytics) => true,
        (Role::Editor, _) => false,
        (Role::Viewer, _) => false,
    }
}

#[test]
fn test_permission_table_is_total_and_exact() {
    for role in Role::ALL {
        for permission in Permission::ALL {
            assert_eq!(
                role.allows(permission),
                expected(role, permission),
                "({role}, {permission})"
            );
        }
    }
}

#[test]
fn test_owner_and_admin_hold_every_permission() {
    for permission in Permission::ALL {
        assert!(Role::Owner.allows(permission));
        assert!(Role::Admin.allows(permission));
    }
}

#[test]
fn test_viewer_holds_no_permission() {
    for permission in Permission::ALL {
        assert!(!Role::Viewer.allows(permission));
    }
}

#[test]
fn test_editor_cannot_manage() {
    assert!(Role::Editor.allows(CanEdit));
    assert!(Role::Editor.allows(CanExport));
    assert!(Role::Editor.allows(CanViewAnalytics));
    assert!(!Role::Editor.allows(CanDelete));
    assert!(!Role::Editor.allows(CanInvite));
    assert!(!Role::Editor.allows(CanManageTeam));
    assert!(!Role::Editor.allows(CanManagePayments));
}

#[test]
fn test_permission_set_fields_match_allows() {
    for role in Role::ALL {
        let set = PermissionSet::for_role(role);
        assert_eq!(set.can_edit, role.allows(CanEdit));
        assert_eq!(set.can_delete, role.allows(CanDelete));
        assert_eq!(set.can_invite, role.allows(CanInvite));
        assert_eq!(set.can_manage_team, role.allows(CanManageTeam));
        assert_eq!(set.can_export, role.allows(CanExport));
        assert_eq!(set.can_manage_payments, role.allows(CanManagePayments));
        assert_eq!(set.can_view_analytics, role.allows(CanViewAnalytics));
    }
}
