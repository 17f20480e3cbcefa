use crate::{Collaborator, Permission, ProjectAccess, Role};

use uuid::Uuid;

fn collaborator(role: Role) -> Collaborator {
    Collaborator::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        "guest@example.com".to_string(),
        "Guest".to_string(),
        role,
        Uuid::new_v4(),
    )
}

#[test]
fn test_collaborator_permission_follows_role() {
    assert!(collaborator(Role::Editor).has_permission(Permission::CanEdit));
    assert!(!collaborator(Role::Editor).has_permission(Permission::CanManageTeam));
    assert!(!collaborator(Role::Viewer).has_permission(Permission::CanEdit));
    assert!(collaborator(Role::Admin).has_permission(Permission::CanManagePayments));
}

#[test]
fn test_denied_access_grants_nothing() {
    let denied = ProjectAccess::denied();

    assert!(!denied.has_access);
    assert_eq!(denied.role, None);
    for permission in Permission::ALL {
        assert!(!denied.can(permission));
    }
}

#[test]
fn test_granted_access_checks_through_role() {
    let access = ProjectAccess::granted(Role::Editor);

    assert!(access.has_access);
    assert_eq!(access.role, Some(Role::Editor));
    assert!(access.can(Permission::CanExport));
    assert!(!access.can(Permission::CanDelete));
}
