use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str_round_trip() {
    for role in Role::ALL {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_unknown_role_is_rejected() {
    let err = Role::from_str("superuser").unwrap_err();
    assert!(matches!(err, CoreError::InvalidRole { value, .. } if value == "superuser"));
}

#[test]
fn test_parse_lenient_defaults_to_viewer() {
    assert_eq!(Role::parse_lenient("owner"), Role::Owner);
    assert_eq!(Role::parse_lenient("superuser"), Role::Viewer);
    assert_eq!(Role::parse_lenient(""), Role::Viewer);
}

#[test]
fn test_precedence_is_strictly_ordered() {
    assert_eq!(Role::Owner.precedence(), 3);
    assert_eq!(Role::Admin.precedence(), 2);
    assert_eq!(Role::Editor.precedence(), 1);
    assert_eq!(Role::Viewer.precedence(), 0);

    assert!(Role::Owner.precedence() > Role::Admin.precedence());
    assert!(Role::Admin.precedence() > Role::Editor.precedence());
    assert!(Role::Editor.precedence() > Role::Viewer.precedence());
}

#[test]
fn test_descriptions_are_distinct() {
    for a in Role::ALL {
        for b in Role::ALL {
            if a != b {
                assert_ne!(a.description(), b.description());
            }
        }
    }
}

#[test]
fn test_role_serializes_to_stored_string() {
    let value = serde_json::to_value(Role::Editor).unwrap();
    assert_eq!(value, serde_json::json!("editor"));
}

#[test]
fn test_unknown_role_deserializes_as_viewer() {
    let role: Role = serde_json::from_value(serde_json::json!("superuser")).unwrap();
    assert_eq!(role, Role::Viewer);
}
