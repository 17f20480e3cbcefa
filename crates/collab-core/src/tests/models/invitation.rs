use crate::{Invitation, InvitationStatus, NewInvitation, Role};

use chrono::{TimeZone, Utc};
use uuid::Uuid;

fn new_invitation(role: Role) -> NewInvitation {
    NewInvitation {
        project_id: Uuid::new_v4(),
        project_title: "Midnight Draft".to_string(),
        inviter_user_id: Uuid::new_v4(),
        inviter_name: "Nok".to_string(),
        inviter_email: "nok@example.com".to_string(),
        invitee_email: "guest@example.com".to_string(),
        invitee_name: Some("Guest".to_string()),
        role,
        message: None,
    }
}

#[test]
fn test_new_invitation_starts_pending() {
    let invitation = Invitation::new(new_invitation(Role::Editor));

    assert_eq!(invitation.status, InvitationStatus::Pending);
    assert_eq!(invitation.role, Role::Editor);
    assert!(invitation.is_pending());
    assert!(invitation.responded_at.is_none());
}

#[test]
fn test_id_is_derived_from_project_invitee_and_time() {
    let project_id = Uuid::new_v4();
    let created_at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();

    let id = Invitation::derive_id(project_id, "guest@example.com", created_at);

    assert_eq!(
        id,
        format!(
            "{}_guest@example.com_{}",
            project_id,
            created_at.timestamp_millis()
        )
    );
}

#[test]
fn test_invitation_id_embeds_its_own_fields() {
    let invitation = Invitation::new(new_invitation(Role::Viewer));

    assert_eq!(
        invitation.id,
        Invitation::derive_id(
            invitation.project_id,
            &invitation.invitee_email,
            invitation.created_at
        )
    );
}

#[test]
fn test_terminal_statuses() {
    assert!(!InvitationStatus::Pending.is_terminal());
    assert!(InvitationStatus::Accepted.is_terminal());
    assert!(InvitationStatus::Rejected.is_terminal());
}

#[test]
fn test_invitation_survives_document_round_trip() {
    let invitation = Invitation::new(new_invitation(Role::Admin));

    let document = serde_json::to_value(&invitation).unwrap();
    assert_eq!(document["status"], serde_json::json!("pending"));
    assert_eq!(document["role"], serde_json::json!("admin"));

    let restored: Invitation = serde_json::from_value(document).unwrap();
    assert_eq!(restored, invitation);
}
