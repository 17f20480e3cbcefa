use collab_core::{NewInvitation, Role};
use collab_service::{Notification, Notifier, NotifyError};
use collab_store::{DocumentStore, MemoryStore};

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Mutex;
use uuid::Uuid;

pub fn create_test_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

/// Inserts a project document with the given owner, the way the rest of
/// the product writes projects
pub async fn create_test_project(store: &MemoryStore, project_id: Uuid, owner_id: Uuid) {
    store
        .put(
            "projects",
            &project_id.to_string(),
            json!({
                "owner_id": owner_id.to_string(),
                "title": "Test Screenplay",
            }),
        )
        .await
        .expect("Failed to create test project");
}

/// Inserts a user profile document; membership writes require one
pub async fn create_test_user(store: &MemoryStore, user_id: Uuid) {
    store
        .put(
            "users",
            &user_id.to_string(),
            json!({
                "email": format!("user-{user_id}@example.com"),
                "shared_projects": [],
            }),
        )
        .await
        .expect("Failed to create test user");
}

pub fn new_invitation(project_id: Uuid, inviter: Uuid, invitee_email: &str, role: Role) -> NewInvitation {
    NewInvitation {
        project_id,
        project_title: "Test Screenplay".to_string(),
        inviter_user_id: inviter,
        inviter_name: "Inviter".to_string(),
        inviter_email: "inviter@example.com".to_string(),
        invitee_email: invitee_email.to_string(),
        invitee_name: Some("Invitee".to_string()),
        role,
        message: None,
    }
}

/// Captures notifications for assertions
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        self.sent.lock().await.push(notification.clone());
        Ok(())
    }
}

/// Fails every delivery; operations must still succeed
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify(&self, _notification: &Notification) -> Result<(), NotifyError> {
        Err(NotifyError::new("notification transport down"))
    }
}
