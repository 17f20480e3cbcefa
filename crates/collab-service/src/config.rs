use crate::{Result as ServiceErrorResult, ServiceError};

use serde::Deserialize;
use uuid::Uuid;

pub const DEFAULT_INVITATIONS_COLLECTION: &str = "project_invitations";
pub const DEFAULT_COLLABORATORS_COLLECTION: &str = "project_collaborators";
pub const DEFAULT_USERS_COLLECTION: &str = "users";
pub const DEFAULT_PROJECTS_COLLECTION: &str = "projects";

/// Array field on a user document holding the ids of projects shared with
/// that user.
pub const SHARED_PROJECTS_FIELD: &str = "shared_projects";

/// Names of the store collections the collaboration core reads and writes.
///
/// The projects collection is owned by the rest of the product; only the
/// owner field of its documents is read here.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    pub invitations: String,
    pub collaborators: String,
    pub users: String,
    pub projects: String,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            invitations: DEFAULT_INVITATIONS_COLLECTION.to_string(),
            collaborators: DEFAULT_COLLABORATORS_COLLECTION.to_string(),
            users: DEFAULT_USERS_COLLECTION.to_string(),
            projects: DEFAULT_PROJECTS_COLLECTION.to_string(),
        }
    }
}

impl CollectionConfig {
    pub fn validate(&self) -> ServiceErrorResult<()> {
        let names = [
            ("invitations", &self.invitations),
            ("collaborators", &self.collaborators),
            ("users", &self.users),
            ("projects", &self.projects),
        ];
        for (name, value) in names {
            if value.trim().is_empty() {
                return Err(ServiceError::configuration(format!(
                    "collections.{name} must not be empty"
                )));
            }
        }
        Ok(())
    }

    /// Composite key of a collaborator row: one membership per
    /// (project, user) pair, addressable without a query.
    pub fn collaborator_key(&self, project_id: Uuid, user_id: Uuid) -> String {
        format!("{project_id}_{user_id}")
    }
}
