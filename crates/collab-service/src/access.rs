//! Access queries: the single source of truth for "can this user touch
//! this project, and as what role". Every permission-gated surface (export,
//! delete, payments, team management) resolves through here instead of
//! guessing a role for the permission table.

use crate::config::CollectionConfig;
use crate::{Result as ServiceErrorResult, ServiceError};

use collab_core::{Collaborator, Permission, ProjectAccess, Role};
use collab_store::{DocumentStore, from_document};

use std::sync::Arc;

use serde_json::Value;
use uuid::Uuid;

#[derive(Clone)]
pub struct AccessService {
    store: Arc<dyn DocumentStore>,
    collections: CollectionConfig,
}

impl AccessService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_config(store, CollectionConfig::default())
    }

    pub fn with_config(store: Arc<dyn DocumentStore>, collections: CollectionConfig) -> Self {
        Self { store, collections }
    }

    /// Resolve access for one user on one project.
    ///
    /// The recorded owner wins first - ownership lives on the project
    /// document, never as a collaborator row. Otherwise the collaborator
    /// directory decides, and absence means no access.
    pub async fn check_access(
        &self,
        project_id: Uuid,
        user_id: Uuid,
    ) -> ServiceErrorResult<ProjectAccess> {
        let project = self
            .store
            .get(&self.collections.projects, &project_id.to_string())
            .await?;
        if let Some(project) = project {
            let owner_id = project.get("owner_id").and_then(Value::as_str);
            if owner_id == Some(user_id.to_string().as_str()) {
                return Ok(ProjectAccess::granted(Role::Owner));
            }
        }

        let key = self.collections.collaborator_key(project_id, user_id);
        match self.store.get(&self.collections.collaborators, &key).await? {
            Some(document) => {
                let collaborator: Collaborator = from_document(document)?;
                Ok(ProjectAccess::granted(collaborator.role))
            }
            None => Ok(ProjectAccess::denied()),
        }
    }

    pub async fn check_permission(
        &self,
        project_id: Uuid,
        user_id: Uuid,
        permission: Permission,
    ) -> ServiceErrorResult<bool> {
        Ok(self.check_access(project_id, user_id).await?.can(permission))
    }

    /// Gate for mutating surfaces: Ok(()) when authorized, Forbidden
    /// otherwise.
    pub async fn require_permission(
        &self,
        project_id: Uuid,
        user_id: Uuid,
        permission: Permission,
    ) -> ServiceErrorResult<()> {
        let access = self.check_access(project_id, user_id).await?;
        if access.can(permission) {
            Ok(())
        } else {
            Err(ServiceError::forbidden(format!(
                "user {user_id} lacks {permission} on project {project_id}"
            )))
        }
    }

    pub async fn is_admin_or_owner(
        &self,
        project_id: Uuid,
        user_id: Uuid,
    ) -> ServiceErrorResult<bool> {
        let access = self.check_access(project_id, user_id).await?;
        Ok(matches!(access.role, Some(Role::Owner | Role::Admin)))
    }
}
