//! The authoritative set of confirmed {project, user, role} memberships.
//!
//! Mutated only by the invitation lifecycle (accept) and the explicit
//! role-change and removal operations here; read by the access queries.

use crate::access::AccessService;
use crate::config::{CollectionConfig, SHARED_PROJECTS_FIELD};
use crate::notify::{self, Notification, Notifier};
use crate::{Result as ServiceErrorResult, ServiceError};

use collab_core::{Collaborator, Permission, Role};
use collab_store::{DocumentStore, from_document, to_document};

use std::sync::Arc;

use serde_json::{Map, json};
use uuid::Uuid;

pub struct CollaboratorDirectory {
    store: Arc<dyn DocumentStore>,
    notifier: Arc<dyn Notifier>,
    access: AccessService,
    collections: CollectionConfig,
}

impl CollaboratorDirectory {
    pub fn new(store: Arc<dyn DocumentStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_config(store, notifier, CollectionConfig::default())
    }

    pub fn with_config(
        store: Arc<dyn DocumentStore>,
        notifier: Arc<dyn Notifier>,
        collections: CollectionConfig,
    ) -> Self {
        let access = AccessService::with_config(store.clone(), collections.clone());
        Self {
            store,
            notifier,
            access,
            collections,
        }
    }

    /// Write the membership row and register the project on the user's
    /// shared-project set. Overwrites an existing row for the same
    /// (project, user) pair.
    pub async fn add_collaborator(&self, collaborator: &Collaborator) -> ServiceErrorResult<()> {
        let key = self
            .collections
            .collaborator_key(collaborator.project_id, collaborator.user_id);
        let document = to_document(collaborator)?;
        self.store
            .put(&self.collections.collaborators, &key, document)
            .await?;
        self.store
            .array_add(
                &self.collections.users,
                &collaborator.user_id.to_string(),
                SHARED_PROJECTS_FIELD,
                json!(collaborator.project_id),
            )
            .await?;

        log::info!(
            "Added collaborator {} to project {} as {}",
            collaborator.user_id,
            collaborator.project_id,
            collaborator.role
        );
        Ok(())
    }

    /// Remove the membership row and retract the project from the user's
    /// shared-project set.
    pub async fn remove_collaborator(
        &self,
        project_id: Uuid,
        user_id: Uuid,
    ) -> ServiceErrorResult<()> {
        let key = self.collections.collaborator_key(project_id, user_id);
        if self
            .store
            .get(&self.collections.collaborators, &key)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found("collaborator", key));
        }

        self.store
            .delete(&self.collections.collaborators, &key)
            .await?;
        self.store
            .array_remove(
                &self.collections.users,
                &user_id.to_string(),
                SHARED_PROJECTS_FIELD,
                json!(project_id),
            )
            .await?;

        log::info!("Removed collaborator {user_id} from project {project_id}");
        Ok(())
    }

    pub async fn get_collaborator(
        &self,
        project_id: Uuid,
        user_id: Uuid,
    ) -> ServiceErrorResult<Option<Collaborator>> {
        let key = self.collections.collaborator_key(project_id, user_id);
        match self.store.get(&self.collections.collaborators, &key).await? {
            Some(document) => Ok(Some(from_document(document)?)),
            None => Ok(None),
        }
    }

    /// Every confirmed member of the project. The owner is resolved from
    /// project metadata and does not appear here.
    pub async fn list_collaborators(
        &self,
        project_id: Uuid,
    ) -> ServiceErrorResult<Vec<Collaborator>> {
        let documents = self
            .store
            .query_equals(
                &self.collections.collaborators,
                &[("project_id", json!(project_id))],
            )
            .await?;
        documents
            .into_iter()
            .map(|document| from_document(document).map_err(ServiceError::from))
            .collect()
    }

    /// Ids of the projects shared with this user. A user without a profile
    /// document has nothing shared.
    pub async fn shared_projects(&self, user_id: Uuid) -> ServiceErrorResult<Vec<Uuid>> {
        let user = self
            .store
            .get(&self.collections.users, &user_id.to_string())
            .await?;
        match user.and_then(|mut document| {
            document
                .as_object_mut()
                .and_then(|fields| fields.remove(SHARED_PROJECTS_FIELD))
        }) {
            Some(value) => Ok(from_document(value)?),
            None => Ok(Vec::new()),
        }
    }

    /// Change a member's role.
    ///
    /// The changer must hold team management on the project, may never
    /// change their own role, and may not raise anyone above their own
    /// tier. Only the role field is written; added_at and added_by stay.
    pub async fn update_role(
        &self,
        project_id: Uuid,
        user_id: Uuid,
        new_role: Role,
        changed_by: Uuid,
    ) -> ServiceErrorResult<()> {
        if changed_by == user_id {
            return Err(ServiceError::forbidden(
                "changing your own role is not allowed",
            ));
        }

        let changer = self.access.check_access(project_id, changed_by).await?;
        let changer_role = match changer.role {
            Some(role) if changer.can(Permission::CanManageTeam) => role,
            _ => {
                return Err(ServiceError::forbidden(format!(
                    "user {changed_by} may not manage the team of project {project_id}"
                )));
            }
        };
        if new_role.precedence() > changer_role.precedence() {
            return Err(ServiceError::forbidden(format!(
                "{changer_role} may not grant {new_role}"
            )));
        }

        let key = self.collections.collaborator_key(project_id, user_id);
        if self
            .store
            .get(&self.collections.collaborators, &key)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found("collaborator", key));
        }

        let mut fields = Map::new();
        fields.insert("role".to_string(), json!(new_role));
        self.store
            .update(&self.collections.collaborators, &key, fields)
            .await?;

        log::info!(
            "Role of {user_id} on project {project_id} changed to {new_role} by {changed_by}"
        );

        notify::emit(
            self.notifier.as_ref(),
            Notification::RoleChanged {
                project_id,
                user_id,
                new_role,
                changed_by,
            },
        )
        .await;
        notify::emit(
            self.notifier.as_ref(),
            Notification::RoleChangeConfirmed {
                project_id,
                user_id,
                new_role,
                changed_by,
            },
        )
        .await;

        Ok(())
    }
}
