//! The invitation state machine: pending → accepted | rejected.
//!
//! Authorization for creating an invitation (the inviter holding canInvite)
//! is the caller's job through `AccessService`; this component owns the
//! lifecycle and the membership effects of acceptance.

use crate::collaborators::CollaboratorDirectory;
use crate::config::CollectionConfig;
use crate::notify::{self, Notification, Notifier};
use crate::{Result as ServiceErrorResult, ServiceError};

use collab_core::{Collaborator, Invitation, InvitationStatus, NewInvitation};
use collab_store::{DocumentStore, from_document, to_document};

use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, json};
use uuid::Uuid;

pub struct InvitationService {
    store: Arc<dyn DocumentStore>,
    notifier: Arc<dyn Notifier>,
    directory: CollaboratorDirectory,
    collections: CollectionConfig,
}

impl InvitationService {
    pub fn new(store: Arc<dyn DocumentStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_config(store, notifier, CollectionConfig::default())
    }

    pub fn with_config(
        store: Arc<dyn DocumentStore>,
        notifier: Arc<dyn Notifier>,
        collections: CollectionConfig,
    ) -> Self {
        let directory =
            CollaboratorDirectory::with_config(store.clone(), notifier.clone(), collections.clone());
        Self {
            store,
            notifier,
            directory,
            collections,
        }
    }

    /// Create a pending invitation and emit the invitee notification.
    ///
    /// The duplicate guard is check-before-write: the store has no
    /// uniqueness constraint, so two racing creates can still both land
    /// (with distinct ids, nothing is overwritten).
    pub async fn create_invitation(
        &self,
        new: NewInvitation,
    ) -> ServiceErrorResult<Invitation> {
        let already_pending = self
            .pending_for_project(new.project_id, &new.invitee_email)
            .await?;
        if !already_pending.is_empty() {
            return Err(ServiceError::already_invited(
                new.project_id,
                new.invitee_email,
            ));
        }

        let invitation = Invitation::new(new);
        let document = to_document(&invitation)?;
        self.store
            .put(&self.collections.invitations, &invitation.id, document)
            .await?;

        log::info!(
            "Created invitation {} for {} on project {} as {}",
            invitation.id,
            invitation.invitee_email,
            invitation.project_id,
            invitation.role
        );

        notify::emit(
            self.notifier.as_ref(),
            Notification::InvitationCreated {
                invitation: invitation.clone(),
            },
        )
        .await;

        Ok(invitation)
    }

    /// Accept a pending invitation: mark it accepted, grant membership,
    /// register the shared project.
    ///
    /// The writes hit independent documents with no cross-document
    /// transaction. A failure after the status write surfaces as
    /// `PartialFailure`; `reconcile_acceptance` repairs that window.
    pub async fn accept_invitation(
        &self,
        invitation_id: &str,
        accepting_user_id: Uuid,
    ) -> ServiceErrorResult<()> {
        let invitation = self.load(invitation_id).await?;
        Self::require_pending(&invitation)?;

        let mut fields = Map::new();
        fields.insert("status".to_string(), json!(InvitationStatus::Accepted));
        fields.insert("responded_at".to_string(), json!(Utc::now()));
        self.store
            .update(&self.collections.invitations, invitation_id, fields)
            .await?;

        if let Err(source) = self.grant_membership(&invitation, accepting_user_id).await {
            log::error!(
                "Invitation {invitation_id} accepted but membership grant failed: {source}"
            );
            return Err(ServiceError::partial_failure(
                "accept_invitation",
                "grant_membership",
                source,
            ));
        }

        log::info!("Invitation {invitation_id} accepted by {accepting_user_id}");
        Ok(())
    }

    /// Reject a pending invitation. Terminal, no membership side effects.
    pub async fn reject_invitation(&self, invitation_id: &str) -> ServiceErrorResult<()> {
        let invitation = self.load(invitation_id).await?;
        Self::require_pending(&invitation)?;

        let mut fields = Map::new();
        fields.insert("status".to_string(), json!(InvitationStatus::Rejected));
        fields.insert("responded_at".to_string(), json!(Utc::now()));
        self.store
            .update(&self.collections.invitations, invitation_id, fields)
            .await?;

        log::info!("Invitation {invitation_id} rejected");
        Ok(())
    }

    /// Pending invitations addressed to this e-mail. Unordered; callers
    /// sort by created_at when order matters.
    pub async fn pending_invitations(
        &self,
        invitee_email: &str,
    ) -> ServiceErrorResult<Vec<Invitation>> {
        let documents = self
            .store
            .query_equals(
                &self.collections.invitations,
                &[
                    ("invitee_email", json!(invitee_email)),
                    ("status", json!(InvitationStatus::Pending)),
                ],
            )
            .await?;
        documents
            .into_iter()
            .map(|document| from_document(document).map_err(ServiceError::from))
            .collect()
    }

    /// Repair the partial-failure window of acceptance: an accepted
    /// invitation whose membership writes did not all land. Re-applies the
    /// (idempotent) grant when the collaborator row or the shared-project
    /// registration is missing. Returns true when a repair ran.
    pub async fn reconcile_acceptance(
        &self,
        invitation_id: &str,
        accepting_user_id: Uuid,
    ) -> ServiceErrorResult<bool> {
        let invitation = self.load(invitation_id).await?;
        if invitation.status != InvitationStatus::Accepted {
            return Err(ServiceError::invalid_state(format!(
                "invitation {} is {}, nothing to reconcile",
                invitation.id, invitation.status
            )));
        }

        let row_present = self
            .directory
            .get_collaborator(invitation.project_id, accepting_user_id)
            .await?
            .is_some();
        let shared_present = self
            .directory
            .shared_projects(accepting_user_id)
            .await?
            .contains(&invitation.project_id);
        if row_present && shared_present {
            return Ok(false);
        }

        self.grant_membership(&invitation, accepting_user_id).await?;
        log::info!(
            "Reconciled membership of {accepting_user_id} for invitation {invitation_id}"
        );
        Ok(true)
    }

    /// Duplicate guard: the store limits queries to two equality filters,
    /// so status is filtered after the read.
    async fn pending_for_project(
        &self,
        project_id: Uuid,
        invitee_email: &str,
    ) -> ServiceErrorResult<Vec<Invitation>> {
        let documents = self
            .store
            .query_equals(
                &self.collections.invitations,
                &[
                    ("project_id", json!(project_id)),
                    ("invitee_email", json!(invitee_email)),
                ],
            )
            .await?;
        let invitations = documents
            .into_iter()
            .map(|document| from_document(document).map_err(ServiceError::from))
            .collect::<ServiceErrorResult<Vec<Invitation>>>()?;
        Ok(invitations
            .into_iter()
            .filter(Invitation::is_pending)
            .collect())
    }

    async fn load(&self, invitation_id: &str) -> ServiceErrorResult<Invitation> {
        match self
            .store
            .get(&self.collections.invitations, invitation_id)
            .await?
        {
            Some(document) => Ok(from_document(document)?),
            None => Err(ServiceError::not_found("invitation", invitation_id)),
        }
    }

    fn require_pending(invitation: &Invitation) -> ServiceErrorResult<()> {
        if invitation.is_pending() {
            Ok(())
        } else {
            Err(ServiceError::invalid_state(format!(
                "invitation {} is already {}",
                invitation.id, invitation.status
            )))
        }
    }

    async fn grant_membership(
        &self,
        invitation: &Invitation,
        user_id: Uuid,
    ) -> ServiceErrorResult<()> {
        let collaborator = Collaborator::new(
            invitation.project_id,
            user_id,
            invitation.invitee_email.clone(),
            invitation
                .invitee_name
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            invitation.role,
            invitation.inviter_user_id,
        );
        self.directory.add_collaborator(&collaborator).await
    }
}
