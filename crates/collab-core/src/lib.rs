pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::collaborator::Collaborator;
pub use models::invitation::{Invitation, NewInvitation};
pub use models::invitation_status::InvitationStatus;
pub use models::permission::{Permission, PermissionSet};
pub use models::project_access::ProjectAccess;
pub use models::role::Role;

#[cfg(test)]
mod tests;
