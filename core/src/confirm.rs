//! Two-step confirmation for destructive operations.
//!
//! The UI's blocking "are you sure?" prompt becomes an explicit contract:
//! request a deletion to get a token, then confirm the token to execute it
//! (or cancel it to leave state untouched). The core stays testable
//! without any prompt machinery.

use crate::{
    error::{DispatchError, DispatchResult},
    store::DispatchStore,
    types::EntityId,
};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Engineer(EntityId),
    Silo(EntityId),
    Case(EntityId),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfirmToken(String);

#[derive(Debug, Clone)]
pub(crate) struct PendingDeletion {
    token: ConfirmToken,
    target: DeleteTarget,
}

impl DispatchStore {
    /// Stage a deletion. Nothing is removed until the token is confirmed.
    pub fn request_deletion(&mut self, target: DeleteTarget) -> ConfirmToken {
        let token = ConfirmToken(Uuid::new_v4().simple().to_string());
        self.pending_deletions_mut().push(PendingDeletion {
            token: token.clone(),
            target,
        });
        token
    }

    /// Execute the staged deletion. Silo removal cascades as usual.
    pub fn confirm_deletion(&mut self, token: &ConfirmToken) -> DispatchResult<()> {
        let pending = self.take_pending(token)?;
        match pending.target {
            DeleteTarget::Engineer(id) => self.remove_engineer(&id),
            DeleteTarget::Silo(id) => self.remove_silo(&id),
            DeleteTarget::Case(id) => self.remove_case(&id),
        }
        Ok(())
    }

    /// Decline the staged deletion; state is untouched.
    pub fn cancel_deletion(&mut self, token: &ConfirmToken) -> DispatchResult<()> {
        self.take_pending(token).map(|_| ())
    }

    fn take_pending(&mut self, token: &ConfirmToken) -> DispatchResult<PendingDeletion> {
        let pending = self.pending_deletions_mut();
        let position = pending
            .iter()
            .position(|p| &p.token == token)
            .ok_or(DispatchError::UnknownConfirmToken)?;
        Ok(pending.remove(position))
    }
}
