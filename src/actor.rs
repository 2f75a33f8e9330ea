//! Explicit caller identity for core operations.
//!
//! Every mutating operation takes an [`ActorContext`] parameter instead of
//! reading an ambient session. The context carries the authenticated user's
//! identifier and marketplace role; services validate role and ownership
//! against it before touching any state.

use crate::profile::domain::{Role, UserId};

/// Identity and role of the user performing an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorContext {
    user_id: UserId,
    role: Role,
}

impl ActorContext {
    /// Creates an actor context for the given user and role.
    #[must_use]
    pub const fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Returns the acting user's identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the acting user's marketplace role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns whether the actor acts as a client.
    #[must_use]
    pub const fn is_client(&self) -> bool {
        matches!(self.role, Role::Client)
    }

    /// Returns whether the actor acts as a provider.
    #[must_use]
    pub const fn is_provider(&self) -> bool {
        matches!(self.role, Role::Provider)
    }
}
