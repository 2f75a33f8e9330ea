//! Per-role verification step table.
//!
//! The step list for each role is an explicit static table rather than a
//! runtime keyed lookup: clients only verify contact details, providers
//! walk the full ladder up to community endorsement.

use super::DocumentType;
use crate::profile::domain::Role;

/// Verification steps available to clients.
const CLIENT_STEPS: [DocumentType; 2] = [DocumentType::Phone, DocumentType::Email];

/// Verification steps available to providers.
const PROVIDER_STEPS: [DocumentType; 7] = [
    DocumentType::Phone,
    DocumentType::Email,
    DocumentType::Identity,
    DocumentType::Address,
    DocumentType::Background,
    DocumentType::References,
    DocumentType::Community,
];

/// Returns the ordered verification steps for the given role.
#[must_use]
pub const fn verification_steps(role: Role) -> &'static [DocumentType] {
    match role {
        Role::Client => &CLIENT_STEPS,
        Role::Provider => &PROVIDER_STEPS,
    }
}

impl DocumentType {
    /// Returns whether this document type is a verification step for the
    /// given role.
    #[must_use]
    pub fn required_for(self, role: Role) -> bool {
        verification_steps(role).contains(&self)
    }
}
