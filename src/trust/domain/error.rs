//! Error types for trust domain validation and parsing.

use super::DocumentType;
use crate::profile::domain::Role;
use thiserror::Error;

/// Errors returned while validating verification submissions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrustDomainError {
    /// The document type is not part of the role's verification steps.
    #[error("document type '{document_type}' is not a verification step for role '{role}'")]
    DocumentNotRequired {
        /// The submitted document type.
        document_type: DocumentType,
        /// The submitting user's role.
        role: Role,
    },

    /// A non-rejected artifact of the same document type already exists.
    #[error("document type '{0}' already submitted")]
    DuplicateDocument(DocumentType),
}

/// Error returned while parsing document types from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown document type: {0}")]
pub struct ParseDocumentTypeError(pub String);

/// Error returned while parsing artifact statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown artifact status: {0}")]
pub struct ParseArtifactStatusError(pub String);
