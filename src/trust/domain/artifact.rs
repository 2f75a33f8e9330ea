//! Verification artifact aggregate and related types.

use super::{ArtifactId, ParseArtifactStatusError, ParseDocumentTypeError};
use crate::profile::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Class of identity evidence a verification artifact carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Phone number confirmation.
    Phone,
    /// Email address confirmation.
    Email,
    /// Government-issued identity document.
    Identity,
    /// Proof of address.
    Address,
    /// Background check.
    Background,
    /// Professional references.
    References,
    /// Community endorsement.
    Community,
}

impl DocumentType {
    /// Returns the verification level this document type belongs to.
    ///
    /// Levels order document classes by evidentiary strength: contact
    /// confirmation (1), government documents (2), screening (3), and
    /// community endorsement (4).
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Phone | Self::Email => 1,
            Self::Identity | Self::Address => 2,
            Self::Background | Self::References => 3,
            Self::Community => 4,
        }
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Identity => "identity",
            Self::Address => "address",
            Self::Background => "background",
            Self::References => "references",
            Self::Community => "community",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for DocumentType {
    type Error = ParseDocumentTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "phone" => Ok(Self::Phone),
            "email" => Ok(Self::Email),
            "identity" => Ok(Self::Identity),
            "address" => Ok(Self::Address),
            "background" => Ok(Self::Background),
            "references" => Ok(Self::References),
            "community" => Ok(Self::Community),
            _ => Err(ParseDocumentTypeError(value.to_owned())),
        }
    }
}

/// Pipeline status of a verification artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactStatus {
    /// Created but not yet handed to the verifier.
    Pending,
    /// Handed to the verifier, awaiting an outcome.
    Submitted,
    /// Verified successfully; contributes to trust scoring.
    Approved,
    /// Verification failed; may be resubmitted.
    Rejected,
    /// Approval lapsed; no longer contributes to trust scoring.
    Expired,
}

impl ArtifactStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for ArtifactStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ArtifactStatus {
    type Error = ParseArtifactStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "submitted" => Ok(Self::Submitted),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "expired" => Ok(Self::Expired),
            _ => Err(ParseArtifactStatusError(value.to_owned())),
        }
    }
}

/// One piece of submitted identity evidence for a user.
///
/// Artifacts are created on submission and mutated only by the verification
/// pipeline via [`VerificationArtifact::record_outcome`] and
/// [`VerificationArtifact::mark_expired`]. They are never deleted while a
/// trust computation may reference them; the artifact port exposes no
/// delete operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationArtifact {
    id: ArtifactId,
    user_id: UserId,
    document_type: DocumentType,
    status: ArtifactStatus,
    submitted_at: DateTime<Utc>,
    reviewed_at: Option<DateTime<Utc>>,
}

impl VerificationArtifact {
    /// Creates a freshly submitted artifact.
    #[must_use]
    pub fn submit(user_id: UserId, document_type: DocumentType, clock: &impl Clock) -> Self {
        Self {
            id: ArtifactId::new(),
            user_id,
            document_type,
            status: ArtifactStatus::Submitted,
            submitted_at: clock.utc(),
            reviewed_at: None,
        }
    }

    /// Returns the artifact identifier.
    #[must_use]
    pub const fn id(&self) -> ArtifactId {
        self.id
    }

    /// Returns the owning user's identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the document type.
    #[must_use]
    pub const fn document_type(&self) -> DocumentType {
        self.document_type
    }

    /// Returns the pipeline status.
    #[must_use]
    pub const fn status(&self) -> ArtifactStatus {
        self.status
    }

    /// Returns the submission timestamp.
    #[must_use]
    pub const fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    /// Returns the review timestamp, if the pipeline has produced one.
    #[must_use]
    pub const fn reviewed_at(&self) -> Option<DateTime<Utc>> {
        self.reviewed_at
    }

    /// Returns whether this artifact currently counts towards trust.
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        matches!(self.status, ArtifactStatus::Approved)
    }

    /// Returns whether a new submission of the same document type would
    /// duplicate this artifact.
    ///
    /// Rejected and expired artifacts may be resubmitted.
    #[must_use]
    pub const fn blocks_resubmission(&self) -> bool {
        matches!(
            self.status,
            ArtifactStatus::Pending | ArtifactStatus::Submitted | ArtifactStatus::Approved
        )
    }

    /// Records the verification pipeline's outcome.
    pub fn record_outcome(&mut self, approved: bool, clock: &impl Clock) {
        self.status = if approved {
            ArtifactStatus::Approved
        } else {
            ArtifactStatus::Rejected
        };
        self.reviewed_at = Some(clock.utc());
    }

    /// Marks a previously approved artifact as lapsed.
    pub fn mark_expired(&mut self, clock: &impl Clock) {
        self.status = ArtifactStatus::Expired;
        self.reviewed_at = Some(clock.utc());
    }
}
