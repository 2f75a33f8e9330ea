//! Domain model for marketplace user profiles.
//!
//! A profile is the aggregate for one marketplace user: a client posting
//! tasks or a provider offering services. Trust fields are derived state;
//! they change only through [`Profile::apply_trust`], driven by the trust
//! module's recomputation, never by direct mutation.

mod error;
mod ids;
mod profile;
mod trust_state;

pub use error::{
    ParseAvailabilityError, ParseRoleError, ParseVerificationTierError, ProfileDomainError,
};
pub use ids::UserId;
pub use profile::{Availability, Profile, Rating, Role};
pub use trust_state::{TrustScore, VerificationTier};
