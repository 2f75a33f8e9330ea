//! Domain model for provider matching.

mod candidate;
mod criteria;
mod error;
mod score;

pub use candidate::{Candidate, RankedCandidate};
pub use criteria::{BudgetRange, MatchingCriteria, SortKey, Urgency};
pub use error::{MatchingDomainError, ParseUrgencyError};
pub use score::MatchScore;
