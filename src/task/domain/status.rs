//! Task lifecycle state machine.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created but not yet visible to providers.
    Draft,
    /// Published and open for provider responses.
    Posted,
    /// At least one provider has applied and reserved a slot.
    Applications,
    /// The client has confirmed a provider.
    Selected,
    /// Work is underway.
    InProgress,
    /// Work finished; may still be disputed.
    Completed,
    /// Abandoned, declined, or withdrawn. Terminal.
    Cancelled,
    /// Under dispute after work started or completed.
    Disputed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Posted => "posted",
            Self::Applications => "applications",
            Self::Selected => "selected",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Disputed => "disputed",
        }
    }

    /// Returns whether transition to `target` is allowed.
    ///
    /// Transitions not listed here must be rejected; callers never coerce
    /// to a "closest valid" state.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Draft, Self::Posted | Self::Cancelled)
                | (Self::Posted, Self::Applications | Self::Cancelled)
                | (Self::Applications, Self::Selected | Self::Cancelled)
                | (Self::Selected, Self::InProgress | Self::Cancelled)
                | (
                    Self::InProgress,
                    Self::Completed | Self::Cancelled | Self::Disputed
                )
                | (Self::Completed, Self::Disputed)
                | (Self::Disputed, Self::Completed | Self::Cancelled)
        )
    }

    /// Returns whether no transition leaves this state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "draft" => Ok(Self::Draft),
            "posted" => Ok(Self::Posted),
            "applications" => Ok(Self::Applications),
            "selected" => Ok(Self::Selected),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            "disputed" => Ok(Self::Disputed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
