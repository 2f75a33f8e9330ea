//! Bookings tying a task to a reserved time slot.

use super::{BookingId, SlotId, TaskDomainError, TaskId};
use crate::profile::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// The slot is held for the task.
    Confirmed,
    /// The booking was cancelled and the slot released.
    Cancelled,
}

impl BookingStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A confirmed hold of a provider's slot for one task.
///
/// A completed task's booking stays confirmed as a historical record; only
/// cancellation releases the underlying slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    id: BookingId,
    task_id: TaskId,
    slot_id: SlotId,
    provider_id: UserId,
    client_id: UserId,
    status: BookingStatus,
    cancel_reason: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a confirmed booking for a freshly reserved slot.
    #[must_use]
    pub fn confirm(
        task_id: TaskId,
        slot_id: SlotId,
        provider_id: UserId,
        client_id: UserId,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: BookingId::new(),
            task_id,
            slot_id,
            provider_id,
            client_id,
            status: BookingStatus::Confirmed,
            cancel_reason: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the booking identifier.
    #[must_use]
    pub const fn id(&self) -> BookingId {
        self.id
    }

    /// Returns the booked task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the held slot.
    #[must_use]
    pub const fn slot_id(&self) -> SlotId {
        self.slot_id
    }

    /// Returns the providing party.
    #[must_use]
    pub const fn provider_id(&self) -> UserId {
        self.provider_id
    }

    /// Returns the client party.
    #[must_use]
    pub const fn client_id(&self) -> UserId {
        self.client_id
    }

    /// Returns the booking status.
    #[must_use]
    pub const fn status(&self) -> BookingStatus {
        self.status
    }

    /// Returns the cancellation reason, if cancelled.
    #[must_use]
    pub fn cancel_reason(&self) -> Option<&str> {
        self.cancel_reason.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns whether the booking still holds its slot.
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        matches!(self.status, BookingStatus::Confirmed)
    }

    /// Cancels the booking with a reason.
    ///
    /// The caller releases the underlying slot; the booking only records
    /// its own state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::BookingAlreadyCancelled`] when invoked
    /// twice.
    pub fn cancel(
        &mut self,
        reason: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if !self.is_confirmed() {
            return Err(TaskDomainError::BookingAlreadyCancelled(self.id));
        }
        self.status = BookingStatus::Cancelled;
        self.cancel_reason = Some(reason.into());
        self.updated_at = clock.utc();
        Ok(())
    }
}
