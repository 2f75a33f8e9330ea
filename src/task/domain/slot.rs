//! Provider time slots.

use super::{SlotId, TaskDomainError};
use crate::profile::domain::UserId;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A provider's bookable calendar interval.
///
/// Invariant: at most one non-cancelled booking holds a slot at a time.
/// The reserve/release pair enforces single-holder semantics; repositories
/// must apply [`TimeSlot::reserve`] as one conditional update so two
/// concurrent acceptances cannot both observe a free slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    id: SlotId,
    provider_id: UserId,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    is_available: bool,
    is_booked: bool,
}

impl TimeSlot {
    /// Creates an open slot for a provider.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptySlotInterval`] when `end` does not
    /// come after `start`.
    pub fn new(
        provider_id: UserId,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<Self, TaskDomainError> {
        if end <= start {
            return Err(TaskDomainError::EmptySlotInterval);
        }
        Ok(Self {
            id: SlotId::new(),
            provider_id,
            date,
            start,
            end,
            is_available: true,
            is_booked: false,
        })
    }

    /// Returns the slot identifier.
    #[must_use]
    pub const fn id(&self) -> SlotId {
        self.id
    }

    /// Returns the owning provider.
    #[must_use]
    pub const fn provider_id(&self) -> UserId {
        self.provider_id
    }

    /// Returns the calendar date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the interval start time.
    #[must_use]
    pub const fn start(&self) -> NaiveTime {
        self.start
    }

    /// Returns the interval end time.
    #[must_use]
    pub const fn end(&self) -> NaiveTime {
        self.end
    }

    /// Returns whether the provider currently offers this slot.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.is_available
    }

    /// Returns whether a booking currently holds this slot.
    #[must_use]
    pub const fn is_booked(&self) -> bool {
        self.is_booked
    }

    /// Returns whether a booking attempt would succeed.
    #[must_use]
    pub const fn is_bookable(&self) -> bool {
        self.is_available && !self.is_booked
    }

    /// Flips the slot to booked when it is free.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::SlotUnavailable`] when the slot is
    /// withdrawn or already booked; the slot is left unchanged.
    pub const fn reserve(&mut self) -> Result<(), TaskDomainError> {
        if !self.is_bookable() {
            return Err(TaskDomainError::SlotUnavailable(self.id));
        }
        self.is_booked = true;
        Ok(())
    }

    /// Releases a held slot back for future bookings.
    pub const fn release(&mut self) {
        self.is_booked = false;
    }

    /// Withdraws the slot from the provider's offered calendar.
    pub const fn withdraw(&mut self) {
        self.is_available = false;
    }
}
