//! Repository ports for time slots and bookings.

use crate::profile::domain::UserId;
use crate::task::domain::{Booking, BookingId, SlotId, TaskId, TimeSlot};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for slot repository operations.
pub type SlotRepositoryResult<T> = Result<T, SlotRepositoryError>;

/// Time slot persistence contract.
///
/// Booking is a single conditional update: implementations flip
/// `is_booked` only when the slot is still free, inside whatever
/// transactional primitive the store offers, so two concurrent acceptances
/// can never both succeed.
#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// Stores a new slot.
    ///
    /// # Errors
    ///
    /// Returns [`SlotRepositoryError::DuplicateSlot`] when the slot ID
    /// already exists.
    async fn insert(&self, slot: &TimeSlot) -> SlotRepositoryResult<()>;

    /// Finds a slot by identifier.
    ///
    /// Returns `None` when the slot does not exist.
    async fn find_by_id(&self, id: SlotId) -> SlotRepositoryResult<Option<TimeSlot>>;

    /// Returns the provider's currently bookable slots.
    async fn find_available(&self, provider_id: UserId) -> SlotRepositoryResult<Vec<TimeSlot>>;

    /// Atomically books a free slot and returns its new state.
    ///
    /// # Errors
    ///
    /// Returns [`SlotRepositoryError::SlotConflict`] when the slot is
    /// withdrawn or already booked (the slot is left untouched), and
    /// [`SlotRepositoryError::NotFound`] when it does not exist.
    async fn book(&self, id: SlotId) -> SlotRepositoryResult<TimeSlot>;

    /// Releases a booked slot back for future bookings.
    ///
    /// # Errors
    ///
    /// Returns [`SlotRepositoryError::NotFound`] when the slot does not
    /// exist.
    async fn release(&self, id: SlotId) -> SlotRepositoryResult<()>;
}

/// Errors returned by slot repository implementations.
#[derive(Debug, Clone, Error)]
pub enum SlotRepositoryError {
    /// A slot with the same identifier already exists.
    #[error("duplicate slot identifier: {0}")]
    DuplicateSlot(SlotId),

    /// The slot was not found.
    #[error("slot not found: {0}")]
    NotFound(SlotId),

    /// The slot is withdrawn or already booked.
    #[error("slot conflict: {0} is unavailable or already booked")]
    SlotConflict(SlotId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SlotRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

/// Result type for booking repository operations.
pub type BookingRepositoryResult<T> = Result<T, BookingRepositoryError>;

/// Booking persistence contract.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Stores a new booking.
    ///
    /// # Errors
    ///
    /// Returns [`BookingRepositoryError::DuplicateBooking`] when the
    /// booking ID already exists.
    async fn insert(&self, booking: &Booking) -> BookingRepositoryResult<()>;

    /// Persists changes to an existing booking.
    ///
    /// # Errors
    ///
    /// Returns [`BookingRepositoryError::NotFound`] when the booking does
    /// not exist.
    async fn update(&self, booking: &Booking) -> BookingRepositoryResult<()>;

    /// Returns all bookings recorded for a task.
    async fn find_by_task(&self, task_id: TaskId) -> BookingRepositoryResult<Vec<Booking>>;
}

/// Errors returned by booking repository implementations.
#[derive(Debug, Clone, Error)]
pub enum BookingRepositoryError {
    /// A booking with the same identifier already exists.
    #[error("duplicate booking identifier: {0}")]
    DuplicateBooking(BookingId),

    /// The booking was not found.
    #[error("booking not found: {0}")]
    NotFound(BookingId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BookingRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
