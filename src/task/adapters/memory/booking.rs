//! In-memory booking repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Booking, BookingId, TaskId},
    ports::{BookingRepository, BookingRepositoryError, BookingRepositoryResult},
};

/// Thread-safe in-memory booking repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookingRepository {
    bookings: Arc<RwLock<HashMap<BookingId, Booking>>>,
}

impl InMemoryBookingRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn insert(&self, booking: &Booking) -> BookingRepositoryResult<()> {
        let mut bookings = self.bookings.write().map_err(|err| {
            BookingRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if bookings.contains_key(&booking.id()) {
            return Err(BookingRepositoryError::DuplicateBooking(booking.id()));
        }
        bookings.insert(booking.id(), booking.clone());
        Ok(())
    }

    async fn update(&self, booking: &Booking) -> BookingRepositoryResult<()> {
        let mut bookings = self.bookings.write().map_err(|err| {
            BookingRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !bookings.contains_key(&booking.id()) {
            return Err(BookingRepositoryError::NotFound(booking.id()));
        }
        bookings.insert(booking.id(), booking.clone());
        Ok(())
    }

    async fn find_by_task(&self, task_id: TaskId) -> BookingRepositoryResult<Vec<Booking>> {
        let bookings = self.bookings.read().map_err(|err| {
            BookingRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut found: Vec<Booking> = bookings
            .values()
            .filter(|booking| booking.task_id() == task_id)
            .cloned()
            .collect();
        found.sort_by_key(Booking::created_at);
        Ok(found)
    }
}
