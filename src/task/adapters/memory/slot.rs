//! In-memory slot repository with atomic booking.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::profile::domain::UserId;
use crate::task::{
    domain::{SlotId, TimeSlot},
    ports::{SlotRepository, SlotRepositoryError, SlotRepositoryResult},
};

/// Thread-safe in-memory slot repository.
///
/// [`SlotRepository::book`] performs the availability check and the booked
/// flip under a single write lock, so concurrent acceptances of the same
/// slot serialise and exactly one succeeds.
#[derive(Debug, Clone, Default)]
pub struct InMemorySlotRepository {
    slots: Arc<RwLock<HashMap<SlotId, TimeSlot>>>,
}

impl InMemorySlotRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SlotRepository for InMemorySlotRepository {
    async fn insert(&self, slot: &TimeSlot) -> SlotRepositoryResult<()> {
        let mut slots = self.slots.write().map_err(|err| {
            SlotRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if slots.contains_key(&slot.id()) {
            return Err(SlotRepositoryError::DuplicateSlot(slot.id()));
        }
        slots.insert(slot.id(), slot.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: SlotId) -> SlotRepositoryResult<Option<TimeSlot>> {
        let slots = self.slots.read().map_err(|err| {
            SlotRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(slots.get(&id).cloned())
    }

    async fn find_available(&self, provider_id: UserId) -> SlotRepositoryResult<Vec<TimeSlot>> {
        let slots = self.slots.read().map_err(|err| {
            SlotRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut found: Vec<TimeSlot> = slots
            .values()
            .filter(|slot| slot.provider_id() == provider_id && slot.is_bookable())
            .cloned()
            .collect();
        found.sort_by_key(|slot| (slot.date(), slot.start()));
        Ok(found)
    }

    async fn book(&self, id: SlotId) -> SlotRepositoryResult<TimeSlot> {
        let mut slots = self.slots.write().map_err(|err| {
            SlotRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let slot = slots
            .get_mut(&id)
            .ok_or(SlotRepositoryError::NotFound(id))?;
        slot.reserve()
            .map_err(|_| SlotRepositoryError::SlotConflict(id))?;
        Ok(slot.clone())
    }

    async fn release(&self, id: SlotId) -> SlotRepositoryResult<()> {
        let mut slots = self.slots.write().map_err(|err| {
            SlotRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let slot = slots
            .get_mut(&id)
            .ok_or(SlotRepositoryError::NotFound(id))?;
        slot.release();
        Ok(())
    }
}
