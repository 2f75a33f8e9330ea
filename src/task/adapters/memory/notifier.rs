//! Recording notification sink for tests and local development.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::profile::domain::UserId;
use crate::task::ports::{Notification, NotificationError, NotificationSink};

/// Notification sink that records every delivery in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotificationSink {
    deliveries: Arc<RwLock<Vec<(UserId, Notification)>>>,
}

impl RecordingNotificationSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every delivery recorded so far, in order.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Delivery`] when the backing lock is
    /// poisoned.
    pub fn deliveries(&self) -> Result<Vec<(UserId, Notification)>, NotificationError> {
        let deliveries = self
            .deliveries
            .read()
            .map_err(|err| NotificationError::delivery(std::io::Error::other(err.to_string())))?;
        Ok(deliveries.clone())
    }
}

#[async_trait]
impl NotificationSink for RecordingNotificationSink {
    async fn notify(
        &self,
        user_id: UserId,
        notification: Notification,
    ) -> Result<(), NotificationError> {
        let mut deliveries = self
            .deliveries
            .write()
            .map_err(|err| NotificationError::delivery(std::io::Error::other(err.to_string())))?;
        deliveries.push((user_id, notification));
        Ok(())
    }
}
