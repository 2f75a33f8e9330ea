//! Task aggregate root.

use super::{SlotId, TaskDomainError, TaskId, TaskStatus};
use crate::matching::domain::{BudgetRange, Urgency};
use crate::profile::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// All mutation goes through guarded transition methods; a transition not
/// present in the [`TaskStatus`] table fails with
/// [`TaskDomainError::InvalidTransition`] and leaves every field unchanged.
/// Each successful transition bumps the entity `version`, which remote
/// reconciliation compares to decide which copy of a task is newer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    client_id: UserId,
    provider_id: Option<UserId>,
    status: TaskStatus,
    title: String,
    budget: BudgetRange,
    urgency: Urgency,
    slot_id: Option<SlotId>,
    cancel_reason: Option<String>,
    version: u64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    responded_at: Option<DateTime<Utc>>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted or remotely pushed task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted posting client.
    pub client_id: UserId,
    /// Persisted assigned provider, if any.
    pub provider_id: Option<UserId>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted title.
    pub title: String,
    /// Persisted budget range.
    pub budget: BudgetRange,
    /// Persisted urgency.
    pub urgency: Urgency,
    /// Persisted reserved slot, if any.
    pub slot_id: Option<SlotId>,
    /// Persisted cancellation reason, if any.
    pub cancel_reason: Option<String>,
    /// Persisted entity version.
    pub version: u64,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted provider-response timestamp, if any.
    pub responded_at: Option<DateTime<Utc>>,
    /// Persisted work-start timestamp, if any.
    pub started_at: Option<DateTime<Utc>>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a task published directly as `Posted`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn post(
        client_id: UserId,
        title: impl Into<String>,
        budget: BudgetRange,
        urgency: Urgency,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        Self::create(client_id, title, budget, urgency, TaskStatus::Posted, clock)
    }

    /// Creates an unpublished draft task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn draft(
        client_id: UserId,
        title: impl Into<String>,
        budget: BudgetRange,
        urgency: Urgency,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        Self::create(client_id, title, budget, urgency, TaskStatus::Draft, clock)
    }

    fn create(
        client_id: UserId,
        title: impl Into<String>,
        budget: BudgetRange,
        urgency: Urgency,
        status: TaskStatus,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let trimmed = title.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            client_id,
            provider_id: None,
            status,
            title: trimmed,
            budget,
            urgency,
            slot_id: None,
            cancel_reason: None,
            version: 1,
            created_at: timestamp,
            updated_at: timestamp,
            responded_at: None,
            started_at: None,
            completed_at: None,
        })
    }

    /// Reconstructs a task from persisted or remotely pushed state.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            client_id: data.client_id,
            provider_id: data.provider_id,
            status: data.status,
            title: data.title,
            budget: data.budget,
            urgency: data.urgency,
            slot_id: data.slot_id,
            cancel_reason: data.cancel_reason,
            version: data.version,
            created_at: data.created_at,
            updated_at: data.updated_at,
            responded_at: data.responded_at,
            started_at: data.started_at,
            completed_at: data.completed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the posting client.
    #[must_use]
    pub const fn client_id(&self) -> UserId {
        self.client_id
    }

    /// Returns the assigned provider, if any.
    #[must_use]
    pub const fn provider_id(&self) -> Option<UserId> {
        self.provider_id
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the budget range.
    #[must_use]
    pub const fn budget(&self) -> BudgetRange {
        self.budget
    }

    /// Returns the urgency.
    #[must_use]
    pub const fn urgency(&self) -> Urgency {
        self.urgency
    }

    /// Returns the reserved slot, if any.
    #[must_use]
    pub const fn slot_id(&self) -> Option<SlotId> {
        self.slot_id
    }

    /// Returns the cancellation reason, if any.
    #[must_use]
    pub fn cancel_reason(&self) -> Option<&str> {
        self.cancel_reason.as_deref()
    }

    /// Returns the entity version.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the provider-response timestamp, if any.
    #[must_use]
    pub const fn responded_at(&self) -> Option<DateTime<Utc>> {
        self.responded_at
    }

    /// Returns the work-start timestamp, if any.
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Returns the completion timestamp, if any.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Publishes a draft task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the task is not a
    /// draft.
    pub fn publish(&mut self, clock: &impl Clock) -> Result<(), TaskDomainError> {
        self.transition_to(TaskStatus::Posted, clock)
    }

    /// Records a provider's application: assigns the provider, remembers the
    /// reserved slot, and stamps the response time.
    ///
    /// The caller books the slot before invoking this; the aggregate only
    /// records the association.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the task is not
    /// open for applications.
    pub fn accept(
        &mut self,
        provider_id: UserId,
        slot_id: SlotId,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        self.guard(TaskStatus::Applications)?;
        self.status = TaskStatus::Applications;
        self.provider_id = Some(provider_id);
        self.slot_id = Some(slot_id);
        self.responded_at = Some(clock.utc());
        self.commit(clock);
        Ok(())
    }

    /// Records a provider declining the task: cancels it and stamps the
    /// response time without assigning a provider.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the task is
    /// already terminal.
    pub fn decline(&mut self, clock: &impl Clock) -> Result<(), TaskDomainError> {
        self.guard(TaskStatus::Cancelled)?;
        self.status = TaskStatus::Cancelled;
        self.responded_at = Some(clock.utc());
        self.commit(clock);
        Ok(())
    }

    /// Confirms the applied provider.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the task has no
    /// pending application.
    pub fn select(&mut self, clock: &impl Clock) -> Result<(), TaskDomainError> {
        self.transition_to(TaskStatus::Selected, clock)
    }

    /// Starts work on the task. Only the assigned provider may start.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotAssignedProvider`] when `user_id` is
    /// not the assigned provider, or
    /// [`TaskDomainError::InvalidTransition`] when the task is not ready to
    /// start.
    pub fn start(&mut self, user_id: UserId, clock: &impl Clock) -> Result<(), TaskDomainError> {
        if self.provider_id != Some(user_id) {
            return Err(TaskDomainError::NotAssignedProvider {
                task_id: self.id,
                user_id,
            });
        }
        self.guard(TaskStatus::InProgress)?;
        self.status = TaskStatus::InProgress;
        self.started_at = Some(clock.utc());
        self.commit(clock);
        Ok(())
    }

    /// Completes the task and stamps the completion time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the task is not
    /// in progress.
    pub fn complete(&mut self, clock: &impl Clock) -> Result<(), TaskDomainError> {
        self.transition_to(TaskStatus::Completed, clock)
    }

    /// Opens a dispute on an in-progress or completed task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the task is in a
    /// state that cannot be disputed.
    pub fn dispute(&mut self, clock: &impl Clock) -> Result<(), TaskDomainError> {
        self.transition_to(TaskStatus::Disputed, clock)
    }

    /// Cancels the task with a reason.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the task is in a
    /// state the transition table does not allow cancelling from.
    pub fn cancel(
        &mut self,
        reason: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        self.guard(TaskStatus::Cancelled)?;
        self.status = TaskStatus::Cancelled;
        self.cancel_reason = Some(reason.into());
        self.commit(clock);
        Ok(())
    }

    /// Applies a validated generic status transition.
    ///
    /// Used for dispute and resolution flows on top of the named
    /// operations. Entering `Completed` stamps the completion time if it
    /// was not stamped before.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the transition is
    /// not in the table.
    pub fn transition_to(
        &mut self,
        target: TaskStatus,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        self.guard(target)?;
        self.status = target;
        if target == TaskStatus::Completed && self.completed_at.is_none() {
            self.completed_at = Some(clock.utc());
        }
        self.commit(clock);
        Ok(())
    }

    /// Validates that `user_id` is the client or the assigned provider.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotParticipant`] otherwise.
    pub fn ensure_participant(&self, user_id: UserId) -> Result<(), TaskDomainError> {
        if user_id == self.client_id || self.provider_id == Some(user_id) {
            return Ok(());
        }
        Err(TaskDomainError::NotParticipant {
            task_id: self.id,
            user_id,
        })
    }

    /// Returns the non-acting party for notification fan-out.
    ///
    /// When the client acts, the counterpart is the assigned provider (if
    /// any); when anyone else acts, the counterpart is the client.
    #[must_use]
    pub fn counterpart_of(&self, user_id: UserId) -> Option<UserId> {
        if user_id == self.client_id {
            self.provider_id
        } else {
            Some(self.client_id)
        }
    }

    fn guard(&self, target: TaskStatus) -> Result<(), TaskDomainError> {
        if self.status.can_transition_to(target) {
            return Ok(());
        }
        Err(TaskDomainError::InvalidTransition {
            task_id: self.id,
            from: self.status,
            to: target,
        })
    }

    /// Bumps the entity version and the lifecycle timestamp together.
    fn commit(&mut self, clock: &impl Clock) {
        self.version += 1;
        self.updated_at = clock.utc();
    }
}
