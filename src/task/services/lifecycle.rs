//! Task lifecycle orchestration.

use chrono::{NaiveDate, NaiveTime};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::actor::ActorContext;
use crate::matching::domain::{BudgetRange, Urgency};
use crate::profile::domain::UserId;
use crate::task::{
    domain::{Booking, SlotId, Task, TaskDomainError, TaskId, TaskStatus, TimeSlot},
    ports::{
        BookingRepository, BookingRepositoryError, NotificationKind, NotificationSink,
        SlotRepository, SlotRepositoryError, TaskRepository, TaskRepositoryError,
    },
    services::notifications::NotificationComposer,
};

/// Service-level errors for lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed; the task is unchanged.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Task persistence failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// Slot persistence failed, including booking conflicts.
    #[error(transparent)]
    Slots(#[from] SlotRepositoryError),
    /// Booking persistence failed.
    #[error(transparent)]
    Bookings(#[from] BookingRepositoryError),
    /// The task the operation targets does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// The slot the operation targets does not exist.
    #[error("slot not found: {0}")]
    SlotNotFound(SlotId),
    /// The operation is restricted to clients.
    #[error("operation requires the client role")]
    ClientRoleRequired,
    /// The operation is restricted to providers.
    #[error("operation requires the provider role")]
    ProviderRoleRequired,
    /// The acting user does not own the task.
    #[error("user {user_id} does not own task {task_id}")]
    NotTaskOwner {
        /// The task in question.
        task_id: TaskId,
        /// The acting user.
        user_id: UserId,
    },
    /// The slot belongs to a different provider.
    #[error("slot {slot_id} does not belong to provider {provider_id}")]
    SlotOwnerMismatch {
        /// The offered slot.
        slot_id: SlotId,
        /// The acting provider.
        provider_id: UserId,
    },
}

/// Result type for lifecycle operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Result of completing a task.
///
/// When the provider completes, their bookable calendar is re-read so the
/// caller can refresh availability views in the same round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOutcome {
    /// The completed task.
    pub task: Task,
    /// The acting provider's bookable slots, empty when the client acted.
    pub refreshed_slots: Vec<TimeSlot>,
}

/// Orchestrates task state transitions, slot booking, and notifications.
///
/// Every operation takes an explicit [`ActorContext`]; authorisation is
/// decided from it and from the task's own participant fields, never from
/// ambient state. Notifications are fire-and-forget: a delivery failure is
/// logged at `warn` and never rolls back a committed transition.
#[derive(Clone)]
pub struct TaskLifecycleService<T, S, B, N, C>
where
    T: TaskRepository,
    S: SlotRepository,
    B: BookingRepository,
    N: NotificationSink,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    slots: Arc<S>,
    bookings: Arc<B>,
    notifier: Arc<N>,
    composer: NotificationComposer,
    clock: Arc<C>,
}

impl<T, S, B, N, C> TaskLifecycleService<T, S, B, N, C>
where
    T: TaskRepository,
    S: SlotRepository,
    B: BookingRepository,
    N: NotificationSink,
    C: Clock + Send + Sync,
{
    /// Creates a new lifecycle service.
    #[must_use]
    pub const fn new(
        tasks: Arc<T>,
        slots: Arc<S>,
        bookings: Arc<B>,
        notifier: Arc<N>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            tasks,
            slots,
            bookings,
            notifier,
            composer: NotificationComposer::new(),
            clock,
        }
    }

    /// Posts a new task, open for provider responses.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::ClientRoleRequired`] when the actor is
    /// not a client, [`TaskLifecycleError::Domain`] when the title is
    /// invalid, and repository errors otherwise.
    pub async fn post_task(
        &self,
        actor: &ActorContext,
        title: impl Into<String> + Send,
        budget: BudgetRange,
        urgency: Urgency,
    ) -> TaskLifecycleResult<Task> {
        if !actor.is_client() {
            return Err(TaskLifecycleError::ClientRoleRequired);
        }
        let task = Task::post(actor.user_id(), title, budget, urgency, &*self.clock)?;
        self.tasks.insert(&task).await?;
        debug!(task = %task.id(), client = %actor.user_id(), "task posted");
        Ok(task)
    }

    /// Creates an unpublished draft task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::ClientRoleRequired`] when the actor is
    /// not a client, [`TaskLifecycleError::Domain`] when the title is
    /// invalid, and repository errors otherwise.
    pub async fn create_draft(
        &self,
        actor: &ActorContext,
        title: impl Into<String> + Send,
        budget: BudgetRange,
        urgency: Urgency,
    ) -> TaskLifecycleResult<Task> {
        if !actor.is_client() {
            return Err(TaskLifecycleError::ClientRoleRequired);
        }
        let task = Task::draft(actor.user_id(), title, budget, urgency, &*self.clock)?;
        self.tasks.insert(&task).await?;
        Ok(task)
    }

    /// Publishes a draft task owned by the acting client.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotTaskOwner`] when the actor did not
    /// post the task, [`TaskLifecycleError::Domain`] when the task is not a
    /// draft, and repository errors otherwise.
    pub async fn publish_task(
        &self,
        actor: &ActorContext,
        task_id: TaskId,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.load(task_id).await?;
        Self::ensure_owner(&task, actor)?;
        task.publish(&*self.clock)?;
        self.tasks.update(&task).await?;
        Self::log_transition(&task, actor);
        Ok(task)
    }

    /// Records a provider's application: reserves the offered slot
    /// atomically, assigns the provider, and notifies the client.
    ///
    /// The transition is validated before the slot is touched, so an
    /// invalid application never consumes calendar capacity. The slot flip
    /// itself is a single conditional update; when two providers race for
    /// the same slot exactly one wins and the loser gets
    /// [`SlotRepositoryError::SlotConflict`] with the task unchanged. A
    /// persistence failure after the slot is booked releases it again and
    /// cancels the booking record, so an aborted application leaves no
    /// trace in the calendar.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::ProviderRoleRequired`] when the actor
    /// is not a provider, [`TaskLifecycleError::SlotOwnerMismatch`] when
    /// the slot belongs to someone else, [`TaskLifecycleError::Domain`]
    /// when the task is not open for applications, and
    /// [`TaskLifecycleError::Slots`] carrying the conflict when the slot is
    /// already taken.
    pub async fn accept_task(
        &self,
        actor: &ActorContext,
        task_id: TaskId,
        slot_id: SlotId,
    ) -> TaskLifecycleResult<Task> {
        if !actor.is_provider() {
            return Err(TaskLifecycleError::ProviderRoleRequired);
        }
        let mut task = self.load(task_id).await?;
        let slot = self
            .slots
            .find_by_id(slot_id)
            .await?
            .ok_or(TaskLifecycleError::SlotNotFound(slot_id))?;
        if slot.provider_id() != actor.user_id() {
            return Err(TaskLifecycleError::SlotOwnerMismatch {
                slot_id,
                provider_id: actor.user_id(),
            });
        }

        // Validates the transition before any slot state changes.
        task.accept(actor.user_id(), slot_id, &*self.clock)?;
        self.slots.book(slot_id).await?;

        let booking = Booking::confirm(
            task_id,
            slot_id,
            actor.user_id(),
            task.client_id(),
            &*self.clock,
        );
        if let Err(err) = self.bookings.insert(&booking).await {
            self.release_aborted_slot(slot_id).await;
            return Err(err.into());
        }
        if let Err(err) = self.tasks.update(&task).await {
            self.release_aborted_slot(slot_id).await;
            self.cancel_aborted_booking(booking).await;
            return Err(err.into());
        }

        Self::log_transition(&task, actor);
        self.notify(task.client_id(), NotificationKind::TaskAccepted, &task)
            .await;
        Ok(task)
    }

    /// Records a provider declining a task and notifies the client.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::ProviderRoleRequired`] when the actor
    /// is not a provider, [`TaskLifecycleError::Domain`] when the task is
    /// already terminal, and repository errors otherwise.
    pub async fn decline_task(
        &self,
        actor: &ActorContext,
        task_id: TaskId,
    ) -> TaskLifecycleResult<Task> {
        if !actor.is_provider() {
            return Err(TaskLifecycleError::ProviderRoleRequired);
        }
        let mut task = self.load(task_id).await?;
        task.decline(&*self.clock)?;
        self.tasks.update(&task).await?;
        Self::log_transition(&task, actor);
        self.notify(task.client_id(), NotificationKind::TaskDeclined, &task)
            .await;
        Ok(task)
    }

    /// Confirms the applied provider on behalf of the posting client and
    /// notifies the provider.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotTaskOwner`] when the actor did not
    /// post the task, [`TaskLifecycleError::Domain`] when the task has no
    /// pending application, and repository errors otherwise.
    pub async fn select_provider(
        &self,
        actor: &ActorContext,
        task_id: TaskId,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.load(task_id).await?;
        Self::ensure_owner(&task, actor)?;
        task.select(&*self.clock)?;
        self.tasks.update(&task).await?;
        Self::log_transition(&task, actor);
        if let Some(provider_id) = task.provider_id() {
            self.notify(provider_id, NotificationKind::ProviderSelected, &task)
                .await;
        }
        Ok(task)
    }

    /// Starts work on a task as its assigned provider and notifies the
    /// client.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the actor is not the
    /// assigned provider or the task is not ready to start, and repository
    /// errors otherwise.
    pub async fn start_task(
        &self,
        actor: &ActorContext,
        task_id: TaskId,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.load(task_id).await?;
        task.start(actor.user_id(), &*self.clock)?;
        self.tasks.update(&task).await?;
        Self::log_transition(&task, actor);
        self.notify(task.client_id(), NotificationKind::TaskStarted, &task)
            .await;
        Ok(task)
    }

    /// Completes a task and notifies the non-acting party.
    ///
    /// The booking stays confirmed and the slot stays booked as a
    /// historical record. When the provider acts, their bookable calendar
    /// is re-read into the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the actor is not a
    /// participant or the task is not in progress, and repository errors
    /// otherwise.
    pub async fn complete_task(
        &self,
        actor: &ActorContext,
        task_id: TaskId,
    ) -> TaskLifecycleResult<CompletionOutcome> {
        let mut task = self.load(task_id).await?;
        task.ensure_participant(actor.user_id())?;
        task.complete(&*self.clock)?;
        self.tasks.update(&task).await?;
        Self::log_transition(&task, actor);

        if let Some(counterpart) = task.counterpart_of(actor.user_id()) {
            self.notify(counterpart, NotificationKind::TaskCompleted, &task)
                .await;
        }

        let refreshed_slots = if actor.is_provider() {
            self.slots.find_available(actor.user_id()).await?
        } else {
            Vec::new()
        };
        Ok(CompletionOutcome {
            task,
            refreshed_slots,
        })
    }

    /// Cancels a task with a reason, releases its reserved slot, cancels
    /// any confirmed booking, and notifies the non-acting party.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the actor is not a
    /// participant or the transition table forbids cancelling from the
    /// current status, and repository errors otherwise.
    pub async fn cancel_task(
        &self,
        actor: &ActorContext,
        task_id: TaskId,
        reason: impl Into<String> + Send,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.load(task_id).await?;
        task.ensure_participant(actor.user_id())?;
        let reason_text = reason.into();
        task.cancel(reason_text.clone(), &*self.clock)?;
        self.tasks.update(&task).await?;
        Self::log_transition(&task, actor);

        if let Some(slot_id) = task.slot_id() {
            self.slots.release(slot_id).await?;
        }
        for mut booking in self.bookings.find_by_task(task_id).await? {
            if booking.is_confirmed() {
                booking.cancel(reason_text.clone(), &*self.clock)?;
                self.bookings.update(&booking).await?;
            }
        }

        if let Some(counterpart) = task.counterpart_of(actor.user_id()) {
            self.notify(counterpart, NotificationKind::TaskCancelled, &task)
                .await;
        }
        Ok(task)
    }

    /// Applies a validated generic status transition, covering dispute and
    /// resolution flows, and notifies the non-acting party.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the actor is not a
    /// participant or the transition is not in the table, and repository
    /// errors otherwise.
    pub async fn update_status(
        &self,
        actor: &ActorContext,
        task_id: TaskId,
        target: TaskStatus,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.load(task_id).await?;
        task.ensure_participant(actor.user_id())?;
        task.transition_to(target, &*self.clock)?;
        self.tasks.update(&task).await?;
        Self::log_transition(&task, actor);

        if let Some(counterpart) = task.counterpart_of(actor.user_id()) {
            self.notify(counterpart, kind_for(target), &task).await;
        }
        Ok(task)
    }

    /// Merges a remotely pushed copy of a task with the local store.
    ///
    /// The copy with the higher entity version wins; on a tie the local
    /// copy is kept. An unknown task is inserted as-is.
    ///
    /// # Errors
    ///
    /// Returns repository errors when the lookup or write fails.
    pub async fn reconcile_remote(&self, remote: Task) -> TaskLifecycleResult<Task> {
        let Some(local) = self.tasks.find_by_id(remote.id()).await? else {
            self.tasks.insert(&remote).await?;
            debug!(task = %remote.id(), version = remote.version(), "remote task adopted");
            return Ok(remote);
        };
        if local.version() >= remote.version() {
            return Ok(local);
        }
        self.tasks.update(&remote).await?;
        debug!(
            task = %remote.id(),
            local_version = local.version(),
            remote_version = remote.version(),
            "remote task superseded local copy"
        );
        Ok(remote)
    }

    /// Offers a new bookable calendar slot for the acting provider.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::ProviderRoleRequired`] when the actor
    /// is not a provider, [`TaskLifecycleError::Domain`] when the interval
    /// is empty, and repository errors otherwise.
    pub async fn offer_slot(
        &self,
        actor: &ActorContext,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> TaskLifecycleResult<TimeSlot> {
        if !actor.is_provider() {
            return Err(TaskLifecycleError::ProviderRoleRequired);
        }
        let slot = TimeSlot::new(actor.user_id(), date, start, end)?;
        self.slots.insert(&slot).await?;
        Ok(slot)
    }

    /// Returns a provider's currently bookable slots.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Slots`] when the lookup fails.
    pub async fn available_slots(&self, provider_id: UserId) -> TaskLifecycleResult<Vec<TimeSlot>> {
        Ok(self.slots.find_available(provider_id).await?)
    }

    /// Returns all tasks currently open for provider responses.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Tasks`] when the lookup fails.
    pub async fn open_tasks(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.tasks.find_open().await?)
    }

    /// Returns all tasks posted by a client.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Tasks`] when the lookup fails.
    pub async fn tasks_for_client(&self, client_id: UserId) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.tasks.find_by_client(client_id).await?)
    }

    /// Returns all bookings recorded for a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Bookings`] when the lookup fails.
    pub async fn bookings_for_task(&self, task_id: TaskId) -> TaskLifecycleResult<Vec<Booking>> {
        Ok(self.bookings.find_by_task(task_id).await?)
    }

    async fn load(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::TaskNotFound(task_id))
    }

    fn ensure_owner(task: &Task, actor: &ActorContext) -> TaskLifecycleResult<()> {
        if task.client_id() == actor.user_id() {
            return Ok(());
        }
        Err(TaskLifecycleError::NotTaskOwner {
            task_id: task.id(),
            user_id: actor.user_id(),
        })
    }

    async fn release_aborted_slot(&self, slot_id: SlotId) {
        if let Err(err) = self.slots.release(slot_id).await {
            warn!(slot = %slot_id, error = %err, "failed to release slot after aborted application");
        }
    }

    async fn cancel_aborted_booking(&self, mut booking: Booking) {
        if booking.cancel("application aborted", &*self.clock).is_err() {
            return;
        }
        if let Err(err) = self.bookings.update(&booking).await {
            warn!(booking = %booking.id(), error = %err, "failed to cancel booking after aborted application");
        }
    }

    async fn notify(&self, recipient: UserId, kind: NotificationKind, task: &Task) {
        let notification = match self.composer.compose(kind, task) {
            Ok(notification) => notification,
            Err(err) => {
                warn!(task = %task.id(), kind = %kind, error = %err, "notification rendering failed");
                return;
            }
        };
        if let Err(err) = self.notifier.notify(recipient, notification).await {
            warn!(
                task = %task.id(),
                recipient = %recipient,
                kind = %kind,
                error = %err,
                "notification delivery failed"
            );
        }
    }

    fn log_transition(task: &Task, actor: &ActorContext) {
        debug!(
            task = %task.id(),
            status = %task.status(),
            version = task.version(),
            actor = %actor.user_id(),
            "task transitioned"
        );
    }
}

const fn kind_for(target: TaskStatus) -> NotificationKind {
    match target {
        TaskStatus::Disputed => NotificationKind::TaskDisputed,
        TaskStatus::Completed => NotificationKind::TaskCompleted,
        TaskStatus::Cancelled => NotificationKind::TaskCancelled,
        _ => NotificationKind::StatusChanged,
    }
}
