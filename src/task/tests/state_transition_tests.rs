//! Unit tests for task state transition validation and aggregate guards.

use chrono::{NaiveDate, NaiveTime};
use eyre::ensure;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

use crate::matching::domain::{BudgetRange, Urgency};
use crate::profile::domain::UserId;
use crate::task::domain::{
    Booking, Task, TaskDomainError, TaskStatus, TimeSlot,
};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[fixture]
fn posted_task(clock: DefaultClock) -> eyre::Result<Task> {
    Ok(Task::post(
        UserId::new(),
        "Fix kitchen sink",
        BudgetRange::new(100, 500)?,
        Urgency::Normal,
        &clock,
    )?)
}

fn open_slot() -> Result<TimeSlot, TaskDomainError> {
    TimeSlot::new(
        UserId::new(),
        NaiveDate::from_ymd_opt(2026, 9, 14).expect("valid date"),
        NaiveTime::from_hms_opt(9, 0, 0).expect("valid time"),
        NaiveTime::from_hms_opt(11, 0, 0).expect("valid time"),
    )
}

#[rstest]
#[case(TaskStatus::Draft, TaskStatus::Draft, false)]
#[case(TaskStatus::Draft, TaskStatus::Posted, true)]
#[case(TaskStatus::Draft, TaskStatus::Applications, false)]
#[case(TaskStatus::Draft, TaskStatus::Selected, false)]
#[case(TaskStatus::Draft, TaskStatus::InProgress, false)]
#[case(TaskStatus::Draft, TaskStatus::Completed, false)]
#[case(TaskStatus::Draft, TaskStatus::Cancelled, true)]
#[case(TaskStatus::Draft, TaskStatus::Disputed, false)]
#[case(TaskStatus::Posted, TaskStatus::Draft, false)]
#[case(TaskStatus::Posted, TaskStatus::Posted, false)]
#[case(TaskStatus::Posted, TaskStatus::Applications, true)]
#[case(TaskStatus::Posted, TaskStatus::Selected, false)]
#[case(TaskStatus::Posted, TaskStatus::InProgress, false)]
#[case(TaskStatus::Posted, TaskStatus::Completed, false)]
#[case(TaskStatus::Posted, TaskStatus::Cancelled, true)]
#[case(TaskStatus::Posted, TaskStatus::Disputed, false)]
#[case(TaskStatus::Applications, TaskStatus::Draft, false)]
#[case(TaskStatus::Applications, TaskStatus::Posted, false)]
#[case(TaskStatus::Applications, TaskStatus::Applications, false)]
#[case(TaskStatus::Applications, TaskStatus::Selected, true)]
#[case(TaskStatus::Applications, TaskStatus::InProgress, false)]
#[case(TaskStatus::Applications, TaskStatus::Completed, false)]
#[case(TaskStatus::Applications, TaskStatus::Cancelled, true)]
#[case(TaskStatus::Applications, TaskStatus::Disputed, false)]
#[case(TaskStatus::Selected, TaskStatus::Draft, false)]
#[case(TaskStatus::Selected, TaskStatus::Posted, false)]
#[case(TaskStatus::Selected, TaskStatus::Applications, false)]
#[case(TaskStatus::Selected, TaskStatus::Selected, false)]
#[case(TaskStatus::Selected, TaskStatus::InProgress, true)]
#[case(TaskStatus::Selected, TaskStatus::Completed, false)]
#[case(TaskStatus::Selected, TaskStatus::Cancelled, true)]
#[case(TaskStatus::Selected, TaskStatus::Disputed, false)]
#[case(TaskStatus::InProgress, TaskStatus::Draft, false)]
#[case(TaskStatus::InProgress, TaskStatus::Posted, false)]
#[case(TaskStatus::InProgress, TaskStatus::Applications, false)]
#[case(TaskStatus::InProgress, TaskStatus::Selected, false)]
#[case(TaskStatus::InProgress, TaskStatus::InProgress, false)]
#[case(TaskStatus::InProgress, TaskStatus::Completed, true)]
#[case(TaskStatus::InProgress, TaskStatus::Cancelled, true)]
#[case(TaskStatus::InProgress, TaskStatus::Disputed, true)]
#[case(TaskStatus::Completed, TaskStatus::Draft, false)]
#[case(TaskStatus::Completed, TaskStatus::Posted, false)]
#[case(TaskStatus::Completed, TaskStatus::Applications, false)]
#[case(TaskStatus::Completed, TaskStatus::Selected, false)]
#[case(TaskStatus::Completed, TaskStatus::InProgress, false)]
#[case(TaskStatus::Completed, TaskStatus::Completed, false)]
#[case(TaskStatus::Completed, TaskStatus::Cancelled, false)]
#[case(TaskStatus::Completed, TaskStatus::Disputed, true)]
#[case(TaskStatus::Cancelled, TaskStatus::Draft, false)]
#[case(TaskStatus::Cancelled, TaskStatus::Posted, false)]
#[case(TaskStatus::Cancelled, TaskStatus::Applications, false)]
#[case(TaskStatus::Cancelled, TaskStatus::Selected, false)]
#[case(TaskStatus::Cancelled, TaskStatus::InProgress, false)]
#[case(TaskStatus::Cancelled, TaskStatus::Completed, false)]
#[case(TaskStatus::Cancelled, TaskStatus::Cancelled, false)]
#[case(TaskStatus::Cancelled, TaskStatus::Disputed, false)]
#[case(TaskStatus::Disputed, TaskStatus::Draft, false)]
#[case(TaskStatus::Disputed, TaskStatus::Posted, false)]
#[case(TaskStatus::Disputed, TaskStatus::Applications, false)]
#[case(TaskStatus::Disputed, TaskStatus::Selected, false)]
#[case(TaskStatus::Disputed, TaskStatus::InProgress, false)]
#[case(TaskStatus::Disputed, TaskStatus::Completed, true)]
#[case(TaskStatus::Disputed, TaskStatus::Cancelled, true)]
#[case(TaskStatus::Disputed, TaskStatus::Disputed, false)]
fn can_transition_to_returns_expected(
    #[case] from: TaskStatus,
    #[case] to: TaskStatus,
    #[case] expected: bool,
) {
    assert_eq!(from.can_transition_to(to), expected);
}

#[rstest]
#[case(TaskStatus::Draft, false)]
#[case(TaskStatus::Posted, false)]
#[case(TaskStatus::Applications, false)]
#[case(TaskStatus::Selected, false)]
#[case(TaskStatus::InProgress, false)]
#[case(TaskStatus::Completed, false)]
#[case(TaskStatus::Cancelled, true)]
#[case(TaskStatus::Disputed, false)]
fn is_terminal_returns_expected(#[case] status: TaskStatus, #[case] expected: bool) {
    assert_eq!(status.is_terminal(), expected);
}

#[rstest]
fn posting_trims_title_and_starts_at_version_one(clock: DefaultClock) -> eyre::Result<()> {
    let task = Task::post(
        UserId::new(),
        "  Paint the fence  ",
        BudgetRange::new(100, 500)?,
        Urgency::High,
        &clock,
    )?;
    ensure!(task.title() == "Paint the fence");
    ensure!(task.status() == TaskStatus::Posted);
    ensure!(task.version() == 1);
    ensure!(task.provider_id().is_none());
    Ok(())
}

#[rstest]
fn blank_title_is_rejected(clock: DefaultClock) -> eyre::Result<()> {
    let result = Task::post(
        UserId::new(),
        "   ",
        BudgetRange::new(100, 500)?,
        Urgency::Normal,
        &clock,
    );
    ensure!(matches!(result, Err(TaskDomainError::EmptyTitle)));
    Ok(())
}

#[rstest]
fn invalid_transition_leaves_task_unchanged(
    clock: DefaultClock,
    posted_task: eyre::Result<Task>,
) -> eyre::Result<()> {
    let mut task = posted_task?;
    let before = task.clone();

    let result = task.complete(&clock);

    ensure!(matches!(
        result,
        Err(TaskDomainError::InvalidTransition {
            from: TaskStatus::Posted,
            to: TaskStatus::Completed,
            ..
        })
    ));
    ensure!(task == before);
    Ok(())
}

#[rstest]
fn every_successful_transition_bumps_the_version(
    clock: DefaultClock,
    posted_task: eyre::Result<Task>,
) -> eyre::Result<()> {
    let provider = UserId::new();
    let mut task = posted_task?;

    task.accept(provider, open_slot()?.id(), &clock)?;
    ensure!(task.version() == 2);
    task.select(&clock)?;
    ensure!(task.version() == 3);
    task.start(provider, &clock)?;
    ensure!(task.version() == 4);
    task.complete(&clock)?;
    ensure!(task.version() == 5);
    Ok(())
}

#[rstest]
fn accept_records_provider_slot_and_response_time(
    clock: DefaultClock,
    posted_task: eyre::Result<Task>,
) -> eyre::Result<()> {
    let provider = UserId::new();
    let slot = open_slot()?;
    let mut task = posted_task?;

    task.accept(provider, slot.id(), &clock)?;

    ensure!(task.status() == TaskStatus::Applications);
    ensure!(task.provider_id() == Some(provider));
    ensure!(task.slot_id() == Some(slot.id()));
    ensure!(task.responded_at().is_some());
    Ok(())
}

#[rstest]
fn decline_cancels_and_stamps_response_time(
    clock: DefaultClock,
    posted_task: eyre::Result<Task>,
) -> eyre::Result<()> {
    let mut task = posted_task?;
    task.decline(&clock)?;
    ensure!(task.status() == TaskStatus::Cancelled);
    ensure!(task.responded_at().is_some());
    ensure!(task.provider_id().is_none());
    Ok(())
}

#[rstest]
fn only_the_assigned_provider_may_start(
    clock: DefaultClock,
    posted_task: eyre::Result<Task>,
) -> eyre::Result<()> {
    let provider = UserId::new();
    let intruder = UserId::new();
    let mut task = posted_task?;
    task.accept(provider, open_slot()?.id(), &clock)?;
    task.select(&clock)?;

    let result = task.start(intruder, &clock);

    ensure!(matches!(
        result,
        Err(TaskDomainError::NotAssignedProvider { user_id, .. }) if user_id == intruder
    ));
    ensure!(task.status() == TaskStatus::Selected);
    Ok(())
}

#[rstest]
fn completion_timestamp_survives_dispute_resolution(
    clock: DefaultClock,
    posted_task: eyre::Result<Task>,
) -> eyre::Result<()> {
    let provider = UserId::new();
    let mut task = posted_task?;
    task.accept(provider, open_slot()?.id(), &clock)?;
    task.select(&clock)?;
    task.start(provider, &clock)?;
    task.complete(&clock)?;

    let completed_at = task.completed_at();
    ensure!(completed_at.is_some());
    task.dispute(&clock)?;
    task.transition_to(TaskStatus::Completed, &clock)?;

    ensure!(task.completed_at() == completed_at);
    Ok(())
}

#[rstest]
fn participant_check_covers_client_and_assigned_provider(
    clock: DefaultClock,
    posted_task: eyre::Result<Task>,
) -> eyre::Result<()> {
    let provider = UserId::new();
    let outsider = UserId::new();
    let mut task = posted_task?;
    task.accept(provider, open_slot()?.id(), &clock)?;

    task.ensure_participant(task.client_id())?;
    task.ensure_participant(provider)?;
    ensure!(matches!(
        task.ensure_participant(outsider),
        Err(TaskDomainError::NotParticipant { user_id, .. }) if user_id == outsider
    ));
    Ok(())
}

#[rstest]
fn counterpart_flips_between_client_and_provider(
    clock: DefaultClock,
    posted_task: eyre::Result<Task>,
) -> eyre::Result<()> {
    let provider = UserId::new();
    let mut task = posted_task?;
    ensure!(task.counterpart_of(task.client_id()).is_none());

    task.accept(provider, open_slot()?.id(), &clock)?;
    ensure!(task.counterpart_of(task.client_id()) == Some(provider));
    ensure!(task.counterpart_of(provider) == Some(task.client_id()));
    Ok(())
}

#[rstest]
fn slot_reserve_is_single_holder() -> eyre::Result<()> {
    let mut slot = open_slot()?;
    ensure!(slot.is_bookable());

    slot.reserve()?;
    let second = slot.reserve();

    ensure!(matches!(second, Err(TaskDomainError::SlotUnavailable(id)) if id == slot.id()));
    ensure!(slot.is_booked());

    slot.release();
    ensure!(slot.is_bookable());
    Ok(())
}

#[rstest]
fn withdrawn_slot_cannot_be_reserved() -> eyre::Result<()> {
    let mut slot = open_slot()?;
    slot.withdraw();
    ensure!(!slot.is_bookable());
    ensure!(slot.reserve().is_err());
    Ok(())
}

#[rstest]
fn empty_slot_interval_is_rejected() {
    let start = NaiveTime::from_hms_opt(10, 0, 0).expect("valid time");
    let result = TimeSlot::new(
        UserId::new(),
        NaiveDate::from_ymd_opt(2026, 9, 14).expect("valid date"),
        start,
        start,
    );
    assert!(matches!(result, Err(TaskDomainError::EmptySlotInterval)));
}

#[rstest]
fn booking_cannot_be_cancelled_twice(
    clock: DefaultClock,
    posted_task: eyre::Result<Task>,
) -> eyre::Result<()> {
    let task = posted_task?;
    let slot = open_slot()?;
    let mut booking = Booking::confirm(
        task.id(),
        slot.id(),
        slot.provider_id(),
        task.client_id(),
        &clock,
    );
    ensure!(booking.is_confirmed());

    booking.cancel("client withdrew", &clock)?;
    let second = booking.cancel("again", &clock);

    ensure!(matches!(
        second,
        Err(TaskDomainError::BookingAlreadyCancelled(id)) if id == booking.id()
    ));
    ensure!(booking.cancel_reason() == Some("client withdrew"));
    Ok(())
}
