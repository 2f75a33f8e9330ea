//! Template-driven notification composition.

use minijinja::Environment;
use serde_json::{Map, Value};

use crate::task::domain::Task;
use crate::task::ports::{Notification, NotificationError, NotificationKind};

/// Composes recipient-facing notification text for lifecycle events.
///
/// Titles are fixed per event kind; message bodies are `minijinja`
/// templates rendered against the task's current state.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationComposer;

impl NotificationComposer {
    /// Creates a composer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the notification for one lifecycle event.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Rendering`] when the message template
    /// fails to render.
    pub fn compose(
        &self,
        kind: NotificationKind,
        task: &Task,
    ) -> Result<Notification, NotificationError> {
        let environment = Environment::new();
        let context = build_context(task);
        let message = environment
            .render_str(message_template(kind), context)
            .map_err(|error| NotificationError::Rendering(error.to_string()))?;
        Ok(Notification {
            title: title(kind).to_owned(),
            message,
            kind,
            task_id: task.id(),
        })
    }
}

fn build_context(task: &Task) -> Map<String, Value> {
    let mut context = Map::new();
    context.insert(
        "task_title".to_owned(),
        Value::String(task.title().to_owned()),
    );
    context.insert(
        "status".to_owned(),
        Value::String(task.status().to_string()),
    );
    context.insert(
        "reason".to_owned(),
        task.cancel_reason()
            .map_or(Value::Null, |reason| Value::String(reason.to_owned())),
    );
    context
}

const fn title(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::TaskAccepted => "New application",
        NotificationKind::TaskDeclined => "Application declined",
        NotificationKind::ProviderSelected => "You were selected",
        NotificationKind::TaskStarted => "Work started",
        NotificationKind::TaskCompleted => "Task completed",
        NotificationKind::TaskCancelled => "Task cancelled",
        NotificationKind::TaskDisputed => "Task disputed",
        NotificationKind::StatusChanged => "Task updated",
    }
}

const fn message_template(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::TaskAccepted => "A provider applied to \"{{ task_title }}\".",
        NotificationKind::TaskDeclined => "A provider declined \"{{ task_title }}\".",
        NotificationKind::ProviderSelected => {
            "The client selected you for \"{{ task_title }}\"."
        }
        NotificationKind::TaskStarted => "Work on \"{{ task_title }}\" has started.",
        NotificationKind::TaskCompleted => "\"{{ task_title }}\" was marked completed.",
        NotificationKind::TaskCancelled => {
            "\"{{ task_title }}\" was cancelled{% if reason %}: {{ reason }}{% endif %}."
        }
        NotificationKind::TaskDisputed => "\"{{ task_title }}\" entered dispute.",
        NotificationKind::StatusChanged => "\"{{ task_title }}\" moved to {{ status }}.",
    }
}
