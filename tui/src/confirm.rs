use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;

/// Callback invoked only on explicit confirmation; dismissal drops it
/// without running it.
pub(crate) type ConfirmCallback = Box<dyn FnOnce() + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ConfirmPrompt {
    pub title: &'static str,
    pub body: &'static str,
    pub confirm_label: &'static str,
}

pub(crate) const REBUILD_PROMPT: ConfirmPrompt = ConfirmPrompt {
    title: "Rebuild codebase index",
    body: "The index is corrupted and must be cleared before indexing can continue. \
           Clearing deletes all existing index data and re-indexes from scratch.",
    confirm_label: "Rebuild",
};

/// Confirmation-dialog service consumed by the indicator. The
/// indicator never sees a return value; the dialog either runs the
/// callback on confirm or drops it on dismiss.
pub(crate) trait ConfirmationDialog {
    fn request(&self, prompt: ConfirmPrompt, on_confirm: ConfirmCallback);
}

/// App-level implementation: routes the prompt through the app event
/// channel so the main loop can present it as a modal.
pub(crate) struct AppConfirmationDialog {
    app_event_tx: AppEventSender,
}

impl AppConfirmationDialog {
    pub(crate) fn new(app_event_tx: AppEventSender) -> Self {
        Self { app_event_tx }
    }
}

impl ConfirmationDialog for AppConfirmationDialog {
    fn request(&self, prompt: ConfirmPrompt, on_confirm: ConfirmCallback) {
        self.app_event_tx.send(AppEvent::OpenRebuildConfirm { prompt, on_confirm });
    }
}
