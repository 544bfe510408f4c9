use semdex_protocol::ProgressUpdate;

use crate::confirm::ConfirmCallback;
use crate::confirm::ConfirmPrompt;

pub(crate) enum AppEvent {
    /// Host pushed its latest progress snapshot. Processed in arrival
    /// order; each fully replaces the previous one.
    Progress(ProgressUpdate),

    /// Open the destructive-rebuild confirmation modal. Only explicit
    /// confirm runs the callback.
    OpenRebuildConfirm {
        prompt: ConfirmPrompt,
        on_confirm: ConfirmCallback,
    },

    /// Request to exit the application gracefully.
    ExitRequest,
}
