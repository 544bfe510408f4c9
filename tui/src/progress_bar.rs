use std::cell::Cell;

use semdex_protocol::HostRequest;
use semdex_protocol::ProgressUpdate;

use crate::confirm::ConfirmationDialog;
use crate::confirm::REBUILD_PROMPT;
use crate::context::IndicatorContext;
use crate::display_state::ClickAction;
use crate::display_state::DisplayState;
use crate::display_state::display;
use crate::display_state::row_click;
use crate::host_link::HostMessenger;
use crate::pause_intent::PauseIntent;

/// The indexing progress indicator: holds the latest host snapshot,
/// the local pause intent, and the hover flag, and translates user
/// interaction into at most one outgoing host request.
pub(crate) struct IndexingProgressBar {
    messenger: HostMessenger,
    dialog: Box<dyn ConfirmationDialog>,
    ctx: IndicatorContext,
    /// Most recently received snapshot, if any. Arrivals replace it
    /// wholesale; a stale confirmation arriving late simply becomes
    /// the new displayed state.
    current: Option<ProgressUpdate>,
    intent: PauseIntent,
    hovered: bool,
    /// One-shot guard for the mount notification. Deliberately a bare
    /// cell outside the display state: flipping it never schedules a
    /// redraw.
    initialized: Cell<bool>,
}

impl IndexingProgressBar {
    pub(crate) fn new(
        messenger: HostMessenger,
        dialog: Box<dyn ConfirmationDialog>,
        ctx: IndicatorContext,
    ) -> Self {
        Self {
            messenger,
            dialog,
            ctx,
            current: None,
            intent: PauseIntent::Unset,
            hovered: false,
            initialized: Cell::new(false),
        }
    }

    /// Called from the render path. Asks the host to replay its current
    /// progress state exactly once per component lifetime, no matter
    /// how many frames are drawn; covers the UI attaching after
    /// indexing already started.
    pub(crate) fn ensure_initialized(&self) {
        if !self.initialized.replace(true) {
            self.messenger
                .post(HostRequest::IndexingProgressBarInitialized);
        }
    }

    pub(crate) fn handle_update(&mut self, update: ProgressUpdate) {
        self.current = Some(update);
    }

    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub(crate) fn display(&self) -> DisplayState {
        let default = ProgressUpdate::default();
        let update = self.current.as_ref().unwrap_or(&default);
        display(update, self.intent, self.hovered, &self.ctx)
    }

    /// Whole-row click. Dispatches per the current snapshot; the
    /// destructive path detours through the confirmation dialog and
    /// emits only on explicit confirm.
    pub(crate) fn on_row_click(&mut self) {
        let default = ProgressUpdate::default();
        let update = self.current.as_ref().unwrap_or(&default);
        match row_click(update, self.intent, &self.ctx) {
            ClickAction::ForceReIndex => self.messenger.post(HostRequest::force_re_index()),
            ClickAction::ConfirmClearReIndex => {
                let messenger = self.messenger.clone();
                self.dialog.request(
                    REBUILD_PROMPT,
                    Box::new(move || messenger.post(HostRequest::force_clear_re_index())),
                );
            }
            ClickAction::TogglePause(paused) => self.set_intent(paused),
        }
    }

    /// Dedicated resume sub-element on the Paused display. Not a
    /// toggle: always requests resume, and records the intent so the
    /// display stops showing Paused once the host echoes.
    pub(crate) fn on_resume_click(&mut self) {
        self.set_intent(false);
    }

    /// Reconciler rule: every transition to a concrete intent emits
    /// exactly one `setPaused`. Rapid clicks are not debounced; each
    /// one produces one request and the host resolves last-wins.
    fn set_intent(&mut self, paused: bool) {
        self.intent = PauseIntent::requesting(paused);
        self.messenger.post(HostRequest::SetPaused(paused));
    }
}
