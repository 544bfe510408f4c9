/// Local record of the user's most recent pause/resume request.
///
/// This is a request, not a confirmed state: the host's next
/// `ProgressUpdate` is the confirmation. The intent is never reset
/// within a component lifetime; terminal statuses simply render as if
/// it did not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PauseIntent {
    /// No pause/resume action taken since construction.
    #[default]
    Unset,
    /// User requested a pause.
    Paused,
    /// User requested a resume.
    Resumed,
}

impl PauseIntent {
    /// `Unset` counts as "not paused" when the row click flips the
    /// intent.
    pub(crate) fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    pub(crate) fn requesting(paused: bool) -> Self {
        if paused { Self::Paused } else { Self::Resumed }
    }
}
