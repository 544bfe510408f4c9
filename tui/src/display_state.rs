use semdex_protocol::IndexingStatus;
use semdex_protocol::ProgressUpdate;

use crate::context::IndicatorContext;
use crate::pause_intent::PauseIntent;

/// What the indicator shows, as an explicit tagged variant instead of
/// fallthrough branching. Variants are listed in match priority order;
/// `Hidden` is the terminal fallback for statuses we do not recognize,
/// not an error.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DisplayState {
    /// Error indicator. `needs_clear` marks a corrupted index whose
    /// recovery requires a destructive rebuild.
    Failed { tooltip: String, needs_clear: bool },
    /// Animated indicator, "Initializing". Nothing destructive can
    /// happen here; no index exists yet.
    Loading,
    /// Static indicator, "Index up to date".
    Done,
    /// Static dim indicator; tooltip carries the host's explanation.
    Disabled { tooltip: String },
    /// Static indicator with the truncated integer percent. Shown for
    /// host-confirmed pauses and for a local pause intent the host has
    /// not yet echoed.
    Paused { percent: i32 },
    /// Blinking indicator with a filled progress bar.
    Indexing {
        percent: i32,
        fill: f64,
        detail: String,
    },
    /// Render nothing.
    Hidden,
}

/// Pure total mapping from the latest host snapshot, the local pause
/// intent, and the hover flag to a display state.
///
/// Terminal statuses (`done`, `failed`, `disabled`) always win over a
/// pending pause intent; the intent only matters while the host
/// reports `indexing`.
pub(crate) fn display(
    update: &ProgressUpdate,
    intent: PauseIntent,
    hovered: bool,
    ctx: &IndicatorContext,
) -> DisplayState {
    match update.status {
        IndexingStatus::Failed => DisplayState::Failed {
            tooltip: ctx.failed_tooltip(&update.desc),
            needs_clear: update.should_clear_indexes == Some(true)
                && ctx.supports_rebuild_confirmation,
        },
        IndexingStatus::Loading => DisplayState::Loading,
        IndexingStatus::Done => DisplayState::Done,
        IndexingStatus::Disabled => DisplayState::Disabled {
            tooltip: update.desc.clone(),
        },
        IndexingStatus::Paused => DisplayState::Paused {
            percent: truncated_percent(update.progress),
        },
        IndexingStatus::Indexing if intent == PauseIntent::Paused => DisplayState::Paused {
            percent: truncated_percent(update.progress),
        },
        IndexingStatus::Indexing => DisplayState::Indexing {
            percent: truncated_percent(update.progress),
            fill: fill_percent(update.progress),
            detail: if hovered {
                "Click to pause".to_string()
            } else {
                update.desc.clone()
            },
        },
        IndexingStatus::Unknown => DisplayState::Hidden,
    }
}

/// Zero or one outgoing action produced by a whole-row click. The
/// Paused display's dedicated resume sub-element is handled separately
/// and never goes through this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClickAction {
    /// Send `forceReIndex` with no payload.
    ForceReIndex,
    /// Open the destructive-rebuild confirmation; only explicit
    /// confirm sends `forceReIndex({shouldClearIndexes: true})`.
    ConfirmClearReIndex,
    /// Record the new pause intent and send `setPaused` with it.
    TogglePause(bool),
}

pub(crate) fn row_click(
    update: &ProgressUpdate,
    intent: PauseIntent,
    ctx: &IndicatorContext,
) -> ClickAction {
    match update.status {
        IndexingStatus::Failed => {
            if update.should_clear_indexes == Some(true) && ctx.supports_rebuild_confirmation {
                ClickAction::ConfirmClearReIndex
            } else {
                ClickAction::ForceReIndex
            }
        }
        IndexingStatus::Indexing | IndexingStatus::Paused => {
            // Progress at or past 1.0 (or outside [0,1) entirely) means
            // the pause toggle no longer applies; treat the click as a
            // request for a fresh pass.
            if (0.0..1.0).contains(&update.progress) {
                ClickAction::TogglePause(!intent.is_paused())
            } else {
                ClickAction::ForceReIndex
            }
        }
        _ => ClickAction::ForceReIndex,
    }
}

/// Percent label: floor-toward-zero truncation, never rounding, so
/// 0.999 reads as 99%. May disagree with the bar fill at fractional
/// boundaries.
pub(crate) fn truncated_percent(progress: f64) -> i32 {
    (progress * 100.0) as i32
}

/// Bar fill: the clamped float percent, no truncation.
pub(crate) fn fill_percent(progress: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    (progress * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use semdex_protocol::IndexingStatus;
    use semdex_protocol::ProgressUpdate;

    use super::*;
    use crate::context::BUILTIN_EMBEDDINGS_PROVIDER;
    use crate::context::UNSUPPORTED_PROVIDER_MESSAGE;

    fn ctx() -> IndicatorContext {
        IndicatorContext::default()
    }

    fn indexing(progress: f64) -> ProgressUpdate {
        ProgressUpdate::new(IndexingStatus::Indexing, progress, "embedding src/lib.rs")
    }

    #[test]
    fn fill_percent_clamps_without_truncating() {
        assert_eq!(fill_percent(-0.2), 0.0);
        assert_eq!(fill_percent(1.4), 100.0);
        assert_eq!(fill_percent(0.37), 37.0);
        assert_eq!(fill_percent(0.375), 37.5);
        assert_eq!(fill_percent(f64::NAN), 0.0);
    }

    #[test]
    fn percent_label_truncates_toward_zero() {
        assert_eq!(truncated_percent(0.999), 99);
        assert_eq!(truncated_percent(0.37), 37);
        assert_eq!(truncated_percent(0.0), 0);
    }

    #[test]
    fn indexing_shows_bar_and_description() {
        let state = display(&indexing(0.37), PauseIntent::Unset, false, &ctx());
        assert_eq!(
            state,
            DisplayState::Indexing {
                percent: 37,
                fill: 37.0,
                detail: "embedding src/lib.rs".to_string(),
            }
        );
    }

    #[test]
    fn hover_replaces_description_with_pause_hint() {
        let hovered = display(&indexing(0.5), PauseIntent::Unset, true, &ctx());
        assert_matches!(hovered, DisplayState::Indexing { detail, .. } if detail == "Click to pause");
        let idle = display(&indexing(0.5), PauseIntent::Unset, false, &ctx());
        assert_matches!(idle, DisplayState::Indexing { detail, .. } if detail == "embedding src/lib.rs");
    }

    #[test]
    fn local_pause_intent_shows_paused_while_host_still_indexing() {
        let state = display(&indexing(0.5), PauseIntent::Paused, false, &ctx());
        assert_eq!(state, DisplayState::Paused { percent: 50 });
    }

    #[test]
    fn terminal_statuses_override_pending_pause_intent() {
        let done = ProgressUpdate::new(IndexingStatus::Done, 1.0, "");
        assert_eq!(display(&done, PauseIntent::Paused, false, &ctx()), DisplayState::Done);

        let failed = ProgressUpdate::failed("boom", false);
        assert_matches!(
            display(&failed, PauseIntent::Paused, false, &ctx()),
            DisplayState::Failed { .. }
        );

        let disabled = ProgressUpdate::new(IndexingStatus::Disabled, 0.0, "indexing is off");
        assert_matches!(
            display(&disabled, PauseIntent::Paused, false, &ctx()),
            DisplayState::Disabled { .. }
        );
    }

    #[test]
    fn host_confirmed_pause_shows_truncated_percent() {
        let paused = ProgressUpdate::new(IndexingStatus::Paused, 0.999, "");
        assert_eq!(
            display(&paused, PauseIntent::Unset, false, &ctx()),
            DisplayState::Paused { percent: 99 }
        );
    }

    #[test]
    fn unknown_status_renders_nothing() {
        let update = ProgressUpdate::new(IndexingStatus::Unknown, 0.5, "whatever");
        assert_eq!(display(&update, PauseIntent::Unset, false, &ctx()), DisplayState::Hidden);
    }

    #[test]
    fn failed_with_unsupported_provider_substitutes_tooltip() {
        let ctx = IndicatorContext {
            supports_builtin_embeddings: false,
            embeddings_provider: Some(BUILTIN_EMBEDDINGS_PROVIDER.to_string()),
            ..Default::default()
        };
        let state = display(&ProgressUpdate::failed("boom", false), PauseIntent::Unset, false, &ctx);
        assert_matches!(state, DisplayState::Failed { tooltip, .. } if tooltip == UNSUPPORTED_PROVIDER_MESSAGE);
    }

    #[test]
    fn row_click_toggles_pause_mid_indexing() {
        assert_eq!(
            row_click(&indexing(0.5), PauseIntent::Unset, &ctx()),
            ClickAction::TogglePause(true)
        );
        assert_eq!(
            row_click(&indexing(0.5), PauseIntent::Paused, &ctx()),
            ClickAction::TogglePause(false)
        );
        assert_eq!(
            row_click(&indexing(0.5), PauseIntent::Resumed, &ctx()),
            ClickAction::TogglePause(true)
        );
    }

    #[test]
    fn row_click_at_or_past_full_progress_forces_re_index() {
        assert_eq!(
            row_click(&indexing(1.0), PauseIntent::Unset, &ctx()),
            ClickAction::ForceReIndex
        );
        assert_eq!(
            row_click(&indexing(-0.1), PauseIntent::Unset, &ctx()),
            ClickAction::ForceReIndex
        );
        assert_eq!(
            row_click(&indexing(f64::NAN), PauseIntent::Unset, &ctx()),
            ClickAction::ForceReIndex
        );
    }

    #[test]
    fn row_click_on_paused_status_toggles_too() {
        let paused = ProgressUpdate::new(IndexingStatus::Paused, 0.4, "");
        assert_eq!(
            row_click(&paused, PauseIntent::Paused, &ctx()),
            ClickAction::TogglePause(false)
        );
    }

    #[test]
    fn failed_corruption_is_confirmation_gated_when_supported() {
        let failed = ProgressUpdate::failed("corrupt", true);
        assert_eq!(
            row_click(&failed, PauseIntent::Unset, &ctx()),
            ClickAction::ConfirmClearReIndex
        );

        let limited = IndicatorContext {
            supports_rebuild_confirmation: false,
            ..Default::default()
        };
        assert_eq!(
            row_click(&failed, PauseIntent::Unset, &limited),
            ClickAction::ForceReIndex
        );
    }

    #[test]
    fn plain_failure_forces_re_index_immediately() {
        let failed = ProgressUpdate::failed("boom", false);
        assert_eq!(
            row_click(&failed, PauseIntent::Unset, &ctx()),
            ClickAction::ForceReIndex
        );
    }

    #[test]
    fn other_statuses_default_to_force_re_index() {
        for status in [IndexingStatus::Loading, IndexingStatus::Done, IndexingStatus::Disabled] {
            let update = ProgressUpdate::new(status, 0.0, "");
            assert_eq!(
                row_click(&update, PauseIntent::Unset, &ctx()),
                ClickAction::ForceReIndex
            );
        }
    }
}
