use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::display_state::DisplayState;

pub(crate) const BAR_WIDTH: usize = 20;
pub(crate) const RESUME_LABEL: &str = "[resume]";

/// Pure rendering of a [`DisplayState`]: one indicator row plus an
/// optional dim tooltip row beneath it. Owns no state and makes no
/// decisions; everything it shows was decided by the state machine.
pub(crate) struct IndicatorWidget<'a> {
    state: &'a DisplayState,
    blink_on: bool,
}

impl<'a> IndicatorWidget<'a> {
    pub(crate) fn new(state: &'a DisplayState, blink_on: bool) -> Self {
        Self { state, blink_on }
    }

    /// Screen region of the resume sub-element, when the Paused row is
    /// showing one. Clicks inside it bypass the row-level dispatch.
    pub(crate) fn resume_hitbox(&self, area: Rect) -> Option<Rect> {
        let DisplayState::Paused { percent } = self.state else {
            return None;
        };
        let prefix = format!("⏸ {percent}% paused  ");
        let x = area.x.saturating_add(prefix.width() as u16);
        let width = RESUME_LABEL.width() as u16;
        if x.saturating_add(width) > area.x.saturating_add(area.width) {
            return None;
        }
        Some(Rect {
            x,
            y: area.y,
            width,
            height: 1,
        })
    }

    fn rune(&self) -> Span<'static> {
        if self.blink_on { "●".into() } else { "○".into() }
    }

    fn rows(&self) -> Vec<Line<'static>> {
        match self.state {
            DisplayState::Failed { tooltip, needs_clear } => {
                let label = if *needs_clear {
                    "Indexing failed: click to rebuild (clears index)"
                } else {
                    "Indexing failed: click to re-index"
                };
                vec![
                    Line::from(vec!["✗ ".red(), label.to_string().red()]),
                    Line::from(tooltip.clone().dim()),
                ]
            }
            DisplayState::Loading => vec![Line::from(vec![
                self.rune().cyan(),
                " Initializing".into(),
            ])],
            DisplayState::Done => vec![
                Line::from(vec!["● ".green(), "Index up to date".into()]),
                Line::from("Click to force a re-index".dim()),
            ],
            DisplayState::Disabled { tooltip } => vec![
                Line::from("○ Indexing disabled".dim()),
                Line::from(tooltip.clone().dim()),
            ],
            DisplayState::Paused { percent } => vec![Line::from(vec![
                "⏸ ".yellow(),
                format!("{percent}% paused  ").yellow(),
                RESUME_LABEL.bold(),
            ])],
            DisplayState::Indexing {
                percent,
                fill,
                detail,
            } => {
                let filled = (((fill / 100.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
                let bar: String = "█".repeat(filled) + &"░".repeat(BAR_WIDTH - filled);
                vec![
                    Line::from(vec![
                        self.rune().cyan(),
                        " ".into(),
                        bar.cyan(),
                        format!(" {percent}%").into(),
                    ]),
                    Line::from(detail.clone().dim()),
                ]
            }
            DisplayState::Hidden => Vec::new(),
        }
    }
}

impl Widget for &IndicatorWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let rows = self.rows();
        if rows.is_empty() {
            return;
        }
        Paragraph::new(rows).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;
    use ratatui::buffer::Buffer;

    use super::*;

    fn rendered(state: &DisplayState, width: u16, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        let widget = IndicatorWidget::new(state, true);
        (&widget).render(area, &mut buf);
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn indexing_row_shows_bar_and_truncated_percent() {
        let state = DisplayState::Indexing {
            percent: 99,
            fill: 99.9,
            detail: "embedding src/lib.rs".to_string(),
        };
        let rows = rendered(&state, 40, 2);
        assert_eq!(rows[0], format!("● {} 99%", "█".repeat(20)));
        assert_eq!(rows[1], "embedding src/lib.rs");
    }

    #[test]
    fn bar_fill_uses_the_unclamped_float_share() {
        let state = DisplayState::Indexing {
            percent: 37,
            fill: 37.5,
            detail: String::new(),
        };
        let rows = rendered(&state, 40, 2);
        // 37.5% of 20 cells rounds to 8 filled cells.
        let bar: String = "█".repeat(8) + &"░".repeat(12);
        assert_eq!(rows[0], format!("● {bar} 37%"));
    }

    #[test]
    fn paused_row_has_a_resume_hitbox() {
        let state = DisplayState::Paused { percent: 42 };
        let widget = IndicatorWidget::new(&state, false);
        let area = Rect::new(0, 0, 40, 1);
        let hitbox = widget.resume_hitbox(area).unwrap();
        assert_eq!(hitbox.y, 0);
        assert_eq!(hitbox.width, RESUME_LABEL.len() as u16);

        let rows = rendered(&state, 40, 1);
        assert_eq!(rows[0], "⏸ 42% paused  [resume]");
    }

    #[test]
    fn non_paused_rows_have_no_resume_hitbox() {
        let state = DisplayState::Done;
        let widget = IndicatorWidget::new(&state, false);
        assert_eq!(widget.resume_hitbox(Rect::new(0, 0, 40, 1)), None);
    }

    #[test]
    fn hidden_renders_nothing() {
        let rows = rendered(&DisplayState::Hidden, 10, 1);
        assert_eq!(rows[0], "");
    }
}
