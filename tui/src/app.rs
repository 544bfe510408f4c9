use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::Event;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;
use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use tokio::select;
use tokio::sync::mpsc::unbounded_channel;
use tokio::time::interval;
use tokio_stream::StreamExt;

use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::cli::Cli;
use crate::confirm::AppConfirmationDialog;
use crate::confirm::ConfirmCallback;
use crate::confirm::ConfirmPrompt;
use crate::context::IndicatorContext;
use crate::display_state::DisplayState;
use crate::host_link::HostMessenger;
use crate::indicator_widget::IndicatorWidget;
use crate::local_host::HostProfile;
use crate::local_host::spawn_local_host;
use crate::progress_bar::IndexingProgressBar;
use crate::tui;

const BLINK_INTERVAL: Duration = Duration::from_millis(400);

pub(crate) struct App {
    app_event_tx: AppEventSender,
    progress_bar: IndexingProgressBar,
    modal: Option<RebuildConfirmModal>,
    /// Clickable indicator row as of the last draw.
    indicator_row: Rect,
    /// Resume sub-element as of the last draw, when visible.
    resume_hitbox: Option<Rect>,
    blink_on: bool,
}

struct RebuildConfirmModal {
    prompt: ConfirmPrompt,
    on_confirm: Option<ConfirmCallback>,
}

impl App {
    pub(crate) async fn run(terminal: &mut tui::Tui, cli: &Cli) -> Result<()> {
        let (app_event_tx, mut app_event_rx) = unbounded_channel();
        let app_event_tx = AppEventSender::new(app_event_tx);

        let (host_tx, host_rx) = unbounded_channel();
        let messenger = HostMessenger::new(host_tx);
        spawn_local_host(
            host_rx,
            app_event_tx.clone(),
            HostProfile {
                total_files: cli.files,
                tick: Duration::from_millis(cli.tick_ms),
                fail_at: cli.fail_at,
                corrupt_on_failure: cli.corrupt,
            },
        );

        let ctx = IndicatorContext {
            supports_rebuild_confirmation: !cli.no_confirm,
            supports_builtin_embeddings: !cli.no_builtin_embeddings,
            embeddings_provider: cli.embeddings_provider.clone(),
        };
        let dialog = AppConfirmationDialog::new(app_event_tx.clone());
        let mut app = Self {
            app_event_tx,
            progress_bar: IndexingProgressBar::new(messenger, Box::new(dialog), ctx),
            modal: None,
            indicator_row: Rect::default(),
            resume_hitbox: None,
            blink_on: true,
        };

        let mut terminal_events = EventStream::new();
        let mut blink = interval(BLINK_INTERVAL);
        loop {
            terminal.draw(|frame| app.draw(frame))?;
            select! {
                Some(event) = app_event_rx.recv() => {
                    if !app.handle_app_event(event) {
                        break;
                    }
                }
                Some(Ok(event)) = terminal_events.next() => {
                    if !app.handle_terminal_event(event) {
                        break;
                    }
                }
                _ = blink.tick() => {
                    app.blink_on = !app.blink_on;
                }
            }
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        self.progress_bar.ensure_initialized();

        let [header, indicator, _] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new(vec![
                Line::from("semdex · codebase index status".bold()),
                Line::from(
                    "click / space toggles pause · r resumes · q quits".dim(),
                ),
            ]),
            header,
        );

        let state = self.progress_bar.display();
        let widget = IndicatorWidget::new(&state, self.blink_on);
        self.indicator_row = Rect {
            height: 1.min(indicator.height),
            ..indicator
        };
        self.resume_hitbox = widget.resume_hitbox(self.indicator_row);
        frame.render_widget(&widget, indicator);

        if let Some(modal) = &self.modal {
            render_modal(frame, modal.prompt);
        }
    }

    fn handle_app_event(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::Progress(update) => {
                self.progress_bar.handle_update(update);
            }
            AppEvent::OpenRebuildConfirm { prompt, on_confirm } => {
                self.modal = Some(RebuildConfirmModal {
                    prompt,
                    on_confirm: Some(on_confirm),
                });
            }
            AppEvent::ExitRequest => {
                return false;
            }
        }
        true
    }

    fn handle_terminal_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key_event) => self.handle_key_event(key_event),
            Event::Mouse(mouse_event) => {
                self.handle_mouse_event(mouse_event);
                true
            }
            _ => true,
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if key_event.kind != KeyEventKind::Press {
            return true;
        }
        if self.modal.is_some() {
            match key_event.code {
                KeyCode::Enter | KeyCode::Char('y') => {
                    if let Some(mut modal) = self.modal.take()
                        && let Some(on_confirm) = modal.on_confirm.take()
                    {
                        on_confirm();
                    }
                }
                KeyCode::Esc | KeyCode::Char('n') => {
                    self.modal = None;
                }
                _ => {}
            }
            return true;
        }
        match key_event.code {
            KeyCode::Char('q') => {
                self.app_event_tx.send(AppEvent::ExitRequest);
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.app_event_tx.send(AppEvent::ExitRequest);
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.progress_bar.on_row_click();
            }
            KeyCode::Char('r') => {
                if matches!(self.progress_bar.display(), DisplayState::Paused { .. }) {
                    self.progress_bar.on_resume_click();
                }
            }
            _ => {}
        }
        true
    }

    fn handle_mouse_event(&mut self, mouse_event: MouseEvent) {
        let position = Position::new(mouse_event.column, mouse_event.row);
        match mouse_event.kind {
            MouseEventKind::Moved => {
                self.progress_bar
                    .set_hovered(self.indicator_row.contains(position));
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if self.modal.is_some() {
                    return;
                }
                if self
                    .resume_hitbox
                    .is_some_and(|hitbox| hitbox.contains(position))
                {
                    self.progress_bar.on_resume_click();
                } else if self.indicator_row.contains(position) {
                    self.progress_bar.on_row_click();
                }
            }
            _ => {}
        }
    }
}

fn render_modal(frame: &mut Frame, prompt: ConfirmPrompt) {
    let area = frame.area();
    let width = area.width.min(60);
    let height = area.height.min(7);
    let modal_area = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, modal_area);
    let body = Paragraph::new(vec![
        Line::from(prompt.body),
        Line::from(""),
        Line::from(vec![
            "Enter".bold(),
            format!(" {} · ", prompt.confirm_label).into(),
            "Esc".bold(),
            " cancel".into(),
        ]),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::bordered().title(prompt.title));
    frame.render_widget(body, modal_area);
}
