//! TUI interface — the three-step wizard: key, swaras, matched melakarta.
//!
//! The App struct holds all TUI state and drives the event loop.

pub mod keybindings;
pub mod layout;
pub mod status;

pub use keybindings::{map_key, Action};
pub use layout::Step;
pub use status::{Notice, NoticeKind};

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use ratatui::Frame;
use tracing::{debug, info};

use crate::config::Config;
use crate::session::Session;
use crate::theory::{spell_all, Availability, Catalog, Key, Melakarta, Swara, Toggle};
use crate::tone::{self, TonePlayer};

use layout::{wrap_cursor, KEYS_PER_ROW};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The main TUI application state.
pub struct App<P: TonePlayer> {
    pub session: Session,
    pub catalog: Catalog,
    pub config: Config,
    pub step: Step,
    /// Index into `Key::ALL` on the key step.
    pub key_cursor: usize,
    /// Index into `Swara::ALL` on the swara step.
    pub row_cursor: usize,
    pub notice: Option<Notice>,
    pub help_visible: bool,
    pub should_quit: bool,
    pub player: P,
}

impl<P: TonePlayer> App<P> {
    pub fn new(catalog: Catalog, config: Config, player: P) -> Self {
        let key = config.default_key;
        Self {
            session: Session::new(key),
            catalog,
            step: Step::Key,
            key_cursor: key_index(key),
            row_cursor: 1,
            notice: None,
            help_visible: false,
            should_quit: false,
            player,
            config,
        }
    }

    /// The swara under the cursor on the swara step.
    pub fn current_swara(&self) -> Swara {
        Swara::ALL[self.row_cursor.min(Swara::ALL.len() - 1)]
    }

    /// The matched entry, if the selection is complete.
    pub fn matched(&self) -> Option<&Melakarta> {
        self.session.matched(&self.catalog).ok().flatten()
    }

    pub fn handle_action(&mut self, action: Action) {
        debug!(?action, step = ?self.step, "action");
        match action {
            Action::Quit => {
                self.should_quit = true;
                return;
            }
            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
                return;
            }
            Action::Back if self.help_visible => {
                self.help_visible = false;
                return;
            }
            _ => {}
        }

        self.notice = None;
        match self.step {
            Step::Key => self.handle_key_step(action),
            Step::Swaras => self.handle_swara_step(action),
            Step::Result => self.handle_result_step(action),
        }
    }

    fn handle_key_step(&mut self, action: Action) {
        let len = Key::ALL.len();
        match action {
            Action::Left => self.key_cursor = wrap_cursor(self.key_cursor, -1, len),
            Action::Right => self.key_cursor = wrap_cursor(self.key_cursor, 1, len),
            Action::Up => {
                self.key_cursor = wrap_cursor(self.key_cursor, -(KEYS_PER_ROW as isize), len)
            }
            Action::Down => {
                self.key_cursor = wrap_cursor(self.key_cursor, KEYS_PER_ROW as isize, len)
            }
            Action::Confirm => {
                let key = Key::ALL[self.key_cursor];
                self.session.select_key(key);
                self.step = Step::Swaras;
                self.row_cursor = 1;
                let pa = self.session.spell(Swara::Pa);
                self.notice = Some(Notice::info(format!("Key {key}: S = {key}, P = {pa}")));
            }
            _ => {}
        }
    }

    fn handle_swara_step(&mut self, action: Action) {
        let len = Swara::ALL.len();
        match action {
            Action::Up => self.row_cursor = wrap_cursor(self.row_cursor, -1, len),
            Action::Down => self.row_cursor = wrap_cursor(self.row_cursor, 1, len),
            Action::Confirm => self.toggle_current(),
            Action::ResetSelection => {
                self.session.reset();
                self.notice = Some(Notice::info("Selection cleared"));
            }
            Action::Next => {
                let missing = status::missing_families(&self.session);
                if missing.is_empty() {
                    self.step = Step::Result;
                    if let Some(m) = self.matched() {
                        info!(ordinal = m.ordinal, name = m.name, "melakarta matched");
                    }
                } else {
                    let names: Vec<&str> = missing.iter().map(|f| f.label()).collect();
                    self.notice = Some(Notice::error(format!(
                        "Still to choose: {}",
                        names.join(", ")
                    )));
                }
            }
            Action::Back => {
                self.key_cursor = key_index(self.session.key());
                self.step = Step::Key;
            }
            _ => {}
        }
    }

    fn handle_result_step(&mut self, action: Action) {
        match action {
            Action::PlayArohanam => self.play_matched(true),
            Action::PlayAvarohanam => self.play_matched(false),
            Action::NewKey => {
                self.session.reset();
                self.key_cursor = key_index(self.session.key());
                self.step = Step::Key;
            }
            Action::Back => self.step = Step::Swaras,
            _ => {}
        }
    }

    fn toggle_current(&mut self) {
        let swara = self.current_swara();
        match self.session.toggle(swara) {
            Ok(outcome) => {
                let note = self.session.spell(swara);
                self.notice = Some(Notice::info(match outcome {
                    Toggle::Fixed => format!("{swara} is fixed ({note})"),
                    Toggle::Deselected => format!("{swara} cleared"),
                    Toggle::Selected { previous: Some(prev) } => {
                        format!("{swara} ({note}) replaces {prev}")
                    }
                    Toggle::Selected { previous: None } => format!("{swara} ({note}) selected"),
                }));
                let hz = tone::frequency(self.config.reference_hz, self.session.key(), swara);
                self.player.play_sequence(&[hz], self.config.preview_seconds);
            }
            Err(e) => self.notice = Some(Notice::error(e.to_string())),
        }
    }

    fn play_matched(&mut self, ascending: bool) {
        let Some(entry) = self.matched() else {
            self.notice = Some(Notice::error("No melakarta to play"));
            return;
        };
        let (label, swaras) = if ascending {
            ("arohanam", entry.arohanam())
        } else {
            ("avarohanam", entry.avarohanam())
        };
        let name = entry.name;
        let freqs = tone::frequencies(self.config.reference_hz, self.session.key(), &swaras);
        self.player.play_sequence(&freqs, self.config.note_seconds);
        self.notice = Some(Notice::info(format!("Playing {name} {label}")));
    }

    /// Render the full UI.
    pub fn draw(&self, frame: &mut Frame) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        match self.step {
            Step::Key => self.draw_keys(frame, chunks[1]),
            Step::Swaras => self.draw_swaras(frame, chunks[1]),
            Step::Result => self.draw_result(frame, chunks[1]),
        }
        self.draw_status(frame, chunks[2]);

        if self.help_visible {
            self.draw_help(frame, size);
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                " Melakarta ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "  Step {}/3: {}",
                self.step.number(),
                self.step.title()
            )),
            Span::styled(
                format!("   Key: {}", self.session.key()),
                Style::default().fg(Color::Yellow),
            ),
        ]);
        let block = Block::default().borders(Borders::ALL);
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn draw_keys(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Keys — Enter to choose ");
        let mut lines = vec![Line::from("")];
        for (row_idx, keys) in Key::ALL.chunks(KEYS_PER_ROW).enumerate() {
            let spans: Vec<Span> = keys
                .iter()
                .enumerate()
                .map(|(col, key)| {
                    let idx = row_idx * KEYS_PER_ROW + col;
                    let label = format!(" {:^4} ", key.name());
                    if idx == self.key_cursor {
                        Span::styled(
                            label,
                            Style::default()
                                .fg(Color::Black)
                                .bg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        )
                    } else if *key == self.session.key() {
                        Span::styled(label, Style::default().fg(Color::Yellow))
                    } else {
                        Span::raw(label)
                    }
                })
                .collect();
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn draw_swaras(&self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let items: Vec<ListItem> = self
            .session
            .rows()
            .into_iter()
            .enumerate()
            .map(|(idx, row)| {
                let (marker, style) = match row.availability {
                    Availability::Fixed => ("fixed", Style::default().fg(Color::Cyan)),
                    Availability::Selected => (
                        "selected",
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Availability::Taken => ("taken", Style::default().fg(Color::DarkGray)),
                    Availability::Open => ("", Style::default()),
                };
                let text = format!(
                    "{:<3} {:<15} {:<5} {}",
                    row.swara.token(),
                    row.interval,
                    row.note.spelling(),
                    marker
                );
                let style = if idx == self.row_cursor {
                    style.add_modifier(Modifier::REVERSED)
                } else {
                    style
                };
                ListItem::new(Line::from(Span::styled(text, style)))
            })
            .collect();
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Swaras — Enter to toggle, Tab when done "),
        );
        frame.render_widget(list, columns[0]);

        let reserved: Vec<String> = self
            .session
            .reserved_semitones()
            .into_iter()
            .map(|s| s.to_string())
            .collect();
        let summary = vec![
            Line::from(""),
            Line::from(Span::styled(
                status::selection_summary(&self.session),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Reserved semitones: {}", reserved.join(" "))),
        ];
        frame.render_widget(
            Paragraph::new(summary).block(Block::default().borders(Borders::ALL).title(" Selection ")),
            columns[1],
        );
    }

    fn draw_result(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title(" Result ");
        let key = self.session.key();
        let lines = match self.session.matched(&self.catalog) {
            Ok(Some(entry)) => {
                let aro = entry.arohanam();
                let ava = entry.avarohanam();
                vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        format!("#{} {}", entry.ordinal, entry.name),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(format!(
                        "Chakra {}: {}",
                        entry.chakra_number(),
                        entry.chakra()
                    )),
                    Line::from(""),
                    Line::from(format!("Arohanam:   {}", entry.arohanam_text())),
                    Line::from(format!("            {}", notes_text(key, &aro))),
                    Line::from(""),
                    Line::from(format!("Avarohanam: {}", entry.avarohanam_text())),
                    Line::from(format!("            {}", notes_text(key, &ava))),
                ]
            }
            Ok(None) => vec![Line::from("Selection is incomplete.")],
            Err(e) => vec![Line::from(Span::styled(
                e.to_string(),
                Style::default().fg(Color::Red),
            ))],
        };
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.notice {
            Some(n) => {
                let color = match n.kind {
                    NoticeKind::Info => Color::Gray,
                    NoticeKind::Error => Color::Red,
                };
                Line::from(Span::styled(format!(" {}", n.text), Style::default().fg(color)))
            }
            None => Line::from(Span::styled(
                " ? help  q quit",
                Style::default().fg(Color::DarkGray),
            )),
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn draw_help(&self, frame: &mut Frame, area: Rect) {
        let width = (area.width * 60 / 100).max(40).min(area.width);
        let height = (area.height * 60 / 100).max(10).min(area.height);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let overlay = Rect::new(x, y, width, height);

        let block = Block::default()
            .style(Style::default().bg(Color::Black))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help — Press ? or Esc to close ");
        let lines: Vec<Line> = keybindings::help_lines(self.step)
            .iter()
            .map(|(keys, desc)| {
                Line::from(vec![
                    Span::styled(format!(" {keys:<16}"), Style::default().fg(Color::Yellow)),
                    Span::raw(*desc),
                ])
            })
            .collect();
        frame.render_widget(Clear, overlay);
        frame.render_widget(Paragraph::new(lines).block(block), overlay);
    }

    /// Run the event loop until the user quits.
    pub fn run(
        &mut self,
        terminal: &mut ratatui::Terminal<impl ratatui::backend::Backend>,
    ) -> io::Result<()> {
        while !self.should_quit {
            terminal
                .draw(|frame| self.draw(frame))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if event::poll(POLL_INTERVAL)? {
                if let CrosstermEvent::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(action) = map_key(key, self.step) {
                            self.handle_action(action);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

fn key_index(key: Key) -> usize {
    Key::ALL.iter().position(|&k| k == key).unwrap_or(0)
}

fn notes_text(key: Key, swaras: &[Swara]) -> String {
    spell_all(key, swaras)
        .iter()
        .map(|n| n.spelling())
        .collect::<Vec<_>>()
        .join(" ")
}
