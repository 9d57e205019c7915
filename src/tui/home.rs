//! Home view - the checklist, its cursor, and the add/edit inputs

use anyhow::Context;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::app::Action;
use super::components::{render_text_field, HelpOverlay};
use super::styles::Theme;
use crate::task::{Storage, TaskList};

pub struct HomeView {
    storage: Storage,
    tasks: TaskList,

    // UI state
    cursor: usize,
    show_help: bool,

    // Inputs
    add_input: Option<Input>,
    edit_input: Option<(usize, Input)>,
}

impl HomeView {
    pub fn new(storage: Storage) -> anyhow::Result<Self> {
        let tasks = storage
            .load()
            .with_context(|| format!("Failed to load {}", storage.path().display()))?;

        Ok(Self {
            storage,
            tasks,
            cursor: 0,
            show_help: false,
            add_input: None,
            edit_input: None,
        })
    }

    /// Write the list back to disk. Called once, when the app quits.
    pub fn save(&self) -> anyhow::Result<()> {
        self.storage
            .save(&self.tasks)
            .with_context(|| format!("Failed to save {}", self.storage.path().display()))
    }

    pub fn has_input(&self) -> bool {
        self.add_input.is_some() || self.edit_input.is_some()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return None;
        }

        if self.add_input.is_some() {
            self.handle_add_key(key);
            return None;
        }

        if self.edit_input.is_some() {
            self.handle_edit_key(key);
            return None;
        }

        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Char('a') => {
                self.add_input = Some(Input::default());
            }
            KeyCode::Char('e') => {
                if let Some(task) = self.tasks.get(self.cursor) {
                    self.edit_input = Some((self.cursor, Input::new(task.text.clone())));
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Char('g') => self.cursor = 0,
            KeyCode::Char('G') => self.cursor = self.tasks.len().saturating_sub(1),
            KeyCode::Char('K') => self.move_selected(-1),
            KeyCode::Char('J') => self.move_selected(1),
            _ => {}
        }

        None
    }

    fn handle_add_key(&mut self, key: KeyEvent) {
        let Some(input) = self.add_input.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.add_input = None;
            }
            KeyCode::Enter => {
                let text = input.value().to_string();
                // An empty submission is ignored, the field stays open.
                if !text.is_empty() {
                    self.tasks.append(false, text);
                    self.cursor = self.tasks.len() - 1;
                    self.add_input = None;
                }
            }
            _ => {
                input.handle_event(&crossterm::event::Event::Key(key));
            }
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some((index, input)) = self.edit_input.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.edit_input = None;
            }
            KeyCode::Enter => {
                let index = *index;
                let text = input.value().to_string();
                self.edit_input = None;
                if let Err(e) = self.tasks.set_text(index, text) {
                    tracing::error!("Failed to edit task: {}", e);
                }
            }
            _ => {
                input.handle_event(&crossterm::event::Event::Key(key));
            }
        }
    }

    fn toggle_selected(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        if let Err(e) = self.tasks.toggle(self.cursor) {
            tracing::error!("Failed to toggle task: {}", e);
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.tasks.is_empty() {
            self.cursor = 0;
            return;
        }
        let max = (self.tasks.len() - 1) as isize;
        self.cursor = (self.cursor as isize + delta).clamp(0, max) as usize;
    }

    fn move_selected(&mut self, delta: isize) {
        if self.tasks.is_empty() {
            return;
        }
        let to = self.cursor as isize + delta;
        if to < 0 || to >= self.tasks.len() as isize {
            return;
        }
        match self.tasks.move_task(self.cursor, to as usize) {
            Ok(()) => self.cursor = to as usize,
            Err(e) => tracing::error!("Failed to move task: {}", e),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        // Layout: list + input line + status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_list(frame, chunks[0], theme);
        self.render_input_line(frame, chunks[1], theme);
        self.render_status_bar(frame, chunks[2], theme);

        if self.show_help {
            HelpOverlay::render(frame, area, theme);
        }
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let open = self.tasks.iter().filter(|t| !t.done).count();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" punchlist ({} open) ", open))
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.tasks.is_empty() {
            let empty_text = vec![
                Line::from(""),
                Line::from("Nothing to do").style(Style::default().fg(theme.dimmed)),
                Line::from(""),
                Line::from("Press 'a' to add a task").style(Style::default().fg(theme.hint)),
                Line::from("or run 'punch add <text>'").style(Style::default().fg(theme.hint)),
            ];
            let para = Paragraph::new(empty_text).alignment(Alignment::Center);
            frame.render_widget(para, inner);
            return;
        }

        let items: Vec<ListItem> = self
            .tasks
            .iter()
            .enumerate()
            .map(|(idx, task)| {
                let is_selected = idx == self.cursor;

                // Completed entries are struck through, as in the original
                let text_style = if task.done {
                    Style::default().fg(theme.done).crossed_out()
                } else {
                    Style::default().fg(theme.text)
                };
                let checkbox_style = if task.done {
                    Style::default().fg(theme.done)
                } else {
                    Style::default().fg(theme.accent)
                };

                let line = Line::from(vec![
                    Span::styled(format!("{} ", task.checkbox()), checkbox_style),
                    Span::styled(
                        task.text.clone(),
                        if is_selected {
                            text_style.bold()
                        } else {
                            text_style
                        },
                    ),
                ]);

                if is_selected {
                    ListItem::new(line).style(Style::default().bg(theme.selection))
                } else {
                    ListItem::new(line)
                }
            })
            .collect();

        frame.render_widget(List::new(items), inner);
    }

    fn render_input_line(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if let Some(input) = &self.add_input {
            render_text_field(frame, area, " +", input, theme);
        } else if let Some((_, input)) = &self.edit_input {
            render_text_field(frame, area, " ~", input, theme);
        } else {
            let hint = Paragraph::new(" + press 'a' to add a task")
                .style(Style::default().fg(theme.dimmed));
            frame.render_widget(hint, area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let key_style = Style::default().fg(theme.accent).bold();
        let desc_style = Style::default().fg(theme.dimmed);
        let sep_style = Style::default().fg(theme.border);

        let spans = vec![
            Span::styled(" Space", key_style),
            Span::styled(" Toggle ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" a", key_style),
            Span::styled(" Add ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" e", key_style),
            Span::styled(" Edit ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" J/K", key_style),
            Span::styled(" Move ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ?", key_style),
            Span::styled(" Help ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" q", key_style),
            Span::styled(" Quit", desc_style),
        ];

        let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.selection));
        frame.render_widget(status, area);
    }
}
