//! Terminal user interface module

mod app;
mod components;
mod home;
mod styles;

pub use app::*;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::path::Path;

use crate::config::Config;
use crate::task::Storage;

pub fn run(config: &Config, list_path: &Path) -> Result<()> {
    // Load before touching the terminal so a load error prints normally
    let storage = Storage::new(list_path);
    let theme = styles::Theme::by_name(&config.theme.name);
    let mut app = App::new(storage, theme)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
