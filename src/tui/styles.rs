//! TUI theme and styling

use ratatui::style::Color;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Theme {
    // Background and borders
    pub background: Color,
    pub border: Color,
    pub selection: Color,

    // Text colors
    pub title: Color,
    pub text: Color,
    pub done: Color,
    pub dimmed: Color,
    pub hint: Color,

    // UI elements
    pub accent: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate()
    }
}

impl Theme {
    pub fn slate() -> Self {
        Self {
            background: Color::Rgb(18, 20, 24),
            border: Color::Rgb(60, 68, 82),
            selection: Color::Rgb(38, 44, 56),

            title: Color::Rgb(130, 170, 255),
            text: Color::Rgb(205, 214, 230),
            done: Color::Rgb(95, 105, 120),
            dimmed: Color::Rgb(95, 105, 120),
            hint: Color::Rgb(120, 140, 170),

            accent: Color::Rgb(130, 170, 255),
            error: Color::Rgb(240, 110, 90),
        }
    }

    pub fn paper() -> Self {
        Self {
            background: Color::Rgb(246, 242, 233),
            border: Color::Rgb(180, 170, 150),
            selection: Color::Rgb(228, 220, 200),

            title: Color::Rgb(120, 70, 20),
            text: Color::Rgb(60, 50, 40),
            done: Color::Rgb(160, 150, 135),
            dimmed: Color::Rgb(160, 150, 135),
            hint: Color::Rgb(140, 120, 90),

            accent: Color::Rgb(120, 70, 20),
            error: Color::Rgb(180, 60, 40),
        }
    }

    pub fn by_name(name: &str) -> Self {
        match name {
            "" | "slate" => Self::slate(),
            "paper" => Self::paper(),
            other => {
                warn!("Unknown theme '{}', using default", other);
                Self::slate()
            }
        }
    }
}
