//! Single-line input rendering

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tui_input::Input;

use crate::tui::styles::Theme;

/// Renders an active single-line input with a label and a block cursor.
///
/// The character under the cursor is drawn inverted; when the cursor sits
/// past the end of the value, a blank cell stands in for it.
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &Input,
    theme: &Theme,
) {
    let value = input.value();
    let cursor = input.visual_cursor();

    let value_style = Style::default().fg(theme.accent);
    let cursor_style = Style::default().fg(theme.background).bg(theme.accent);

    let mut spans = vec![
        Span::styled(label, Style::default().fg(theme.accent).underlined()),
        Span::raw(" "),
    ];

    let mut chars = value.chars();
    let before: String = chars.by_ref().take(cursor).collect();
    let under = chars.next();
    let after: String = chars.collect();

    if !before.is_empty() {
        spans.push(Span::styled(before, value_style));
    }
    spans.push(Span::styled(
        under.map(String::from).unwrap_or_else(|| " ".to_string()),
        cursor_style,
    ));
    if !after.is_empty() {
        spans.push(Span::styled(after, value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
