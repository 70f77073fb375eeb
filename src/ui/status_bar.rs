use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, Pane};
use crate::layout::Orientation;

pub fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();

    // Left side: status message
    let status_width = if app.status_message.is_empty() {
        0
    } else {
        let status_text = format!(" {} ", app.status_message);
        let width = status_text.chars().count();
        spans.push(Span::styled(
            status_text,
            Style::default().fg(app.config.colorscheme.status_bar),
        ));
        width
    };

    // Right side: caret position, split and orientation
    let axis = match app.layout.orientation() {
        Orientation::Horizontal => "↔",
        Orientation::Vertical => "↕",
    };
    let mut position_text = format!("{} {:.0}% ", axis, app.layout.percent());
    if app.focus == Pane::Editor {
        let (line, col) = app.editor.cursor_line_col();
        position_text = format!("{}:{}  {}", line + 1, col + 1, position_text);
    }
    let position_width = position_text.chars().count();
    let available_width = area.width as usize;

    if available_width > status_width + position_width {
        let padding_width = available_width - status_width - position_width;
        spans.push(Span::raw(" ".repeat(padding_width)));
    }

    spans.push(Span::styled(
        position_text,
        Style::default().fg(Color::DarkGray),
    ));

    let status_widget = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);

    f.render_widget(status_widget, area);
}
