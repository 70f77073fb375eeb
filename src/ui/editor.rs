use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, DOWNLOAD_FILE_NAME, Pane};

use super::json_highlight::highlight_json_line;
use super::utils::{slice_columns, slice_spans};

const TOOLBAR_HINTS: &str = " ^F Format  ^Y Copy  ^S Download ";

pub fn render_editor(f: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Pane::Editor;
    let scheme = &app.config.colorscheme;
    let border_color = if focused {
        scheme.border_focused
    } else {
        scheme.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            format!(" {} ", DOWNLOAD_FILE_NAME),
            Style::default().fg(scheme.title),
        ))
        .title_top(
            Line::styled(TOOLBAR_HINTS, Style::default().fg(scheme.text_dim)).right_aligned(),
        )
        .style(Style::default().bg(scheme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Error line takes the last row while the buffer is invalid.
    let error = app.editor.error().map(str::to_string);
    let text_rows = if error.is_some() {
        inner.height.saturating_sub(1)
    } else {
        inner.height
    };

    let line_count = app.editor.line_count();
    let gutter_width = if app.config.show_line_numbers {
        line_count.to_string().len().max(3) + 1
    } else {
        0
    };
    let text_cols = (inner.width as usize).saturating_sub(gutter_width);

    app.editor.scroll_to_cursor(text_rows as usize, text_cols);
    let scroll = app.editor.scroll;
    let hscroll = app.editor.hscroll;
    let scheme = &app.config.colorscheme;

    let mut lines: Vec<Line> = Vec::with_capacity(text_rows as usize);
    for (idx, text) in app
        .editor
        .buffer()
        .lines()
        .enumerate()
        .skip(scroll)
        .take(text_rows as usize)
    {
        let mut spans = Vec::new();
        if gutter_width > 0 {
            spans.push(Span::styled(
                format!("{:>width$} ", idx + 1, width = gutter_width - 1),
                Style::default().fg(scheme.line_number),
            ));
        }
        spans.extend(slice_spans(
            highlight_json_line(text, scheme),
            hscroll,
            text_cols,
        ));
        lines.push(Line::from(spans));
    }

    let text_area = Rect {
        height: text_rows,
        ..inner
    };
    f.render_widget(Paragraph::new(lines), text_area);

    if let Some(message) = error {
        let error_area = Rect {
            y: inner.y + text_rows,
            height: 1,
            ..inner
        };
        let shown = slice_columns(&message, 0, inner.width as usize);
        f.render_widget(
            Paragraph::new(Line::styled(
                shown,
                Style::default().fg(scheme.error).add_modifier(Modifier::BOLD),
            )),
            error_area,
        );
    }

    if focused {
        let (line, _) = app.editor.cursor_line_col();
        let col = app.editor.buffer().cursor_display_col();
        if line >= scroll && line < scroll + text_rows as usize && col >= hscroll {
            let x = inner.x as usize + gutter_width + (col - hscroll);
            let y = inner.y as usize + (line - scroll);
            if x < (inner.x + inner.width) as usize {
                f.set_cursor_position(Position::new(x as u16, y as u16));
            }
        }
    }
}
