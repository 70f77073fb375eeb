use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Pane};
use crate::config::ColorScheme;
use crate::form::{Control, ControlGroup, FormState, FormView, PLACEHOLDER_MESSAGE, input_text};

use super::utils::slice_columns;

struct Palette {
    bg: Color,
    fg: Color,
    dim: Color,
}

pub fn render_preview(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Pane::Preview;
    let scheme = &app.config.colorscheme;
    let palette = if app.form.dark_mode {
        Palette {
            bg: scheme.form_dark_bg,
            fg: scheme.form_dark_fg,
            dim: scheme.text_dim,
        }
    } else {
        Palette {
            bg: scheme.form_light_bg,
            fg: scheme.form_light_fg,
            dim: Color::Gray,
        }
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            scheme.border_focused
        } else {
            scheme.border
        }))
        .title(Span::styled(" Preview ", Style::default().fg(scheme.title)))
        .style(Style::default().bg(palette.bg).fg(palette.fg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(view) = app.rendered.form() else {
        let y = inner.y + inner.height / 2;
        let msg_area = Rect {
            y,
            height: inner.height.min(1),
            ..inner
        };
        f.render_widget(
            Paragraph::new(Line::styled(PLACEHOLDER_MESSAGE, Style::default().fg(palette.dim)))
                .alignment(Alignment::Center),
            msg_area,
        );
        return;
    };

    let body = build_body(view, &app.form, scheme, &palette, focused, inner.width);
    let offset = scroll_offset(body.focus_line, body.focus_height, inner.height as usize);
    let visible: Vec<Line> = body
        .lines
        .into_iter()
        .skip(offset)
        .take(inner.height as usize)
        .collect();
    f.render_widget(Paragraph::new(visible), inner);

    if let Some((line, col)) = body.cursor {
        if line >= offset && line < offset + inner.height as usize && col < inner.width as usize {
            f.set_cursor_position(Position::new(
                inner.x + col as u16,
                inner.y + (line - offset) as u16,
            ));
        }
    }
}

struct Body {
    lines: Vec<Line<'static>>,
    focus_line: usize,
    focus_height: usize,
    cursor: Option<(usize, usize)>,
}

fn scroll_offset(focus_line: usize, focus_height: usize, rows: usize) -> usize {
    if rows == 0 {
        return 0;
    }
    let bottom = focus_line + focus_height;
    if bottom > rows {
        (bottom - rows).min(focus_line)
    } else {
        0
    }
}

fn build_body(
    view: &FormView,
    state: &FormState,
    scheme: &ColorScheme,
    palette: &Palette,
    focused: bool,
    width: u16,
) -> Body {
    let width = width as usize;
    let header = Style::default().bg(scheme.form_header).fg(Color::White);

    let toggle = if state.dark_mode {
        "[^T light] "
    } else {
        "[^T dark] "
    };
    let toggle_cols = toggle.len().min(width);
    let mut lines = vec![
        Line::styled(pad_to("", width), header),
        Line::from(vec![
            Span::styled(
                pad_to(&format!(" {}", view.title), width - toggle_cols),
                header.add_modifier(Modifier::BOLD),
            ),
            Span::styled(pad_to(toggle, toggle_cols), header),
        ]),
        Line::styled(pad_to(&format!(" {}", view.description), width), header),
        Line::styled(pad_to("", width), header),
        Line::raw(""),
    ];

    let mut focus_line = 0;
    let mut focus_height = 1;
    let mut cursor = None;

    for (idx, group) in view.groups.iter().enumerate() {
        let is_focused = focused && state.focus == idx;
        let start = lines.len();
        let (group_lines, cursor_in_group) =
            group_lines(group, state, scheme, palette, is_focused);
        if state.focus == idx {
            focus_line = start;
            focus_height = group_lines.len();
        }
        if let Some((l, c)) = cursor_in_group {
            cursor = Some((start + l, c));
        }
        lines.extend(group_lines);
        lines.push(Line::raw(""));
    }

    let on_submit = state.on_submit_button(view);
    if on_submit {
        focus_line = lines.len();
        focus_height = 1;
    }
    let button_style = if focused && on_submit {
        header.add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        header.add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(Span::styled("  Submit  ", button_style)).alignment(Alignment::Center));

    Body {
        lines,
        focus_line,
        focus_height,
        cursor,
    }
}

fn pad_to(s: &str, cols: usize) -> String {
    let shown = slice_columns(s, 0, cols);
    let w = UnicodeWidthStr::width(shown.as_str());
    format!("{}{}", shown, " ".repeat(cols.saturating_sub(w)))
}

/// Lines for one control group plus, when it takes text and is focused,
/// the caret position relative to the group.
fn group_lines(
    group: &ControlGroup,
    state: &FormState,
    scheme: &ColorScheme,
    palette: &Palette,
    focused: bool,
) -> (Vec<Line<'static>>, Option<(usize, usize)>) {
    let accent = if focused {
        Style::default().fg(scheme.form_focus)
    } else {
        Style::default().fg(palette.fg)
    };
    let mut label = vec![Span::styled(
        format!(" {}", group.label),
        accent.add_modifier(Modifier::BOLD),
    )];
    if group.required {
        label.push(Span::styled(" *", Style::default().fg(scheme.required_marker)));
    }
    let mut lines = vec![Line::from(label)];
    let mut cursor = None;
    let value = state.text_value(&group.id);

    match &group.control {
        Control::Input { kind, placeholder } => {
            let shown = input_text(Some(*kind), value, placeholder.as_deref());
            let style = if value.is_empty() {
                Style::default().fg(palette.dim)
            } else {
                accent
            };
            lines.push(Line::from(vec![
                Span::styled("  [ ", accent),
                Span::styled(shown.clone(), style),
                Span::styled(" ]", accent),
            ]));
            if focused {
                let typed = if value.is_empty() {
                    0
                } else {
                    UnicodeWidthStr::width(shown.as_str())
                };
                cursor = Some((1, 4 + typed));
            }
        }
        Control::TextArea { placeholder } => {
            let shown = input_text(None, value, placeholder.as_deref());
            let style = if value.is_empty() {
                Style::default().fg(palette.dim)
            } else {
                accent
            };
            let rows: Vec<&str> = shown.split('\n').collect();
            for row in &rows {
                lines.push(Line::from(vec![
                    Span::styled("  │ ", accent),
                    Span::styled(row.to_string(), style),
                ]));
            }
            if focused {
                cursor = if value.is_empty() {
                    Some((1, 4))
                } else {
                    let last = rows.last().map(|r| UnicodeWidthStr::width(*r)).unwrap_or(0);
                    Some((rows.len(), 4 + last))
                };
            }
        }
        Control::Select { options } => {
            let chosen = options
                .iter()
                .find(|o| o.value == value)
                .map(|o| o.label.clone());
            let (text, style) = match chosen {
                Some(label) => (label, accent),
                None => ("(choose)".to_string(), Style::default().fg(palette.dim)),
            };
            lines.push(Line::from(vec![
                Span::styled("  ◀ ", accent),
                Span::styled(text, style),
                Span::styled(" ▶", accent),
            ]));
        }
        Control::Radio { options } => {
            for option in options {
                let mark = if option.value == value { "(•)" } else { "( )" };
                lines.push(Line::styled(format!("  {} {}", mark, option.label), accent));
            }
        }
        Control::Checkboxes { options } => {
            for (i, option) in options.iter().enumerate() {
                let mark = if state.is_checked(&group.id, &option.value) {
                    "[x]"
                } else {
                    "[ ]"
                };
                let style = if focused && i == state.option_cursor {
                    accent.add_modifier(Modifier::REVERSED)
                } else {
                    accent
                };
                lines.push(Line::styled(format!("  {} {}", mark, option.label), style));
            }
        }
        Control::Unsupported { type_name } => {
            lines.push(Line::styled(
                format!("  Unsupported field type: {}", type_name),
                Style::default().fg(scheme.required_marker),
            ));
        }
    }

    if let Some(message) = state.error(&group.id) {
        lines.push(Line::styled(
            format!("  {}", message),
            Style::default().fg(scheme.error),
        ));
    }

    (lines, cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_keeps_focus_visible() {
        assert_eq!(scroll_offset(2, 3, 10), 0);
        assert_eq!(scroll_offset(12, 3, 10), 5);
        // taller than the viewport: show its top
        assert_eq!(scroll_offset(4, 20, 10), 4);
    }
}
