use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, NUDGE_STEP, Pane};
use crate::form::Control;

/// Handle one key press. Returns `true` when the application should exit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return handle_control_key(app, key);
    }

    match app.focus {
        Pane::Editor => handle_editor_key(app, key),
        Pane::Preview => handle_preview_key(app, key),
    }
    false
}

fn handle_control_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') => return true,
        KeyCode::Char('t') => app.toggle_dark_mode(),
        KeyCode::Char('f') => app.format_schema(),
        KeyCode::Char('y') => app.copy_to_clipboard(),
        KeyCode::Char('s') => app.download_with_status(),
        KeyCode::Char('z') => app.undo(),
        KeyCode::Char('r') => app.redo(),
        KeyCode::Left | KeyCode::Up => app.nudge_divider(-NUDGE_STEP),
        KeyCode::Right | KeyCode::Down => app.nudge_divider(NUDGE_STEP),
        _ => {}
    }
    false
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => app.edit_schema(|e| e.insert_char(c)),
        KeyCode::Enter => app.edit_schema(|e| e.insert_newline()),
        KeyCode::Tab => app.edit_schema(|e| e.insert_tab()),
        KeyCode::Backspace => app.edit_schema(|e| e.backspace()),
        KeyCode::Delete => app.edit_schema(|e| e.delete()),
        KeyCode::Left => app.editor.move_left(),
        KeyCode::Right => app.editor.move_right(),
        KeyCode::Up => app.editor.move_up(),
        KeyCode::Down => app.editor.move_down(),
        KeyCode::Home => app.editor.move_home(),
        KeyCode::End => app.editor.move_end(),
        KeyCode::Esc => app.focus = Pane::Preview,
        _ => {}
    }
}

fn handle_preview_key(app: &mut App, key: KeyEvent) {
    let Some(view) = app.rendered.form() else {
        if key.code == KeyCode::Esc {
            app.focus = Pane::Editor;
        }
        return;
    };

    let mut submit = false;
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.form.focus_next(view),
        KeyCode::BackTab | KeyCode::Up => app.form.focus_prev(view),
        KeyCode::Left => app.form.step_choice(view, -1),
        KeyCode::Right => app.form.step_choice(view, 1),
        KeyCode::Backspace => app.form.backspace(view),
        KeyCode::Esc => app.focus = Pane::Editor,
        KeyCode::Enter => match app.form.focused_group(view).map(|g| &g.control) {
            Some(Control::TextArea { .. }) => app.form.type_char(view, '\n'),
            _ => submit = true,
        },
        KeyCode::Char(' ')
            if matches!(
                app.form.focused_group(view).map(|g| &g.control),
                Some(Control::Checkboxes { .. })
            ) =>
        {
            app.form.toggle_highlighted(view)
        }
        KeyCode::Char(c) => app.form.type_char(view, c),
        _ => {}
    }

    if submit {
        // Field errors are shown inline; the status line reports the count.
        let _ = app.submit_form();
    }
}
