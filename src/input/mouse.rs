use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, Pane};

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.on_pointer_down(mouse.column, mouse.row);
        }
        // Terminals report motion anywhere on screen, so a fast drag that
        // leaves the divider is still followed.
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            app.on_pointer_move(mouse.column, mouse.row);
        }
        MouseEventKind::Up(_) => {
            app.on_pointer_up();
        }
        MouseEventKind::ScrollUp => scroll(app, -3),
        MouseEventKind::ScrollDown => scroll(app, 3),
        _ => {}
    }
}

fn scroll(app: &mut App, lines: isize) {
    if app.focus != Pane::Editor {
        return;
    }
    for _ in 0..lines.unsigned_abs() {
        if lines < 0 {
            app.editor.move_up();
        } else {
            app.editor.move_down();
        }
    }
}
