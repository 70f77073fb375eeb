mod clipboard;
mod file;

use ratatui::layout::Rect;
use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use crate::config::RcConfig;
use crate::editor::SchemaEditor;
use crate::form::{FieldError, FormState, LogSink, RenderedForm, SubmitSink, render};
use crate::layout::{Bounds, CELL_WIDTH_PX, Point, PointerSource, SplitLayout};

pub use file::{DOWNLOAD_FILE_NAME, DOWNLOAD_MIME_TYPE};

/// Keyboard step for moving the divider, in percent.
pub const NUDGE_STEP: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pane {
    Editor,
    Preview,
}

pub struct App {
    pub editor: SchemaEditor,
    pub layout: SplitLayout,
    pub rendered: RenderedForm,
    pub form: FormState,
    pub focus: Pane,
    pub config: RcConfig,
    pub status_message: String,
    pub status_time: Option<Instant>,
    pub file_path: Option<PathBuf>,
    pub file_path_changed: bool,
    pub download_dir: PathBuf,
    pub auto_reload: bool,
    pub last_save_time: Option<Instant>,
    // Screen regions from the last draw, used for mouse hit-testing.
    pub divider_area: Option<Rect>,
    pub editor_area: Option<Rect>,
    pub preview_area: Option<Rect>,
    sink: Box<dyn SubmitSink>,
}

impl App {
    pub fn new(config: RcConfig, viewport_cols: u16) -> Self {
        let layout =
            SplitLayout::with_breakpoint(viewport_cols as f32 * CELL_WIDTH_PX, config.breakpoint);
        let mut app = Self {
            editor: SchemaEditor::default(),
            layout,
            rendered: RenderedForm::Placeholder,
            form: FormState::new(),
            focus: Pane::Editor,
            config,
            status_message: String::new(),
            status_time: None,
            file_path: None,
            file_path_changed: false,
            download_dir: PathBuf::from("."),
            auto_reload: true,
            last_save_time: None,
            divider_area: None,
            editor_area: None,
            preview_area: None,
            sink: Box::new(LogSink),
        };
        app.refresh_preview();
        app
    }

    pub fn set_sink(&mut self, sink: Box<dyn SubmitSink>) {
        self.sink = sink;
    }

    pub fn set_status(&mut self, message: &str) {
        if message.is_empty() {
            self.status_message = String::new();
            self.status_time = None;
        } else {
            self.status_message = message.to_string();
            self.status_time = Some(Instant::now());
        }
    }

    pub fn update_status(&mut self) {
        // Clear status message after 3 seconds
        if let Some(time) = self.status_time {
            if time.elapsed() > Duration::from_secs(3) {
                self.status_message = String::new();
                self.status_time = None;
            }
        }
    }

    /// Apply an edit to the schema buffer and re-render the preview.
    pub fn edit_schema(&mut self, op: impl FnOnce(&mut SchemaEditor)) {
        op(&mut self.editor);
        self.refresh_preview();
    }

    pub fn refresh_preview(&mut self) {
        self.rendered = render(self.editor.schema());
        self.form.sync(self.rendered.form());
    }

    pub fn format_schema(&mut self) {
        match self.editor.format() {
            Ok(()) => self.set_status("Formatted"),
            Err(e) => self.set_status(&format!("Cannot format: {}", e)),
        }
        self.refresh_preview();
    }

    pub fn undo(&mut self) {
        if self.editor.undo() {
            self.set_status("Undo");
        } else {
            self.set_status("Nothing to undo");
        }
        self.refresh_preview();
    }

    pub fn redo(&mut self) {
        if self.editor.redo() {
            self.set_status("Redo");
        } else {
            self.set_status("Nothing to redo");
        }
        self.refresh_preview();
    }

    pub fn toggle_dark_mode(&mut self) {
        self.form.toggle_dark_mode();
        let mode = if self.form.dark_mode { "dark" } else { "light" };
        self.set_status(&format!("Preview: {} mode", mode));
    }

    pub fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Pane::Editor => Pane::Preview,
            Pane::Preview => Pane::Editor,
        };
    }

    /// Validate the preview form and hand its values to the sink.
    pub fn submit_form(&mut self) -> Result<(), Vec<FieldError>> {
        let Some(view) = self.rendered.form() else {
            return Ok(());
        };
        match self.form.submit(view) {
            Ok(values) => {
                match self.sink.submit(&values) {
                    Ok(()) => self.set_status(&format!(
                        "Form submitted: {}",
                        serde_json::Value::Object(values)
                    )),
                    Err(e) => self.set_status(&format!("Submit error: {}", e)),
                }
                Ok(())
            }
            Err(errors) => {
                log::debug!("submission blocked by {} field(s)", errors.len());
                self.set_status(&format!("{} field(s) need attention", errors.len()));
                Err(errors)
            }
        }
    }

    pub fn on_resize(&mut self, cols: u16) {
        self.layout.resize(cols as f32 * CELL_WIDTH_PX);
    }

    /// Record where the two panes live so drags can be measured against it.
    pub fn set_split_container(&mut self, area: Option<Rect>) {
        self.layout.set_container(area.map(|r| Bounds {
            x: r.x as f32,
            y: r.y as f32,
            width: r.width as f32,
            height: r.height as f32,
        }));
    }

    pub fn on_pointer_down(&mut self, col: u16, row: u16) {
        if self.divider_area.is_some_and(|r| contains(r, col, row)) {
            self.layout.begin_drag(PointerSource::Mouse);
        } else if self.editor_area.is_some_and(|r| contains(r, col, row)) {
            self.focus = Pane::Editor;
        } else if self.preview_area.is_some_and(|r| contains(r, col, row)) {
            self.focus = Pane::Preview;
        }
    }

    pub fn on_pointer_move(&mut self, col: u16, row: u16) {
        if self.layout.is_dragging() {
            self.layout.pointer_move(Point {
                x: col as f32,
                y: row as f32,
            });
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.layout.end_drag();
    }

    pub fn nudge_divider(&mut self, delta: f32) {
        self.layout.nudge(delta);
        self.set_status(&format!("Split {:.0}%", self.layout.percent()));
    }
}

fn contains(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x
        && col < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
