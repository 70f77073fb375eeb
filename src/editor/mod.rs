mod text;
mod undo;

pub use text::TextBuffer;
use undo::History;

use crate::error::SchemaError;
use crate::schema::{FormSchema, default_schema_text, format_json, parse_schema};

/// The schema source buffer and the result of validating it.
///
/// Every change to the text re-runs validation: the schema is replaced
/// wholesale on success, or dropped to `None` with the error message kept
/// until the next validation.
#[derive(Debug)]
pub struct SchemaEditor {
    buffer: TextBuffer,
    schema: Option<FormSchema>,
    error: Option<String>,
    history: History,
    pub modified: bool,
    // Viewport offsets, kept in step with the caret by the view.
    pub scroll: usize,
    pub hscroll: usize,
}

impl Default for SchemaEditor {
    fn default() -> Self {
        Self::with_text(default_schema_text())
    }
}

impl SchemaEditor {
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut editor = Self {
            buffer: TextBuffer::new(text),
            schema: None,
            error: None,
            history: History::default(),
            modified: false,
            scroll: 0,
            hscroll: 0,
        };
        editor.revalidate();
        editor
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn schema(&self) -> Option<&FormSchema> {
        self.schema.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    pub fn cursor_line_col(&self) -> (usize, usize) {
        self.buffer.cursor_line_col()
    }

    /// Replace the whole buffer, e.g. after loading a file. Clears history.
    pub fn load_text(&mut self, text: impl Into<String>) {
        self.buffer = TextBuffer::new(text);
        self.history.clear();
        self.modified = false;
        self.scroll = 0;
        self.hscroll = 0;
        self.revalidate();
    }

    pub fn insert_char(&mut self, c: char) {
        self.edit(|buf| {
            buf.insert_char(c);
            true
        });
    }

    pub fn insert_newline(&mut self) {
        self.edit(|buf| {
            buf.insert_newline();
            true
        });
    }

    pub fn insert_tab(&mut self) {
        self.edit(|buf| {
            buf.insert_tab();
            true
        });
    }

    pub fn backspace(&mut self) {
        self.edit(TextBuffer::backspace);
    }

    pub fn delete(&mut self) {
        self.edit(TextBuffer::delete);
    }

    pub fn move_left(&mut self) {
        self.buffer.move_left();
    }

    pub fn move_right(&mut self) {
        self.buffer.move_right();
    }

    pub fn move_up(&mut self) {
        self.buffer.move_up();
    }

    pub fn move_down(&mut self) {
        self.buffer.move_down();
    }

    pub fn move_home(&mut self) {
        self.buffer.move_home();
    }

    pub fn move_end(&mut self) {
        self.buffer.move_end();
    }

    /// Rewrite the buffer as two-space pretty JSON. On a parse failure the
    /// buffer is left alone and the parser message becomes the error.
    pub fn format(&mut self) -> Result<(), SchemaError> {
        match format_json(self.buffer.text()) {
            Ok(formatted) => {
                if formatted != self.buffer.text() {
                    self.history.record(self.buffer.clone());
                    let (line, col) = self.buffer.cursor_line_col();
                    self.buffer = TextBuffer::new(formatted);
                    self.buffer.move_to(line, col);
                    self.modified = true;
                }
                self.revalidate();
                Ok(())
            }
            Err(err) => {
                self.schema = None;
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.buffer.clone()) {
            Some(previous) => {
                self.buffer = previous;
                self.modified = true;
                self.revalidate();
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.buffer.clone()) {
            Some(next) => {
                self.buffer = next;
                self.modified = true;
                self.revalidate();
                true
            }
            None => false,
        }
    }

    /// Keep the caret inside a `rows` x `cols` viewport.
    pub fn scroll_to_cursor(&mut self, rows: usize, cols: usize) {
        let (line, _) = self.buffer.cursor_line_col();
        if rows > 0 {
            if line < self.scroll {
                self.scroll = line;
            } else if line >= self.scroll + rows {
                self.scroll = line + 1 - rows;
            }
        }
        let col = self.buffer.cursor_display_col();
        if cols > 0 {
            if col < self.hscroll {
                self.hscroll = col;
            } else if col >= self.hscroll + cols {
                self.hscroll = col + 1 - cols;
            }
        }
    }

    fn edit(&mut self, op: impl FnOnce(&mut TextBuffer) -> bool) {
        let before = self.buffer.clone();
        if op(&mut self.buffer) {
            self.history.record(before);
            self.modified = true;
            self.revalidate();
        }
    }

    fn revalidate(&mut self) {
        match parse_schema(self.buffer.text()) {
            Ok(schema) => {
                log::debug!("schema valid: {} field(s)", schema.fields.len());
                self.schema = Some(schema);
                self.error = None;
            }
            Err(err) => {
                log::debug!("schema invalid: {}", err);
                self.schema = None;
                self.error = Some(err.to_string());
            }
        }
    }
}
