use unicode_width::UnicodeWidthChar;

/// Opening characters that get their closing partner inserted with them.
const AUTO_CLOSE_PAIRS: &[(char, char)] = &[('{', '}'), ('[', ']'), ('"', '"')];
const INDENT: &str = "  ";

/// Raw text plus a caret measured in characters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.char_len());
    }

    /// Number of lines as shown in the gutter; an empty buffer has one.
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    /// Zero-based (line, column) of the caret, columns counted in chars.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for c in self.text.chars().take(self.cursor) {
            if c == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    /// Display column of the caret within its line.
    pub fn cursor_display_col(&self) -> usize {
        let (line, col) = self.cursor_line_col();
        self.lines()
            .nth(line)
            .map(|l| {
                l.chars()
                    .take(col)
                    .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
                    .sum()
            })
            .unwrap_or(0)
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Replace chars `start..end` with `insert`, then place the caret at
    /// `caret` (measured in the edited text).
    fn splice(&mut self, start: usize, end: usize, insert: &str, caret: usize) {
        let start_byte = self.byte_offset(start);
        let end_byte = self.byte_offset(end);
        self.text.replace_range(start_byte..end_byte, insert);
        self.set_cursor(caret);
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.cursor;
        match AUTO_CLOSE_PAIRS.iter().find(|(open, _)| *open == c) {
            Some((open, close)) => {
                let pair: String = [*open, *close].iter().collect();
                self.splice(at, at, &pair, at + 1);
            }
            None => {
                let mut tmp = [0u8; 4];
                self.splice(at, at, c.encode_utf8(&mut tmp), at + 1);
            }
        }
    }

    /// Insert a newline carrying the current indentation, one level deeper
    /// after an opening brace or bracket.
    pub fn insert_newline(&mut self) {
        let at = self.cursor;
        let before: Vec<char> = self.text.chars().take(at).collect();
        let line_start = before
            .iter()
            .rposition(|&c| c == '\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        let indent = before[line_start..]
            .iter()
            .take_while(|c| c.is_whitespace())
            .count();
        let extra = match before.last() {
            Some('{') | Some('[') => INDENT.len(),
            _ => 0,
        };
        let spaces = " ".repeat(indent + extra);
        let insert = format!("\n{}", spaces);
        self.splice(at, at, &insert, at + 1 + spaces.len());
    }

    pub fn insert_tab(&mut self) {
        let at = self.cursor;
        self.splice(at, at, INDENT, at + INDENT.len());
    }

    /// Returns whether anything was removed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.cursor;
        self.splice(at - 1, at, "", at - 1);
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let at = self.cursor;
        self.splice(at, at + 1, "", at);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.set_cursor(self.cursor + 1);
    }

    pub fn move_up(&mut self) {
        let (line, col) = self.cursor_line_col();
        if line > 0 {
            self.move_to(line - 1, col);
        } else {
            self.cursor = 0;
        }
    }

    pub fn move_down(&mut self) {
        let (line, col) = self.cursor_line_col();
        if line + 1 < self.line_count() {
            self.move_to(line + 1, col);
        } else {
            self.cursor = self.char_len();
        }
    }

    pub fn move_home(&mut self) {
        let (line, _) = self.cursor_line_col();
        self.move_to(line, 0);
    }

    pub fn move_end(&mut self) {
        let (line, _) = self.cursor_line_col();
        self.move_to(line, usize::MAX);
    }

    /// Place the caret at `line`, clamping `col` to that line's length.
    pub fn move_to(&mut self, line: usize, col: usize) {
        let mut pos = 0;
        for (i, l) in self.text.split('\n').enumerate() {
            let len = l.chars().count();
            if i == line {
                self.cursor = pos + col.min(len);
                return;
            }
            pos += len + 1;
        }
        self.cursor = self.char_len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_end(text: &str) -> TextBuffer {
        let mut buf = TextBuffer::new(text);
        buf.set_cursor(usize::MAX);
        buf
    }

    #[test]
    fn test_auto_close_brace() {
        let mut buf = TextBuffer::new("");
        buf.insert_char('{');
        assert_eq!(buf.text(), "{}");
        assert_eq!(buf.cursor(), 1);
    }

    #[test]
    fn test_auto_close_quote_inside_text() {
        let mut buf = TextBuffer::new("ab");
        buf.set_cursor(1);
        buf.insert_char('"');
        assert_eq!(buf.text(), "a\"\"b");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_newline_after_brace_indents_deeper() {
        let mut buf = TextBuffer::new("  {}");
        buf.set_cursor(3);
        buf.insert_newline();
        assert_eq!(buf.text(), "  {\n    }");
        assert_eq!(buf.cursor(), 8);
        assert_eq!(buf.cursor_line_col(), (1, 4));
    }

    #[test]
    fn test_newline_keeps_indent() {
        let mut buf = at_end("    \"a\": 1,");
        buf.insert_newline();
        assert_eq!(buf.text(), "    \"a\": 1,\n    ");
    }

    #[test]
    fn test_tab_inserts_two_spaces() {
        let mut buf = TextBuffer::new("x");
        buf.insert_tab();
        assert_eq!(buf.text(), "  x");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_multibyte_edits() {
        let mut buf = at_end("héllo");
        buf.move_left();
        buf.move_left();
        buf.move_left();
        buf.backspace();
        assert_eq!(buf.text(), "hllo");
        buf.insert_char('é');
        assert_eq!(buf.text(), "héllo");
    }

    #[test]
    fn test_vertical_movement_clamps_column() {
        let mut buf = TextBuffer::new("long line\nab\nlonger line");
        buf.set_cursor(8);
        buf.move_down();
        assert_eq!(buf.cursor_line_col(), (1, 2));
        buf.move_down();
        assert_eq!(buf.cursor_line_col(), (2, 2));
        buf.move_end();
        assert_eq!(buf.cursor_line_col(), (2, 11));
        buf.move_home();
        assert_eq!(buf.cursor_line_col(), (2, 0));
    }

    #[test]
    fn test_move_to_places_caret_by_line_and_column() {
        let mut buf = TextBuffer::new("ab\ncdé\nf");
        buf.move_to(1, 2);
        assert_eq!(buf.cursor(), 5);
        buf.move_to(1, 99);
        assert_eq!(buf.cursor_line_col(), (1, 3));
        buf.move_to(9, 0);
        assert_eq!(buf.cursor(), buf.char_len());
    }

    #[test]
    fn test_line_count_matches_split() {
        for text in ["", "a", "a\n", "\n\n", "{\n  \"x\": 1\n}"] {
            let buf = TextBuffer::new(text);
            assert_eq!(buf.line_count(), text.split('\n').count());
        }
    }
}
