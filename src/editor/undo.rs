use super::text::TextBuffer;

const HISTORY_LIMIT: usize = 100;

#[derive(Debug, Default)]
pub struct History {
    undo_stack: Vec<TextBuffer>,
    redo_stack: Vec<TextBuffer>,
}

impl History {
    /// Remember `state` as the point to return to; a new edit forgets redo.
    pub fn record(&mut self, state: TextBuffer) {
        self.undo_stack.push(state);
        if self.undo_stack.len() > HISTORY_LIMIT {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
    }

    pub fn undo(&mut self, current: TextBuffer) -> Option<TextBuffer> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    pub fn redo(&mut self, current: TextBuffer) -> Option<TextBuffer> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    #[cfg(test)]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_bounded() {
        let mut history = History::default();
        for i in 0..150 {
            history.record(TextBuffer::new(i.to_string()));
        }
        assert_eq!(history.undo_depth(), HISTORY_LIMIT);
        let oldest_kept = (0..HISTORY_LIMIT)
            .filter_map(|_| history.undo(TextBuffer::default()))
            .last()
            .unwrap();
        assert_eq!(oldest_kept.text(), "50");
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::default();
        history.record(TextBuffer::new("a"));
        let restored = history.undo(TextBuffer::new("ab")).unwrap();
        assert_eq!(restored.text(), "a");
        history.record(TextBuffer::new("a"));
        assert!(history.redo(TextBuffer::new("ac")).is_none());
    }
}
