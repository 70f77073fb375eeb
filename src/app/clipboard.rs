use super::App;
use arboard::Clipboard;

impl App {
    /// Put the raw editor text on the system clipboard.
    pub fn copy_to_clipboard(&mut self) {
        let content = self.editor.text().to_string();
        if content.is_empty() {
            self.set_status("Nothing to copy");
            return;
        }

        match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(content)) {
            Ok(()) => self.set_status("JSON copied to clipboard"),
            Err(e) => {
                log::warn!("clipboard unavailable: {}", e);
                self.set_status(&format!("Clipboard error: {}", e));
            }
        }
    }
}
