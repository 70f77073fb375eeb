use super::App;
use anyhow::{Context, Result};
use std::{fs, path::PathBuf, time::Instant};

pub const DOWNLOAD_FILE_NAME: &str = "form-schema.json";
pub const DOWNLOAD_MIME_TYPE: &str = "application/json";

impl App {
    /// Load a schema file into the editor. A missing file is not an error:
    /// the editor keeps its text and the path is remembered for reloads.
    pub fn load_file(&mut self, path: PathBuf) {
        let cleaned = PathBuf::from(
            path.display()
                .to_string()
                .trim()
                .trim_matches('"')
                .trim_matches('\''),
        );

        match fs::read_to_string(&cleaned) {
            Ok(content) => {
                self.editor.load_text(content);
                self.refresh_preview();
                self.set_status(&format!("Loaded: {}", cleaned.display()));
                log::info!("loaded {}", cleaned.display());
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                self.set_status(&format!("New file: {}", cleaned.display()));
            }
            Err(e) => {
                log::warn!("cannot load {}: {}", cleaned.display(), e);
                self.set_status(&format!("Error loading '{}': {}", cleaned.display(), e));
            }
        }

        if self.file_path.as_ref() != Some(&cleaned) {
            self.file_path_changed = true;
        }
        self.file_path = Some(cleaned);
    }

    pub fn reload_file(&mut self) {
        let Some(path) = self.file_path.clone() else {
            self.set_status("No file to reload");
            return;
        };
        match fs::read_to_string(&path) {
            Ok(content) => {
                self.editor.load_text(content);
                self.refresh_preview();
                self.set_status(&format!("Reloaded: {}", path.display()));
            }
            Err(e) => {
                self.set_status(&format!("Error reloading: {}", e));
            }
        }
    }

    /// Write the buffer verbatim to `form-schema.json` in the download
    /// directory.
    pub fn download(&mut self) -> Result<PathBuf> {
        let target = self.download_dir.join(DOWNLOAD_FILE_NAME);
        fs::write(&target, self.editor.text())
            .with_context(|| format!("cannot write '{}'", target.display()))?;
        self.last_save_time = Some(Instant::now());
        log::info!("downloaded schema to {}", target.display());
        Ok(target)
    }

    pub fn download_with_status(&mut self) {
        match self.download() {
            Ok(target) => {
                self.set_status(&format!(
                    "Saved {} ({})",
                    target.display(),
                    DOWNLOAD_MIME_TYPE
                ));
            }
            Err(e) => self.set_status(&format!("Download failed: {:#}", e)),
        }
    }
}
