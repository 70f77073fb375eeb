use std::fs;
use std::path::PathBuf;

use super::colorscheme::ColorScheme;
use crate::layout::DEFAULT_BREAKPOINT;

const BREAKPOINT_RANGE: std::ops::RangeInclusive<u32> = 320..=4096;

#[derive(Debug, Clone)]
pub struct RcConfig {
    pub show_line_numbers: bool,
    pub colorscheme: ColorScheme,
    /// Viewport width in logical pixels below which the panes stack.
    pub breakpoint: f32,
}

impl Default for RcConfig {
    fn default() -> Self {
        Self {
            show_line_numbers: true,
            colorscheme: ColorScheme::default(),
            breakpoint: DEFAULT_BREAKPOINT,
        }
    }
}

impl RcConfig {
    /// Load configuration from ~/.formpanerc
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(rc_path) = Self::rc_path() {
            if let Ok(contents) = fs::read_to_string(&rc_path) {
                log::debug!("reading {}", rc_path.display());
                config.parse(&contents);
            }
        }

        config
    }

    fn rc_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".formpanerc");
            path
        })
    }

    pub fn parse(&mut self, contents: &str) {
        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') || line.starts_with('"') {
                continue;
            }

            self.parse_line(line);
        }
    }

    fn parse_line(&mut self, line: &str) {
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.as_slice() {
            ["set", option, ..] => self.handle_set(option),
            ["colorscheme", name, ..] => {
                if let Some(scheme) = ColorScheme::by_name(name) {
                    self.colorscheme = scheme;
                } else {
                    log::warn!("unknown colorscheme '{}'", name);
                }
            }
            _ => log::debug!("ignoring rc line '{}'", line),
        }
    }

    fn handle_set(&mut self, option: &str) {
        match option {
            "number" | "nu" => self.show_line_numbers = true,
            "nonumber" | "nonu" => self.show_line_numbers = false,
            _ => {
                if let Some(value) = option
                    .strip_prefix("breakpoint=")
                    .and_then(|v| v.parse::<u32>().ok())
                {
                    if BREAKPOINT_RANGE.contains(&value) {
                        self.breakpoint = value as f32;
                    }
                }
            }
        }
    }
}
