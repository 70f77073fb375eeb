use anyhow::{Context, Result};
use serde_json::{Map, Value, json};
use std::{
    fs::OpenOptions,
    io::Write,
    path::PathBuf,
};

/// Where collected form values go once a submission passes validation.
pub trait SubmitSink {
    fn submit(&mut self, values: &Map<String, Value>) -> Result<()>;
}

/// Writes submissions to the log.
#[derive(Debug, Default)]
pub struct LogSink;

impl SubmitSink for LogSink {
    fn submit(&mut self, values: &Map<String, Value>) -> Result<()> {
        log::info!("Form submitted: {}", Value::Object(values.clone()));
        Ok(())
    }
}

/// Appends one JSON object per submission to a file.
#[derive(Debug)]
pub struct JsonLinesSink {
    path: PathBuf,
}

impl JsonLinesSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SubmitSink for JsonLinesSink {
    fn submit(&mut self, values: &Map<String, Value>) -> Result<()> {
        let record = json!({
            "submittedAt": chrono::Local::now().to_rfc3339(),
            "values": values,
        });
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("cannot open '{}'", self.path.display()))?;
        writeln!(file, "{}", record)?;
        log::info!("submission appended to {}", self.path.display());
        Ok(())
    }
}
