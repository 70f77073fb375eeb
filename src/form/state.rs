use std::collections::{BTreeMap, BTreeSet};

use regex::Regex;
use serde_json::{Map, Value};

use super::render::{Control, ControlGroup, FormView};

pub const REQUIRED_MESSAGE: &str = "This field is required";

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub id: String,
    pub message: String,
}

/// Values and focus for the preview form.
///
/// Values are keyed by field id and outlive any single schema, so editing
/// the schema text does not wipe what has been typed into the preview.
/// A value is dropped once its id is no longer in a rendered form; the
/// placeholder shown for an invalid buffer keeps everything.
#[derive(Debug, Default)]
pub struct FormState {
    values: Map<String, Value>,
    errors: BTreeMap<String, String>,
    /// Index into the groups; `groups.len()` is the submit button.
    pub focus: usize,
    /// Highlighted option within a radio or checkbox group.
    pub option_cursor: usize,
    pub dark_mode: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring stored values in line with a freshly rendered form.
    pub fn sync(&mut self, view: Option<&FormView>) {
        let Some(view) = view else {
            self.focus = 0;
            self.option_cursor = 0;
            return;
        };
        // The first group with an id decides the shape of its value.
        let mut owned: BTreeSet<&str> = BTreeSet::new();
        for group in view.bound_groups() {
            if !owned.insert(group.id.as_str()) {
                continue;
            }
            let fits = match (self.values.get(&group.id), &group.control) {
                (Some(Value::Array(_)), Control::Checkboxes { .. }) => true,
                (Some(Value::String(_)), Control::Checkboxes { .. }) => false,
                (Some(Value::String(_)), _) => true,
                _ => false,
            };
            if !fits {
                self.values
                    .insert(group.id.clone(), group.control.default_value());
            }
        }
        // Ids that left the form take their values along.
        self.values.retain(|id, _| owned.contains(id.as_str()));
        self.errors.retain(|id, _| owned.contains(id.as_str()));
        self.focus = self.focus.min(view.groups.len());
        let option_count = self
            .focused_group(view)
            .map(|g| g.control.options().len())
            .unwrap_or(0);
        if self.option_cursor >= option_count {
            self.option_cursor = option_count.saturating_sub(1);
        }
    }

    pub fn value(&self, id: &str) -> Option<&Value> {
        self.values.get(id)
    }

    pub fn text_value(&self, id: &str) -> &str {
        self.values.get(id).and_then(Value::as_str).unwrap_or("")
    }

    pub fn is_checked(&self, id: &str, option_value: &str) -> bool {
        self.values
            .get(id)
            .and_then(Value::as_array)
            .is_some_and(|arr| arr.iter().any(|v| v.as_str() == Some(option_value)))
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(String::as_str)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) {
        self.values.insert(id.to_string(), Value::String(text.into()));
        self.errors.remove(id);
    }

    pub fn choose(&mut self, id: &str, option_value: &str) {
        self.set_text(id, option_value);
    }

    pub fn toggle(&mut self, id: &str, option_value: &str) {
        let entry = self
            .values
            .entry(id.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if !entry.is_array() {
            *entry = Value::Array(Vec::new());
        }
        if let Value::Array(checked) = entry {
            match checked.iter().position(|v| v.as_str() == Some(option_value)) {
                Some(i) => {
                    checked.remove(i);
                }
                None => checked.push(Value::String(option_value.to_string())),
            }
        }
        self.errors.remove(id);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn focused_group<'a>(&self, view: &'a FormView) -> Option<&'a ControlGroup> {
        view.groups.get(self.focus)
    }

    pub fn on_submit_button(&self, view: &FormView) -> bool {
        self.focus == view.groups.len()
    }

    pub fn focus_next(&mut self, view: &FormView) {
        self.focus = (self.focus + 1) % (view.groups.len() + 1);
        self.option_cursor = 0;
    }

    pub fn focus_prev(&mut self, view: &FormView) {
        let slots = view.groups.len() + 1;
        self.focus = (self.focus + slots - 1) % slots;
        self.option_cursor = 0;
    }

    /// Left/Right on the focused control: steps a select or radio choice,
    /// or moves the highlight across checkbox options.
    pub fn step_choice(&mut self, view: &FormView, delta: isize) {
        let Some(group) = self.focused_group(view) else {
            return;
        };
        let options = group.control.options();
        if options.is_empty() {
            return;
        }
        let len = options.len() as isize;
        match &group.control {
            Control::Select { .. } | Control::Radio { .. } => {
                let current = options
                    .iter()
                    .position(|o| o.value == self.text_value(&group.id));
                let next = match current {
                    Some(i) => (i as isize + delta).rem_euclid(len),
                    None if delta < 0 => len - 1,
                    None => 0,
                };
                self.option_cursor = next as usize;
                self.choose(&group.id, &options[next as usize].value);
            }
            Control::Checkboxes { .. } => {
                self.option_cursor =
                    (self.option_cursor as isize + delta).rem_euclid(len) as usize;
            }
            _ => {}
        }
    }

    /// Space on a checkbox group toggles the highlighted option.
    pub fn toggle_highlighted(&mut self, view: &FormView) {
        let Some(group) = self.focused_group(view) else {
            return;
        };
        if let Control::Checkboxes { options } = &group.control {
            if let Some(option) = options.get(self.option_cursor) {
                self.toggle(&group.id, &option.value);
            }
        }
    }

    pub fn type_char(&mut self, view: &FormView, c: char) {
        let Some(group) = self.focused_group(view) else {
            return;
        };
        if group.control.accepts_text() {
            let mut text = self.text_value(&group.id).to_string();
            text.push(c);
            self.set_text(&group.id, text);
        }
    }

    pub fn backspace(&mut self, view: &FormView) {
        let Some(group) = self.focused_group(view) else {
            return;
        };
        if group.control.accepts_text() {
            let mut text = self.text_value(&group.id).to_string();
            if text.pop().is_some() {
                self.set_text(&group.id, text);
            }
        }
    }

    /// Validate every bound control and collect the values.
    ///
    /// On failure nothing is returned and each offending field carries a
    /// message until it is edited again.
    pub fn submit(&mut self, view: &FormView) -> Result<Map<String, Value>, Vec<FieldError>> {
        self.errors.clear();
        let mut collected = Map::new();
        let mut failures = Vec::new();

        for group in view.bound_groups() {
            let value = self
                .values
                .get(&group.id)
                .cloned()
                .unwrap_or_else(|| group.control.default_value());
            if let Some(message) = check_group(group, &value) {
                failures.push(FieldError {
                    id: group.id.clone(),
                    message,
                });
            }
            collected.insert(group.id.clone(), value);
        }

        if failures.is_empty() {
            Ok(collected)
        } else {
            for failure in &failures {
                self.errors
                    .entry(failure.id.clone())
                    .or_insert_with(|| failure.message.clone());
            }
            Err(failures)
        }
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        _ => false,
    }
}

fn check_group(group: &ControlGroup, value: &Value) -> Option<String> {
    if is_empty_value(value) {
        return group.required.then(|| REQUIRED_MESSAGE.to_string());
    }
    let rule = group.validation.as_ref()?;
    let text = value.as_str()?;
    match Regex::new(&rule.pattern) {
        Ok(re) if re.is_match(text) => None,
        Ok(_) => Some(if rule.message.is_empty() {
            format!("{} is invalid", group.label)
        } else {
            rule.message.clone()
        }),
        Err(err) => {
            log::warn!("ignoring invalid pattern for '{}': {}", group.id, err);
            None
        }
    }
}
