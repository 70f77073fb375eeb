use super::render::{Control, ControlGroup, PLACEHOLDER_MESSAGE, RenderedForm};
use super::state::FormState;
use crate::schema::FieldType;

/// Plain-text rendering of the preview, used for `--stdout` output.
pub fn plain_lines(rendered: &RenderedForm, state: &FormState) -> Vec<String> {
    let Some(view) = rendered.form() else {
        return vec![PLACEHOLDER_MESSAGE.to_string()];
    };

    let mut lines = vec![
        view.title.clone(),
        view.description.clone(),
        String::new(),
    ];
    for group in &view.groups {
        lines.extend(group_lines(group, state));
        lines.push(String::new());
    }
    lines.push("[ Submit ]".to_string());
    lines
}

pub fn label_line(group: &ControlGroup) -> String {
    if group.required {
        format!("{} *", group.label)
    } else {
        group.label.clone()
    }
}

/// What a single-value input shows: the value (masked for passwords) or
/// its placeholder.
pub fn input_text(kind: Option<FieldType>, value: &str, placeholder: Option<&str>) -> String {
    if value.is_empty() {
        return placeholder.unwrap_or("").to_string();
    }
    match kind {
        Some(FieldType::Password) => "*".repeat(value.chars().count()),
        _ => value.to_string(),
    }
}

fn group_lines(group: &ControlGroup, state: &FormState) -> Vec<String> {
    let mut lines = vec![label_line(group)];
    let value = state.text_value(&group.id);
    match &group.control {
        Control::Input { kind, placeholder } => {
            lines.push(format!(
                "  [{}]",
                input_text(Some(*kind), value, placeholder.as_deref())
            ));
        }
        Control::TextArea { placeholder } => {
            let shown = input_text(None, value, placeholder.as_deref());
            for line in shown.split('\n') {
                lines.push(format!("  | {}", line));
            }
        }
        Control::Select { options } => {
            let chosen = options
                .iter()
                .find(|o| o.value == value)
                .map(|o| o.label.as_str())
                .unwrap_or("(choose)");
            lines.push(format!("  < {} >", chosen));
        }
        Control::Radio { options } => {
            for option in options {
                let mark = if option.value == value { "(*)" } else { "( )" };
                lines.push(format!("  {} {}", mark, option.label));
            }
        }
        Control::Checkboxes { options } => {
            for option in options {
                let mark = if state.is_checked(&group.id, &option.value) {
                    "[x]"
                } else {
                    "[ ]"
                };
                lines.push(format!("  {} {}", mark, option.label));
            }
        }
        Control::Unsupported { type_name } => {
            lines.push(format!("  Unsupported field type: {}", type_name));
        }
    }
    if let Some(message) = state.error(&group.id) {
        lines.push(format!("  ! {}", message));
    }
    lines
}
