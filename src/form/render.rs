use serde_json::Value;

use crate::schema::{Field, FieldOption, FieldType, FieldValidation, FormSchema};

pub const PLACEHOLDER_MESSAGE: &str = "Please enter a valid JSON schema";

/// An option normalized to a value/label pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl From<&FieldOption> for ChoiceOption {
    fn from(option: &FieldOption) -> Self {
        Self {
            value: option.value().to_string(),
            label: option.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    /// Single-value input; `kind` is one of the plain input types.
    Input {
        kind: FieldType,
        placeholder: Option<String>,
    },
    TextArea {
        placeholder: Option<String>,
    },
    Select {
        options: Vec<ChoiceOption>,
    },
    Radio {
        options: Vec<ChoiceOption>,
    },
    /// Independent toggles whose checked values collect into one array.
    Checkboxes {
        options: Vec<ChoiceOption>,
    },
    Unsupported {
        type_name: String,
    },
}

impl Control {
    /// Whether the control contributes a value to submission.
    pub fn is_bound(&self) -> bool {
        !matches!(self, Control::Unsupported { .. })
    }

    pub fn default_value(&self) -> Value {
        match self {
            Control::Checkboxes { .. } => Value::Array(Vec::new()),
            _ => Value::String(String::new()),
        }
    }

    pub fn options(&self) -> &[ChoiceOption] {
        match self {
            Control::Select { options }
            | Control::Radio { options }
            | Control::Checkboxes { options } => options,
            _ => &[],
        }
    }

    pub fn accepts_text(&self) -> bool {
        matches!(self, Control::Input { .. } | Control::TextArea { .. })
    }
}

/// One labeled control, in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlGroup {
    pub id: String,
    pub label: String,
    pub required: bool,
    pub control: Control,
    pub validation: Option<FieldValidation>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub title: String,
    pub description: String,
    pub groups: Vec<ControlGroup>,
}

impl FormView {
    pub fn bound_groups(&self) -> impl Iterator<Item = &ControlGroup> {
        self.groups.iter().filter(|g| g.control.is_bound())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderedForm {
    Placeholder,
    Form(FormView),
}

impl RenderedForm {
    pub fn form(&self) -> Option<&FormView> {
        match self {
            RenderedForm::Placeholder => None,
            RenderedForm::Form(view) => Some(view),
        }
    }
}

pub fn render(schema: Option<&FormSchema>) -> RenderedForm {
    let Some(schema) = schema else {
        return RenderedForm::Placeholder;
    };
    RenderedForm::Form(FormView {
        title: schema.form_title.clone(),
        description: schema.form_description.clone(),
        groups: schema.fields.iter().map(render_field).collect(),
    })
}

fn render_field(field: &Field) -> ControlGroup {
    let control = match field.kind() {
        Some(kind) => control_for(kind, field),
        None => Control::Unsupported {
            type_name: field.field_type.clone(),
        },
    };
    ControlGroup {
        id: field.id.clone(),
        label: field.label.clone(),
        required: field.required,
        control,
        validation: field.validation.clone(),
    }
}

fn control_for(kind: FieldType, field: &Field) -> Control {
    match kind {
        FieldType::Text
        | FieldType::Email
        | FieldType::Password
        | FieldType::Number
        | FieldType::Url
        | FieldType::Date
        | FieldType::Time
        | FieldType::Color
        | FieldType::File => Control::Input {
            kind,
            placeholder: field.placeholder.clone(),
        },
        FieldType::Textarea => Control::TextArea {
            placeholder: field.placeholder.clone(),
        },
        // Choice types need an options array, even an empty one.
        FieldType::Select | FieldType::Radio | FieldType::Checkbox => {
            let Some(entries) = &field.options else {
                return Control::Unsupported {
                    type_name: field.field_type.clone(),
                };
            };
            let options = entries.iter().map(ChoiceOption::from).collect();
            match kind {
                FieldType::Select => Control::Select { options },
                FieldType::Radio => Control::Radio { options },
                _ => Control::Checkboxes { options },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::parse_schema;

    #[test]
    fn test_every_known_type_gets_a_bound_control() {
        for kind in FieldType::all() {
            let field = Field {
                id: "f".into(),
                field_type: kind.name().into(),
                options: Some(vec![]),
                ..Field::default()
            };
            assert!(render_field(&field).control.is_bound(), "{}", kind.name());
        }
    }

    #[test]
    fn test_choice_types_need_options() {
        let schema = parse_schema(
            r#"{"formTitle":"T","formDescription":"D","fields":[
                {"id":"s","type":"select","label":"S"},
                {"id":"r","type":"radio","label":"R","options":null},
                {"id":"c","type":"checkbox","label":"C","options":[]}]}"#,
        )
        .unwrap();
        let rendered = render(Some(&schema));
        let view = rendered.form().unwrap();
        assert_eq!(
            view.groups[0].control,
            Control::Unsupported {
                type_name: "select".into()
            }
        );
        assert_eq!(
            view.groups[1].control,
            Control::Unsupported {
                type_name: "radio".into()
            }
        );
        assert_eq!(view.groups[2].control, Control::Checkboxes { options: vec![] });
    }

    #[test]
    fn test_malformed_fields_render_inline() {
        let schema = parse_schema(
            r#"{"formTitle":"T","formDescription":"D","fields":[
                {"id":"n","type":"text","label":"Name","required":true},
                {"id":"x","type":5,"label":"X"},
                {"id":"y","type":null,"label":"Y"}]}"#,
        )
        .unwrap();
        let rendered = render(Some(&schema));
        let view = rendered.form().unwrap();
        assert_eq!(view.groups.len(), 3);
        assert!(matches!(view.groups[0].control, Control::Input { .. }));
        assert_eq!(
            view.groups[1].control,
            Control::Unsupported {
                type_name: "5".into()
            }
        );
        assert_eq!(
            view.groups[2].control,
            Control::Unsupported {
                type_name: String::new()
            }
        );
    }

    #[test]
    fn test_checkbox_defaults_to_empty_array() {
        let control = Control::Checkboxes { options: vec![] };
        assert_eq!(control.default_value(), Value::Array(vec![]));
    }
}
