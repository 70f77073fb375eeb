use serde::{Deserialize, Deserializer};
use serde_json::{Value, json};

use crate::error::SchemaError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    #[serde(deserialize_with = "scalar_text")]
    pub form_title: String,
    #[serde(deserialize_with = "scalar_text")]
    pub form_description: String,
    pub fields: Vec<Field>,
}

/// One field entry. Decoding never fails: a malformed property degrades to
/// its default so the renderer can show the field inline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Field {
    pub id: String,
    /// The type name as written; non-string types keep their JSON text.
    pub field_type: String,
    pub label: String,
    pub required: bool,
    pub placeholder: Option<String>,
    /// `None` when the key is missing or not an array.
    pub options: Option<Vec<FieldOption>>,
    pub validation: Option<FieldValidation>,
}

impl Field {
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };
        Self {
            id: text_of(obj.get("id")),
            field_type: text_of(obj.get("type")),
            label: text_of(obj.get("label")),
            required: obj.get("required").is_some_and(is_truthy),
            placeholder: obj
                .get("placeholder")
                .filter(|v| !v.is_null())
                .map(|v| text_of(Some(v))),
            options: obj
                .get("options")
                .and_then(Value::as_array)
                .map(|entries| entries.iter().map(FieldOption::from_value).collect()),
            validation: obj.get("validation").and_then(FieldValidation::from_value),
        }
    }

    /// Known field type for this field, or `None` when the type name is not
    /// one the renderer understands.
    pub fn kind(&self) -> Option<FieldType> {
        FieldType::from_name(&self.field_type)
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// An option entry is either a bare string or an explicit value/label pair.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOption {
    Plain(String),
    Labeled { value: String, label: String },
}

impl FieldOption {
    /// Objects become value/label pairs; any other entry is shown as text.
    pub fn from_value(value: &Value) -> Self {
        match value.as_object() {
            Some(obj) => FieldOption::Labeled {
                value: text_of(obj.get("value")),
                label: text_of(obj.get("label")),
            },
            None => FieldOption::Plain(text_of(Some(value))),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            FieldOption::Plain(s) => s,
            FieldOption::Labeled { value, .. } => value,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FieldOption::Plain(s) => s,
            FieldOption::Labeled { label, .. } => label,
        }
    }
}

impl<'de> Deserialize<'de> for FieldOption {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Optional client-side pattern check applied to non-empty values on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValidation {
    pub pattern: String,
    pub message: String,
}

impl FieldValidation {
    /// A rule needs an object with a string `pattern`; anything else is
    /// dropped.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let pattern = obj.get("pattern")?.as_str()?.to_string();
        Some(Self {
            pattern,
            message: text_of(obj.get("message")),
        })
    }
}

// Strings verbatim, null or missing as empty, everything else as JSON text.
fn text_of(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Text,
    Email,
    Password,
    Number,
    Textarea,
    Select,
    Date,
    Time,
    Color,
    File,
    Radio,
    Checkbox,
    Url,
}

// Case-sensitive; adding a type is one entry here plus one renderer arm.
const FIELD_TYPES: &[(&str, FieldType)] = &[
    ("text", FieldType::Text),
    ("email", FieldType::Email),
    ("password", FieldType::Password),
    ("number", FieldType::Number),
    ("textarea", FieldType::Textarea),
    ("select", FieldType::Select),
    ("date", FieldType::Date),
    ("time", FieldType::Time),
    ("color", FieldType::Color),
    ("file", FieldType::File),
    ("radio", FieldType::Radio),
    ("checkbox", FieldType::Checkbox),
    ("url", FieldType::Url),
];

impl FieldType {
    pub fn from_name(name: &str) -> Option<Self> {
        FIELD_TYPES
            .iter()
            .find(|(type_name, _)| *type_name == name)
            .map(|(_, kind)| *kind)
    }

    pub fn name(self) -> &'static str {
        FIELD_TYPES
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(type_name, _)| *type_name)
            .unwrap_or("text")
    }

    pub fn all() -> impl Iterator<Item = FieldType> {
        FIELD_TYPES.iter().map(|(_, kind)| *kind)
    }
}

/// Parse and structurally check an editor buffer.
///
/// A document passes when `formTitle` and `formDescription` are truthy and
/// `fields` is an array. Individual fields are not checked here: each one
/// decodes leniently and problems show up in the rendered form.
pub fn parse_schema(text: &str) -> Result<FormSchema, SchemaError> {
    let value: Value = serde_json::from_str(text)?;
    if !has_schema_shape(&value) {
        return Err(SchemaError::Shape);
    }
    Ok(serde_json::from_value(value)?)
}

fn has_schema_shape(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    obj.get("formTitle").is_some_and(is_truthy)
        && obj.get("formDescription").is_some_and(is_truthy)
        && obj.get("fields").is_some_and(Value::is_array)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// Title and description only need to be truthy, so numbers and the like
// are shown as their JSON text rather than rejected.
fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_of(Some(&value)))
}

/// Pretty-print JSON text with two-space indentation, keeping key order.
pub fn format_json(text: &str) -> Result<String, SchemaError> {
    let value: Value = serde_json::from_str(text)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// The schema shown when the editor starts with no file.
pub fn default_schema_text() -> String {
    let value = json!({
        "formTitle": "Project Requirements Survey",
        "formDescription": "Please fill out this survey about your project needs",
        "fields": [
            {
                "id": "name",
                "type": "text",
                "label": "Full Name",
                "required": true,
                "placeholder": "Enter your full name"
            }
        ]
    });
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_lookup_is_case_sensitive() {
        assert_eq!(FieldType::from_name("text"), Some(FieldType::Text));
        assert_eq!(FieldType::from_name("Text"), None);
        assert_eq!(FieldType::from_name(""), None);
    }

    #[test]
    fn test_type_names_round_trip() {
        for kind in FieldType::all() {
            assert_eq!(FieldType::from_name(kind.name()), Some(kind));
        }
        assert_eq!(FieldType::all().count(), 13);
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(false)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(3)));
        assert!(is_truthy(&json!([])));
    }

    #[test]
    fn test_numeric_title_is_accepted() {
        let schema =
            parse_schema(r#"{"formTitle": 7, "formDescription": "D", "fields": []}"#).unwrap();
        assert_eq!(schema.form_title, "7");
    }

    #[test]
    fn test_option_variants() {
        let opts: Vec<FieldOption> =
            serde_json::from_str(r#"["a", {"value": "b", "label": "Bee"}]"#).unwrap();
        assert_eq!(opts[0].value(), "a");
        assert_eq!(opts[0].label(), "a");
        assert_eq!(opts[1].value(), "b");
        assert_eq!(opts[1].label(), "Bee");
    }

    #[test]
    fn test_malformed_field_properties_degrade() {
        let schema = parse_schema(
            r#"{"formTitle":"T","formDescription":"D","fields":[
                {"id":"a","type":5,"label":"A","required":"yes"},
                {"id":7,"type":null,"label":null,"required":0,
                 "options":[1,true,{"value":2,"label":"Two"}],
                 "validation":{"pattern":3}},
                "not an object"
            ]}"#,
        )
        .unwrap();
        let [first, second, third] = &schema.fields[..] else {
            panic!("expected three fields");
        };
        assert_eq!(first.field_type, "5");
        assert!(first.required);
        assert_eq!(first.kind(), None);

        assert_eq!(second.id, "7");
        assert_eq!(second.field_type, "");
        assert_eq!(second.label, "");
        assert!(!second.required);
        let options = second.options.as_ref().unwrap();
        assert_eq!(options[0].value(), "1");
        assert_eq!(options[1].label(), "true");
        assert_eq!(options[2].value(), "2");
        assert_eq!(options[2].label(), "Two");
        assert_eq!(second.validation, None);

        assert_eq!(third, &Field::default());
    }

    #[test]
    fn test_options_must_be_an_array() {
        let field = Field::from_value(&json!({"type": "select", "options": "abc"}));
        assert_eq!(field.options, None);
        let field = Field::from_value(&json!({"type": "select", "options": []}));
        assert_eq!(field.options, Some(vec![]));
    }

    #[test]
    fn test_validation_message_defaults_to_empty() {
        let rule = FieldValidation::from_value(&json!({"pattern": "^a"})).unwrap();
        assert_eq!(rule.pattern, "^a");
        assert_eq!(rule.message, "");
        assert_eq!(FieldValidation::from_value(&json!("^a")), None);
    }

    #[test]
    fn test_default_schema_is_valid() {
        let schema = parse_schema(&default_schema_text()).unwrap();
        assert_eq!(schema.form_title, "Project Requirements Survey");
        assert_eq!(schema.fields.len(), 1);
        assert!(schema.fields[0].required);
    }
}
