use formpane::editor::SchemaEditor;
use formpane::error::SHAPE_ERROR_MESSAGE;
use formpane::form::{Control, render};
use formpane::schema::format_json;
use proptest::prelude::*;

const MINIMAL: &str = r#"{"formTitle":"T","formDescription":"D","fields":[]}"#;

#[test]
fn test_default_editor_has_valid_schema() {
    let editor = SchemaEditor::default();
    let schema = editor.schema().expect("default schema should validate");
    assert_eq!(schema.form_title, "Project Requirements Survey");
    assert_eq!(schema.fields.len(), 1);
    assert!(editor.error().is_none());
    assert!(!editor.modified);
}

#[test]
fn test_every_edit_revalidates() {
    let mut editor = SchemaEditor::with_text(MINIMAL);
    assert!(editor.schema().is_some());

    // Typing at the start breaks the document
    editor.insert_char('x');
    assert!(editor.schema().is_none());
    assert!(editor.error().is_some());
    assert!(editor.modified);

    editor.backspace();
    assert!(editor.schema().is_some());
    assert!(editor.error().is_none());
}

#[test]
fn test_shape_error_message() {
    let editor = SchemaEditor::with_text(r#"{"formTitle":"T","fields":[]}"#);
    assert!(editor.schema().is_none());
    assert_eq!(editor.error(), Some(SHAPE_ERROR_MESSAGE));
}

fn wrap_fields(fields: &str) -> String {
    format!(
        r#"{{"formTitle":"T","formDescription":"D","fields":[{{"id":"ok","type":"text","label":"Ok"}},{}]}}"#,
        fields
    )
}

#[test]
fn test_field_problems_do_not_reject_schema() {
    let cases = [
        (r#"{"id":"a","type":5,"label":"A"}"#, Some("5")),
        (r#"{"id":"a","type":null,"label":"A"}"#, Some("")),
        (r#"{"id":"a","type":"select","label":"A"}"#, Some("select")),
        (r#"{"id":"a","type":"text","label":"A","required":"yes"}"#, None),
        (r#"{"id":"a","type":"radio","label":"A","options":[1,2,3]}"#, None),
        (r#"{"id":"a","type":"text","label":"A","validation":"^x"}"#, None),
    ];
    for (field, unsupported) in cases {
        let editor = SchemaEditor::with_text(wrap_fields(field));
        let schema = editor
            .schema()
            .unwrap_or_else(|| panic!("{} rejected: {:?}", field, editor.error()));
        assert!(editor.error().is_none());

        let rendered = render(Some(schema));
        let view = rendered.form().unwrap();
        assert_eq!(view.groups.len(), 2);
        assert!(matches!(view.groups[0].control, Control::Input { .. }));
        match unsupported {
            Some(name) => assert_eq!(
                view.groups[1].control,
                Control::Unsupported {
                    type_name: name.to_string()
                }
            ),
            None => assert!(view.groups[1].control.is_bound(), "{}", field),
        }
    }
}

#[test]
fn test_lenient_field_values() {
    let editor = SchemaEditor::with_text(wrap_fields(
        r#"{"id":"a","type":"radio","label":"A","required":"yes","options":[1,2,3],"validation":"^x"}"#,
    ));
    let field = &editor.schema().unwrap().fields[1];
    assert!(field.required);
    assert!(field.validation.is_none());
    let values: Vec<&str> = field
        .options
        .iter()
        .flatten()
        .map(|o| o.value())
        .collect();
    assert_eq!(values, vec!["1", "2", "3"]);
}

#[test]
fn test_brace_auto_closes() {
    let mut editor = SchemaEditor::with_text("");
    editor.insert_char('{');
    assert_eq!(editor.text(), "{}");
    assert_eq!(editor.cursor_line_col(), (0, 1));

    editor.insert_newline();
    assert_eq!(editor.text(), "{\n  }");
    assert_eq!(editor.cursor_line_col(), (1, 2));
}

#[test]
fn test_quote_and_bracket_auto_close() {
    let mut editor = SchemaEditor::with_text("");
    editor.insert_char('[');
    editor.insert_char('"');
    assert_eq!(editor.text(), "[\"\"]");
    assert_eq!(editor.cursor_line_col(), (0, 2));
}

#[test]
fn test_newline_keeps_indentation() {
    let mut editor = SchemaEditor::with_text("    \"a\": 1");
    editor.move_end();
    editor.insert_newline();
    assert_eq!(editor.text(), "    \"a\": 1\n    ");
}

#[test]
fn test_tab_inserts_two_spaces() {
    let mut editor = SchemaEditor::with_text("");
    editor.insert_tab();
    assert_eq!(editor.text(), "  ");
}

#[test]
fn test_format_pretty_prints_with_two_spaces() {
    let mut editor = SchemaEditor::with_text(MINIMAL);
    editor.format().unwrap();
    assert_eq!(
        editor.text(),
        "{\n  \"formTitle\": \"T\",\n  \"formDescription\": \"D\",\n  \"fields\": []\n}"
    );
    assert!(editor.schema().is_some());
}

#[test]
fn test_format_failure_keeps_text() {
    let mut editor = SchemaEditor::with_text("{ broken");
    assert!(editor.format().is_err());
    assert_eq!(editor.text(), "{ broken");
    assert!(editor.schema().is_none());
    assert!(editor.error().is_some());
}

#[test]
fn test_format_keeps_key_order() {
    let formatted = format_json(r#"{"z":1,"a":2}"#).unwrap();
    assert!(formatted.find("\"z\"").unwrap() < formatted.find("\"a\"").unwrap());
}

#[test]
fn test_undo_and_redo() {
    let mut editor = SchemaEditor::with_text(MINIMAL);
    editor.insert_char('x');
    assert!(editor.schema().is_none());

    assert!(editor.undo());
    assert_eq!(editor.text(), MINIMAL);
    assert!(editor.schema().is_some());

    assert!(editor.redo());
    assert!(editor.text().starts_with('x'));
    assert!(editor.schema().is_none());

    assert!(!editor.redo());
}

#[test]
fn test_undo_restores_text_before_format() {
    let mut editor = SchemaEditor::with_text(MINIMAL);
    editor.format().unwrap();
    assert!(editor.undo());
    assert_eq!(editor.text(), MINIMAL);
}

#[test]
fn test_load_text_clears_history() {
    let mut editor = SchemaEditor::with_text(MINIMAL);
    editor.insert_char('x');
    editor.load_text(MINIMAL);
    assert!(!editor.undo());
    assert!(!editor.modified);
}

#[test]
fn test_scroll_follows_cursor() {
    let text = (0..50).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
    let mut editor = SchemaEditor::with_text(text);
    for _ in 0..30 {
        editor.move_down();
    }
    editor.scroll_to_cursor(10, 80);
    assert_eq!(editor.scroll, 21);

    for _ in 0..30 {
        editor.move_up();
    }
    editor.scroll_to_cursor(10, 80);
    assert_eq!(editor.scroll, 0);
}

proptest! {
    #[test]
    fn format_is_idempotent(
        title in "[a-zA-Z ]{1,12}",
        ids in prop::collection::vec("[a-z]{1,6}", 0..5),
        required in any::<bool>(),
    ) {
        let fields: Vec<serde_json::Value> = ids
            .iter()
            .map(|id| serde_json::json!({"id": id, "type": "text", "label": id, "required": required}))
            .collect();
        let doc = serde_json::json!({
            "formTitle": title,
            "formDescription": "d",
            "fields": fields,
        });
        let once = format_json(&doc.to_string()).unwrap();
        let twice = format_json(&once).unwrap();
        prop_assert_eq!(once, twice);
    }
}
