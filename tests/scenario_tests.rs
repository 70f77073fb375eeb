use formpane::app::{App, DOWNLOAD_FILE_NAME, Pane};
use formpane::config::RcConfig;
use formpane::form::{Control, FormState, JsonLinesSink, PLACEHOLDER_MESSAGE, REQUIRED_MESSAGE, plain_lines};
use formpane::layout::Orientation;
use ratatui::{Terminal, backend::TestBackend};
use std::fs;

const REQUIRED_NAME: &str =
    r#"{"formTitle":"T","formDescription":"D","fields":[{"id":"n","type":"text","label":"Name","required":true}]}"#;
const BOGUS_FIELD: &str =
    r#"{"formTitle":"T","formDescription":"D","fields":[{"id":"x","type":"bogus","label":"X","required":false}]}"#;

fn app_with(text: &str) -> App {
    let mut app = App::new(RcConfig::default(), 120);
    app.editor.load_text(text);
    app.refresh_preview();
    app
}

fn draw(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| formpane::ui::ui(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..height {
        for x in 0..width {
            screen.push_str(buffer[(x, y)].symbol());
        }
        screen.push('\n');
    }
    screen
}

#[test]
fn test_required_text_field_blocks_empty_submit() {
    let mut app = app_with(REQUIRED_NAME);
    let view = app.rendered.form().expect("form should render");
    assert_eq!(view.groups.len(), 1);
    let group = &view.groups[0];
    assert_eq!(group.label, "Name");
    assert!(group.required);
    assert!(matches!(group.control, Control::Input { .. }));

    let errors = app.submit_form().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, REQUIRED_MESSAGE);
    assert_eq!(app.form.error("n"), Some(REQUIRED_MESSAGE));

    app.form.set_text("n", "Ada");
    assert!(app.submit_form().is_ok());
    assert!(app.status_message.starts_with("Form submitted"));
}

#[test]
fn test_unknown_field_type_shows_marker() {
    let mut app = app_with(BOGUS_FIELD);
    let lines = plain_lines(&app.rendered, &app.form);
    assert!(lines.iter().any(|l| l.contains("Unsupported field type: bogus")));

    let screen = draw(&mut app, 120, 30);
    assert!(screen.contains("Unsupported field type: bogus"));
}

#[test]
fn test_not_json_shows_error_and_placeholder() {
    let mut app = app_with("not json");
    assert!(app.editor.schema().is_none());
    let message = app.editor.error().expect("parser message");
    assert!(!message.is_empty());
    assert!(app.rendered.form().is_none());

    let mut state = FormState::new();
    state.sync(app.rendered.form());
    assert_eq!(
        plain_lines(&app.rendered, &state),
        vec![PLACEHOLDER_MESSAGE.to_string()]
    );

    let screen = draw(&mut app, 120, 30);
    assert!(screen.contains(PLACEHOLDER_MESSAGE));
}

#[test]
fn test_typing_updates_preview_live() {
    let mut app = app_with(REQUIRED_NAME);
    app.edit_schema(|e| e.insert_char('x'));
    assert!(app.rendered.form().is_none());
    app.edit_schema(|e| e.backspace());
    assert!(app.rendered.form().is_some());
}

#[test]
fn test_format_schema_through_app() {
    let mut app = app_with(REQUIRED_NAME);
    app.format_schema();
    assert!(app.editor.text().contains("\n  \"formTitle\": \"T\""));
    assert_eq!(app.status_message, "Formatted");

    let mut broken = app_with("{");
    broken.format_schema();
    assert_eq!(broken.editor.text(), "{");
    assert!(broken.status_message.starts_with("Cannot format"));
}

#[test]
fn test_dragging_the_divider() {
    let mut app = app_with(REQUIRED_NAME);
    draw(&mut app, 120, 30);
    assert_eq!(app.layout.orientation(), Orientation::Horizontal);
    let divider = app.divider_area.expect("divider drawn");
    assert_eq!(divider.x, 60);

    app.on_pointer_down(divider.x, 5);
    assert!(app.layout.is_dragging());
    app.on_pointer_move(30, 5);
    assert!((app.layout.percent() - 25.0).abs() < 1e-4);

    // Far past the edge still clamps
    app.on_pointer_move(0, 5);
    assert!((app.layout.percent() - 10.0).abs() < 1e-4);

    app.on_pointer_up();
    assert!(!app.layout.is_dragging());
    app.on_pointer_move(100, 5);
    assert!((app.layout.percent() - 10.0).abs() < 1e-4);
}

#[test]
fn test_click_focuses_pane() {
    let mut app = app_with(REQUIRED_NAME);
    draw(&mut app, 120, 30);
    app.on_pointer_down(100, 5);
    assert_eq!(app.focus, Pane::Preview);
    assert!(!app.layout.is_dragging());
    app.on_pointer_down(10, 5);
    assert_eq!(app.focus, Pane::Editor);
}

#[test]
fn test_narrow_terminal_stacks_panes() {
    let mut app = App::new(RcConfig::default(), 120);
    app.on_resize(60);
    assert_eq!(app.layout.orientation(), Orientation::Vertical);

    draw(&mut app, 60, 31);
    let divider = app.divider_area.expect("divider drawn");
    assert_eq!(divider.width, 60);
    assert_eq!(divider.height, 1);

    app.on_pointer_down(5, divider.y);
    app.on_pointer_move(50, 21);
    assert!((app.layout.percent() - 70.0).abs() < 1e-4);
}

#[test]
fn test_download_writes_buffer_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with("  { not valid yet");
    app.download_dir = dir.path().to_path_buf();

    let target = app.download().unwrap();
    assert_eq!(target, dir.path().join(DOWNLOAD_FILE_NAME));
    assert_eq!(fs::read_to_string(target).unwrap(), "  { not valid yet");
}

#[test]
fn test_load_file_and_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schema.json");
    fs::write(&path, REQUIRED_NAME).unwrap();

    let mut app = App::new(RcConfig::default(), 120);
    app.load_file(path.clone());
    assert_eq!(app.editor.text(), REQUIRED_NAME);
    assert!(app.file_path_changed);
    assert!(app.rendered.form().is_some());

    let mut fresh = App::new(RcConfig::default(), 120);
    let default_text = fresh.editor.text().to_string();
    fresh.load_file(dir.path().join("missing.json"));
    assert_eq!(fresh.editor.text(), default_text);
    assert!(fresh.status_message.starts_with("New file"));
}

#[test]
fn test_submissions_append_to_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("submissions.jsonl");

    let mut app = app_with(REQUIRED_NAME);
    app.set_sink(Box::new(JsonLinesSink::new(&log_path)));
    app.form.set_text("n", "Ada");
    app.submit_form().unwrap();
    app.form.set_text("n", "Grace");
    app.submit_form().unwrap();

    let contents = fs::read_to_string(&log_path).unwrap();
    let records: Vec<serde_json::Value> = contents
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["values"]["n"], "Ada");
    assert_eq!(records[1]["values"]["n"], "Grace");
    assert!(records[0]["submittedAt"].is_string());
}

#[test]
fn test_dark_mode_toggle() {
    let mut app = App::new(RcConfig::default(), 120);
    assert!(!app.form.dark_mode);
    app.toggle_dark_mode();
    assert!(app.form.dark_mode);
    draw(&mut app, 120, 30);
}
