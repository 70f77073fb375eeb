mod editor;
mod json_highlight;
mod preview;
mod status_bar;
mod utils;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::layout::Orientation;

use editor::render_editor;
use preview::render_preview;
use status_bar::render_status_bar;

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let main = chunks[0];
    app.set_split_container(Some(main));

    let (first, divider, second) =
        split_panes(main, app.layout.orientation(), app.layout.percent());
    app.editor_area = Some(first);
    app.divider_area = Some(divider);
    app.preview_area = Some(second);

    render_editor(f, app, first);
    render_divider(f, app, divider);
    render_preview(f, app, second);
    render_status_bar(f, app, chunks[1]);
}

/// Editor pane, one-cell divider, preview pane. The divider sits at
/// `percent` of the container along the active axis.
pub fn split_panes(area: Rect, orientation: Orientation, percent: f32) -> (Rect, Rect, Rect) {
    let (direction, extent) = match orientation {
        Orientation::Horizontal => (Direction::Horizontal, area.width),
        Orientation::Vertical => (Direction::Vertical, area.height),
    };
    let first = ((extent as f32) * percent / 100.0).round() as u16;
    let first = first.min(extent.saturating_sub(1));

    let parts = Layout::default()
        .direction(direction)
        .constraints([
            Constraint::Length(first),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);
    (parts[0], parts[1], parts[2])
}

fn render_divider(f: &mut Frame, app: &App, area: Rect) {
    let color = if app.layout.is_dragging() {
        app.config.colorscheme.divider_active
    } else {
        app.config.colorscheme.divider
    };
    let glyph = match app.layout.orientation() {
        Orientation::Horizontal => "│",
        Orientation::Vertical => "─",
    };
    let fill: Vec<ratatui::text::Line> = match app.layout.orientation() {
        Orientation::Horizontal => (0..area.height).map(|_| glyph.into()).collect(),
        Orientation::Vertical => vec![glyph.repeat(area.width as usize).into()],
    };
    let widget = Paragraph::new(fill)
        .style(Style::default().fg(color))
        .block(Block::default());
    f.render_widget(widget, area);
}
