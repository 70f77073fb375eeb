use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use notify::{Event as NotifyEvent, RecommendedWatcher, RecursiveMode, Watcher};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

use crate::app::{App, Pane};

fn watch_file(app: &App) -> Result<(RecommendedWatcher, Receiver<NotifyEvent>)> {
    let (tx, rx) = mpsc::channel();
    let mut watcher =
        notify::recommended_watcher(move |res: Result<NotifyEvent, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.send(event);
            }
        })?;
    if let Some(ref path) = app.file_path {
        if let Err(e) = watcher.watch(path, RecursiveMode::NonRecursive) {
            log::debug!("not watching {}: {}", path.display(), e);
        }
    }
    Ok((watcher, rx))
}

pub fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut ratatui::Terminal<B>,
    mut app: App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let (mut watcher, mut rx) = watch_file(&app)?;

    if let Ok(size) = terminal.size() {
        app.on_resize(size.width);
    }

    loop {
        terminal.draw(|f| crate::ui::ui(f, &mut app))?;
        app.update_status();

        // Re-create the watcher when the file path changes
        if app.file_path_changed {
            drop(watcher);
            (watcher, rx) = watch_file(&app)?;
            app.file_path_changed = false;
        }

        if app.auto_reload {
            match rx.try_recv() {
                Ok(event) => {
                    if matches!(event.kind, notify::EventKind::Modify(_)) {
                        // Ignore our own download landing on the watched file
                        let should_reload = app
                            .last_save_time
                            .is_none_or(|t| t.elapsed() > Duration::from_millis(1000));
                        if !app.editor.modified && should_reload {
                            app.reload_file();
                        }
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => {}
            }
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                // Filter out key repeat events on Windows to prevent duplicate input
                #[cfg(target_os = "windows")]
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                #[cfg(not(target_os = "windows"))]
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                // Ctrl+w followed by a direction moves focus between panes
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('w')
                {
                    if let Ok(true) = event::poll(Duration::from_millis(1000)) {
                        if let Ok(Event::Key(next_key)) = event::read() {
                            match next_key.code {
                                KeyCode::Char('w') => app.switch_focus(),
                                KeyCode::Char('h') | KeyCode::Char('k') => app.focus = Pane::Editor,
                                KeyCode::Char('l') | KeyCode::Char('j') => app.focus = Pane::Preview,
                                _ => {}
                            }
                        }
                    }
                    continue;
                }

                if super::keyboard::handle_key(&mut app, key) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => {
                super::mouse::handle_mouse_event(&mut app, mouse);
            }
            Event::Resize(width, _) => {
                app.on_resize(width);
            }
            Event::FocusLost => {
                // The pointer left the terminal; drop any drag in progress
                app.layout.pointer_leave();
            }
            _ => {}
        }
    }
}
