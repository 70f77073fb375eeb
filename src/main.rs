use anyhow::{Context, Result};
use clap::{Arg, Command};
use crossterm::{
    cursor,
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{fs, io::stdout, panic, path::PathBuf};

use formpane::app::App;
use formpane::config::RcConfig;
use formpane::form::{FormState, JsonLinesSink, plain_lines};
use formpane::input;

fn cli() -> Command {
    Command::new("formpane")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Edit a JSON form schema next to a live form preview")
        .arg(Arg::new("file").help("Schema file to edit").index(1))
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Print the rendered form instead of starting the editor")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write the rendered form to a file (use '-' for stdout)")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("submit-log")
                .long("submit-log")
                .help("Append accepted submissions to a JSON-lines file")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("download-dir")
                .long("download-dir")
                .help("Directory that Ctrl+S writes form-schema.json into")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .help("Write diagnostic logs to a file")
                .value_name("FILE"),
        )
}

fn init_logging(path: &str) -> Result<()> {
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    // Set up panic handler to properly clean up terminal on crash
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableFocusChange
        );
        let _ = execute!(stdout(), cursor::Show);

        original_hook(panic_info);
    }));

    let matches = cli().get_matches();

    // The terminal belongs to the UI, so logging is off unless sent to a file
    if let Some(log_path) = matches.get_one::<String>("log") {
        init_logging(log_path)?;
    }

    let config = RcConfig::load();
    let cols = terminal::size().map(|(w, _)| w).unwrap_or(80);
    let mut app = App::new(config, cols);

    if let Some(file_path) = matches.get_one::<String>("file") {
        app.load_file(PathBuf::from(file_path));
    }
    if let Some(dir) = matches.get_one::<String>("download-dir") {
        app.download_dir = PathBuf::from(dir);
    }
    if let Some(path) = matches.get_one::<String>("submit-log") {
        app.set_sink(Box::new(JsonLinesSink::new(path)));
    }

    let stdout_mode = matches.get_flag("stdout");
    let output_file = matches.get_one::<String>("output");

    // Non-interactive mode: print the form as plain text
    if stdout_mode || output_file.is_some() {
        let mut state = FormState::new();
        state.sync(app.rendered.form());
        let output = plain_lines(&app.rendered, &state).join("\n");

        match output_file.map(String::as_str) {
            Some("-") | None => println!("{}", output),
            Some(path) => {
                fs::write(path, output).with_context(|| format!("cannot write '{}'", path))?
            }
        }
        return Ok(());
    }

    let setup_result = (|| -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        )?;
        let backend = CrosstermBackend::new(stdout);
        Ok(Terminal::new(backend)?)
    })();

    let mut terminal = match setup_result {
        Ok(term) => term,
        Err(e) => {
            let _ = disable_raw_mode();
            eprintln!("Failed to initialize terminal: {}", e);
            return Err(e);
        }
    };

    let res = input::run_app(&mut terminal, app);

    // Always clean up, even if there was an error
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    );
    let _ = execute!(terminal.backend_mut(), cursor::Show);
    let _ = terminal.show_cursor();

    if let Err(err) = res {
        eprintln!("Application error: {}", err);
        std::process::exit(1);
    }

    Ok(())
}
