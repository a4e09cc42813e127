//! snix-launcher - Snippet Launcher Overlay
//!
//! Opens a filterable snippet picker in the terminal. The committed snippet (or the
//! combination of several) is printed to stdout once the overlay closes, so a window manager
//! binding or shell wrapper can type or paste it wherever it is needed.

use color_eyre::Result;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use snix_launcher::app::App;
use snix_launcher::cli::{self, CliArgs, Session};
use snix_launcher::config;
use snix_launcher::handlers;
use snix_launcher::selection::Launcher;
use std::error::Error;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::time::Duration;

const LOG_ENV: &str = "SNIX_LAUNCHER_LOG";

fn main() -> Result<(), Box<dyn Error>> {
    color_eyre::install()?;

    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    let args = CliArgs::parse(&raw_args)?;

    if !args.command.is_empty() {
        init_logging(LogTarget::Stderr);
        cli::execute_cli(&args)?;
        return Ok(());
    }

    init_logging(LogTarget::File);

    let session = Session::open(&args)?;
    for rejected in &session.loaded.rejected {
        log::warn!("Skipped snippet: {}", rejected);
    }

    let launcher = Launcher::new(session.settings.launcher, session.loaded.snippets.clone());
    let mut app = App::new(launcher, session.store.path().display().to_string());

    run_overlay(&mut app)?;

    if let Some(payload) = app.outcome {
        log::info!("Handing off payload for {:?}", payload.titles());
        let mut stdout = io::stdout().lock();
        stdout.write_all(payload.text().as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}

/// Runs the overlay until the user commits or cancels.
/// The terminal is restored even when the event loop fails.
fn run_overlay(app: &mut App) -> Result<(), Box<dyn Error>> {
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;

    // Draw on stderr so stdout stays clean for the payload
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    while !app.should_quit {
        if app.take_redraw() {
            terminal.draw(|frame| app.render(frame))?;
        }

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => {
                    handlers::keys::handle_key_events(key, app);
                }
                Event::Mouse(mouse) => {
                    handlers::mouse::handle_mouse_event(mouse, app);
                }
                Event::Resize(_, _) => {
                    terminal.autoresize()?;
                    app.needs_redraw = true;
                }
                _ => {}
            }
        }
    }

    Ok(())
}

enum LogTarget {
    Stderr,
    /// `<data_dir>/snix-launcher/launcher.log`, so log lines never land on the overlay
    File,
}

fn init_logging(target: LogTarget) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "warn"));

    if let LogTarget::File = target {
        let Some(dir) = config::data_dir() else {
            return;
        };
        let file = fs::create_dir_all(&dir).and_then(|_| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(dir.join("launcher.log"))
        });
        match file {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            // No log file means no logger; the facade then drops every record
            Err(_) => return,
        }
    }

    let _ = builder.try_init();
}
