mod app;
mod cli;
mod logging;
mod models;
mod nav;
mod router;
mod theme;
mod ui;

use std::io::{self, stdout, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::{error, info};

use app::App;
use cli::{parse_args, CliConfig, VERSION};
use logging::init_logging;
use models::Content;

fn main() -> Result<()> {
    let config = parse_args();

    let log_path = init_logging(config.log_file.as_deref(), &config.log_level)
        .context("could not set up logging")?;
    info!(version = VERSION, log = %log_path.display(), "starting pulse-one");

    let content = load_content(&config)?;

    // Restore the terminal before the default hook prints the panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let mut terminal = or_restore(|| setup_terminal(config.mouse), restore_terminal)
        .context("could not set up the terminal")?;

    // Run the app
    let mut app = App::new(content);
    let result = run(&mut terminal, &mut app, config.tick_rate);

    // Restore terminal
    restore_terminal()?;
    terminal.show_cursor()?;

    match &result {
        Ok(()) => info!("pulse-one exited"),
        Err(e) => error!(error = %e, "pulse-one stopped on error"),
    }
    result.context("terminal I/O failed")
}

/// Embedded content unless a file was given on the command line
fn load_content(config: &CliConfig) -> Result<Content> {
    match config.content_path.as_deref() {
        Some(path) => {
            info!(path = %path.display(), "loading content file");
            Content::load(path).with_context(|| format!("could not load {}", path.display()))
        }
        None => Content::embedded().context("built-in content is invalid"),
    }
}

fn setup_terminal(mouse: bool) -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    if mouse {
        execute!(stdout(), EnableMouseCapture)?;
    }
    Terminal::new(CrosstermBackend::new(stdout()))
}

/// Run `setup`; if it fails partway, undo whatever it changed before
/// returning the setup error
fn or_restore<T>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    setup().inspect_err(|e| {
        error!(error = %e, "terminal setup failed");
        let _ = restore();
    })
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App, tick_rate: Duration) -> io::Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| {
            app.set_viewport(frame.area());
            ui::render(frame, app);
        })?;

        // Handle input
        if event::poll(tick_rate)? {
            app.handle_event(event::read()?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: io::Result<()> = or_restore(
            || Err(io::Error::other("no tty")),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_leaves_terminal_alone() {
        let restored = Cell::new(false);
        let result = or_restore(
            || Ok(7),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert_eq!(result.unwrap(), 7);
        assert!(!restored.get());
    }
}
