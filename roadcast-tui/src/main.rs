//! Terminal UI for roadcast that shows simulated weather and traffic and answers forecast requests.

mod app;
mod backdrop;
mod config;
mod input;
mod ui;

use std::{fs::File, io, path::Path, sync::Mutex, time::Duration as StdDuration};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use roadcast_core::service::Dashboard;
use roadcast_provider_simulated::SimulatedProvider;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::config::Settings;
use crate::input::Action;

fn main() -> Result<()> {
    let settings = Settings::parse();

    if let Some(path) = settings.log_file.as_deref() {
        init_tracing(path)?;
    }

    // Data source + service setup
    let provider = settings
        .seed
        .map_or_else(SimulatedProvider::new, SimulatedProvider::seeded);
    let dashboard = Dashboard::new(provider, settings.location.clone());
    info!(
        source = %dashboard.source().id,
        location = %settings.location,
        seed = ?settings.seed,
        "starting dashboard"
    );

    // App state
    let mut app = App::new(dashboard, &settings.form_location, Local::now().naive_local());
    app.effects_enabled = !settings.no_effects;

    // Terminal init
    enable_raw_mode()?;
    let mut terminal = restore_on_error(setup_terminal(), restore_terminal_modes)?;

    // Run event loop
    let res = run(&mut terminal, app, settings.tick_rate());

    // Restore terminal
    restore_terminal_modes()?;
    terminal.show_cursor()?;

    res
}

/// Enter the alternate screen and wrap stdout; raw mode must already be on.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal_modes() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run `restore` when `setup` failed and hand back the setup error.
fn restore_on_error<T>(setup: Result<T>, restore: impl FnOnce() -> Result<()>) -> Result<T> {
    setup.or_else(|err| match restore() {
        Ok(()) => Err(err),
        Err(restore_err) => Err(err.context(format!("Failed to restore terminal: {restore_err}"))),
    })
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    tick_rate: StdDuration,
) -> Result<()> {
    loop {
        // Full redraw from state on every pass
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(tick_rate)? {
            if let CEvent::Key(key) = event::read()? {
                match input::handle_key_event(key, &mut app) {
                    Action::Quit => break,
                    Action::None => {}
                    Action::SubmitForecast => app.submit_forecast(),
                    Action::Reload => app.reload(Local::now().naive_local()),
                }
            }
        } else {
            app.on_tick();
        }
    }

    info!(generation = app.view.generation, "dashboard closed");
    Ok(())
}

/// Send tracing output to `path`; stdout belongs to the terminal UI.
fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_err| EnvFilter::new("roadcast=info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use anyhow::anyhow;

    use super::*;

    #[test]
    fn failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let outcome: Result<()> = restore_on_error(Err(anyhow!("no tty")), || {
            restored.set(true);
            Ok(())
        });

        assert!(restored.get(), "restore must run after a failed setup");
        let err = outcome.expect_err("setup error is kept");
        assert_eq!(err.to_string(), "no tty");
    }

    #[test]
    fn successful_setup_keeps_terminal_modes() {
        let restored = Cell::new(false);
        let outcome = restore_on_error(Ok(7), || {
            restored.set(true);
            Ok(())
        });

        assert_eq!(outcome.ok(), Some(7));
        assert!(!restored.get());
    }

    #[test]
    fn failed_restore_is_reported_with_setup_error() {
        let outcome: Result<()> =
            restore_on_error(Err(anyhow!("no tty")), || Err(anyhow!("still raw")));

        let err = outcome.expect_err("setup error is kept");
        assert_eq!(err.root_cause().to_string(), "no tty");
        assert!(format!("{err:#}").contains("still raw"));
    }
}
