use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::event::{self, Event, KeyEventKind},
    Terminal,
};
use shop_config::AppConfig;
use std::io;
use std::time::Duration;

mod actions;
mod app;
mod bindings;
mod catalog;
mod cli;
mod domain_models;
mod input;
mod logger;
mod reducers;
mod state;
mod terminal;
#[cfg(test)]
mod test_support;
mod theme;
mod variants;
mod view_models;
mod views;

use app::App;
use catalog::CatalogSource;
use cli::Args;
use terminal::TerminalGuard;
use theme::Theme;

fn main() -> Result<()> {
    let args = Args::parse();

    let env_level = std::env::var("RUST_LOG").ok();
    let log_file = logger::init(env_level.as_deref())?;
    log::info!("Starting shop-tui, logging to {}", log_file.display());

    let config = match &args.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };
    let level = logger::apply_config_level(env_level.as_deref(), &config.log_level);
    log::debug!("Config: {:?}, log level {}", config, level);

    let source = CatalogSource {
        path: args.catalog.clone().or(config.catalog_path.clone()),
        delay: Duration::from_millis(config.fetch_delay_ms),
    };
    let initial = app::initial_tab(args.view, &config.initial_view);
    let mut app = App::new(initial, source)?;

    if let Some(path) = &args.replay {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read replay file {}", path.display()))?;
        let actions = actions::record::parse_replay(&json)
            .with_context(|| format!("Failed to parse replay file {}", path.display()))?;
        app.replay(&actions);
    }

    // Setup terminal, restored when the guard drops
    let guard = TerminalGuard::enter(io::stdout())?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(
        &mut terminal,
        &mut app,
        Duration::from_millis(config.tick_rate_ms),
    );

    drop(guard);

    if let Err(err) = &result {
        log::error!("Exiting with error: {:#}", err);
    }

    log::info!("Exiting shop-tui");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    let theme = Theme::default();
    let mut redraw = true;

    while app.running {
        redraw |= app.poll();

        if redraw {
            if let Some(vm) = app.view_model() {
                terminal.draw(|frame| {
                    let area = frame.area();
                    views::render(&vm, &theme, area, frame);
                })?;
            }
            redraw = false;
        }

        if event::poll(tick_rate)? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(command) = input::command_for_key(key) {
                        app.handle(command);
                        redraw = true;
                    }
                }
                Event::Resize(_, _) => redraw = true,
                _ => {}
            }
        }
    }

    Ok(())
}
