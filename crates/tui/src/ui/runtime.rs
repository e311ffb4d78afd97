//! Runtime: event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive a single event loop over terminal input, a periodic tick and
//!   Ctrl+C.
//! - Route keys through `MainView` and execute returned `Effect`s via `cmd`.
//! - Redraw after every handled event or tick.
//!
//! The tick keeps status badges honest across midnight: tiers are computed
//! from "now" on every render, so a redraw is all that is needed.
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Terminal, prelude::*};
use roster_engine::RosterPort;
use tokio::{
    signal,
    time::{self, MissedTickBehavior},
};
use tracing::{info, warn};

use crate::app::{App, AppOptions, Effect, Msg};
use crate::cmd;
use crate::ui::components::component::Component;
use crate::ui::main_component::MainView;

const TICK_INTERVAL: Duration = Duration::from_secs(30);

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => main_view.handle_key_events(app, key_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        _ => Vec::new(),
    }
}

fn process_effects(app: &mut App, effects: Vec<Effect>) {
    if effects.is_empty() {
        return;
    }
    let commands = cmd::from_effects(app, effects);
    cmd::run_cmds(app, commands);
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event
/// loop, and restores the terminal on exit.
pub async fn run_app(options: AppOptions) -> Result<()> {
    let mut app = App::new(options);
    let mut main_view = MainView::new();
    let mut terminal = setup_terminal()?;
    let mut events = EventStream::new();

    let mut ticker = time::interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    if let Ok((width, height)) = crossterm::terminal::size() {
        let _ = app.update(&Msg::Resize(width, height));
    }
    info!("roster TUI started");
    let outcome = event_loop(&mut terminal, &mut app, &mut main_view, &mut events, &mut ticker).await;

    cleanup_terminal(&mut terminal)?;
    info!(records = app.roster.len(), "roster TUI stopped");
    outcome
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    main_view: &mut MainView,
    events: &mut EventStream,
    ticker: &mut time::Interval,
) -> Result<()> {
    render(terminal, app, main_view)?;
    while !app.should_quit {
        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let effects = handle_input_event(app, main_view, event);
                        process_effects(app, effects);
                    }
                    Some(Err(e)) => {
                        warn!("Failed to read event: {}", e);
                        break;
                    }
                    // Input stream closed; shut down cleanly.
                    None => break,
                }
            }

            _ = ticker.tick() => {
                let effects = main_view.handle_message(app, Msg::Tick);
                process_effects(app, effects);
            }

            _ = signal::ctrl_c() => { break; }
        }

        if !app.should_quit {
            render(terminal, app, main_view)?;
        }
    }
    if !app.roster.is_empty() {
        warn!(records = app.roster.len(), "session ended; in-memory roster discarded");
    }
    Ok(())
}
