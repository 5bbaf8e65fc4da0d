use chrono::Utc;
use clap::Parser;
use color_eyre::eyre::Result;
use course_recommender_tui::{
    app::{update, AppState},
    client::{complete, HttpApiClient},
    config::{Cli, Config},
    event::AppEvent,
    logging,
    view::render,
};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;

fn main() -> Result<()> {
    // Install color-eyre panic handler for better error messages
    color_eyre::install()?;

    let config = Config::from_cli(Cli::parse())?;
    logging::init(&config)?;
    tracing::info!(base_url = %config.base_url, "starting");

    let client = HttpApiClient::new()?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut state = AppState::with_config(&config);

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut state, &client, &runtime);

    // Terminal cleanup (always execute even if event loop errored)
    let cleanup = restore_terminal(&mut terminal);

    tracing::info!("exiting");
    combine_exit(result, cleanup)
}

/// Run every restore step even when an earlier one fails; report the first failure.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    raw.and(screen).and(cursor)?;
    Ok(())
}

/// The event loop's error wins over a cleanup error, which is logged instead.
fn combine_exit(result: Result<()>, cleanup: Result<()>) -> Result<()> {
    match (result, cleanup) {
        (Err(e), Err(cleanup_err)) => {
            tracing::warn!(error = %cleanup_err, "terminal restore failed");
            Err(e)
        }
        (result, cleanup) => result.and(cleanup),
    }
}

/// Main event loop following Elm Architecture.
/// The only side effect is the pending request, executed synchronously:
/// the screen shows "Submitting…" and input waits until it completes.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    state: &mut AppState,
    client: &HttpApiClient,
    runtime: &Runtime,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            render(state, frame);
        })?;

        if let Some(request) = state.pending.clone() {
            let event = runtime.block_on(complete(client, &request));
            *state = update(std::mem::take(state), event);
            continue;
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    *state = update(std::mem::take(state), AppEvent::Key(key));
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            *state = update(std::mem::take(state), AppEvent::Tick(Utc::now()));
            last_tick = Instant::now();
        }

        if state.meta.should_quit {
            break;
        }
    }

    Ok(())
}
