use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use tensorwalk::app::App;
use tensorwalk::cli::{parse_args, run_cli_command, CliCommand, USAGE};
use tensorwalk::config::TutorConfig;
use tensorwalk::terminal::{install_panic_hook, TerminalSession, Tui};
use tensorwalk::{logging, ui};

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(err) if err.is_usage() => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
        Err(err) => return Err(err.into()),
    };
    if let Some(result) = run_cli_command(&command) {
        return result;
    }
    let CliCommand::Run(options) = command else {
        return Ok(());
    };

    // Flags beat the environment.
    let mut config = TutorConfig::from_env();
    if let Some(start) = options.start {
        config = config.with_start(start);
    }
    if options.flat {
        config = config.with_sidebar(false);
    }

    // Logging goes to a file; the terminal belongs to the UI. Only an
    // explicitly configured log file that can't be opened stops startup.
    let log_path = logging::init(&config)?;

    // Resolve the start step before touching the terminal so a bad
    // `--start` prints a plain error.
    let mut app = App::new(&config)?;

    install_panic_hook();
    let runtime = tokio::runtime::Runtime::new()?;
    let mut session = TerminalSession::start()?;
    let result = runtime.block_on(run(session.terminal(), &mut app, config.tick_rate));
    session.restore();

    info!(
        step = app.nav.current_index(),
        visited = app.nav.state().visited().len(),
        log = ?log_path,
        "tutorial session ended"
    );
    result
}

async fn run(terminal: &mut Tui, app: &mut App, tick_rate: Duration) -> Result<()> {
    let mut events = EventStream::new();
    let mut nav_updates = app.nav.subscribe();
    let mut ticker = time::interval(tick_rate);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_tick = Instant::now();

    loop {
        if app.needs_redraw {
            terminal.draw(|frame| ui::render(frame, &mut *app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                let now = Instant::now();
                app.tick(now - last_tick);
                last_tick = now;
            }

            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind != KeyEventKind::Release => {
                    app.handle_key(key);
                }
                Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                Some(Ok(Event::Resize(width, height))) => {
                    debug!(width, height, "terminal resized");
                    app.mark_dirty();
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    warn!(error = %err, "failed to read terminal event");
                    return Err(err.into());
                }
                None => return Ok(()),
            },

            changed = nav_updates.changed() => {
                if changed.is_ok() {
                    let state = nav_updates.borrow_and_update().clone();
                    debug!(
                        snapshot = %serde_json::to_string(&state).unwrap_or_default(),
                        "navigation changed"
                    );
                    app.mark_dirty();
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
