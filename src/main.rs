use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{error, info};

use recipients::app::{
    self, config::AppConfig, events::AppEvent, report::MeasureReport, subscription::Subscription,
    watcher, App, Args,
};
use recipients::logging;
use recipients::recipients::source::{collect_pinned, collect_recipients};
use recipients::ui;

const TICK_RATE: Duration = Duration::from_millis(16);

/// Restores the terminal however the event loop exits.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<(Self, Terminal<CrosstermBackend<Stdout>>)> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok((Self, terminal))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    human_panic::setup_panic!();

    let args = Args::parse();

    if args.generate_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    let recipients = collect_recipients(&args.recipients, args.file.as_deref())?;

    let _log_guard = logging::init_logging(AppConfig::get_config_dir(), "info")
        .context("initializing log file")?;

    let mut config = AppConfig::load();
    config.apply_args(&args);

    // Headless: print the decision and leave the terminal alone
    if let Some(width) = args.measure {
        let report = MeasureReport::measure(recipients, width, config.reserve);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    info!(count = recipients.len(), "starting");

    let mut app = App::new(recipients.clone(), &config);
    let (cols, rows) = crossterm::terminal::size().context("reading terminal size")?;

    let (guard, mut terminal) = TerminalGuard::enter()?;
    let (tx, mut rx) = mpsc::channel(100);

    // 1. Terminal input (keys, mouse, resize)
    let tx_input = tx.clone();
    let input = Subscription::spawn("input", async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if tx_input.send(AppEvent::Input(event)).await.is_err() {
                break;
            }
        }
    });

    // 2. Tick (flushes debounced resizes)
    let tx_tick = tx.clone();
    let tick = Subscription::spawn("tick", async move {
        let mut interval = tokio::time::interval(TICK_RATE);
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).await.is_err() {
                break;
            }
        }
    });

    // 3. Recipients file watcher
    let file_watch = args.file.clone().map(|path| {
        let pinned = collect_pinned(&args.recipients);
        Subscription::spawn(
            "recipients-file",
            watcher::watch_recipients(path, pinned, recipients, tx.clone(), watcher::POLL_INTERVAL),
        )
    });
    drop(tx);

    app.mount(cols, rows);

    let result = run(&mut terminal, &mut app, &mut rx).await;

    app.unmount();
    drop(file_watch);
    drop(tick);
    drop(input);
    drop(guard);
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        error!(error = %e, "event loop failed");
    }
    info!("exiting");
    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    rx: &mut mpsc::Receiver<AppEvent>,
) -> Result<()> {
    let mut dirty = true;

    while app.is_running {
        if dirty {
            terminal.draw(|f| ui::ui(f, app))?;
            dirty = false;
        }

        let Some(event) = rx.recv().await else {
            break;
        };

        match event {
            AppEvent::Input(event) => {
                app::inputs::handle_event(event, app);
                dirty = true;
            }
            AppEvent::RecipientsUpdate(list) => {
                app.set_recipients(list);
                dirty = true;
            }
            AppEvent::Tick => {
                if app.resize.is_pending() {
                    app.on_tick(Instant::now());
                    dirty = !app.resize.is_pending();
                }
            }
        }
    }

    Ok(())
}
