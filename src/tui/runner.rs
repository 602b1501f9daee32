//! Terminal lifecycle and the event loop.
//!
//! Single-threaded: key, mouse and timer events are multiplexed with
//! `tokio::select!` and each handler runs to completion before the next
//! frame is drawn.

use std::io::{self, Stdout};

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures_util::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use super::app::ViewerApp;
use super::{input, layout, mouse};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Take over the terminal, run until quit, restore the terminal.
pub async fn run(app: &mut ViewerApp) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, app).await;

    // Restore even if the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    info!("viewer closed");
    result
}

async fn event_loop(terminal: &mut Term, app: &mut ViewerApp) -> anyhow::Result<()> {
    let mut events = EventStream::new();

    // The startup refresh already happened; first tick is one period out.
    let period = app.ticker.interval();
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        terminal.draw(|f| layout::draw(f, app))?;
        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Some(Ok(Event::Mouse(event))) => mouse::handle_mouse(app, event),
                Some(Ok(Event::Resize(width, height))) => {
                    debug!(width, height, "terminal resized");
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(()),
            },
            _ = ticker.tick() => {
                app.ticker.refresh();
                debug!(label = app.ticker.label(), "commit info refreshed");
            }
        }
    }
}
