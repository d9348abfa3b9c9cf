//! Terminal UI for the replay viewer.

mod app;
mod board;
mod panel;
mod ui;

pub use app::{App, Flow};
pub use ui::draw;

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use strictly_replay::ReplayViewer;
use tokio::time::Instant;
use tracing::{error, info, instrument};

use crate::config::ViewerConfig;

/// Runs the interactive viewer until the user quits.
#[instrument(skip_all)]
pub async fn run_viewer(viewer: ReplayViewer, config: &ViewerConfig) -> Result<()> {
    info!("Starting replay viewer");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(viewer, config);
    let res = event_loop(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Viewer loop error");
    }
    info!("Replay viewer exited");
    res
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
            && key.kind != KeyEventKind::Release
            && app.handle_key(key, Instant::now()) == Flow::Quit
        {
            return Ok(());
        }

        app.on_clock(Instant::now());
        tokio::task::yield_now().await;
    }
}
