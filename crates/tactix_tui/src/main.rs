//! Terminal UI for Tactix.

mod app;
mod cli;
mod input;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::time::Duration;
use tactix_core::{Mode, Position};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::{App, AppEvent};
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so output does not fight the alternate screen.
    let log_file = std::fs::File::create(&cli.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(delay_ms = cli.delay_ms, "starting tactix");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mode = if cli.two_player {
        Mode::VsHuman
    } else {
        Mode::VsComputer
    };
    let app = App::new(mode, Duration::from_millis(cli.delay_ms), event_tx);

    let res = run_app(&mut terminal, app, &mut event_rx).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    event_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()> {
    let mut frame_area = Rect::default();

    loop {
        terminal.draw(|f| {
            frame_area = f.area();
            ui::draw(f, &app);
        })?;

        // Drain scheduled computer replies.
        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('r') => app.reset(),
                KeyCode::Char('c') => app.set_mode(Mode::VsComputer),
                KeyCode::Char('p') => app.set_mode(Mode::VsHuman),
                KeyCode::Enter | KeyCode::Char(' ') => app.human_move(app.cursor()),
                KeyCode::Char(ch) if ch.is_ascii_digit() => {
                    // Digits 1-9 map to cells left to right, top to bottom.
                    let cell = ch.to_digit(10).and_then(|d| (d as usize).checked_sub(1));
                    if let Some(pos) = cell.and_then(Position::from_index) {
                        app.human_move(pos);
                    }
                }
                code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                    app.move_cursor(code)
                }
                _ => {}
            },
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    if let Some(pos) = ui::hit_test(frame_area, mouse.column, mouse.row) {
                        app.human_move(pos);
                    }
                }
            }
            _ => {}
        }
    }
}
