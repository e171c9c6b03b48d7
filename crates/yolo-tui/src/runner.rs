//! Main TUI runner - entry point and event loop

use std::io::{self, Write};
use std::sync::mpsc as std_mpsc;
use std::sync::Arc;

use tokio::sync::mpsc;
use yolo_app::actions::ActionContext;
use yolo_app::config::Settings;
use yolo_app::message::Message;
use yolo_app::state::AppState;
use yolo_app::{process, signals};
use yolo_core::prelude::*;
use yolo_platform::{ClipboardWriter, SystemClipboard};

use super::{event, render, terminal};

/// Run the payment screen until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    info!(
        "Loaded settings: start_frozen={} start_route={} clipboard={:?}",
        settings.behavior.start_frozen, settings.behavior.start_route, settings.clipboard.backend
    );

    // OSC 52 sequences come back here and are written between frames
    let (terminal_tx, terminal_rx) = std_mpsc::channel::<String>();

    // Detect before the TUI takes over stdout
    let clipboard: Arc<dyn ClipboardWriter> = Arc::new(
        SystemClipboard::detect(settings.clipboard.backend).with_terminal_output(terminal_tx),
    );

    let mut state = AppState::new(settings);

    // Initialize terminal
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    // Unified message channel for signals and background tasks
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    let mut ctx = ActionContext::new(msg_tx, clipboard);

    let result = run_loop(&mut term, &mut state, msg_rx, &terminal_rx, &mut ctx);

    ctx.feedback_timer.cancel();

    // Restore terminal
    if let Err(e) = ratatui::try_restore() {
        warn!("{}", Error::TerminalRestore(e.to_string()));
    }

    info!("YOLO Pay exiting");
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    terminal_rx: &std_mpsc::Receiver<String>,
    ctx: &mut ActionContext,
) -> Result<()> {
    while !state.should_quit() {
        // Process background messages (clipboard results, timers, signals)
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, ctx);
        }

        // Render
        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        // Clipboard escape sequences go out between frames
        write_terminal_output(terminal.backend_mut(), terminal_rx)
            .context("Failed to write clipboard sequence")?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process::process_message(state, message, ctx);
        }
    }

    Ok(())
}

/// Write every queued sequence to `out`, returning how many were written
fn write_terminal_output<W: Write>(
    out: &mut W,
    terminal_rx: &std_mpsc::Receiver<String>,
) -> io::Result<usize> {
    let mut written = 0;
    for seq in terminal_rx.try_iter() {
        out.write_all(seq.as_bytes())?;
        written += 1;
    }
    if written > 0 {
        out.flush()?;
        debug!(written, "Wrote clipboard sequences to terminal");
    }
    Ok(written)
}
