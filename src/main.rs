use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;
use tracing::info;

use reelscope::adapters::ReqwestHttpClient;
use reelscope::app::{App, AppMessage};
use reelscope::cli::{CliArgs, VERSION};
use reelscope::error::UiError;
use reelscope::headless::{headless_state, render_json};
use reelscope::input::CommandRegistry;
use reelscope::startup::{init_logging, DashboardConfig, LogTarget};
use reelscope::terminal::{setup_panic_hook, TerminalManager};
use reelscope::ui;

/// Event loop tick; drives the spinner, cursor blink and toast expiry.
const TICK: Duration = Duration::from_millis(16);

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let config = args.apply(DashboardConfig::from_env());

    if args.json {
        init_logging(LogTarget::Stderr)?;
        return run_headless(config).await;
    }

    init_logging(LogTarget::default_file())?;
    info!(version = VERSION, source = %config.data, "Starting reelscope");

    // Must come after color_eyre::install so the hook wraps its reporter
    setup_panic_hook();

    let mut term_manager = TerminalManager::new()?;
    let mut app = App::new(config);
    app.start_loading(Arc::new(ReqwestHttpClient::new()));

    let result = run_app(term_manager.terminal(), &mut app).await;

    term_manager.restore()?;
    result
}

async fn run_headless(config: DashboardConfig) -> Result<()> {
    let client = ReqwestHttpClient::new();
    let state = headless_state(&config, &client).await;
    println!("{}", render_json(&state)?);
    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let registry = CommandRegistry::new();
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal
                .draw(|f| ui::render(f, &mut *app))
                .map_err(|e| UiError::RenderFailed {
                    message: e.to_string(),
                })?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(&registry, key);
                    }
                    Some(Ok(Event::Mouse(mouse_event))) => {
                        app.handle_mouse(mouse_event);
                    }
                    Some(Ok(Event::Paste(text))) => {
                        app.handle_paste(&text);
                    }
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        return Err(UiError::InputError {
                            message: e.to_string(),
                        }
                        .into())
                    }
                    // Input stream closed
                    None => return Ok(()),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            info!("Quitting");
            return Ok(());
        }
    }
}
