use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    thread,
};

mod app;
mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossbeam_channel::{bounded, select, Receiver};
use maze_core::RemoteGateway;
use tracing_subscriber::EnvFilter;

use crate::{
    app::{MazeApp, Output},
    config::{load_settings, parse_default_grid, parse_server_url, parse_user_token},
};

#[derive(Parser, Debug)]
#[command(about = "Draw mazes, submit them to the maze service, and overlay their solutions")]
struct Args {
    #[arg(long, default_value = config::DEFAULT_SETTINGS_FILE)]
    config: PathBuf,
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long)]
    user_token: Option<String>,
    #[arg(long)]
    user_id: Option<String>,
    #[arg(long)]
    grid_size: Option<String>,
}

fn spawn_stdin_reader() -> Receiver<String> {
    let (line_tx, line_rx) = bounded::<String>(64);
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });
    line_rx
}

/// Prints outputs; returns false once the user asked to quit.
fn emit(outputs: Vec<Output>) -> bool {
    let mut stdout = io::stdout().lock();
    let mut keep_running = true;
    for output in outputs {
        let _ = match output {
            Output::Draw(text) => writeln!(stdout, "{text}\n"),
            Output::Info(text) => writeln!(stdout, "{text}"),
            Output::Alert(text) => writeln!(stdout, "!! {}", text.replace('\n', "\n!! ")),
            Output::Quit => {
                keep_running = false;
                Ok(())
            }
        };
    }
    let _ = stdout.flush();
    keep_running
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(&args.config);
    if let Some(v) = args.server_url {
        settings.server_url = v;
    }
    if let Some(v) = args.user_token {
        settings.user_token = Some(v);
    }
    if let Some(v) = args.user_id {
        settings.user_id = Some(v);
    }
    if let Some(v) = args.grid_size {
        settings.default_grid_size = v;
    }

    let server_url = parse_server_url(&settings.server_url)?;
    let user_token = parse_user_token(settings.user_token.as_deref())?;
    let default_grid = parse_default_grid(&settings.default_grid_size)?;
    if user_token.is_none() {
        tracing::warn!("no user token configured; the server will likely refuse requests");
    }
    tracing::info!(server_url = %server_url, "maze editor starting");

    let (cmd_tx, cmd_rx) = bounded(256);
    let (ui_tx, ui_rx) = bounded(1024);
    let gateway = RemoteGateway::http(server_url, user_token);
    let _backend = backend_bridge::runtime::launch(cmd_rx, ui_tx, gateway);

    let mut app = MazeApp::new(cmd_tx, settings.user_id.clone(), default_grid);
    let lines = spawn_stdin_reader();
    emit(vec![Output::Info("type help for commands".to_string())]);
    if !emit(app.start()) {
        return Ok(());
    }

    loop {
        let outputs = select! {
            recv(lines) -> line => match line {
                Ok(line) => app.handle_line(&line),
                Err(_) => break,
            },
            recv(ui_rx) -> event => match event {
                Ok(event) => app.handle_event(event),
                Err(_) => break,
            },
        };
        if !emit(outputs) {
            break;
        }
    }

    tracing::info!("maze editor exiting");
    Ok(())
}
