//! Worker thread owning the tokio runtime. Every command runs as its own task, so several
//! requests may be in flight at once; completions go back to the UI thread as [`UiEvent`]s.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use maze_core::RemoteGateway;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    gateway: RemoteGateway,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.send(UiEvent::BackendFailed(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                tracing::debug!(command = cmd.name(), "backend: command received");
                let gateway = gateway.clone();
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let event = run_command(&gateway, cmd).await;
                    if ui_tx.send(event).is_err() {
                        tracing::debug!("backend: ui closed before completion was delivered");
                    }
                });
            }
            tracing::info!("backend: command queue closed, worker exiting");
        });
    })
}

pub async fn run_command(gateway: &RemoteGateway, cmd: BackendCommand) -> UiEvent {
    match cmd {
        BackendCommand::LoadMazes => UiEvent::MazesLoaded(gateway.list_mazes().await),
        BackendCommand::FetchMaze { maze_id } => UiEvent::MazeFetched {
            maze_id,
            result: gateway.fetch_maze(maze_id).await,
        },
        BackendCommand::Submit { slot, request } => UiEvent::Submitted {
            slot,
            result: gateway.submit_and_reload(&request).await,
        },
        BackendCommand::Solve { ticket } => {
            let result = gateway.fetch_solution(ticket.maze_id, ticket.kind).await;
            UiEvent::Solved { ticket, result }
        }
    }
}

#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod tests;
