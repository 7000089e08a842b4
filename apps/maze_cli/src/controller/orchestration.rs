//! Command orchestration helpers from UI actions to the backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd`; on failure returns the command with a message for the user.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), (BackendCommand, String)> {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(cmd)) => {
            Err((cmd, "Request queue is full; please retry".to_string()))
        }
        Err(TrySendError::Disconnected(cmd)) => Err((
            cmd,
            "Backend request worker is not running; restart the editor".to_string(),
        )),
    }
}
