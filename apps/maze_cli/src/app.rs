//! UI-thread state of the editor. All board mutation happens here, one input line or one
//! backend completion at a time.

use crossbeam_channel::Sender;
use maze_core::{
    geometry, MazeError, Operation, SessionBoard, SolveOutcome, NEW_MAZE_SLOT,
};
use shared::domain::{GridSize, PathKind};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        events::UiEvent,
        input::{parse_command, UserCommand, HELP},
        orchestration::dispatch_backend_command,
    },
    ui::ViewTable,
};

/// Something for the host to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Draw(String),
    /// Blocking user-facing failure notice.
    Alert(String),
    Info(String),
    Quit,
}

pub struct MazeApp {
    board: SessionBoard,
    views: ViewTable,
    cmd_tx: Sender<BackendCommand>,
    default_grid: GridSize,
    /// Slot waiting for a grid size answer.
    pending_create: Option<usize>,
}

impl MazeApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        user_id: Option<String>,
        default_grid: GridSize,
    ) -> Self {
        let board = match user_id {
            Some(user_id) => SessionBoard::new().with_user_id(user_id),
            None => SessionBoard::new(),
        };
        Self {
            board,
            views: ViewTable::new(),
            cmd_tx,
            default_grid,
            pending_create: None,
        }
    }

    /// Initial page load: ask the server for the maze list.
    pub fn start(&mut self) -> Vec<Output> {
        let mut out = Vec::new();
        self.dispatch(BackendCommand::LoadMazes, &mut out);
        out
    }

    pub fn handle_line(&mut self, line: &str) -> Vec<Output> {
        let mut out = Vec::new();

        if let Some(slot) = self.pending_create.take() {
            let answer = line.trim();
            let size = if answer.is_empty() {
                self.default_grid.to_string()
            } else {
                answer.to_string()
            };
            self.create(slot, &size, &mut out);
            return out;
        }

        match parse_command(line) {
            Ok(command) => self.apply(command, &mut out),
            Err(message) => out.push(Output::Info(message)),
        }
        out
    }

    fn apply(&mut self, command: UserCommand, out: &mut Vec<Output>) {
        match command {
            UserCommand::Show => {
                self.views.reset();
                self.redraw_all(out);
            }
            UserCommand::Create { slot, size: Some(size) } => self.create(slot, &size, out),
            UserCommand::Create { slot, size: None } => {
                let configured = self.board.slot(slot).map(|model| model.grid_size().is_some());
                match configured {
                    Ok(false) => {}
                    Ok(true) => {
                        return self.alert(Operation::Create, MazeError::AlreadyConfigured, out)
                    }
                    Err(err) => return self.alert(Operation::Create, err, out),
                }
                self.pending_create = Some(slot);
                out.push(Output::Info(format!(
                    "Enter the grid size for the maze, such as 5x5 [{}]",
                    self.default_grid
                )));
            }
            UserCommand::Click { slot, point } => self.click(slot, &point, out),
            UserCommand::HoldEntrance => {
                self.board.hold_entrance_key();
                out.push(Output::Info("entrance mode: next click sets the entrance".into()));
            }
            UserCommand::ReleaseEntrance => self.board.release_entrance_key(),
            UserCommand::Blur => self.board.on_blur(),
            UserCommand::Submit { slot } => self.submit(slot, out),
            UserCommand::Solve { slot, kind } => self.solve(slot, kind, out),
            UserCommand::ClearPath { slot } => match self.board.clear_path(slot) {
                Ok(()) => self.redraw(slot, out),
                Err(err) => self.alert(Operation::ClearPath, err, out),
            },
            UserCommand::Reload => self.dispatch(BackendCommand::LoadMazes, out),
            UserCommand::Refresh { maze_id } => {
                self.dispatch(BackendCommand::FetchMaze { maze_id }, out)
            }
            UserCommand::Help => out.push(Output::Info(HELP.to_string())),
            UserCommand::Quit => out.push(Output::Quit),
        }
    }

    fn create(&mut self, slot: usize, size: &str, out: &mut Vec<Output>) {
        match self.board.create(slot, size) {
            Ok(_) => self.redraw(slot, out),
            Err(err) => self.alert(Operation::Create, err, out),
        }
    }

    fn click(&mut self, slot: usize, raw_point: &str, out: &mut Vec<Output>) {
        let result = geometry::canonical_point(raw_point)
            .and_then(|point| self.board.click(slot, &point));
        match result {
            Ok(_) => self.redraw(slot, out),
            Err(err) => {
                // A failed entrance click still ends entrance mode.
                self.board.release_entrance_key();
                self.alert(Operation::Edit, err, out);
            }
        }
    }

    fn submit(&mut self, slot: usize, out: &mut Vec<Output>) {
        match self.board.begin_submit(slot) {
            Ok(request) => {
                out.push(Output::Info(format!("submitting maze in slot {slot}...")));
                self.dispatch(BackendCommand::Submit { slot, request }, out);
            }
            Err(err) => self.alert(Operation::Submit, err, out),
        }
    }

    fn solve(&mut self, slot: usize, kind: PathKind, out: &mut Vec<Output>) {
        let ticket = match self.board.begin_solve(slot, kind) {
            Ok(ticket) => ticket,
            Err(err) => {
                self.alert(Operation::Solve(kind), err, out);
                return;
            }
        };
        self.redraw(slot, out);
        if let Err((cmd, message)) =
            dispatch_backend_command(&self.cmd_tx, BackendCommand::Solve { ticket })
        {
            if let BackendCommand::Solve { ticket } = cmd {
                let failure = Err(MazeError::Transport {
                    operation: Operation::Solve(kind),
                    message: message.clone(),
                });
                let _ = self.board.finish_solve(ticket, failure);
                self.redraw(slot, out);
            }
            out.push(Output::Alert(message));
        }
    }

    fn dispatch(&mut self, cmd: BackendCommand, out: &mut Vec<Output>) {
        if let Err((_, message)) = dispatch_backend_command(&self.cmd_tx, cmd) {
            out.push(Output::Alert(message));
        }
    }

    pub fn handle_event(&mut self, event: UiEvent) -> Vec<Output> {
        let mut out = Vec::new();
        match event {
            UiEvent::MazesLoaded(Ok(records)) => {
                self.cancel_pending_create(&mut out);
                self.board.replace_all(records);
                self.views.reset();
                self.redraw_all(&mut out);
            }
            UiEvent::MazesLoaded(Err(err)) => self.alert(Operation::LoadMazes, err, &mut out),
            UiEvent::MazeFetched { result: Ok(record), .. } => {
                let slot = self.board.replace_slot(record);
                self.redraw(slot, &mut out);
            }
            UiEvent::MazeFetched { maze_id, result: Err(err) } => {
                tracing::warn!(maze_id = maze_id.0, "fetch maze failed: {err}");
                self.alert(Operation::FetchMaze, err, &mut out);
            }
            UiEvent::Submitted { slot, result: Ok((maze_id, records)) } => {
                tracing::info!(slot, maze_id = ?maze_id.map(|id| id.0), "maze submitted");
                self.cancel_pending_create(&mut out);
                self.board.replace_all(records);
                self.views.reset();
                self.redraw_all(&mut out);
                if let Some(maze_id) = maze_id {
                    out.push(Output::Info(format!("maze #{maze_id} created")));
                }
            }
            UiEvent::Submitted { result: Err(err), .. } => {
                self.alert(Operation::Submit, err, &mut out)
            }
            UiEvent::Solved { ticket, result } => {
                let slot = ticket.slot;
                let kind = ticket.kind;
                match self.board.finish_solve(ticket, result) {
                    Ok(SolveOutcome::Applied) => self.redraw(slot, &mut out),
                    Ok(SolveOutcome::Stale) => {}
                    Err(err) => {
                        self.redraw(slot, &mut out);
                        self.alert(Operation::Solve(kind), err, &mut out);
                    }
                }
            }
            UiEvent::BackendFailed(message) => out.push(Output::Alert(message)),
        }
        out
    }

    /// Slot numbers change when the board is rebuilt, so an open size prompt is dropped.
    fn cancel_pending_create(&mut self, out: &mut Vec<Output>) {
        if let Some(slot) = self.pending_create.take() {
            out.push(Output::Info(format!(
                "maze list reloaded; create for slot {slot} cancelled"
            )));
        }
    }

    fn redraw(&mut self, slot: usize, out: &mut Vec<Output>) {
        if let Ok(view) = self.board.view(slot) {
            if let Some(text) = self.views.redraw(slot, &view) {
                out.push(Output::Draw(text));
            }
        }
    }

    fn redraw_all(&mut self, out: &mut Vec<Output>) {
        if let Some(header) = self.board.header() {
            out.push(Output::Info(header));
        }
        for slot in NEW_MAZE_SLOT..self.board.len() {
            self.redraw(slot, out);
        }
    }

    fn alert(&mut self, operation: Operation, err: MazeError, out: &mut Vec<Output>) {
        tracing::warn!(%operation, "operation failed: {err}");
        out.push(Output::Alert(err.alert_text()));
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
