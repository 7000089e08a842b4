//! Remote requests queued from the UI thread to the backend worker.

use maze_core::SolveTicket;
use shared::{domain::MazeId, protocol::PostMazeRequest};

#[derive(Debug, Clone)]
pub enum BackendCommand {
    LoadMazes,
    FetchMaze { maze_id: MazeId },
    Submit { slot: usize, request: PostMazeRequest },
    Solve { ticket: SolveTicket },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadMazes => "load_mazes",
            BackendCommand::FetchMaze { .. } => "fetch_maze",
            BackendCommand::Submit { .. } => "submit",
            BackendCommand::Solve { .. } => "solve",
        }
    }
}
