//! Completions delivered from the backend worker to the UI thread.

use maze_core::{MazeResult, SolveTicket};
use shared::{
    domain::{MazeId, PointId},
    protocol::MazeRecord,
};

#[derive(Debug)]
pub enum UiEvent {
    MazesLoaded(MazeResult<Vec<MazeRecord>>),
    MazeFetched {
        maze_id: MazeId,
        result: MazeResult<MazeRecord>,
    },
    Submitted {
        slot: usize,
        result: MazeResult<(Option<MazeId>, Vec<MazeRecord>)>,
    },
    Solved {
        ticket: SolveTicket,
        result: MazeResult<Vec<PointId>>,
    },
    BackendFailed(String),
}
