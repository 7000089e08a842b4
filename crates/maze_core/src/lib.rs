pub mod board;
pub mod classify;
pub mod error;
pub mod gateway;
pub mod geometry;
pub mod model;
pub mod render;

pub use board::{ClickOutcome, EditMode, SessionBoard, SolveOutcome, SolveTicket, NEW_MAZE_SLOT};
pub use classify::{classify, CellCategory};
pub use error::{MazeError, MazeResult, Operation};
pub use gateway::{HttpMazeApi, MazeApi, RemoteGateway};
pub use model::{MazeModel, MazeState, PathOverlay, PointSet};
pub use render::{actions_for, render, Action, Cell, CellMarks, MazeView};
