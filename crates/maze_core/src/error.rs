use std::fmt;

use shared::{domain::PathKind, error::ParseError};
use thiserror::Error;

/// User-visible operation an error is reported against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Submit,
    Solve(PathKind),
    ClearPath,
    LoadMazes,
    FetchMaze,
    Edit,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => f.write_str("create maze"),
            Operation::Submit => f.write_str("submit maze"),
            Operation::Solve(kind) => write!(f, "solve {kind} path for maze"),
            Operation::ClearPath => f.write_str("clear path"),
            Operation::LoadMazes => f.write_str("load mazes"),
            Operation::FetchMaze => f.write_str("fetch maze"),
            Operation::Edit => f.write_str("edit maze"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error("maze grid size is not defined")]
    NotConfigured,
    #[error("maze entrance is not defined")]
    MissingEntrance,
    #[error("maze is not submitted yet")]
    NotSubmitted,
    #[error("maze grid size is already defined")]
    AlreadyConfigured,
    #[error("maze is already submitted")]
    AlreadySubmitted,
    #[error("a path is already shown")]
    PathShown,
    #[error("no maze slot {0}")]
    UnknownSlot(usize),
    #[error("failure to {operation}: status {status}")]
    RemoteFailure { operation: Operation, status: u16 },
    #[error("failure to {operation}: {message}")]
    Transport { operation: Operation, message: String },
    #[error("{operation} rejected: {message}")]
    RemoteRejected { operation: Operation, message: String },
    #[error("path solution is not defined")]
    MalformedSolution,
}

impl From<ParseError> for MazeError {
    fn from(value: ParseError) -> Self {
        MazeError::InvalidGeometry(value.to_string())
    }
}

impl MazeError {
    /// Text of the blocking alert shown to the user.
    pub fn alert_text(&self) -> String {
        match self {
            MazeError::InvalidGeometry(_) => {
                "Grid Size does not have the proper format such as 10x10".to_string()
            }
            MazeError::NotConfigured => "Maze grid size or wallSet are not defined".to_string(),
            MazeError::MissingEntrance => {
                "Maze entrance is not defined.\n\nHold the e key while selecting a location"
                    .to_string()
            }
            MazeError::NotSubmitted => "Maze must be submitted before it can be solved".to_string(),
            MazeError::AlreadyConfigured => "Maze grid size is already defined".to_string(),
            MazeError::AlreadySubmitted => "Maze is already submitted".to_string(),
            MazeError::PathShown => "Clear the displayed path before solving again".to_string(),
            MazeError::UnknownSlot(slot) => format!("There is no maze in slot {slot}"),
            MazeError::RemoteFailure { operation, status } => {
                format!("Failure to {operation}. Error = {status}")
            }
            MazeError::Transport { operation, message } => {
                format!("Failure to {operation}. Error = {message}")
            }
            MazeError::RemoteRejected { operation, message } => {
                let mut verb = operation.to_string();
                if let Some(first) = verb.get_mut(0..1) {
                    first.make_ascii_uppercase();
                }
                format!("{verb} failed :\n\n{message}")
            }
            MazeError::MalformedSolution => "Path solution is not defined".to_string(),
        }
    }

    /// True for errors raised before any request leaves the client.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            MazeError::InvalidGeometry(_)
                | MazeError::NotConfigured
                | MazeError::MissingEntrance
                | MazeError::NotSubmitted
                | MazeError::AlreadyConfigured
                | MazeError::AlreadySubmitted
                | MazeError::PathShown
                | MazeError::UnknownSlot(_)
        )
    }
}

pub type MazeResult<T> = Result<T, MazeError>;
