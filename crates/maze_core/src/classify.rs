use shared::domain::PointId;

use crate::model::{MazeModel, PointSet};

/// Display category of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellCategory {
    /// Raw editing mode, the cell is clickable.
    Input,
    Entrance,
    Path,
    Wall,
    Empty,
}

impl CellCategory {
    pub fn is_clickable(self) -> bool {
        self == CellCategory::Input
    }
}

/// First match wins: unsubmitted, entrance, active path, wall, empty.
/// Entrance, path and wall membership may overlap, so the order is part of the contract.
pub fn classify(point: &PointId, model: &MazeModel, active_path: Option<&PointSet>) -> CellCategory {
    if model.maze_id().is_none() {
        return CellCategory::Input;
    }
    if model.entrance() == Some(point) {
        return CellCategory::Entrance;
    }
    if active_path.is_some_and(|path| path.contains(point)) {
        return CellCategory::Path;
    }
    if model.is_wall(point) {
        return CellCategory::Wall;
    }
    CellCategory::Empty
}

#[cfg(test)]
#[path = "tests/classify_tests.rs"]
mod tests;
