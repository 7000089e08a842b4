//! Projection of a [`MazeModel`] into a grid of classified cells plus the offered actions.
//!
//! Rendering is always a full recompute. Nothing here is cached between calls.

use std::fmt;

use shared::domain::{GridSize, MazeId, PathKind, PointId};

use crate::{
    classify::{classify, CellCategory},
    geometry,
    model::MazeModel,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Submit,
    ClearPath,
    Solve(PathKind),
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::Create => "CREATE",
            Action::Submit => "SUBMIT",
            Action::ClearPath => "CLEAR PATH",
            Action::Solve(PathKind::Min) => "SOLVE MIN PATH",
            Action::Solve(PathKind::Max) => "SOLVE MAX PATH",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw membership of a cell, what an `Input` cell shows while the maze is being drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellMarks {
    pub wall: bool,
    pub entrance: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub col: u32,
    pub row: u32,
    pub point: PointId,
    pub category: CellCategory,
    pub marks: CellMarks,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeView {
    pub maze_id: Option<MazeId>,
    pub grid_size: Option<GridSize>,
    /// Row-major.
    pub cells: Vec<Cell>,
    pub actions: Vec<Action>,
}

impl MazeView {
    pub fn cell(&self, point: &PointId) -> Option<&Cell> {
        self.cells.iter().find(|cell| &cell.point == point)
    }

    pub fn category_of(&self, point: &PointId) -> Option<CellCategory> {
        self.cell(point).map(|cell| cell.category)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        let width = self
            .grid_size
            .map(|grid| grid.columns.min(geometry::MAX_COLUMNS) as usize)
            .unwrap_or(0)
            .max(1);
        self.cells.chunks(width)
    }
}

/// Decision table for the action list, first matching row wins.
pub fn actions_for(has_grid: bool, has_maze_id: bool, overlay_active: bool) -> Vec<Action> {
    if !has_grid {
        return vec![Action::Create];
    }
    if !has_maze_id {
        return vec![Action::Submit];
    }
    if overlay_active {
        return vec![Action::ClearPath];
    }
    vec![Action::Solve(PathKind::Min), Action::Solve(PathKind::Max)]
}

pub fn render(model: &MazeModel) -> MazeView {
    let active_path = model.active_path_set();
    let cells = model
        .grid_size()
        .map(|grid| {
            geometry::grid_points(grid)
                .map(|(col, row, point)| {
                    let category = classify(&point, model, active_path);
                    let marks = CellMarks {
                        wall: model.is_wall(&point),
                        entrance: model.entrance() == Some(&point),
                    };
                    Cell {
                        col,
                        row,
                        point,
                        category,
                        marks,
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    MazeView {
        maze_id: model.maze_id(),
        grid_size: model.grid_size(),
        cells,
        actions: actions_for(
            model.grid_size().is_some(),
            model.maze_id().is_some(),
            model.has_overlay(),
        ),
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
