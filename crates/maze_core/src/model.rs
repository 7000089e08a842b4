//! Per-maze data and the mutation rules that keep it consistent.

use std::{cell::OnceCell, collections::BTreeSet};

use shared::{
    domain::{GridSize, MazeId, PathKind, PointId},
    protocol::MazeRecord,
};

use crate::{
    error::{MazeError, MazeResult},
    geometry,
};

pub type PointSet = BTreeSet<PointId>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathOverlay {
    pub kind: PathKind,
    pub points: PointSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeState {
    /// Empty slot, only `Create` is offered.
    Unconfigured,
    /// Grid drawn locally, not yet submitted.
    Configured,
    Unsolved,
    PathShown,
}

#[derive(Debug, Clone, Default)]
pub struct MazeModel {
    grid_size: Option<GridSize>,
    maze_id: Option<MazeId>,
    initial_walls: Vec<PointId>,
    wall_set: OnceCell<PointSet>,
    entrance: Option<PointId>,
    overlay: Option<PathOverlay>,
    request_seq: u64,
}

impl MazeModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_record(record: MazeRecord) -> Self {
        Self {
            grid_size: Some(record.grid_size),
            maze_id: Some(record.maze_id),
            initial_walls: record.walls,
            wall_set: OnceCell::new(),
            entrance: record.entrance,
            overlay: None,
            request_seq: 0,
        }
    }

    pub fn grid_size(&self) -> Option<GridSize> {
        self.grid_size
    }

    pub fn maze_id(&self) -> Option<MazeId> {
        self.maze_id
    }

    pub fn entrance(&self) -> Option<&PointId> {
        self.entrance.as_ref()
    }

    /// The wall set, derived from the initial wall list on first use.
    pub fn walls(&self) -> &PointSet {
        self.wall_set
            .get_or_init(|| self.initial_walls.iter().cloned().collect())
    }

    pub fn is_wall(&self, point: &PointId) -> bool {
        self.walls().contains(point)
    }

    pub fn overlay(&self) -> Option<&PathOverlay> {
        self.overlay.as_ref()
    }

    pub fn min_path_set(&self) -> Option<&PointSet> {
        self.path_set(PathKind::Min)
    }

    pub fn max_path_set(&self) -> Option<&PointSet> {
        self.path_set(PathKind::Max)
    }

    /// Whichever overlay is currently shown.
    pub fn active_path_set(&self) -> Option<&PointSet> {
        self.overlay.as_ref().map(|overlay| &overlay.points)
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn request_seq(&self) -> u64 {
        self.request_seq
    }

    pub fn state(&self) -> MazeState {
        match (self.grid_size, self.maze_id, &self.overlay) {
            (None, _, _) => MazeState::Unconfigured,
            (Some(_), None, _) => MazeState::Configured,
            (Some(_), Some(_), None) => MazeState::Unsolved,
            (Some(_), Some(_), Some(_)) => MazeState::PathShown,
        }
    }

    pub fn set_grid_size(&mut self, columns: u32, rows: u32) -> MazeResult<()> {
        let grid = geometry::check_grid(GridSize::new(columns, rows)?)?;
        self.grid_size = Some(grid);
        Ok(())
    }

    /// Flips wall membership of `point`; returns whether it is now a wall.
    pub fn toggle_wall(&mut self, point: &PointId) -> MazeResult<bool> {
        self.ensure_configured()?;
        let mut walls = self.take_walls();
        let is_wall = if walls.remove(point) {
            false
        } else {
            walls.insert(point.clone())
        };
        self.wall_set = OnceCell::from(walls);
        Ok(is_wall)
    }

    pub fn set_entrance(&mut self, point: &PointId) -> MazeResult<()> {
        self.ensure_configured()?;
        self.entrance = Some(point.clone());
        Ok(())
    }

    pub fn clear_entrance(&mut self) -> MazeResult<()> {
        self.ensure_configured()?;
        self.entrance = None;
        Ok(())
    }

    /// Clears the entrance when `point` already holds it, otherwise moves it there.
    /// Returns whether `point` is the entrance afterwards.
    pub fn toggle_entrance(&mut self, point: &PointId) -> MazeResult<bool> {
        if self.entrance.as_ref() == Some(point) {
            self.clear_entrance()?;
            return Ok(false);
        }
        self.set_entrance(point)?;
        Ok(true)
    }

    /// Installs `points` as the `kind` overlay. An empty or absent path clears both kinds.
    pub fn set_path_overlay<I>(&mut self, kind: PathKind, points: Option<I>) -> MazeResult<()>
    where
        I: IntoIterator<Item = PointId>,
    {
        self.ensure_configured()?;
        self.overlay = None;
        let points: PointSet = points.into_iter().flatten().collect();
        if !points.is_empty() {
            self.overlay = Some(PathOverlay { kind, points });
        }
        Ok(())
    }

    pub fn clear_path_overlay(&mut self) {
        self.overlay = None;
    }

    /// Marks `seq` as the current request generation; earlier tickets stop being current.
    pub(crate) fn set_request_seq(&mut self, seq: u64) {
        self.request_seq = seq;
    }

    fn path_set(&self, kind: PathKind) -> Option<&PointSet> {
        self.overlay
            .as_ref()
            .filter(|overlay| overlay.kind == kind)
            .map(|overlay| &overlay.points)
    }

    fn take_walls(&mut self) -> PointSet {
        let walls = self
            .wall_set
            .take()
            .unwrap_or_else(|| self.initial_walls.drain(..).collect());
        self.initial_walls.clear();
        walls
    }

    fn ensure_configured(&self) -> MazeResult<()> {
        if self.grid_size.is_none() {
            return Err(MazeError::NotConfigured);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
