//! The set of maze slots shown in one session plus the session-wide edit mode.
//!
//! Slot 0 is always the "new maze" slot; the rest mirror the server's maze list in order.

use shared::{
    domain::{GridSize, MazeId, PathKind, PointId},
    protocol::{MazeRecord, PostMazeRequest},
};
use tracing::{debug, info};

use crate::{
    error::{MazeError, MazeResult},
    geometry,
    model::MazeModel,
    render::{render, MazeView},
};

pub const NEW_MAZE_SLOT: usize = 0;

/// What a click on an `Input` cell does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Wall,
    Entrance,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The cell is not editable in the slot's current state.
    Ignored,
    WallToggled { point: PointId, is_wall: bool },
    EntranceSet(PointId),
    EntranceCleared,
}

/// Handle for an in-flight solve request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveTicket {
    pub slot: usize,
    pub maze_id: MazeId,
    pub kind: PathKind,
    pub seq: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    Applied,
    /// A newer request superseded this one; the result was dropped.
    Stale,
}

#[derive(Debug, Clone)]
pub struct SessionBoard {
    slots: Vec<MazeModel>,
    edit_mode: EditMode,
    user_id: Option<String>,
    /// Last request sequence handed out. Board-wide so it survives slot rehydration.
    request_seq: u64,
}

impl Default for SessionBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionBoard {
    pub fn new() -> Self {
        Self {
            slots: vec![MazeModel::new()],
            edit_mode: EditMode::Wall,
            user_id: None,
            request_seq: 0,
        }
    }

    pub fn from_records(records: Vec<MazeRecord>) -> Self {
        let mut board = Self::new();
        board.replace_all(records);
        board
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn header(&self) -> Option<String> {
        self.user_id.as_ref().map(|user_id| format!("USER : {user_id}"))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, slot: usize) -> MazeResult<&MazeModel> {
        self.slots.get(slot).ok_or(MazeError::UnknownSlot(slot))
    }

    fn slot_mut(&mut self, slot: usize) -> MazeResult<&mut MazeModel> {
        self.slots.get_mut(slot).ok_or(MazeError::UnknownSlot(slot))
    }

    pub fn slot_of(&self, maze_id: MazeId) -> Option<usize> {
        self.slots
            .iter()
            .position(|model| model.maze_id() == Some(maze_id))
    }

    /// Rehydrates every slot from the server list, discarding local state.
    pub fn replace_all(&mut self, records: Vec<MazeRecord>) {
        self.slots.clear();
        self.slots.push(MazeModel::new());
        self.slots
            .extend(records.into_iter().map(MazeModel::from_record));
        self.edit_mode = EditMode::Wall;
        info!(slots = self.slots.len(), "board: rehydrated from server list");
    }

    /// Rehydrates the slot holding `record.maze_id`, appending it when missing.
    pub fn replace_slot(&mut self, record: MazeRecord) -> usize {
        let maze_id = record.maze_id;
        let model = MazeModel::from_record(record);
        match self.slot_of(maze_id) {
            Some(slot) => {
                self.slots[slot] = model;
                slot
            }
            None => {
                self.slots.push(model);
                self.slots.len() - 1
            }
        }
    }

    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    pub fn hold_entrance_key(&mut self) {
        self.edit_mode = EditMode::Entrance;
    }

    pub fn release_entrance_key(&mut self) {
        self.edit_mode = EditMode::Wall;
    }

    /// Focus loss: key-up may never arrive, so drop back to wall editing.
    pub fn on_blur(&mut self) {
        if self.edit_mode != EditMode::Wall {
            debug!("board: focus lost, leaving entrance mode");
        }
        self.edit_mode = EditMode::Wall;
    }

    /// Applies a click on `point` of `slot` under the current edit mode.
    pub fn click(&mut self, slot: usize, point: &PointId) -> MazeResult<ClickOutcome> {
        let mode = self.edit_mode;
        let model = self.slot_mut(slot)?;
        let Some(grid) = model.grid_size() else {
            return Err(MazeError::NotConfigured);
        };
        if model.maze_id().is_some() || !geometry::contains(grid, point) {
            return Ok(ClickOutcome::Ignored);
        }

        match mode {
            EditMode::Wall => {
                let is_wall = model.toggle_wall(point)?;
                debug!(slot, point = %point, is_wall, "board: wall toggled");
                Ok(ClickOutcome::WallToggled {
                    point: point.clone(),
                    is_wall,
                })
            }
            EditMode::Entrance => {
                let result = model.toggle_entrance(point);
                self.edit_mode = EditMode::Wall;
                let is_entrance = result?;
                debug!(slot, point = %point, is_entrance, "board: entrance toggled");
                if is_entrance {
                    Ok(ClickOutcome::EntranceSet(point.clone()))
                } else {
                    Ok(ClickOutcome::EntranceCleared)
                }
            }
        }
    }

    /// Create action: validates `<cols>x<rows>` and configures the slot's grid.
    pub fn create(&mut self, slot: usize, input: &str) -> MazeResult<GridSize> {
        let model = self.slot_mut(slot)?;
        if model.grid_size().is_some() {
            return Err(MazeError::AlreadyConfigured);
        }
        let grid = geometry::check_grid(input.parse::<GridSize>()?)?;
        model.set_grid_size(grid.columns, grid.rows)?;
        info!(slot, grid = %grid, "board: maze grid created");
        Ok(grid)
    }

    /// Builds the `POST /maze` body for `slot` without mutating anything.
    pub fn begin_submit(&self, slot: usize) -> MazeResult<PostMazeRequest> {
        let model = self.slot(slot)?;
        if model.maze_id().is_some() {
            return Err(MazeError::AlreadySubmitted);
        }
        let grid_size = model.grid_size().ok_or(MazeError::NotConfigured)?;
        let entrance = model.entrance().cloned().ok_or(MazeError::MissingEntrance)?;
        Ok(PostMazeRequest {
            entrance,
            grid_size,
            walls: model.walls().iter().cloned().collect(),
        })
    }

    /// Opens a new request generation for `slot`. Only offered while no path is shown.
    pub fn begin_solve(&mut self, slot: usize, kind: PathKind) -> MazeResult<SolveTicket> {
        let seq = self.request_seq + 1;
        let model = self.slot_mut(slot)?;
        let maze_id = model.maze_id().ok_or(MazeError::NotSubmitted)?;
        if model.has_overlay() {
            return Err(MazeError::PathShown);
        }
        model.set_request_seq(seq);
        self.request_seq = seq;
        debug!(slot, maze_id = maze_id.0, %kind, seq, "board: solve requested");
        Ok(SolveTicket {
            slot,
            maze_id,
            kind,
            seq,
        })
    }

    /// Applies a solve completion if `ticket` is still the slot's current request.
    /// A failed current request leaves the slot without an overlay, as it was when requested.
    pub fn finish_solve(
        &mut self,
        ticket: SolveTicket,
        outcome: MazeResult<Vec<PointId>>,
    ) -> MazeResult<SolveOutcome> {
        let Some(model) = self.slots.get_mut(ticket.slot) else {
            debug!(slot = ticket.slot, "board: solve completion for vanished slot");
            return Ok(SolveOutcome::Stale);
        };
        if model.maze_id() != Some(ticket.maze_id) || model.request_seq() != ticket.seq {
            debug!(
                slot = ticket.slot,
                seq = ticket.seq,
                current = model.request_seq(),
                "board: dropping stale solve completion"
            );
            return Ok(SolveOutcome::Stale);
        }

        match outcome {
            Ok(path) => {
                model.set_path_overlay(ticket.kind, Some(path))?;
                info!(
                    slot = ticket.slot,
                    maze_id = ticket.maze_id.0,
                    kind = %ticket.kind,
                    "board: path overlay installed"
                );
                Ok(SolveOutcome::Applied)
            }
            Err(err) => {
                model.clear_path_overlay();
                Err(err)
            }
        }
    }

    /// Clear Path action. Any solve still in flight for the slot becomes stale.
    pub fn clear_path(&mut self, slot: usize) -> MazeResult<()> {
        let seq = self.request_seq + 1;
        let model = self.slot_mut(slot)?;
        model.clear_path_overlay();
        model.set_request_seq(seq);
        self.request_seq = seq;
        Ok(())
    }

    pub fn view(&self, slot: usize) -> MazeResult<MazeView> {
        self.slot(slot).map(render)
    }

    pub fn views(&self) -> Vec<(usize, MazeView)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(slot, model)| (slot, render(model)))
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/board_tests.rs"]
mod tests;
