//! Terminal presentation: grid drawing and the slot → view handle side table.

pub mod grid;

use std::collections::HashMap;

use maze_core::MazeView;

/// Last text drawn for a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewHandle {
    pub text: String,
}

/// Renderer-owned mapping from slot index to its view handle. Models never see it.
#[derive(Debug, Default)]
pub struct ViewTable {
    handles: HashMap<usize, ViewHandle>,
}

impl ViewTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Redraws `slot`; returns the new text only when it differs from what is on screen.
    pub fn redraw(&mut self, slot: usize, view: &MazeView) -> Option<String> {
        let text = grid::draw_slot(slot, view);
        match self.handles.get(&slot) {
            Some(handle) if handle.text == text => None,
            _ => {
                self.handles.insert(slot, ViewHandle { text: text.clone() });
                Some(text)
            }
        }
    }

    /// Drops every handle, used when the whole board is rebuilt.
    pub fn reset(&mut self) {
        self.handles.clear();
    }
}

#[cfg(test)]
#[path = "../tests/view_table_tests.rs"]
mod tests;
