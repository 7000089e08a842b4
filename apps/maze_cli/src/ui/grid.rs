use std::fmt::Write as _;

use maze_core::{Action, Cell, CellCategory, MazeView};

fn glyph(cell: &Cell) -> char {
    match cell.category {
        CellCategory::Input if cell.marks.entrance => 'E',
        CellCategory::Input if cell.marks.wall => '#',
        CellCategory::Input => '.',
        CellCategory::Entrance => 'E',
        CellCategory::Path => '*',
        CellCategory::Wall => '#',
        CellCategory::Empty => ' ',
    }
}

fn title(slot: usize, view: &MazeView) -> String {
    match (view.maze_id, view.grid_size) {
        (Some(maze_id), Some(grid)) => format!("[{slot}] #{maze_id} {grid}"),
        (None, Some(grid)) => format!("[{slot}] new maze {grid}"),
        (_, None) => format!("[{slot}] new maze"),
    }
}

fn action_bar(actions: &[Action]) -> String {
    actions
        .iter()
        .map(|action| format!("[{action}]"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn draw_slot(slot: usize, view: &MazeView) -> String {
    let mut out = title(slot, view);
    out.push('\n');

    if let Some(first_row) = view.rows().next().filter(|row| !row.is_empty()) {
        out.push_str("     ");
        for cell in first_row {
            let letter = cell.point.as_str().chars().next().unwrap_or('?');
            out.push(letter);
            out.push(' ');
        }
        out.push('\n');
        for row in view.rows() {
            let label = row.first().map(|cell| cell.row).unwrap_or_default();
            let _ = write!(out, "{label:>4} ");
            for cell in row {
                out.push(glyph(cell));
                out.push(' ');
            }
            out.push('\n');
        }
    }

    out.push_str("    ");
    out.push_str(&action_bar(&view.actions));
    out
}

#[cfg(test)]
#[path = "../tests/grid_tests.rs"]
mod tests;
