use maze_core::{render, MazeModel};

use super::*;

#[test]
fn redraw_only_reports_changed_text() {
    let mut table = ViewTable::new();
    let mut model = MazeModel::new();

    assert!(table.redraw(0, &render(&model)).is_some());
    assert!(table.redraw(0, &render(&model)).is_none());

    model.set_grid_size(2, 2).expect("grid");
    assert!(table.redraw(0, &render(&model)).is_some());
    assert!(table.handles.contains_key(&0));

    table.reset();
    assert!(table.handles.is_empty());
    assert!(table.redraw(0, &render(&model)).is_some());
}
