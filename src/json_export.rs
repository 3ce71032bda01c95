use serde::Serialize;

use crate::core::{Cell, Grid};
use crate::session::SessionView;

#[derive(Serialize, Debug)]
struct JsonGrid<'a> {
    level_id: usize,
    height: usize,
    width: usize,
    boxes: usize,
    targets: usize,
    rows: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'a str>,
}

pub fn session_view_json(view: &SessionView) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}

/// JSON description of a freshly loaded level grid.
pub fn level_json(level_id: usize, grid: &Grid) -> Result<String, serde_json::Error> {
    let rows: Vec<String> = grid
        .rows()
        .map(|row| row.iter().map(|c| c.to_char()).collect::<String>())
        .collect();
    let boxes = grid.count(Cell::Box) + grid.count(Cell::BoxOnTarget);
    let targets = grid.count(Cell::Target)
        + grid.count(Cell::BoxOnTarget)
        + grid.count(Cell::PlayerOnTarget);
    let data = JsonGrid {
        level_id,
        height: grid.height(),
        width: grid.width(),
        boxes,
        targets,
        rows,
        note: if grid.is_complete() { Some("already complete") } else { None },
    };
    serde_json::to_string_pretty(&data)
}
