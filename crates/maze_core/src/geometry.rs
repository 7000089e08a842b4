//! Bijective naming of grid cells: column `1..=26` maps to `A..=Z`, the row follows in decimal.

use shared::domain::{GridSize, PointId};

use crate::error::{MazeError, MazeResult};

/// Widest grid the letter encoding can address.
pub const MAX_COLUMNS: u32 = 26;

pub fn point_name(col: u32, row: u32) -> MazeResult<PointId> {
    if !(1..=MAX_COLUMNS).contains(&col) {
        return Err(MazeError::InvalidGeometry(format!(
            "column {col} is outside 1..={MAX_COLUMNS}"
        )));
    }
    if row == 0 {
        return Err(MazeError::InvalidGeometry("row must be at least 1".into()));
    }
    let letter = char::from(b'A' + (col - 1) as u8);
    Ok(PointId::from_canonical(format!("{letter}{row}")))
}

pub fn parse_point(name: &str) -> MazeResult<(u32, u32)> {
    let invalid = || MazeError::InvalidGeometry(format!("{name:?} is not a point name"));
    let mut chars = name.chars();
    let letter = chars.next().ok_or_else(invalid)?;
    if !letter.is_ascii_uppercase() {
        return Err(invalid());
    }
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) || digits.starts_with('0')
    {
        return Err(invalid());
    }
    let row = digits.parse::<u32>().map_err(|_| invalid())?;
    let col = u32::from(letter as u8 - b'A') + 1;
    Ok((col, row))
}

/// Parses a user-supplied name and re-encodes it, so only canonical ids escape.
pub fn canonical_point(name: &str) -> MazeResult<PointId> {
    let (col, row) = parse_point(name.trim())?;
    point_name(col, row)
}

pub fn contains(grid: GridSize, point: &PointId) -> bool {
    parse_point(point.as_str())
        .map(|(col, row)| col <= grid.columns && row <= grid.rows)
        .unwrap_or(false)
}

/// Rejects grids the letter encoding cannot address.
pub fn check_grid(grid: GridSize) -> MazeResult<GridSize> {
    if grid.columns > MAX_COLUMNS {
        return Err(MazeError::InvalidGeometry(format!(
            "grid {grid} is wider than {MAX_COLUMNS} columns"
        )));
    }
    Ok(grid)
}

/// Every cell of `grid`, row-major.
pub fn grid_points(grid: GridSize) -> impl Iterator<Item = (u32, u32, PointId)> {
    (1..=grid.rows).flat_map(move |row| {
        (1..=grid.columns.min(MAX_COLUMNS)).filter_map(move |col| {
            point_name(col, row).ok().map(|point| (col, row, point))
        })
    })
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
