//! Program grid
//!
//! The grid is the executing program and, through `g` and `p`, the only
//! addressable memory of the machine. It is always exactly
//! [`GRID_WIDTH`] × [`GRID_HEIGHT`] cells; loading normalizes arbitrary text to
//! that shape and nothing afterwards can resize it.

use super::value::{char_to_value, value_to_char_lossy, Value, SPACE};
use crate::interpreter::constants::{GRID_HEIGHT, GRID_WIDTH};
use std::fmt;

/// A cell coordinate, always inside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} , {})", self.x, self.y)
    }
}

/// The fixed-size program grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramGrid {
    cells: Vec<Value>, // Row-major, GRID_WIDTH * GRID_HEIGHT
}

impl ProgramGrid {
    /// Create a grid filled with spaces
    pub fn blank() -> Self {
        ProgramGrid {
            cells: vec![SPACE; GRID_WIDTH * GRID_HEIGHT],
        }
    }

    /// Build a grid from program text
    ///
    /// Short lines are padded with spaces and missing lines are blank. Lines
    /// past the last row and characters past the last column are dropped.
    pub fn load(text: &str) -> Self {
        let mut grid = ProgramGrid::blank();
        let mut lines: Vec<&str> = text.split('\n').collect();

        // A final newline does not start another row
        if lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        if lines.len() > GRID_HEIGHT {
            tracing::warn!(
                lines = lines.len(),
                kept = GRID_HEIGHT,
                "program has more lines than the grid, truncating"
            );
        }

        for (y, line) in lines.iter().take(GRID_HEIGHT).enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let width = line.chars().count();
            if width > GRID_WIDTH {
                tracing::warn!(
                    row = y,
                    width,
                    kept = GRID_WIDTH,
                    "program line is wider than the grid, truncating"
                );
            }
            for (x, c) in line.chars().take(GRID_WIDTH).enumerate() {
                grid.write(x, y, char_to_value(c));
            }
        }

        grid
    }

    pub fn width(&self) -> usize {
        GRID_WIDTH
    }

    pub fn height(&self) -> usize {
        GRID_HEIGHT
    }

    /// Read the cell at an in-bounds coordinate
    pub fn read(&self, x: usize, y: usize) -> Value {
        self.cells[Self::index(x, y)]
    }

    /// Overwrite the cell at an in-bounds coordinate
    pub fn write(&mut self, x: usize, y: usize, value: Value) {
        self.cells[Self::index(x, y)] = value;
    }

    /// Read the cell under a position
    pub fn at(&self, pos: Position) -> Value {
        self.read(pos.x, pos.y)
    }

    /// Map arbitrary coordinates onto the torus
    pub fn wrap(x: Value, y: Value) -> Position {
        Position {
            x: x.rem_euclid(GRID_WIDTH as Value) as usize,
            y: y.rem_euclid(GRID_HEIGHT as Value) as usize,
        }
    }

    /// Iterate over the rows of the grid
    pub fn rows(&self) -> impl Iterator<Item = &[Value]> {
        self.cells.chunks(GRID_WIDTH)
    }

    /// Render one row as text
    pub fn row_text(&self, y: usize) -> String {
        self.rows()
            .nth(y)
            .map(|row| row.iter().map(|&v| value_to_char_lossy(v)).collect())
            .unwrap_or_default()
    }

    /// Positions whose contents differ between two grids
    pub fn diff<'a>(&'a self, other: &'a ProgramGrid) -> impl Iterator<Item = Position> + 'a {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| Position::new(i % GRID_WIDTH, i / GRID_WIDTH))
    }

    fn index(x: usize, y: usize) -> usize {
        debug_assert!(x < GRID_WIDTH && y < GRID_HEIGHT, "cell ({x}, {y}) out of bounds");
        y * GRID_WIDTH + x
    }
}

impl Default for ProgramGrid {
    fn default() -> Self {
        Self::blank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_pads_to_full_grid() {
        let grid = ProgramGrid::load("12\n3");
        assert_eq!(grid.read(0, 0), '1' as Value);
        assert_eq!(grid.read(1, 0), '2' as Value);
        assert_eq!(grid.read(2, 0), SPACE);
        assert_eq!(grid.read(0, 1), '3' as Value);
        assert_eq!(grid.read(79, 24), SPACE);
        assert_eq!(grid.rows().count(), GRID_HEIGHT);
        assert!(grid.rows().all(|row| row.len() == GRID_WIDTH));
    }

    #[test]
    fn test_load_empty_program() {
        assert_eq!(ProgramGrid::load(""), ProgramGrid::blank());
    }

    #[test]
    fn test_load_truncates_excess_lines() {
        let text: String = (0..30).map(|i| format!("{}\n", i % 10)).collect();
        let grid = ProgramGrid::load(&text);
        assert_eq!(grid.read(0, 24), '4' as Value);
        assert_eq!(grid.rows().count(), GRID_HEIGHT);
    }

    #[test]
    fn test_load_truncates_wide_lines() {
        let line = "x".repeat(100);
        let grid = ProgramGrid::load(&line);
        assert_eq!(grid.read(79, 0), 'x' as Value);
        assert_eq!(grid.row_text(0).chars().count(), GRID_WIDTH);
    }

    #[test]
    fn test_load_strips_carriage_returns() {
        let grid = ProgramGrid::load("1\r\n2\r\n");
        assert_eq!(grid.read(1, 0), SPACE);
        assert_eq!(grid.read(0, 1), '2' as Value);
    }

    #[test]
    fn test_write_then_read() {
        let mut grid = ProgramGrid::blank();
        grid.write(3, 4, 88);
        assert_eq!(grid.read(3, 4), 88);
        assert_eq!(grid.at(Position::new(3, 4)), 88);
    }

    #[test]
    fn test_wrap_coordinates() {
        assert_eq!(ProgramGrid::wrap(80, 25), Position::new(0, 0));
        assert_eq!(ProgramGrid::wrap(-1, -1), Position::new(79, 24));
        assert_eq!(ProgramGrid::wrap(5, 7), Position::new(5, 7));
    }

    #[test]
    fn test_diff_reports_changed_cells() {
        let original = ProgramGrid::load("abc");
        let mut modified = original.clone();
        modified.write(1, 0, 'X' as Value);
        let changed: Vec<Position> = modified.diff(&original).collect();
        assert_eq!(changed, vec![Position::new(1, 0)]);
    }
}
