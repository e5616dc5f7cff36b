//! Immutable grid snapshot: one instant of the automaton.
//!
//! Cells are stored row-major (`index = y * width + x`) behind an `Arc`, so
//! cloning a snapshot never copies cell data. A snapshot has no mutating
//! methods; new states are built by [`transition`](super::transition) or the
//! constructors here.

use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::LifeError;

/// One immutable frame of the automaton.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SnapshotRepr", into = "SnapshotRepr")]
pub struct GridSnapshot {
    width: usize,
    height: usize,
    cells: Arc<[bool]>,
    is_terminal: bool,
}

impl GridSnapshot {
    /// Build a snapshot by evaluating `f(x, y)` for every cell.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        assert!(width > 0 && height > 0, "Grid dimensions must be positive");

        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self::from_cells(width, height, cells)
    }

    /// A snapshot with every cell dead.
    pub fn dead(width: usize, height: usize) -> Self {
        Self::from_fn(width, height, |_, _| false)
    }

    /// Parse a picture of the grid: one string per row, `#` or `O` alive,
    /// `.` dead.
    ///
    /// ```
    /// use rust_life::grid::GridSnapshot;
    ///
    /// let grid = GridSnapshot::from_rows(&["....", ".##.", ".##.", "...."]).unwrap();
    /// assert_eq!(grid.live_count(), 4);
    /// assert!(grid.cell(1, 1));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, LifeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        if width == 0 || height == 0 {
            return Err(LifeError::invalid("picture must have at least one cell"));
        }

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let before = cells.len();
            for ch in row.chars() {
                match ch {
                    '#' | 'O' => cells.push(true),
                    '.' => cells.push(false),
                    other => {
                        return Err(LifeError::invalid(format!(
                            "unexpected character {other:?} in row {y}"
                        )))
                    }
                }
            }
            if cells.len() - before != width {
                return Err(LifeError::invalid(format!(
                    "row {y} has {} cells, expected {width}",
                    cells.len() - before
                )));
            }
        }

        Ok(Self::from_cells(width, height, cells))
    }

    /// Wrap a row-major cell buffer. `cells.len()` must equal `width * height`.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        let is_terminal = !cells.iter().any(|&c| c);
        Self {
            width,
            height,
            cells: cells.into(),
            is_terminal,
        }
    }

    /// Grid width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// True iff every cell is dead.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Value of the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the grid.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> bool {
        match self.try_cell(x, y) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Value of the cell at `(x, y)`, or `IndexOutOfRange`.
    pub fn try_cell(&self, x: usize, y: usize) -> Result<bool, LifeError> {
        if x >= self.width || y >= self.height {
            return Err(LifeError::IndexOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.cells[y * self.width + x])
    }

    /// Number of live cells.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Coordinates of live cells, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(move |(i, _)| (i % width, i / width))
    }

    /// Rows from `y = 0` downward.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Row-major cell buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    /// True if `other` shares this snapshot's cell buffer.
    #[must_use]
    pub fn shares_cells_with(&self, other: &GridSnapshot) -> bool {
        Arc::ptr_eq(&self.cells, &other.cells)
    }
}

impl Index<(usize, usize)> for GridSnapshot {
    type Output = bool;

    fn index(&self, (x, y): (usize, usize)) -> &bool {
        if let Err(err) = self.try_cell(x, y) {
            panic!("{err}");
        }
        &self.cells[y * self.width + x]
    }
}

impl fmt::Display for GridSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl fmt::Debug for GridSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridSnapshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("live", &self.live_count())
            .finish()
    }
}

/// Wire form: dimensions plus the flat cell list. `is_terminal` is derived.
#[derive(Clone, Serialize, Deserialize)]
struct SnapshotRepr {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl TryFrom<SnapshotRepr> for GridSnapshot {
    type Error = LifeError;

    fn try_from(repr: SnapshotRepr) -> Result<Self, LifeError> {
        if repr.width == 0 || repr.height == 0 {
            return Err(LifeError::invalid("grid dimensions must be positive"));
        }
        if Some(repr.cells.len()) != repr.width.checked_mul(repr.height) {
            return Err(LifeError::invalid(format!(
                "{} cells do not fill a {}x{} grid",
                repr.cells.len(),
                repr.width,
                repr.height
            )));
        }
        Ok(Self::from_cells(repr.width, repr.height, repr.cells))
    }
}

impl From<GridSnapshot> for SnapshotRepr {
    fn from(snapshot: GridSnapshot) -> Self {
        Self {
            width: snapshot.width,
            height: snapshot.height,
            cells: snapshot.cells.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dead_is_terminal() {
        let grid = GridSnapshot::dead(5, 4);
        assert!(grid.is_terminal());
        assert_eq!(grid.live_count(), 0);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 4);
    }

    #[test]
    fn test_single_live_cell_not_terminal() {
        let grid = GridSnapshot::from_fn(5, 5, |x, y| x == 4 && y == 0);
        assert!(!grid.is_terminal());
        assert!(grid.cell(4, 0));
        assert!(!grid.cell(0, 4));
    }

    #[test]
    fn test_from_rows_layout() {
        let grid = GridSnapshot::from_rows(&["#..", "..O"]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(grid[(0, 0)]);
        assert!(grid[(2, 1)]);
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(0, 0), (2, 1)]);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        assert!(GridSnapshot::from_rows(&["...", ".."]).is_err());
        assert!(GridSnapshot::from_rows(&["..x"]).is_err());
        assert!(GridSnapshot::from_rows(&[]).is_err());
    }

    #[test]
    fn test_try_cell_out_of_range() {
        let grid = GridSnapshot::dead(3, 3);
        assert_eq!(
            grid.try_cell(3, 0),
            Err(LifeError::IndexOutOfRange { x: 3, y: 0, width: 3, height: 3 })
        );
        assert!(grid.try_cell(2, 2).is_ok());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_cell_out_of_range_panics() {
        let grid = GridSnapshot::dead(3, 3);
        let _ = grid.cell(0, 3);
    }

    #[test]
    fn test_clone_shares_cells() {
        let grid = GridSnapshot::from_fn(4, 4, |x, y| (x + y) % 2 == 0);
        let copy = grid.clone();
        assert!(copy.shares_cells_with(&grid));
        assert_eq!(copy, grid);
    }

    #[test]
    fn test_display() {
        let grid = GridSnapshot::from_rows(&[".#.", "#.."]).unwrap();
        assert_eq!(grid.to_string(), ".#.\n#..\n");
    }

    #[test]
    fn test_serde_recomputes_terminal() {
        let grid = GridSnapshot::from_rows(&["...", ".#.", "..."]).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let back: GridSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
        assert!(!back.is_terminal());
    }

    #[test]
    fn test_serde_rejects_mismatched_cells() {
        let json = r#"{"width":2,"height":2,"cells":[true,false,true]}"#;
        assert!(serde_json::from_str::<GridSnapshot>(json).is_err());
    }
}
