//! The Life rule (B3/S23) and the full-grid transition.
//!
//! The outermost ring of cells is a permanent dead border: it is never
//! evaluated as a center and is always dead in the successor. Only the
//! `(W-2)x(H-2)` interior evolves.

use super::snapshot::GridSnapshot;

/// Neighbor count required for a dead cell to come alive.
pub const BIRTH: u8 = 3;

/// Inclusive neighbor range in which a live cell survives.
pub const SURVIVAL: std::ops::RangeInclusive<u8> = 2..=3;

/// Apply the rule to one cell.
#[inline]
#[must_use]
pub fn next_state(alive: bool, count: u8) -> bool {
    if alive {
        SURVIVAL.contains(&count)
    } else {
        count == BIRTH
    }
}

/// Number of live cells among the 8 Moore neighbors of `(x, y)`.
///
/// Neighbors outside the grid count as dead, so the result is always in
/// `[0, 8]`.
///
/// # Panics
///
/// Panics if `(x, y)` is outside the grid.
#[must_use]
pub fn neighbor_count(grid: &GridSnapshot, x: usize, y: usize) -> u8 {
    assert!(
        grid.try_cell(x, y).is_ok(),
        "cell ({x}, {y}) out of range for {}x{} grid",
        grid.width(),
        grid.height()
    );

    let mut count = 0;
    for dy in -1isize..=1 {
        for dx in -1isize..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                continue;
            };
            if grid.try_cell(nx, ny) == Ok(true) {
                count += 1;
            }
        }
    }
    count
}

/// Compute interior row `y` of the successor into `out`.
///
/// `out` must be `width` long; its first and last entries are left dead.
#[inline]
fn step_row(prev: &[bool], width: usize, y: usize, out: &mut [bool]) {
    let above = &prev[(y - 1) * width..y * width];
    let row = &prev[y * width..(y + 1) * width];
    let below = &prev[(y + 1) * width..(y + 2) * width];

    for x in 1..width - 1 {
        let count = [
            above[x - 1], above[x], above[x + 1],
            row[x - 1], row[x + 1],
            below[x - 1], below[x], below[x + 1],
        ]
        .iter()
        .filter(|&&alive| alive)
        .count() as u8;

        out[x] = next_state(row[x], count);
    }
}

/// Compute the successor of `prev`.
///
/// The result has the same dimensions, a dead border, and is terminal iff
/// no interior cell is alive. `prev` is only read.
#[must_use]
pub fn transition(prev: &GridSnapshot) -> GridSnapshot {
    let width = prev.width();
    let height = prev.height();
    let cells = prev.as_slice();
    let mut next = vec![false; width * height];

    if width >= 3 && height >= 3 {
        fill_interior(cells, width, height, &mut next);
    }

    GridSnapshot::from_cells(width, height, next)
}

#[cfg(not(feature = "parallel"))]
fn fill_interior(prev: &[bool], width: usize, height: usize, next: &mut [bool]) {
    fill_interior_sequential(prev, width, height, next);
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
fn fill_interior_sequential(prev: &[bool], width: usize, height: usize, next: &mut [bool]) {
    for (y, out) in next.chunks_mut(width).enumerate().take(height - 1).skip(1) {
        step_row(prev, width, y, out);
    }
}

#[cfg(feature = "parallel")]
fn fill_interior(prev: &[bool], width: usize, height: usize, next: &mut [bool]) {
    use rayon::prelude::*;

    next.par_chunks_mut(width)
        .enumerate()
        .filter(|(y, _)| *y > 0 && *y < height - 1)
        .for_each(|(y, out)| step_row(prev, width, y, out));
}
