//! Food placement.

#[cfg(test)]
use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use super::snake::Cell;

/// Where the next piece of food goes.
pub trait FoodSource {
    /// A cell with both coordinates in `0..grid`.
    fn next_cell(&mut self, grid: i16) -> Cell;
}

/// SplitMix64 seeded from the clock. Uniform enough for a snake game.
#[derive(Debug, Clone)]
pub struct SplitMix {
    state: u64,
}

impl SplitMix {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::new(nanos ^ 0x9E37_79B9_7F4A_7C15)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn below(&mut self, bound: i16) -> i16 {
        if bound <= 0 {
            return 0;
        }
        (self.next_u64() % bound as u64) as i16
    }
}

impl FoodSource for SplitMix {
    fn next_cell(&mut self, grid: i16) -> Cell {
        let x = self.below(grid);
        let y = self.below(grid);
        Cell::new(x, y)
    }
}

/// Hands out a fixed sequence of cells, repeating the last one.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct FixedCells {
    cells: VecDeque<Cell>,
    last: Cell,
}

#[cfg(test)]
impl FixedCells {
    pub fn new(cells: impl IntoIterator<Item = Cell>) -> Self {
        let cells: VecDeque<Cell> = cells.into_iter().collect();
        let last = cells.back().copied().unwrap_or(Cell::new(0, 0));
        Self { cells, last }
    }
}

#[cfg(test)]
impl FoodSource for FixedCells {
    fn next_cell(&mut self, _grid: i16) -> Cell {
        self.cells.pop_front().unwrap_or(self.last)
    }
}
