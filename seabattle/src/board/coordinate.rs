// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! The two coordinate conventions used by the board.
//!
//! Records name cells by [`Coordinate`]: `x` grows to the right and `y` grows upward from
//! the bottom-left corner. The grid stores cells by [`Position`]: row-major with the
//! origin in the top-left corner. [`Coordinate::to_position`] is the only place the two
//! meet.
use std::{convert::TryFrom, fmt};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 10;

/// A cell named in the external convention. Always in bounds for the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Horizontal position of the cell, counted from the left edge.
    x: usize,
    /// Vertical position of the cell, counted upward from the bottom edge.
    y: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from raw record values. Returns `None` if either value
    /// is outside `[0, BOARD_SIZE)`.
    pub fn try_new(x: i64, y: i64) -> Option<Self> {
        let x = usize::try_from(x).ok().filter(|&x| x < BOARD_SIZE)?;
        let y = usize::try_from(y).ok().filter(|&y| y < BOARD_SIZE)?;
        Some(Self { x, y })
    }

    /// Construct from components taken from other in-bounds coordinates.
    pub(crate) fn from_parts(x: usize, y: usize) -> Self {
        debug_assert!(x < BOARD_SIZE && y < BOARD_SIZE);
        Self { x, y }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    /// Convert to the grid's row-major position. Row 0 is the top of the board, which is
    /// the highest `y`.
    pub fn to_position(self) -> Position {
        Position {
            row: BOARD_SIZE - 1 - self.y,
            col: self.x,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The location of a cell in the grid's row-major storage.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Position {
    /// Row of the cell, counted downward from the top edge.
    pub row: usize,
    /// Column of the cell, counted from the left edge.
    pub col: usize,
}

impl Position {
    /// Construct a [`Position`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this position lies on the board.
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_left_is_last_row() {
        let coord = Coordinate::try_new(0, 0).unwrap();
        assert_eq!(coord.to_position(), Position::new(9, 0));
    }

    #[test]
    fn top_right_is_first_row() {
        let coord = Coordinate::try_new(9, 9).unwrap();
        assert_eq!(coord.to_position(), Position::new(0, 9));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Coordinate::try_new(10, 3), None);
        assert_eq!(Coordinate::try_new(3, 10), None);
        assert_eq!(Coordinate::try_new(-1, 0), None);
        assert_eq!(Coordinate::try_new(0, i64::MIN), None);
    }
}
