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
//! Defines the types that make up the grid. These are shared between the board's setup
//! and playing versions.

use std::ops::{Index, IndexMut};

use crate::{
    board::{Position, BOARD_SIZE},
    ships::ShipClass,
};

/// A single cell in the grid.
#[derive(Debug, Default, Clone)]
pub(super) struct GridCell {
    /// The class of the ship that occupies this cell, if any. Set once during setup.
    pub(super) ship: Option<ShipClass>,

    /// Whether this cell has been guessed previously or not.
    pub(super) guessed: bool,
}

/// Row-major grid shared between [`BoardSetup`][super::BoardSetup] and
/// [`Board`][super::Board].
#[derive(Debug)]
pub(super) struct Grid {
    cells: Box<[GridCell]>,
}

impl Grid {
    pub(super) fn new() -> Self {
        let cells = (0..BOARD_SIZE * BOARD_SIZE)
            .map(|_| Default::default())
            .collect();
        Self { cells }
    }

    /// Convert a position to an index into `cells`, or `None` if it is off the board.
    fn try_linearize(pos: &Position) -> Option<usize> {
        if pos.in_bounds() {
            Some(pos.row * BOARD_SIZE + pos.col)
        } else {
            None
        }
    }

    /// Get a reference to the cell at the given [`Position`].
    pub(super) fn get(&self, pos: &Position) -> Option<&GridCell> {
        Self::try_linearize(pos).and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Position`].
    pub(super) fn get_mut(&mut self, pos: &Position) -> Option<&mut GridCell> {
        Self::try_linearize(pos).and_then(move |i| self.cells.get_mut(i))
    }
}

impl Index<&Position> for Grid {
    type Output = GridCell;

    fn index(&self, pos: &Position) -> &Self::Output {
        self.get(pos).expect("position out of bounds")
    }
}

impl IndexMut<&Position> for Grid {
    fn index_mut(&mut self, pos: &Position) -> &mut Self::Output {
        self.get_mut(pos).expect("position out of bounds")
    }
}
