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
//! Types that make up the game board.

use log::trace;

use crate::ships::{Ship, ShipClass};

use self::grid::Grid;
pub use self::{
    coordinate::{Coordinate, Position, BOARD_SIZE},
    errors::SetupError,
    setup::{BoardSetup, PlacementRecord},
};

mod coordinate;
mod errors;
mod grid;
pub mod setup;

/// Reference to a particular cell in the grid.
#[derive(Debug, Copy, Clone)]
pub struct CellRef<'a> {
    /// Position of this cell.
    position: Position,

    /// Whether this cell was guessed.
    guessed: bool,

    /// The ship that occupies this cell if any.
    ship: Option<&'a Ship>,
}

impl<'a> CellRef<'a> {
    /// The grid position of this cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether this cell has been guessed previously.
    pub fn guessed(&self) -> bool {
        self.guessed
    }

    /// The ship that occupies this cell, if any.
    pub fn ship(&self) -> Option<&'a Ship> {
        self.ship
    }
}

/// Result of a guess on a cell of the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The cell is empty and had not been guessed.
    Miss,
    /// The cell is empty and was already guessed.
    RepeatMiss,
    /// The cell belongs to the given ship, which is still afloat.
    Hit(ShipClass),
    /// The cell belongs to the given ship and was already guessed.
    RepeatHit(ShipClass),
    /// The guess hit the last intact cell of the given ship.
    Sunk(ShipClass),
}

/// A placed fleet on its grid. Built by [`BoardSetup::start`]; after that only the
/// guessed flags of cells and the hit counts of ships change.
#[derive(Debug)]
pub struct Board {
    /// Grid of cells occupied by ships.
    grid: Grid,

    /// All ships on this board, in the order they were placed.
    ships: Vec<Ship>,
}

impl Board {
    /// Get the ship of the given class, if it is on this board.
    pub fn ship(&self, class: ShipClass) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.class() == class)
    }

    /// Get an iterator over all ships on this board.
    pub fn iter_ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter()
    }

    /// Returns true if all of the ships on this board have been sunk.
    pub fn defeated(&self) -> bool {
        self.ships.iter().all(Ship::sunk)
    }

    /// Get a reference to the cell at the given position. Returns `None` if the position
    /// is out of bounds.
    pub fn get(&self, position: Position) -> Option<CellRef> {
        self.grid.get(&position).map(|cell| CellRef {
            position,
            guessed: cell.guessed,
            ship: cell.ship.and_then(|class| self.ship(class)),
        })
    }

    /// Get an iterator over the rows of the board, top row first. Each row is an iterator
    /// over its cells from left to right.
    pub fn iter_rows<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = CellRef<'a>>> {
        (0..BOARD_SIZE).map(move |row| {
            (0..BOARD_SIZE).filter_map(move |col| self.get(Position::new(row, col)))
        })
    }

    /// Guess the cell at the given coordinate. The first guess on a cell marks it and, if
    /// a ship is there, takes one point off that ship. Later guesses on the same cell
    /// change nothing.
    pub fn shoot(&mut self, coord: Coordinate) -> ShotOutcome {
        let position = coord.to_position();
        let cell = &mut self.grid[&position];
        let first = !cell.guessed;
        cell.guessed = true;
        let outcome = match (cell.ship, first) {
            (None, true) => ShotOutcome::Miss,
            (None, false) => ShotOutcome::RepeatMiss,
            (Some(class), false) => ShotOutcome::RepeatHit(class),
            (Some(class), true) => {
                let ship = self
                    .ships
                    .iter_mut()
                    .find(|ship| ship.class() == class)
                    .expect("occupied cell refers to a ship on the board");
                ship.hit();
                if ship.sunk() {
                    ShotOutcome::Sunk(class)
                } else {
                    ShotOutcome::Hit(class)
                }
            }
        };
        trace!("shot at {}: {:?}", coord, outcome);
        outcome
    }
}
