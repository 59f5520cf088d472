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
//! Resolution of guesses against a placed fleet.
//!
//! A [`Game`] wraps a started [`Board`] and keeps the set of classes still afloat. Each
//! guess resolves to exactly one [`GuessOutcome`]; the game ends on the guess that sinks
//! the last ship.
use enumflags2::BitFlags;
use log::{info, trace};
use thiserror::Error;

use crate::{
    board::{Board, Coordinate, ShotOutcome},
    ships::ShipClass,
};

/// Outcome of a single guess.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GuessOutcome {
    /// The guess named a cell off the board. Nothing changed.
    Invalid,
    /// Nothing was hit.
    Miss,
    /// Nothing was hit, and the cell had been guessed before.
    RepeatMiss,
    /// The given ship was hit but not sunk.
    Hit(ShipClass),
    /// The cell of the given ship had been hit before.
    RepeatHit(ShipClass),
    /// The given ship was sunk but other ships remain.
    Sunk(ShipClass),
    /// The given ship was sunk and it was the last one afloat.
    GameOver(ShipClass),
}

impl GuessOutcome {
    /// Get the class of the ship that was hit, if any.
    pub fn ship(&self) -> Option<ShipClass> {
        match *self {
            GuessOutcome::Invalid | GuessOutcome::Miss | GuessOutcome::RepeatMiss => None,
            GuessOutcome::Hit(class)
            | GuessOutcome::RepeatHit(class)
            | GuessOutcome::Sunk(class)
            | GuessOutcome::GameOver(class) => Some(class),
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, GuessOutcome::GameOver(_))
    }
}

/// Error returned when guessing after every ship has been sunk.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("the game is already over")]
pub struct GameOverError;

/// Handles gameplay against a single board.
#[derive(Debug)]
pub struct Game {
    board: Board,

    /// Classes of the ships not yet sunk.
    alive: BitFlags<ShipClass>,
}

impl Game {
    /// Start play on the given board.
    pub fn new(board: Board) -> Self {
        let mut alive = BitFlags::empty();
        for ship in board.iter_ships().filter(|ship| !ship.sunk()) {
            alive.insert(ship.class());
        }
        info!("game started with {} ships afloat", board.iter_ships().count());
        Self { board, alive }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Classes of the ships still afloat.
    pub fn alive(&self) -> BitFlags<ShipClass> {
        self.alive
    }

    /// Returns true once every ship has been sunk.
    pub fn is_over(&self) -> bool {
        self.alive.is_empty()
    }

    /// Resolve a guess at the raw record values `x` and `y`.
    pub fn guess(&mut self, x: i64, y: i64) -> Result<GuessOutcome, GameOverError> {
        if self.is_over() {
            return Err(GameOverError);
        }
        let coord = match Coordinate::try_new(x, y) {
            Some(coord) => coord,
            None => {
                trace!("guess ({}, {}) is off the board", x, y);
                return Ok(GuessOutcome::Invalid);
            }
        };
        let outcome = match self.board.shoot(coord) {
            ShotOutcome::Miss => GuessOutcome::Miss,
            ShotOutcome::RepeatMiss => GuessOutcome::RepeatMiss,
            ShotOutcome::Hit(class) => GuessOutcome::Hit(class),
            ShotOutcome::RepeatHit(class) => GuessOutcome::RepeatHit(class),
            ShotOutcome::Sunk(class) => {
                self.alive.remove(class);
                if self.alive.is_empty() {
                    info!("last ship ({}) sunk at {}", class.name(), coord);
                    GuessOutcome::GameOver(class)
                } else {
                    GuessOutcome::Sunk(class)
                }
            }
        };
        Ok(outcome)
    }

    /// Resolve a stream of guesses in order. The returned iterator ends when the guesses
    /// run out or right after the guess that ends the game.
    pub fn outcomes<I>(&mut self, guesses: I) -> Outcomes<I::IntoIter>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        Outcomes {
            game: self,
            guesses: guesses.into_iter(),
        }
    }
}

/// Iterator over the outcomes of a guess stream. See [`Game::outcomes`].
pub struct Outcomes<'a, I> {
    game: &'a mut Game,
    guesses: I,
}

impl<'a, I: Iterator<Item = (i64, i64)>> Iterator for Outcomes<'a, I> {
    type Item = GuessOutcome;

    fn next(&mut self) -> Option<Self::Item> {
        if self.game.is_over() {
            return None;
        }
        let (x, y) = self.guesses.next()?;
        self.game.guess(x, y).ok()
    }
}
