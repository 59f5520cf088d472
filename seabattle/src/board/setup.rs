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
//! Implements the setup phase of the board.
use std::mem;

use log::{debug, info};

use crate::{
    board::{grid::Grid, Board, Coordinate, SetupError},
    ships::{FleetRegistry, Line, Ship, ShipClass},
};

/// One placement record: a class code and the two end cells of the ship, exactly as
/// they were read. Nothing is checked until the record is added to a [`BoardSetup`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlacementRecord {
    class_code: String,
    ends: [i64; 4],
    /// Record text used in diagnostics.
    text: String,
}

impl PlacementRecord {
    /// Construct a record for `class_code` with ends `[x1, y1, x2, y2]`. The diagnostic
    /// text is rebuilt from the parts; use [`with_text`][Self::with_text] to keep the
    /// line as it was read instead.
    pub fn new<S: Into<String>>(class_code: S, ends: [i64; 4]) -> Self {
        let class_code = class_code.into();
        let [x1, y1, x2, y2] = ends;
        let text = format!("{} {} {} {} {}", class_code, x1, y1, x2, y2);
        Self {
            class_code,
            ends,
            text,
        }
    }

    /// Replace the diagnostic text of this record.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }

    pub fn class_code(&self) -> &str {
        &self.class_code
    }

    /// Raw end values as `[x1, y1, x2, y2]`.
    pub fn ends(&self) -> [i64; 4] {
        self.ends
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Build the line between the record's ends, failing if any value is off the board.
    fn line(&self) -> Result<Line, SetupError> {
        let [x1, y1, x2, y2] = self.ends;
        match (Coordinate::try_new(x1, y1), Coordinate::try_new(x2, y2)) {
            (Some(start), Some(end)) => Ok(Line::new(start, end)),
            _ => Err(SetupError::OutOfBounds {
                record: self.text.clone(),
            }),
        }
    }
}

/// A record that passed the per-record checks and is waiting to be placed.
#[derive(Debug)]
struct PendingShip {
    class: ShipClass,
    line: Line,
    record: String,
}

/// Setup phase for a [`Board`]. Collects placement records, then places the whole fleet
/// when started. Does not allow guessing.
#[derive(Debug)]
pub struct BoardSetup {
    /// Grid for placement of ships.
    grid: Grid,

    /// Ships committed to the grid so far.
    ships: Vec<Ship>,

    /// Classes still to be claimed by a record.
    fleet: FleetRegistry,

    /// Validated records in the order they were added.
    pending: Vec<PendingShip>,
}

impl BoardSetup {
    /// Begin setup with an empty board and no ships claimed.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            ships: Vec::new(),
            fleet: FleetRegistry::new(),
            pending: Vec::new(),
        }
    }

    /// The fleet registry, showing which classes are still unclaimed.
    pub fn fleet(&self) -> &FleetRegistry {
        &self.fleet
    }

    /// Check a record's bounds and alignment and claim its class. Placement itself waits
    /// for [`start`][Self::start], so every record is checked this way before any ship
    /// is tested for overlap or size.
    pub fn add_ship(&mut self, record: PlacementRecord) -> Result<(), SetupError> {
        let line = record.line()?;
        if !line.is_axis_aligned() {
            return Err(SetupError::NotAxisAligned {
                record: record.text,
            });
        }
        let class = self.fleet.claim(&record)?;
        debug!("accepted record {:?} as {}", record.text, class.name());
        self.pending.push(PendingShip {
            class,
            line,
            record: record.text,
        });
        Ok(())
    }

    /// Check a pending ship against every ship committed so far and against its class
    /// length.
    fn check_placement(&self, pending: &PendingShip) -> Result<(), SetupError> {
        let projection = pending.line.project();
        let overlaps = projection
            .iter()
            .any(|pos| self.ships.iter().any(|ship| ship.cells().contains(pos)));
        if overlaps {
            return Err(SetupError::OverlappingShip {
                record: pending.record.clone(),
            });
        }
        if projection.len() != self.fleet.size_for(pending.class.code())? {
            return Err(SetupError::WrongSize {
                record: pending.record.clone(),
            });
        }
        Ok(())
    }

    /// Place a validated ship along the given line: record its cells on the ship and
    /// mark each covered cell as belonging to it. Only called from [`start`][Self::start],
    /// which guarantees one ship per class and no overlaps.
    pub(crate) fn place(&mut self, mut ship: Ship, line: Line) {
        let cells = line.project();
        for pos in &cells {
            let cell = &mut self.grid[pos];
            debug_assert!(cell.ship.is_none(), "{:?} is already occupied", pos);
            cell.ship = Some(ship.class());
        }
        debug!("placed {} on {:?}", ship.class().name(), cells);
        ship.set_cells(cells);
        self.ships.push(ship);
    }

    /// Finish setup. Fails if the fleet is incomplete or if any record overlaps an earlier
    /// one or has the wrong length for its class. Records are placed in the order they
    /// were added.
    pub fn start(mut self) -> Result<Board, SetupError> {
        self.fleet.finish()?;
        for pending in mem::take(&mut self.pending) {
            self.check_placement(&pending)?;
            self.place(Ship::new(pending.class), pending.line);
        }
        info!("fleet of {} ships placed", self.ships.len());
        Ok(Board {
            grid: self.grid,
            ships: self.ships,
        })
    }
}

impl Default for BoardSetup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;

    fn line(x1: i64, y1: i64, x2: i64, y2: i64) -> Line {
        Line::new(
            Coordinate::try_new(x1, y1).unwrap(),
            Coordinate::try_new(x2, y2).unwrap(),
        )
    }

    #[test]
    fn place_marks_ship_and_cells() {
        let mut setup = BoardSetup::new();
        setup.place(Ship::new(ShipClass::PatrolBoat), line(4, 0, 5, 0));
        let ship = &setup.ships[0];
        assert_eq!(ship.cells(), &[Position::new(9, 4), Position::new(9, 5)][..]);
        for pos in ship.cells() {
            assert_eq!(setup.grid[pos].ship, Some(ShipClass::PatrolBoat));
        }
        assert_eq!(setup.grid[&Position::new(9, 6)].ship, None);
    }

    #[test]
    fn start_places_one_ship_per_class() {
        let mut setup = BoardSetup::new();
        for (code, ends) in &[
            ("A", [0, 0, 0, 4]),
            ("B", [1, 0, 1, 3]),
            ("S", [2, 0, 2, 2]),
            ("D", [3, 0, 3, 2]),
            ("P", [9, 9, 8, 9]),
        ] {
            setup.add_ship(PlacementRecord::new(*code, *ends)).unwrap();
        }
        // A second patrol boat never reaches placement.
        assert!(setup
            .add_ship(PlacementRecord::new("P", [5, 5, 6, 5]))
            .is_err());
        let board = setup.start().unwrap();
        for &class in ShipClass::ALL {
            assert_eq!(board.iter_ships().filter(|s| s.class() == class).count(), 1);
        }
    }
}
