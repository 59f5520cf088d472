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
//! Ship classes, ships, and the fleet registry.
use std::fmt;

use enumflags2::BitFlags;

pub use self::{
    fleet::FleetRegistry,
    linear::{Line, Orientation},
};

mod fleet;
mod linear;

/// Cells covered by a ship, in increasing grid order. Produced by [`Line::project`].
pub type ShapeProjection = Vec<crate::board::Position>;

/// The five classes that make up a fleet. Every fleet has exactly one of each.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ShipClass {
    /// Aircraft carrier (`A`): length 5.
    AircraftCarrier = 0b00001,
    /// Battleship (`B`): length 4.
    Battleship = 0b00010,
    /// Submarine (`S`): length 3.
    Submarine = 0b00100,
    /// Destroyer (`D`): length 3.
    Destroyer = 0b01000,
    /// Patrol boat (`P`): length 2.
    PatrolBoat = 0b10000,
}

impl ShipClass {
    /// All ship classes, in the order they are conventionally listed.
    pub const ALL: &'static [ShipClass] = &[
        ShipClass::AircraftCarrier,
        ShipClass::Battleship,
        ShipClass::Submarine,
        ShipClass::Destroyer,
        ShipClass::PatrolBoat,
    ];

    /// Look up a class by its single-letter record code. Codes are case sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|class| class.code() == code)
    }

    /// The record code for this class.
    pub fn code(self) -> &'static str {
        match self {
            ShipClass::AircraftCarrier => "A",
            ShipClass::Battleship => "B",
            ShipClass::Submarine => "S",
            ShipClass::Destroyer => "D",
            ShipClass::PatrolBoat => "P",
        }
    }

    /// Number of cells a ship of this class covers.
    pub fn len(self) -> usize {
        match self {
            ShipClass::AircraftCarrier => 5,
            ShipClass::Battleship => 4,
            ShipClass::Submarine => 3,
            ShipClass::Destroyer => 3,
            ShipClass::PatrolBoat => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShipClass::AircraftCarrier => "aircraft carrier",
            ShipClass::Battleship => "battleship",
            ShipClass::Submarine => "submarine",
            ShipClass::Destroyer => "destroyer",
            ShipClass::PatrolBoat => "patrol boat",
        }
    }

    /// The set of every class.
    pub fn all() -> BitFlags<ShipClass> {
        BitFlags::all()
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.code())
    }
}

/// A placed ship and how much of it is still afloat.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    class: ShipClass,

    /// Cells this ship occupies. Empty until the ship is placed.
    cells: ShapeProjection,

    /// Number of occupied cells not yet hit. Always in `[0, len]`.
    remaining: usize,
}

impl Ship {
    /// Construct an unplaced, undamaged ship of the given class.
    pub fn new(class: ShipClass) -> Self {
        Self {
            class,
            cells: Vec::new(),
            remaining: class.len(),
        }
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    /// Declared length of this ship, from its class.
    pub fn len(&self) -> usize {
        self.class.len()
    }

    /// The cells this ship occupies, in increasing grid order.
    pub fn cells(&self) -> &[crate::board::Position] {
        &self.cells
    }

    /// Number of occupied cells that have not been hit.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Returns true once every cell of this ship has been hit.
    pub fn sunk(&self) -> bool {
        self.remaining == 0
    }

    pub(crate) fn set_cells(&mut self, cells: ShapeProjection) {
        self.cells = cells;
    }

    /// Record a first hit on one of this ship's cells. Saturates at zero.
    pub(crate) fn hit(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}
