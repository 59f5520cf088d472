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
//! Errors used by the `BoardSetup` and the `FleetRegistry`.

use enumflags2::BitFlags;
use thiserror::Error;

use crate::ships::ShipClass;

/// Reason a fleet could not be set up. Every variant is fatal to the session. Variants
/// raised by a single record carry that record's text.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum SetupError {
    /// A coordinate in the record is outside the board.
    #[error("ship out-of-bounds: {record}")]
    OutOfBounds { record: String },

    /// The two ends share neither a row nor a column.
    #[error("ship not horizontal or vertical: {record}")]
    NotAxisAligned { record: String },

    /// The ship covers a cell already taken by a previously placed ship.
    #[error("overlapping ship: {record}")]
    OverlappingShip { record: String },

    /// The ship's length does not match its class.
    #[error("incorrect ship size: {record}")]
    WrongSize { record: String },

    /// The record names a class code that is not part of the fleet.
    #[error("fleet composition incorrect: {record}")]
    UnknownClass { record: String },

    /// The record names a class that is not among the classes still to be placed.
    #[error("fleet composition incorrect: {record}")]
    DuplicateOrUnknownClass { record: String },

    /// Setup ended with some classes never placed.
    #[error("fleet composition incorrect")]
    IncompleteFleet { missing: BitFlags<ShipClass> },
}

impl SetupError {
    /// Text of the record that caused this error, if a single record is to blame.
    pub fn record(&self) -> Option<&str> {
        match self {
            SetupError::OutOfBounds { record }
            | SetupError::NotAxisAligned { record }
            | SetupError::OverlappingShip { record }
            | SetupError::WrongSize { record }
            | SetupError::UnknownClass { record }
            | SetupError::DuplicateOrUnknownClass { record } => Some(record),
            SetupError::IncompleteFleet { .. } => None,
        }
    }
}
