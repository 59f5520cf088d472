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
use enumflags2::BitFlags;
use log::debug;

use crate::{
    board::{PlacementRecord, SetupError},
    ships::ShipClass,
};

/// Tracks which classes a fleet still needs during setup. Each class may be claimed
/// exactly once.
#[derive(Debug, Clone)]
pub struct FleetRegistry {
    /// Classes that no record has claimed yet.
    remaining: BitFlags<ShipClass>,
}

impl FleetRegistry {
    /// Construct a registry with every class unclaimed.
    pub fn new() -> Self {
        Self {
            remaining: ShipClass::all(),
        }
    }

    /// Required length for the class with the given code.
    pub fn size_for(&self, code: &str) -> Result<usize, SetupError> {
        ShipClass::from_code(code)
            .map(ShipClass::len)
            .ok_or_else(|| SetupError::UnknownClass {
                record: code.to_owned(),
            })
    }

    /// Claim the class named by the record. Fails if the code is unknown or the class
    /// was already claimed.
    pub fn claim(&mut self, record: &PlacementRecord) -> Result<ShipClass, SetupError> {
        let class =
            ShipClass::from_code(record.class_code()).ok_or_else(|| SetupError::UnknownClass {
                record: record.text().to_owned(),
            })?;
        if !self.remaining.contains(class) {
            return Err(SetupError::DuplicateOrUnknownClass {
                record: record.text().to_owned(),
            });
        }
        self.remaining.remove(class);
        debug!("claimed {} ({})", class.name(), class.code());
        Ok(class)
    }

    /// Classes not yet claimed.
    pub fn remaining(&self) -> BitFlags<ShipClass> {
        self.remaining
    }

    /// Check that every class has been claimed.
    pub fn finish(&self) -> Result<(), SetupError> {
        if self.remaining.is_empty() {
            Ok(())
        } else {
            Err(SetupError::IncompleteFleet {
                missing: self.remaining,
            })
        }
    }
}

impl Default for FleetRegistry {
    fn default() -> Self {
        Self::new()
    }
}
