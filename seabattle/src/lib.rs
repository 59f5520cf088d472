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
//! Engine for a single-board game of Battleship on a 10x10 grid.
//!
//! Setup happens in a [`BoardSetup`](board::BoardSetup): each [`PlacementRecord`] is
//! checked and its class claimed from the fleet, then [`start`](board::BoardSetup::start)
//! places the whole fleet and returns a [`Board`](board::Board). Play happens in a
//! [`Game`](game::Game), which resolves guesses until every ship is sunk.
//!
//! [`PlacementRecord`]: board::PlacementRecord

pub mod board;
pub mod game;
pub mod ships;
