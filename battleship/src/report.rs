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
//! Text rendering of outcomes and of the board.
use std::{
    fmt,
    io::{self, Write},
};

use seabattle::{board::Board, game::GuessOutcome};

/// Display helper that prints the result line for a guess. The final sink prints two
/// lines.
#[derive(Debug, Copy, Clone)]
pub struct OutcomeLine(pub GuessOutcome);

impl fmt::Display for OutcomeLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            GuessOutcome::Invalid => f.write_str("invalid guess"),
            GuessOutcome::Miss => f.write_str("miss"),
            GuessOutcome::RepeatMiss => f.write_str("miss (again)"),
            GuessOutcome::Hit(_) => f.write_str("hit"),
            GuessOutcome::RepeatHit(_) => f.write_str("hit (again)"),
            GuessOutcome::Sunk(class) => write!(f, "{} sunk", class),
            GuessOutcome::GameOver(class) => {
                write!(f, "{} sunk\nall ships sunk: game over", class)
            }
        }
    }
}

/// Print the placed fleet, top row first: `.` for open water, otherwise the class code
/// of the ship in the cell.
pub fn show_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    for row in board.iter_rows() {
        let mut line = String::new();
        for cell in row {
            match cell.ship() {
                Some(ship) => line.push_str(ship.class().code()),
                None => line.push('.'),
            }
            line.push(' ');
        }
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seabattle::ships::ShipClass;

    #[test]
    fn outcome_lines() {
        let line = |outcome| OutcomeLine(outcome).to_string();
        assert_eq!(line(GuessOutcome::Invalid), "invalid guess");
        assert_eq!(line(GuessOutcome::Miss), "miss");
        assert_eq!(line(GuessOutcome::RepeatMiss), "miss (again)");
        assert_eq!(line(GuessOutcome::Hit(ShipClass::Submarine)), "hit");
        assert_eq!(
            line(GuessOutcome::RepeatHit(ShipClass::Submarine)),
            "hit (again)"
        );
        assert_eq!(line(GuessOutcome::Sunk(ShipClass::Submarine)), "S sunk");
        assert_eq!(
            line(GuessOutcome::GameOver(ShipClass::PatrolBoat)),
            "P sunk\nall ships sunk: game over"
        );
    }
}
