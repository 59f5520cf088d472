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
use std::cmp;

use crate::{board::Coordinate, ships::ShapeProjection};

/// Direction a [`Line`] runs along the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A straight ship shape given by its two end cells. The ends may be given in either
/// order.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Line {
    start: Coordinate,
    end: Coordinate,
}

impl Line {
    /// Construct a line between the two given end cells.
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Line { start, end }
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn end(&self) -> Coordinate {
        self.end
    }

    /// Returns true if both ends share a row or share a column.
    pub fn is_axis_aligned(&self) -> bool {
        self.start.x() == self.end.x() || self.start.y() == self.end.y()
    }

    /// A line whose ends share `y` is horizontal. Anything else is walked as vertical, so
    /// callers must reject lines that are not axis aligned before projecting them.
    pub fn orientation(&self) -> Orientation {
        if self.start.y() == self.end.y() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Number of cells from one end to the other, inclusive.
    pub fn len(&self) -> usize {
        match self.orientation() {
            Orientation::Horizontal => span(self.start.x(), self.end.x()),
            Orientation::Vertical => span(self.start.y(), self.end.y()),
        }
    }

    /// Project this line onto grid positions, ordered by increasing `x` for a horizontal
    /// line and increasing `y` for a vertical one.
    pub fn project(&self) -> ShapeProjection {
        let mut route = Vec::with_capacity(self.len());
        match self.orientation() {
            Orientation::Horizontal => {
                let y = self.start.y();
                for x in min_max(self.start.x(), self.end.x()) {
                    route.push(Coordinate::from_parts(x, y).to_position());
                }
            }
            Orientation::Vertical => {
                // Column comes from the first end.
                let x = self.start.x();
                for y in min_max(self.start.y(), self.end.y()) {
                    route.push(Coordinate::from_parts(x, y).to_position());
                }
            }
        }
        route
    }
}

/// Inclusive range between two values, smallest first.
fn min_max(a: usize, b: usize) -> std::ops::RangeInclusive<usize> {
    cmp::min(a, b)..=cmp::max(a, b)
}

fn span(a: usize, b: usize) -> usize {
    cmp::max(a, b) - cmp::min(a, b) + 1
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
    fn vertical_from_origin() {
        let proj = line(0, 0, 0, 4).project();
        assert_eq!(
            proj,
            vec![
                Position::new(9, 0),
                Position::new(8, 0),
                Position::new(7, 0),
                Position::new(6, 0),
                Position::new(5, 0),
            ]
        );
    }

    #[test]
    fn endpoint_order_does_not_matter() {
        assert_eq!(line(2, 7, 6, 7).project(), line(6, 7, 2, 7).project());
        assert_eq!(line(4, 1, 4, 3).project(), line(4, 3, 4, 1).project());
    }

    #[test]
    fn horizontal_stays_on_one_row() {
        let proj = line(7, 3, 5, 3).project();
        assert_eq!(
            proj,
            vec![Position::new(6, 5), Position::new(6, 6), Position::new(6, 7)]
        );
        assert_eq!(line(7, 3, 5, 3).orientation(), Orientation::Horizontal);
    }

    #[test]
    fn single_cell_is_horizontal() {
        let l = line(3, 3, 3, 3);
        assert_eq!(l.orientation(), Orientation::Horizontal);
        assert_eq!(l.project(), vec![Position::new(6, 3)]);
    }

    #[test]
    fn diagonal_is_not_axis_aligned() {
        assert!(!line(0, 0, 3, 3).is_axis_aligned());
        assert!(line(0, 0, 0, 3).is_axis_aligned());
        assert!(line(0, 9, 4, 9).is_axis_aligned());
    }
}
