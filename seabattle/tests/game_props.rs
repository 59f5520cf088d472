use proptest::prelude::*;
use seabattle::{
    board::{Board, BoardSetup, Coordinate, PlacementRecord, BOARD_SIZE},
    game::{Game, GuessOutcome},
    ships::{Line, ShipClass},
};

fn standard_board() -> Board {
    let mut setup = BoardSetup::new();
    for (code, ends) in &[
        ("A", [5, 9, 9, 9]),
        ("B", [0, 0, 0, 3]),
        ("S", [4, 4, 4, 6]),
        ("D", [7, 1, 9, 1]),
        ("P", [2, 7, 2, 6]),
    ] {
        setup.add_ship(PlacementRecord::new(*code, *ends)).unwrap();
    }
    setup.start().unwrap()
}

/// Every cell on the board as an `(x, y)` guess.
fn all_cells() -> Vec<(i64, i64)> {
    let size = BOARD_SIZE as i64;
    (0..size).flat_map(|x| (0..size).map(move |y| (x, y))).collect()
}

/// An axis-aligned line: a fixed value on one axis and two ends on the other.
fn axis_line() -> impl Strategy<Value = (i64, i64, i64, i64)> {
    (any::<bool>(), 0i64..10, 0i64..10, 0i64..10).prop_map(|(horizontal, fixed, a, b)| {
        if horizontal {
            (a, fixed, b, fixed)
        } else {
            (fixed, a, fixed, b)
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn projection_length_matches_span((x1, y1, x2, y2) in axis_line()) {
        let line = Line::new(
            Coordinate::try_new(x1, y1).unwrap(),
            Coordinate::try_new(x2, y2).unwrap(),
        );
        let proj = line.project();
        let expected = ((x1 - x2).abs() + (y1 - y2).abs() + 1) as usize;
        prop_assert_eq!(proj.len(), expected);
        prop_assert_eq!(line.len(), expected);
        // Strictly increasing grid order, with no repeats.
        let mut sorted = proj.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), proj.len());
    }

    #[test]
    fn swapped_ends_project_the_same((x1, y1, x2, y2) in axis_line()) {
        let a = Coordinate::try_new(x1, y1).unwrap();
        let b = Coordinate::try_new(x2, y2).unwrap();
        prop_assert_eq!(Line::new(a, b).project(), Line::new(b, a).project());
    }

    #[test]
    fn repeat_guess_never_changes_state(x in 0i64..10, y in 0i64..10) {
        let mut game = Game::new(standard_board());
        let first = game.guess(x, y).unwrap();
        let alive = game.alive();
        let remaining: Vec<_> = game.board().iter_ships().map(|s| s.remaining()).collect();

        let second = game.guess(x, y).unwrap();
        let expected = match first {
            GuessOutcome::Miss => GuessOutcome::RepeatMiss,
            GuessOutcome::Hit(class) | GuessOutcome::Sunk(class) => GuessOutcome::RepeatHit(class),
            other => panic!("unexpected first outcome {:?}", other),
        };
        prop_assert_eq!(second, expected);
        prop_assert_eq!(game.alive(), alive);
        let after: Vec<_> = game.board().iter_ships().map(|s| s.remaining()).collect();
        prop_assert_eq!(after, remaining);
    }

    #[test]
    fn full_sweep_ends_on_last_ship_cell(order in Just(all_cells()).prop_shuffle()) {
        let board = standard_board();
        let ship_cells: Vec<_> = order
            .iter()
            .enumerate()
            .filter(|&(_, &(x, y))| {
                let pos = Coordinate::try_new(x, y).unwrap().to_position();
                board.get(pos).unwrap().ship().is_some()
            })
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(ship_cells.len(), 17);
        let last_ship_cell = ship_cells[ship_cells.len() - 1];

        let mut game = Game::new(board);
        let mut last_remaining: Vec<_> = game.board().iter_ships().map(|s| s.remaining()).collect();
        let mut outcomes = Vec::new();
        for &(x, y) in &order {
            let outcome = game.guess(x, y);
            let outcome = match outcome {
                Ok(outcome) => outcome,
                Err(_) => break,
            };
            // Hit counts only ever go down, by at most one per guess.
            let remaining: Vec<_> = game.board().iter_ships().map(|s| s.remaining()).collect();
            let dropped: usize = last_remaining.iter().zip(&remaining).map(|(a, b)| a - b).sum();
            prop_assert!(dropped <= 1);
            last_remaining = remaining;
            outcomes.push(outcome);
        }

        prop_assert_eq!(outcomes.len(), last_ship_cell + 1);
        prop_assert!(outcomes[last_ship_cell].is_game_over());
        prop_assert_eq!(outcomes.iter().filter(|o| o.is_game_over()).count(), 1);
        let sunk = outcomes.iter().filter(|o| matches!(o, GuessOutcome::Sunk(_))).count();
        prop_assert_eq!(sunk, ShipClass::ALL.len() - 1);
        let hits = outcomes.iter().filter(|o| o.ship().is_some()).count();
        prop_assert_eq!(hits, 17);
        prop_assert!(game.board().iter_ships().all(|s| s.sunk()));
    }
}
