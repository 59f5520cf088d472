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
use std::{
    env,
    fs::File,
    io::{self, BufRead, BufReader, Write},
    process,
};

use clap::{App, Arg, ArgMatches};
use log::{debug, error, info, warn, LevelFilter};
use thiserror::Error;

use seabattle::{
    board::{Board, BoardSetup, SetupError},
    game::{Game, GameOverError, GuessOutcome},
};

use crate::{
    input::InputReader,
    report::{show_board, OutcomeLine},
};

mod input;
mod report;

/// Environment variable holding `env_logger` style log filters.
const LOG_ENV: &str = "BATTLESHIP_LOG";

/// Everything that can stop a session early.
#[derive(Debug, Error)]
enum AppError {
    /// The fleet could not be set up. Reported as a diagnostic line.
    #[error(transparent)]
    Setup(#[from] SetupError),

    /// A placement line did not have the shape of a record.
    #[error("malformed placement: {0}")]
    MalformedPlacement(String),

    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    GameOver(#[from] GameOverError),
}

fn main() -> io::Result<()> {
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Places a fleet from a file and plays a file of guesses against it.")
        .arg(
            Arg::with_name("PLACEMENT_FILE")
                .help("ship placements, one `<class> <x1> <y1> <x2> <y2>` per line; read from stdin if omitted")
                .index(1),
        )
        .arg(
            Arg::with_name("GUESS_FILE")
                .help("guesses, one `<x> <y>` per line; read from stdin if omitted")
                .index(2),
        )
        .arg(
            Arg::with_name("show_board")
                .long("show-board")
                .help("print the board once the fleet is placed"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("log more detail to stderr; repeat for more"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&matches, &mut out) {
        Ok(()) => Ok(()),
        Err(err @ AppError::Setup(_)) | Err(err @ AppError::MalformedPlacement(_)) => {
            info!("setup failed: {:?}", err);
            writeln!(out, "ERROR: {}", err)
        }
        Err(err) => {
            out.flush()?;
            error!("{:?}", err);
            eprintln!("battleship: {}", err);
            process::exit(1);
        }
    }
}

/// Set up logging to stderr. Verbosity picks the default level; filters in
/// `BATTLESHIP_LOG` take precedence.
fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    if let Ok(filters) = env::var(LOG_ENV) {
        builder.parse_filters(&filters);
    }
    // Only fails if a logger is already installed.
    let _ = builder.try_init();
}

/// Run one session: place the fleet, then resolve guesses until the input ends or the
/// game is over. The guess file name is only read once setup has succeeded.
fn run<W: Write>(matches: &ArgMatches, out: &mut W) -> Result<(), AppError> {
    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());

    let placements = open(file_name(matches, "PLACEMENT_FILE", &mut input)?)?;
    let board = set_up(placements)?;
    if matches.is_present("show_board") {
        show_board(out, &board)?;
    }

    let guesses = open(file_name(matches, "GUESS_FILE", &mut input)?)?;
    let mut game = Game::new(board);
    play(&mut game, guesses, out)
}

/// Get a file name from the command line, or else the next line of standard input.
fn file_name<B: BufRead>(
    matches: &ArgMatches,
    arg: &str,
    input: &mut InputReader<B>,
) -> io::Result<String> {
    match matches.value_of(arg) {
        Some(path) => Ok(path.to_owned()),
        None => input.read_input(arg),
    }
}

fn open(path: String) -> Result<BufReader<File>, AppError> {
    debug!("opening {}", path);
    match File::open(&path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(source) => Err(AppError::Open { path, source }),
    }
}

/// Read every placement record and place the fleet. Blank lines are skipped.
fn set_up<R: BufRead>(placements: R) -> Result<Board, AppError> {
    let mut setup = BoardSetup::new();
    for line in placements.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = input::parse_placement(&line)
            .ok_or_else(|| AppError::MalformedPlacement(line.trim().to_owned()))?;
        setup.add_ship(record)?;
    }
    Ok(setup.start()?)
}

/// Resolve guesses in order, writing one result per guess line. A line that is not a
/// guess counts as an invalid guess. Stops right after the game is over.
fn play<R: BufRead, W: Write>(game: &mut Game, guesses: R, out: &mut W) -> Result<(), AppError> {
    for line in guesses.lines() {
        let line = line?;
        if line.trim().is_empty() {
            debug!("skipping blank guess line");
            continue;
        }
        let outcome = match input::parse_guess(&line) {
            Some((x, y)) => game.guess(x, y)?,
            None => {
                warn!("malformed guess {:?}", line.trim());
                GuessOutcome::Invalid
            }
        };
        writeln!(out, "{}", OutcomeLine(outcome))?;
        if outcome.is_game_over() {
            break;
        }
    }
    Ok(())
}
