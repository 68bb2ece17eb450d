//! Parsing command-line arguments.

use crate::config::Config;
use clap::{arg, command, value_parser};

/// A struct to store the parse results.
///
/// Anything not given on the command line falls back to the config file,
/// then to the built-in defaults (a 20x20 board stepped every 150 ms).
pub(crate) struct Args {
    pub(crate) columns: usize,
    pub(crate) rows: usize,
    /// Milliseconds between generations while running.
    pub(crate) interval: u64,
    /// Start from a random board instead of a dead one.
    pub(crate) randomize: bool,
    /// Seed for the board's random source.
    pub(crate) seed: Option<u64>,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Self {
        let defaults = Config::load();
        let matches = command!()
            .long_about(
                "Conway's Game of Life in the terminal\n\
                 \n\
                 The board starts paused. Keys:\n\
                 * [space]/[enter]   start or pause the simulation\n\
                 * [n]               step one generation while paused\n\
                 * arrows or [hjkl]  move the cursor while paused\n\
                 * [t]/[x]           toggle the cell under the cursor\n\
                 * [c]               clear the board\n\
                 * [r]               randomize the board\n\
                 * [+]/[-]           run faster / slower\n\
                 * [q]               quit\n\
                 \n\
                 The simulation pauses by itself when the board stalls, \
                 i.e. when a generation is identical to the one before it.",
            )
            .arg(
                arg!([COLUMNS] "Number of board columns")
                    .value_parser(clap::builder::RangedU64ValueParser::<usize>::new().range(1..)),
            )
            .arg(
                arg!([ROWS] "Number of board rows")
                    .value_parser(clap::builder::RangedU64ValueParser::<usize>::new().range(1..)),
            )
            .arg(
                arg!(-i --interval <MS> "Milliseconds between generations while running")
                    .value_parser(value_parser!(u64).range(1..))
                    .required(false),
            )
            .arg(arg!(-r --randomize "Start from a random board"))
            .arg(
                arg!(--seed <SEED> "Seed the board's random source, for reproducible boards")
                    .value_parser(value_parser!(u64))
                    .required(false),
            )
            .get_matches();

        Self {
            columns: matches
                .get_one("COLUMNS")
                .copied()
                .unwrap_or(defaults.columns),
            rows: matches.get_one("ROWS").copied().unwrap_or(defaults.rows),
            interval: matches
                .get_one("interval")
                .copied()
                .unwrap_or(defaults.interval),
            randomize: matches.get_flag("randomize"),
            seed: matches.get_one("seed").copied(),
        }
    }
}
