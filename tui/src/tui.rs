//! The interactive terminal interface.
//!
//! Runs the board in the alternate screen: a periodic timer drives
//! `advance` while the simulation runs, and a cursor toggles cells while it
//! is paused. The simulation pauses by itself when the board stalls.

use crate::args::Args;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use golife_lib::Board;
use std::{
    io::{self, Stdout, Write},
    time::{Duration, Instant},
};

const MIN_INTERVAL: u64 = 10;
const MAX_INTERVAL: u64 = 2000;
const INTERVAL_STEP: u64 = 10;

/// How long to sleep in `poll` when there is no timer to honor.
const IDLE_POLL: Duration = Duration::from_millis(250);

const HELP: &str = "[space] run/pause  [n] step  [arrows] cursor  [t] toggle  \
                    [c] clear  [r] randomize  [+/-] speed  [q] quit";

struct App {
    board: Board,
    running: bool,
    generation: u64,
    /// Milliseconds between generations while running.
    interval: u64,
    /// `(column, row)` of the edit cursor.
    cursor: (usize, usize),
    status: String,
    last_tick: Instant,
}

/// Runs the terminal interface until the user quits.
pub(crate) fn run(args: Args) -> io::Result<()> {
    let mut app = App::new(args);
    let mut stdout = io::stdout();

    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    let result = app.event_loop(&mut stdout);
    execute!(stdout, LeaveAlternateScreen, cursor::Show)?;
    terminal::disable_raw_mode()?;

    result
}

impl App {
    fn new(args: Args) -> Self {
        // The config file is not validated like the CLI, so guard the
        // degenerate sizes here.
        let columns = args.columns.max(1);
        let rows = args.rows.max(1);

        let mut board = match args.seed {
            Some(seed) => Board::with_seed(columns, rows, seed),
            None => Board::new(columns, rows),
        };
        if args.randomize {
            board.randomize();
        }

        Self {
            board,
            running: false,
            generation: 0,
            interval: args.interval.clamp(MIN_INTERVAL, MAX_INTERVAL),
            cursor: (0, 0),
            status: String::new(),
            last_tick: Instant::now(),
        }
    }

    fn event_loop(&mut self, out: &mut Stdout) -> io::Result<()> {
        loop {
            self.draw(out)?;

            let timeout = if self.running {
                Duration::from_millis(self.interval).saturating_sub(self.last_tick.elapsed())
            } else {
                IDLE_POLL
            };

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Resize(..) => execute!(out, Clear(ClearType::All))?,
                    _ => (),
                }
            }

            if self.running && self.last_tick.elapsed() >= Duration::from_millis(self.interval) {
                self.last_tick = Instant::now();
                self.step();
            }
        }
    }

    /// Handles one key press. Returns `true` to quit.
    ///
    /// Editing, stepping, clearing and randomizing are only available while
    /// the simulation is paused.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_running(),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.interval = self.interval.saturating_sub(INTERVAL_STEP).max(MIN_INTERVAL);
            }
            KeyCode::Char('-') => {
                self.interval = (self.interval + INTERVAL_STEP).min(MAX_INTERVAL);
            }
            _ if self.running => (),
            KeyCode::Char('n') => self.step(),
            KeyCode::Char('c') => {
                self.board.clear();
                self.generation = 0;
                self.status = String::from("Board cleared...");
            }
            KeyCode::Char('r') => {
                self.board.randomize();
                self.generation = 0;
                self.status = String::from("Cells randomized...");
            }
            KeyCode::Left | KeyCode::Char('h') => self.cursor.0 = self.cursor.0.saturating_sub(1),
            KeyCode::Right | KeyCode::Char('l') => {
                self.cursor.0 = (self.cursor.0 + 1).min(self.board.columns() - 1);
            }
            KeyCode::Up | KeyCode::Char('k') => self.cursor.1 = self.cursor.1.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor.1 = (self.cursor.1 + 1).min(self.board.rows() - 1);
            }
            KeyCode::Char('t') | KeyCode::Char('x') => {
                self.board
                    .toggle_at(self.cursor.0 as isize, self.cursor.1 as isize);
                self.status.clear();
            }
            _ => (),
        }
        false
    }

    fn toggle_running(&mut self) {
        self.running = !self.running;
        if self.running {
            self.last_tick = Instant::now();
            self.status = String::from("Running...");
        } else {
            self.status.clear();
        }
    }

    /// Advances one generation, auto-pausing when the board stalls.
    fn step(&mut self) {
        self.board.advance();
        self.generation += 1;
        if self.board.is_stalled() {
            self.running = false;
            self.status = String::from("Stalled...");
        }
    }

    fn draw(&self, out: &mut Stdout) -> io::Result<()> {
        let rows = self.board.rows() as u16;

        queue!(
            out,
            cursor::MoveTo(0, 0),
            Clear(ClearType::CurrentLine),
            Print(format!(
                "Game of Life  {}x{}  Gen: {}  {} ms  [{}]",
                self.board.columns(),
                self.board.rows(),
                self.generation,
                self.interval,
                if self.running {
                    "Running"
                } else if self.board.is_stalled() {
                    "Stalled"
                } else {
                    "Paused"
                },
            )),
        )?;

        for row in 0..self.board.rows() {
            queue!(out, cursor::MoveTo(0, row as u16 + 1))?;
            for column in 0..self.board.columns() {
                let cell = if self.board.get_at(column as isize, row as isize) {
                    "O "
                } else {
                    "· "
                };
                if !self.running && (column, row) == self.cursor {
                    queue!(
                        out,
                        SetAttribute(Attribute::Reverse),
                        Print(cell),
                        SetAttribute(Attribute::Reset),
                    )?;
                } else {
                    queue!(out, Print(cell))?;
                }
            }
        }

        queue!(
            out,
            cursor::MoveTo(0, rows + 1),
            Clear(ClearType::CurrentLine),
            Print(&self.status),
            cursor::MoveTo(0, rows + 2),
            Clear(ClearType::CurrentLine),
            Print(HELP),
        )?;
        out.flush()
    }
}
