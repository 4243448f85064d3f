//! Line-oriented text front end.
//!
//! Reads one command per line and prints the board after every change. It
//! drives the engine through the same public calls as the terminal UI, so a
//! scripted session reproduces an interactive game exactly.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::error::{CommandError, ConsoleError};
use crate::game::{GameEngine, MoveError, MoveOutcome, Phase, Player, COLS};

pub const HOW_TO_PLAY: &str = "\
Connect Four is a two-player connection game. Players take turns dropping \
their discs into a seven-column, six-row grid. A disc falls straight down to \
the lowest free cell of the chosen column. The first player to line up four \
of their own discs horizontally, vertically or diagonally wins. If the grid \
fills up with no line of four, the game is a draw.";

const COMMANDS: &str = "\
Commands:
  1-7               drop a disc in that column
  r, reset, new     start a new game
  name <1|2> <text> rename a player (blank restores the default)
  h, help           show these instructions
  q, quit, exit     leave";

/// One parsed line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 0-based column
    Drop(usize),
    Reset,
    Name(Player, String),
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        if word.is_empty() {
            return Err(CommandError::Empty);
        }

        if let Ok(number) = word.parse::<i64>() {
            return match usize::try_from(number) {
                Ok(n) if n >= 1 => Ok(Command::Drop(n - 1)),
                _ => Err(CommandError::NonPositiveColumn(word.to_string())),
            };
        }

        match word.to_ascii_lowercase().as_str() {
            "r" | "reset" | "new" => Ok(Command::Reset),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            "name" => {
                let (slot, name) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let player = match slot {
                    "1" => Player::One,
                    "2" => Player::Two,
                    _ => return Err(CommandError::NameUsage),
                };
                Ok(Command::Name(player, name.trim().to_string()))
            }
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

/// Engine errors with columns numbered the way the user typed them.
fn describe_rejection(err: &MoveError) -> String {
    match err {
        MoveError::InvalidColumn { column } => {
            format!("column {} is not on the board (choose 1-{COLS})", column + 1)
        }
        MoveError::ColumnFull { column } => format!("column {} is full", column + 1),
        other => other.to_string(),
    }
}

/// Final phases of the games finished during a session, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub results: Vec<Phase>,
}

impl SessionSummary {
    pub fn wins(&self, player: Player) -> usize {
        self.results
            .iter()
            .filter(|&&phase| phase == Phase::Won(player))
            .count()
    }

    pub fn draws(&self) -> usize {
        self.results
            .iter()
            .filter(|&&phase| phase == Phase::Draw)
            .count()
    }
}

pub struct Console<R, W> {
    engine: GameEngine,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(engine: GameEngine, input: R, output: W) -> Self {
        Console {
            engine,
            input,
            output,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Hand back the engine and the writer once the session is done.
    pub fn into_parts(self) -> (GameEngine, W) {
        (self.engine, self.output)
    }

    /// Play until the input ends or the user quits.
    pub fn run(&mut self) -> Result<SessionSummary, ConsoleError> {
        let mut summary = SessionSummary::default();
        writeln!(self.output, "Connect Four. Type 'help' for commands.")?;

        loop {
            if self.engine.is_over() {
                summary.results.push(self.engine.phase());
                if !self.ask_play_again()? {
                    break;
                }
                self.engine.reset();
                continue;
            }

            self.show_board()?;
            let player = self.engine.current_player();
            write!(
                self.output,
                "{} ({}), choose a column [1-{COLS}]: ",
                self.engine.player_name(player),
                player.symbol()
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };

            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(CommandError::Empty) => {}
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }

        info!(
            games = summary.results.len(),
            draws = summary.draws(),
            "console session finished"
        );
        Ok(summary)
    }

    fn execute(&mut self, command: Command) -> Result<(), ConsoleError> {
        debug!(?command, "console command");
        match command {
            Command::Drop(column) => match self.engine.drop_disc(column) {
                Ok(MoveOutcome::Won { winner, .. }) => {
                    self.show_board()?;
                    writeln!(self.output, "{} wins!", self.engine.player_name(winner))?;
                }
                Ok(MoveOutcome::Draw { .. }) => {
                    self.show_board()?;
                    writeln!(self.output, "It's a draw!")?;
                }
                Ok(MoveOutcome::Placed { .. }) => {}
                Err(err) => writeln!(self.output, "Cannot drop there: {}", describe_rejection(&err))?,
            },
            Command::Reset => {
                self.engine.reset();
                writeln!(self.output, "New game started.")?;
            }
            Command::Name(player, name) => {
                self.engine.set_player_name(player, &name);
                writeln!(
                    self.output,
                    "Player {} is now {}.",
                    match player {
                        Player::One => 1,
                        Player::Two => 2,
                    },
                    self.engine.player_name(player)
                )?;
            }
            Command::Help => {
                writeln!(self.output, "{HOW_TO_PLAY}\n\n{COMMANDS}")?;
            }
            Command::Quit => {}
        }
        Ok(())
    }

    fn ask_play_again(&mut self) -> Result<bool, ConsoleError> {
        write!(self.output, "Play again? [y/n]: ")?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }

    fn show_board(&mut self) -> Result<(), ConsoleError> {
        write!(self.output, "\n{}", self.engine.board())?;
        Ok(())
    }

    /// Next line without its terminator, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
