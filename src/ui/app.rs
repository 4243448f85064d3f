use crate::config::UiConfig;
use crate::game::{GameEngine, MoveError, Phase, Player, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;
use tracing::debug;

/// What the keyboard is currently driving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Playing,
    Help,
    EditingNames(NameEditor),
}

/// Draft names while the name dialog is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEditor {
    pub editing: Player,
    pub one: String,
    pub two: String,
}

impl NameEditor {
    fn buffer_mut(&mut self) -> &mut String {
        match self.editing {
            Player::One => &mut self.one,
            Player::Two => &mut self.two,
        }
    }
}

pub struct App {
    engine: GameEngine,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    mode: Mode,
    poll_interval: Duration,
    max_name_len: usize,
}

impl App {
    pub fn new(engine: GameEngine, config: &UiConfig) -> Self {
        App {
            engine,
            selected_column: config.start_column.min(COLS - 1),
            should_quit: false,
            message: None,
            mode: Mode::Playing,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            max_name_len: config.max_name_len,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            Mode::Help => self.mode = Mode::Playing,
            Mode::EditingNames(_) => self.handle_name_key(key),
            Mode::Playing => self.handle_game_key(key),
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        let game_over = self.engine.is_over();
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('y') if game_over => self.new_game(),
            KeyCode::Char('n') if game_over => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < COLS {
                    self.selected_column = column;
                }
                self.drop_disc(column);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_disc(self.selected_column);
            }
            KeyCode::Char('r') => self.new_game(),
            KeyCode::Char('e') => {
                let names = self.engine.names();
                self.mode = Mode::EditingNames(NameEditor {
                    editing: Player::One,
                    one: names.get(Player::One).to_string(),
                    two: names.get(Player::Two).to_string(),
                });
            }
            KeyCode::Char('h') | KeyCode::Char('?') => {
                self.mode = Mode::Help;
            }
            _ => {
                if game_over {
                    self.message = Some(play_again_prompt(&self.engine));
                }
            }
        }
    }

    fn handle_name_key(&mut self, key: KeyEvent) {
        let Mode::EditingNames(editor) = &mut self.mode else {
            return;
        };

        match key.code {
            KeyCode::Esc => self.mode = Mode::Playing,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                editor.editing = editor.editing.other();
            }
            KeyCode::Backspace => {
                editor.buffer_mut().pop();
            }
            KeyCode::Char(c) => {
                let max = self.max_name_len;
                let buffer = editor.buffer_mut();
                if buffer.chars().count() < max {
                    buffer.push(c);
                }
            }
            KeyCode::Enter => {
                let (one, two) = (editor.one.clone(), editor.two.clone());
                self.engine.set_player_name(Player::One, &one);
                self.engine.set_player_name(Player::Two, &two);
                self.mode = Mode::Playing;
                self.message = Some("Names updated.".to_string());
            }
            _ => {}
        }
    }

    fn new_game(&mut self) {
        self.engine.reset();
        self.message = Some("New game started!".to_string());
    }

    /// Drop a disc for the current player
    fn drop_disc(&mut self, column: usize) {
        let outcome = self.engine.drop_disc(column);
        debug!(column, ?outcome, "drop from terminal UI");

        self.message = match outcome {
            Ok(outcome) if outcome.ends_game() => Some(play_again_prompt(&self.engine)),
            Ok(_) => None,
            Err(MoveError::ColumnFull { column }) => {
                Some(format!("Column {} is full!", column + 1))
            }
            Err(MoveError::InvalidColumn { column }) => {
                Some(format!("There is no column {}!", column + 1))
            }
            Err(MoveError::GameAlreadyOver) => Some(play_again_prompt(&self.engine)),
            Err(err @ MoveError::Board(_)) => Some(err.to_string()),
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.engine.current_state(),
            self.selected_column,
            self.message.as_deref(),
            &self.mode,
        );
    }
}

fn play_again_prompt(engine: &GameEngine) -> String {
    let result = match engine.phase() {
        Phase::Won(winner) => format!("{} wins!", engine.player_name(winner)),
        Phase::Draw => "It's a draw!".to_string(),
        Phase::InProgress => return String::new(),
    };
    format!("{result} Play again? (y/n)")
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameEngine::new(), &UiConfig::default())
    }
}
