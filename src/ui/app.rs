use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::game::{GameState, MoveError, Outcome, COLS};
use crate::session::GameSession;

const FRAME_POLL: Duration = Duration::from_millis(50);

pub struct App {
    session: GameSession,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(session: GameSession) -> Self {
        App {
            session,
            selected_column: COLS / 2,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            if let Some(state) = self.session.poll_ai(Instant::now()) {
                self.announce(&state);
            }
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(FRAME_POLL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
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
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = (c as u8 - b'1') as usize;
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char('d') => {
                let next = self.session.difficulty().cycle();
                self.session.configure_difficulty(next);
                self.message = Some(format!("Difficulty: {}", next.name()));
            }
            KeyCode::Char('r') => {
                let state = self.session.reset();
                self.message = Some(format!(
                    "New round! {} moves first.",
                    state.current_player().name()
                ));
            }
            _ => {}
        }
    }

    /// Drop the current player's piece into `column`
    fn drop_piece(&mut self, column: usize) {
        if self.session.is_computer_turn() {
            self.message = Some("Computer is thinking...".to_string());
            return;
        }

        match self.session.request_move(column) {
            Ok(state) => self.announce(&state),
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::GameAlreadyOver) => {
                self.message = Some("Game over! Press 'r' to play again.".to_string());
            }
        }
    }

    fn announce(&mut self, state: &GameState) {
        match state.outcome() {
            Outcome::Win(win) => {
                self.message = Some(format!("{} wins!", win.winner.name()));
            }
            Outcome::Draw => {
                self.message = Some("It's a draw!".to_string());
            }
            Outcome::InProgress => {}
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.session,
            self.selected_column,
            &self.message,
        );
    }
}
