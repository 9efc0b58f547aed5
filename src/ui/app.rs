use crate::config::AppConfig;
use crate::game::{GameEngine, MoveError, SizeError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    engine: GameEngine,
    selected_column: usize,
    start_column: usize,
    tick_rate: Duration,
    show_column_numbers: bool,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, SizeError> {
        let start_column = config.start_column().min(config.board.width.saturating_sub(1));
        Ok(App {
            engine: config.board.new_game()?,
            selected_column: start_column,
            start_column,
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
            show_column_numbers: config.ui.show_column_numbers,
            should_quit: false,
            message: None,
        })
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

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.tick_rate)? {
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
        // Clear message on any key press
        self.message = None;
        let width = self.engine.board().width();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < width {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='9') => {
                // Digit keys jump straight to a column and drop
                let col = c as usize - '1' as usize;
                if col < width {
                    self.selected_column = col;
                    self.drop_piece();
                }
            }
            KeyCode::Char('r') => {
                self.engine = self.engine.rematch();
                self.selected_column = self.start_column;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.engine.drop_piece(self.selected_column) {
            Ok(placement) => {
                self.message = super::outcome_message(placement.outcome);
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over, press r to restart".to_string());
            }
            Err(err) => {
                self.message = Some(super::rejection_message(&err));
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.engine,
            self.selected_column,
            &self.message,
            self.show_column_numbers,
        );
    }
}
