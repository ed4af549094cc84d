use crate::config::{AppConfig, DisplayConfig};
use crate::game::{Flash, GameOutcome, GameState};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

use super::board_widget::visible_flash;
use super::grid::GridLayout;

pub struct App {
    game_state: GameState,
    display: DisplayConfig,
    layout: Option<GridLayout>,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            game_state: GameState::with_start(config.game.start),
            display: config.display.clone(),
            layout: None,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop. Blocks on terminal events until a quit key.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: std::error::Error + Send + Sync + 'static,
    {
        info!(start = self.game_state.start().name(), "Starting game loop");

        let mut dirty = true;
        while !self.should_quit {
            if dirty {
                self.refresh(terminal)?;
            }
            dirty = self.handle_event(event::read()?);
        }

        info!("Quit requested");
        Ok(())
    }

    /// Settle the round and redraw until no timed effect is pending.
    fn refresh<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: std::error::Error + Send + Sync + 'static,
    {
        let mut dirty = true;
        while dirty {
            let finished = self.game_state.settle();
            self.draw(terminal)?;
            dirty = self.end_frame();

            if let Some(outcome) = finished {
                self.finish_round(outcome);
                dirty = true;
            }
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: std::error::Error + Send + Sync + 'static,
    {
        let mut layout = None;
        terminal
            .draw(|f| {
                layout = super::game_view::render(f, &self.game_state, &self.display, &self.message)
            })
            .map_err(io::Error::other)?;
        self.layout = layout;
        Ok(())
    }

    /// Hold a frame that showed a flash, then drop the flashes.
    /// Returns true when the screen needs to be drawn again.
    fn end_frame(&mut self) -> bool {
        let delay = self.flash_delay();
        self.game_state.clear_flashes();

        match delay {
            Some(delay) => {
                debug!(delay_ms = delay.as_millis() as u64, "Holding flash");
                std::thread::sleep(delay);
                true
            }
            None => false,
        }
    }

    /// Longest delay among the flashes the display will show
    fn flash_delay(&self) -> Option<Duration> {
        self.game_state
            .flashes()
            .filter_map(|flash| match visible_flash(flash, &self.display) {
                Flash::Win => Some(self.display.win_delay()),
                Flash::Error => Some(self.display.error_delay()),
                Flash::None => None,
            })
            .max()
    }

    fn finish_round(&mut self, outcome: GameOutcome) {
        self.message = Some(match outcome {
            GameOutcome::Winner { mark, line } => {
                info!(winner = mark.name(), ?line, "Round won");
                format!("{} wins!", mark.name())
            }
            GameOutcome::Draw => {
                info!("Round drawn");
                "It's a draw!".to_string()
            }
        });
        self.game_state.reset();
    }

    /// Apply one terminal event. Returns true when the screen must be
    /// redrawn.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                true
            }
            _ => false,
        }
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                false
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                false
            }
            KeyCode::Char('r') => {
                self.game_state.reset();
                self.message = Some("New game started!".to_string());
                true
            }
            _ => false,
        }
    }

    /// Place a mark where the primary button was released
    fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if mouse.kind != MouseEventKind::Up(MouseButton::Left) {
            return false;
        }
        debug!(x = mouse.column, y = mouse.row, "Left click");

        let Some((row, col)) = self
            .layout
            .and_then(|layout| layout.cell_at(mouse.column, mouse.row))
        else {
            return false;
        };

        self.message = None;
        match self.game_state.place(row, col) {
            Ok(()) => {
                debug!(row, col, "Placed mark\n{}", self.game_state.board());
            }
            Err(err) => {
                debug!(%err, "Placement rejected");
                self.message = Some(format!("Cannot place there: {err}"));
            }
        }
        true
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
