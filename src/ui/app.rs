//! Main TUI application state and logic

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::interpreter::io::BufferedIo;
use crate::ui::panes::{self, grid::GridRenderData, StatusRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Delay between steps while auto-playing
const PLAY_INTERVAL: Duration = Duration::from_millis(150);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Grid,
    Stack,
    Terminal,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: grid -> terminal -> stack)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Grid => FocusedPane::Terminal,
            FocusedPane::Terminal => FocusedPane::Stack,
            FocusedPane::Stack => FocusedPane::Grid,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Grid => FocusedPane::Stack,
            FocusedPane::Terminal => FocusedPane::Grid,
            FocusedPane::Stack => FocusedPane::Terminal,
        }
    }
}

/// The main application state
pub struct App {
    /// The interpreter instance, holding the recorded history
    pub interpreter: Interpreter<BufferedIo>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub stack_scroll: usize,
    pub terminal_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Recording ended with an error rather than `@`
    pub stopped_early: bool,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around an interpreter whose run has been recorded
    pub fn new(interpreter: Interpreter<BufferedIo>, stopped_early: bool) -> Self {
        App {
            interpreter,
            focused_pane: FocusedPane::Grid,
            stack_scroll: 0,
            terminal_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            stopped_early,
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= PLAY_INTERVAL {
                if self.interpreter.step_forward().is_ok() {
                    self.status_message = "Playing...".to_string();
                    self.terminal_scroll = usize::MAX;
                } else {
                    // No more steps available
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(20))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Grid and side column on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Grid needs 80 columns plus borders; the stack gets the rest
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Max(82), Constraint::Min(24)])
            .split(pane_area);

        // Left column: Grid (top) | Terminal (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Max(27), Constraint::Min(5)])
            .split(columns[0]);

        let interpreter = &self.interpreter;

        panes::render_grid_pane(
            frame,
            left_rows[0],
            GridRenderData {
                grid: interpreter.grid(),
                original_grid: interpreter.original_grid(),
                cursor: interpreter.cursor(),
                mode: interpreter.mode(),
                profile: interpreter.profile(),
                steps: interpreter.steps(),
            },
            self.focused_pane == FocusedPane::Grid,
        );

        panes::render_terminal_pane(
            frame,
            left_rows[1],
            interpreter.visible_output(),
            self.focused_pane == FocusedPane::Terminal,
            &mut self.terminal_scroll,
        );

        panes::render_stack_pane(
            frame,
            columns[1],
            interpreter.stack(),
            self.focused_pane == FocusedPane::Stack,
            &mut self.stack_scroll,
        );

        panes::render_status_bar(
            frame,
            status_area,
            StatusRenderData {
                message: &self.status_message,
                current_step: interpreter.history_position(),
                total_steps: interpreter.total_snapshots(),
                mode: interpreter.mode(),
                is_halted: interpreter.is_halted(),
                is_playing: self.is_playing,
                stopped_early: self.stopped_early,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).map_or(1, |d| d as usize);
                let mut stepped = 0;
                for _ in 0..n {
                    if self.interpreter.step_forward().is_ok() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.terminal_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Stack => {
                    self.stack_scroll = self.stack_scroll.saturating_sub(1);
                }
                FocusedPane::Terminal => {
                    self.terminal_scroll = self.terminal_scroll.saturating_sub(1);
                }
                FocusedPane::Grid => {}
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Stack => {
                    self.stack_scroll = self.stack_scroll.saturating_add(1);
                }
                FocusedPane::Terminal => {
                    self.terminal_scroll = self.terminal_scroll.saturating_add(1);
                }
                FocusedPane::Grid => {}
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(PLAY_INTERVAL)
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                let _ = self.interpreter.jump_to_end();
                self.status_message = "Jumped to end".to_string();
                self.terminal_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                let _ = self.interpreter.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
                self.terminal_scroll = usize::MAX;
            }
            _ => {}
        }
    }

    /// Step forward in execution
    fn step_forward(&mut self) {
        match self.interpreter.step_forward() {
            Ok(()) => {
                self.status_message = "Stepped forward".to_string();
                // Auto-scroll terminal to bottom
                self.terminal_scroll = usize::MAX;
            }
            Err(RuntimeError::History { message }) => {
                self.status_message = format!("Cannot step forward: {}", message);
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Step backward in execution
    fn step_backward(&mut self) {
        match self.interpreter.step_backward() {
            Ok(()) => {
                self.status_message = "Stepped backward".to_string();
                // Auto-scroll terminal to bottom
                self.terminal_scroll = usize::MAX;
            }
            Err(RuntimeError::History { message }) => {
                self.status_message = format!("Cannot step backward: {}", message);
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }
}
