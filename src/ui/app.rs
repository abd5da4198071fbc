//! Main TUI application state and logic

use crate::engine::catalog::AlgorithmInfo;
use crate::engine::errors::EngineError;
use crate::engine::{run_sort, AlgorithmKind};
use crate::input::{Preset, SeededRng};
use crate::trace::SortResult;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Playback intervals selectable with +/-
const SPEED_LEVELS: [(&str, Duration); 5] = [
    ("0.25x", Duration::from_millis(400)),
    ("0.5x", Duration::from_millis(200)),
    ("1x", Duration::from_millis(100)),
    ("2x", Duration::from_millis(50)),
    ("4x", Duration::from_millis(25)),
];

const DEFAULT_SPEED_INDEX: usize = 2;

/// The main application state
pub struct App {
    /// Input array the current trace was generated from
    pub input: Vec<i64>,

    /// Algorithm behind the current trace
    pub algorithm: AlgorithmKind,

    /// The finished trace plus derived stats
    pub result: SortResult,

    /// Read cursor into the trace
    pub cursor: usize,

    /// Preset used by the `r` key to build fresh inputs
    pub preset: Preset,

    /// Generator state carried across regenerations
    pub rng: SeededRng,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time the cursor advanced in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,

    /// Index into [`SPEED_LEVELS`]
    pub speed_index: usize,
}

impl App {
    /// Create a new app by generating the trace for `input` up front.
    pub fn new(
        input: Vec<i64>,
        algorithm: AlgorithmKind,
        preset: Preset,
        rng: SeededRng,
    ) -> Result<Self, EngineError> {
        let result = run_sort(&input, algorithm)?;

        Ok(App {
            input,
            algorithm,
            result,
            cursor: 0,
            preset,
            rng,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
            speed_index: DEFAULT_SPEED_INDEX,
        })
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= self.play_interval() {
                if self.cursor + 1 < self.result.history.len() {
                    self.cursor += 1;
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(25))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn play_interval(&self) -> Duration {
        SPEED_LEVELS[self.speed_index].1
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Main area on top, one-line status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Bars on the left, algorithm info on the right
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
            .split(pane_area);

        let info = AlgorithmInfo::for_kind(self.algorithm);

        if let Some(snapshot) = self.result.history.get(self.cursor) {
            let title = format!("{} ({} elements)", info.name, snapshot.array.len());
            super::panes::render_bars_pane(frame, columns[0], snapshot, &title);
        }

        super::panes::render_info_pane(frame, columns[1], info);

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.cursor,
            self.result.history.len(),
            self.result.stats,
            SPEED_LEVELS[self.speed_index].0,
            self.is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.cursor + 1 < self.result.history.len() {
                        self.cursor += 1;
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                self.is_playing = false;
                let next = self.algorithm.next();
                if self.load(self.input.clone(), next) {
                    self.status_message =
                        format!("Switched to {}", AlgorithmInfo::for_kind(next).name);
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.is_playing = false;
                let fresh = self.preset.generate(&mut self.rng, self.input.len());
                if self.load(fresh, self.algorithm) {
                    self.status_message = "Generated a fresh array".to_string();
                }
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                if self.speed_index + 1 < SPEED_LEVELS.len() {
                    self.speed_index += 1;
                }
                self.status_message = format!("Speed {}", SPEED_LEVELS[self.speed_index].0);
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.speed_index = self.speed_index.saturating_sub(1);
                self.status_message = format!("Speed {}", SPEED_LEVELS[self.speed_index].0);
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        if self.cursor + 1 >= self.result.history.len() {
                            // Restart playback from the top when already done
                            self.cursor = 0;
                        }
                        self.last_play_time = Instant::now();
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                // Jump to end of trace
                self.is_playing = false;
                self.cursor = self.result.history.len().saturating_sub(1);
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                // Jump to start of trace
                self.is_playing = false;
                self.cursor = 0;
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    /// Step forward through the trace
    fn step_forward(&mut self) {
        if self.cursor + 1 < self.result.history.len() {
            self.cursor += 1;
            self.status_message = "Stepped forward".to_string();
        } else {
            self.status_message = "Already at the end of the trace".to_string();
        }
    }

    /// Step backward through the trace
    fn step_backward(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.status_message = "Stepped backward".to_string();
        } else {
            self.status_message = "Already at the beginning of the trace".to_string();
        }
    }

    /// Generate a trace for `input` under `algorithm` and install it.
    /// On failure the previous trace stays live and the error lands in the
    /// status bar.
    fn load(&mut self, input: Vec<i64>, algorithm: AlgorithmKind) -> bool {
        match run_sort(&input, algorithm) {
            Ok(result) => {
                self.input = input;
                self.algorithm = algorithm;
                self.result = result;
                self.cursor = 0;
                true
            }
            Err(e) => {
                self.status_message = format!("{}", e);
                false
            }
        }
    }
}
