//! Main TUI application state and logic

use crate::catalog::AlgorithmInfo;
use crate::errors::AlgoError;
use crate::normalize::StepPayload;
use crate::playback::Playback;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Visualization,
    Log,
    Info,
    Details,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: visualization -> log -> details -> info)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Visualization => FocusedPane::Log,
            FocusedPane::Log => FocusedPane::Details,
            FocusedPane::Details => FocusedPane::Info,
            FocusedPane::Info => FocusedPane::Visualization,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Visualization => FocusedPane::Info,
            FocusedPane::Log => FocusedPane::Visualization,
            FocusedPane::Details => FocusedPane::Log,
            FocusedPane::Info => FocusedPane::Details,
        }
    }
}

/// The main application state
pub struct App {
    pub playback: Playback,

    /// Catalog record of the algorithm being played
    pub info: &'static AlgorithmInfo,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub visualization_scroll: usize,
    pub log_scroll: usize,
    pub info_scroll: usize,
    pub details_scroll: usize,

    /// Keep the current step in view in the log until the user scrolls it
    pub log_follows_cursor: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Delay between steps in play mode
    pub step_interval: Duration,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app over `playback`, auto-playing at `speed` steps per second
    pub fn new(playback: Playback, info: &'static AlgorithmInfo, speed: f64) -> Self {
        let status_message = if playback.total_steps() == 0 {
            AlgoError::EmptyTrace.to_string()
        } else {
            String::from("Ready!")
        };
        let speed = if speed.is_finite() && speed > 0.0 { speed } else { 1.0 };
        App {
            playback,
            info,
            focused_pane: FocusedPane::Visualization,
            visualization_scroll: 0,
            log_scroll: 0,
            info_scroll: 0,
            details_scroll: 0,
            log_follows_cursor: true,
            should_quit: false,
            status_message,
            is_playing: false,
            // Very slow speeds overflow Duration; treat them as paused forever
            step_interval: Duration::try_from_secs_f64(1.0 / speed).unwrap_or(Duration::MAX),
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

            if self.is_playing && self.last_play_time.elapsed() >= self.step_interval {
                self.tick();
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance one step in play mode, stopping once the last step is shown
    pub fn tick(&mut self) {
        if self.playback.is_finished() || self.playback.step_forward().is_err() {
            self.is_playing = false;
            self.status_message = "Playback complete".to_string();
            return;
        }
        self.log_follows_cursor = true;
        self.status_message = "Playing...".to_string();
        if self.playback.is_finished() {
            self.is_playing = false;
            self.status_message = "Playback complete".to_string();
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        // Left column: Visualization (top) | Step log (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        // Right column: Details (top) | Algorithm info (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        let current = self.playback.current_step();
        let viz_focused = self.focused_pane == FocusedPane::Visualization;

        match current {
            Some(step) => match &step.payload {
                StepPayload::Graph(graph) => {
                    super::panes::render_graph_pane(frame, left_rows[0], graph, viz_focused)
                }
                _ => super::panes::render_sequence_pane(
                    frame,
                    left_rows[0],
                    step,
                    viz_focused,
                    &mut self.visualization_scroll,
                ),
            },
            None => super::panes::render_log_pane(
                frame,
                left_rows[0],
                &[],
                0,
                viz_focused,
                false,
                &mut self.visualization_scroll,
            ),
        }

        super::panes::render_log_pane(
            frame,
            left_rows[1],
            self.playback.trace().steps(),
            self.playback.displayed_index(),
            self.focused_pane == FocusedPane::Log,
            self.log_follows_cursor,
            &mut self.log_scroll,
        );

        super::panes::render_details_pane(
            frame,
            right_rows[0],
            current,
            self.focused_pane == FocusedPane::Details,
            &mut self.details_scroll,
        );

        super::panes::render_info_pane(
            frame,
            right_rows[1],
            self.info,
            self.focused_pane == FocusedPane::Info,
            &mut self.info_scroll,
        );

        // Render status bar
        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            &self.playback,
            self.is_playing,
        );
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Visualization => &mut self.visualization_scroll,
            FocusedPane::Log => &mut self.log_scroll,
            FocusedPane::Info => &mut self.info_scroll,
            FocusedPane::Details => &mut self.details_scroll,
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.playback.is_finished() || self.playback.step_forward().is_err() {
                        break;
                    }
                    stepped += 1;
                }
                self.log_follows_cursor = true;
                self.status_message = format!("Stepped forward {} step(s)", stepped);
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
            KeyCode::Up => {
                if self.focused_pane == FocusedPane::Log {
                    self.log_follows_cursor = false;
                }
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.focused_pane == FocusedPane::Log {
                    self.log_follows_cursor = false;
                }
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.playback.jump_to_end();
                self.log_follows_cursor = true;
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.playback.rewind_to_start();
                self.log_follows_cursor = true;
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        if self.playback.total_steps() == 0 {
            self.status_message = AlgoError::EmptyTrace.to_string();
            return;
        }
        self.is_playing = !self.is_playing;
        if self.is_playing {
            // Replay from the top when started at the end
            if self.playback.is_finished() {
                self.playback.rewind_to_start();
            }
            self.last_play_time = Instant::now()
                .checked_sub(self.step_interval)
                .unwrap_or(Instant::now());
            self.status_message = "Playing...".to_string();
        } else {
            self.status_message = "Paused".to_string();
        }
    }

    /// Step forward through the trace
    fn step_forward(&mut self) {
        let result = if self.playback.is_finished() && self.playback.total_steps() > 0 {
            Err(AlgoError::AtEnd)
        } else {
            self.playback.step_forward()
        };
        match result {
            Ok(()) => {
                self.log_follows_cursor = true;
                self.status_message = "Stepped forward".to_string();
            }
            Err(e) => {
                self.status_message = format!("Cannot step forward: {}", e);
            }
        }
    }

    /// Step backward through the trace
    fn step_backward(&mut self) {
        // The cursor may sit one past the last step; skip that position so
        // every keypress changes what is shown
        if self.playback.position() >= self.playback.total_steps() {
            self.playback.go_to(self.playback.total_steps().saturating_sub(1));
        }
        match self.playback.step_backward() {
            Ok(()) => {
                self.log_follows_cursor = true;
                self.status_message = "Stepped backward".to_string();
            }
            Err(e) => {
                self.status_message = format!("Cannot step backward: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::sorting::bubble_sort;
    use crate::algorithms::AlgorithmKind;
    use crate::catalog;
    use crate::normalize::{normalize, FamilyTrace};
    use crate::trace::Trace;
    use crossterm::event::KeyModifiers;

    fn app() -> App {
        let trace = normalize(&FamilyTrace::Sort(bubble_sort(&[3.0, 1.0, 2.0])));
        App::new(
            Playback::new(trace),
            catalog::get(AlgorithmKind::BubbleSort),
            10.0,
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_focus_cycle() {
        let mut pane = FocusedPane::Visualization;
        for _ in 0..4 {
            pane = pane.next();
        }
        assert_eq!(pane, FocusedPane::Visualization);
        assert_eq!(pane.next().prev(), pane);
    }

    #[test]
    fn test_arrow_keys_move_cursor() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.playback.position(), 2);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.playback.position(), 1);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.playback.position(), 0);
        assert!(app.status_message.starts_with("Cannot step backward"));
    }

    #[test]
    fn test_enter_and_backspace() {
        let mut app = app();
        let total = app.playback.total_steps();
        press(&mut app, KeyCode::Enter);
        assert!(app.playback.is_finished());
        assert_eq!(app.playback.displayed_index(), total - 1);

        // One press back from the end shows the second-to-last step
        press(&mut app, KeyCode::Left);
        assert_eq!(app.playback.displayed_index(), total - 2);

        press(&mut app, KeyCode::Backspace);
        assert!(app.playback.is_at_start());
    }

    #[test]
    fn test_right_stops_at_last_step() {
        let mut app = app();
        let total = app.playback.total_steps();
        for _ in 0..total + 3 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.playback.displayed_index(), total - 1);
        assert!(app.status_message.starts_with("Cannot step forward"));
    }

    #[test]
    fn test_number_keys_step_n() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.playback.position(), 3);
        assert_eq!(app.status_message, "Stepped forward 3 step(s)");
    }

    #[test]
    fn test_tick_stops_at_end() {
        let mut app = app();
        app.is_playing = true;
        for _ in 0..app.playback.total_steps() + 2 {
            app.tick();
        }
        assert!(!app.is_playing);
        assert!(app.playback.is_finished());
        assert_eq!(app.status_message, "Playback complete");
    }

    #[test]
    fn test_extreme_speeds_do_not_panic() {
        for speed in [1e-20, 5e-324, f64::MIN_POSITIVE] {
            let app = App::new(
                Playback::new(Trace::empty()),
                catalog::get(AlgorithmKind::BubbleSort),
                speed,
            );
            assert_eq!(app.step_interval, Duration::MAX);
        }

        let app = App::new(
            Playback::new(Trace::empty()),
            catalog::get(AlgorithmKind::BubbleSort),
            4.0,
        );
        assert_eq!(app.step_interval, Duration::from_millis(250));
    }

    #[test]
    fn test_empty_trace() {
        let mut app = App::new(
            Playback::new(Trace::empty()),
            catalog::get(AlgorithmKind::LinearSearch),
            1.0,
        );
        assert_eq!(app.status_message, AlgoError::EmptyTrace.to_string());
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.is_playing);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
