use crate::config::AppConfig;
use crate::logging;
use crate::tui::results::ResultsState;
use crate::tui::search::SearchState;
use crate::tui::ui;
use crate::{Catalog, SearchSession};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};

pub struct App {
    pub session: SearchSession,

    // Sub-states
    pub search: SearchState,
    pub results: ResultsState,

    tick_rate: Duration,

    // Quit flag
    pub should_quit: bool,
}

impl App {
    pub fn new(catalog: Catalog, config: &AppConfig) -> Self {
        Self {
            session: SearchSession::new(catalog, config),
            search: SearchState::default(),
            results: ResultsState::default(),
            tick_rate: config.tick_rate(),
            should_quit: false,
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> crate::Result<()> {
        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let timeout = self.poll_timeout(Instant::now());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key, Instant::now());
                    }
                }
            }

            self.on_tick(Instant::now());

            if self.should_quit {
                logging::info("TUI", "Quit requested");
                return Ok(());
            }
        }
    }

    /// Wait no longer than the tick, and wake up when a debounce is due
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.session.time_remaining(now) {
            Some(remaining) => remaining.min(self.tick_rate),
            None => self.tick_rate,
        }
    }

    /// Apply a due debounced query. Returns true when results changed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if self.session.tick(now) {
            self.results.reset(self.session.result_count());
            true
        } else {
            false
        }
    }

    fn query_edited(&mut self, now: Instant) {
        if self.session.set_query(self.search.query.clone(), now) {
            self.results.reset(self.session.result_count());
        }
    }

    fn apply_now(&mut self) {
        if self.session.flush() {
            self.results.reset(self.session.result_count());
        }
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Global keys
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                if self.search.focused && !self.search.query.is_empty() {
                    self.search.clear();
                    self.query_edited(now);
                } else if self.search.focused {
                    self.search.focused = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            KeyCode::Tab => {
                self.search.focused = !self.search.focused;
                return;
            }
            _ => {}
        }

        if self.search.focused {
            self.handle_search_key(key, now);
        } else {
            self.handle_results_key(key, now);
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Enter => {
                self.apply_now();
                self.search.focused = false;
            }
            KeyCode::Down => {
                self.search.focused = false;
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            code => {
                if self.search.handle_key(code) {
                    self.query_edited(now);
                }
            }
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent, now: Instant) {
        let total = self.session.result_count();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.results.select_prev(total),
            KeyCode::Down | KeyCode::Char('j') => self.results.select_next(total),
            KeyCode::PageUp => self.results.page_up(total),
            KeyCode::PageDown => self.results.page_down(total),
            KeyCode::Home => self.results.select_first(total),
            KeyCode::End => self.results.select_last(total),

            KeyCode::Char('/') => {
                self.search.focused = true;
            }

            // Any other printable char focuses search and types it
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.focused = true;
                self.search.cursor_pos = self.search.query.len();
                self.search.insert(c);
                self.query_edited(now);
            }

            _ => {}
        }
    }
}
