use std::path::PathBuf;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::export;
use crate::state::{NoticeKind, Screen, SearchState};
use crate::store::RecordStore;

pub struct App<S: RecordStore> {
    pub state: SearchState,
    pub should_quit: bool,
    store: S,
    export_path: Option<PathBuf>,
}

impl<S: RecordStore> App<S> {
    pub fn new(store: S, export_path: Option<PathBuf>) -> Self {
        Self {
            state: SearchState::new(),
            should_quit: false,
            store,
            export_path,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        self.state.dismiss_error_notice();

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('e') => self.export(Instant::now()),
                KeyCode::Char('u') => self.state.clear_query(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => match self.state.screen {
                Screen::Detail => self.state.back(),
                Screen::Search => self.should_quit = true,
            },
            KeyCode::Tab if self.state.screen == Screen::Search => self.state.cycle_league(),
            KeyCode::Left if self.state.screen == Screen::Detail => self.state.select_prev(),
            KeyCode::Right if self.state.screen == Screen::Detail => self.state.select_next(),
            KeyCode::Backspace => self.state.pop_char(),
            KeyCode::Char(ch) => self.state.push_char(ch),
            _ => {}
        }
    }

    /// Runs the query in the text field. Blank input never reaches the store.
    pub fn submit(&mut self) {
        let Some(name) = self.state.submittable_name() else {
            return;
        };
        let outcome = self.store.search(self.state.league, &name);
        self.state.apply_search(&name, outcome);
    }

    pub fn export(&mut self, now: Instant) {
        if self.state.screen != Screen::Detail {
            return;
        }
        let Some(record) = self.state.selected_record() else {
            return;
        };
        match export::export_selected(self.export_path.as_deref(), record) {
            Ok(path) => {
                let message = format!("Saved to {}", path.display());
                self.state.raise_notice(NoticeKind::Info, message, now);
            }
            Err(err) => {
                tracing::error!("export failed: {err:#}");
                self.state
                    .raise_notice(NoticeKind::Error, format!("Export failed: {err:#}"), now);
            }
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.state.clear_expired_notice(now);
    }
}
