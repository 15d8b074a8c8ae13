use std::time::{Duration, Instant};

use thiserror::Error;

use crate::record::PlayerRecord;
use crate::schema::League;
use crate::store::StoreError;

/// How long an export banner stays up.
pub const NOTICE_KEEP: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Search,
    Detail,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("No player found: {0}")]
    NotFound(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub raised_at: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub league: League,
    pub query_text: String,
    pub results: Vec<PlayerRecord>,
    pub selected: usize,
    pub error_message: Option<String>,
    pub screen: Screen,
    pub notice: Option<Notice>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The trimmed query, or `None` when there is nothing to search for.
    pub fn submittable_name(&self) -> Option<String> {
        // Surrounding whitespace is dropped before the exact-match lookup, so
        // a stored name with leading or trailing spaces cannot be found.
        let name = self.query_text.trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }

    /// Replaces the result set with the outcome of a search for `name`.
    pub fn apply_search(&mut self, name: &str, outcome: Result<Vec<PlayerRecord>, StoreError>) {
        self.results.clear();
        self.selected = 0;
        self.error_message = None;

        let err = match outcome {
            Ok(records) if !records.is_empty() => {
                self.results = records;
                self.screen = Screen::Detail;
                return;
            }
            Ok(_) => SearchError::NotFound(name.to_string()),
            Err(err) => SearchError::Store(err),
        };
        tracing::warn!(player = name, "search failed: {err}");
        self.error_message = Some(err.to_string());
        self.screen = Screen::Search;
    }

    pub fn back(&mut self) {
        self.screen = Screen::Search;
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.results.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_record(&self) -> Option<&PlayerRecord> {
        self.results.get(self.selected)
    }

    pub fn cycle_league(&mut self) {
        self.league = self.league.next();
    }

    pub fn push_char(&mut self, ch: char) {
        self.query_text.push(ch);
    }

    pub fn pop_char(&mut self) {
        self.query_text.pop();
    }

    pub fn clear_query(&mut self) {
        self.query_text.clear();
    }

    pub fn raise_notice(&mut self, kind: NoticeKind, message: impl Into<String>, now: Instant) {
        self.notice = Some(Notice {
            kind,
            message: message.into(),
            raised_at: now,
        });
    }

    /// Drops an info notice once it has been up for [`NOTICE_KEEP`].
    /// Error notices stay until the next user action dismisses them.
    pub fn clear_expired_notice(&mut self, now: Instant) {
        let Some(notice) = &self.notice else {
            return;
        };
        if notice.kind == NoticeKind::Info
            && now.saturating_duration_since(notice.raised_at) >= NOTICE_KEEP
        {
            self.notice = None;
        }
    }

    pub fn dismiss_error_notice(&mut self) {
        if matches!(&self.notice, Some(n) if n.kind == NoticeKind::Error) {
            self.notice = None;
        }
    }
}
