use std::cell::{Cell, RefCell};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use stat_term::app::App;
use stat_term::demo::{DEMO_NBA_PLAYER, demo_records};
use stat_term::record::{NbaSeason, PlayerRecord};
use stat_term::schema::League;
use stat_term::state::{Screen, SearchState};
use stat_term::store::{self, RecordStore, SqliteStore, StoreError};
use stat_term::view;

/// In-memory store that records every call it receives.
#[derive(Default)]
struct FakeStore {
    records: Vec<PlayerRecord>,
    calls: Cell<usize>,
    last_query: RefCell<Option<(League, String)>>,
}

impl RecordStore for FakeStore {
    fn search(&self, league: League, name: &str) -> Result<Vec<PlayerRecord>, StoreError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_query.borrow_mut() = Some((league, name.to_string()));
        Ok(self
            .records
            .iter()
            .filter(|r| r.league() == league && r.player_name() == name)
            .cloned()
            .collect())
    }
}

fn seasons(count: usize) -> Vec<PlayerRecord> {
    (0..count)
        .map(|i| {
            PlayerRecord::Nba(NbaSeason {
                season: format!("20{:02}-{:02}", 23 - i, 24 - i),
                player_name: "Test Player".to_string(),
                pts: 1000 + i as i32,
                ..NbaSeason::default()
            })
        })
        .collect()
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text<S: RecordStore>(app: &mut App<S>, text: &str) {
    for ch in text.chars() {
        app.on_key(key(KeyCode::Char(ch)));
    }
}

#[test]
fn navigation_clamps_at_both_ends() {
    let mut state = SearchState::new();
    state.apply_search("Test Player", Ok(seasons(5)));
    assert_eq!(state.screen, Screen::Detail);
    assert_eq!(state.selected, 0);

    state.select_prev();
    assert_eq!(state.selected, 0);

    for _ in 0..4 {
        state.select_next();
    }
    assert_eq!(state.selected, 4);
    state.select_next();
    assert_eq!(state.selected, 4);

    for step in [1i32, -1, -1, 1, 1, 1, 1, 1, -1, -1, -1, -1, -1, -1, -1] {
        if step > 0 {
            state.select_next();
        } else {
            state.select_prev();
        }
        assert!(state.selected < state.results.len());
    }
}

#[test]
fn new_results_reset_the_cursor() {
    let mut state = SearchState::new();
    state.apply_search("Test Player", Ok(seasons(5)));
    state.select_next();
    state.select_next();
    assert_eq!(state.selected, 2);

    state.apply_search("Test Player", Ok(seasons(3)));
    assert_eq!(state.selected, 0);
    assert_eq!(state.results.len(), 3);
}

#[test]
fn empty_result_reports_not_found() {
    let mut state = SearchState::new();
    state.apply_search("Test Player", Ok(seasons(2)));
    state.apply_search("Ghost", Ok(Vec::new()));

    assert_eq!(state.screen, Screen::Search);
    assert!(state.results.is_empty());
    assert_eq!(state.error_message.as_deref(), Some("No player found: Ghost"));
    assert_eq!(view::not_found_message("Ghost"), "No player found: Ghost");
}

#[test]
fn back_keeps_results_and_error() {
    let mut state = SearchState::new();
    state.apply_search("Ghost", Ok(Vec::new()));
    state.back();
    assert_eq!(state.error_message.as_deref(), Some("No player found: Ghost"));

    state.apply_search("Test Player", Ok(seasons(2)));
    state.select_next();
    state.back();
    assert_eq!(state.screen, Screen::Search);
    assert_eq!(state.results.len(), 2);
    assert_eq!(state.selected, 1);
    assert_eq!(state.error_message, None);
}

#[test]
fn blank_submit_never_calls_the_store() {
    let mut app = App::new(FakeStore::default(), None);
    app.on_key(key(KeyCode::Enter));
    type_text(&mut app, "   ");
    let before = app.state.clone();
    app.on_key(key(KeyCode::Enter));

    assert_eq!(app.store().calls.get(), 0);
    assert_eq!(app.state.screen, before.screen);
    assert_eq!(app.state.error_message, before.error_message);
    assert!(app.state.results.is_empty());
}

#[test]
fn submit_trims_and_uses_selected_league() {
    let store = FakeStore {
        records: demo_records(),
        ..FakeStore::default()
    };
    let mut app = App::new(store, None);
    app.on_key(key(KeyCode::Tab));
    type_text(&mut app, " C.J. Stroud ");
    app.on_key(key(KeyCode::Enter));

    assert_eq!(
        *app.store().last_query.borrow(),
        Some((League::Nfl, "C.J. Stroud".to_string()))
    );
    assert_eq!(app.state.screen, Screen::Detail);
    assert_eq!(app.state.results.len(), 1);
}

#[test]
fn resubmit_from_detail_replaces_results() {
    let mut records = seasons(4);
    records.extend(demo_records());
    let store = FakeStore {
        records,
        ..FakeStore::default()
    };
    let mut app = App::new(store, None);
    type_text(&mut app, "Test Player");
    app.on_key(key(KeyCode::Enter));
    app.on_key(key(KeyCode::Right));
    app.on_key(key(KeyCode::Right));
    assert_eq!(app.state.selected, 2);

    app.on_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
    type_text(&mut app, DEMO_NBA_PLAYER);
    app.on_key(key(KeyCode::Enter));
    assert_eq!(app.state.screen, Screen::Detail);
    assert_eq!(app.state.selected, 0);
    assert_eq!(app.state.results.len(), 3);
    assert_eq!(app.state.results[0].player_name(), DEMO_NBA_PLAYER);
}

#[test]
fn esc_goes_back_then_quits() {
    let store = FakeStore {
        records: seasons(1),
        ..FakeStore::default()
    };
    let mut app = App::new(store, None);
    type_text(&mut app, "Test Player");
    app.on_key(key(KeyCode::Enter));
    assert_eq!(app.state.screen, Screen::Detail);

    app.on_key(key(KeyCode::Esc));
    assert_eq!(app.state.screen, Screen::Search);
    assert!(!app.should_quit);
    app.on_key(key(KeyCode::Esc));
    assert!(app.should_quit);
}

#[test]
fn lebron_three_seasons_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stat-term.db");
    let conn = store::open_db(&path).unwrap();
    for record in demo_records() {
        store::insert_record(&conn, &record).unwrap();
    }
    drop(conn);

    let mut app = App::new(SqliteStore::new(path), None);
    type_text(&mut app, "LeBron James");
    app.on_key(key(KeyCode::Enter));

    assert_eq!(app.state.screen, Screen::Detail);
    assert_eq!(app.state.selected, 0);
    let identity = view::identity_lines(&app.state);
    assert!(identity.contains(&"Team: LAL".to_string()));
    assert!(identity.contains(&"Season: 2023-24".to_string()));
    let record = app.state.selected_record().unwrap();
    assert!(view::stat_lines(record).contains(&"Points: 1834".to_string()));

    app.on_key(key(KeyCode::Right));
    app.on_key(key(KeyCode::Right));
    assert_eq!(app.state.selected, 2);
    let record = app.state.selected_record().unwrap();
    assert_eq!(record.season(), Some("2021-22"));
    assert!(view::stat_lines(record).contains(&"Points: 1720".to_string()));

    app.on_key(key(KeyCode::Right));
    assert_eq!(app.state.selected, 2);
}

#[test]
fn tab_only_switches_league_on_search_screen() {
    let store = FakeStore {
        records: demo_records(),
        ..FakeStore::default()
    };
    let mut app = App::new(store, None);
    type_text(&mut app, DEMO_NBA_PLAYER);
    app.on_key(key(KeyCode::Enter));
    assert_eq!(app.state.screen, Screen::Detail);

    app.on_key(key(KeyCode::Tab));
    assert_eq!(app.state.league, League::Nba);

    app.on_key(key(KeyCode::Esc));
    app.on_key(key(KeyCode::Tab));
    assert_eq!(app.state.league, League::Nfl);
}

#[test]
fn padded_stored_name_is_not_matched_after_trim() {
    let store = FakeStore {
        records: vec![PlayerRecord::Nba(NbaSeason {
            season: "2023-24".to_string(),
            player_name: " Padded Name ".to_string(),
            ..NbaSeason::default()
        })],
        ..FakeStore::default()
    };
    let mut app = App::new(store, None);
    type_text(&mut app, " Padded Name ");
    app.on_key(key(KeyCode::Enter));

    assert_eq!(
        *app.store().last_query.borrow(),
        Some((League::Nba, "Padded Name".to_string()))
    );
    assert_eq!(app.state.screen, Screen::Search);
    assert_eq!(
        app.state.error_message.as_deref(),
        Some("No player found: Padded Name")
    );
}
