use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use stat_term::app::App;
use stat_term::config::Config;
use stat_term::state::{NoticeKind, Screen, SearchState};
use stat_term::store::{RecordStore, SqliteStore};
use stat_term::view;

const LOG_FILE: &str = "stat_term.log";

fn main() -> Result<()> {
    let config = Config::from_env();
    let _log_guard = match &config.log_dir {
        Some(dir) => match setup_logging(dir) {
            Ok(guard) => Some(guard),
            Err(err) => {
                eprintln!("warning: file logging disabled: {err:#}");
                None
            }
        },
        None => None,
    };
    tracing::info!(db = %config.db_path.display(), "starting");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let store = SqliteStore::new(config.db_path.clone());
    let mut app = App::new(store, config.export_path.clone());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("terminal loop failed: {err}");
        eprintln!("error: {err}");
    }
    tracing::info!("exiting");
    Ok(())
}

/// File-only logging; the terminal belongs to the UI.
fn setup_logging(dir: &Path) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create log dir {}", dir.display()))?;
    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();
    Ok(guard)
}

fn run_app<B: Backend, S: RecordStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        app.tick(Instant::now());

        terminal.draw(|f| ui(f, &app.state))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, state: &SearchState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.size());

    match state.screen {
        Screen::Search => render_search(frame, chunks[0], state),
        Screen::Detail => render_detail(frame, chunks[0], state),
    }

    let footer = Paragraph::new(view::footer_text(state))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[1]);

    if let Some(notice) = &state.notice {
        render_notice(frame, frame.size(), notice.kind, &notice.message);
    }
}

fn render_search(frame: &mut Frame, area: Rect, state: &SearchState) {
    let width = 62.min(area.width);
    let column = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(column);

    let banner = Paragraph::new(view::TITLE_BANNER.join("\n"))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, rows[1]);

    let leagues = Paragraph::new(view::league_selector_text(state.league))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(leagues, rows[2]);

    render_input(frame, rows[3], state);

    if let Some(err) = &state.error_message {
        let banner = Paragraph::new(err.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red));
        frame.render_widget(banner, rows[4]);
    }
}

fn render_detail(frame: &mut Frame, area: Rect, state: &SearchState) {
    let identity_lines = view::identity_lines(state);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(identity_width(&identity_lines, area.width)),
            Constraint::Min(30),
        ])
        .split(area);

    let identity = Paragraph::new(identity_lines.join("\n"))
        .wrap(Wrap { trim: false })
        .block(Block::default().title("Player").borders(Borders::ALL));
    frame.render_widget(identity, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(columns[1]);

    render_input(frame, right[0], state);

    let Some(record) = state.selected_record() else {
        let empty = Paragraph::new("No player selected")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, right[1]);
        return;
    };
    let stats = Paragraph::new(view::stat_lines(record).join("\n")).block(
        Block::default()
            .title(view::stats_title(record))
            .borders(Borders::ALL),
    );
    frame.render_widget(stats, right[1]);
}

/// Wide enough for the longest identity line plus borders, leaving the
/// stats panel at least 30 columns. Lines that still don't fit wrap.
fn identity_width(lines: &[String], total: u16) -> u16 {
    const MIN_WIDTH: u16 = 24;
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let wanted = (longest as u16).saturating_add(2).max(MIN_WIDTH);
    wanted.min(total.saturating_sub(30).max(MIN_WIDTH))
}

fn render_input(frame: &mut Frame, area: Rect, state: &SearchState) {
    let title = format!("{} player (Enter to search)", league_tag(state));
    let block = Block::default().title(title).borders(Borders::ALL);
    let input = if state.query_text.is_empty() {
        Paragraph::new("Enter Player Name").style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(state.query_text.as_str())
    };
    frame.render_widget(input.block(block), area);

    let typed = state.query_text.chars().count() as u16;
    let max_x = area.x + area.width.saturating_sub(2);
    frame.set_cursor((area.x + 1 + typed).min(max_x), area.y + 1);
}

fn league_tag(state: &SearchState) -> &'static str {
    stat_term::schema::league_label(state.league)
}

fn render_notice(frame: &mut Frame, area: Rect, kind: NoticeKind, message: &str) {
    let popup_area = centered_rect(50, 20, area);
    frame.render_widget(Clear, popup_area);

    let color = match kind {
        NoticeKind::Info => Color::Green,
        NoticeKind::Error => Color::Red,
    };
    let popup = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(popup, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
