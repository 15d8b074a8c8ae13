//! Text blocks for the search and detail screens, built from [`SearchState`].
//!
//! Nothing here touches the terminal; `main` wraps these lines in widgets.

use crate::record::{NbaSeason, NflPlayer, PlayerRecord};
use crate::schema::{League, league_label};
use crate::state::{Screen, SearchState};

pub const TITLE_BANNER: [&str; 4] = [
    r"   ______       __    ______              _            ",
    r"  / __/ /____ _/ /_  /_  __/__ ______ _  (_)__  ___ _/ /",
    r" _\ \/ __/ _ `/ __/   / / / -_) __/  ' \/ / _ \/ _ `/ / ",
    r"/___/\__/\_,_/\__/   /_/  \__/_/ /_/_/_/_/_//_/\_,_/_/  ",
];

/// A fraction in [0, 1] shown as percentage points with two decimals.
pub fn format_pct(fraction: f32) -> String {
    format!("{:.2}", f64::from(fraction) * 100.0)
}

pub fn not_found_message(name: &str) -> String {
    format!("No player found: {name}")
}

pub fn league_selector_text(current: League) -> String {
    let entries = League::ALL
        .iter()
        .map(|league| {
            let label = league_label(*league);
            if *league == current {
                format!("[{label}]")
            } else {
                format!(" {label} ")
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!("Select a league: {entries}")
}

pub fn identity_lines(state: &SearchState) -> Vec<String> {
    let Some(record) = state.selected_record() else {
        return vec!["No player selected".to_string()];
    };
    let mut lines = vec![
        format!("Player: {}", record.player_name()),
        format!("Team: {}", record.team()),
        format!("Position: {}", record.position()),
        format!("Age: {}", record.age()),
    ];
    if let Some(season) = record.season() {
        lines.push(String::new());
        lines.push(format!("Season: {season}"));
        lines.push(format!(
            "{}/{}",
            state.selected + 1,
            state.results.len()
        ));
    }
    lines
}

pub fn stats_title(record: &PlayerRecord) -> String {
    match record.season() {
        Some(season) => format!("Player Stats - {season}"),
        None => "Player Stats".to_string(),
    }
}

pub fn stat_lines(record: &PlayerRecord) -> Vec<String> {
    match record {
        PlayerRecord::Nba(r) => nba_stat_lines(r),
        PlayerRecord::Nfl(r) => nfl_stat_lines(r),
    }
}

fn nba_stat_lines(r: &NbaSeason) -> Vec<String> {
    vec![
        format!("Rank: {}", r.rk),
        format!("Games: {} (Started: {})", r.g, r.gs),
        format!("Minutes: {}", r.mp),
        format!("Points: {}", r.pts),
        format!("FG: {}/{} ({}%)", r.fg, r.fga, format_pct(r.fg_pct)),
        format!(
            "3P: {}/{} ({}%)",
            r.three_p,
            r.three_pa,
            format_pct(r.three_p_pct)
        ),
        format!("2P: {}/{} ({}%)", r.two_p, r.two_pa, format_pct(r.two_p_pct)),
        format!("eFG: {}%", format_pct(r.efg_pct)),
        format!("FT: {}/{} ({}%)", r.ft, r.fta, format_pct(r.ft_pct)),
        format!("Rebounds: {} (O: {}, D: {})", r.trb, r.orb, r.drb),
        format!("Assists: {}", r.ast),
        format!("Steals: {}", r.stl),
        format!("Blocks: {}", r.blk),
        format!("Turnovers: {}", r.tov),
        format!("Fouls: {}", r.pf),
        format!("Awards: {}", r.awards),
    ]
}

fn nfl_stat_lines(r: &NflPlayer) -> Vec<String> {
    vec![
        format!("Height: {}", r.height),
        format!("Weight: {} lbs", r.weight),
        format!("Passing Yards: {}", r.passing_yards),
        format!("Touchdowns: {}", r.touchdowns),
        format!("Interceptions: {}", r.interceptions),
        format!("Completion %: {:.2}%", r.completion_pct),
        format!("Rushing Yards: {}", r.rushing_yards),
        format!("Games Played: {}", r.games_played),
    ]
}

pub fn footer_text(state: &SearchState) -> String {
    match state.screen {
        Screen::Search => "Enter Search | Tab League | Esc/Ctrl+C Quit".to_string(),
        Screen::Detail => {
            let mut hints = vec!["Enter Search", "Esc Back"];
            if state.results.len() > 1 {
                hints.push("←/→ Season");
            }
            hints.push("Ctrl+E Export CSV");
            hints.push("Ctrl+C Quit");
            hints.join(" | ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pct_has_two_decimals() {
        assert_eq!(format_pct(0.486), "48.60");
        assert_eq!(format_pct(0.0), "0.00");
        assert_eq!(format_pct(1.0), "100.00");
        assert_eq!(format_pct(0.5), "50.00");
        assert_eq!(format_pct(0.41), "41.00");
    }

    #[test]
    fn selector_marks_current_league() {
        assert_eq!(
            league_selector_text(League::Nfl),
            "Select a league:  NBA  [NFL]"
        );
    }

    #[test]
    fn nba_stat_lines_cover_box_score() {
        let record = PlayerRecord::Nba(NbaSeason {
            season: "2023-24".to_string(),
            fg: 685,
            fga: 1269,
            fg_pct: 0.54,
            ft: 315.0,
            fta: 420,
            ft_pct: 0.75,
            pts: 1834,
            awards: "AS".to_string(),
            ..NbaSeason::default()
        });
        let lines = stat_lines(&record);
        assert!(lines.contains(&"FG: 685/1269 (54.00%)".to_string()));
        assert!(lines.contains(&"FT: 315/420 (75.00%)".to_string()));
        assert!(lines.contains(&"Points: 1834".to_string()));
        assert!(lines.contains(&"Awards: AS".to_string()));
        assert_eq!(stats_title(&record), "Player Stats - 2023-24");
    }

    #[test]
    fn identity_without_results() {
        let state = SearchState::new();
        assert_eq!(identity_lines(&state), vec!["No player selected".to_string()]);
    }
}
