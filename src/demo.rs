//! Sample rows for seeding a fresh database.

use crate::record::{NbaSeason, NflPlayer, PlayerRecord};

pub const DEMO_NBA_PLAYER: &str = "LeBron James";

#[allow(clippy::too_many_arguments)]
fn nba(
    season: &str,
    rk: i32,
    age: i32,
    games: (i32, i32),
    mp: f32,
    fg: (i32, i32, f32),
    three: (i32, i32, f32),
    two: (i32, i32, f32),
    efg_pct: f32,
    ft: (f32, i32, f32),
    reb: (i32, i32),
    other: [i32; 6],
    awards: &str,
) -> PlayerRecord {
    let [ast, stl, blk, tov, pf, pts] = other;
    PlayerRecord::Nba(NbaSeason {
        season: season.to_string(),
        rk,
        player_name: DEMO_NBA_PLAYER.to_string(),
        age,
        team: "LAL".to_string(),
        pos: "PF".to_string(),
        g: games.0,
        gs: games.1,
        mp,
        fg: fg.0,
        fga: fg.1,
        fg_pct: fg.2,
        three_p: three.0,
        three_pa: three.1,
        three_p_pct: three.2,
        two_p: two.0,
        two_pa: two.1,
        two_p_pct: two.2,
        efg_pct,
        ft: ft.0,
        fta: ft.1,
        ft_pct: ft.2,
        orb: reb.0,
        drb: reb.1,
        trb: reb.0 + reb.1,
        ast,
        stl,
        blk,
        tov,
        pf,
        pts,
        awards: awards.to_string(),
    })
}

#[allow(clippy::too_many_arguments)]
fn nfl(
    name: &str,
    team: &str,
    age: i32,
    height: &str,
    weight: i32,
    passing: [i32; 3],
    completion_pct: f32,
    rushing_yards: i32,
) -> PlayerRecord {
    let [passing_yards, touchdowns, interceptions] = passing;
    PlayerRecord::Nfl(NflPlayer {
        player_name: name.to_string(),
        team: team.to_string(),
        position: "QB".to_string(),
        age,
        height: height.to_string(),
        weight,
        passing_yards,
        touchdowns,
        interceptions,
        completion_pct,
        rushing_yards,
        games_played: 16,
    })
}

/// Three LeBron James seasons (inserted oldest first) and two quarterbacks.
pub fn demo_records() -> Vec<PlayerRecord> {
    vec![
        nba(
            "2021-22",
            285,
            37,
            (56, 56),
            37.2,
            (640, 1226, 0.524),
            (159, 447, 0.359),
            (481, 779, 0.617),
            0.589,
            (281.0, 374, 0.756),
            (63, 396),
            [349, 73, 59, 196, 121, 1720],
            "AS",
        ),
        nba(
            "2022-23",
            271,
            38,
            (55, 54),
            35.5,
            (609, 1219, 0.5),
            (121, 377, 0.321),
            (488, 842, 0.58),
            0.549,
            (268.0, 350, 0.768),
            (65, 392),
            [375, 50, 32, 178, 88, 1590],
            "AS,NBA3",
        ),
        nba(
            "2023-24",
            270,
            39,
            (71, 71),
            35.3,
            (685, 1269, 0.54),
            (149, 364, 0.41),
            (536, 905, 0.592),
            0.599,
            (315.0, 420, 0.75),
            (61, 457),
            [589, 89, 38, 245, 78, 1834],
            "AS,NBA2",
        ),
        nfl(
            "Jalen Hurts",
            "Philadelphia Eagles",
            26,
            "6'1\"",
            223,
            [3850, 28, 9],
            67.8,
            650,
        ),
        nfl(
            "C.J. Stroud",
            "Houston Texans",
            23,
            "6'3\"",
            218,
            [4200, 32, 10],
            69.2,
            420,
        ),
    ]
}
