/// Storage type of a stats column, as declared in the SQLite table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Integer,
    Real,
}

impl ColumnType {
    fn sql(self) -> &'static str {
        match self {
            ColumnType::Text => "TEXT",
            ColumnType::Integer => "INTEGER",
            ColumnType::Real => "REAL",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    /// Header used for CSV export.
    pub header: &'static str,
    pub ty: ColumnType,
}

const fn text(name: &'static str, header: &'static str) -> Column {
    Column {
        name,
        header,
        ty: ColumnType::Text,
    }
}

const fn int(name: &'static str, header: &'static str) -> Column {
    Column {
        name,
        header,
        ty: ColumnType::Integer,
    }
}

const fn real(name: &'static str, header: &'static str) -> Column {
    Column {
        name,
        header,
        ty: ColumnType::Real,
    }
}

/// Ordered description of one stats table.
///
/// The query text and the row decoder are both derived from `columns`, so the
/// SELECT list and the positions read back can never disagree.
#[derive(Debug)]
pub struct TableSchema {
    pub table: &'static str,
    pub name_column: &'static str,
    pub order_by: Option<&'static str>,
    pub columns: &'static [Column],
}

impl TableSchema {
    pub fn select_sql(&self) -> String {
        let mut sql = format!(
            "SELECT {} FROM {} WHERE {} = ?1",
            self.column_list(),
            self.table,
            self.name_column
        );
        if let Some(order) = self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(order);
        }
        sql
    }

    pub fn create_sql(&self) -> String {
        let cols = self
            .columns
            .iter()
            .map(|c| format!("{} {}", c.name, c.ty.sql()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("CREATE TABLE IF NOT EXISTS {} ({cols})", self.table)
    }

    pub fn insert_sql(&self) -> String {
        let placeholders = (1..=self.columns.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({placeholders})",
            self.table,
            self.column_list()
        )
    }

    pub fn csv_header(&self) -> String {
        self.columns
            .iter()
            .map(|c| c.header)
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    fn column_list(&self) -> String {
        self.columns
            .iter()
            .map(|c| c.name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub static NBA_SEASON_STATS: TableSchema = TableSchema {
    table: "nba_season_player_stats",
    name_column: "player_name",
    order_by: Some("season DESC"),
    columns: &[
        text("season", "Season"),
        int("rk", "Rk"),
        text("player_name", "Player"),
        int("age", "Age"),
        text("team", "Team"),
        text("pos", "Position"),
        int("g", "Games"),
        int("gs", "Games Started"),
        real("mp", "Minutes"),
        int("fg", "FG"),
        int("fga", "FGA"),
        real("fg_pct", "FG%"),
        int("three_p", "3P"),
        int("three_pa", "3PA"),
        real("three_p_pct", "3P%"),
        int("two_p", "2P"),
        int("two_pa", "2PA"),
        real("two_p_pct", "2P%"),
        real("efg_pct", "eFG%"),
        real("ft", "FT"),
        int("fta", "FTA"),
        real("ft_pct", "FT%"),
        int("orb", "ORB"),
        int("drb", "DRB"),
        int("trb", "TRB"),
        int("ast", "AST"),
        int("stl", "STL"),
        int("blk", "BLK"),
        int("tov", "TOV"),
        int("pf", "PF"),
        int("pts", "PTS"),
        text("awards", "Awards"),
    ],
};

pub static NFL_PLAYER_STATS: TableSchema = TableSchema {
    table: "nfl_player_stats",
    name_column: "player_name",
    order_by: None,
    columns: &[
        text("player_name", "Player"),
        text("team", "Team"),
        text("position", "Position"),
        int("age", "Age"),
        text("height", "Height"),
        int("weight", "Weight"),
        int("passing_yards", "Passing Yards"),
        int("touchdowns", "Touchdowns"),
        int("interceptions", "Interceptions"),
        real("completion_pct", "Completion %"),
        int("rushing_yards", "Rushing Yards"),
        int("games_played", "Games Played"),
    ],
};

/// League selector. Each league maps to exactly one stats table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum League {
    #[default]
    Nba,
    Nfl,
}

impl League {
    pub const ALL: [League; 2] = [League::Nba, League::Nfl];

    pub fn schema(self) -> &'static TableSchema {
        match self {
            League::Nba => &NBA_SEASON_STATS,
            League::Nfl => &NFL_PLAYER_STATS,
        }
    }

    pub fn next(self) -> Self {
        match self {
            League::Nba => League::Nfl,
            League::Nfl => League::Nba,
        }
    }
}

pub fn league_label(league: League) -> &'static str {
    match league {
        League::Nba => "NBA",
        League::Nfl => "NFL",
    }
}
