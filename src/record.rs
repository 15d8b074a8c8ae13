use std::fmt;

use rusqlite::ToSql;
use rusqlite::types::{ToSqlOutput, Value};

use crate::schema::{League, TableSchema};

/// One decoded column value, in the storage type its column declares.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i32),
    Real(f32),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Real(v) => write!(f, "{v}"),
        }
    }
}

impl ToSql for FieldValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            FieldValue::Text(s) => ToSqlOutput::from(s.as_str()),
            FieldValue::Int(v) => ToSqlOutput::from(*v),
            FieldValue::Real(v) => ToSqlOutput::from(f64::from(*v)),
        })
    }
}

/// Reads columns out of one fetched row, resolving each name to the position
/// the schema gave it in the SELECT list.
///
/// NULL and unconvertible values fall back to the zero value of the field.
pub struct FieldReader<'a> {
    schema: &'static TableSchema,
    values: &'a [Value],
}

impl<'a> FieldReader<'a> {
    pub fn new(schema: &'static TableSchema, values: &'a [Value]) -> Self {
        Self { schema, values }
    }

    fn value(&self, name: &str) -> Option<&'a Value> {
        let idx = self.schema.position(name);
        debug_assert!(idx.is_some(), "column {name} missing from {}", self.schema.table);
        self.values.get(idx?)
    }

    pub fn text(&self, name: &str) -> String {
        match self.value(name) {
            Some(Value::Text(s)) => s.clone(),
            Some(Value::Integer(v)) => v.to_string(),
            Some(Value::Real(v)) => v.to_string(),
            Some(Value::Blob(bytes)) => String::from_utf8_lossy(bytes).into_owned(),
            Some(Value::Null) | None => String::new(),
        }
    }

    pub fn int(&self, name: &str) -> i32 {
        match self.value(name) {
            Some(Value::Integer(v)) => *v as i32,
            Some(Value::Real(v)) => *v as i32,
            Some(Value::Text(s)) => s.trim().parse::<f64>().map(|v| v as i32).unwrap_or(0),
            _ => 0,
        }
    }

    /// Reals are read at double precision and narrowed.
    pub fn real(&self, name: &str) -> f32 {
        match self.value(name) {
            Some(Value::Real(v)) => *v as f32,
            Some(Value::Integer(v)) => *v as f32,
            Some(Value::Text(s)) => s.trim().parse::<f64>().map(|v| v as f32).unwrap_or(0.0),
            _ => 0.0,
        }
    }
}

/// One NBA season line for a player.
///
/// Percentages (`*_pct`) are fractions in [0, 1].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NbaSeason {
    pub season: String,
    pub rk: i32,
    pub player_name: String,
    pub age: i32,
    pub team: String,
    pub pos: String,
    pub g: i32,
    pub gs: i32,
    pub mp: f32,
    pub fg: i32,
    pub fga: i32,
    pub fg_pct: f32,
    pub three_p: i32,
    pub three_pa: i32,
    pub three_p_pct: f32,
    pub two_p: i32,
    pub two_pa: i32,
    pub two_p_pct: f32,
    pub efg_pct: f32,
    pub ft: f32,
    pub fta: i32,
    pub ft_pct: f32,
    pub orb: i32,
    pub drb: i32,
    pub trb: i32,
    pub ast: i32,
    pub stl: i32,
    pub blk: i32,
    pub tov: i32,
    pub pf: i32,
    pub pts: i32,
    pub awards: String,
}

impl NbaSeason {
    pub fn decode(r: &FieldReader<'_>) -> Self {
        Self {
            season: r.text("season"),
            rk: r.int("rk"),
            player_name: r.text("player_name"),
            age: r.int("age"),
            team: r.text("team"),
            pos: r.text("pos"),
            g: r.int("g"),
            gs: r.int("gs"),
            mp: r.real("mp"),
            fg: r.int("fg"),
            fga: r.int("fga"),
            fg_pct: r.real("fg_pct"),
            three_p: r.int("three_p"),
            three_pa: r.int("three_pa"),
            three_p_pct: r.real("three_p_pct"),
            two_p: r.int("two_p"),
            two_pa: r.int("two_pa"),
            two_p_pct: r.real("two_p_pct"),
            efg_pct: r.real("efg_pct"),
            ft: r.real("ft"),
            fta: r.int("fta"),
            ft_pct: r.real("ft_pct"),
            orb: r.int("orb"),
            drb: r.int("drb"),
            trb: r.int("trb"),
            ast: r.int("ast"),
            stl: r.int("stl"),
            blk: r.int("blk"),
            tov: r.int("tov"),
            pf: r.int("pf"),
            pts: r.int("pts"),
            awards: r.text("awards"),
        }
    }

    /// Values in schema column order.
    pub fn values(&self) -> Vec<FieldValue> {
        use FieldValue::{Int, Real, Text};
        vec![
            Text(self.season.clone()),
            Int(self.rk),
            Text(self.player_name.clone()),
            Int(self.age),
            Text(self.team.clone()),
            Text(self.pos.clone()),
            Int(self.g),
            Int(self.gs),
            Real(self.mp),
            Int(self.fg),
            Int(self.fga),
            Real(self.fg_pct),
            Int(self.three_p),
            Int(self.three_pa),
            Real(self.three_p_pct),
            Int(self.two_p),
            Int(self.two_pa),
            Real(self.two_p_pct),
            Real(self.efg_pct),
            Real(self.ft),
            Int(self.fta),
            Real(self.ft_pct),
            Int(self.orb),
            Int(self.drb),
            Int(self.trb),
            Int(self.ast),
            Int(self.stl),
            Int(self.blk),
            Int(self.tov),
            Int(self.pf),
            Int(self.pts),
            Text(self.awards.clone()),
        ]
    }
}

/// NFL career line. `completion_pct` is already in percentage points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NflPlayer {
    pub player_name: String,
    pub team: String,
    pub position: String,
    pub age: i32,
    pub height: String,
    pub weight: i32,
    pub passing_yards: i32,
    pub touchdowns: i32,
    pub interceptions: i32,
    pub completion_pct: f32,
    pub rushing_yards: i32,
    pub games_played: i32,
}

impl NflPlayer {
    pub fn decode(r: &FieldReader<'_>) -> Self {
        Self {
            player_name: r.text("player_name"),
            team: r.text("team"),
            position: r.text("position"),
            age: r.int("age"),
            height: r.text("height"),
            weight: r.int("weight"),
            passing_yards: r.int("passing_yards"),
            touchdowns: r.int("touchdowns"),
            interceptions: r.int("interceptions"),
            completion_pct: r.real("completion_pct"),
            rushing_yards: r.int("rushing_yards"),
            games_played: r.int("games_played"),
        }
    }

    pub fn values(&self) -> Vec<FieldValue> {
        use FieldValue::{Int, Real, Text};
        vec![
            Text(self.player_name.clone()),
            Text(self.team.clone()),
            Text(self.position.clone()),
            Int(self.age),
            Text(self.height.clone()),
            Int(self.weight),
            Int(self.passing_yards),
            Int(self.touchdowns),
            Int(self.interceptions),
            Real(self.completion_pct),
            Int(self.rushing_yards),
            Int(self.games_played),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerRecord {
    Nba(NbaSeason),
    Nfl(NflPlayer),
}

impl PlayerRecord {
    /// Decodes a row fetched with `league.schema().select_sql()`.
    pub fn decode(league: League, values: &[Value]) -> Self {
        let reader = FieldReader::new(league.schema(), values);
        match league {
            League::Nba => PlayerRecord::Nba(NbaSeason::decode(&reader)),
            League::Nfl => PlayerRecord::Nfl(NflPlayer::decode(&reader)),
        }
    }

    pub fn league(&self) -> League {
        match self {
            PlayerRecord::Nba(_) => League::Nba,
            PlayerRecord::Nfl(_) => League::Nfl,
        }
    }

    pub fn schema(&self) -> &'static TableSchema {
        self.league().schema()
    }

    pub fn player_name(&self) -> &str {
        match self {
            PlayerRecord::Nba(r) => &r.player_name,
            PlayerRecord::Nfl(r) => &r.player_name,
        }
    }

    pub fn team(&self) -> &str {
        match self {
            PlayerRecord::Nba(r) => &r.team,
            PlayerRecord::Nfl(r) => &r.team,
        }
    }

    pub fn position(&self) -> &str {
        match self {
            PlayerRecord::Nba(r) => &r.pos,
            PlayerRecord::Nfl(r) => &r.position,
        }
    }

    pub fn age(&self) -> i32 {
        match self {
            PlayerRecord::Nba(r) => r.age,
            PlayerRecord::Nfl(r) => r.age,
        }
    }

    pub fn season(&self) -> Option<&str> {
        match self {
            PlayerRecord::Nba(r) => Some(&r.season),
            PlayerRecord::Nfl(_) => None,
        }
    }

    pub fn values(&self) -> Vec<FieldValue> {
        match self {
            PlayerRecord::Nba(r) => r.values(),
            PlayerRecord::Nfl(r) => r.values(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnType;

    fn value_matches(ty: ColumnType, value: &FieldValue) -> bool {
        matches!(
            (ty, value),
            (ColumnType::Text, FieldValue::Text(_))
                | (ColumnType::Integer, FieldValue::Int(_))
                | (ColumnType::Real, FieldValue::Real(_))
        )
    }

    #[test]
    fn values_follow_schema_columns() {
        for league in League::ALL {
            let record = PlayerRecord::decode(league, &[]);
            let values = record.values();
            let columns = league.schema().columns;
            assert_eq!(values.len(), columns.len(), "{league:?}");
            for (col, value) in columns.iter().zip(&values) {
                assert!(value_matches(col.ty, value), "{} has {value:?}", col.name);
            }
        }
    }

    #[test]
    fn decode_reads_every_column_by_position() {
        // Give every column a distinct value, then check it comes back in
        // the same slot.
        let schema = League::Nba.schema();
        let row: Vec<Value> = schema
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| match col.ty {
                ColumnType::Text => Value::Text(format!("c{i}")),
                ColumnType::Integer => Value::Integer(i as i64 + 100),
                ColumnType::Real => Value::Real(i as f64 + 0.5),
            })
            .collect();
        let record = PlayerRecord::decode(League::Nba, &row);
        for (i, value) in record.values().into_iter().enumerate() {
            let expected = match schema.columns[i].ty {
                ColumnType::Text => FieldValue::Text(format!("c{i}")),
                ColumnType::Integer => FieldValue::Int(i as i32 + 100),
                ColumnType::Real => FieldValue::Real(i as f32 + 0.5),
            };
            assert_eq!(value, expected, "column {}", schema.columns[i].name);
        }
    }

    #[test]
    fn nulls_and_bad_values_default_to_zero() {
        let schema = League::Nfl.schema();
        let mut row = vec![Value::Null; schema.columns.len()];
        row[3] = Value::Text("n/a".to_string());
        row[9] = Value::Text("67.8".to_string());
        row[11] = Value::Real(16.9);
        let PlayerRecord::Nfl(player) = PlayerRecord::decode(League::Nfl, &row) else {
            panic!("expected an nfl record");
        };
        assert_eq!(player.player_name, "");
        assert_eq!(player.age, 0);
        assert!((player.completion_pct - 67.8).abs() < 1e-4);
        assert_eq!(player.games_played, 16);
        assert_eq!(player.weight, 0);
    }

    #[test]
    fn display_uses_plain_decimal_text() {
        assert_eq!(FieldValue::Real(0.486).to_string(), "0.486");
        assert_eq!(FieldValue::Real(35.5).to_string(), "35.5");
        assert_eq!(FieldValue::Int(1834).to_string(), "1834");
    }
}
