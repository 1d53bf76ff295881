//! Raw table cells and numeric coercion
//!
//! Numeric columns hold whatever was typed into the table or read back from
//! disk. Nothing is rejected on the way in; values are only interpreted as
//! numbers when a derivation asks for them via [`Cell::number_or`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Largest integer an f64 holds exactly (2^53)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A single value in a numeric column
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Cell {
    /// Missing or null
    #[default]
    Empty,
    Number(f64),
    /// Free text, possibly numeric-looking ("200") or not ("abc")
    Text(String),
}

impl Cell {
    /// Numeric value of the cell, or `default` when it holds nothing usable.
    ///
    /// Numeric-looking text parses the same as the literal number. The result
    /// is always finite.
    pub fn number_or(&self, default: f64) -> f64 {
        let parsed = match self {
            Cell::Empty => None,
            Cell::Number(n) => Some(*n),
            Cell::Text(text) => text.trim().parse::<f64>().ok(),
        };
        parsed.filter(|n| n.is_finite()).unwrap_or(default)
    }
}

/// Derived values must stay finite; an overflowed result counts as zero.
/// Negative zero (e.g. `0 × -45000`) is folded into zero.
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value + 0.0
    } else {
        0.0
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        value.map(Cell::Number).unwrap_or_default()
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<Value> for Cell {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Cell::Empty,
            Value::Bool(flag) => Cell::Number(if flag { 1.0 } else { 0.0 }),
            Value::Number(n) => n.as_f64().map(Cell::Number).unwrap_or_default(),
            Value::String(text) => Cell::Text(text),
            other => Cell::Text(other.to_string()),
        }
    }
}

impl From<Cell> for Value {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => Value::Null,
            // Whole amounts are written as integers to keep the files readable
            Cell::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER => {
                Value::from(n as i64)
            }
            Cell::Number(n) => Value::from(n),
            Cell::Text(text) => Value::String(text),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(text) => f.write_str(text),
        }
    }
}

/// Text column reader: null reads as empty, other scalars as their JSON text
pub(crate) fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

/// Derived column reader. Stored values are informational only; anything
/// that is not a finite number reads as "not yet derived".
pub(crate) fn read_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Cell::deserialize(deserializer)? {
        Cell::Number(n) if n.is_finite() => Some(n),
        _ => None,
    })
}

/// Derived column writer, same integer rendering as [`Cell`]
pub(crate) fn write_amount<S>(amount: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match amount {
        Some(n) => Value::from(Cell::Number(*n)).serialize(serializer),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_text_matches_literal() {
        assert_eq!(Cell::from("200").number_or(0.0), Cell::Number(200.0).number_or(0.0));
        assert_eq!(Cell::from(" 45000.5 ").number_or(0.0), 45000.5);
    }

    #[test]
    fn test_unusable_values_take_default() {
        assert_eq!(Cell::from("abc").number_or(0.0), 0.0);
        assert_eq!(Cell::from("abc").number_or(1.0), 1.0);
        assert_eq!(Cell::Empty.number_or(1.0), 1.0);
        assert_eq!(Cell::from("").number_or(0.0), 0.0);
        assert_eq!(Cell::from("1,000").number_or(0.0), 0.0);
        assert_eq!(Cell::from("NaN").number_or(0.0), 0.0);
        assert_eq!(Cell::from("inf").number_or(0.0), 0.0);
        assert_eq!(Cell::Number(f64::NAN).number_or(7.0), 7.0);
    }

    #[test]
    fn test_json_scalars_are_accepted() {
        let cells: Vec<Cell> =
            serde_json::from_str(r#"[null, 200, 12.5, "80", true, [1, 2]]"#).unwrap();
        assert_eq!(cells[0], Cell::Empty);
        assert_eq!(cells[1], Cell::Number(200.0));
        assert_eq!(cells[2], Cell::Number(12.5));
        assert_eq!(cells[3], Cell::Text("80".to_string()));
        assert_eq!(cells[4], Cell::Number(1.0));
        assert_eq!(cells[5], Cell::Text("[1,2]".to_string()));
        assert_eq!(cells[5].number_or(0.0), 0.0);
    }

    #[test]
    fn test_whole_numbers_written_as_integers() {
        let json = serde_json::to_string(&vec![
            Cell::Number(45000.0),
            Cell::Number(0.5),
            Cell::Empty,
            Cell::from("x"),
        ])
        .unwrap();
        assert_eq!(json, r#"[45000,0.5,null,"x"]"#);
    }

    #[test]
    fn test_finite_or_zero() {
        assert_eq!(finite_or_zero(12.5), 12.5);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert!(finite_or_zero(-0.0).is_sign_positive());
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::Number(200.0).to_string(), "200");
        assert_eq!(Cell::Empty.to_string(), "");
        assert_eq!(Cell::from("n/a").to_string(), "n/a");
    }
}
