use crate::domain::model::Point;
use std::fmt;

/// A loosely typed value, used to show matching on the kind of a value
/// together with guards on its contents.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Decimal(f64),
    Text(String),
    Flag(bool),
    Coordinates(Point),
    Nothing,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Decimal(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Flag(v)
    }
}

impl From<Point> for Value {
    fn from(v: Point) -> Self {
        Value::Coordinates(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Nothing, Into::into)
    }
}

/// Arms are checked top to bottom: negative integer, integer, decimal,
/// blank text, text, flag, origin point, point, nothing.
pub fn describe_value(value: &Value) -> String {
    match value {
        Value::Int(n) if *n < 0 => format!("negative integer {}", n),
        Value::Int(n) => format!("integer {}", n),
        Value::Decimal(d) => format!("decimal {:.2}", d),
        Value::Text(s) if s.trim().is_empty() => "blank text".to_string(),
        Value::Text(s) => format!("text \"{}\" ({} chars)", s, s.chars().count()),
        Value::Flag(b) => format!("flag {}", if *b { "on" } else { "off" }),
        Value::Coordinates(p) if p.is_origin() => "point at the origin".to_string(),
        Value::Coordinates(p) => format!("point ({}, {})", p.x(), p.y()),
        Value::Nothing => "nothing".to_string(),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe_value(self))
    }
}
