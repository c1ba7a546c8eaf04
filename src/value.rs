//! Leaf values stored in the sequences, the linked list and the general tree.

use std::fmt;
use std::str::FromStr;

/// A value entered by the user: either a number or a piece of text.
///
/// Equality is strict, the way the values are compared when searching:
/// `Value::Number(5.0)` is never equal to `Value::Text("5".into())`.
///```
/// use classic_structures::Value;
///
/// let five: Value = "5".parse().unwrap();
/// assert_eq!(five, Value::Number(5.0));
/// assert_ne!(five, Value::from("5"));
/// assert_eq!(five.to_string(), "5");
///```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Number(_) => None,
            Value::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // `f64` already prints integral values without a fraction
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// Numeric when the whole (trimmed) text is a finite number, text otherwise.
/// Never fails.
impl FromStr for Value {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(Value::Number(n)),
            _ => Ok(Value::Text(s.to_string())),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

#[test]
fn parse_and_display() {
    assert_eq!("2.5".parse::<Value>().unwrap(), Value::Number(2.5));
    assert_eq!(" 7 ".parse::<Value>().unwrap(), Value::Number(7.0));
    assert_eq!("abc".parse::<Value>().unwrap(), Value::from("abc"));
    assert_eq!("NaN".parse::<Value>().unwrap(), Value::from("NaN"));
    assert_eq!(Value::from(-3).to_string(), "-3");
    assert_eq!(Value::from(2.5).to_string(), "2.5");
    assert_eq!(Value::from("x").to_string(), "x");
}
