use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

/// Cell text treated as missing when a table is loaded from CSV.
pub const NULL_MARKERS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "<NA>", "#N/A",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalType {
    Null,
    Integer,
    Float,
    String,
}

impl LogicalType {
    pub fn is_numeric(&self) -> bool {
        matches!(self, LogicalType::Integer | LogicalType::Float)
    }

    /// Widest type able to hold values of both `self` and `other`.
    pub fn unify(self, other: LogicalType) -> LogicalType {
        match (self, other) {
            (LogicalType::Null, t) | (t, LogicalType::Null) => t,
            (LogicalType::Integer, LogicalType::Integer) => LogicalType::Integer,
            (a, b) if a.is_numeric() && b.is_numeric() => LogicalType::Float,
            _ => LogicalType::String,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Null,
    Int64(i64),
    Float64(f64),
    Utf8(String),
}

impl ScalarValue {
    /// Parses a raw CSV cell into the narrowest scalar that represents it.
    /// Surrounding whitespace is ignored; text cells keep it.
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if NULL_MARKERS.contains(&trimmed) {
            return ScalarValue::Null;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return ScalarValue::Int64(i);
        }
        match trimmed.parse::<f64>() {
            Ok(f) if f.is_nan() => ScalarValue::Null,
            Ok(f) => ScalarValue::Float64(f),
            Err(_) => ScalarValue::Utf8(raw.to_string()),
        }
    }

    pub fn logical_type(&self) -> LogicalType {
        match self {
            ScalarValue::Null => LogicalType::Null,
            ScalarValue::Int64(_) => LogicalType::Integer,
            ScalarValue::Float64(_) => LogicalType::Float,
            ScalarValue::Utf8(_) => LogicalType::String,
        }
    }

    /// Converts the value into the representation used by a column of type `ty`.
    pub fn coerce(self, ty: LogicalType) -> Self {
        match (self, ty) {
            (ScalarValue::Null, _) => ScalarValue::Null,
            (ScalarValue::Int64(i), LogicalType::Float) => ScalarValue::Float64(i as f64),
            (v @ ScalarValue::Utf8(_), _) => v,
            (v, LogicalType::String) => ScalarValue::Utf8(v.to_string()),
            (v, _) => v,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ScalarValue::Int64(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScalarValue::Int64(i) => Some(*i as f64),
            ScalarValue::Float64(f) => Some(*f),
            _ => None,
        }
    }

    /// Natural ordering: numbers by value, strings lexicographically, numbers
    /// before strings and `Null` after everything else.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (ScalarValue::Null, ScalarValue::Null) => Ordering::Equal,
            (ScalarValue::Null, _) => Ordering::Greater,
            (_, ScalarValue::Null) => Ordering::Less,
            (ScalarValue::Int64(a), ScalarValue::Int64(b)) => a.cmp(b),
            (ScalarValue::Utf8(a), ScalarValue::Utf8(b)) => a.cmp(b),
            (ScalarValue::Utf8(_), _) => Ordering::Greater,
            (_, ScalarValue::Utf8(_)) => Ordering::Less,
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            },
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Null => Ok(()),
            ScalarValue::Int64(i) => f.write_str(itoa::Buffer::new().format(*i)),
            ScalarValue::Float64(v) => f.write_str(ryu::Buffer::new().format(*v)),
            ScalarValue::Utf8(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Int64(value)
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        ScalarValue::Float64(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Utf8(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Utf8(value)
    }
}

impl Serialize for ScalarValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ScalarValue::Null => serializer.serialize_unit(),
            ScalarValue::Int64(i) => serializer.serialize_i64(*i),
            ScalarValue::Float64(f) if f.is_finite() => serializer.serialize_f64(*f),
            ScalarValue::Float64(_) => serializer.serialize_unit(),
            ScalarValue::Utf8(s) => serializer.serialize_str(s),
        }
    }
}
