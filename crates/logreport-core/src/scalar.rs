//! Scalar cell values.

use serde::{Deserialize, Serialize};

/// A single cell of a data row.
///
/// The upstream analytics step hands over untyped JSON values; this
/// enum pins them down so downstream formatting is an exhaustive
/// match instead of a runtime type inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Integer count or size
    Int(i64),
    /// Fractional measurement
    Float(f64),
    /// Free-form text (path, browser name, status code, ...)
    Str(String),
    /// Missing value
    Null,
}

impl Scalar {
    /// True for the numeric variants.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Scalar::Int(_) | Scalar::Float(_))
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Str(s) => write!(f, "{}", s),
            Scalar::Null => Ok(()),
        }
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Int(n)
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Scalar::Float(x)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Str(s)
    }
}
