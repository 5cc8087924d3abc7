//! Input format tags.

use serde::{Deserialize, Serialize};

use crate::error::EmitError;

/// The log family a data mapping was computed from.
///
/// Selects both the report specification and the template family. The
/// registry dispatches statically on this tag; unknown tags are
/// rejected up front instead of failing deep inside rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Apache,
}

impl InputFormat {
    pub const DEFAULT: InputFormat = InputFormat::Apache;

    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Apache => "apache",
        }
    }
}

impl Default for InputFormat {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for InputFormat {
    type Err = EmitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "apache" => Ok(InputFormat::Apache),
            other => Err(EmitError::UnsupportedInputFormat {
                format: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_format() {
        assert_eq!("apache".parse::<InputFormat>().unwrap(), InputFormat::Apache);
    }

    #[test]
    fn test_parse_unknown_format() {
        let err = "nonexistent".parse::<InputFormat>().unwrap_err();
        match err {
            EmitError::UnsupportedInputFormat { format } => assert_eq!(format, "nonexistent"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(InputFormat::Apache.to_string(), "apache");
    }
}
