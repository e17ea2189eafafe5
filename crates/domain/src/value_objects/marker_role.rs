//! Marker role value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// The role a marker (or a search box) plays in the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerRole {
    /// Trip origin
    Start,
    /// Trip destination
    End,
}

impl MarkerRole {
    /// Surface color for markers of this role
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Start => "blue",
            Self::End => "red",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

impl fmt::Display for MarkerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors() {
        assert_eq!(MarkerRole::Start.color(), "blue");
        assert_eq!(MarkerRole::End.color(), "red");
    }

    #[test]
    fn test_display() {
        assert_eq!(MarkerRole::Start.to_string(), "start");
        assert_eq!(MarkerRole::End.to_string(), "end");
    }
}
