use serde::{Deserialize, Serialize};
use std::fmt;

/// The two top-level view modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Calendar,
    List,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Calendar => "calendar",
            View::List => "list",
        }
    }

    /// Strict parse, case-insensitive.
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "calendar" => Some(View::Calendar),
            "list" => Some(View::List),
            _ => None,
        }
    }

    /// Lenient parse: anything unrecognised falls back to the calendar.
    pub fn parse_or_default(s: &str) -> Self {
        Self::from_code(s).unwrap_or_default()
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
