//! Ellipsis placement preference

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the ellipsis marker sits relative to the kept head and tail items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EllipsisPosition {
    /// One item before the ellipsis, the rest after it
    Start,
    /// Kept items split evenly, head takes the odd one
    #[default]
    Center,
    /// One item after the ellipsis, the rest before it
    End,
}

impl EllipsisPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }

    /// Parses a position, falling back to `Center` for anything unrecognised
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// Head and tail counts for a display budget of `max_items` slots
    ///
    /// Budgets below 3 always keep one item on each side.
    pub(crate) fn split(self, max_items: usize) -> (usize, usize) {
        if max_items < 3 {
            return (1, 1);
        }

        let kept = max_items - 1;
        match self {
            Self::Start => (1, max_items - 2),
            Self::Center => (kept.div_ceil(2), kept / 2),
            Self::End => (max_items - 2, 1),
        }
    }
}

impl FromStr for EllipsisPosition {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "end" => Ok(Self::End),
            other => anyhow::bail!("invalid ellipsis position '{other}' (expected start, center or end)"),
        }
    }
}

impl fmt::Display for EllipsisPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for EllipsisPosition {
    fn from(value: String) -> Self {
        Self::parse_lenient(&value)
    }
}

impl From<EllipsisPosition> for String {
    fn from(value: EllipsisPosition) -> Self {
        value.as_str().to_string()
    }
}
