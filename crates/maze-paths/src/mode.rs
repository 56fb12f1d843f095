use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::frontier::Entry;

/// Which path a search leans towards.
///
/// Both modes share one ordering of frontier entries: the entry with the
/// smaller row comes first, and on the same row the one with more steps.
/// `Longest` pops in that order, which explores upper rows before moving
/// down and so wanders. `Shortest` negates the whole comparison, which
/// dives towards the exit row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    Shortest,
    Longest,
}

impl Mode {
    /// Both modes, shortest first.
    pub const ALL: [Mode; 2] = [Mode::Shortest, Mode::Longest];

    /// The frontier comparator for this mode: whether `a` pops before `b`.
    pub(crate) fn comparator(self) -> fn(&Entry, &Entry) -> bool {
        match self {
            Self::Shortest => reversed_order,
            Self::Longest => base_order,
        }
    }

    /// Short name, as used by the solution query (`min` / `max`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shortest => "min",
            Self::Longest => "max",
        }
    }
}

fn base_order(a: &Entry, b: &Entry) -> bool {
    if a.y == b.y {
        a.steps > b.steps
    } else {
        a.y < b.y
    }
}

fn reversed_order(a: &Entry, b: &Entry) -> bool {
    !base_order(a, b)
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Should be one of: min, max")]
pub struct ModeParseError(pub String);

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" | "shortest" => Ok(Self::Shortest),
            "max" | "longest" => Ok(Self::Longest),
            _ => Err(ModeParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(y: i32, steps: u32) -> Entry {
        Entry { node: 0, y, steps }
    }

    #[test]
    fn parse_names() {
        assert_eq!("min".parse::<Mode>().unwrap(), Mode::Shortest);
        assert_eq!("longest".parse::<Mode>().unwrap(), Mode::Longest);
        let err = "any".parse::<Mode>().unwrap_err();
        assert_eq!(err.to_string(), "Should be one of: min, max");
        assert_eq!(Mode::Longest.to_string(), "max");
    }

    #[test]
    fn longest_prefers_upper_rows_then_more_steps() {
        let precedes = Mode::Longest.comparator();
        assert!(precedes(&entry(0, 5), &entry(1, 1)));
        assert!(precedes(&entry(2, 7), &entry(2, 3)));
        assert!(!precedes(&entry(2, 3), &entry(2, 3)));
    }

    #[test]
    fn shortest_negates_the_whole_order() {
        let precedes = Mode::Shortest.comparator();
        assert!(precedes(&entry(3, 1), &entry(1, 5)));
        assert!(precedes(&entry(2, 3), &entry(2, 7)));
        // Negating a strict order makes equal keys precede each other.
        assert!(precedes(&entry(2, 3), &entry(2, 3)));
    }
}
