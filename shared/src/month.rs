//! 月份解析
//!
//! Reports are scoped to a calendar month regardless of year. The dashboard
//! sends month names ("March"), so names are resolved through a fixed table
//! rather than locale date parsing.

use std::fmt;
use std::str::FromStr;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar month, 1 = January ... 12 = December
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Month(u8);

impl Month {
    /// Build from a 1-based month number
    pub fn new(number: u8) -> Option<Self> {
        (1..=12).contains(&number).then_some(Self(number))
    }

    /// Resolve user input to a month.
    ///
    /// Accepts full English names, three-letter abbreviations and the
    /// numbers 1-12. Case and surrounding whitespace are ignored.
    pub fn resolve(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if let Ok(number) = input.parse::<u8>() {
            return Self::new(number);
        }

        let lower = input.to_ascii_lowercase();
        MONTH_NAMES
            .iter()
            .position(|name| {
                let name = name.to_ascii_lowercase();
                name == lower || (lower.len() == 3 && name.starts_with(&lower))
            })
            .map(|idx| Self(idx as u8 + 1))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        MONTH_NAMES[(self.0 - 1) as usize]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input that names no month
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown month: {0:?}")]
pub struct UnknownMonth(pub String);

impl FromStr for Month {
    type Err = UnknownMonth;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s).ok_or_else(|| UnknownMonth(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_resolves_one_based() {
        for (idx, name) in MONTH_NAMES.iter().enumerate() {
            let month = Month::resolve(name).unwrap();
            assert_eq!(month.number() as usize, idx + 1);
            assert_eq!(month.name(), *name);
        }
        assert_eq!(Month::resolve("January").unwrap().number(), 1);
        assert_eq!(Month::resolve("December").unwrap().number(), 12);
    }

    #[test]
    fn test_case_whitespace_and_abbreviations() {
        assert_eq!(Month::resolve("  march ").unwrap().number(), 3);
        assert_eq!(Month::resolve("SEP").unwrap().number(), 9);
        assert_eq!(Month::resolve("oct").unwrap().number(), 10);
    }

    #[test]
    fn test_numeric_input() {
        assert_eq!(Month::resolve("3").unwrap().name(), "March");
        assert_eq!(Month::resolve("12").unwrap().number(), 12);
        assert!(Month::resolve("0").is_none());
        assert!(Month::resolve("13").is_none());
    }

    #[test]
    fn test_unknown_input() {
        assert!(Month::resolve("").is_none());
        assert!(Month::resolve("Marc").is_none());
        assert!(Month::resolve("Ma").is_none());
        assert_eq!(
            "Smarch".parse::<Month>(),
            Err(UnknownMonth("Smarch".to_string()))
        );
    }
}
