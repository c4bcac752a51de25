//! # Search Queries
//!
//! The grid's search box accepts four kinds of query, tried in order:
//!
//! | Input | Query | Matches a cell when |
//! |---|---|---|
//! | `42`, `-3` | [`SearchQuery::Int`] | its text equals the number |
//! | `true`, `False` | [`SearchQuery::Bool`] | it is a boolean with that value |
//! | `100-500` | [`SearchQuery::IntRange`] | its text is an integer in the inclusive range |
//! | anything else | [`SearchQuery::Text`] | its text contains the input |
//!
//! A row matches when any of its cells matches.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Typed value of one grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    /// Free text
    Text(String),
    /// Integer
    Int(i64),
    /// Flag
    Bool(bool),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => f.write_str(text),
            CellValue::Int(value) => write!(f, "{value}"),
            CellValue::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// Parsed search box contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchQuery {
    /// Exact integer
    Int(i64),
    /// Boolean flag
    Bool(bool),
    /// Inclusive integer range
    IntRange(i64, i64),
    /// Substring
    Text(String),
}

impl SearchQuery {
    /// Parses search input. Returns `None` for blank input, meaning no filter.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mesh_stats::SearchQuery;
    ///
    /// assert_eq!(SearchQuery::parse("24"), Some(SearchQuery::Int(24)));
    /// assert_eq!(SearchQuery::parse("TRUE"), Some(SearchQuery::Bool(true)));
    /// assert_eq!(SearchQuery::parse("10-20"), Some(SearchQuery::IntRange(10, 20)));
    /// assert_eq!(SearchQuery::parse("rock"), Some(SearchQuery::Text("rock".into())));
    /// assert_eq!(SearchQuery::parse("  "), None);
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if let Ok(value) = input.parse::<i64>() {
            return Some(SearchQuery::Int(value));
        }

        if input.eq_ignore_ascii_case("true") {
            return Some(SearchQuery::Bool(true));
        }
        if input.eq_ignore_ascii_case("false") {
            return Some(SearchQuery::Bool(false));
        }

        if input.matches('-').count() == 1 {
            if let Some((from, to)) = input.split_once('-') {
                if let (Ok(from), Ok(to)) = (from.trim().parse::<i64>(), to.trim().parse::<i64>()) {
                    return Some(SearchQuery::IntRange(from, to));
                }
            }
        }

        Some(SearchQuery::Text(input.to_string()))
    }

    /// Returns true if a single cell satisfies the query.
    pub fn matches_cell(&self, cell: &CellValue) -> bool {
        match self {
            SearchQuery::Int(value) => cell.to_string() == value.to_string(),
            SearchQuery::Bool(value) => matches!(cell, CellValue::Bool(b) if b == value),
            SearchQuery::IntRange(from, to) => cell
                .to_string()
                .parse::<i64>()
                .is_ok_and(|v| (*from..=*to).contains(&v)),
            SearchQuery::Text(text) => cell.to_string().contains(text.as_str()),
        }
    }

    /// Returns true if any cell satisfies the query.
    pub fn matches_any<'a>(&self, cells: impl IntoIterator<Item = &'a CellValue>) -> bool {
        cells.into_iter().any(|cell| self.matches_cell(cell))
    }
}
