//! Demographic date parsing and variant generation.
//!
//! A date in `DD-MM-YYYY` form is sliced into its day, month and year
//! components, which are then concatenated into the short numeric strings
//! a guesser would try first.

use std::fmt;
use thiserror::Error;

const DATE_SEPARATOR: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateComponent {
    Day,
    Month,
    Year,
}

impl fmt::Display for DateComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateComponent::Day => "day",
            DateComponent::Month => "month",
            DateComponent::Year => "year",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("Expected 3 date components separated by '-', found {0}")]
    WrongComponentCount(usize),
    #[error("Date {0} is empty")]
    EmptyComponent(DateComponent),
    #[error("Date {0} is not numeric")]
    NonNumeric(DateComponent),
}

/// Positional components of a `DD-MM-YYYY` date.
///
/// Components are kept as text so leading zeros survive. No calendar
/// validation is done: `99-99-123` parses fine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParts {
    day: String,
    month: String,
    year: String,
}

impl DateParts {
    /// Parses a date string into its day, month and year components.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string does not split into exactly three parts on `-`
    /// - A part is empty
    /// - A part contains anything other than ASCII digits
    pub fn parse(date: &str) -> Result<Self, DateParseError> {
        let parts: Vec<&str> = date.split(DATE_SEPARATOR).collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(DateParseError::WrongComponentCount(parts.len()));
        };

        Ok(Self {
            day: numeric_component(day, DateComponent::Day)?,
            month: numeric_component(month, DateComponent::Month)?,
            year: numeric_component(year, DateComponent::Year)?,
        })
    }

    pub fn day(&self) -> &str {
        &self.day
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    /// Last two characters of the year, or the whole year if shorter.
    pub fn short_year(&self) -> &str {
        &self.year[self.year.len().saturating_sub(2)..]
    }

    /// All variants derivable from this date, in a fixed order:
    /// DDMM, MMDD, DDYY, YYDD, MMYY, YYMM, YYYY, YY.
    pub fn variants(&self) -> Vec<String> {
        let (day, month, year, y2) = (self.day(), self.month(), self.year(), self.short_year());
        vec![
            format!("{day}{month}"),
            format!("{month}{day}"),
            format!("{day}{y2}"),
            format!("{y2}{day}"),
            format!("{month}{y2}"),
            format!("{y2}{month}"),
            year.to_string(),
            y2.to_string(),
        ]
    }
}

fn numeric_component(value: &str, component: DateComponent) -> Result<String, DateParseError> {
    if value.is_empty() {
        return Err(DateParseError::EmptyComponent(component));
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(DateParseError::NonNumeric(component));
    }
    Ok(value.to_string())
}

/// Returns the variants of an optional date.
///
/// Absent or malformed dates produce an empty list; they never fail
/// the surrounding evaluation.
pub fn date_variants(date: Option<&str>) -> Vec<String> {
    let Some(date) = date.filter(|d| !d.is_empty()) else {
        return Vec::new();
    };

    match DateParts::parse(date) {
        Ok(parts) => parts.variants(),
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Ignoring malformed demographic date: {}", _e);
            Vec::new()
        }
    }
}
