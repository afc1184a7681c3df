//! Calendar month keys
//!
//! A `MonthKey` identifies one calendar month. The month index is zero-based
//! (0 = January) so renderers can index their own label tables directly.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A (year, month) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    /// Month index, 0-11
    #[serde(rename = "month_index")]
    pub month0: u32,
}

impl MonthKey {
    /// Create a month key; `month0` must be 0-11
    pub fn new(year: i32, month0: u32) -> Option<Self> {
        (month0 < 12).then_some(Self { year, month0 })
    }

    /// The month a date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    /// One-based month number (1-12)
    pub fn month(&self) -> u32 {
        self.month0 + 1
    }

    /// Check if a date falls within this month (year and month both match)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }

    /// Get the next month
    pub fn next(&self) -> Self {
        if self.month0 == 11 {
            Self {
                year: self.year + 1,
                month0: 0,
            }
        } else {
            Self {
                year: self.year,
                month0: self.month0 + 1,
            }
        }
    }

    /// Get the previous month
    pub fn prev(&self) -> Self {
        if self.month0 == 0 {
            Self {
                year: self.year - 1,
                month0: 11,
            }
        } else {
            Self {
                year: self.year,
                month0: self.month0 - 1,
            }
        }
    }

    /// Count of months since year 0, used for distance arithmetic
    pub fn ordinal(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month0)
    }

    /// Step back `months` calendar months, carrying into earlier years
    pub fn back(&self, months: u32) -> Self {
        let absolute = self.ordinal() - i64::from(months);
        Self {
            year: absolute.div_euclid(12) as i32,
            month0: absolute.rem_euclid(12) as u32,
        }
    }

    /// First day of the month
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month(), 1)
    }

    /// The `count` months ending at (and including) this one, oldest first
    pub fn trailing(&self, count: u32) -> Vec<Self> {
        (0..count).rev().map(|offset| self.back(offset)).collect()
    }

    /// Parse a month string ("2024-01")
    pub fn parse(s: &str) -> Result<Self, MonthKeyParseError> {
        let s = s.trim();
        let invalid = || MonthKeyParseError::InvalidFormat(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(MonthKeyParseError::InvalidMonth(month));
        }

        Ok(Self {
            year,
            month0: month - 1,
        })
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{:04}-{:02}", self.year, self.month()))
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthKeyParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthKeyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid month format (expected YYYY-MM): {}", s),
            Self::InvalidMonth(m) => write!(f, "Invalid month: {} (must be 1-12)", m),
        }
    }
}

impl std::error::Error for MonthKeyParseError {}
