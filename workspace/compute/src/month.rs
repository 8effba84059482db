use chrono::{Datelike, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::error::{ComputeError, Result};

/// A calendar month, parsed from a month token such as `Jul-2025` or `2025-07`.
///
/// Budgets are keyed by the canonical rendering (`Jul-2025`) and the
/// transactions that belong to a month are those dated inside
/// [`Month::window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    first_day: NaiveDate,
}

impl Month {
    /// Builds a month from a year and a 1-based month number.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(ComputeError::InvalidMonth(format!("{}-{:02}", year, month)));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or_else(|| ComputeError::InvalidMonth(format!("{}-{:02}", year, month)))
    }

    /// The month a date falls in.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// First day of the following month.
    pub fn next_first_day(&self) -> NaiveDate {
        self.first_day
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Half-open date range `[first day, first day of next month)`.
    pub fn window(&self) -> (NaiveDate, NaiveDate) {
        (self.first_day, self.next_first_day())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        let (start, end) = self.window();
        date >= start && date < end
    }
}

impl FromStr for Month {
    type Err = ComputeError;

    fn from_str(token: &str) -> Result<Self> {
        let invalid = || ComputeError::InvalidMonth(token.to_string());
        let (left, right) = token.trim().split_once('-').ok_or_else(invalid)?;

        // ISO form: 2025-07
        if left.len() == 4 && left.chars().all(|c| c.is_ascii_digit()) {
            let year: i32 = left.parse().map_err(|_| invalid())?;
            let month: u32 = right.parse().map_err(|_| invalid())?;
            return Month::new(year, month).map_err(|_| invalid());
        }

        // Named form: Jul-2025 or July-2025
        let name: chrono::Month = left.parse().map_err(|_| invalid())?;
        if right.len() != 4 || !right.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let year: i32 = right.parse().map_err(|_| invalid())?;
        Month::new(year, name.number_from_month()).map_err(|_| invalid())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first_day.format("%b-%Y"))
    }
}
