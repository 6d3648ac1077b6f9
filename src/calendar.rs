//! Appointment calendar month grid
//!
//! Sunday-first month layout: blank cells for the weekdays before the 1st,
//! then one cell per day.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

pub const DAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

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

/// Errors building a calendar month
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid month {month} (expected 1-12)")]
    InvalidMonth { month: u32 },

    #[error("Year {year} is out of range")]
    InvalidYear { year: i32 },
}

/// One month of the calendar widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    /// 1-based month
    pub month: u32,
    /// Empty cells before the 1st
    pub leading_blanks: u32,
    pub days_in_month: u32,
    /// Day of month to highlight when `today` falls in this month
    pub today: Option<u32>,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32, today: NaiveDate) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(CalendarError::InvalidYear { year })?;
        let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
        let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .ok_or(CalendarError::InvalidYear { year })?;

        let days_in_month = (next_first - first).num_days() as u32;
        let today = (today.year() == year && today.month() == month).then(|| today.day());

        Ok(Self {
            year,
            month,
            leading_blanks: first.weekday().num_days_from_sunday(),
            days_in_month,
            today,
        })
    }

    /// The month containing `today`
    pub fn containing(today: NaiveDate) -> Self {
        Self {
            year: today.year(),
            month: today.month(),
            leading_blanks: today
                .with_day(1)
                .map(|d| d.weekday().num_days_from_sunday())
                .unwrap_or(0),
            days_in_month: days_in(today.year(), today.month()),
            today: Some(today.day()),
        }
    }

    /// Header text, e.g. "March 2025"
    pub fn title(&self) -> String {
        let name = MONTH_NAMES
            .get((self.month as usize).wrapping_sub(1))
            .copied()
            .unwrap_or("Unknown");
        format!("{} {}", name, self.year)
    }

    /// Grid cells: `None` for blanks, `Some(day)` for days
    pub fn cells(&self) -> Vec<Option<u32>> {
        (0..self.leading_blanks)
            .map(|_| None)
            .chain((1..=self.days_in_month).map(Some))
            .collect()
    }

    pub fn prev(&self, today: NaiveDate) -> Result<Self, CalendarError> {
        if self.month == 1 {
            Self::new(self.year - 1, 12, today)
        } else {
            Self::new(self.year, self.month - 1, today)
        }
    }

    pub fn next(&self, today: NaiveDate) -> Result<Self, CalendarError> {
        if self.month == 12 {
            Self::new(self.year + 1, 1, today)
        } else {
            Self::new(self.year, self.month + 1, today)
        }
    }

    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

fn days_in(year: i32, month: u32) -> u32 {
    (28..=31)
        .rev()
        .find(|&d| NaiveDate::from_ymd_opt(year, month, d).is_some())
        .unwrap_or(28)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_layout() {
        // 1 June 2025 is a Sunday
        let june = CalendarMonth::new(2025, 6, date(2025, 6, 18)).unwrap();
        assert_eq!(june.leading_blanks, 0);
        assert_eq!(june.days_in_month, 30);
        assert_eq!(june.today, Some(18));
        assert_eq!(june.title(), "June 2025");

        // 1 March 2025 is a Saturday
        let march = CalendarMonth::new(2025, 3, date(2025, 6, 18)).unwrap();
        assert_eq!(march.leading_blanks, 6);
        assert_eq!(march.today, None);
        assert_eq!(march.cells().len(), 6 + 31);
        assert_eq!(march.cells()[6], Some(1));
    }

    #[test]
    fn test_february_lengths() {
        let today = date(2025, 1, 1);
        assert_eq!(CalendarMonth::new(2024, 2, today).unwrap().days_in_month, 29);
        assert_eq!(CalendarMonth::new(2025, 2, today).unwrap().days_in_month, 28);
        assert_eq!(CalendarMonth::new(1900, 2, today).unwrap().days_in_month, 28);
    }

    #[test]
    fn test_prev_next_roll_over_years() {
        let today = date(2025, 1, 15);
        let jan = CalendarMonth::new(2025, 1, today).unwrap();
        let dec = jan.prev(today).unwrap();
        assert_eq!((dec.year, dec.month), (2024, 12));
        assert_eq!(dec.next(today).unwrap(), jan);
    }

    #[test]
    fn test_containing_matches_new() {
        let today = date(2024, 2, 29);
        assert_eq!(
            CalendarMonth::containing(today),
            CalendarMonth::new(2024, 2, today).unwrap()
        );
    }

    #[test]
    fn test_invalid_month() {
        let result = CalendarMonth::new(2025, 13, date(2025, 1, 1));
        assert_eq!(result, Err(CalendarError::InvalidMonth { month: 13 }));
    }
}
