//! Recurring calendar dates

use crate::ReminderError;
use chrono::{Datelike, NaiveDate};

/// A month and day that recur every year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthDay {
    /// 1-12
    pub month: u32,
    /// 1-31, valid for `month` in a leap year
    pub day: u32,
}

impl MonthDay {
    /// Read the month and day from `YYYY-MM-DD` (optionally followed by a
    /// time) or the yearless `--MM-DD`
    ///
    /// # Examples
    ///
    /// ```
    /// use kinfolk_reminders::MonthDay;
    ///
    /// let md = MonthDay::parse("1990-02-29T00:00:00Z").unwrap();
    /// assert_eq!((md.month, md.day), (2, 29));
    /// assert_eq!(MonthDay::parse("--12-25").unwrap().month, 12);
    /// assert!(MonthDay::parse("next tuesday").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, ReminderError> {
        let invalid = || ReminderError::InvalidDate(value.to_string());
        let trimmed = value.trim();

        let month_day = match trimmed.strip_prefix("--") {
            Some(rest) => rest,
            None => {
                let date = trimmed.split(['T', 't', ' ']).next().unwrap_or_default();
                let mut parts = date.splitn(2, '-');
                let year = parts.next().ok_or_else(invalid)?;
                if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                parts.next().ok_or_else(invalid)?
            }
        };

        let (month, day) = month_day.split_once('-').ok_or_else(invalid)?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let day: u32 = day.parse().map_err(|_| invalid())?;

        // 2000 is a leap year, so Feb 29 is accepted here
        NaiveDate::from_ymd_opt(2000, month, day).ok_or_else(invalid)?;
        Ok(Self { month, day })
    }

    /// The date this falls on in `year`; Feb 29 becomes Feb 28 outside leap years
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day).or_else(|| {
            if self.month == 2 && self.day == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }

    /// The first occurrence on or after `today`
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.in_year(today.year())?;
        if this_year >= today {
            Some(this_year)
        } else {
            self.in_year(today.year() + 1)
        }
    }
}
