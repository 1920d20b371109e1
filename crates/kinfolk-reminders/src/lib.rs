//! Kinfolk Reminders
//!
//! Finds birthdays and important dates falling within the next few days.
//!
//! Stored dates are `YYYY-MM-DD` or the yearless `--MM-DD`. Each is projected
//! onto the current year, or the next one once it has passed this year, and
//! kept when it lands inside the configured window.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use kinfolk_domain::{Contact, ImportantDate};
//! use kinfolk_reminders::{upcoming, ReminderConfig};
//!
//! let mut pat = Contact::new("Pat", "Lee");
//! pat.important_dates.push(ImportantDate {
//!     label: "Anniversary".into(),
//!     date: "2012-09-15".into(),
//! });
//!
//! let today = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
//! let reminders = upcoming(&[pat], today, &ReminderConfig::default());
//! assert_eq!(reminders[0].label, "Anniversary");
//! assert_eq!(reminders[0].days_until, 14);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod date;
pub mod error;
pub mod reminder;

pub use config::ReminderConfig;
pub use date::MonthDay;
pub use error::ReminderError;
pub use reminder::{upcoming, Reminder};
