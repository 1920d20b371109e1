//! Upcoming birthday and important-date reminders

use crate::{MonthDay, ReminderConfig};
use chrono::NaiveDate;
use kinfolk_domain::{Contact, ContactId};
use serde::Serialize;

/// Label used for birthday reminders
pub const BIRTHDAY_LABEL: &str = "Birthday";

/// One date coming up within the reminder window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// Contact the date belongs to
    pub contact_id: ContactId,
    /// Display name of the contact
    pub contact_name: String,
    /// `"Birthday"` or the important date's own label
    pub label: String,
    /// Next occurrence, on or after today
    pub date: NaiveDate,
    /// Days from today until `date`
    pub days_until: i64,
}

impl Reminder {
    /// `"Today"`, `"Tomorrow"` or `"In N days"`
    pub fn when(&self) -> String {
        match self.days_until {
            0 => "Today".to_string(),
            1 => "Tomorrow".to_string(),
            n => format!("In {} days", n),
        }
    }
}

/// Reminders for every birthday and important date within the window
///
/// Results are ordered by `days_until`; ties keep contact order, and a
/// contact's birthday comes before its important dates. Dates that cannot be
/// read are skipped.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use kinfolk_domain::Contact;
/// use kinfolk_reminders::{upcoming, ReminderConfig};
///
/// let mut ada = Contact::new("Ada", "Lovelace");
/// ada.birthday = Some("1815-12-10".into());
///
/// let today = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
/// let reminders = upcoming(&[ada], today, &ReminderConfig::default());
/// assert_eq!(reminders[0].days_until, 9);
/// ```
pub fn upcoming(contacts: &[Contact], today: NaiveDate, config: &ReminderConfig) -> Vec<Reminder> {
    let window = i64::from(config.window_days);
    let mut reminders = Vec::new();

    for contact in contacts {
        let birthday = contact
            .birthday
            .as_deref()
            .filter(|_| !(config.skip_deceased && contact.is_deceased))
            .map(|date| (BIRTHDAY_LABEL, date));

        let important = contact
            .important_dates
            .iter()
            .map(|d| (d.label.as_str(), d.date.as_str()));

        for (label, raw) in birthday.into_iter().chain(important) {
            let month_day = match MonthDay::parse(raw) {
                Ok(md) => md,
                Err(e) => {
                    tracing::debug!(contact = %contact.id, label, error = %e, "Skipping date");
                    continue;
                }
            };

            let Some(date) = month_day.next_occurrence(today) else {
                continue;
            };
            let days_until = (date - today).num_days();
            if (0..=window).contains(&days_until) {
                reminders.push(Reminder {
                    contact_id: contact.id.clone(),
                    contact_name: contact.display_name(),
                    label: label.to_string(),
                    date,
                    days_until,
                });
            }
        }
    }

    reminders.sort_by_key(|r| r.days_until);
    reminders
}
