//! Property tests for reminder windows

use chrono::{Days, NaiveDate};
use kinfolk_domain::Contact;
use kinfolk_reminders::{upcoming, ReminderConfig};
use proptest::prelude::*;

fn contact_born(month: u32, day: u32) -> Contact {
    let mut c = Contact::new("Test", "Person");
    c.birthday = Some(format!("1990-{:02}-{:02}", month, day));
    c
}

proptest! {
    #[test]
    fn prop_reminders_inside_window_and_sorted(
        dates in prop::collection::vec((1u32..=12, 1u32..=28), 0..20),
        offset in 0u64..730,
        window in 0u32..=366,
    ) {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Days::new(offset);
        let contacts: Vec<Contact> = dates.iter().map(|(m, d)| contact_born(*m, *d)).collect();

        let reminders = upcoming(&contacts, today, &ReminderConfig::with_window(window));

        for r in &reminders {
            prop_assert!(r.days_until >= 0);
            prop_assert!(r.days_until <= i64::from(window));
            prop_assert_eq!((r.date - today).num_days(), r.days_until);
        }
        prop_assert!(reminders.windows(2).all(|w| w[0].days_until <= w[1].days_until));
    }

    #[test]
    fn prop_full_year_window_covers_everyone(
        dates in prop::collection::vec((1u32..=12, 1u32..=28), 0..20),
        offset in 0u64..730,
    ) {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Days::new(offset);
        let contacts: Vec<Contact> = dates.iter().map(|(m, d)| contact_born(*m, *d)).collect();

        let reminders = upcoming(&contacts, today, &ReminderConfig::with_window(366));
        prop_assert_eq!(reminders.len(), contacts.len());
    }
}
