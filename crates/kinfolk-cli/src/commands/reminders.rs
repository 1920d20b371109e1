//! Reminders command implementation.

use crate::cli::RemindersArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use chrono::NaiveDate;
use kinfolk_domain::ContactRepository;
use kinfolk_reminders::{upcoming, Reminder, ReminderConfig};
use kinfolk_store::StoreError;

/// Execute the reminders command.
pub fn execute_reminders<R>(
    args: RemindersArgs,
    store: &R,
    defaults: &ReminderConfig,
    formatter: &Formatter,
) -> Result<Vec<Reminder>>
where
    R: ContactRepository<Error = StoreError>,
{
    let mut config = defaults.clone();
    if let Some(days) = args.days {
        config.window_days = days;
    }
    config.validate()?;

    let today = match &args.today {
        Some(date) => parse_day(date)?,
        None => chrono::Local::now().date_naive(),
    };

    let reminders = upcoming(&store.list()?, today, &config);
    println!("{}", formatter.format_reminders(&reminders, config.window_days)?);
    Ok(reminders)
}

fn parse_day(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| CliError::InvalidInput(format!("Invalid date '{}': {}", value, e)))
}
