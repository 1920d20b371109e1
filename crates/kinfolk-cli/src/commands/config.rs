//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command against the file at `path`.
pub fn execute_config(
    args: ConfigArgs,
    config: &mut Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            let contents = toml::to_string_pretty(config)
                .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
            println!("# {}", path.display());
            println!("{}", contents);
        }
        ConfigAction::SetDb { path: database } => {
            config.database = Some(database.clone());
            config.save_to(path)?;
            println!(
                "{}",
                formatter.success(&format!("Database set to {}", database.display()))
            );
        }
        ConfigAction::SetWindow { days } => {
            let mut reminders = config.reminders.clone();
            reminders.window_days = days;
            reminders.validate()?;

            config.reminders = reminders;
            config.save_to(path)?;
            println!(
                "{}",
                formatter.success(&format!("Reminder window set to {} days", days))
            );
        }
    }
    Ok(())
}
