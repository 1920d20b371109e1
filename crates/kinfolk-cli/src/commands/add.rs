//! Add command implementation.

use super::require_contact;
use crate::cli::AddArgs;
use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use kinfolk_domain::{Contact, ContactId, ContactRepository, ParentIds};
use kinfolk_reminders::MonthDay;
use kinfolk_store::StoreError;

/// Execute the add command.
pub fn execute_add<R>(args: AddArgs, store: &mut R, formatter: &Formatter) -> Result<ContactId>
where
    R: ContactRepository<Error = StoreError>,
{
    if args.given.trim().is_empty() && args.family.trim().is_empty() {
        return Err(CliError::InvalidInput("A contact needs a given or family name".to_string()));
    }

    if let Some(birthday) = &args.birthday {
        MonthDay::parse(birthday)?;
    }

    let mut parents = ParentIds::default();
    for parent in &args.parents {
        let parent = require_contact(store, parent)?;
        if parents.contains(&parent.id) {
            return Err(CliError::InvalidInput(format!("Parent {} given twice", parent.id)));
        }
        parents.push(parent.id)?;
    }

    let mut contact = Contact::new(args.given, args.family).with_parents(parents);
    contact.birthday = args.birthday;
    contact.category = args.category.map(Into::into);

    let id = contact.id.clone();
    let name = contact.display_name();
    store.upsert(contact)?;
    tracing::info!(contact = %id, "Added contact");

    match formatter.format() {
        OutputFormat::Quiet => println!("{}", id),
        _ => println!("{}", formatter.success(&format!("Added {} ({})", name, id))),
    }
    Ok(id)
}
