//! Remove command implementation.

use super::require_contact;
use crate::cli::RemoveArgs;
use crate::error::Result;
use crate::output::Formatter;
use kinfolk_domain::ContactRepository;
use kinfolk_store::StoreError;
use std::io::{self, BufRead, Write};

/// Execute the remove command.
///
/// Deleting a contact also drops its explicit relationships and removes it
/// from its children's parent links.
pub fn execute_remove<R>(args: RemoveArgs, store: &mut R, formatter: &Formatter) -> Result<bool>
where
    R: ContactRepository<Error = StoreError>,
{
    let contact = require_contact(store, &args.id)?;

    if !args.yes {
        print!("Remove {} ({})? [y/N] ", contact.display_name(), contact.id);
        io::stdout().flush()?;
        if !confirmed(io::stdin().lock())? {
            println!("{}", formatter.info("Operation cancelled"));
            return Ok(false);
        }
    }

    let removed = store.delete(&contact.id)?;
    if removed {
        tracing::info!(contact = %contact.id, "Removed contact");
        println!("{}", formatter.success(&format!("Removed {}", contact.display_name())));
    }
    Ok(removed)
}

/// Read one line and accept only `y` or `yes`.
fn confirmed(mut input: impl BufRead) -> Result<bool> {
    let mut response = String::new();
    input.read_line(&mut response)?;
    let response = response.trim();
    Ok(response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use kinfolk_domain::{Contact, ContactId, ParentIds};
    use kinfolk_store::MemoryStore;

    #[test]
    fn test_confirmation_answers() {
        assert!(confirmed("y\n".as_bytes()).unwrap());
        assert!(confirmed("YES\n".as_bytes()).unwrap());
        assert!(!confirmed("n\n".as_bytes()).unwrap());
        assert!(!confirmed("".as_bytes()).unwrap());
    }

    #[test]
    fn test_remove_with_yes_unlinks_children() {
        let mom = Contact::new("Mom", "Test").with_id("mom");
        let kid = Contact::new("Kid", "Test")
            .with_id("kid")
            .with_parents(ParentIds::new(vec!["mom".into()]).unwrap());
        let mut store = MemoryStore::with_contacts(vec![mom, kid]);
        let formatter = Formatter::new(OutputFormat::Table, false);

        let args = RemoveArgs { id: "mom".to_string(), yes: true };
        assert!(execute_remove(args, &mut store, &formatter).unwrap());

        let kid = store.get(&ContactId::from("kid")).unwrap().unwrap();
        assert!(kid.parent_ids.is_empty());
    }

    #[test]
    fn test_remove_unknown() {
        let mut store = MemoryStore::new();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let args = RemoveArgs { id: "ghost".to_string(), yes: true };
        assert!(matches!(
            execute_remove(args, &mut store, &formatter),
            Err(CliError::ContactNotFound(_))
        ));
    }
}
