//! Link and unlink command implementations.

use super::{load_graph, require_contact};
use crate::cli::LinkArgs;
use crate::error::Result;
use crate::output::Formatter;
use kinfolk_domain::{ContactRepository, DomainError};
use kinfolk_store::StoreError;

/// Execute the link command: record `parent` as a parent of `child`.
///
/// Links that would make a contact its own ancestor are rejected.
pub fn execute_link<R>(args: LinkArgs, store: &mut R, formatter: &Formatter) -> Result<()>
where
    R: ContactRepository<Error = StoreError>,
{
    let mut child = require_contact(store, &args.child)?;
    let parent = require_contact(store, &args.parent)?;

    if child.id == parent.id {
        return Err(DomainError::SelfParent(child.id.to_string()).into());
    }

    if child.parent_ids.contains(&parent.id) {
        println!(
            "{}",
            formatter.info(&format!(
                "{} is already a parent of {}",
                parent.display_name(),
                child.display_name()
            ))
        );
        return Ok(());
    }

    if load_graph(store)?.is_ancestor(&child.id, &parent.id) {
        return Err(DomainError::DescendantAsParent {
            parent: parent.id.to_string(),
            child: child.id.to_string(),
        }
        .into());
    }

    child.parent_ids.push(parent.id.clone())?;
    child.touch();
    let message = format!("{} is now a parent of {}", parent.display_name(), child.display_name());
    tracing::info!(child = %child.id, parent = %parent.id, "Linked parent");
    store.upsert(child)?;

    println!("{}", formatter.success(&message));
    Ok(())
}

/// Execute the unlink command: drop `parent` from `child`'s parents.
///
/// The parent id does not need to resolve, so links left dangling by an
/// import can be cleaned up.
pub fn execute_unlink<R>(args: LinkArgs, store: &mut R, formatter: &Formatter) -> Result<()>
where
    R: ContactRepository<Error = StoreError>,
{
    let mut child = require_contact(store, &args.child)?;

    if !child.parent_ids.remove(&args.parent.as_str().into()) {
        println!(
            "{}",
            formatter.warning(&format!("{} is not a parent of {}", args.parent, child.display_name()))
        );
        return Ok(());
    }

    child.touch();
    tracing::info!(child = %child.id, parent = %args.parent, "Unlinked parent");
    let message = format!("Removed parent {} from {}", args.parent, child.display_name());
    store.upsert(child)?;

    println!("{}", formatter.success(&message));
    Ok(())
}
