//! List and show command implementations.

use super::load_graph;
use crate::cli::ShowArgs;
use crate::error::{CliError, Result};
use crate::output::{name_in, Formatter};
use kinfolk_domain::{ContactId, ContactRepository};
use kinfolk_store::StoreError;

/// Execute the list command.
pub fn execute_list<R>(store: &R, formatter: &Formatter) -> Result<()>
where
    R: ContactRepository<Error = StoreError>,
{
    let contacts = store.list()?;
    println!("{}", formatter.format_contacts(&contacts)?);
    Ok(())
}

/// Execute the show command.
pub fn execute_show<R>(args: ShowArgs, store: &R, formatter: &Formatter) -> Result<()>
where
    R: ContactRepository<Error = StoreError>,
{
    let graph = load_graph(store)?;
    let id = ContactId::from(args.id.as_str());
    let contact = graph
        .contact(&id)
        .ok_or_else(|| CliError::ContactNotFound(args.id.clone()))?;

    let relationships: Vec<(String, String)> = store
        .list_relationships()?
        .iter()
        .filter_map(|r| r.counterpart(&id))
        .map(|(other, label)| (label.to_string(), name_in(&graph, other)))
        .collect();

    let output = formatter.format_contact_detail(
        contact,
        &graph.parents(&id),
        &graph.children(&id),
        &graph.siblings(&id),
        &relationships,
    )?;
    println!("{}", output);
    Ok(())
}
