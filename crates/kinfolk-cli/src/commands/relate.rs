//! Relate and relationships command implementations.

use super::{load_graph, require_contact};
use crate::cli::RelateArgs;
use crate::error::Result;
use crate::output::Formatter;
use kinfolk_domain::{ContactRepository, Relationship, RelationshipId};
use kinfolk_store::StoreError;

/// Execute the relate command.
pub fn execute_relate<R>(args: RelateArgs, store: &mut R, formatter: &Formatter) -> Result<RelationshipId>
where
    R: ContactRepository<Error = StoreError>,
{
    let first = require_contact(store, &args.first)?;
    let second = require_contact(store, &args.second)?;

    let reverse = args.reverse.unwrap_or_else(|| args.label.clone());
    let relationship = Relationship::new(first.id.clone(), second.id.clone(), args.label, reverse)?;
    let id = relationship.id.clone();
    let message = format!(
        "{} is {} of {}",
        first.display_name(),
        relationship.type_1_to_2,
        second.display_name()
    );
    store.add_relationship(relationship)?;

    tracing::info!(relationship = %id, "Recorded relationship");
    println!("{}", formatter.success(&message));
    Ok(id)
}

/// Execute the relationships command.
pub fn execute_relationships<R>(store: &R, formatter: &Formatter) -> Result<()>
where
    R: ContactRepository<Error = StoreError>,
{
    let relationships = store.list_relationships()?;
    let graph = load_graph(store)?;
    println!("{}", formatter.format_relationships(&relationships, &graph)?);
    Ok(())
}
