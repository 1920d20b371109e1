//! Commands over the inferred family graph.

use super::load_graph;
use crate::cli::RelationsArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use kinfolk_domain::{ContactId, ContactRepository, InferredRelation};
use kinfolk_store::StoreError;

/// Execute the relations command.
pub fn execute_relations<R>(
    args: RelationsArgs,
    store: &R,
    formatter: &Formatter,
) -> Result<Vec<InferredRelation>>
where
    R: ContactRepository<Error = StoreError>,
{
    let graph = load_graph(store)?;
    let id = ContactId::from(args.id.as_str());
    if graph.contact(&id).is_none() {
        return Err(CliError::ContactNotFound(args.id));
    }

    let relations = if args.extended {
        graph.extended_family(&id)
    } else {
        graph.all_family_relations(&id)
    };

    println!("{}", formatter.format_relations(&relations)?);
    Ok(relations)
}

/// Execute the edges command.
pub fn execute_edges<R>(store: &R, formatter: &Formatter) -> Result<()>
where
    R: ContactRepository<Error = StoreError>,
{
    let graph = load_graph(store)?;
    let edges = graph.all_family_edges();
    println!("{}", formatter.format_edges(&edges, &graph)?);
    Ok(())
}

/// Execute the anomalies command.
pub fn execute_anomalies<R>(store: &R, formatter: &Formatter) -> Result<usize>
where
    R: ContactRepository<Error = StoreError>,
{
    let graph = load_graph(store)?;
    println!("{}", formatter.format_anomalies(graph.anomalies())?);
    Ok(graph.anomalies().len())
}
