//! Import and export command implementations.

use crate::cli::{ExportArgs, ImportArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use kinfolk_domain::ContactRepository;
use kinfolk_store::snapshot::export_file_name;
use kinfolk_store::{export_snapshot, import_snapshot, parse_vcards, write_vcards, StoreError};
use std::fs;
use std::path::{Path, PathBuf};

/// File formats understood by import and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Snapshot,
    VCard,
}

impl FileKind {
    fn of(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(FileKind::Snapshot),
            Some("vcf") | Some("vcard") => Ok(FileKind::VCard),
            _ => Err(CliError::InvalidInput(format!(
                "Unsupported file type: {} (expected .json or .vcf)",
                path.display()
            ))),
        }
    }
}

/// Counts of records written by an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Contacts added or updated
    pub contacts: usize,
    /// Relationships added
    pub relationships: usize,
}

/// Execute the import command.
///
/// Snapshots merge by id unless `--replace` is given; vCards always add new
/// contacts.
pub fn execute_import<R>(args: ImportArgs, store: &mut R, formatter: &Formatter) -> Result<ImportSummary>
where
    R: ContactRepository<Error = StoreError>,
{
    let kind = FileKind::of(&args.file)?;
    let text = fs::read_to_string(&args.file)?;

    let summary = match kind {
        FileKind::Snapshot => {
            let snapshot = import_snapshot(&text)?;
            let relationships = if args.replace {
                store.replace_all(&snapshot.contacts, &snapshot.relationships)?;
                snapshot.relationships.len()
            } else {
                store.merge_all(&snapshot.contacts, &snapshot.relationships)?
            };
            ImportSummary {
                contacts: snapshot.contacts.len(),
                relationships,
            }
        }
        FileKind::VCard => {
            if args.replace {
                return Err(CliError::InvalidInput(
                    "--replace only applies to JSON snapshots".to_string(),
                ));
            }
            let contacts = parse_vcards(&text);
            store.merge_all(&contacts, &[])?;
            ImportSummary {
                contacts: contacts.len(),
                relationships: 0,
            }
        }
    };

    tracing::info!(
        file = %args.file.display(),
        contacts = summary.contacts,
        relationships = summary.relationships,
        "Imported"
    );
    println!(
        "{}",
        formatter.success(&format!(
            "Imported {} contact(s) and {} relationship(s) from {}",
            summary.contacts,
            summary.relationships,
            args.file.display()
        ))
    );
    Ok(summary)
}

/// Execute the export command, returning the path written.
pub fn execute_export<R>(args: ExportArgs, store: &R, formatter: &Formatter) -> Result<PathBuf>
where
    R: ContactRepository<Error = StoreError>,
{
    let path = args
        .file
        .unwrap_or_else(|| PathBuf::from(export_file_name(chrono::Local::now().date_naive())));

    let contacts = store.list()?;
    let contents = match FileKind::of(&path)? {
        FileKind::Snapshot => export_snapshot(&contacts, &store.list_relationships()?)?,
        FileKind::VCard => write_vcards(&contacts),
    };
    fs::write(&path, contents)?;

    tracing::info!(file = %path.display(), contacts = contacts.len(), "Exported");
    println!(
        "{}",
        formatter.success(&format!("Exported {} contact(s) to {}", contacts.len(), path.display()))
    );
    Ok(path)
}
