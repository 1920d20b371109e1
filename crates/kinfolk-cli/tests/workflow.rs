//! End-to-end command flows against a file-backed store

use kinfolk_cli::cli::{
    AddArgs, ExportArgs, ImportArgs, LinkArgs, RelateArgs, RelationsArgs, RemindersArgs,
};
use kinfolk_cli::commands;
use kinfolk_cli::config::OutputFormat;
use kinfolk_cli::{CliError, Formatter};
use kinfolk_domain::{ContactRepository, RelationKind};
use kinfolk_reminders::ReminderConfig;
use kinfolk_store::{SqliteStore, StoreError};

fn add(store: &mut SqliteStore, given: &str, parents: &[String]) -> String {
    let args = AddArgs {
        given: given.to_string(),
        family: "Rivera".to_string(),
        birthday: None,
        category: None,
        parents: parents.to_vec(),
    };
    commands::execute_add(args, store, &formatter()).unwrap().to_string()
}

fn formatter() -> Formatter {
    Formatter::new(OutputFormat::Quiet, false)
}

#[test]
fn test_build_family_and_query() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = SqliteStore::new(dir.path().join("family.db")).unwrap();

    let grandma = add(&mut store, "Rosa", &[]);
    let mom = add(&mut store, "Elena", &[grandma.clone()]);
    let uncle = add(&mut store, "Tomas", &[grandma.clone()]);
    let dad = add(&mut store, "Marco", &[]);
    let me = add(&mut store, "Lucia", &[]);
    let cousin = add(&mut store, "Pablo", &[uncle.clone()]);

    for parent in [&mom, &dad] {
        let args = LinkArgs {
            child: me.clone(),
            parent: parent.clone(),
        };
        commands::execute_link(args, &mut store, &formatter()).unwrap();
    }

    let args = RelationsArgs {
        id: me.clone(),
        extended: false,
    };
    let relations = commands::execute_relations(args, &store, &formatter()).unwrap();
    let tagged: Vec<(String, RelationKind)> = relations
        .iter()
        .map(|r| (r.contact.id.to_string(), r.relation))
        .collect();

    assert_eq!(
        tagged,
        vec![
            (mom, RelationKind::Parent),
            (dad, RelationKind::Parent),
            (grandma, RelationKind::Grandparent),
            (uncle, RelationKind::AuntUncle),
            (cousin, RelationKind::Cousin),
        ]
    );
}

#[test]
fn test_export_import_between_databases() {
    let dir = tempfile::tempdir().unwrap();
    let backup = dir.path().join("backup.json");

    let mut source = SqliteStore::new(dir.path().join("a.db")).unwrap();
    let parent = add(&mut source, "Ana", &[]);
    add(&mut source, "Beto", &[parent]);
    commands::execute_export(
        ExportArgs {
            file: Some(backup.clone()),
        },
        &source,
        &formatter(),
    )
    .unwrap();

    let mut target = SqliteStore::new(dir.path().join("b.db")).unwrap();
    commands::execute_import(
        ImportArgs {
            file: backup,
            replace: true,
        },
        &mut target,
        &formatter(),
    )
    .unwrap();

    assert_eq!(target.list().unwrap(), source.list().unwrap());
}

#[test]
fn test_reminders_from_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = SqliteStore::new(dir.path().join("family.db")).unwrap();

    let args = AddArgs {
        given: "Ines".to_string(),
        family: "Rivera".to_string(),
        birthday: Some("1988-01-10".to_string()),
        category: None,
        parents: Vec::new(),
    };
    commands::execute_add(args, &mut store, &formatter()).unwrap();

    let reminders = commands::execute_reminders(
        RemindersArgs {
            days: None,
            today: Some("2025-12-30".to_string()),
        },
        &store,
        &ReminderConfig::default(),
        &formatter(),
    )
    .unwrap();

    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].days_until, 11);
    assert_eq!(reminders[0].contact_name, "Ines Rivera");
}

#[test]
fn test_failed_replace_import_leaves_store_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = SqliteStore::new(dir.path().join("family.db")).unwrap();
    let old = add(&mut store, "Olga", &[]);
    let other = add(&mut store, "Oscar", &[]);
    commands::execute_relate(
        RelateArgs {
            first: old.clone(),
            second: other,
            label: "Friend".to_string(),
            reverse: None,
        },
        &mut store,
        &formatter(),
    )
    .unwrap();
    let relationships_before = store.list_relationships().unwrap();

    let snapshot = dir.path().join("broken.json");
    std::fs::write(
        &snapshot,
        r#"{
            "contacts": [{"id": "new", "givenName": "Nina"}],
            "relationships": [
                {"id": "r1", "contactId1": "new", "contactId2": "x", "type1To2": "Friend", "type2To1": "Friend"},
                {"id": "r1", "contactId1": "new", "contactId2": "y", "type1To2": "Friend", "type2To1": "Friend"}
            ]
        }"#,
    )
    .unwrap();

    let result = commands::execute_import(
        ImportArgs {
            file: snapshot,
            replace: true,
        },
        &mut store,
        &formatter(),
    );
    assert!(matches!(
        result,
        Err(CliError::Store(StoreError::InvalidData(_)))
    ));

    let ids: Vec<String> = store.list().unwrap().iter().map(|c| c.id.to_string()).collect();
    assert_eq!(ids.len(), 2);
    assert_eq!(ids[0], old);
    assert_eq!(store.list_relationships().unwrap(), relationships_before);
}
