//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use kinfolk_domain::{Contact, ContactId, FamilyEdge, InferredRelation, Relationship};
use kinfolk_graph::{FamilyGraph, GraphAnomaly, Siblings};
use kinfolk_reminders::Reminder;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a contact list.
    pub fn format_contacts(&self, contacts: &[Contact]) -> Result<String> {
        match self.format {
            OutputFormat::Json => json(&contacts),
            OutputFormat::Quiet => Ok(ids(contacts.iter().map(|c| &c.id))),
            OutputFormat::Table => {
                if contacts.is_empty() {
                    return Ok(self.colorize("No contacts found.", "yellow"));
                }
                let rows = contacts.iter().map(|c| {
                    [
                        c.id.to_string(),
                        c.display_name(),
                        c.category.map(|cat| cat.as_str().to_string()).unwrap_or_default(),
                        c.birthday.clone().unwrap_or_default(),
                        c.parent_ids.len().to_string(),
                    ]
                });
                Ok(table(["ID", "Name", "Category", "Birthday", "Parents"], rows))
            }
        }
    }

    /// Format one contact with its immediate family and explicit
    /// relationships, given as `(label, other contact's name)` pairs.
    pub fn format_contact_detail(
        &self,
        contact: &Contact,
        parents: &[&Contact],
        children: &[&Contact],
        siblings: &Siblings<'_>,
        relationships: &[(String, String)],
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => json(&serde_json::json!({
                "contact": contact,
                "parents": parents,
                "children": children,
                "siblings": siblings.full,
                "halfSiblings": siblings.half,
                "relationships": relationships
                    .iter()
                    .map(|(label, name)| serde_json::json!({ "label": label, "name": name }))
                    .collect::<Vec<_>>(),
            })),
            OutputFormat::Quiet => Ok(contact.id.to_string()),
            OutputFormat::Table => {
                let mut fields = vec![
                    ["ID".to_string(), contact.id.to_string()],
                    ["Name".to_string(), contact.display_name()],
                ];
                let optional = [
                    ("Category", contact.category.map(|c| c.as_str().to_string())),
                    ("Email", contact.email.clone()),
                    ("Phone", contact.phone.clone()),
                    ("Address", contact.address.clone()),
                    ("Birthday", contact.birthday.clone()),
                    ("Died", contact.death_date.clone()),
                    ("Notes", contact.notes.clone()),
                ];
                fields.extend(
                    optional
                        .into_iter()
                        .filter_map(|(label, value)| value.map(|v| [label.to_string(), v])),
                );
                if contact.is_deceased && contact.death_date.is_none() {
                    fields.push(["Died".to_string(), "yes".to_string()]);
                }
                if !contact.interests.is_empty() {
                    fields.push(["Interests".to_string(), contact.interests.join(", ")]);
                }
                for (label, people) in [
                    ("Parents", parents),
                    ("Children", children),
                    ("Siblings", siblings.full.as_slice()),
                    ("Half-siblings", siblings.half.as_slice()),
                ] {
                    if !people.is_empty() {
                        fields.push([label.to_string(), names(people)]);
                    }
                }
                for (label, name) in relationships {
                    fields.push([label.clone(), name.clone()]);
                }

                let mut builder = Builder::default();
                for field in fields {
                    builder.push_record(field);
                }
                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Format inferred relations.
    pub fn format_relations(&self, relations: &[InferredRelation]) -> Result<String> {
        match self.format {
            OutputFormat::Json => json(&relations),
            OutputFormat::Quiet => Ok(ids(relations.iter().map(|r| &r.contact.id))),
            OutputFormat::Table => {
                if relations.is_empty() {
                    return Ok(self.colorize("No relations found.", "yellow"));
                }
                let rows = relations.iter().map(|r| {
                    [
                        r.relation.label().to_string(),
                        r.contact.display_name(),
                        r.contact.id.to_string(),
                    ]
                });
                Ok(table(["Relation", "Name", "ID"], rows))
            }
        }
    }

    /// Format family edges, naming endpoints through `graph`.
    pub fn format_edges(&self, edges: &[FamilyEdge], graph: &FamilyGraph) -> Result<String> {
        match self.format {
            OutputFormat::Json => json(&edges),
            OutputFormat::Quiet => Ok(edges
                .iter()
                .map(|e| format!("{} {}", e.from, e.to))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if edges.is_empty() {
                    return Ok(self.colorize("No family edges found.", "yellow"));
                }
                let rows = edges.iter().map(|e| {
                    [
                        name_in(graph, &e.from),
                        e.kind.label().to_string(),
                        name_in(graph, &e.to),
                    ]
                });
                Ok(table(["From", "Type", "To"], rows))
            }
        }
    }

    /// Format explicit relationships, naming endpoints through `graph`.
    pub fn format_relationships(
        &self,
        relationships: &[Relationship],
        graph: &FamilyGraph,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => json(&relationships),
            OutputFormat::Quiet => Ok(ids(relationships.iter().map(|r| &r.id))),
            OutputFormat::Table => {
                if relationships.is_empty() {
                    return Ok(self.colorize("No relationships found.", "yellow"));
                }
                let rows = relationships.iter().map(|r| {
                    [
                        name_in(graph, &r.contact_id1),
                        r.type_1_to_2.clone(),
                        name_in(graph, &r.contact_id2),
                        r.type_2_to_1.clone(),
                        r.id.to_string(),
                    ]
                });
                Ok(table(["Contact", "Is", "Of", "Reverse", "ID"], rows))
            }
        }
    }

    /// Format upcoming reminders.
    pub fn format_reminders(&self, reminders: &[Reminder], window_days: u32) -> Result<String> {
        match self.format {
            OutputFormat::Json => json(&reminders),
            OutputFormat::Quiet => Ok(ids(reminders.iter().map(|r| &r.contact_id))),
            OutputFormat::Table => {
                if reminders.is_empty() {
                    let msg = format!("No reminders for the next {} days.", window_days);
                    return Ok(self.colorize(&msg, "yellow"));
                }
                let rows = reminders.iter().map(|r| {
                    [
                        r.when(),
                        r.date.format("%Y-%m-%d").to_string(),
                        r.contact_name.clone(),
                        r.label.clone(),
                    ]
                });
                Ok(table(["When", "Date", "Name", "Occasion"], rows))
            }
        }
    }

    /// Format graph anomalies.
    pub fn format_anomalies(&self, anomalies: &[GraphAnomaly]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let entries: Vec<serde_json::Value> = anomalies
                    .iter()
                    .map(|a| {
                        serde_json::json!({
                            "kind": anomaly_kind(a),
                            "description": a.to_string(),
                        })
                    })
                    .collect();
                json(&entries)
            }
            OutputFormat::Quiet => Ok(anomalies
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if anomalies.is_empty() {
                    return Ok(self.success("No problems found in parent links."));
                }
                let rows = anomalies
                    .iter()
                    .map(|a| [anomaly_kind(a).to_string(), a.to_string()]);
                Ok(table(["Kind", "Description"], rows))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn ids<'a, I, T>(items: I) -> String
where
    I: Iterator<Item = &'a T>,
    T: std::fmt::Display + 'a,
{
    items.map(ToString::to_string).collect::<Vec<_>>().join("\n")
}

fn table<const N: usize>(headers: [&str; N], rows: impl Iterator<Item = [String; N]>) -> String {
    let mut builder = Builder::default();
    builder.push_record(headers);
    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn names(people: &[&Contact]) -> String {
    people
        .iter()
        .map(|c| c.display_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Display name for ids the graph knows, the raw id otherwise
pub(crate) fn name_in(graph: &FamilyGraph, id: &ContactId) -> String {
    graph
        .contact(id)
        .map(Contact::display_name)
        .unwrap_or_else(|| id.to_string())
}

fn anomaly_kind(anomaly: &GraphAnomaly) -> &'static str {
    match anomaly {
        GraphAnomaly::SelfParent { .. } => "self-parent",
        GraphAnomaly::DanglingParent { .. } => "dangling-parent",
        GraphAnomaly::DuplicateParent { .. } => "duplicate-parent",
        GraphAnomaly::Cycle { .. } => "cycle",
    }
}
