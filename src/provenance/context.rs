//! Per-document mapping state
//!
//! One `MappingContext` exists per `map_to_graph` call. It owns the entity,
//! agent and activity tables plus the statement list, and is dropped (or
//! consumed) when the mapping returns. Tables only ever grow: the first
//! registration of a local id wins and later registrations get the existing
//! IRI back.

use crate::config::{resource_iri, MapperConfig};
use crate::graph::Statement;
use crate::ident::{build_uri, fragment_ref, local_uri};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Role of a document-level entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityRole {
    /// The encoded file itself
    File,
    /// The musical work described by the file
    Work,
    /// The edition of the work the file represents
    Edition,
    /// A bibliographic source, numbered from 1 in encounter order
    Source(usize),
}

impl fmt::Display for EntityRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityRole::File => write!(f, "file"),
            EntityRole::Work => write!(f, "work"),
            EntityRole::Edition => write!(f, "edition"),
            EntityRole::Source(n) => write!(f, "source_{}", n),
        }
    }
}

/// Mapping state threaded through every sub-mapping
#[derive(Debug)]
pub struct MappingContext {
    resource_base: String,
    source_label: String,
    file: String,
    work: String,
    edition: String,
    entities: HashMap<EntityRole, String>,
    agents: HashMap<String, String>,
    activities: HashMap<String, String>,
    statements: Vec<Statement>,
}

impl MappingContext {
    /// Fresh tables for one document.
    ///
    /// `source_label` is the document's path or file name; the work and
    /// edition IRIs come from its stem, the file IRI from its name.
    pub fn new(source_label: &str, config: &MapperConfig) -> Self {
        let path = Path::new(source_label);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let file = build_uri(&config.resource("file"), &name);
        let work = build_uri(&config.resource("work"), &stem);
        let edition = build_uri(&config.resource("edition"), &format!("{}_edition", stem));

        let mut entities = HashMap::new();
        entities.insert(EntityRole::File, file.clone());
        entities.insert(EntityRole::Work, work.clone());
        entities.insert(EntityRole::Edition, edition.clone());

        Self {
            resource_base: config.resource_base.clone(),
            source_label: source_label.to_string(),
            file,
            work,
            edition,
            entities,
            agents: HashMap::new(),
            activities: HashMap::new(),
            statements: Vec::new(),
        }
    }

    /// IRI for a resource of the given kind, e.g. `uri("agent", "p1")`.
    ///
    /// The local id is used verbatim; callers slugify only the parts they
    /// synthesize from free text.
    pub fn uri(&self, kind: &str, local_id: &str) -> String {
        local_uri(&resource_iri(&self.resource_base, kind), local_id)
    }

    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn work(&self) -> &str {
        &self.work
    }

    pub fn edition(&self) -> &str {
        &self.edition
    }

    /// Register the `n`th bibliographic source and return its IRI
    pub fn register_source(&mut self, n: usize) -> String {
        let uri = self.uri("source", &EntityRole::Source(n).to_string());
        self.entities
            .entry(EntityRole::Source(n))
            .or_insert(uri)
            .clone()
    }

    pub fn entity(&self, role: EntityRole) -> Option<&str> {
        self.entities.get(&role).map(String::as_str)
    }

    /// Register an agent; returns the IRI the table holds for `local_id`
    pub fn register_agent(&mut self, local_id: &str, uri: String) -> String {
        self.agents
            .entry(local_id.to_string())
            .or_insert(uri)
            .clone()
    }

    pub fn agent(&self, local_id: &str) -> Option<&str> {
        self.agents.get(local_id).map(String::as_str)
    }

    /// Resolve a `#id` reference against the agents registered so far
    pub fn resolve_agent(&self, reference: &str) -> Option<String> {
        fragment_ref(reference)
            .and_then(|id| self.agent(id))
            .map(str::to_string)
    }

    /// Register an activity; returns the IRI the table holds for `local_id`
    pub fn register_activity(&mut self, local_id: &str, uri: String) -> String {
        self.activities
            .entry(local_id.to_string())
            .or_insert(uri)
            .clone()
    }

    pub fn activity(&self, local_id: &str) -> Option<&str> {
        self.activities.get(local_id).map(String::as_str)
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }

    /// Append a statement
    pub fn emit(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn statement_count(&self) -> usize {
        self.statements.len()
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn into_statements(self) -> Vec<Statement> {
        self.statements
    }
}
