//! One-document conversion: parse, locate the header, then normalize or map

use crate::config::MapperConfig;
use crate::error::ProvResult;
use crate::graph::{Statement, TurtleWriter};
use crate::locate::locate_header;
use crate::normalize::{normalize, StructuredValue};
use crate::provenance::map_to_graph;
use crate::tree::parse_document;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output view of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Structured-value document as pretty JSON
    Json,
    /// PROV-O provenance graph as Turtle
    Turtle,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "turtle" | "ttl" => Ok(Self::Turtle),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

/// Header of `xml` as a structured value
pub fn convert_to_json(xml: &str) -> ProvResult<StructuredValue> {
    let root = parse_document(xml)?;
    let header = locate_header(&root)?;
    Ok(normalize(header))
}

/// Header of `xml` as provenance statements, labelled with `source_label`
pub fn convert_to_graph(
    xml: &str,
    source_label: &str,
    config: &MapperConfig,
) -> ProvResult<Vec<Statement>> {
    let root = parse_document(xml)?;
    let header = locate_header(&root)?;
    Ok(map_to_graph(header, source_label, config))
}

/// Header of `xml` as a Turtle document
pub fn convert_to_turtle(xml: &str, source_label: &str, config: &MapperConfig) -> ProvResult<String> {
    let statements = convert_to_graph(xml, source_label, config)?;
    Ok(TurtleWriter::new().write(&statements))
}

/// Read and convert one file. The path, as given, is the source label.
pub fn convert_file(path: &Path, format: OutputFormat, config: &MapperConfig) -> ProvResult<String> {
    let xml = std::fs::read_to_string(path)?;
    match format {
        OutputFormat::Json => Ok(convert_to_json(&xml)?.to_json_pretty()?),
        OutputFormat::Turtle => convert_to_turtle(&xml, &path.to_string_lossy(), config),
    }
}
