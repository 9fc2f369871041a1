//! Batch conversion over a directory tree
//!
//! Every document is converted on its own; a failure is recorded in the
//! report and the run moves on to the next file.

use crate::config::MapperConfig;
use crate::convert::{convert_to_graph, convert_to_json, OutputFormat};
use crate::error::ProvResult;
use crate::graph::TurtleWriter;
use crate::normalize::StructuredValue;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// Result of converting one document
#[derive(Debug, Clone, Serialize)]
pub struct DocumentOutcome {
    pub file_path: String,
    pub success: bool,
    /// Structured header (JSON runs)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<StructuredValue>,
    /// Turtle statements without the prefix preamble (Turtle runs)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turtle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Pass/fail counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total_files: usize,
    pub successful_extractions: usize,
    pub failed_extractions: usize,
}

/// Outcome of a whole batch run
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub timestamp: DateTime<Utc>,
    pub format: OutputFormat,
    pub summary: BatchSummary,
    pub results: Vec<DocumentOutcome>,
}

impl BatchReport {
    /// True when no document failed
    pub fn is_success(&self) -> bool {
        self.summary.failed_extractions == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &DocumentOutcome> {
        self.results.iter().filter(|r| !r.success)
    }

    /// One Turtle document for all successful conversions: a comment
    /// header, the prefix preamble once, then each file's statements.
    pub fn combined_turtle(&self) -> String {
        let mut out = String::new();
        out.push_str("# Combined PROV-O RDF in Turtle format\n");
        out.push_str(&format!("# Generated at: {}\n", self.timestamp.to_rfc3339()));
        out.push_str(&format!("# Total files processed: {}\n", self.summary.total_files));
        out.push_str(&format!(
            "# Successful extractions: {}\n",
            self.summary.successful_extractions
        ));
        out.push_str(&format!("# Failed extractions: {}\n", self.summary.failed_extractions));
        out.push('\n');
        out.push_str(&TurtleWriter::new().preamble());

        for turtle in self.results.iter().filter_map(|r| r.turtle.as_deref()) {
            out.push('\n');
            out.push_str(turtle);
        }
        out
    }
}

/// Files under `root` with one of the configured extensions, sorted
pub fn collect_documents(root: &Path, config: &MapperConfig) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| config.accepts(p))
        .collect();
    files.sort();
    files
}

fn convert_one(path: &Path, format: OutputFormat, config: &MapperConfig) -> ProvResult<DocumentOutcome> {
    let xml = std::fs::read_to_string(path)?;
    let label = path.to_string_lossy().into_owned();

    let mut outcome = DocumentOutcome {
        file_path: label.clone(),
        success: true,
        metadata: None,
        turtle: None,
        error: None,
    };
    match format {
        OutputFormat::Json => {
            outcome.metadata = Some(convert_to_json(&xml)?);
        }
        OutputFormat::Turtle => {
            let statements = convert_to_graph(&xml, &label, config)?;
            outcome.turtle = Some(TurtleWriter::new().write_statements(&statements));
        }
    }
    Ok(outcome)
}

/// Convert every file independently and collect the outcomes
pub fn run_batch(files: &[PathBuf], format: OutputFormat, config: &MapperConfig) -> BatchReport {
    info!(files = files.len(), "processing MEI/TEI files");

    let mut results = Vec::with_capacity(files.len());
    for path in files {
        match convert_one(path, format, config) {
            Ok(outcome) => {
                info!(file = %path.display(), "extracted");
                results.push(outcome);
            }
            Err(e) => {
                warn!(file = %path.display(), error = %e, "extraction failed");
                results.push(DocumentOutcome {
                    file_path: path.to_string_lossy().into_owned(),
                    success: false,
                    metadata: None,
                    turtle: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    let successful = results.iter().filter(|r| r.success).count();
    let summary = BatchSummary {
        total_files: results.len(),
        successful_extractions: successful,
        failed_extractions: results.len() - successful,
    };
    info!(
        total = summary.total_files,
        successful = summary.successful_extractions,
        failed = summary.failed_extractions,
        "batch finished"
    );

    BatchReport {
        timestamp: Utc::now(),
        format,
        summary,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const GOOD: &str = r#"<mei><meiHead><fileDesc><titleStmt><title>Kyrie</title></titleStmt></fileDesc></meiHead></mei>"#;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_collect_documents_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "b.mei", GOOD);
        write(dir.path(), "nested/a.tei", GOOD);
        write(dir.path(), "notes.txt", "x");

        let files = collect_documents(dir.path(), &MapperConfig::default());
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(names, vec!["b.mei", "nested/a.tei"]);
    }

    #[test]
    fn test_failures_do_not_stop_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            write(dir.path(), "a.mei", GOOD),
            write(dir.path(), "b.mei", "<mei><meiHead>"),
            write(dir.path(), "c.mei", "<html/>"),
            write(dir.path(), "d.mei", GOOD),
        ];

        let report = run_batch(&files, OutputFormat::Turtle, &MapperConfig::default());

        assert_eq!(
            report.summary,
            BatchSummary {
                total_files: 4,
                successful_extractions: 2,
                failed_extractions: 2
            }
        );
        assert!(!report.is_success());
        let failed: Vec<_> = report.failures().map(|r| r.file_path.clone()).collect();
        assert!(failed[0].ends_with("b.mei"));
        assert!(failed[1].ends_with("c.mei"));
        assert!(report.results[3].success);
    }

    #[test]
    fn test_combined_turtle_has_one_preamble() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![write(dir.path(), "a.mei", GOOD), write(dir.path(), "b.mei", GOOD)];

        let report = run_batch(&files, OutputFormat::Turtle, &MapperConfig::default());
        let ttl = report.combined_turtle();

        assert!(ttl.starts_with("# Combined PROV-O RDF in Turtle format\n"));
        assert_eq!(ttl.matches("@prefix prov:").count(), 1);
        assert!(ttl.contains("<mei:work/a> dcterms:title \"Kyrie\"@main ."));
        assert!(ttl.contains("<mei:work/b> dcterms:title \"Kyrie\"@main ."));
        assert!(ttl.contains("# Successful extractions: 2"));
    }

    #[test]
    fn test_json_report_shape() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![write(dir.path(), "a.mei", GOOD), write(dir.path(), "x.mei", "<x/>")];

        let report = run_batch(&files, OutputFormat::Json, &MapperConfig::default());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["format"], "json");
        assert_eq!(json["summary"]["total_files"], 2);
        assert_eq!(
            json["results"][0]["metadata"]["fileDesc"]["titleStmt"]["title"],
            "Kyrie"
        );
        assert!(json["results"][0].get("error").is_none());
        assert_eq!(json["results"][1]["success"], false);
        assert!(json["results"][1]["error"]
            .as_str()
            .unwrap()
            .contains("<x>"));
    }

    #[test]
    fn test_json_report_keeps_document_key_order() {
        let dir = tempfile::tempdir().unwrap();
        let xml = r#"<mei><meiHead>
              <revisionDesc/>
              <fileDesc><titleStmt><title type="main" n="1">Kyrie</title></titleStmt></fileDesc>
            </meiHead></mei>"#;
        let files = vec![write(dir.path(), "a.mei", xml)];

        let report = run_batch(&files, OutputFormat::Json, &MapperConfig::default());
        let text = serde_json::to_string(&report).unwrap();
        let expected = serde_json::to_string(&convert_to_json(xml).unwrap()).unwrap();

        assert!(text.contains(&format!("\"metadata\":{}", expected)));
        assert!(expected.starts_with(r#"{"revisionDesc":{},"fileDesc""#));
        assert!(expected.contains(r##"{"@attributes":{"type":"main","n":"1"},"#text":"Kyrie"}"##));
    }

    #[test]
    fn test_empty_batch_is_success() {
        let report = run_batch(&[], OutputFormat::Turtle, &MapperConfig::default());
        assert!(report.is_success());
        assert_eq!(report.summary.total_files, 0);
    }
}
