//! Batch runs over a scratch corpus on disk.

mod common;

use common::{relative, ScratchCorpus, FULL_HEADER, MINIMAL_HEADER, NO_HEADER, TEI_DOCUMENT, TRUNCATED};
use meiprov::{collect_documents, run_batch, MapperConfig, OutputFormat};

fn mixed_corpus() -> ScratchCorpus {
    let corpus = ScratchCorpus::new();
    corpus.add("bach/mass.mei", FULL_HEADER);
    corpus.add("bach/kyrie.mei", MINIMAL_HEADER);
    corpus.add("broken/truncated.mei", TRUNCATED);
    corpus.add("broken/headless.mei", NO_HEADER);
    corpus.add("tei/letter.tei", TEI_DOCUMENT);
    corpus.add("README.md", "# not a score");
    corpus
}

#[test]
fn test_collects_only_configured_extensions() {
    let corpus = mixed_corpus();

    let files = collect_documents(corpus.root(), &MapperConfig::default());
    let names: Vec<String> = files
        .iter()
        .map(|p| relative(corpus.root(), &p.to_string_lossy()))
        .collect();
    assert_eq!(
        names,
        vec![
            "bach/kyrie.mei",
            "bach/mass.mei",
            "broken/headless.mei",
            "broken/truncated.mei",
            "tei/letter.tei",
        ]
    );

    let config = MapperConfig::from_yaml_str("extensions: [tei]").unwrap();
    assert_eq!(collect_documents(corpus.root(), &config).len(), 1);
}

#[test]
fn test_turtle_batch_isolates_failures() {
    let corpus = mixed_corpus();
    let config = MapperConfig::default();
    let files = collect_documents(corpus.root(), &config);

    let report = run_batch(&files, OutputFormat::Turtle, &config);

    assert_eq!(report.summary.total_files, 5);
    assert_eq!(report.summary.successful_extractions, 2);
    assert_eq!(report.summary.failed_extractions, 3);
    assert!(!report.is_success());

    let failed: Vec<String> = report
        .failures()
        .map(|r| relative(corpus.root(), &r.file_path))
        .collect();
    assert_eq!(
        failed,
        vec!["broken/headless.mei", "broken/truncated.mei", "tei/letter.tei"]
    );
    assert!(report.failures().all(|r| r.error.is_some() && r.turtle.is_none()));
}

#[test]
fn test_combined_turtle() {
    let corpus = mixed_corpus();
    let config = MapperConfig::default();
    let files = collect_documents(corpus.root(), &config);

    let ttl = run_batch(&files, OutputFormat::Turtle, &config).combined_turtle();

    assert!(ttl.starts_with("# Combined PROV-O RDF in Turtle format\n# Generated at: "));
    assert!(ttl.contains("# Total files processed: 5\n"));
    assert!(ttl.contains("# Failed extractions: 3\n"));
    assert_eq!(ttl.matches("@prefix ").count(), 6);
    assert!(ttl.contains("<mei:work/kyrie> dcterms:title \"Kyrie\"@main ."));
    assert!(ttl.contains("<mei:work/mass> dcterms:title \"Mass in B minor\"@main ;"));
    assert!(!ttl.contains("truncated"));
}

#[test]
fn test_json_batch_report() {
    let corpus = mixed_corpus();
    let config = MapperConfig::default();
    let files = collect_documents(corpus.root(), &config);

    let report = run_batch(&files, OutputFormat::Json, &config);
    let json = serde_json::to_value(&report).unwrap();

    assert!(json["timestamp"].is_string());
    assert_eq!(json["format"], "json");
    assert_eq!(json["summary"]["successful_extractions"], 2);

    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 5);
    assert_eq!(results[0]["success"], true);
    assert_eq!(results[0]["metadata"]["fileDesc"]["titleStmt"]["title"], "Kyrie");
    assert!(results[0].get("turtle").is_none());
    assert_eq!(results[4]["success"], false);
    assert!(results[4]["error"].as_str().unwrap().contains("TEI"));
}
