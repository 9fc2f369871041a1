//! Provenance mapper: MEI header to PROV-O statements
//!
//! The header is walked in a fixed order (file description, encoding
//! description, revision description). Cross-references are resolved in the
//! same single pass, so a `#id` only links to an agent registered earlier
//! in that order.

mod context;
mod encoding;
mod file_desc;
mod revision;

pub use context::{EntityRole, MappingContext};

use crate::config::MapperConfig;
use crate::graph::{Class, Literal, Predicate, Statement};
use crate::tree::TreeNode;
use tracing::debug;

/// `dcterms:type` of the file entity
pub const FILE_TYPE_LABEL: &str = "MEI Music Encoding";

/// Map a header and keep the mapping context for inspection.
pub fn map_header(header: &TreeNode, source_label: &str, config: &MapperConfig) -> MappingContext {
    let mut ctx = MappingContext::new(source_label, config);

    let file = ctx.file().to_string();
    ctx.emit(Statement::typed_as(&file, Class::Entity));
    ctx.emit(Statement::literal(&file, Predicate::DcType, Literal::plain(FILE_TYPE_LABEL)));
    ctx.emit(Statement::literal(&file, Predicate::Source, Literal::plain(source_label)));

    if let Some(file_desc) = header.child("fileDesc") {
        file_desc::map_file_desc(file_desc, &mut ctx);
    }
    if let Some(encoding_desc) = header.child("encodingDesc") {
        encoding::map_encoding_desc(encoding_desc, &mut ctx);
    }
    if let Some(revision_desc) = header.child("revisionDesc") {
        revision::map_revision_desc(revision_desc, &mut ctx);
    }

    debug!(
        source = source_label,
        statements = ctx.statement_count(),
        agents = ctx.agent_count(),
        activities = ctx.activity_count(),
        "mapped header"
    );
    ctx
}

/// Map a located `<meiHead>` to its provenance statements.
///
/// Deterministic for a given header and label. Missing optional sections
/// produce fewer statements, never an error.
pub fn map_to_graph(header: &TreeNode, source_label: &str, config: &MapperConfig) -> Vec<Statement> {
    map_header(header, source_label, config).into_statements()
}
