//! meiprov: MEI header metadata as JSON and as a PROV-O provenance graph
//!
//! Reads the `<meiHead>` of a Music Encoding Initiative document and offers
//! two independent views of it.
//!
//! # Core Concepts
//!
//! - **Tree**: the parsed element tree ([`TreeNode`])
//! - **Normalizer**: element tree to a JSON-shaped [`StructuredValue`]
//! - **Provenance mapper**: header to typed [`Statement`]s about the file,
//!   the work, its edition and sources, and the agents and activities
//!   involved, written out as Turtle by [`TurtleWriter`]
//!
//! # Example
//!
//! ```
//! use meiprov::{convert_to_turtle, MapperConfig};
//!
//! let xml = r#"<mei><meiHead><fileDesc><titleStmt>
//!     <title type="main">Mass in B minor</title>
//! </titleStmt></fileDesc></meiHead></mei>"#;
//! let ttl = convert_to_turtle(xml, "bach.mei", &MapperConfig::default()).unwrap();
//! assert!(ttl.contains(r#"dcterms:title "Mass in B minor"@main"#));
//! ```

pub mod batch;
pub mod config;
pub mod convert;
mod error;
pub mod graph;
pub mod ident;
pub mod locate;
pub mod normalize;
pub mod provenance;
pub mod tree;

pub use batch::{collect_documents, run_batch, BatchReport, BatchSummary, DocumentOutcome};
pub use config::MapperConfig;
pub use convert::{convert_file, convert_to_graph, convert_to_json, convert_to_turtle, OutputFormat};
pub use error::{ProvError, ProvResult, StructureError};
pub use graph::{Class, Datatype, Literal, LiteralTag, Object, Predicate, Statement, TurtleWriter};
pub use ident::{build_uri, escape_literal, slugify};
pub use locate::locate_header;
pub use normalize::{normalize, Member, NodeValue, StructuredValue};
pub use provenance::{map_header, map_to_graph, EntityRole, MappingContext};
pub use tree::{parse_document, TreeNode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
