//! Provenance graph statements and their Turtle form

mod statement;
mod turtle;
pub mod vocab;

pub use statement::{Class, Datatype, Literal, LiteralTag, Object, Predicate, Statement};
pub use turtle::TurtleWriter;
