//! Parsed markup tree

mod node;
mod parse;

pub use node::{TreeNode, XML_ID};
pub use parse::parse_document;
