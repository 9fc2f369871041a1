//! Header locator

use crate::error::StructureError;
use crate::tree::TreeNode;

/// Tag of an MEI document root
pub const DOCUMENT_ROOT: &str = "mei";

/// Tag of the metadata header
pub const HEADER: &str = "meiHead";

/// Find the `<meiHead>` subtree of a parsed document.
///
/// Accepts either a full `<mei>` document, whose immediate children are
/// searched, or a standalone `<meiHead>`.
pub fn locate_header(root: &TreeNode) -> Result<&TreeNode, StructureError> {
    match root.tag.as_str() {
        DOCUMENT_ROOT => root.child(HEADER).ok_or(StructureError::HeaderMissing),
        HEADER => Ok(root),
        other => Err(StructureError::NotMei {
            root: other.to_string(),
        }),
    }
}
